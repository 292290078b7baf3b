//! Element collection and selection state.

use crate::config::RESIZE_MIN_SIZE;
use crate::element::{Element, ElementId};
use crate::geometry::point_in_rect;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The ordered collection of elements on a canvas.
///
/// Paint order is insertion order: later elements are drawn on top.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CanvasDocument {
    elements: Vec<Element>,
}

impl CanvasDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element on top of the others.
    /// Returns false, leaving the document unchanged, if the id is already present.
    pub fn add_element(&mut self, element: Element) -> bool {
        if self.contains(element.id()) {
            log::warn!("Refusing to add duplicate element {}", element.id());
            return false;
        }
        self.elements.push(element);
        true
    }

    /// Remove an element from the document.
    pub fn remove_element(&mut self, id: ElementId) -> Option<Element> {
        let index = self.index_of(id)?;
        Some(self.elements.remove(index))
    }

    /// Replace the element with the same id, keeping its paint position.
    /// Returns false if no element has that id.
    pub fn replace_element(&mut self, element: Element) -> bool {
        match self.get_element_mut(element.id()) {
            Some(slot) => {
                *slot = element;
                true
            }
            None => false,
        }
    }

    /// Clear all elements from the document.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.index_of(id).is_some()
    }

    /// Get an element by ID.
    pub fn get_element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|element| element.id() == id)
    }

    /// Get a mutable reference to an element by ID.
    pub fn get_element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|element| element.id() == id)
    }

    fn index_of(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|element| element.id() == id)
    }

    /// Elements in paint order (back to front).
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Topmost element whose bounds contain `point`. Rotation is ignored.
    pub fn element_at_point(&self, point: Point) -> Option<&Element> {
        self.elements
            .iter()
            .rev()
            .find(|element| point_in_rect(point, element.bounds()))
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get the number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Serialize the document to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a document from JSON. Repeated ids keep their first occurrence
    /// and every element is sanitized as `update_element` would.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut document: Self = serde_json::from_str(json)?;
        let mut seen = HashSet::new();
        document.elements.retain(|element| {
            let fresh = seen.insert(element.id());
            if !fresh {
                log::warn!("Dropping element with repeated id {}", element.id());
            }
            fresh
        });
        for element in &mut document.elements {
            element.sanitize(RESIZE_MIN_SIZE);
        }
        Ok(document)
    }
}

/// Runtime canvas state: the document plus the current selection.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    /// The document being edited.
    pub document: CanvasDocument,
    selection: Option<ElementId>,
}

impl Canvas {
    /// Create a new canvas with an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a canvas with an existing document.
    pub fn with_document(document: CanvasDocument) -> Self {
        Self {
            document,
            selection: None,
        }
    }

    /// Select an element (replaces the previous selection).
    pub fn select(&mut self, id: ElementId) {
        self.selection = Some(id);
    }

    /// Clear selection.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Id of the selected element, if it still exists.
    pub fn selected_id(&self) -> Option<ElementId> {
        self.selection.filter(|id| self.document.contains(*id))
    }

    /// The selected element. A stale selection reads as nothing selected.
    pub fn selected(&self) -> Option<&Element> {
        self.selection.and_then(|id| self.document.get_element(id))
    }

    /// Check if an element is selected.
    pub fn is_selected(&self, id: ElementId) -> bool {
        self.selected_id() == Some(id)
    }

    /// Replace the element with the same id after sanitizing it.
    /// Unknown ids are ignored and return false.
    pub fn update_element(&mut self, mut updated: Element, min_size: f64) -> bool {
        if !self.document.contains(updated.id()) {
            log::debug!("Ignoring update for unknown element {}", updated.id());
            return false;
        }
        updated.sanitize(min_size);
        self.document.replace_element(updated)
    }

    /// Delete the selected element. No-op when nothing is selected.
    /// Returns the removed element.
    pub fn delete_selected(&mut self) -> Option<Element> {
        let id = self.selection.take()?;
        self.document.remove_element(id)
    }

    /// Remove every element and clear the selection.
    pub fn clear_all(&mut self) {
        self.document.clear();
        self.selection = None;
    }

    /// Read-only view of the ordered collection, for code generation.
    pub fn snapshot(&self) -> &[Element] {
        self.document.elements()
    }
}
