//! Pointer-driven interaction state machine.
//!
//! A gesture starts on pointer-down, is classified once against the current
//! canvas, and ends on pointer-up or pointer-leave. Every handler returns the
//! [`CanvasEvent`]s it caused so hosts can re-render and log.

use crate::canvas::Canvas;
use crate::config::EngineConfig;
use crate::editing::EditRequest;
use crate::element::{Element, ElementId, ElementType};
use crate::factory;
use crate::geometry::{angle_from_pivot, hit_test_handles};
use crate::handles::{HandleKind, ResizeHandle};
use crate::input::{ClickTracker, Modifiers, PointerEvent};
use crate::projection::{ProjectionContext, VisualDescription, project};
use kurbo::{Point, Rect, Vec2};
use std::time::Instant;

/// Something that changed on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasEvent {
    ElementCreated(ElementId),
    SelectionChanged(Option<ElementId>),
    ElementMoved(ElementId),
    ElementResized(ElementId),
    ElementRotated(ElementId),
    /// A draw ended below the commit threshold.
    DrawDiscarded,
    EditRequested(EditRequest),
}

/// State of the current gesture.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum GestureState {
    #[default]
    Idle,
    /// Drawing a new element from `anchor`. The provisional element appears on the first move.
    Drawing {
        anchor: Point,
        provisional: Option<Element>,
        /// Selection before the press, restored if the draw is discarded.
        previous_selection: Option<ElementId>,
    },
    /// Moving an element; `offset` is pointer minus element origin at press time.
    Dragging { id: ElementId, offset: Vec2 },
    /// Resizing with a handle; `anchor` is the last pointer position applied.
    Resizing {
        id: ElementId,
        handle: ResizeHandle,
        anchor: Point,
    },
    Rotating { id: ElementId, pivot: Point },
}

impl GestureState {
    pub fn is_idle(&self) -> bool {
        matches!(self, GestureState::Idle)
    }
}

/// The canvas interaction engine.
#[derive(Debug, Clone, Default)]
pub struct InteractionEngine {
    canvas: Canvas,
    config: EngineConfig,
    armed: ElementType,
    gesture: GestureState,
    clicks: ClickTracker,
    pending_double_click: Option<Point>,
}

impl InteractionEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn with_canvas(canvas: Canvas, config: EngineConfig) -> Self {
        Self {
            canvas,
            config,
            ..Self::default()
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    pub fn armed_type(&self) -> ElementType {
        self.armed
    }

    /// Set the element type created by the next draw or click.
    pub fn set_armed_type(&mut self, kind: ElementType) {
        log::debug!("Armed element type: {}", kind);
        self.armed = kind;
    }

    /// The element being drawn, if any.
    pub fn provisional(&self) -> Option<&Element> {
        match &self.gesture {
            GestureState::Drawing { provisional, .. } => provisional.as_ref(),
            _ => None,
        }
    }

    pub fn selected_id(&self) -> Option<ElementId> {
        self.canvas.selected_id()
    }

    /// Read-only ordered collection for code generation.
    pub fn snapshot(&self) -> &[Element] {
        self.canvas.snapshot()
    }

    /// Replace an element by id. Unknown ids are ignored and return false.
    pub fn update_element(&mut self, updated: Element) -> bool {
        self.canvas.update_element(updated, self.config.resize_min_size)
    }

    /// Remove the selected element, if any.
    pub fn delete_selected(&mut self) -> Option<Element> {
        let removed = self.canvas.delete_selected();
        if let Some(element) = &removed {
            log::debug!("Deleted element {}", element.id());
        }
        removed
    }

    /// Remove every element and clear the selection.
    pub fn clear_all(&mut self) {
        log::debug!("Clearing {} elements", self.canvas.document.len());
        self.canvas.clear_all();
    }

    /// Projection of every committed element in paint order, then the provisional one.
    pub fn scene(&self) -> Vec<VisualDescription> {
        let ctx = ProjectionContext::new(&self.config, self.canvas.selected_id());
        let mut scene: Vec<_> = self
            .canvas
            .snapshot()
            .iter()
            .map(|element| project(element, &ctx))
            .collect();
        if let Some(provisional) = self.provisional() {
            scene.push(project(provisional, &ctx.provisional()));
        }
        scene
    }

    /// Dispatch a raw pointer event, detecting double clicks from presses.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> Vec<CanvasEvent> {
        self.handle_pointer_event_at(event, Instant::now())
    }

    /// Like [`Self::handle_pointer_event`], with an explicit timestamp.
    pub fn handle_pointer_event_at(&mut self, event: PointerEvent, now: Instant) -> Vec<CanvasEvent> {
        match event {
            PointerEvent::Down {
                position,
                modifiers,
            } => {
                if self.gesture.is_idle() && self.clicks.register(position, now) {
                    self.pending_double_click = Some(position);
                }
                self.pointer_down(position, modifiers)
            }
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up { position } => {
                let mut events = self.pointer_up(position);
                if let Some(position) = self.pending_double_click.take() {
                    events.extend(self.double_activate(position));
                }
                events
            }
            PointerEvent::Leave => {
                self.pending_double_click = None;
                self.pointer_leave()
            }
            PointerEvent::DoubleClick { position } => {
                self.clicks.reset();
                self.double_activate(position)
            }
        }
    }

    /// Classify a press and start a gesture.
    pub fn pointer_down(&mut self, position: Point, modifiers: Modifiers) -> Vec<CanvasEvent> {
        if !self.gesture.is_idle() {
            log::debug!("Ignoring pointer down during {:?}", self.gesture);
            return Vec::new();
        }

        let handle_size = self.config.handle_size;
        let mut events = Vec::new();

        // Handles of the selected element win over everything else.
        if let Some(selected) = self.canvas.selected() {
            match hit_test_handles(selected, position, handle_size) {
                Some(HandleKind::Rotate) => {
                    log::debug!("Rotating element {}", selected.id());
                    self.gesture = GestureState::Rotating {
                        id: selected.id(),
                        pivot: selected.center(),
                    };
                    return events;
                }
                Some(HandleKind::Resize(handle)) => {
                    log::debug!("Resizing element {} with {}", selected.id(), handle.name());
                    self.gesture = GestureState::Resizing {
                        id: selected.id(),
                        handle,
                        anchor: position,
                    };
                    return events;
                }
                None => {}
            }
        }

        let hit = self
            .canvas
            .document
            .element_at_point(position)
            .map(|element| {
                let handle = match hit_test_handles(element, position, handle_size) {
                    Some(HandleKind::Resize(handle)) => Some(handle),
                    _ => None,
                };
                (element.id(), element.origin(), handle)
            });

        if let Some((id, _, Some(handle))) = hit {
            log::debug!("Resizing element {} with {}", id, handle.name());
            self.select(id, &mut events);
            self.gesture = GestureState::Resizing {
                id,
                handle,
                anchor: position,
            };
            return events;
        }

        match hit {
            None if self.armed.creates_on_click() => {
                let bounds = Rect::from_origin_size(position, self.config.click_create_size);
                let element = factory::create(self.armed, bounds, self.next_z_index());
                let id = element.id();
                log::debug!("Placed {} element {} at {:?}", self.armed, id, position);
                self.canvas.document.add_element(element);
                events.push(CanvasEvent::ElementCreated(id));
                self.select(id, &mut events);
            }
            None => self.start_drawing(position, &mut events),
            Some(_) if modifiers.force_new() => self.start_drawing(position, &mut events),
            Some((id, origin, None)) => {
                log::debug!("Dragging element {}", id);
                self.select(id, &mut events);
                self.gesture = GestureState::Dragging {
                    id,
                    offset: position - origin,
                };
            }
            // Handle hits returned above.
            Some((_, _, Some(_))) => {}
        }

        events
    }

    /// Update the active gesture. Moves that change nothing emit no events.
    pub fn pointer_move(&mut self, position: Point) -> Vec<CanvasEvent> {
        let min_size = self.config.resize_min_size;
        let z_index = self.next_z_index();

        match &mut self.gesture {
            GestureState::Idle => Vec::new(),
            GestureState::Drawing {
                anchor,
                provisional,
                ..
            } => {
                let bounds = Rect::from_points(*anchor, position);
                match provisional {
                    Some(element) => {
                        element.set_origin(bounds.origin());
                        element.width = bounds.width();
                        element.height = bounds.height();
                    }
                    None => {
                        *provisional = Some(factory::create(self.armed, bounds, z_index));
                    }
                }
                log::trace!("Drawing {:?}", bounds);
                Vec::new()
            }
            GestureState::Dragging { id, offset } => {
                let Some(element) = self.canvas.document.get_element_mut(*id) else {
                    return Vec::new();
                };
                let origin = position - *offset;
                if origin == element.origin() {
                    return Vec::new();
                }
                element.set_origin(origin);
                log::trace!("Moved {} to {:?}", id, element.origin());
                vec![CanvasEvent::ElementMoved(*id)]
            }
            GestureState::Resizing { id, handle, anchor } => {
                let Some(element) = self.canvas.document.get_element_mut(*id) else {
                    return Vec::new();
                };
                let delta = position - *anchor;
                if delta == Vec2::ZERO {
                    return Vec::new();
                }
                handle.apply(element, delta, min_size);
                *anchor = position;
                log::trace!("Resized {} to {:?}", id, element.bounds());
                vec![CanvasEvent::ElementResized(*id)]
            }
            GestureState::Rotating { id, pivot } => {
                let Some(element) = self.canvas.document.get_element_mut(*id) else {
                    return Vec::new();
                };
                let rotation = angle_from_pivot(*pivot, position);
                if rotation == element.rotation {
                    return Vec::new();
                }
                element.rotation = rotation;
                log::trace!("Rotated {} to {}deg", id, element.rotation);
                vec![CanvasEvent::ElementRotated(*id)]
            }
        }
    }

    /// Apply the release position and end the gesture.
    ///
    /// A release where the last move already was emits only the gesture's end events.
    pub fn pointer_up(&mut self, position: Point) -> Vec<CanvasEvent> {
        let mut events = self.pointer_move(position);
        events.extend(self.finish_gesture());
        events
    }

    /// The pointer left the canvas: end the gesture as a release would.
    pub fn pointer_leave(&mut self) -> Vec<CanvasEvent> {
        self.finish_gesture()
    }

    /// Double activation: select the element under the pointer and ask for its fields.
    pub fn double_activate(&mut self, position: Point) -> Vec<CanvasEvent> {
        if !self.gesture.is_idle() {
            return Vec::new();
        }
        let Some(element) = self.canvas.document.element_at_point(position) else {
            return Vec::new();
        };

        let id = element.id();
        let requests = element.edit_requests();
        log::debug!("Edit requested for {} ({} fields)", id, requests.len());

        let mut events = Vec::new();
        self.select(id, &mut events);
        events.extend(requests.into_iter().map(CanvasEvent::EditRequested));
        events
    }

    fn finish_gesture(&mut self) -> Vec<CanvasEvent> {
        let mut events = Vec::new();
        match std::mem::take(&mut self.gesture) {
            GestureState::Drawing {
                provisional: Some(mut element),
                ..
            } if element.width > self.config.draw_commit_threshold
                && element.height > self.config.draw_commit_threshold =>
            {
                element.z_index = self.next_z_index();
                let id = element.id();
                log::debug!(
                    "Committed {} element {} at {:?}",
                    element.kind,
                    id,
                    element.bounds()
                );
                self.canvas.document.add_element(element);
                events.push(CanvasEvent::ElementCreated(id));
                self.select(id, &mut events);
            }
            GestureState::Drawing {
                previous_selection, ..
            } => {
                log::debug!("Discarded draw below commit threshold");
                events.push(CanvasEvent::DrawDiscarded);
                if let Some(id) = previous_selection.filter(|id| self.canvas.document.contains(*id)) {
                    self.select(id, &mut events);
                }
            }
            _ => {}
        }
        events
    }

    fn start_drawing(&mut self, anchor: Point, events: &mut Vec<CanvasEvent>) {
        log::debug!("Drawing {} from {:?}", self.armed, anchor);
        let previous_selection = self.canvas.selected_id();
        if previous_selection.is_some() {
            events.push(CanvasEvent::SelectionChanged(None));
        }
        self.canvas.clear_selection();
        self.gesture = GestureState::Drawing {
            anchor,
            provisional: None,
            previous_selection,
        };
    }

    fn select(&mut self, id: ElementId, events: &mut Vec<CanvasEvent>) {
        if self.canvas.selected_id() != Some(id) {
            events.push(CanvasEvent::SelectionChanged(Some(id)));
        }
        self.canvas.select(id);
    }

    fn next_z_index(&self) -> i32 {
        i32::try_from(self.canvas.document.len()).unwrap_or(i32::MAX)
    }
}
