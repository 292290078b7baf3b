//! Render projection: what a host renderer needs to draw one element.

use crate::config::EngineConfig;
use crate::element::{Content, Element, ElementId, ElementType, SerializableColor, StyleDeclaration};
use crate::handles::{Handle, handle_layout};
use kurbo::Rect;
use peniko::Color;
use serde::Serialize;

/// Inputs of a projection besides the element itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionContext {
    /// Currently selected element, if any.
    pub selected: Option<ElementId>,
    /// The element is the one being drawn and is not in the collection yet.
    pub provisional: bool,
    pub handle_size: f64,
    pub provisional_opacity: f64,
}

impl ProjectionContext {
    pub fn new(config: &EngineConfig, selected: Option<ElementId>) -> Self {
        Self {
            selected,
            provisional: false,
            handle_size: config.handle_size,
            provisional_opacity: config.provisional_opacity,
        }
    }

    pub fn provisional(mut self) -> Self {
        self.provisional = true;
        self
    }
}

/// Visual description of one element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualDescription {
    pub id: ElementId,
    pub kind: ElementType,
    pub bounds: Rect,
    /// Rotation about the center, in degrees.
    pub rotation: f64,
    pub declarations: Vec<StyleDeclaration>,
    pub background: SerializableColor,
    pub border_color: SerializableColor,
    pub border_width: f64,
    pub corner_radius: f64,
    /// Opacity after the provisional reduction.
    pub opacity: f64,
    pub content: Content,
    pub provisional: bool,
    /// Handles, present only for the selected committed element.
    pub handles: Vec<Handle>,
}

impl VisualDescription {
    /// Background with the effective opacity applied.
    pub fn fill_color(&self) -> Color {
        with_opacity(self.background, self.opacity)
    }

    /// Border color with the effective opacity applied.
    pub fn stroke_color(&self) -> Color {
        with_opacity(self.border_color, self.opacity)
    }

    pub fn is_selected(&self) -> bool {
        !self.handles.is_empty()
    }
}

fn with_opacity(color: SerializableColor, opacity: f64) -> Color {
    let alpha = (f64::from(color.a) * opacity.clamp(0.0, 1.0)).round() as u8;
    Color::from_rgba8(color.r, color.g, color.b, alpha)
}

/// Project an element. Pure: the same inputs always give the same output.
pub fn project(element: &Element, ctx: &ProjectionContext) -> VisualDescription {
    let opacity = if ctx.provisional {
        element.appearance.opacity * ctx.provisional_opacity
    } else {
        element.appearance.opacity
    };

    let handles = if !ctx.provisional && ctx.selected == Some(element.id()) {
        handle_layout(element.bounds(), ctx.handle_size)
    } else {
        Vec::new()
    };

    let mut declarations = element.style_declarations();
    if ctx.provisional {
        if let Some(decl) = declarations.iter_mut().find(|d| d.property == "opacity") {
            decl.value = opacity.to_string();
        }
    }

    VisualDescription {
        id: element.id(),
        kind: element.kind,
        bounds: element.bounds(),
        rotation: element.rotation,
        declarations,
        background: element.appearance.background_color,
        border_color: element.appearance.border.color,
        border_width: element.appearance.border.width,
        corner_radius: element.appearance.border.radius,
        opacity,
        content: element.content.clone(),
        provisional: ctx.provisional,
        handles,
    }
}
