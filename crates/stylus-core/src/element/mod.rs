//! Element record: a positioned, typed, styled rectangle on the canvas.

mod content;
mod kind;
mod style;

pub use content::Content;
pub use kind::{ElementFamily, ElementType, UnknownElementType};
pub use style::{
    AlignItems, Appearance, Border, BorderStyle, BoxShadow, ColorParseError, DisplayMode,
    FlexDirection, FontWeight, JustifyContent, Layout, SerializableColor, Spacing,
    StyleDeclaration, Typography,
};

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for elements.
pub type ElementId = Uuid;

/// A single element placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub(crate) id: ElementId,
    #[serde(rename = "type")]
    pub kind: ElementType,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    /// Stacking order, assigned from the collection length at creation.
    #[serde(default)]
    pub z_index: i32,
    /// Rotation about the element center, in degrees.
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub appearance: Appearance,
    pub content: Content,
}

impl Element {
    /// Create an element of `kind` covering `bounds` with default appearance and payload.
    pub fn new(kind: ElementType, bounds: Rect) -> Self {
        let bounds = bounds.abs();
        Self {
            id: Uuid::new_v4(),
            kind,
            left: bounds.x0,
            top: bounds.y0,
            width: bounds.width(),
            height: bounds.height(),
            z_index: 0,
            rotation: 0.0,
            appearance: Appearance::default(),
            content: Content::default_for(kind),
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.origin(), self.size())
    }

    pub fn center(&self) -> Point {
        self.bounds().center()
    }

    pub fn set_origin(&mut self, origin: Point) {
        self.left = origin.x;
        self.top = origin.y;
    }

    /// Whether the element renders its own text and therefore carries typography.
    pub fn has_text(&self) -> bool {
        matches!(
            self.kind.family(),
            ElementFamily::Text
                | ElementFamily::Button
                | ElementFamily::Link
                | ElementFamily::Input
                | ElementFamily::Dropdown
                | ElementFamily::Toggle
        )
    }

    /// Positioning declarations: `position`, geometry, `z-index` and the rotation transform.
    pub fn geometry_declarations(&self) -> Vec<StyleDeclaration> {
        let mut decls = vec![
            StyleDeclaration::new("position", "absolute"),
            StyleDeclaration::new("left", format!("{}px", self.left)),
            StyleDeclaration::new("top", format!("{}px", self.top)),
            StyleDeclaration::new("width", format!("{}px", self.width)),
            StyleDeclaration::new("height", format!("{}px", self.height)),
            StyleDeclaration::new("z-index", self.z_index.to_string()),
        ];
        if self.rotation != 0.0 {
            decls.push(StyleDeclaration::new(
                "transform",
                format!("rotate({}deg)", self.rotation),
            ));
        }
        decls
    }

    /// Every style declaration of the element, geometry first.
    pub fn style_declarations(&self) -> Vec<StyleDeclaration> {
        let mut decls = self.geometry_declarations();
        decls.extend(self.appearance.declarations());
        if self.has_text() {
            decls.extend(self.appearance.typography_declarations());
        }
        decls
    }

    /// Repair a record coming from outside the engine.
    ///
    /// Non-finite numbers become 0, width and height are floored at `min_size`,
    /// opacity is clamped, and a payload that does not match the type tag is
    /// replaced by the type's default payload.
    pub fn sanitize(&mut self, min_size: f64) {
        self.left = finite_or_zero(self.left);
        self.top = finite_or_zero(self.top);
        self.width = finite_or_zero(self.width).max(min_size);
        self.height = finite_or_zero(self.height).max(min_size);
        self.rotation = finite_or_zero(self.rotation).rem_euclid(360.0);
        self.appearance.set_opacity(self.appearance.opacity);

        if self.content.family() != self.kind.family() {
            log::warn!(
                "Element {} has a {:?} payload for type {}, resetting",
                self.id,
                self.content.family(),
                self.kind
            );
            self.content = Content::default_for(self.kind);
        }
        self.content.sanitize();
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_bounds() {
        let element = Element::new(ElementType::Div, Rect::new(210.0, 110.0, 10.0, 10.0));
        assert!((element.left - 10.0).abs() < f64::EPSILON);
        assert!((element.top - 10.0).abs() < f64::EPSILON);
        assert!((element.width - 200.0).abs() < f64::EPSILON);
        assert!((element.height - 100.0).abs() < f64::EPSILON);
        assert_eq!(element.center(), Point::new(110.0, 60.0));
    }

    #[test]
    fn test_unique_ids() {
        let a = Element::new(ElementType::Div, Rect::new(0.0, 0.0, 10.0, 10.0));
        let b = Element::new(ElementType::Div, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_geometry_declarations() {
        let mut element = Element::new(ElementType::Div, Rect::new(10.0, 20.0, 110.0, 70.0));
        element.z_index = 3;
        let decls = element.geometry_declarations();
        assert_eq!(decls[0], StyleDeclaration::new("position", "absolute"));
        assert_eq!(decls[1], StyleDeclaration::new("left", "10px"));
        assert_eq!(decls[4], StyleDeclaration::new("height", "50px"));
        assert_eq!(decls[5], StyleDeclaration::new("z-index", "3"));
        assert_eq!(decls.len(), 6);

        element.rotation = 45.0;
        let decls = element.geometry_declarations();
        assert_eq!(
            decls.last(),
            Some(&StyleDeclaration::new("transform", "rotate(45deg)"))
        );
    }

    #[test]
    fn test_typography_only_for_text_bearing_types() {
        let div = Element::new(ElementType::Div, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(!div.style_declarations().iter().any(|d| d.property == "font-size"));

        let button = Element::new(ElementType::Button, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(button.style_declarations().iter().any(|d| d.property == "font-size"));
    }

    #[test]
    fn test_sanitize() {
        let mut element = Element::new(ElementType::Progress, Rect::new(0.0, 0.0, 50.0, 50.0));
        element.left = f64::NAN;
        element.top = f64::INFINITY;
        element.width = 2.0;
        element.rotation = -90.0;
        element.appearance.opacity = 3.0;
        element.content = Content::Container;

        element.sanitize(10.0);
        assert!(element.left.abs() < f64::EPSILON);
        assert!(element.top.abs() < f64::EPSILON);
        assert!((element.width - 10.0).abs() < f64::EPSILON);
        assert!((element.height - 50.0).abs() < f64::EPSILON);
        assert!((element.rotation - 270.0).abs() < f64::EPSILON);
        assert!((element.appearance.opacity - 1.0).abs() < f64::EPSILON);
        assert_eq!(element.content, Content::default_for(ElementType::Progress));
    }

    #[test]
    fn test_json_round_trip_keeps_payload() {
        let mut element = Element::new(ElementType::Link, Rect::new(0.0, 0.0, 80.0, 20.0));
        element.content = Content::Link {
            text: "Docs".to_string(),
            href: "https://example.com".to_string(),
            target: Some("_blank".to_string()),
        };
        let json = serde_json::to_string(&element).unwrap();
        assert!(json.contains("\"type\":\"a\""));
        let back: Element = serde_json::from_str(&json).unwrap();
        assert_eq!(back, element);
    }
}
