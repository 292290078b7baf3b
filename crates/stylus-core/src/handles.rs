//! Selection handle layout and the resize rules attached to each handle.
//!
//! The layout produced here is shared by hit-testing and by the render
//! projection, so a handle is always grabbable exactly where it is drawn.

use crate::element::Element;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Distance from the top edge to the rotation handle.
pub const ROTATION_HANDLE_OFFSET: f64 = 25.0;

/// One of the eight resize handles, named by compass direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeHandle {
    #[serde(rename = "nw")]
    NorthWest,
    #[serde(rename = "ne")]
    NorthEast,
    #[serde(rename = "sw")]
    SouthWest,
    #[serde(rename = "se")]
    SouthEast,
    #[serde(rename = "n")]
    North,
    #[serde(rename = "s")]
    South,
    #[serde(rename = "e")]
    East,
    #[serde(rename = "w")]
    West,
}

impl ResizeHandle {
    /// All resize handles, in hit-test order.
    pub const ALL: [ResizeHandle; 8] = [
        ResizeHandle::NorthWest,
        ResizeHandle::NorthEast,
        ResizeHandle::SouthWest,
        ResizeHandle::SouthEast,
        ResizeHandle::North,
        ResizeHandle::South,
        ResizeHandle::East,
        ResizeHandle::West,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ResizeHandle::NorthWest => "nw",
            ResizeHandle::NorthEast => "ne",
            ResizeHandle::SouthWest => "sw",
            ResizeHandle::SouthEast => "se",
            ResizeHandle::North => "n",
            ResizeHandle::South => "s",
            ResizeHandle::East => "e",
            ResizeHandle::West => "w",
        }
    }

    /// Anchor point of the handle on `bounds`.
    pub fn position(&self, bounds: Rect) -> Point {
        let center = bounds.center();
        match self {
            ResizeHandle::NorthWest => Point::new(bounds.x0, bounds.y0),
            ResizeHandle::NorthEast => Point::new(bounds.x1, bounds.y0),
            ResizeHandle::SouthWest => Point::new(bounds.x0, bounds.y1),
            ResizeHandle::SouthEast => Point::new(bounds.x1, bounds.y1),
            ResizeHandle::North => Point::new(center.x, bounds.y0),
            ResizeHandle::South => Point::new(center.x, bounds.y1),
            ResizeHandle::East => Point::new(bounds.x1, center.y),
            ResizeHandle::West => Point::new(bounds.x0, center.y),
        }
    }

    /// Apply an incremental pointer delta to `element`.
    ///
    /// Edges owned by the handle follow the pointer; the opposite edges stay
    /// put. Width and height are floored at `min_size` after the update, and
    /// any origin shift already applied is kept.
    pub fn apply(&self, element: &mut Element, delta: Vec2, min_size: f64) {
        let (dx, dy) = (delta.x, delta.y);
        match self {
            ResizeHandle::NorthWest => {
                element.left += dx;
                element.top += dy;
                element.width -= dx;
                element.height -= dy;
            }
            ResizeHandle::NorthEast => {
                element.top += dy;
                element.width += dx;
                element.height -= dy;
            }
            ResizeHandle::SouthWest => {
                element.left += dx;
                element.width -= dx;
                element.height += dy;
            }
            ResizeHandle::SouthEast => {
                element.width += dx;
                element.height += dy;
            }
            ResizeHandle::North => {
                element.top += dy;
                element.height -= dy;
            }
            ResizeHandle::South => {
                element.height += dy;
            }
            ResizeHandle::East => {
                element.width += dx;
            }
            ResizeHandle::West => {
                element.left += dx;
                element.width -= dx;
            }
        }
        element.width = element.width.max(min_size);
        element.height = element.height.max(min_size);
    }
}

/// Type of selection handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandleKind {
    /// Rotation handle above the top edge.
    Rotate,
    Resize(ResizeHandle),
}

/// A handle with its anchor position and square hit region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Handle {
    pub kind: HandleKind,
    pub position: Point,
    pub region: Rect,
}

impl Handle {
    pub fn new(kind: HandleKind, position: Point, handle_size: f64) -> Self {
        let half = handle_size / 2.0;
        Self {
            kind,
            position,
            region: Rect::new(
                position.x - half,
                position.y - half,
                position.x + half,
                position.y + half,
            ),
        }
    }

    /// Check if a point hits this handle's region (inclusive).
    pub fn hit_test(&self, point: Point) -> bool {
        crate::geometry::point_in_rect(point, self.region)
    }
}

/// Position of the rotation handle for `bounds`.
pub fn rotation_handle_position(bounds: Rect) -> Point {
    Point::new(bounds.center().x, bounds.y0 - ROTATION_HANDLE_OFFSET)
}

/// The nine handles of a selected element: rotation first, then the resize handles.
pub fn handle_layout(bounds: Rect, handle_size: f64) -> Vec<Handle> {
    let mut handles = Vec::with_capacity(9);
    handles.push(Handle::new(
        HandleKind::Rotate,
        rotation_handle_position(bounds),
        handle_size,
    ));
    handles.extend(ResizeHandle::ALL.iter().map(|resize| {
        Handle::new(
            HandleKind::Resize(*resize),
            resize.position(bounds),
            handle_size,
        )
    }));
    handles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementType;

    fn element() -> Element {
        Element::new(ElementType::Div, Rect::new(10.0, 10.0, 210.0, 110.0))
    }

    #[test]
    fn test_layout_positions() {
        let handles = handle_layout(Rect::new(10.0, 10.0, 210.0, 110.0), 8.0);
        assert_eq!(handles.len(), 9);
        assert_eq!(handles[0].kind, HandleKind::Rotate);
        assert_eq!(handles[0].position, Point::new(110.0, -15.0));

        let east = handles
            .iter()
            .find(|h| h.kind == HandleKind::Resize(ResizeHandle::East))
            .unwrap();
        assert_eq!(east.position, Point::new(210.0, 60.0));
        assert_eq!(east.region, Rect::new(206.0, 56.0, 214.0, 64.0));
    }

    #[test]
    fn test_handle_region_is_inclusive() {
        let handle = Handle::new(HandleKind::Rotate, Point::new(0.0, 0.0), 8.0);
        assert!(handle.hit_test(Point::new(4.0, -4.0)));
        assert!(!handle.hit_test(Point::new(4.1, 0.0)));
    }

    #[test]
    fn test_se_resize_keeps_origin() {
        let mut el = element();
        ResizeHandle::SouthEast.apply(&mut el, Vec2::new(-500.0, 30.0), 10.0);
        assert!((el.left - 10.0).abs() < f64::EPSILON);
        assert!((el.top - 10.0).abs() < f64::EPSILON);
        assert!((el.width - 10.0).abs() < f64::EPSILON);
        assert!((el.height - 130.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_nw_resize() {
        let mut el = element();
        ResizeHandle::NorthWest.apply(&mut el, Vec2::new(20.0, -10.0), 10.0);
        assert!((el.left - 30.0).abs() < f64::EPSILON);
        assert!((el.top - 0.0).abs() < f64::EPSILON);
        assert!((el.width - 180.0).abs() < f64::EPSILON);
        assert!((el.height - 110.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_nw_clamp_keeps_origin_shift() {
        let mut el = element();
        ResizeHandle::NorthWest.apply(&mut el, Vec2::new(250.0, 0.0), 10.0);
        assert!((el.left - 260.0).abs() < f64::EPSILON);
        assert!((el.width - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_edge_handles_touch_one_axis() {
        let mut el = element();
        ResizeHandle::East.apply(&mut el, Vec2::new(50.0, 40.0), 10.0);
        assert!((el.width - 250.0).abs() < f64::EPSILON);
        assert!((el.height - 100.0).abs() < f64::EPSILON);

        ResizeHandle::North.apply(&mut el, Vec2::new(50.0, 40.0), 10.0);
        assert!((el.top - 50.0).abs() < f64::EPSILON);
        assert!((el.height - 60.0).abs() < f64::EPSILON);
        assert!((el.left - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_corner_handles_ne_sw() {
        let mut el = element();
        ResizeHandle::NorthEast.apply(&mut el, Vec2::new(20.0, 10.0), 10.0);
        assert_eq!(el.bounds(), Rect::new(10.0, 20.0, 230.0, 110.0));

        let mut el = element();
        ResizeHandle::SouthWest.apply(&mut el, Vec2::new(20.0, 10.0), 10.0);
        assert_eq!(el.bounds(), Rect::new(30.0, 10.0, 210.0, 120.0));
    }

    #[test]
    fn test_edge_handles_s_w() {
        let mut el = element();
        ResizeHandle::South.apply(&mut el, Vec2::new(20.0, 10.0), 10.0);
        assert_eq!(el.bounds(), Rect::new(10.0, 10.0, 210.0, 120.0));

        let mut el = element();
        ResizeHandle::West.apply(&mut el, Vec2::new(20.0, 10.0), 10.0);
        assert_eq!(el.bounds(), Rect::new(30.0, 10.0, 210.0, 110.0));
    }

    #[test]
    fn test_ne_sw_clamp() {
        let mut el = element();
        ResizeHandle::NorthEast.apply(&mut el, Vec2::new(-300.0, 300.0), 10.0);
        assert!((el.left - 10.0).abs() < f64::EPSILON);
        assert!((el.width - 10.0).abs() < f64::EPSILON);
        assert!((el.height - 10.0).abs() < f64::EPSILON);

        let mut el = element();
        ResizeHandle::SouthWest.apply(&mut el, Vec2::new(300.0, -300.0), 10.0);
        assert!((el.top - 10.0).abs() < f64::EPSILON);
        assert!((el.width - 10.0).abs() < f64::EPSILON);
        assert!((el.height - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resize_handle_serde_names() {
        let json = serde_json::to_string(&HandleKind::Resize(ResizeHandle::NorthEast)).unwrap();
        assert_eq!(json, r#"{"Resize":"ne"}"#);
        assert_eq!(ResizeHandle::NorthEast.name(), "ne");
    }
}
