//! Pure geometry helpers used by hit-testing and rotation.

use crate::element::Element;
use crate::handles::{HandleKind, handle_layout};
use kurbo::{Point, Rect};

/// Inclusive point-in-rectangle test.
pub fn point_in_rect(point: Point, rect: Rect) -> bool {
    let rect = rect.abs();
    point.x >= rect.x0 && point.x <= rect.x1 && point.y >= rect.y0 && point.y <= rect.y1
}

/// Find which handle of `element` (if any) is hit at `point`.
///
/// The rotation handle is tested before the resize handles, which are tested
/// in `nw, ne, sw, se, n, s, e, w` order. Rotation is ignored.
pub fn hit_test_handles(element: &Element, point: Point, handle_size: f64) -> Option<HandleKind> {
    handle_layout(element.bounds(), handle_size)
        .into_iter()
        .find(|handle| handle.hit_test(point))
        .map(|handle| handle.kind)
}

/// Angle of `point` around `pivot` in degrees, in `[0, 360)`.
///
/// Straight up is 0 and straight right is 90.
pub fn angle_from_pivot(pivot: Point, point: Point) -> f64 {
    let delta = point - pivot;
    let degrees = delta.y.atan2(delta.x).to_degrees() + 90.0;
    let normalized = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if normalized >= 360.0 { 0.0 } else { normalized }
}
