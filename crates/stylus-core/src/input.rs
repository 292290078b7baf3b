//! Pointer events delivered by the host and double-click detection.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const ALT: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: true,
        meta: false,
    };

    /// Whether a press should start a new element even on top of an existing one.
    pub fn force_new(&self) -> bool {
        self.alt
    }
}

/// Pointer event in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: Point,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Move {
        position: Point,
    },
    Up {
        position: Point,
    },
    /// The pointer left the canvas.
    Leave,
    DoubleClick {
        position: Point,
    },
}

/// Double-click detection constants.
const DOUBLE_CLICK_TIME: Duration = Duration::from_millis(500);
const DOUBLE_CLICK_DISTANCE: f64 = 5.0;

/// Detects double clicks from a stream of presses.
#[derive(Debug, Clone, Default)]
pub struct ClickTracker {
    last_click: Option<(Instant, Point)>,
}

impl ClickTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press at `now`. Returns true if it completes a double click.
    pub fn register(&mut self, position: Point, now: Instant) -> bool {
        if let Some((last_time, last_position)) = self.last_click {
            let elapsed = now.saturating_duration_since(last_time);
            if elapsed <= DOUBLE_CLICK_TIME
                && last_position.distance(position) <= DOUBLE_CLICK_DISTANCE
            {
                // Reset so a third press does not count as another double click
                self.last_click = None;
                return true;
            }
        }
        self.last_click = Some((now, position));
        false
    }

    pub fn reset(&mut self) {
        self.last_click = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_force_new_is_alt() {
        assert!(Modifiers::ALT.force_new());
        assert!(!Modifiers::NONE.force_new());
        let shift = Modifiers {
            shift: true,
            ..Modifiers::default()
        };
        assert!(!shift.force_new());
    }

    #[test]
    fn test_double_click_detection() {
        let mut tracker = ClickTracker::new();
        let start = Instant::now();
        assert!(!tracker.register(Point::new(10.0, 10.0), start));
        assert!(tracker.register(
            Point::new(12.0, 13.0),
            start + Duration::from_millis(200)
        ));
        // Third press starts a new sequence
        assert!(!tracker.register(
            Point::new(12.0, 13.0),
            start + Duration::from_millis(300)
        ));
    }

    #[test]
    fn test_slow_or_distant_clicks_are_single() {
        let mut tracker = ClickTracker::new();
        let start = Instant::now();
        tracker.register(Point::new(10.0, 10.0), start);
        assert!(!tracker.register(
            Point::new(10.0, 10.0),
            start + Duration::from_millis(600)
        ));
        assert!(!tracker.register(
            Point::new(30.0, 10.0),
            start + Duration::from_millis(700)
        ));
    }

    #[test]
    fn test_pointer_event_serde() {
        let event: PointerEvent =
            serde_json::from_str(r#"{"Down":{"position":{"x":1.0,"y":2.0}}}"#).unwrap();
        assert_eq!(
            event,
            PointerEvent::Down {
                position: Point::new(1.0, 2.0),
                modifiers: Modifiers::NONE
            }
        );
    }
}
