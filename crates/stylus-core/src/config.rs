//! Tunable constants of the interaction engine.

use kurbo::Size;
use serde::{Deserialize, Serialize};

/// Side of the square hit region around each handle, in pixels.
pub const DEFAULT_HANDLE_SIZE: f64 = 8.0;
/// A drawn element is kept only if both sides are strictly larger than this.
pub const DRAW_COMMIT_THRESHOLD: f64 = 10.0;
/// Resizing never shrinks a side below this.
pub const RESIZE_MIN_SIZE: f64 = 10.0;
/// Opacity multiplier applied to the element being drawn.
pub const PROVISIONAL_OPACITY: f64 = 0.7;

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub handle_size: f64,
    pub draw_commit_threshold: f64,
    pub resize_min_size: f64,
    /// Size of elements placed by a single click (text types).
    pub click_create_size: Size,
    pub provisional_opacity: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            handle_size: DEFAULT_HANDLE_SIZE,
            draw_commit_threshold: DRAW_COMMIT_THRESHOLD,
            resize_min_size: RESIZE_MIN_SIZE,
            click_create_size: Size::new(160.0, 40.0),
            provisional_opacity: PROVISIONAL_OPACITY,
        }
    }
}

impl EngineConfig {
    /// Load from a JSON document; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = EngineConfig::from_json(r#"{"handle_size": 12.0}"#).unwrap();
        assert!((config.handle_size - 12.0).abs() < f64::EPSILON);
        assert!((config.draw_commit_threshold - DRAW_COMMIT_THRESHOLD).abs() < f64::EPSILON);
        assert!((config.provisional_opacity - 0.7).abs() < f64::EPSILON);
    }
}
