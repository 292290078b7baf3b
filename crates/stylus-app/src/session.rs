//! Recorded gesture sessions and their replay against the engine.
//!
//! A session is a JSON document listing the toolbar, pointer and property
//! editor actions of one editing run, in order:
//!
//! ```json
//! { "steps": [
//!     { "step": "arm", "element_type": "button" },
//!     { "step": "down", "x": 10, "y": 10 },
//!     { "step": "move", "x": 130, "y": 50 },
//!     { "step": "up", "x": 130, "y": 50 },
//!     { "step": "edit", "index": 0, "field": "label", "value": "Save" }
//! ] }
//! ```

use crate::AppError;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use stylus_core::{
    CanvasEvent, EditableField, Element, ElementType, FieldValue, InteractionEngine, Modifiers,
};

/// One recorded action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum SessionStep {
    /// Toolbar: choose the element type to create.
    Arm { element_type: ElementType },
    Down {
        x: f64,
        y: f64,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Move { x: f64, y: f64 },
    Up { x: f64, y: f64 },
    Leave,
    DoubleClick { x: f64, y: f64 },
    /// Toolbar: delete the selected element.
    DeleteSelected,
    /// Toolbar: clear the canvas.
    ClearAll,
    /// Property editor: set one type-specific field of the element at `index`.
    Edit {
        index: usize,
        field: EditableField,
        value: FieldValue,
    },
    /// Property editor: merge `patch` into the JSON record of the element at `index`.
    Update {
        index: usize,
        patch: serde_json::Value,
    },
}

/// A recorded session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub steps: Vec<SessionStep>,
}

impl Session {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        log::info!("Loading session from {}", path.display());
        Self::from_json(&fs::read_to_string(path)?)
    }
}

/// Outcome of a replay.
#[derive(Debug, Clone, Default)]
pub struct ReplayReport {
    pub steps: usize,
    pub events: Vec<CanvasEvent>,
}

/// Replay every step of `session` against `engine`.
pub fn replay(engine: &mut InteractionEngine, session: &Session) -> Result<ReplayReport, AppError> {
    let mut report = ReplayReport::default();
    for step in &session.steps {
        let events = apply_step(engine, step)?;
        for event in &events {
            log::debug!("{:?}", event);
        }
        report.steps += 1;
        report.events.extend(events);
    }
    log::info!(
        "Replayed {} steps, {} canvas events",
        report.steps,
        report.events.len()
    );
    Ok(report)
}

fn apply_step(engine: &mut InteractionEngine, step: &SessionStep) -> Result<Vec<CanvasEvent>, AppError> {
    let events = match step {
        SessionStep::Arm { element_type } => {
            engine.set_armed_type(*element_type);
            Vec::new()
        }
        SessionStep::Down { x, y, modifiers } => engine.pointer_down(Point::new(*x, *y), *modifiers),
        SessionStep::Move { x, y } => engine.pointer_move(Point::new(*x, *y)),
        SessionStep::Up { x, y } => engine.pointer_up(Point::new(*x, *y)),
        SessionStep::Leave => engine.pointer_leave(),
        SessionStep::DoubleClick { x, y } => engine.double_activate(Point::new(*x, *y)),
        SessionStep::DeleteSelected => {
            if engine.delete_selected().is_none() {
                log::debug!("Delete with nothing selected");
            }
            Vec::new()
        }
        SessionStep::ClearAll => {
            engine.clear_all();
            Vec::new()
        }
        SessionStep::Edit {
            index,
            field,
            value,
        } => {
            if let Some(element) = element_at(engine, *index) {
                let updated = element.with_field(*field, value.clone())?;
                engine.update_element(updated);
            }
            Vec::new()
        }
        SessionStep::Update { index, patch } => {
            if let Some(element) = element_at(engine, *index) {
                let updated = apply_patch(element, patch)?;
                engine.update_element(updated);
            }
            Vec::new()
        }
    };
    Ok(events)
}

fn element_at(engine: &InteractionEngine, index: usize) -> Option<&Element> {
    let element = engine.snapshot().get(index);
    if element.is_none() {
        log::warn!(
            "Skipping edit of element {} (canvas has {})",
            index + 1,
            engine.snapshot().len()
        );
    }
    element
}

/// Merge `patch` into the element's JSON record. The id cannot be changed.
fn apply_patch(element: &Element, patch: &serde_json::Value) -> Result<Element, AppError> {
    let mut record = serde_json::to_value(element)?;
    merge(&mut record, patch);
    if let Some(object) = record.as_object_mut() {
        object.insert("id".to_string(), serde_json::to_value(element.id())?);
    }
    Ok(serde_json::from_value(record)?)
}

fn merge(target: &mut serde_json::Value, patch: &serde_json::Value) {
    match (target, patch) {
        (serde_json::Value::Object(target), serde_json::Value::Object(patch)) => {
            for (key, value) in patch {
                match target.get_mut(key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        target.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (target, patch) => *target = patch.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylus_core::{Content, EngineConfig};

    const SESSION: &str = r##"{ "steps": [
        { "step": "arm", "element_type": "button" },
        { "step": "down", "x": 10, "y": 10 },
        { "step": "move", "x": 130, "y": 50 },
        { "step": "up", "x": 130, "y": 50 },
        { "step": "edit", "index": 0, "field": "label", "value": "Save" },
        { "step": "update", "index": 0, "patch": {
            "left": 20,
            "appearance": { "opacity": 0.5, "background_color": "#10b981" }
        } }
    ] }"##;

    #[test]
    fn test_replay_session() {
        let session = Session::from_json(SESSION).unwrap();
        let mut engine = InteractionEngine::new(EngineConfig::default());
        let report = replay(&mut engine, &session).unwrap();

        assert_eq!(report.steps, 6);
        assert_eq!(engine.snapshot().len(), 1);
        let element = &engine.snapshot()[0];
        assert_eq!(element.kind, ElementType::Button);
        assert_eq!(
            element.content,
            Content::Button {
                label: "Save".to_string()
            }
        );
        assert!((element.left - 20.0).abs() < f64::EPSILON);
        assert!((element.width - 120.0).abs() < f64::EPSILON);
        assert!((element.appearance.opacity - 0.5).abs() < f64::EPSILON);
        assert_eq!(element.appearance.background_color.to_css(), "#10b981");
        // Nested fields not in the patch survive the merge
        assert!((element.appearance.border.radius - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_patch_cannot_change_id() {
        let mut engine = InteractionEngine::default();
        engine.pointer_down(Point::new(0.0, 0.0), Modifiers::NONE);
        engine.pointer_up(Point::new(50.0, 50.0));
        let id = engine.snapshot()[0].id();

        let patch = serde_json::json!({ "id": "00000000-0000-0000-0000-000000000000" });
        let updated = apply_patch(&engine.snapshot()[0], &patch).unwrap();
        assert_eq!(updated.id(), id);
    }

    #[test]
    fn test_out_of_range_edit_is_skipped() {
        let session = Session {
            steps: vec![SessionStep::Edit {
                index: 3,
                field: EditableField::Text,
                value: FieldValue::Text("x".to_string()),
            }],
        };
        let mut engine = InteractionEngine::default();
        let report = replay(&mut engine, &session).unwrap();
        assert_eq!(report.steps, 1);
        assert!(engine.snapshot().is_empty());
    }

    #[test]
    fn test_mismatched_edit_fails() {
        let mut session = Session::from_json(SESSION).unwrap();
        session.steps.truncate(4);
        session.steps.push(SessionStep::Edit {
            index: 0,
            field: EditableField::Options,
            value: FieldValue::List(vec![]),
        });
        let mut engine = InteractionEngine::default();
        assert!(matches!(
            replay(&mut engine, &session),
            Err(AppError::Edit(_))
        ));
    }

    #[test]
    fn test_toolbar_steps() {
        let session = Session::from_json(
            r#"{ "steps": [
                { "step": "down", "x": 0, "y": 0 },
                { "step": "up", "x": 100, "y": 100 },
                { "step": "down", "x": 200, "y": 0, "modifiers": { "alt": true } },
                { "step": "leave" },
                { "step": "delete_selected" },
                { "step": "delete_selected" }
            ] }"#,
        )
        .unwrap();
        let mut engine = InteractionEngine::default();
        replay(&mut engine, &session).unwrap();
        // The Alt draw is discarded on leave, so the first box is selected again and deleted
        assert!(engine.snapshot().is_empty());

        let clear = Session {
            steps: vec![SessionStep::ClearAll],
        };
        replay(&mut engine, &clear).unwrap();
        assert!(engine.selected_id().is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Session::load(dir.path().join("missing.json")),
            Err(AppError::Io(_))
        ));
    }
}
