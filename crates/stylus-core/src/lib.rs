//! Stylus Core Library
//!
//! Element model and pointer-driven canvas interaction engine for the Stylus
//! visual editor. Hosts feed pointer events in and read projected visuals and
//! element snapshots out.

pub mod canvas;
pub mod config;
pub mod editing;
pub mod element;
pub mod factory;
pub mod geometry;
pub mod handles;
pub mod input;
pub mod interaction;
pub mod projection;

pub use canvas::{Canvas, CanvasDocument};
pub use config::{DRAW_COMMIT_THRESHOLD, EngineConfig, RESIZE_MIN_SIZE};
pub use editing::{EditError, EditRequest, EditableField, FieldValue, editable_fields};
pub use element::{Appearance, Content, Element, ElementFamily, ElementId, ElementType};
pub use handles::{Handle, HandleKind, ROTATION_HANDLE_OFFSET, ResizeHandle};
pub use input::{ClickTracker, Modifiers, PointerEvent};
pub use interaction::{CanvasEvent, GestureState, InteractionEngine};
pub use projection::{ProjectionContext, VisualDescription, project};
