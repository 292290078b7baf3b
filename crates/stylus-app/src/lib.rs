//! Stylus Application
//!
//! The application shell: replays a recorded canvas session through the
//! interaction engine and hands the resulting document to the code generators.

mod config;
pub mod session;

pub use config::{AppConfig, USAGE};
pub use session::{ReplayReport, Session, SessionStep, replay};

use std::fs;
use stylus_core::{EditError, EngineConfig, InteractionEngine};
use stylus_export::{ExportError, generate, write_code};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Usage(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Edit(#[from] EditError),
}

/// Human-readable element count for status lines.
pub fn element_count_label(count: usize) -> String {
    match count {
        1 => "1 element".to_string(),
        n => format!("{} elements", n),
    }
}

/// Replay the configured session and emit its code.
pub fn run(config: &AppConfig) -> Result<(), AppError> {
    let engine_config = match &config.engine_config {
        Some(path) => {
            log::info!("Loading engine config from {}", path.display());
            EngineConfig::from_json(&fs::read_to_string(path)?)?
        }
        None => EngineConfig::default(),
    };

    let session = Session::load(&config.session)?;
    let mut engine = InteractionEngine::new(engine_config);
    replay(&mut engine, &session)?;

    let elements = engine.snapshot();
    log::info!("Canvas holds {}", element_count_label(elements.len()));

    let code = generate(elements, config.format);
    match &config.output {
        Some(path) => {
            write_code(&code, path)?;
            log::info!("Wrote {} code to {}", config.format.display_name(), path.display());
        }
        None => println!("{}", code),
    }

    if config.copy_to_clipboard {
        copy_to_clipboard(&code);
    }
    Ok(())
}

#[cfg(feature = "native")]
fn copy_to_clipboard(code: &str) {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(e) = clipboard.set_text(code.to_string()) {
                log::error!("Failed to copy code to clipboard: {}", e);
            } else {
                log::info!("Code copied to clipboard");
            }
        }
        Err(e) => log::error!("Failed to access clipboard: {}", e),
    }
}

#[cfg(not(feature = "native"))]
fn copy_to_clipboard(_code: &str) {
    log::warn!("Clipboard is not available in this build");
}
