//! Stylus Export Library
//!
//! Turns a read-only snapshot of canvas elements into CSS, HTML or a React
//! component. Generation is pure; only [`export_to_file`] touches the disk.

mod component;
mod css;
mod html;

pub use component::generate_component;
pub use css::generate_css;
pub use html::{Dialect, generate_html};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use stylus_core::Element;
use thiserror::Error;

/// Export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Unknown export format: {0} (expected css, html or component)")]
    UnknownFormat(String),
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Target format of generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Css,
    Html,
    #[serde(alias = "jsx")]
    Component,
}

impl ExportFormat {
    pub fn all() -> &'static [ExportFormat] {
        &[ExportFormat::Css, ExportFormat::Html, ExportFormat::Component]
    }

    /// File extension for the format, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Css => "css",
            ExportFormat::Html => "html",
            ExportFormat::Component => "jsx",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ExportFormat::Css => "CSS",
            ExportFormat::Html => "HTML",
            ExportFormat::Component => "React Component",
        }
    }

    /// Suggested download file name, e.g. `generated-elements.css`.
    pub fn default_file_name(&self) -> String {
        format!("generated-elements.{}", self.extension())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportFormat::Css => "css",
            ExportFormat::Html => "html",
            ExportFormat::Component => "component",
        })
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "css" => Ok(ExportFormat::Css),
            "html" => Ok(ExportFormat::Html),
            "component" | "jsx" => Ok(ExportFormat::Component),
            _ => Err(ExportError::UnknownFormat(s.to_string())),
        }
    }
}

/// Positional class of the element at `index` (0-based), e.g. `element-1`.
pub fn class_name(index: usize) -> String {
    format!("element-{}", index + 1)
}

/// Generate code for `elements` in paint order.
pub fn generate(elements: &[Element], format: ExportFormat) -> String {
    match format {
        ExportFormat::Css => generate_css(elements),
        ExportFormat::Html => generate_html(elements, Dialect::Html),
        ExportFormat::Component => generate_component(elements),
    }
}

/// Generate code and write it to `path`.
pub fn export_to_file(
    elements: &[Element],
    format: ExportFormat,
    path: impl AsRef<Path>,
) -> ExportResult<()> {
    let path = path.as_ref();
    write_code(&generate(elements, format), path)?;
    log::info!(
        "Exported {} elements as {} to {}",
        elements.len(),
        format.display_name(),
        path.display()
    );
    Ok(())
}

/// Write already generated code to `path`.
pub fn write_code(code: &str, path: impl AsRef<Path>) -> ExportResult<()> {
    let path = path.as_ref();
    fs::write(path, code).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}
