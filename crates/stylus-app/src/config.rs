//! Command-line configuration.

use crate::AppError;
use std::path::PathBuf;
use stylus_export::ExportFormat;

pub const USAGE: &str = "\
Usage: stylus <session.json> [options]

Replays a recorded canvas session and prints the generated code.

Options:
  -f, --format <css|html|component>  Output format (default: css)
  -o, --output <PATH>                Write the code to PATH instead of stdout
  -c, --config <PATH>                Engine configuration JSON
      --copy                         Copy the code to the clipboard
  -h, --help                         Show this help";

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Recorded session to replay.
    pub session: PathBuf,
    pub format: ExportFormat,
    pub output: Option<PathBuf>,
    pub engine_config: Option<PathBuf>,
    pub copy_to_clipboard: bool,
    pub show_help: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            session: PathBuf::from("session.json"),
            format: ExportFormat::Css,
            output: None,
            engine_config: None,
            copy_to_clipboard: false,
            show_help: false,
        }
    }
}

impl AppConfig {
    /// Parse arguments, excluding the program name.
    pub fn from_args<I, S>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Self::default();
        let mut session = None;
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            let mut value_for = |flag: &str| {
                args.next()
                    .ok_or_else(|| AppError::Usage(format!("{flag} needs a value")))
            };

            match arg.as_str() {
                "-h" | "--help" => config.show_help = true,
                "-f" | "--format" => config.format = value_for(&arg)?.parse()?,
                "-o" | "--output" => config.output = Some(PathBuf::from(value_for(&arg)?)),
                "-c" | "--config" => config.engine_config = Some(PathBuf::from(value_for(&arg)?)),
                "--copy" => config.copy_to_clipboard = true,
                flag if flag.starts_with('-') => {
                    return Err(AppError::Usage(format!("Unknown option: {flag}")));
                }
                path => {
                    if session.replace(PathBuf::from(path)).is_some() {
                        return Err(AppError::Usage(format!("Unexpected argument: {path}")));
                    }
                }
            }
        }

        match session {
            Some(path) => config.session = path,
            None if config.show_help => {}
            None => return Err(AppError::Usage("Missing session file".to_string())),
        }
        Ok(config)
    }
}
