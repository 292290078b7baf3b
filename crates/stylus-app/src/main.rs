//! Command-line entry point.

use std::process::ExitCode;
use stylus_app::{AppConfig, AppError, USAGE};

fn main() -> ExitCode {
    #[cfg(feature = "native")]
    env_logger::init();
    log::info!("Starting Stylus");

    let config = match AppConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(AppError::Usage(message)) => {
            eprintln!("{}\n\n{}", message, USAGE);
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if config.show_help {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    match stylus_app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
