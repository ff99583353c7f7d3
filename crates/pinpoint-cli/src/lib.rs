//! CLI logic for the Pinpoint diagnostic tool.
//!
//! The CLI stands in for a parsing driver: it reads a document from disk,
//! builds the parse failure described on the command line, and renders it.

pub mod error_adapter;

mod args;
mod config;
mod error;

pub use args::{Args, Command};
pub use error::{CliError, ConfigError};

use std::fs;

use log::info;

use pinpoint::{Locator, Message, PositionedError, TrailingInputError};

/// Run the Pinpoint CLI application
///
/// Returns the text to print on standard output.
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
pub fn run(args: &Args) -> Result<String, CliError> {
    let app_config = config::load_config(args.config.as_ref())?;

    match &args.command {
        Command::Locate {
            input,
            offset,
            expected,
            fancy,
        } => {
            info!(input_path = input.as_str(), offset = *offset; "Locating parse error");

            let source = fs::read_to_string(input)?;
            let err = PositionedError::new(*offset, expected.as_str());

            if *fancy {
                Ok(error_adapter::render_positioned(&err, &source))
            } else {
                Ok(Locator::new(*app_config.locate()).locate(&err, &source))
            }
        }
        Command::Trailing { input, consumed } => {
            info!(input_path = input.as_str(), consumed = *consumed; "Checking for unparsed input");

            let source = fs::read_to_string(input)?;

            match TrailingInputError::from_consumed(&source, *consumed) {
                Some(err) => Ok(format!("{}\n", err.message())),
                None => {
                    info!("All input consumed");
                    Ok(String::new())
                }
            }
        }
    }
}
