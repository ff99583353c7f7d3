//! Command-line argument definitions for the Pinpoint CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. The subcommand selects which kind of parse failure is
//! reported; global arguments control configuration file selection and
//! logging verbosity.

use clap::{Parser, Subcommand};

/// Command-line arguments for the Pinpoint diagnostic tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Kind of parse failure to report
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,
}

/// Parse failure reports supported by the CLI
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a caret diagnostic for a failure at a byte offset
    Locate {
        /// Path to the document that failed to parse
        #[arg(help = "Path to the input file")]
        input: String,

        /// Byte offset where parsing failed
        #[arg(short, long)]
        offset: usize,

        /// Description of what the parser expected at the offset
        #[arg(short, long)]
        expected: String,

        /// Render with miette's graphical report handler
        #[arg(long)]
        fancy: bool,
    },

    /// Report the input left after a parser consumed a prefix
    Trailing {
        /// Path to the document that was parsed
        #[arg(help = "Path to the input file")]
        input: String,

        /// Number of bytes the parser consumed
        #[arg(long)]
        consumed: usize,
    },
}
