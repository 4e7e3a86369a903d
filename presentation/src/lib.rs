//! Presentation layer for postcraft
//!
//! This crate contains CLI definitions, the line-delimited JSON wire
//! encoder, console formatting and progress reporting for pipeline events.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, GenerateArgs, OutputMode, PostInput, RefineArgs};
pub use output::EventSink;
pub use output::console::ConsoleFormatter;
pub use output::wire::JsonlWriter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
