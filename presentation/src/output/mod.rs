//! Rendering events and results for the terminal and for pipes

pub mod console;
pub mod wire;

use postcraft_domain::AgentEvent;
use std::io;

/// Receives pipeline events as they are produced
pub trait EventSink {
    fn on_event(&mut self, event: &AgentEvent) -> io::Result<()>;
}
