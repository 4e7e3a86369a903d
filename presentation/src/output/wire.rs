//! Line-delimited JSON wire encoding
//!
//! Each event becomes one JSON object on its own line, in the shape
//! documented on [`AgentEvent`]. A consumer can forward the lines verbatim
//! (e.g. as SSE `data:` frames).

use super::EventSink;
use postcraft_domain::AgentEvent;
use std::io::{self, Write};

/// Encode a single event as one line of JSON (no trailing newline)
pub fn encode(event: &AgentEvent) -> serde_json::Result<String> {
    serde_json::to_string(event)
}

/// Writes one flushed JSON line per event
pub struct JsonlWriter<W: Write> {
    out: W,
}

impl<W: Write> JsonlWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> EventSink for JsonlWriter<W> {
    fn on_event(&mut self, event: &AgentEvent) -> io::Result<()> {
        let line = encode(event)?;
        writeln!(self.out, "{}", line)?;
        // Consumers read line by line while the run is still going
        self.out.flush()
    }
}
