//! Progress reporting for generation runs

use crate::output::EventSink;
use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use postcraft_domain::{AgentEvent, Stage};
use std::io::{self, Write};
use std::time::Duration;

/// Reports progress with a spinner on stderr and prints stage output to stdout
pub struct ProgressReporter {
    bar: ProgressBar,
    formatter: ConsoleFormatter,
}

impl ProgressReporter {
    pub fn new(formatter: ConsoleFormatter) -> Self {
        Self::with_bar(ProgressBar::new_spinner(), formatter)
    }

    /// Use a caller-provided bar (e.g. `ProgressBar::hidden()`)
    pub fn with_bar(bar: ProgressBar, formatter: ConsoleFormatter) -> Self {
        bar.set_style(Self::spinner_style());
        bar.enable_steady_tick(Duration::from_millis(120));
        Self { bar, formatter }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn stage_prefix(stage: Stage) -> String {
        format!("[{}/3] {}", stage.number(), stage.display_name())
    }
}

impl EventSink for ProgressReporter {
    fn on_event(&mut self, event: &AgentEvent) -> io::Result<()> {
        match event {
            AgentEvent::Stage { stage, message } => {
                self.bar.set_prefix(Self::stage_prefix(*stage));
                self.bar.set_message(message.clone());
            }
            AgentEvent::Progress { message } => {
                self.bar.set_message(message.clone());
            }
            AgentEvent::Result { message, data, .. } => {
                let text = self.formatter.format_stage_data(data);
                let message = message.green().to_string();
                // Print above the spinner so it keeps animating below
                self.bar.suspend(|| -> io::Result<()> {
                    let mut out = io::stdout().lock();
                    writeln!(out, "{}", message)?;
                    write!(out, "{}", text)?;
                    out.flush()
                })?;
            }
            AgentEvent::Complete { message, .. } => {
                self.bar.finish_and_clear();
                eprintln!("{}", message.green().bold());
            }
            AgentEvent::Error { message } => {
                self.bar.abandon_with_message(message.red().to_string());
            }
        }
        Ok(())
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress {
    formatter: ConsoleFormatter,
}

impl SimpleProgress {
    pub fn new(formatter: ConsoleFormatter) -> Self {
        Self { formatter }
    }
}

impl EventSink for SimpleProgress {
    fn on_event(&mut self, event: &AgentEvent) -> io::Result<()> {
        match event {
            AgentEvent::Stage { stage, message } => {
                eprintln!("{} {} {}", "->".cyan(), stage.display_name().bold(), message);
            }
            AgentEvent::Progress { message } => eprintln!("   {}", message.dimmed()),
            AgentEvent::Result { message, data, .. } => {
                eprintln!("  {}", message.green());
                let mut out = io::stdout().lock();
                write!(out, "{}", self.formatter.format_stage_data(data))?;
                out.flush()?;
            }
            AgentEvent::Complete { message, .. } => eprintln!("{}", message.green().bold()),
            AgentEvent::Error { message } => eprintln!("{} {}", "x".red(), message.red()),
        }
        Ok(())
    }
}
