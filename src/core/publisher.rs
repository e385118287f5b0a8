//! Status line sinks

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::process::Command;

/// Receives each freshly built status line.
///
/// Publishing is best effort: failures are logged and otherwise ignored, the
/// next change will simply try again.
pub trait Publisher {
    fn publish(&mut self, status: &str);
}

/// Which publisher to use
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PublisherKind {
    /// Set the X root window name, which dwm shows as its status text
    #[serde(rename = "xsetroot")]
    #[default]
    XSetRoot,
    /// Print one line per update, for bars that read from a pipe
    #[serde(rename = "stdout")]
    Stdout,
}

impl PublisherKind {
    pub fn create(self) -> Box<dyn Publisher> {
        match self {
            PublisherKind::XSetRoot => Box::new(XSetRootPublisher::new()),
            PublisherKind::Stdout => Box::new(StdoutPublisher),
        }
    }
}

/// Publishes through `xsetroot -name`
pub struct XSetRootPublisher {
    program: String,
}

impl XSetRootPublisher {
    pub fn new() -> Self {
        Self {
            program: "xsetroot".to_string(),
        }
    }
}

impl Default for XSetRootPublisher {
    fn default() -> Self {
        Self::new()
    }
}

impl Publisher for XSetRootPublisher {
    fn publish(&mut self, status: &str) {
        match Command::new(&self.program).arg("-name").arg(status).status() {
            Ok(exit) if exit.success() => debug!("Published {} bytes", status.len()),
            Ok(exit) => warn!("{} exited with {}", self.program, exit),
            Err(e) => warn!("Failed to run {}: {}", self.program, e),
        }
    }
}

/// Writes each status line to stdout
pub struct StdoutPublisher;

impl Publisher for StdoutPublisher {
    fn publish(&mut self, status: &str) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", status).and_then(|_| stdout.flush()) {
            warn!("Failed to write status to stdout: {}", e);
        }
    }
}

/// Keeps every published line, for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingPublisher {
    pub published: Vec<String>,
}

#[cfg(test)]
impl Publisher for RecordingPublisher {
    fn publish(&mut self, status: &str) {
        self.published.push(status.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publisher_kind_serialization() {
        assert_eq!(serde_json::to_string(&PublisherKind::XSetRoot).unwrap(), "\"xsetroot\"");
        let kind: PublisherKind = serde_json::from_str("\"stdout\"").unwrap();
        assert_eq!(kind, PublisherKind::Stdout);
    }

    #[test]
    fn test_missing_program_does_not_panic() {
        let mut publisher = XSetRootPublisher {
            program: "/nonexistent/xsetroot".to_string(),
        };
        publisher.publish("status");
    }
}
