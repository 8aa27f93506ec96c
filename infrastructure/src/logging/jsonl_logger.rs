//! JSONL file writer for submission events.
//!
//! Each [`SubmissionEvent`] becomes one JSON line carrying a `type` and a
//! `timestamp` field. The file is opened in append mode so the log survives
//! across sessions.

use chrono::{SecondsFormat, Utc};
use feedback_application::{SubmissionEvent, SubmissionLogger};
use serde_json::{Value, json};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Appends submission events to a file, one JSON object per line.
///
/// Each event is flushed as soon as it is written; a failed write is reported
/// through `tracing` and never reaches the form.
pub struct JsonlSubmissionLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlSubmissionLogger {
    /// Open `path` for appending, creating it and its directory if missing.
    ///
    /// Returns `None` when either cannot be created; submissions then go
    /// unlogged.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create submission log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!(
                    "Could not open submission log file {}: {}",
                    path.display(),
                    e
                );
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Stamp an event with its `type` and `timestamp`.
///
/// Object payloads get both keys merged in; anything else is nested under
/// `data`.
fn to_record(event: SubmissionEvent) -> Value {
    let event_type = Value::String(event.event_type.to_string());
    let timestamp = Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true));

    match event.payload {
        Value::Object(mut fields) => {
            fields.insert("type".into(), event_type);
            fields.insert("timestamp".into(), timestamp);
            Value::Object(fields)
        }
        data => json!({ "type": event_type, "timestamp": timestamp, "data": data }),
    }
}

fn append_line(writer: &mut impl Write, line: &str) -> io::Result<()> {
    writeln!(writer, "{line}")?;
    writer.flush()
}

impl SubmissionLogger for JsonlSubmissionLogger {
    fn log(&self, event: SubmissionEvent) {
        let line = match serde_json::to_string(&to_record(event)) {
            Ok(line) => line,
            Err(e) => {
                warn!("Could not encode submission event: {}", e);
                return;
            }
        };

        let Ok(mut writer) = self.writer.lock() else {
            warn!("Submission log {} is poisoned, event dropped", self.path.display());
            return;
        };
        if let Err(e) = append_line(&mut *writer, &line) {
            warn!(
                "Could not write to submission log {}: {}",
                self.path.display(),
                e
            );
        }
    }
}

impl Drop for JsonlSubmissionLogger {
    fn drop(&mut self) {
        if let Ok(writer) = self.writer.get_mut()
            && let Err(e) = writer.flush()
        {
            warn!("Could not flush submission log {}: {}", self.path.display(), e);
        }
    }
}
