//! Audit log
//!
//! Append-only transcript of every dispatched command. The log is a pure sink:
//! recording never fails from the caller's point of view, and nothing read
//! from it flows back into the shell.

use crate::error::ApiError;
use chrono::{DateTime, Local};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::warn;

/// One transcribed command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub timestamp: String,
    pub user: String,
    pub command: String,
    pub arguments: String,
}

impl AuditRecord {
    pub fn new(at: DateTime<Local>, user: &str, command: &str, arguments: &[&str]) -> Self {
        Self {
            timestamp: at.naive_local().format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
            user: user.to_string(),
            command: command.to_string(),
            arguments: arguments.join(" "),
        }
    }

    /// Render as a single CSV row, quoting fields only when needed.
    pub fn to_csv_row(&self) -> String {
        [
            self.timestamp.as_str(),
            self.user.as_str(),
            self.command.as_str(),
            self.arguments.as_str(),
        ]
        .iter()
        .map(|field| csv_field(field))
        .collect::<Vec<_>>()
        .join(",")
    }
}

fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Line format of the audit file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditFormat {
    Csv,
    Json,
}

impl std::str::FromStr for AuditFormat {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(AuditFormat::Csv),
            "json" => Ok(AuditFormat::Json),
            other => Err(ApiError::ConfigError(format!(
                "Invalid audit format: {} (must be 'csv' or 'json')",
                other
            ))),
        }
    }
}

/// Destination for command records.
pub trait AuditSink {
    /// Append one record. Failures are handled by the sink.
    fn record(&self, command: &str, arguments: &[&str]);
}

impl<T: AuditSink + ?Sized> AuditSink for Arc<T> {
    fn record(&self, command: &str, arguments: &[&str]) {
        (**self).record(command, arguments)
    }
}

/// Sink used when auditing is disabled.
#[derive(Debug, Default)]
pub struct NullAudit;

impl AuditSink for NullAudit {
    fn record(&self, _command: &str, _arguments: &[&str]) {}
}

/// File-backed audit log, flushed after every record.
pub struct AuditLog {
    path: PathBuf,
    user: String,
    format: AuditFormat,
    writer: Mutex<BufWriter<File>>,
}

impl AuditLog {
    /// Open `path` for appending, creating it and its parent directory.
    pub fn open(path: &Path, user: &str, format: AuditFormat) -> Result<Self, ApiError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ApiError::ConfigError(format!(
                        "Failed to create audit log directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                ApiError::ConfigError(format!(
                    "Failed to open audit log {}: {}",
                    path.display(),
                    e
                ))
            })?;
        Ok(Self {
            path: path.to_path_buf(),
            user: user.to_string(),
            format,
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    fn render(&self, record: &AuditRecord) -> Result<String, serde_json::Error> {
        match self.format {
            AuditFormat::Csv => Ok(record.to_csv_row()),
            AuditFormat::Json => serde_json::to_string(record),
        }
    }
}

impl AuditSink for AuditLog {
    fn record(&self, command: &str, arguments: &[&str]) {
        let record = AuditRecord::new(Local::now(), &self.user, command, arguments);
        let line = match self.render(&record) {
            Ok(line) => line,
            Err(e) => {
                warn!(command = %command, error = %e, "Failed to encode audit record");
                return;
            }
        };

        let mut writer = self.writer.lock();
        let result = writeln!(writer, "{}", line).and_then(|_| writer.flush());
        if let Err(e) = result {
            warn!(
                path = %self.path.display(),
                command = %command,
                error = %e,
                "Failed to append audit record"
            );
        }
    }
}
