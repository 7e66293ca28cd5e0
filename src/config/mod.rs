//! Configuration
//!
//! Layered shell configuration: defaults, the global config file, an explicit
//! `--config` file, and `TARSH_*` environment variables. CLI flags are applied
//! on top by the tooling layer.

pub mod facade;
pub mod merge;
pub mod sources;

pub use facade::ConfigLoader;

use crate::audit::AuditFormat;
use crate::commands::DEFAULT_TAIL_LINES;
use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::types::{DEFAULT_MOUNT, PATH_SEPARATOR};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete shell configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShellConfig {
    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub vfs: VfsConfig,

    #[serde(default)]
    pub audit: AuditConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ShellConfig {
    /// Reject values the shell cannot run with.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.session.user.trim().is_empty() {
            return Err(ApiError::ConfigError("session.user cannot be empty".to_string()));
        }
        if self.session.host.trim().is_empty() {
            return Err(ApiError::ConfigError("session.host cannot be empty".to_string()));
        }
        if self.session.tail_lines == 0 {
            return Err(ApiError::ConfigError(
                "session.tail_lines must be greater than zero".to_string(),
            ));
        }
        let mount = self.vfs.mount.as_str();
        if mount.is_empty() || mount.contains(PATH_SEPARATOR) || mount == "." || mount == ".." {
            return Err(ApiError::ConfigError(format!(
                "Invalid vfs.mount: {:?} (must be a single directory name)",
                mount
            )));
        }
        if self.audit.enabled && self.audit.path.as_os_str().is_empty() {
            return Err(ApiError::ConfigError(
                "audit.path cannot be empty when auditing is enabled".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_user() -> String {
    "guest".to_string()
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_tail_lines() -> usize {
    DEFAULT_TAIL_LINES
}

/// Prompt identity and command behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Username shown in the prompt and written to the audit log
    #[serde(default = "default_user")]
    pub user: String,

    /// Hostname shown in the prompt
    #[serde(default = "default_host")]
    pub host: String,

    /// Number of lines printed by `tail`
    #[serde(default = "default_tail_lines")]
    pub tail_lines: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            user: default_user(),
            host: default_host(),
            tail_lines: default_tail_lines(),
        }
    }
}

fn default_mount() -> String {
    DEFAULT_MOUNT.to_string()
}

/// Virtual filesystem settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VfsConfig {
    /// Top-level archive directory the session starts in
    #[serde(default = "default_mount")]
    pub mount: String,
}

impl Default for VfsConfig {
    fn default() -> Self {
        Self {
            mount: default_mount(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_audit_path() -> PathBuf {
    PathBuf::from("audit.log")
}

fn default_audit_format() -> AuditFormat {
    AuditFormat::Csv
}

/// Command audit log settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Audit file, relative to the working directory unless absolute
    #[serde(default = "default_audit_path")]
    pub path: PathBuf,

    /// Line format: csv or json
    #[serde(default = "default_audit_format")]
    pub format: AuditFormat,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            path: default_audit_path(),
            format: default_audit_format(),
        }
    }
}
