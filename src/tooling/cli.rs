//! CLI Tooling
//!
//! Command-line surface of the shell: argument parsing, configuration
//! resolution, and construction of a ready-to-run session.

use crate::audit::{AuditLog, AuditSink, NullAudit};
use crate::commands::CommandExecutor;
use crate::config::{ConfigLoader, ShellConfig};
use crate::error::ApiError;
use crate::logging;
use crate::tooling::shell::{SessionEnd, Shell};
use crate::tree::loader;
use crate::vfs::VirtualFileSystem;
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Tarsh CLI - browse a tar archive through a read-only shell
#[derive(Parser, Debug)]
#[command(name = "tarsh")]
#[command(about = "Browse a tar archive through an interactive read-only shell")]
pub struct Cli {
    /// Path to the tar archive
    #[arg(short = 'f', long = "fs", required_unless_present = "print_config")]
    pub fs: Option<PathBuf>,

    /// Username shown in the prompt and written to the audit log [default: guest]
    #[arg(short = 'u', long)]
    pub user: Option<String>,

    /// Hostname shown in the prompt [default: localhost]
    #[arg(short = 'o', long)]
    pub host: Option<String>,

    /// Audit log file [default: audit.log]
    #[arg(short = 'l', long = "log")]
    pub audit_log: Option<PathBuf>,

    /// Configuration file path (layered over the global config)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// Load configuration from files and environment, then apply CLI flags.
    pub fn resolve_config(&self) -> Result<ShellConfig, ApiError> {
        let mut config = match &self.config {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        logging::apply_env_overrides(&mut config.logging)?;
        self.apply_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply flags given on the command line to `config`.
    pub fn apply_overrides(&self, config: &mut ShellConfig) -> Result<(), ApiError> {
        if let Some(user) = &self.user {
            config.session.user = user.clone();
        }
        if let Some(host) = &self.host {
            config.session.host = host.clone();
        }
        if let Some(path) = &self.audit_log {
            config.audit.path = path.clone();
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            logging::validate_format(format)?;
            config.logging.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.logging.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
        Ok(())
    }
}

/// CLI context holding a loaded archive and its session
pub struct CliContext {
    shell: Shell,
}

impl CliContext {
    /// Load `archive_path` and open the audit log described by `config`.
    pub fn from_config(archive_path: &Path, config: ShellConfig) -> Result<Self, ApiError> {
        let root = loader::load(archive_path)?;
        let vfs = VirtualFileSystem::with_mount(Arc::new(root), &config.vfs.mount);

        let audit: Box<dyn AuditSink + Send> = if config.audit.enabled {
            Box::new(AuditLog::open(
                &config.audit.path,
                &config.session.user,
                config.audit.format,
            )?)
        } else {
            Box::new(NullAudit)
        };

        let executor =
            CommandExecutor::new(vfs, audit).with_tail_lines(config.session.tail_lines);
        let shell = Shell::new(
            executor,
            config.session.user.clone(),
            config.session.host.clone(),
        );

        info!(
            archive = %archive_path.display(),
            user = %config.session.user,
            audit = config.audit.enabled,
            "Shell session ready"
        );

        Ok(Self { shell })
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    /// Run the session over arbitrary input and output streams.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        output: &mut W,
    ) -> Result<SessionEnd, ApiError> {
        let end = self.shell.run(input, output)?;
        info!(reason = ?end, "Shell session ended");
        Ok(end)
    }

    /// Run the session on the process's stdin and stdout.
    pub fn run_interactive(&mut self) -> Result<SessionEnd, ApiError> {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        self.run(stdin.lock(), &mut stdout)
    }
}
