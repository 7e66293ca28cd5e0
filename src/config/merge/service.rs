//! MergeService: orchestrates sources and deserializes to ShellConfig.

use crate::config::sources::{environment, global_file};
use crate::config::ShellConfig;
use config::{Config, ConfigError, File};
use std::path::Path;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config from standard sources.
    /// Precedence: defaults (lowest) -> global file -> explicit file -> environment (highest).
    pub fn load(explicit_file: Option<&Path>) -> Result<ShellConfig, ConfigError> {
        Self::load_layers(global_file::default_path().as_deref(), explicit_file)
    }

    /// Load config from the given global and explicit files plus environment.
    ///
    /// The global file is optional on disk; the explicit file must exist.
    pub fn load_layers(
        global: Option<&Path>,
        explicit_file: Option<&Path>,
    ) -> Result<ShellConfig, ConfigError> {
        let builder = Config::builder();
        let builder = global_file::add_to_builder(builder, global)?;
        let builder = match explicit_file {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder,
        };
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }
}
