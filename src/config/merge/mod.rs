//! Source composition for the shell configuration.

pub mod service;
