//! Integration tests for the tar archive shell

mod archive_loading;
mod cli_parse;
mod log_precedence;
mod shell_session;
mod support;
