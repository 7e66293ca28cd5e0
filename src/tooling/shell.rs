//! Interactive prompt loop

use crate::commands::CommandExecutor;
use std::io::{self, BufRead, Write};

/// Token that ends the session without being dispatched or audited.
pub const EXIT_COMMAND: &str = "exit";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed `exit`.
    Exit,
    /// Input reached end-of-file.
    EndOfInput,
}

/// Reads command lines, dispatches them, and prints a prompt between them.
pub struct Shell {
    executor: CommandExecutor,
    user: String,
    host: String,
}

impl Shell {
    pub fn new(executor: CommandExecutor, user: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            executor,
            user: user.into(),
            host: host.into(),
        }
    }

    pub fn executor(&self) -> &CommandExecutor {
        &self.executor
    }

    /// `user@host:cwd> `
    pub fn prompt(&self) -> String {
        format!(
            "{}@{}:{}> ",
            self.user,
            self.host,
            self.executor.vfs().current_dir()
        )
    }

    /// Run until `exit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, output: &mut W) -> io::Result<SessionEnd> {
        let mut line = String::new();
        loop {
            write!(output, "{}", self.prompt())?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output, "\nExiting...")?;
                return Ok(SessionEnd::EndOfInput);
            }

            let mut tokens = line.split_whitespace();
            let Some(command) = tokens.next() else {
                continue;
            };
            if command == EXIT_COMMAND {
                return Ok(SessionEnd::Exit);
            }
            let arguments: Vec<&str> = tokens.collect();
            self.executor.execute(command, &arguments, output)?;
        }
    }
}
