//! Command dispatch
//!
//! Maps shell tokens onto VFS operations and formats their results for a
//! terminal. Every dispatched command, recognized or not, is appended to the
//! audit sink afterwards.

use crate::audit::AuditSink;
use crate::vfs::VirtualFileSystem;
use std::io::{self, Write};

/// Default number of lines printed by `tail`.
pub const DEFAULT_TAIL_LINES: usize = 10;

fn help_text(tail_lines: usize) -> String {
    format!(
        "Available commands:
  ls [path]     - List directory contents (current dir if no path)
  cd <path>     - Change directory
  tail <file>   - Display the last {} lines of a file
  find <file>   - Search for file and show the path
  help          - Show this help message",
        tail_lines
    )
}

/// Shell commands understood by the executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Ls,
    Cd,
    Tail,
    Find,
    Help,
    Unknown(String),
}

impl Command {
    pub fn parse(token: &str) -> Self {
        match token {
            "ls" => Command::Ls,
            "cd" => Command::Cd,
            "tail" => Command::Tail,
            "find" => Command::Find,
            "help" => Command::Help,
            other => Command::Unknown(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Command::Ls => "ls",
            Command::Cd => "cd",
            Command::Tail => "tail",
            Command::Find => "find",
            Command::Help => "help",
            Command::Unknown(name) => name,
        }
    }
}

/// Executes commands against one VFS session.
pub struct CommandExecutor {
    vfs: VirtualFileSystem,
    audit: Box<dyn AuditSink + Send>,
    tail_lines: usize,
}

impl CommandExecutor {
    pub fn new(vfs: VirtualFileSystem, audit: Box<dyn AuditSink + Send>) -> Self {
        Self {
            vfs,
            audit,
            tail_lines: DEFAULT_TAIL_LINES,
        }
    }

    pub fn with_tail_lines(mut self, tail_lines: usize) -> Self {
        self.tail_lines = tail_lines;
        self
    }

    pub fn vfs(&self) -> &VirtualFileSystem {
        &self.vfs
    }

    /// Run `command` with `arguments`, writing user-facing output to `out`.
    ///
    /// Only errors writing to `out` are returned.
    pub fn execute<W: Write>(
        &mut self,
        command: &str,
        arguments: &[&str],
        out: &mut W,
    ) -> io::Result<()> {
        let result = match Command::parse(command) {
            Command::Ls => self.ls(arguments, out),
            Command::Cd => self.cd(arguments, out),
            Command::Tail => self.tail(arguments, out),
            Command::Find => self.find(arguments, out),
            Command::Help => writeln!(out, "{}", help_text(self.tail_lines)),
            Command::Unknown(name) => writeln!(out, "Command not found: {}", name),
        };
        self.audit.record(command, arguments);
        result
    }

    fn ls<W: Write>(&self, arguments: &[&str], out: &mut W) -> io::Result<()> {
        let path = arguments.first().copied();
        match self.vfs.try_list(path) {
            Ok(names) if names.is_empty() => Ok(()),
            Ok(names) => writeln!(out, "{}", names.join("  ")),
            Err(_) => writeln!(
                out,
                "Can not find directory {}",
                path.unwrap_or(self.vfs.current_dir())
            ),
        }
    }

    fn cd<W: Write>(&mut self, arguments: &[&str], out: &mut W) -> io::Result<()> {
        let Some(path) = arguments.first() else {
            return Ok(());
        };
        match self.vfs.change_directory(path) {
            Ok(()) => Ok(()),
            Err(_) => writeln!(out, "Can not change to {}", path),
        }
    }

    fn tail<W: Write>(&self, arguments: &[&str], out: &mut W) -> io::Result<()> {
        let Some(filename) = arguments.first() else {
            return writeln!(out, "Usage: tail <filename>");
        };
        let content = match self.vfs.read_file(filename) {
            Ok(content) => content,
            Err(_) => {
                return writeln!(
                    out,
                    "tail: cannot open '{}' for reading: No such file or directory",
                    filename
                )
            }
        };
        for line in last_lines(content, self.tail_lines) {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    fn find<W: Write>(&self, arguments: &[&str], out: &mut W) -> io::Result<()> {
        let Some(filename) = arguments.first() else {
            return writeln!(out, "Usage: find <filename>");
        };
        for path in self.vfs.find(filename) {
            writeln!(out, "{}", path)?;
        }
        Ok(())
    }
}

/// The last `count` lines of `content`.
pub fn last_lines(content: &str, count: usize) -> Vec<&str> {
    let lines = split_lines(content);
    let start = lines.len().saturating_sub(count);
    lines[start..].to_vec()
}

/// Split on every Unicode line boundary, treating `\r\n` as one break.
///
/// Besides `\n` and `\r` this covers vertical tab, form feed, the file,
/// group and record separators, NEL, and U+2028/U+2029. A trailing break
/// does not produce an empty last line.
fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = content.char_indices().peekable();
    while let Some((index, c)) = chars.next() {
        let is_break = matches!(
            c,
            '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}'
                | '\u{2029}'
        );
        if !is_break {
            continue;
        }
        lines.push(&content[start..index]);
        let mut end = index + c.len_utf8();
        if c == '\r' {
            if let Some((next, '\n')) = chars.peek().copied() {
                chars.next();
                end = next + 1;
            }
        }
        start = end;
    }
    if start < content.len() {
        lines.push(&content[start..]);
    }
    lines
}
