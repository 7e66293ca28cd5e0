use std::io::Cursor;
use tarsh::config::ShellConfig;
use tarsh::tooling::cli::CliContext;
use tarsh::tooling::SessionEnd;
use tempfile::TempDir;

use crate::integration::support::write_scenario_archive;

fn session(temp: &TempDir, user: &str) -> (CliContext, std::path::PathBuf) {
    let archive = write_scenario_archive(temp.path());
    let mut config = ShellConfig::default();
    config.session.user = user.to_string();
    config.audit.path = temp.path().join("test_emulator.log");
    let audit = config.audit.path.clone();
    (CliContext::from_config(&archive, config).unwrap(), audit)
}

fn run(context: &mut CliContext, input: &str) -> (SessionEnd, String) {
    let mut output = Vec::new();
    let end = context.run(Cursor::new(input.to_string()), &mut output).unwrap();
    (end, String::from_utf8(output).unwrap())
}

#[test]
fn ls_then_exit_lists_mount() {
    let temp = TempDir::new().unwrap();
    let (mut context, _) = session(&temp, "guest");

    let (end, output) = run(&mut context, "ls\nexit\n");
    assert_eq!(end, SessionEnd::Exit);
    assert!(output.contains("dir1  dir2"));
    assert!(output.starts_with("guest@localhost:/fs> "));
}

#[test]
fn navigation_and_reading_transcript() {
    let temp = TempDir::new().unwrap();
    let (mut context, _) = session(&temp, "guest");

    let script = "cd dir1\ntail file1.txt\ncd ..\ncd nope\ntail dir2/file3.txt\nfind file2.txt\nfrobnicate\n";
    let (end, output) = run(&mut context, script);

    let expected = "\
guest@localhost:/fs> \
guest@localhost:/fs/dir1> This is file1 line1
This is file1 line2
This is file1 line3
guest@localhost:/fs/dir1> \
guest@localhost:/fs> Can not change to nope
guest@localhost:/fs> This is file3 line1
guest@localhost:/fs> /dir1/file2.txt
guest@localhost:/fs> Command not found: frobnicate
guest@localhost:/fs> 
Exiting...
";
    assert_eq!(end, SessionEnd::EndOfInput);
    assert_eq!(output, expected);
    assert_eq!(context.shell().executor().vfs().current_dir(), "/fs");
}

#[test]
fn audit_log_records_every_dispatched_command() {
    let temp = TempDir::new().unwrap();
    let (mut context, audit) = session(&temp, "testuser");

    run(&mut context, "ls\ncd dir1\n\nunknown_command a b\nexit\nls\n");

    let contents = std::fs::read_to_string(audit).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with(",testuser,ls,"));
    assert!(lines[1].ends_with(",testuser,cd,dir1"));
    assert!(lines[2].ends_with(",testuser,unknown_command,a b"));
}
