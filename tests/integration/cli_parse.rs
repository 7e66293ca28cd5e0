use clap::Parser;
use tarsh::tooling::cli::Cli;

#[test]
fn parse_valid_argument_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["tarsh", "-f", "fs.tar"],
        vec!["tarsh", "--fs", "fs.tar", "--user", "alice", "--host", "box"],
        vec!["tarsh", "-f", "fs.tar", "-u", "alice", "-o", "box", "-l", "audit.csv"],
        vec!["tarsh", "-f", "fs.tar", "--log", "audit.csv", "--log-level", "debug"],
        vec![
            "tarsh",
            "-f",
            "fs.tar",
            "--log-format",
            "json",
            "--log-output",
            "stderr",
            "--log-file",
            "/tmp/tarsh.log",
        ],
        vec!["tarsh", "-f", "fs.tar", "--config", "tarsh.toml"],
        vec!["tarsh", "--print-config"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_requires_archive() {
    assert!(Cli::try_parse_from(["tarsh"]).is_err());
    assert!(Cli::try_parse_from(["tarsh", "-u", "alice"]).is_err());
}

#[test]
fn parse_keeps_audit_and_diagnostic_logs_apart() {
    let cli = Cli::try_parse_from([
        "tarsh",
        "-f",
        "fs.tar",
        "-l",
        "audit.csv",
        "--log-file",
        "diag.log",
    ])
    .unwrap();
    assert_eq!(cli.audit_log.as_deref(), Some(std::path::Path::new("audit.csv")));
    assert_eq!(cli.log_file.as_deref(), Some(std::path::Path::new("diag.log")));
    assert!(cli.user.is_none());
}
