use clap::Parser;
use std::path::PathBuf;
use tarsh::tooling::cli::Cli;
use tempfile::TempDir;

const LOG_VARS: [&str; 3] = ["TARSH_LOG_FORMAT", "TARSH_LOG_OUTPUT", "TARSH_LOG_FILE"];

#[test]
fn log_flags_beat_environment_which_beats_config_file() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("tarsh.toml");
    std::fs::write(
        &config_path,
        "[logging]\nformat = \"text\"\noutput = \"file\"\nfile = \"/config.log\"\n",
    )
    .unwrap();
    let config_arg = config_path.to_str().unwrap();

    std::env::set_var("TARSH_LOG_FORMAT", "json");
    std::env::set_var("TARSH_LOG_OUTPUT", "stdout");
    std::env::set_var("TARSH_LOG_FILE", "/env.log");

    let with_flags = Cli::try_parse_from([
        "tarsh",
        "-f",
        "fs.tar",
        "--config",
        config_arg,
        "--log-format",
        "text",
        "--log-output",
        "stderr",
        "--log-file",
        "/cli.log",
    ])
    .unwrap()
    .resolve_config();
    let without_flags = Cli::try_parse_from(["tarsh", "-f", "fs.tar", "--config", config_arg])
        .unwrap()
        .resolve_config();

    for var in LOG_VARS {
        std::env::remove_var(var);
    }

    let logging = with_flags.unwrap().logging;
    assert_eq!(logging.format, "text");
    assert_eq!(logging.output, "stderr");
    assert_eq!(logging.file, Some(PathBuf::from("/cli.log")));

    let logging = without_flags.unwrap().logging;
    assert_eq!(logging.format, "json");
    assert_eq!(logging.output, "stdout");
    assert_eq!(logging.file, Some(PathBuf::from("/env.log")));
}
