//! Tarsh CLI Binary
//!
//! Interactive shell over a tar archive.

use anyhow::Context;
use clap::Parser;
use tarsh::logging::init_logging;
use tarsh::tooling::cli::{Cli, CliContext};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli
        .resolve_config()
        .context("Failed to load configuration")?;

    if cli.print_config {
        let rendered =
            toml::to_string_pretty(&config).context("Failed to render configuration")?;
        print!("{}", rendered);
        return Ok(());
    }

    init_logging(&config.logging).context("Failed to initialize logging")?;

    let archive = cli
        .fs
        .clone()
        .context("An archive path is required (--fs)")?;
    let mut context = CliContext::from_config(&archive, config)
        .with_context(|| format!("Failed to open archive {}", archive.display()))?;

    // The prompt loop blocks on stdin, so it runs off the runtime thread while
    // the runtime waits for Ctrl+C.
    let session = tokio::task::spawn_blocking(move || context.run_interactive());
    tokio::select! {
        joined = session => {
            joined.context("Shell session panicked")??;
        }
        signal = tokio::signal::ctrl_c() => {
            signal.context("Failed to listen for Ctrl+C")?;
            println!("\nExiting...");
            // A thread blocked reading stdin cannot be cancelled.
            std::process::exit(0);
        }
    }

    Ok(())
}
