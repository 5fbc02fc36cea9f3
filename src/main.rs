use anyhow::{Context, Result};
use clap::Parser;
use postprocessor::config::Config;
use postprocessor::{Postprocessor, process_stream};
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "postprocessor")]
#[command(
    version,
    about = "Normalize wrapper, solver and runsolver output into key:value records"
)]
pub struct Cli {
    /// Copy stdin to stderr (0 disables)
    #[arg(long, default_value = "1", env = "POSTPROCESSOR_VERBOSE")]
    pub verbose: u8,

    /// Log parser decisions to stderr (overridden by RUST_LOG)
    #[arg(long)]
    pub debug: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::new(cli.verbose, cli.debug);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_filter).context("Invalid log filter")?,
        )
        .with_writer(std::io::stderr)
        .init();

    let mut postprocessor = Postprocessor::new(config.echo);
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr();

    process_stream(stdin, &mut stdout, &mut stderr, &mut postprocessor)
        .await
        .context("Failed to postprocess solver output")?;

    Ok(())
}
