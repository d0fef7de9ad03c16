use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use findref_dist::builder::ReleaseBuilder;
use findref_dist::cli::{Cli, Command};
use findref_dist::config::Config;
use findref_dist::error::DistError;
use findref_dist::matrix::ReleaseMatrix;
use findref_dist::readme;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        tracing::info!("Running findref-dist with verbose output");
    }

    let config = Config::load(&cli.config)?;

    match cli.command {
        Some(Command::Readme { output }) => {
            let matrix = ReleaseMatrix::with_default_tables(&config.project.name);
            readme::generate(&config, &matrix, output.as_deref())?;
        }
        None => {
            let release = cli
                .release
                .filter(|r| !r.is_empty())
                .ok_or(DistError::MissingRelease)?;
            ReleaseBuilder::new(config).run(&release)?;
        }
    }

    Ok(())
}
