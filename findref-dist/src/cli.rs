use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[clap(
    name = "findref-dist",
    version,
    about = "Build and publish findref release binaries across the platform matrix",
    long_about = None,
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// Release version to build and publish (e.g. 1.2.3)
    pub release: Option<String>,

    #[clap(subcommand)]
    pub command: Option<Command>,

    /// Configuration file path
    #[clap(long, default_value = ".config/findref-dist.toml", global = true)]
    pub config: PathBuf,

    /// Enable verbose output
    #[clap(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Regenerate the README download table from the bin repo
    Readme {
        /// Write the rendered README here instead of the configured path
        #[clap(short, long)]
        output: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_positional() {
        let cli = Cli::parse_from(["findref-dist", "1.2.3"]);
        assert_eq!(cli.release.as_deref(), Some("1.2.3"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_release_missing() {
        let cli = Cli::parse_from(["findref-dist"]);
        assert!(cli.release.is_none());
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_readme_subcommand() {
        let cli = Cli::parse_from(["findref-dist", "readme", "--output", "OUT.md"]);
        assert!(cli.release.is_none());
        match cli.command {
            Some(Command::Readme { output }) => {
                assert_eq!(output, Some(PathBuf::from("OUT.md")));
            }
            other => panic!("expected readme subcommand, got {other:?}"),
        }
    }

    #[test]
    fn test_config_default_path() {
        let cli = Cli::parse_from(["findref-dist", "1.0.0"]);
        assert_eq!(cli.config, PathBuf::from(".config/findref-dist.toml"));
    }
}
