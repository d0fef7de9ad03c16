use clap::Parser;
use findref_dist::cli::{Cli, Command};
use std::path::PathBuf;

#[test]
fn test_release_argument() {
    let cli = Cli::parse_from(["findref-dist", "1.2.3"]);
    assert_eq!(cli.release.as_deref(), Some("1.2.3"));
    assert!(cli.command.is_none());
    assert!(!cli.verbose);
}

#[test]
fn test_no_arguments_parses_without_release() {
    // The missing-release diagnostic is a runtime check, not a parse error
    let cli = Cli::parse_from(["findref-dist"]);
    assert!(cli.release.is_none());
    assert!(cli.command.is_none());
}

#[test]
fn test_readme_subcommand() {
    let cli = Cli::parse_from(["findref-dist", "readme"]);
    assert!(matches!(cli.command, Some(Command::Readme { output: None })));
}

#[test]
fn test_readme_subcommand_with_output() {
    let cli = Cli::parse_from(["findref-dist", "readme", "--output", "docs/README.md"]);
    match cli.command {
        Some(Command::Readme { output }) => {
            assert_eq!(output, Some(PathBuf::from("docs/README.md")));
        }
        other => panic!("expected readme subcommand, got {other:?}"),
    }
}

#[test]
fn test_release_conflicts_with_subcommand() {
    let result = Cli::try_parse_from(["findref-dist", "1.2.3", "readme"]);
    assert!(result.is_err());
}

#[test]
fn test_config_flag() {
    let cli = Cli::parse_from(["findref-dist", "--config", "dist.toml", "2.0.0"]);
    assert_eq!(cli.config, PathBuf::from("dist.toml"));
    assert_eq!(cli.release.as_deref(), Some("2.0.0"));
}
