//! # findref-dist
//!
//! Release tooling for the findref command-line tool.
//!
//! ## Overview
//!
//! `findref-dist` cross-compiles findref for every supported
//! (OS, architecture) pair inside a build container, zips each binary,
//! wraps Linux builds into native packages (deb, rpm, apk, Arch Linux),
//! and stages everything into the findref-bin repo layout, once under the
//! release version and once under the continuously overwritten `latest`
//! alias. It also regenerates the README download table from whatever is
//! staged in the bin repo.
//!
//! ## Usage
//!
//! ```bash
//! # Build and publish a release across the whole matrix
//! findref-dist 1.2.3
//!
//! # Regenerate the README download table
//! findref-dist readme
//! ```
//!
//! ## Configuration
//!
//! Settings live in `.config/findref-dist.toml` in the project directory or
//! `~/.config/findref-dist.toml` for user-wide settings. Everything has a
//! default; an absent file is fine.
//!
//! ## Layout
//!
//! Artifacts are staged as
//! `<bin_repo>/<release|latest>/<os>/<arch>/` containing the zipped binary,
//! any native packages, and a SHA256SUMS manifest.

/// Sequential release orchestrator: build, archive, package, stage, per target
pub mod builder;

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Configuration file handling and default settings management
pub mod config;

/// Error types and error handling utilities
pub mod error;

/// The release artifact matrix: targets, package jobs, filenames, paths
pub mod matrix;

/// Zip creation, nfpm invocation and checksum generation
pub mod packager;

/// README download-table rendering
pub mod readme;

/// Container runtime detection and build invocation
pub mod runtime;

/// Template loading and placeholder rendering
pub mod template;
