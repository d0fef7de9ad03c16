use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub package: PackageConfig,

    #[serde(default)]
    pub readme: ReadmeConfig,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ProjectConfig {
    /// Name of the released binary.
    #[serde(default = "default_name")]
    pub name: String,

    /// Checkout of the bin repo that artifacts are staged into.
    #[serde(default = "default_bin_repo")]
    pub bin_repo: PathBuf,

    /// Base of the raw download URL for README links.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            bin_repo: default_bin_repo(),
            base_url: default_base_url(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct BuildConfig {
    /// Container image the cross-compile runs in.
    #[serde(default = "default_image")]
    pub image: String,

    /// Source tree mounted into the build container.
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            image: default_image(),
            source_dir: default_source_dir(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct PackageConfig {
    /// nfpm config template rendered once per (arch, format).
    #[serde(default = "default_nfpm_template")]
    pub template: PathBuf,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            template: default_nfpm_template(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ReadmeConfig {
    /// README template carrying the release-table placeholder.
    #[serde(default = "default_readme_template")]
    pub template: PathBuf,

    /// Rendered README destination.
    #[serde(default = "default_readme_output")]
    pub output: PathBuf,
}

impl Default for ReadmeConfig {
    fn default() -> Self {
        Self {
            template: default_readme_template(),
            output: default_readme_output(),
        }
    }
}

fn default_name() -> String {
    "findref".to_string()
}

fn default_bin_repo() -> PathBuf {
    PathBuf::from("findref-bin")
}

fn default_base_url() -> String {
    "https://raw.githubusercontent.com/FreedomBen/findref-bin/master".to_string()
}

fn default_image() -> String {
    "golang:1.18-alpine".to_string()
}

fn default_source_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_nfpm_template() -> PathBuf {
    PathBuf::from("templates/nfpm.yaml.tmpl")
}

fn default_readme_template() -> PathBuf {
    PathBuf::from("templates/README.md.tmpl")
}

fn default_readme_output() -> PathBuf {
    PathBuf::from("README.md")
}

impl Config {
    /// Load configuration from a file, falling back to the user-wide config
    /// and then to defaults when neither exists.
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::parse(path);
        }

        let user_path = Self::default_path();
        if user_path.exists() {
            return Self::parse(&user_path);
        }

        Ok(Config::default())
    }

    fn parse(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// The user-wide configuration file path.
    pub fn default_path() -> PathBuf {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("findref-dist.toml"))
            .unwrap_or_else(|| PathBuf::from("~/.config/findref-dist.toml"))
    }
}
