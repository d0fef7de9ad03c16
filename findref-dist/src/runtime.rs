use std::fs;
use std::path::PathBuf;
use std::process::Command;

use crate::config::BuildConfig;
use crate::error::{DistError, Result};

/// Container runtime the cross-compile runs under. Podman is preferred when
/// both are installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerRuntime {
    Podman,
    Docker,
}

impl ContainerRuntime {
    /// Pick the runtime from PATH.
    pub fn detect() -> Result<Self> {
        if which::which("podman").is_ok() {
            Ok(ContainerRuntime::Podman)
        } else if which::which("docker").is_ok() {
            Ok(ContainerRuntime::Docker)
        } else {
            Err(DistError::RuntimeNotFound)
        }
    }

    pub fn program(&self) -> &'static str {
        match self {
            ContainerRuntime::Podman => "podman",
            ContainerRuntime::Docker => "docker",
        }
    }

    /// Cross-compile one target inside the container. GOOS/GOARCH select the
    /// target; on success the binary lands in the mounted source tree.
    ///
    /// The exit status is checked: a failed build aborts the target instead
    /// of letting a missing binary surface later in the zip step.
    pub fn build(&self, build: &BuildConfig, name: &str, os: &str, arch: &str) -> Result<()> {
        let source_dir = fs::canonicalize(&build.source_dir)?;
        let mount = format!("{}:/usr/src/{}:Z", source_dir.display(), name);
        let workdir = format!("/usr/src/{name}");

        let mut cmd = Command::new(self.program());
        cmd.arg("run")
            .arg("--rm")
            .arg("--volume")
            .arg(&mount)
            .arg("--workdir")
            .arg(&workdir)
            .arg("--env")
            .arg(format!("GOOS={os}"))
            .arg("--env")
            .arg(format!("GOARCH={arch}"))
            .arg(&build.image)
            .arg("go")
            .arg("build");

        tracing::debug!("Running: {:?}", cmd);

        let status = cmd.status()?;
        if !status.success() {
            return Err(DistError::BuildFailed {
                os: os.to_string(),
                arch: arch.to_string(),
            });
        }

        Ok(())
    }

    /// Where the build drops the binary for one target.
    pub fn built_binary(&self, build: &BuildConfig, binary_name: &str) -> PathBuf {
        build.source_dir.join(binary_name)
    }
}

impl std::fmt::Display for ContainerRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program())
    }
}
