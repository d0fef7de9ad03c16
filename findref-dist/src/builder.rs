use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{DistError, Result};
use crate::matrix::{self, PackageFormat, ReleaseMatrix};
use crate::packager;
use crate::runtime::ContainerRuntime;
use crate::template;

/// Drives one release through the full platform matrix, strictly
/// sequentially: each target is built, archived, packaged, staged and cleaned
/// up before the next one starts.
pub struct ReleaseBuilder {
    config: Config,
    matrix: ReleaseMatrix,
}

impl ReleaseBuilder {
    pub fn new(config: Config) -> Self {
        let matrix = ReleaseMatrix::with_default_tables(&config.project.name);
        Self { config, matrix }
    }

    /// Construct with substitute tables.
    pub fn with_matrix(config: Config, matrix: ReleaseMatrix) -> Self {
        Self { config, matrix }
    }

    /// Build and publish every target of the matrix for one release.
    ///
    /// The release identifier is the only validated input; it is checked
    /// before any build, package or file operation. A failure partway
    /// through the matrix leaves already-published targets in place and
    /// aborts the rest.
    pub fn run(&self, release: &str) -> Result<()> {
        if release.is_empty() {
            return Err(DistError::MissingRelease);
        }

        let runtime = ContainerRuntime::detect()?;
        let nfpm_template = template::load(&self.config.package.template)?;

        tracing::info!("Using container runtime: {}", runtime);

        for (os, arch) in self.matrix.targets() {
            self.publish_target(&runtime, &nfpm_template, release, os, arch)?;
        }

        tracing::info!("Done!");
        Ok(())
    }

    /// Build, archive, package and stage one (os, arch) target.
    fn publish_target(
        &self,
        runtime: &ContainerRuntime,
        nfpm_template: &str,
        release: &str,
        os: &str,
        arch: &str,
    ) -> Result<()> {
        let name = self.matrix.name();
        tracing::info!("Building {} v{} for {}/{}...", name, release, os, arch);

        runtime.build(&self.config.build, name, os, arch)?;

        let binary_name = self.matrix.binary_name(os);
        let built = runtime.built_binary(&self.config.build, &binary_name);
        if !built.is_file() {
            return Err(DistError::MissingBinary {
                os: os.to_string(),
                arch: arch.to_string(),
                path: built,
            });
        }

        // Per-target scratch dir, torn down with its contents when this
        // target completes. The source tree is left clean for the next one.
        let work = tempfile::tempdir()?;
        let binary = work.path().join(&binary_name);
        fs::copy(&built, &binary)?;
        fs::remove_file(&built)?;

        let archive_name = self.matrix.archive_name();
        let archive = work.path().join(&archive_name);
        tracing::info!("Zipping {} into {}", binary_name, archive_name);
        packager::create_zip(&binary, &archive)?;

        let mut artifacts = vec![(archive_name, archive)];
        for format in self.matrix.package_jobs(os, arch) {
            let filename = self.matrix.package_filename(format, release, arch);
            let package = work.path().join(&filename);
            self.package(nfpm_template, format, release, os, arch, &binary, &package, work.path())?;
            artifacts.push((filename, package));
        }

        let dests = self
            .matrix
            .destination_dirs(&self.config.project.bin_repo, release, os, arch);
        stage_artifacts(&artifacts, &dests)?;

        tracing::info!(
            "Published {}/{} to {} and {}",
            os,
            arch,
            dests[0].display(),
            dests[1].display()
        );
        Ok(())
    }

    /// Render the nfpm config for one format and produce the package.
    #[allow(clippy::too_many_arguments)]
    fn package(
        &self,
        nfpm_template: &str,
        format: &PackageFormat,
        release: &str,
        os: &str,
        arch: &str,
        binary: &Path,
        target: &Path,
        work_dir: &Path,
    ) -> Result<()> {
        let pkg_arch = matrix::package_arch(&format.packager, arch);
        let binary_src = binary.display().to_string();
        let rendered = template::render(
            nfpm_template,
            &[
                ("name", self.matrix.name()),
                ("version", release),
                ("arch", pkg_arch),
                ("binary", &binary_src),
            ],
        );

        let config_path = work_dir.join(format!("nfpm-{}.yaml", format.packager));
        fs::write(&config_path, rendered)?;

        tracing::info!(
            "Packaging {} v{} as {} for {}/{}",
            self.matrix.name(),
            release,
            format.packager,
            os,
            arch
        );
        packager::run_nfpm(&config_path, &format.packager, target, os, arch)
    }
}

/// Copy every artifact into each destination dir (created if absent) and
/// write the dir's SHA256SUMS manifest.
fn stage_artifacts(artifacts: &[(String, PathBuf)], dests: &[PathBuf]) -> Result<()> {
    for dest in dests {
        fs::create_dir_all(dest)?;

        let mut staged = Vec::new();
        for (file_name, path) in artifacts {
            let target = dest.join(file_name);
            fs::copy(path, &target)?;
            staged.push(target);
        }

        packager::generate_checksums(&staged, dest)?;
    }
    Ok(())
}
