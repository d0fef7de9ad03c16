use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{DistError, Result};

/// Compress one built binary into a single-file zip archive.
pub fn create_zip(binary: &Path, archive_path: &Path) -> Result<()> {
    let file_name = binary
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| DistError::Archive(format!("Invalid binary path: {}", binary.display())))?;

    let file = File::create(archive_path)?;
    let mut zip = zip::ZipWriter::new(file);

    let options = zip::write::SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .compression_level(Some(9))
        .unix_permissions(0o755);

    zip.start_file(file_name, options)?;
    let content = fs::read(binary)?;
    zip.write_all(&content)?;
    zip.finish()?;

    tracing::info!("Created archive: {}", archive_path.display());
    Ok(())
}

/// Produce one native package with nfpm from a rendered config file. A
/// non-zero exit aborts the job with a diagnostic naming the packager and
/// platform.
pub fn run_nfpm(
    config_path: &Path,
    packager: &str,
    target: &Path,
    os: &str,
    arch: &str,
) -> Result<()> {
    let mut cmd = Command::new("nfpm");
    cmd.arg("package")
        .arg("--config")
        .arg(config_path)
        .arg("--packager")
        .arg(packager)
        .arg("--target")
        .arg(target);

    tracing::debug!("Running: {:?}", cmd);

    let status = cmd.status()?;
    if !status.success() {
        return Err(DistError::PackageFailed {
            packager: packager.to_string(),
            os: os.to_string(),
            arch: arch.to_string(),
        });
    }

    tracing::info!("Created package: {}", target.display());
    Ok(())
}

/// Generate a SHA256SUMS manifest for staged files.
pub fn generate_checksums(files: &[PathBuf], output_dir: &Path) -> Result<PathBuf> {
    use sha2::{Digest, Sha256};

    let checksum_path = output_dir.join("SHA256SUMS");
    let mut checksum_file = File::create(&checksum_path)?;

    for file_path in files {
        let file_name = file_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                DistError::Archive(format!("Invalid file path: {}", file_path.display()))
            })?;

        let mut file = File::open(file_path)?;
        let mut hasher = Sha256::new();
        io::copy(&mut file, &mut hasher)?;
        let hash = hasher.finalize();
        let hash_hex = hex::encode(hash);

        writeln!(checksum_file, "{}  {}", hash_hex, file_name)?;
    }

    tracing::debug!("Generated checksums: {}", checksum_path.display());
    Ok(checksum_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_create_zip_archive() {
        let src_dir = tempdir().unwrap();
        let out_dir = tempdir().unwrap();

        let binary = src_dir.path().join("findref");
        fs::write(&binary, b"not really an ELF").unwrap();

        let archive = out_dir.path().join("findref.zip");
        create_zip(&binary, &archive).unwrap();

        assert!(archive.exists());
        assert!(fs::metadata(&archive).unwrap().len() > 0);
    }

    #[test]
    fn test_generate_checksums() {
        let dir = tempdir().unwrap();

        let file1 = dir.path().join("findref.zip");
        let file2 = dir.path().join("findref_1.0.0_amd64.deb");
        fs::write(&file1, b"zip bytes").unwrap();
        fs::write(&file2, b"deb bytes").unwrap();

        let files = vec![file1, file2];
        let checksum_path = generate_checksums(&files, dir.path()).unwrap();

        assert_eq!(checksum_path.file_name().unwrap(), "SHA256SUMS");

        let content = fs::read_to_string(&checksum_path).unwrap();
        assert!(content.contains("findref.zip"));
        assert!(content.contains("findref_1.0.0_amd64.deb"));

        for line in content.lines() {
            let parts: Vec<&str> = line.split_whitespace().collect();
            assert_eq!(parts.len(), 2);
            assert_eq!(parts[0].len(), 64);
        }
    }

    #[test]
    fn test_nfpm_failure_names_packager_and_platform() {
        let err = DistError::PackageFailed {
            packager: "rpm".to_string(),
            os: "linux".to_string(),
            arch: "arm64".to_string(),
        };
        assert_eq!(err.to_string(), "rpm packaging failed for linux/arm64");
    }
}
