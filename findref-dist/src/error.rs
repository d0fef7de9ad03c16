use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Must pass release version as first arg")]
    MissingRelease,

    #[error("No container runtime found. Install podman or docker")]
    RuntimeNotFound,

    #[error("Build failed for {os}/{arch}")]
    BuildFailed { os: String, arch: String },

    #[error("Build produced no binary for {}/{} (expected {})", .os, .arch, .path.display())]
    MissingBinary {
        os: String,
        arch: String,
        path: PathBuf,
    },

    #[error("{packager} packaging failed for {os}/{arch}")]
    PackageFailed {
        packager: String,
        os: String,
        arch: String,
    },

    #[error("Template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("Archive creation failed: {0}")]
    Archive(String),
}

pub type Result<T> = std::result::Result<T, DistError>;

impl From<zip::result::ZipError> for DistError {
    fn from(err: zip::result::ZipError) -> Self {
        DistError::Archive(err.to_string())
    }
}
