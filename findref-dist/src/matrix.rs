use std::path::{Path, PathBuf};

/// Directory alias that always mirrors the most recently published release.
pub const LATEST: &str = "latest";

/// One operating system and the architectures it builds for, in the order
/// dependent tooling expects them to be listed.
#[derive(Debug, Clone)]
pub struct Platform {
    pub os: String,
    pub arches: Vec<String>,
}

impl Platform {
    pub fn new(os: &str, arches: &[&str]) -> Self {
        Self {
            os: os.to_string(),
            arches: arches.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// A native package format produced for Linux targets.
#[derive(Debug, Clone)]
pub struct PackageFormat {
    /// Packager name as the packaging tool knows it (deb, rpm, apk, ...).
    pub packager: String,
    /// File extension of the produced package.
    pub extension: String,
    /// When set, the format only applies to these arches.
    pub restricted_arches: Option<Vec<String>>,
}

impl PackageFormat {
    pub fn new(packager: &str, extension: &str) -> Self {
        Self {
            packager: packager.to_string(),
            extension: extension.to_string(),
            restricted_arches: None,
        }
    }

    pub fn restricted_to(mut self, arches: &[&str]) -> Self {
        self.restricted_arches = Some(arches.iter().map(|a| a.to_string()).collect());
        self
    }

    /// Whether this format applies to the given arch.
    pub fn applies_to(&self, arch: &str) -> bool {
        match &self.restricted_arches {
            Some(arches) => arches.iter().any(|a| a == arch),
            None => true,
        }
    }
}

/// Translate a generic arch token into the packaging ecosystem's own
/// vocabulary. Unknown packagers and unknown arches both degrade to the
/// original token, so unmapped targets still build.
pub fn package_arch<'a>(packager: &str, arch: &'a str) -> &'a str {
    match (packager, arch) {
        ("deb", "386") => "i386",
        ("deb", "arm") => "armhf",
        ("rpm", "amd64") => "x86_64",
        ("rpm", "386") => "i686",
        ("rpm", "arm") => "armv7hl",
        ("rpm", "arm64") => "aarch64",
        ("apk", "amd64") => "x86_64",
        ("apk", "386") => "x86",
        ("apk", "arm") => "armv7",
        ("apk", "arm64") => "aarch64",
        ("archlinux", "amd64") => "x86_64",
        _ => arch,
    }
}

/// Maps a release across the (os, arch, package format) cross-product into a
/// deterministic set of jobs, filenames and staged output paths.
///
/// All tables are immutable data supplied at construction time; tests can
/// substitute their own.
#[derive(Debug, Clone)]
pub struct ReleaseMatrix {
    name: String,
    platforms: Vec<Platform>,
    formats: Vec<PackageFormat>,
}

impl ReleaseMatrix {
    pub fn new(name: &str, platforms: Vec<Platform>, formats: Vec<PackageFormat>) -> Self {
        Self {
            name: name.to_string(),
            platforms,
            formats,
        }
    }

    /// The standard findref platform and package tables.
    pub fn with_default_tables(name: &str) -> Self {
        Self::new(name, default_platforms(), default_formats())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    /// All (os, arch) build targets, OS outer loop, arch inner loop, in
    /// table order. The ordering is a visible contract: the README lists
    /// architectures in exactly this order.
    pub fn targets(&self) -> impl Iterator<Item = (&str, &str)> {
        self.platforms
            .iter()
            .flat_map(|p| p.arches.iter().map(move |a| (p.os.as_str(), a.as_str())))
    }

    /// Package formats applicable to one target, in table order. Only Linux
    /// targets are packaged.
    pub fn package_jobs<'a>(
        &'a self,
        os: &str,
        arch: &'a str,
    ) -> impl Iterator<Item = &'a PackageFormat> {
        let packaged = os == "linux";
        self.formats
            .iter()
            .filter(move |f| packaged && f.applies_to(arch))
    }

    /// Filename of one native package. The pattern is packager-specific;
    /// unrecognized packagers silently get the default pattern.
    pub fn package_filename(&self, format: &PackageFormat, release: &str, arch: &str) -> String {
        let name = &self.name;
        let ext = &format.extension;
        let pkg_arch = package_arch(&format.packager, arch);
        match format.packager.as_str() {
            "deb" => format!("{name}_{release}_{pkg_arch}.{ext}"),
            "rpm" => format!("{name}-{release}-1.{pkg_arch}.{ext}"),
            "apk" => format!("{name}-{release}.{pkg_arch}.{ext}"),
            "archlinux" => format!("{name}-{release}-1-{pkg_arch}.{ext}"),
            _ => format!("{name}-{release}-{pkg_arch}.{ext}"),
        }
    }

    /// The two directories every artifact of a target is published to: the
    /// continuously overwritten `latest` alias and the permanent versioned
    /// copy. They differ only in that one path segment.
    pub fn destination_dirs(
        &self,
        bin_repo: &Path,
        release: &str,
        os: &str,
        arch: &str,
    ) -> [PathBuf; 2] {
        [LATEST, release].map(|rel| bin_repo.join(rel).join(os).join(arch))
    }

    /// Name of the built binary for an OS.
    pub fn binary_name(&self, os: &str) -> String {
        if os == "windows" {
            format!("{}.exe", self.name)
        } else {
            self.name.clone()
        }
    }

    /// Name of the zipped artifact, identical across all targets.
    pub fn archive_name(&self) -> String {
        format!("{}.zip", self.name)
    }
}

fn default_platforms() -> Vec<Platform> {
    vec![
        Platform::new("linux", &["amd64", "386", "arm", "arm64"]),
        Platform::new("windows", &["amd64", "386"]),
        Platform::new("darwin", &["amd64", "arm64"]),
    ]
}

fn default_formats() -> Vec<PackageFormat> {
    vec![
        PackageFormat::new("deb", "deb"),
        PackageFormat::new("rpm", "rpm"),
        PackageFormat::new("apk", "apk"),
        PackageFormat::new("archlinux", "pkg.tar.zst").restricted_to(&["amd64"]),
    ]
}
