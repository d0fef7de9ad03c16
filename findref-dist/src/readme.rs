use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::matrix::{ReleaseMatrix, LATEST};
use crate::template;

/// Placeholder the README template carries for the generated table.
const TABLE_PLACEHOLDER: &str = "release_table";

const TABLE_HEADER: &str = "| Version | Linux | macOS | Windows |\n\
                            |:-------:|:-----:|:-----:|:-------:|\n";

/// Known releases in the bin repo, newest first. The `latest` alias is not a
/// release of its own.
pub fn releases(bin_repo: &Path) -> Result<Vec<String>> {
    let mut releases = Vec::new();

    if !bin_repo.is_dir() {
        return Ok(releases);
    }

    for entry in fs::read_dir(bin_repo)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name != LATEST {
            releases.push(name);
        }
    }

    releases.sort();
    releases.reverse();
    Ok(releases)
}

/// Download URL for one staged archive.
pub fn download_url(base_url: &str, release: &str, os: &str, arch: &str, archive: &str) -> String {
    format!("{base_url}/{release}/{os}/{arch}/{archive}")
}

/// Arches staged on disk for one (release, os), listed in platform-table
/// order. Dirs the table does not know about come after, sorted.
fn staged_arches(bin_repo: &Path, release: &str, os: &str, table_arches: &[String]) -> Vec<String> {
    let os_dir = bin_repo.join(release).join(os);
    let mut on_disk = Vec::new();

    if let Ok(entries) = fs::read_dir(&os_dir) {
        for entry in entries.flatten() {
            if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
                on_disk.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
    }

    let mut ordered: Vec<String> = table_arches
        .iter()
        .filter(|a| on_disk.iter().any(|d| d == *a))
        .cloned()
        .collect();

    let mut extras: Vec<String> = on_disk
        .into_iter()
        .filter(|d| !table_arches.contains(d))
        .collect();
    extras.sort();
    ordered.extend(extras);

    ordered
}

fn links_cell(
    bin_repo: &Path,
    base_url: &str,
    matrix: &ReleaseMatrix,
    release: &str,
    os: &str,
) -> String {
    let table_arches = matrix
        .platforms()
        .iter()
        .find(|p| p.os == os)
        .map(|p| p.arches.as_slice())
        .unwrap_or(&[]);

    let archive = matrix.archive_name();
    staged_arches(bin_repo, release, os, table_arches)
        .iter()
        .map(|arch| {
            let url = download_url(base_url, release, os, arch, &archive);
            format!("[{arch}]({url})")
        })
        .collect::<Vec<String>>()
        .join(" - ")
}

/// One table row: version column plus per-OS link cells.
pub fn release_row(
    bin_repo: &Path,
    base_url: &str,
    matrix: &ReleaseMatrix,
    release: &str,
) -> String {
    let linux = links_cell(bin_repo, base_url, matrix, release, "linux");
    let mac = links_cell(bin_repo, base_url, matrix, release, "darwin");
    let windows = links_cell(bin_repo, base_url, matrix, release, "windows");
    format!("| {release} | {linux} | {mac} | {windows} |")
}

/// The full download table: fixed two-row header, the `latest` alias row,
/// then one row per known release, newest first.
pub fn render_table(bin_repo: &Path, base_url: &str, matrix: &ReleaseMatrix) -> Result<String> {
    let mut rows = vec![release_row(bin_repo, base_url, matrix, LATEST)];
    for release in releases(bin_repo)? {
        rows.push(release_row(bin_repo, base_url, matrix, &release));
    }
    Ok(format!("{TABLE_HEADER}{}", rows.join("\n")))
}

/// Render the README from its template and write it out.
pub fn generate(config: &Config, matrix: &ReleaseMatrix, output: Option<&Path>) -> Result<()> {
    let tmpl = template::load(&config.readme.template)?;
    let table = render_table(&config.project.bin_repo, &config.project.base_url, matrix)?;
    let rendered = template::render(&tmpl, &[(TABLE_PLACEHOLDER, &table)]);

    let output = output.unwrap_or(config.readme.output.as_path());
    fs::write(output, rendered)?;
    tracing::info!("Wrote {}", output.display());
    Ok(())
}
