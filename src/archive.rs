use crate::context::Context;
use crate::result::Result;
use crate::utils;
use std::fs::{self, File};
use std::io;
use std::path::Path;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// File names that never belong in a bundle
const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Write every non-directory file under `source_dir` into a deflate zip at
/// `output_path`, returning the entry names in the order they were written.
///
/// `output_path` itself is skipped if it lies inside the source tree.
pub fn create_zip(ctx: &Context, source_dir: &Path, output_path: &Path) -> Result<Vec<String>> {
    let file = File::create(output_path)?;
    let output_path = fs::canonicalize(output_path)?;
    let mut zip = ZipWriter::new(file);
    let mut entries = Vec::new();

    let walkdir = WalkDir::new(source_dir).sort_by_file_name();

    for entry in walkdir {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() || is_ignored(path) {
            continue;
        }
        if fs::canonicalize(path).is_ok_and(|p| p == output_path) {
            continue;
        }

        let name = utils::archive_path(source_dir, path)?;
        if ctx.verbose {
            cliclack::log::step(format!("adding {name}"))?;
        }

        zip.start_file(name.as_str(), entry_options(path)?)?;
        let mut f = File::open(path)?;
        io::copy(&mut f, &mut zip)?;

        entries.push(name);
    }

    zip.finish()?;
    Ok(entries)
}

fn is_ignored(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| IGNORED_FILES.contains(&name))
}

#[cfg(unix)]
fn entry_options(path: &Path) -> Result<SimpleFileOptions> {
    use std::os::unix::fs::PermissionsExt;
    let mode = fs::metadata(path)?.permissions().mode();
    Ok(SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(mode & 0o777))
}

#[cfg(not(unix))]
fn entry_options(_path: &Path) -> Result<SimpleFileOptions> {
    Ok(SimpleFileOptions::default().compression_method(CompressionMethod::Deflated))
}
