use crate::error::Error;
use crate::result::Result;
use std::fs;
use std::path::{Component, Path};

/// Ensure a directory exists, creating it and its parents if necessary
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Archive entry name for `path` relative to `root`, always `/`-separated
pub fn archive_path(root: &Path, path: &Path) -> Result<String> {
    let relative = path.strip_prefix(root).map_err(|_| {
        Error::custom(format!(
            "{} is not inside {}",
            path.display(),
            root.display()
        ))
    })?;

    let parts = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>();

    Ok(parts.join("/"))
}
