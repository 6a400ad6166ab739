use crate::args::Args;
use crate::result::Result;
use std::path::{Path, PathBuf};

/// Context passed throughout the application containing run configuration
#[derive(Clone, Debug)]
pub struct Context {
    /// Report progress on stderr
    pub verbose: bool,

    /// Extension source directory (contains manifest.json)
    pub source_dir: PathBuf,

    /// Directory the archive is written into
    pub output_dir: PathBuf,

    /// Explicit archive file name, bypassing the manifest-derived one
    pub archive_name: Option<String>,
}

impl Context {
    pub fn new(
        source_dir: PathBuf,
        output_dir: PathBuf,
        archive_name: Option<String>,
        verbose: bool,
    ) -> Self {
        Self {
            verbose,
            source_dir,
            output_dir,
            archive_name,
        }
    }

    /// Build a context from parsed arguments, resolving relative paths
    /// against the current directory.
    pub fn from_args(args: Args) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(
            absolutize(&cwd, &args.src),
            absolutize(&cwd, &args.out),
            args.name,
            args.verbose,
        ))
    }

    /// Location of the extension manifest
    pub fn manifest_path(&self) -> PathBuf {
        self.source_dir.join(crate::manifest::MANIFEST_FILE)
    }
}

fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolutize() {
        let base = std::env::temp_dir();
        assert_eq!(absolutize(&base, Path::new("dist")), base.join("dist"));
        assert_eq!(absolutize(&base, &base.join("x")), base.join("x"));
    }

    #[test]
    fn test_manifest_path() {
        let ctx = Context::new(PathBuf::from("/src/ext"), PathBuf::from("/out"), None, false);
        assert_eq!(
            ctx.manifest_path(),
            PathBuf::from("/src/ext").join("manifest.json")
        );
    }
}
