use crate::error::Error;
use crate::result::Result;
use crate::sanitize::sanitize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Manifest file name inside the extension source directory.
pub const MANIFEST_FILE: &str = "manifest.json";

pub const DEFAULT_NAME: &str = "extension";
pub const DEFAULT_VERSION: &str = "0.0.0";

/// Extension metadata consulted for naming the archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub name: String,
    pub version: String,
}

impl Manifest {
    /// Load `manifest.json` from `path`.
    ///
    /// Absent `name`/`version` keys fall back to their defaults; any other
    /// content of the manifest is ignored.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ManifestNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let fields: Map<String, Value> = serde_json::from_str(content)?;

        let name = match fields.get("name") {
            None => DEFAULT_NAME.to_string(),
            Some(Value::String(name)) => name.clone(),
            Some(other) => {
                return Err(Error::InvalidManifest(format!(
                    "`name` must be a string, found {other}"
                )));
            }
        };

        // Any other JSON value is formatted as written.
        let version = match fields.get("version") {
            None => DEFAULT_VERSION.to_string(),
            Some(Value::String(version)) => version.clone(),
            Some(other) => other.to_string(),
        };

        Ok(Manifest { name, version })
    }

    /// Default archive file name: `{sanitized-name}-{version}.zip`
    pub fn archive_file_name(&self) -> String {
        format!("{}-{}.zip", sanitize(&self.name), self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_name_and_version() {
        let m = Manifest::from_json(r#"{"name": "My Ext!", "version": "1.2.3"}"#).unwrap();
        assert_eq!(m.name, "My Ext!");
        assert_eq!(m.version, "1.2.3");
        assert_eq!(m.archive_file_name(), "my-ext-1.2.3.zip");
    }

    #[test]
    fn test_defaults() {
        let m = Manifest::from_json(r#"{"name": "Tabs"}"#).unwrap();
        assert_eq!(m.archive_file_name(), "tabs-0.0.0.zip");

        let m = Manifest::from_json("{}").unwrap();
        assert_eq!(m.name, DEFAULT_NAME);
        assert_eq!(m.version, DEFAULT_VERSION);
        assert_eq!(m.archive_file_name(), "extension-0.0.0.zip");
    }

    #[test]
    fn test_other_keys_ignored() {
        let m = Manifest::from_json(
            r#"{"manifest_version": 3, "name": "x", "version": "2", "permissions": ["tabs"]}"#,
        )
        .unwrap();
        assert_eq!(m.archive_file_name(), "x-2.zip");
    }

    #[test]
    fn test_numeric_version() {
        let m = Manifest::from_json(r#"{"name": "x", "version": 1.5}"#).unwrap();
        assert_eq!(m.version, "1.5");
    }

    #[test]
    fn test_rejects_wrong_shapes() {
        assert!(matches!(
            Manifest::from_json("[1, 2]"),
            Err(Error::Json(_))
        ));
        assert!(matches!(
            Manifest::from_json("{ nope"),
            Err(Error::Json(_))
        ));
        assert!(matches!(
            Manifest::from_json(r#"{"name": 7}"#),
            Err(Error::InvalidManifest(_))
        ));
        assert!(matches!(
            Manifest::from_json(r#"{"name": null}"#),
            Err(Error::InvalidManifest(_))
        ));
    }

    #[test]
    fn test_non_string_version_is_lenient() {
        let version = |json: &str| Manifest::from_json(json).unwrap().archive_file_name();
        assert_eq!(version(r#"{"name": "x", "version": null}"#), "x-null.zip");
        assert_eq!(version(r#"{"name": "x", "version": true}"#), "x-true.zip");
        assert_eq!(version(r#"{"name": "x", "version": [1, 2]}"#), "x-[1,2].zip");
    }

    #[test]
    fn test_load_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(MANIFEST_FILE);
        let err = Manifest::load(&path).unwrap_err();
        assert!(matches!(err, Error::ManifestNotFound(_)));
        assert!(err.to_string().contains("manifest.json"));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(MANIFEST_FILE);
        fs::write(&path, r#"{"name": "Disk", "version": "0.1"}"#).unwrap();
        assert_eq!(
            Manifest::load(&path).unwrap(),
            Manifest {
                name: "Disk".to_string(),
                version: "0.1".to_string()
            }
        );
    }
}
