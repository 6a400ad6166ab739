use thiserror::Error;

/// Exit status used when the source directory has no `manifest.json`.
pub const EXIT_MANIFEST_NOT_FOUND: i32 = 2;

/// Exit status for every other failure.
pub const EXIT_FAILURE: i32 = 1;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0} not found")]
    ManifestNotFound(String),

    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),

    #[error("Manifest is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unable to walk source directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("{0}")]
    Custom(String),
}

impl Error {
    pub fn custom<T: Into<String>>(msg: T) -> Self {
        Error::Custom(msg.into())
    }

    /// Process exit status reported for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ManifestNotFound(_) => EXIT_MANIFEST_NOT_FOUND,
            _ => EXIT_FAILURE,
        }
    }
}
