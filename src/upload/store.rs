use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use crate::error::{ReceiptError, Result};

/// What to do when the destination already holds a file with the same name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    Never,
    Always,
}

/// Result of putting one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PutStatus {
    Uploaded,
    /// The name was already present and nothing was written
    Skipped,
    Failed(String),
}

impl fmt::Display for PutStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PutStatus::Uploaded => write!(f, "UPLOADED"),
            PutStatus::Skipped => write!(f, "SKIPPED (already exists)"),
            PutStatus::Failed(reason) => write!(f, "FAILED ({reason})"),
        }
    }
}

/// A remote destination for receipt files
pub trait RemoteStore {
    /// Human-readable name of the destination, for progress output
    fn describe(&self) -> String;

    /// Bare file names currently present
    fn list(&self) -> Result<BTreeSet<String>>;

    fn put(&self, local: &Path, overwrite: Overwrite) -> Result<PutStatus>;
}

/// The bare file name of `path` as UTF-8
pub(crate) fn file_name(path: &Path) -> Result<&str> {
    path.file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| ReceiptError::StoreRequest {
            target: path.display().to_string(),
            reason: "not a file name".to_string(),
        })
}
