use serde::{Deserialize, Serialize};
use std::path::Path;

use super::resolve_path;
use crate::error::{ReceiptError, Result};
use crate::pdf::OutputFormat;

/// Account value shipped in the config template; must be replaced before uploading.
pub const PLACEHOLDER_ACCOUNT: &str = "YOUR_ACCOUNT_IDENTIFIER";

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorSettings,
    #[serde(default)]
    pub uploader: UploaderSettings,
    #[serde(default)]
    pub store: Option<StoreSettings>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct GeneratorSettings {
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default)]
    pub format: OutputFormat,
    /// Fixed seed for reproducible batches
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            format: OutputFormat::default(),
            seed: None,
        }
    }
}

fn default_output_dir() -> String {
    "output".to_string()
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct UploaderSettings {
    /// Local directory holding receipt PDFs
    #[serde(default)]
    pub directory: Option<String>,
    /// Fully qualified stage name
    #[serde(default)]
    pub stage: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    Directory,
    Http,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StoreSettings {
    pub kind: StoreKind,
    pub account: String,
    #[serde(default)]
    pub user: Option<String>,
    /// Base URL of the stage service (http stores)
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Root directory holding staged files (directory stores)
    #[serde(default)]
    pub path: Option<String>,
    /// File holding the bearer token (http stores)
    #[serde(default)]
    pub key_file: Option<String>,
}

impl StoreSettings {
    /// Reject placeholder or incomplete settings before any connection is attempted.
    pub fn validate(&self, cfg_dir: &Path) -> Result<()> {
        if self.account.trim().is_empty() || self.account == PLACEHOLDER_ACCOUNT {
            return Err(ReceiptError::PlaceholderAccount(self.account.clone()));
        }

        match self.kind {
            StoreKind::Directory => {
                if self.path.is_none() {
                    return Err(ReceiptError::InvalidConfig(
                        "directory store requires 'path'".to_string(),
                    ));
                }
            }
            StoreKind::Http => {
                if self.endpoint.is_none() {
                    return Err(ReceiptError::InvalidConfig(
                        "http store requires 'endpoint'".to_string(),
                    ));
                }
                let key_file = self.key_file.as_deref().ok_or_else(|| {
                    ReceiptError::InvalidConfig("http store requires 'key_file'".to_string())
                })?;
                let key_path = resolve_path(key_file, cfg_dir);
                if !key_path.exists() {
                    return Err(ReceiptError::MissingCredential(key_path));
                }
            }
        }

        Ok(())
    }
}
