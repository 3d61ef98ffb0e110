mod settings;

pub use settings::{
    Config, GeneratorSettings, StoreKind, StoreSettings, UploaderSettings, PLACEHOLDER_ACCOUNT,
};

use crate::error::{ReceiptError, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Stage used when neither the flag nor config.toml names one
pub const DEFAULT_STAGE: &str = "RECEIPTS_PROCESSING_DB.RAW.RECEIPTS";

/// Receipts directory used when neither the flag nor config.toml names one
pub const DEFAULT_RECEIPTS_DIR: &str = "../receipts";

/// Get the config directory path (~/.receipts/)
pub fn config_dir() -> Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "receipts") {
        return Ok(proj_dirs.config_dir().to_path_buf());
    }

    let home = dirs_home().ok_or_else(|| {
        ReceiptError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine home directory",
        ))
    })?;

    Ok(home.join(".receipts"))
}

fn dirs_home() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// Expand ~ in paths
pub fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs_home() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// Expand ~ and anchor relative paths at the config directory
pub fn resolve_path(path: &str, cfg_dir: &Path) -> PathBuf {
    let expanded = expand_path(path);
    if expanded.is_absolute() {
        expanded
    } else {
        cfg_dir.join(expanded)
    }
}

/// Load the main config.toml
pub fn load_config(cfg_dir: &Path) -> Result<Config> {
    if !cfg_dir.exists() {
        return Err(ReceiptError::ConfigNotFound(cfg_dir.to_path_buf()));
    }
    let path = cfg_dir.join("config.toml");
    if !path.exists() {
        return Err(ReceiptError::ConfigFileNotFound(path));
    }
    let content = fs::read_to_string(&path)?;
    toml::from_str(&content).map_err(|e| ReceiptError::ConfigParse { path, source: e })
}

/// Load config.toml when present, built-in defaults otherwise.
///
/// A config file that exists but does not parse is still an error.
pub fn load_config_or_default(cfg_dir: &Path) -> Result<Config> {
    if cfg_dir.join("config.toml").exists() {
        load_config(cfg_dir)
    } else {
        Ok(Config::default())
    }
}

/// Template content for config.toml
pub const CONFIG_TEMPLATE: &str = r#"[generator]
output_dir = "output"   # relative paths resolve against this directory
format = "pdf"          # "pdf" (needs the typst CLI) or "json"
# seed = 42             # optional, makes every batch reproducible

[uploader]
directory = "../receipts"
stage = "RECEIPTS_PROCESSING_DB.RAW.RECEIPTS"

[store]
kind = "directory"      # "directory" or "http"
account = "YOUR_ACCOUNT_IDENTIFIER"
# user = "svc_receipts"
path = "stage"          # directory stores: root holding <account>/<stage>/
# endpoint = "https://stage.example.com/api"   # http stores
# key_file = "~/.receipts/stage.token"         # http stores: bearer token
"#;
