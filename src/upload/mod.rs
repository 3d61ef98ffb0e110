mod directory;
mod http;
mod store;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::{resolve_path, StoreKind, StoreSettings};
use crate::error::{ReceiptError, Result};

pub use directory::DirectoryStore;
pub use http::{put_status, HttpStore};
pub use store::{Overwrite, PutStatus, RemoteStore};

/// Counts and per-file outcomes of one upload run
#[derive(Debug, Default)]
pub struct UploadSummary {
    /// PDFs found in the local directory
    pub local: usize,
    /// Local names the remote listing already had
    pub already_present: usize,
    /// Whether listing the remote failed and it was treated as empty
    pub listing_failed: bool,
    /// Outcome of each attempted put, in upload order
    pub results: Vec<(String, PutStatus)>,
    /// Remote file count after uploading, when anything was uploaded
    pub remote_total: Option<usize>,
}

impl UploadSummary {
    pub fn attempted(&self) -> usize {
        self.results.len()
    }

    pub fn uploaded(&self) -> usize {
        self.count(|s| matches!(s, PutStatus::Uploaded))
    }

    pub fn skipped(&self) -> usize {
        self.count(|s| matches!(s, PutStatus::Skipped))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, PutStatus::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&PutStatus) -> bool) -> usize {
        self.results.iter().filter(|(_, s)| pred(s)).count()
    }
}

/// Open the store described by `settings` for `stage`.
///
/// Settings are validated first, so a placeholder account or a missing key
/// file fails before any connection is attempted.
pub fn connect_store(
    settings: &StoreSettings,
    cfg_dir: &Path,
    stage: &str,
) -> Result<Box<dyn RemoteStore>> {
    settings.validate(cfg_dir)?;

    let missing = |field: &str| ReceiptError::InvalidConfig(format!("store requires '{field}'"));
    match settings.kind {
        StoreKind::Directory => {
            let root = settings.path.as_deref().ok_or_else(|| missing("path"))?;
            let store = DirectoryStore::connect(&resolve_path(root, cfg_dir), &settings.account, stage)?;
            Ok(Box::new(store))
        }
        StoreKind::Http => {
            let endpoint = settings.endpoint.as_deref().ok_or_else(|| missing("endpoint"))?;
            let key_file = settings.key_file.as_deref().ok_or_else(|| missing("key_file"))?;
            let key_path = resolve_path(key_file, cfg_dir);
            let token = fs::read_to_string(&key_path)
                .map_err(|_| ReceiptError::MissingCredential(key_path.clone()))?;
            Ok(Box::new(HttpStore::connect(endpoint, stage, &token)?))
        }
    }
}

/// PDF files directly inside `dir`, sorted by name; empty when `dir` is missing
pub fn local_receipts(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_pdf = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if is_pdf && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Upload every local PDF the store does not already hold
pub fn upload_receipts(store: &dyn RemoteStore, dir: &Path) -> Result<UploadSummary> {
    upload_receipts_with(store, dir, |_, _, _, _| {})
}

/// Like `upload_receipts`, calling `progress(position, total, name, status)`
/// after each put
pub fn upload_receipts_with<F>(
    store: &dyn RemoteStore,
    dir: &Path,
    mut progress: F,
) -> Result<UploadSummary>
where
    F: FnMut(usize, usize, &str, &PutStatus),
{
    let local = local_receipts(dir)?;
    let mut summary = UploadSummary {
        local: local.len(),
        ..Default::default()
    };
    if local.is_empty() {
        debug!(dir = %dir.display(), "no receipts to upload");
        return Ok(summary);
    }

    let remote = match store.list() {
        Ok(names) => names,
        Err(e) => {
            warn!(store = %store.describe(), error = %e, "could not list stage, assuming it is empty");
            summary.listing_failed = true;
            Default::default()
        }
    };

    // Names the stage cannot hold are reported as failures, never as present
    let mut pending: Vec<(String, Option<&PathBuf>)> = Vec::new();
    for path in &local {
        match path.file_name().and_then(|n| n.to_str()) {
            Some(name) if remote.contains(name) => summary.already_present += 1,
            Some(name) => pending.push((name.to_string(), Some(path))),
            None => {
                let name = path.file_name().unwrap_or_default().to_string_lossy();
                pending.push((name.into_owned(), None));
            }
        }
    }

    let total = pending.len();
    for (i, (name, path)) in pending.into_iter().enumerate() {
        let status = match path {
            Some(path) => match store.put(path, Overwrite::Never) {
                Ok(status) => status,
                Err(e) => PutStatus::Failed(e.to_string()),
            },
            None => PutStatus::Failed("not a UTF-8 file name".to_string()),
        };
        progress(i + 1, total, &name, &status);
        summary.results.push((name, status));
    }

    if summary.uploaded() > 0 {
        match store.list() {
            Ok(names) => summary.remote_total = Some(names.len()),
            Err(e) => warn!(error = %e, "could not verify stage contents"),
        }
    }

    Ok(summary)
}
