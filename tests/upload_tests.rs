use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use receipts::config::{StoreKind, StoreSettings};
use receipts::upload::{
    connect_store, local_receipts, put_status, upload_receipts, DirectoryStore, Overwrite,
    PutStatus, RemoteStore,
};
use receipts::{ReceiptError, Result};
use tempfile::TempDir;

fn write_pdfs(dir: &Path, names: &[&str]) {
    fs::create_dir_all(dir).unwrap();
    for name in names {
        fs::write(dir.join(name), format!("%PDF-1.7 {name}")).unwrap();
    }
}

fn directory_settings(path: &str, account: &str) -> StoreSettings {
    StoreSettings {
        kind: StoreKind::Directory,
        account: account.to_string(),
        user: None,
        endpoint: None,
        path: Some(path.to_string()),
        key_file: None,
    }
}

#[test]
fn test_existing_file_is_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let local = temp_dir.path().join("receipts");
    write_pdfs(&local, &["X.pdf"]);

    let store = DirectoryStore::connect(temp_dir.path(), "acct", "STAGE").unwrap();
    fs::write(store.stage_dir().join("X.pdf"), "already there").unwrap();

    let status = store.put(&local.join("X.pdf"), Overwrite::Never).unwrap();
    assert_eq!(status, PutStatus::Skipped);
    assert_eq!(
        fs::read_to_string(store.stage_dir().join("X.pdf")).unwrap(),
        "already there"
    );

    let summary = upload_receipts(&store, &local).unwrap();
    assert_eq!(summary.local, 1);
    assert_eq!(summary.already_present, 1);
    assert_eq!(summary.attempted(), 0);
}

#[cfg(unix)]
#[test]
fn test_failed_copy_leaves_nothing_in_stage() {
    let temp_dir = TempDir::new().unwrap();
    let local = temp_dir.path().join("receipts");
    // A directory opens on unix but fails to read, so the copy breaks midway
    fs::create_dir_all(local.join("X.pdf")).unwrap();

    let store = DirectoryStore::connect(temp_dir.path(), "acct", "STAGE").unwrap();
    assert!(store.put(&local.join("X.pdf"), Overwrite::Never).is_err());
    assert!(store.list().unwrap().is_empty());

    fs::remove_dir(local.join("X.pdf")).unwrap();
    fs::write(local.join("X.pdf"), "%PDF-1.7 X").unwrap();
    let status = store.put(&local.join("X.pdf"), Overwrite::Never).unwrap();
    assert_eq!(status, PutStatus::Uploaded);
    assert_eq!(
        fs::read_to_string(store.stage_dir().join("X.pdf")).unwrap(),
        "%PDF-1.7 X"
    );
}

#[cfg(target_os = "linux")]
#[test]
fn test_non_utf8_name_counts_as_failed() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp_dir = TempDir::new().unwrap();
    let local = temp_dir.path().join("receipts");
    write_pdfs(&local, &["a.pdf"]);
    fs::write(local.join(OsStr::from_bytes(b"bad\xff.pdf")), "%PDF-1.7").unwrap();

    let store = ScriptedStore::new(Some(&[]), &[]);
    let summary = upload_receipts(&store, &local).unwrap();

    assert_eq!(summary.local, 2);
    assert_eq!(summary.already_present, 0);
    assert_eq!(summary.uploaded(), 1);
    assert_eq!(summary.failed(), 1);
    assert_eq!(*store.puts.borrow(), vec!["a.pdf"]);
}

#[test]
fn test_second_run_uploads_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let local = temp_dir.path().join("receipts");
    write_pdfs(&local, &["b.pdf", "a.pdf", "c.pdf"]);
    fs::write(local.join("notes.txt"), "not a receipt").unwrap();

    let store = DirectoryStore::connect(temp_dir.path(), "acct", "STAGE").unwrap();

    let first = upload_receipts(&store, &local).unwrap();
    assert_eq!(first.uploaded(), 3);
    assert_eq!(first.failed(), 0);
    assert_eq!(first.remote_total, Some(3));
    let order: Vec<&str> = first.results.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(order, vec!["a.pdf", "b.pdf", "c.pdf"]);

    let second = upload_receipts(&store, &local).unwrap();
    assert_eq!(second.uploaded(), 0);
    assert_eq!(second.attempted(), 0);
    assert_eq!(second.already_present, 3);
    assert_eq!(second.remote_total, None);

    assert_eq!(store.list().unwrap().len(), 3);
}

#[test]
fn test_missing_directory_is_a_no_op() {
    let temp_dir = TempDir::new().unwrap();
    let store = DirectoryStore::connect(temp_dir.path(), "acct", "STAGE").unwrap();

    let summary = upload_receipts(&store, &temp_dir.path().join("nope")).unwrap();
    assert_eq!(summary.local, 0);
    assert_eq!(summary.attempted(), 0);
}

#[test]
fn test_local_receipts_only_pdfs_sorted() {
    let temp_dir = TempDir::new().unwrap();
    write_pdfs(temp_dir.path(), &["z.pdf", "m.PDF", "a.pdf"]);
    fs::write(temp_dir.path().join("a.json"), "{}").unwrap();
    fs::create_dir(temp_dir.path().join("dir.pdf")).unwrap();

    let files = local_receipts(temp_dir.path()).unwrap();
    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap())
        .collect();
    assert_eq!(names, vec!["a.pdf", "m.PDF", "z.pdf"]);
}

#[test]
fn test_directory_store_needs_root() {
    let temp_dir = TempDir::new().unwrap();
    let result = DirectoryStore::connect(&temp_dir.path().join("missing"), "acct", "STAGE");
    assert!(matches!(result, Err(ReceiptError::StoreUnreachable { .. })));
}

/// Store with a scripted listing and put results
struct ScriptedStore {
    listing: Option<BTreeSet<String>>,
    refuse: BTreeSet<String>,
    puts: RefCell<Vec<String>>,
}

impl ScriptedStore {
    fn new(listing: Option<&[&str]>, refuse: &[&str]) -> Self {
        Self {
            listing: listing.map(|names| names.iter().map(|n| n.to_string()).collect()),
            refuse: refuse.iter().map(|n| n.to_string()).collect(),
            puts: RefCell::new(Vec::new()),
        }
    }
}

impl RemoteStore for ScriptedStore {
    fn describe(&self) -> String {
        "@SCRIPTED".to_string()
    }

    fn list(&self) -> Result<BTreeSet<String>> {
        self.listing
            .clone()
            .ok_or_else(|| ReceiptError::StoreRequest {
                target: "@SCRIPTED".to_string(),
                reason: "listing disabled".to_string(),
            })
    }

    fn put(&self, local: &Path, _overwrite: Overwrite) -> Result<PutStatus> {
        let name = local.file_name().unwrap().to_str().unwrap().to_string();
        self.puts.borrow_mut().push(name.clone());
        if name.starts_with("boom") {
            return Err(ReceiptError::StoreRequest {
                target: name,
                reason: "connection reset".to_string(),
            });
        }
        if self.refuse.contains(&name) {
            return Ok(put_status(412));
        }
        Ok(put_status(201))
    }
}

#[test]
fn test_only_missing_names_are_put() {
    let temp_dir = TempDir::new().unwrap();
    write_pdfs(temp_dir.path(), &["a.pdf", "b.pdf", "c.pdf"]);

    let store = ScriptedStore::new(Some(&["b.pdf"]), &["c.pdf"]);
    let summary = upload_receipts(&store, temp_dir.path()).unwrap();

    assert_eq!(*store.puts.borrow(), vec!["a.pdf", "c.pdf"]);
    assert_eq!(summary.already_present, 1);
    assert_eq!(summary.uploaded(), 1);
    assert_eq!(summary.skipped(), 1);
    assert_eq!(summary.failed(), 0);
}

#[test]
fn test_failed_listing_assumes_empty_stage() {
    let temp_dir = TempDir::new().unwrap();
    write_pdfs(temp_dir.path(), &["a.pdf", "boom.pdf"]);

    let store = ScriptedStore::new(None, &[]);
    let summary = upload_receipts(&store, temp_dir.path()).unwrap();

    assert!(summary.listing_failed);
    assert_eq!(summary.attempted(), 2);
    assert_eq!(summary.uploaded(), 1);
    assert_eq!(summary.failed(), 1);
    assert_eq!(summary.remote_total, None);
}

#[test]
fn test_put_status_from_http_code() {
    assert_eq!(put_status(200), PutStatus::Uploaded);
    assert_eq!(put_status(201), PutStatus::Uploaded);
    assert_eq!(put_status(409), PutStatus::Skipped);
    assert_eq!(put_status(412), PutStatus::Skipped);
    assert!(matches!(put_status(500), PutStatus::Failed(_)));
    assert!(matches!(put_status(403), PutStatus::Failed(_)));
}

#[test]
fn test_connect_store_validates_first() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_str().unwrap();

    let placeholder = directory_settings(root, "YOUR_ACCOUNT_IDENTIFIER");
    assert!(matches!(
        connect_store(&placeholder, temp_dir.path(), "STAGE"),
        Err(ReceiptError::PlaceholderAccount(_))
    ));

    let http = StoreSettings {
        kind: StoreKind::Http,
        endpoint: Some("http://127.0.0.1:9".to_string()),
        key_file: Some("missing.token".to_string()),
        ..directory_settings(root, "acct")
    };
    assert!(matches!(
        connect_store(&http, temp_dir.path(), "STAGE"),
        Err(ReceiptError::MissingCredential(_))
    ));

    let store = connect_store(&directory_settings(root, "acct"), temp_dir.path(), "STAGE").unwrap();
    assert!(store.describe().contains("STAGE"));
    assert!(temp_dir.path().join("acct").join("STAGE").is_dir());
}
