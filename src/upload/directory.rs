use std::collections::BTreeSet;
use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use super::store::{file_name, Overwrite, PutStatus, RemoteStore};
use crate::error::{ReceiptError, Result};

/// A stage kept on the local filesystem at `root/account/stage`
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    stage_dir: PathBuf,
    stage: String,
}

impl DirectoryStore {
    /// `root` must already exist; the account and stage directories are created
    pub fn connect(root: &Path, account: &str, stage: &str) -> Result<Self> {
        if !root.is_dir() {
            return Err(ReceiptError::StoreUnreachable {
                store: root.display().to_string(),
                reason: "directory does not exist".to_string(),
            });
        }

        let stage_dir = root.join(account).join(stage);
        fs::create_dir_all(&stage_dir)?;
        Ok(Self {
            stage_dir,
            stage: stage.to_string(),
        })
    }

    pub fn stage_dir(&self) -> &Path {
        &self.stage_dir
    }
}

impl RemoteStore for DirectoryStore {
    fn describe(&self) -> String {
        format!("@{} ({})", self.stage, self.stage_dir.display())
    }

    fn list(&self) -> Result<BTreeSet<String>> {
        let mut names = BTreeSet::new();
        for entry in fs::read_dir(&self.stage_dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                if let Some(name) = entry.file_name().to_str() {
                    names.insert(name.to_string());
                }
            }
        }
        Ok(names)
    }

    fn put(&self, local: &Path, overwrite: Overwrite) -> Result<PutStatus> {
        let dest = self.stage_dir.join(file_name(local)?);
        let mut source = File::open(local)?;

        let mut target = match overwrite {
            // create_new makes the existence check and the create one step
            Overwrite::Never => match OpenOptions::new().write(true).create_new(true).open(&dest) {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(PutStatus::Skipped),
                Err(e) => return Err(e.into()),
            },
            Overwrite::Always => File::create(&dest)?,
        };

        // A partial file would be listed as present and skipped on the next run
        if let Err(e) = io::copy(&mut source, &mut target) {
            drop(target);
            let _ = fs::remove_file(&dest);
            return Err(e.into());
        }
        Ok(PutStatus::Uploaded)
    }
}
