use std::collections::BTreeSet;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;
use ureq::Agent;

use super::store::{file_name, Overwrite, PutStatus, RemoteStore};
use crate::error::{ReceiptError, Result};

#[derive(Debug, Deserialize)]
struct Listing {
    files: Vec<ListedFile>,
}

#[derive(Debug, Deserialize)]
struct ListedFile {
    name: String,
}

/// A stage served over HTTP.
///
/// `GET {endpoint}/stages/{stage}` must succeed to connect,
/// `GET .../files` lists and `PUT .../files/{name}` uploads.
pub struct HttpStore {
    agent: Agent,
    stage_url: String,
    stage: String,
    token: String,
}

impl HttpStore {
    pub fn connect(endpoint: &str, stage: &str, token: &str) -> Result<Self> {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            .http_status_as_error(false)
            .build()
            .into();

        let store = Self {
            agent,
            stage_url: format!("{}/stages/{}", endpoint.trim_end_matches('/'), stage),
            stage: stage.to_string(),
            token: token.trim().to_string(),
        };

        let unreachable = |reason: String| ReceiptError::StoreUnreachable {
            store: store.stage_url.clone(),
            reason,
        };
        let response = store
            .agent
            .get(&store.stage_url)
            .header("Authorization", &store.bearer())
            .call()
            .map_err(|e| unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(unreachable(format!("HTTP {}", status.as_u16())));
        }

        Ok(store)
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    fn files_url(&self) -> String {
        format!("{}/files", self.stage_url)
    }
}

/// Map an upload response code onto a put status
pub fn put_status(code: u16) -> PutStatus {
    match code {
        200..=299 => PutStatus::Uploaded,
        409 | 412 => PutStatus::Skipped,
        other => PutStatus::Failed(format!("HTTP {other}")),
    }
}

impl RemoteStore for HttpStore {
    fn describe(&self) -> String {
        format!("@{} ({})", self.stage, self.stage_url)
    }

    fn list(&self) -> Result<BTreeSet<String>> {
        let url = self.files_url();
        let request_failed = |reason: String| ReceiptError::StoreRequest {
            target: url.clone(),
            reason,
        };

        let mut response = self
            .agent
            .get(&url)
            .header("Authorization", &self.bearer())
            .call()
            .map_err(|e| request_failed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(request_failed(format!("HTTP {}", status.as_u16())));
        }

        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| request_failed(e.to_string()))?;
        let listing: Listing = serde_json::from_str(&body)?;

        // Listings may carry stage-relative paths; keep the bare name
        Ok(listing
            .files
            .into_iter()
            .filter_map(|f| f.name.rsplit('/').next().map(str::to_string))
            .collect())
    }

    fn put(&self, local: &Path, overwrite: Overwrite) -> Result<PutStatus> {
        let name = file_name(local)?;
        let url = format!("{}/{}", self.files_url(), name);
        let data = std::fs::read(local)?;

        let mut request = self
            .agent
            .put(&url)
            .header("Authorization", &self.bearer())
            .header("Content-Type", "application/pdf");
        if overwrite == Overwrite::Never {
            request = request.header("If-None-Match", "*");
        }

        let response = request.send(&data[..]).map_err(|e| ReceiptError::StoreRequest {
            target: url.clone(),
            reason: e.to_string(),
        })?;

        let code = response.status().as_u16();
        debug!(file = name, status = code, "put response");
        Ok(put_status(code))
    }
}
