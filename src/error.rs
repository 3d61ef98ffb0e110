use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReceiptError {
    #[error("Config directory not found at {0}. Run 'receipts init' to create it.")]
    ConfigNotFound(PathBuf),

    #[error("Config file not found: {0}")]
    ConfigFileNotFound(PathBuf),

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config directory already exists at {0}")]
    AlreadyInitialized(PathBuf),

    #[error("Please update the 'account' value in config.toml (still set to '{0}')")]
    PlaceholderAccount(String),

    #[error("Credential file not found at {0}")]
    MissingCredential(PathBuf),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Could not reach store {store}: {reason}")]
    StoreUnreachable { store: String, reason: String },

    #[error("Store request failed for {target}: {reason}")]
    StoreRequest { target: String, reason: String },

    #[error("Invalid receipt record {id}: {reason}")]
    InvalidRecord { id: String, reason: String },

    #[error("A campaign needs at least one content type (display or video)")]
    InvalidContentTypes,

    #[error("Failed to render receipt: {0}")]
    Render(String),

    #[error("Typst not found. Install it from https://typst.app/ or run: cargo install typst-cli")]
    TypstNotFound,

    #[error("Failed to generate PDF: {0}")]
    PdfGeneration(String),

    #[error("Failed to serialize drawing: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReceiptError>;
