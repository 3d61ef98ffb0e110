pub mod batch;
pub mod config;
pub mod error;
pub mod logging;
pub mod pdf;
pub mod render;
pub mod synth;
pub mod upload;

pub use batch::{Batch, BatchReport, RenderRequest};
pub use config::{Config, StoreKind, StoreSettings};
pub use error::{ReceiptError, Result};
pub use pdf::{JsonSink, OutputFormat, PersistenceSink, TypstSink};
pub use render::{render, select_template, Canvas, Surface, TemplateStyle};
pub use synth::{PricingReceipt, Receipt, Record, RecordKind, Synthesizer};
pub use upload::{upload_receipts, DirectoryStore, HttpStore, PutStatus, RemoteStore};
