mod typst;

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{ReceiptError, Result};
use crate::render::Canvas;

pub use typst::TypstSink;

/// What a finished canvas is written as
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// PDF compiled through the typst CLI
    #[default]
    Pdf,
    /// The recorded drawing operations as JSON
    Json,
}

/// Writes one completed page set to durable storage
pub trait PersistenceSink {
    /// File extension of the files this sink writes, without the dot
    fn extension(&self) -> &'static str;

    fn persist(&self, canvas: &Canvas, path: &Path) -> Result<()>;
}

/// Dumps the recorded operations as pretty-printed JSON
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonSink;

impl PersistenceSink for JsonSink {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn persist(&self, canvas: &Canvas, path: &Path) -> Result<()> {
        ensure_finished(canvas)?;
        let json = serde_json::to_string_pretty(canvas)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Build the sink for `format`
pub fn sink_for(format: OutputFormat) -> Result<Box<dyn PersistenceSink>> {
    Ok(match format {
        OutputFormat::Pdf => Box::new(TypstSink::new()?),
        OutputFormat::Json => Box::new(JsonSink),
    })
}

fn ensure_finished(canvas: &Canvas) -> Result<()> {
    if canvas.pages().is_empty() {
        return Err(ReceiptError::PdfGeneration(
            "canvas has no finished pages".to_string(),
        ));
    }
    Ok(())
}
