use std::path::{Path, PathBuf};

use chrono::Local;
use rand::Rng;
use tracing::{debug, error};

use crate::error::{ReceiptError, Result};
use crate::pdf::PersistenceSink;
use crate::render::{render, templates, Canvas, TemplateStyle};
use crate::synth::{Record, RecordKind, Synthesizer};

/// A pre-built record and the template to draw it with
#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub record: Record,
    pub template: Option<usize>,
}

impl RenderRequest {
    pub fn new(record: Record, template: Option<usize>) -> Self {
        Self { record, template }
    }
}

/// Outcome of one batch: every file written and every unit that failed
#[derive(Debug, Default)]
pub struct BatchReport {
    pub written: Vec<PathBuf>,
    pub failures: Vec<(usize, ReceiptError)>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.written.len()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn total(&self) -> usize {
        self.succeeded() + self.failed()
    }
}

/// Runs generate + render + persist units one at a time.
///
/// A failing unit is logged and recorded in the report; the batch carries on
/// with the next one.
pub struct Batch<R: Rng> {
    synth: Synthesizer<R>,
    sink: Box<dyn PersistenceSink>,
    output_dir: PathBuf,
    kind: RecordKind,
    counter: usize,
}

impl<R: Rng> Batch<R> {
    /// Creates `output_dir` if it does not exist yet
    pub fn new(
        synth: Synthesizer<R>,
        sink: Box<dyn PersistenceSink>,
        output_dir: impl Into<PathBuf>,
    ) -> Result<Self> {
        let output_dir = output_dir.into();
        std::fs::create_dir_all(&output_dir)?;

        Ok(Self {
            synth,
            sink,
            output_dir,
            kind: RecordKind::Campaign,
            counter: 0,
        })
    }

    /// Which kind of record `generate` and `sample_set` synthesize
    pub fn with_kind(mut self, kind: RecordKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// `count` fresh records, all with `template` or a random one each
    pub fn generate(&mut self, count: usize, template: Option<usize>) -> BatchReport {
        let mut report = BatchReport::default();
        for unit in 0..count {
            let record = self.synth.record(self.kind);
            let result = self.unit(&record, template);
            self.tally(&mut report, unit, result);
        }
        report
    }

    /// `per_template` records for every template of the current kind
    pub fn sample_set(&mut self, per_template: usize) -> BatchReport {
        let mut report = BatchReport::default();
        let mut unit = 0;
        for index in 0..templates(self.kind).len() {
            for _ in 0..per_template {
                let record = self.synth.record(self.kind);
                let result = self.unit(&record, Some(index));
                self.tally(&mut report, unit, result);
                unit += 1;
            }
        }
        report
    }

    /// Render records built elsewhere
    pub fn render_all<I>(&mut self, requests: I) -> BatchReport
    where
        I: IntoIterator<Item = RenderRequest>,
    {
        let mut report = BatchReport::default();
        for (unit, request) in requests.into_iter().enumerate() {
            let result = self.unit(&request.record, request.template);
            self.tally(&mut report, unit, result);
        }
        report
    }

    fn unit(&mut self, record: &Record, template: Option<usize>) -> Result<PathBuf> {
        let mut canvas = Canvas::new();
        let index = render(&mut canvas, record, template, self.synth.rng())?;
        let style = &templates(record.kind())[index];

        let name = self.file_name(record.kind(), style);
        let path = self.output_dir.join(name);
        self.sink.persist(&canvas, &path)?;
        Ok(path)
    }

    fn tally(&self, report: &mut BatchReport, unit: usize, result: Result<PathBuf>) {
        match result {
            Ok(path) => {
                debug!(unit, path = %path.display(), "wrote receipt");
                report.written.push(path);
            }
            Err(e) => {
                error!(unit, error = %e, "receipt failed, continuing");
                report.failures.push((unit, e));
            }
        }
    }

    /// `receipt_{Vendor}_{YYYYMMDD_HHMMSS_micros}_{n}.{ext}`
    fn file_name(&mut self, kind: RecordKind, style: &TemplateStyle) -> String {
        self.counter += 1;
        let prefix = match kind {
            RecordKind::Campaign => "receipt",
            RecordKind::Pricing => "receipt_v2",
        };
        let stamp = Local::now().format("%Y%m%d_%H%M%S_%6f");
        format!(
            "{prefix}_{}_{stamp}_{:03}.{}",
            style.file_stem(),
            self.counter,
            self.sink.extension()
        )
    }
}
