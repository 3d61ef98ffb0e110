use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use super::{ensure_finished, PersistenceSink};
use crate::error::{ReceiptError, Result};
use crate::render::Canvas;

/// Embedded Typst program that replays recorded drawing operations.
/// Uses a placeholder that gets replaced with the actual JSON file path
const CANVAS_PROGRAM: &str = r##"// Receipt canvas replay
// Coordinates in the data are points from the bottom-left corner

#let doc = json("DATA_JSON_PATH")

#set text(font: ("Helvetica", "Arial", "Liberation Sans", "DejaVu Sans"))

#let face(name) = {
  let family = if name.starts-with("Courier") {
    ("Courier New", "Liberation Mono", "DejaVu Sans Mono")
  } else if name.starts-with("Times") {
    ("Times New Roman", "Liberation Serif", "DejaVu Serif")
  } else {
    ("Helvetica", "Arial", "Liberation Sans", "DejaVu Sans")
  }
  (
    font: family,
    weight: if name.contains("Bold") { "bold" } else { "regular" },
    style: if name.contains("Oblique") { "oblique" } else { "normal" },
  )
}

#let paint(color) = if color == none { none } else { rgb(color) }

#let pen(color, width) = if color == none { none } else { width * 1pt + rgb(color) }

#let draw(op, height) = {
  if op.op == "text" {
    let body = text(..face(op.font), size: op.size * 1pt, fill: rgb(op.fill), top-edge: "baseline", op.text)
    let dy = (height - op.y) * 1pt
    if op.align == "right" {
      place(top + left, dx: (op.x - 500) * 1pt, dy: dy, box(width: 500pt, align(right, body)))
    } else if op.align == "center" {
      place(top + left, dx: (op.x - 250) * 1pt, dy: dy, box(width: 500pt, align(center, body)))
    } else {
      place(top + left, dx: op.x * 1pt, dy: dy, box(body))
    }
  } else if op.op == "rect" {
    place(
      top + left,
      dx: op.x * 1pt,
      dy: (height - op.y - op.height) * 1pt,
      rect(
        width: op.width * 1pt,
        height: op.height * 1pt,
        fill: paint(op.fill),
        stroke: pen(op.stroke, op.line_width),
      ),
    )
  } else if op.op == "line" {
    place(top + left, line(
      start: (op.x1 * 1pt, (height - op.y1) * 1pt),
      end: (op.x2 * 1pt, (height - op.y2) * 1pt),
      stroke: op.line_width * 1pt + rgb(op.stroke),
    ))
  } else if op.op == "path" {
    let points = op.points.map(p => (p.at(0) * 1pt, (height - p.at(1)) * 1pt))
    if op.closed {
      place(top + left, polygon(fill: paint(op.fill), stroke: pen(op.stroke, op.line_width), ..points))
    } else {
      for i in range(1, points.len()) {
        place(top + left, line(
          start: points.at(i - 1),
          end: points.at(i),
          stroke: pen(op.stroke, op.line_width),
        ))
      }
    }
  } else if op.op == "table" {
    place(top + left, dx: op.x * 1pt, dy: (height - op.top) * 1pt, {
      set text(size: op.font_size * 1pt)
      table(
        columns: op.widths.map(w => w * 1pt),
        rows: op.row_height * 1pt,
        inset: (x: 5pt, y: 0pt),
        align: left + horizon,
        stroke: op.grid_width * 1pt + rgb(op.grid),
        fill: (col, row) => if row == 0 {
          rgb(op.header_fill)
        } else if op.zebra != none and calc.even(row) {
          rgb(op.zebra)
        } else {
          none
        },
        ..op.rows.enumerate().map(((r, cells)) => cells.map(cell => if r == 0 {
          text(fill: rgb(op.header_text), weight: "bold", cell)
        } else {
          cell
        })).flatten()
      )
    })
  }
}

#for pg in doc.pages {
  page(width: pg.width * 1pt, height: pg.height * 1pt, margin: 0pt)[
    #for op in pg.ops { draw(op, pg.height) }
  ]
}
"##;

/// Compiles canvases to PDF with the Typst CLI
#[derive(Debug, Clone)]
pub struct TypstSink {
    binary: PathBuf,
    work_dir: PathBuf,
}

impl TypstSink {
    /// Fails with `TypstNotFound` when the `typst` binary is not on PATH
    pub fn new() -> Result<Self> {
        let typst_check = Command::new("typst").arg("--version").output();
        if typst_check.is_err() {
            return Err(ReceiptError::TypstNotFound);
        }

        Ok(Self::with_binary("typst", std::env::temp_dir().join("receipts")))
    }

    /// Sink using a specific typst executable and scratch directory, unchecked
    pub fn with_binary(binary: impl Into<PathBuf>, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            work_dir: work_dir.into(),
        }
    }
}

impl PersistenceSink for TypstSink {
    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn persist(&self, canvas: &Canvas, path: &Path) -> Result<()> {
        ensure_finished(canvas)?;
        std::fs::create_dir_all(&self.work_dir)?;

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("receipt");
        let json_name = format!("{stem}.json");
        let json_path = self.work_dir.join(&json_name);
        std::fs::write(&json_path, serde_json::to_string(canvas)?)?;

        // Program and data share the work dir so the JSON path stays relative
        let program_path = self.work_dir.join(format!("{stem}.typ"));
        std::fs::write(&program_path, CANVAS_PROGRAM.replace("DATA_JSON_PATH", &json_name))?;

        debug!(output = %path.display(), pages = canvas.pages().len(), "compiling with typst");
        let output = Command::new(&self.binary)
            .arg("compile")
            .arg("--root")
            .arg(&self.work_dir)
            .arg(&program_path)
            .arg(path)
            .output();

        let _ = std::fs::remove_file(&program_path);
        let _ = std::fs::remove_file(&json_path);
        let output = output?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ReceiptError::PdfGeneration(stderr.to_string()));
        }

        Ok(())
    }
}
