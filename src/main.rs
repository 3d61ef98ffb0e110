use std::path::{Path, PathBuf};

use chrono::Local;
use clap::{Args, Parser, Subcommand};
use tabled::{settings::Style, Table, Tabled};

use receipts::batch::{Batch, BatchReport};
use receipts::config::{
    config_dir, load_config, load_config_or_default, resolve_path, Config, CONFIG_TEMPLATE,
    DEFAULT_RECEIPTS_DIR, DEFAULT_STAGE,
};
use receipts::error::{ReceiptError, Result};
use receipts::logging::init_tracing;
use receipts::pdf::{sink_for, OutputFormat};
use receipts::render::templates;
use receipts::synth::{RecordKind, Synthesizer};
use receipts::upload::{connect_store, local_receipts, upload_receipts_with};

#[derive(Parser)]
#[command(name = "receipts")]
#[command(version, about = "Synthetic receipt generator and stage uploader", long_about = None)]
struct Cli {
    /// Path to config directory (default: XDG config dir or ~/.receipts)
    #[arg(short = 'C', long, global = true)]
    config_dir: Option<PathBuf>,

    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by the commands that write receipts
#[derive(Args)]
struct OutputArgs {
    /// Output directory (default: generator.output_dir from config.toml)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Which receipt family to generate
    #[arg(long, value_enum, default_value_t = RecordKind::Campaign)]
    kind: RecordKind,

    /// Output format (default: generator.format from config.toml, else pdf)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Seed for a reproducible batch
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize config directory with a template config.toml
    Init,

    /// Generate random receipts
    Generate {
        /// Number of receipts to generate
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,

        /// Template index from 'templates' (wraps around; default: random per receipt)
        #[arg(short, long)]
        template: Option<usize>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Generate a fixed number of receipts for every template
    Sample {
        /// Receipts per template
        #[arg(long, default_value_t = 2)]
        per_template: usize,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List available vendor templates
    Templates {
        /// Which receipt family to list
        #[arg(long, value_enum, default_value_t = RecordKind::Campaign)]
        kind: RecordKind,
    },

    /// Upload receipt PDFs that are not yet in the stage
    Upload {
        /// Directory containing receipt PDFs (default: ../receipts)
        #[arg(short, long)]
        directory: Option<PathBuf>,

        /// Stage name (default: RECEIPTS_PROCESSING_DB.RAW.RECEIPTS)
        #[arg(short, long)]
        stage: Option<String>,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Determine config directory
    let cfg_dir = match cli.config_dir {
        Some(p) => p,
        None => config_dir()?,
    };

    match cli.command {
        Commands::Init => cmd_init(&cfg_dir),
        Commands::Generate {
            count,
            template,
            output,
        } => cmd_generate(&cfg_dir, count, template, &output),
        Commands::Sample {
            per_template,
            output,
        } => cmd_sample(&cfg_dir, per_template, &output),
        Commands::Templates { kind } => cmd_templates(kind),
        Commands::Upload { directory, stage } => cmd_upload(&cfg_dir, directory, stage),
    }
}

fn cmd_init(cfg_dir: &Path) -> Result<()> {
    use std::fs;

    if cfg_dir.exists() {
        return Err(ReceiptError::AlreadyInitialized(cfg_dir.to_path_buf()));
    }

    fs::create_dir_all(cfg_dir)?;
    fs::create_dir_all(cfg_dir.join("output"))?;
    fs::create_dir_all(cfg_dir.join("stage"))?;
    fs::write(cfg_dir.join("config.toml"), CONFIG_TEMPLATE)?;

    println!("Initialized receipts config at: {}", cfg_dir.display());
    println!();
    println!("Next steps:");
    println!(
        "  1. Set your store account:  $EDITOR {}/config.toml",
        cfg_dir.display()
    );
    println!("  2. Generate some receipts:  receipts generate -n 10");
    println!("  3. Upload them:             receipts upload -d <output dir>");

    Ok(())
}

fn build_batch(cfg_dir: &Path, config: &Config, args: &OutputArgs) -> Result<Batch<rand::rngs::StdRng>> {
    let output_dir = match &args.output {
        Some(dir) => dir.clone(),
        None => resolve_path(&config.generator.output_dir, cfg_dir),
    };

    // Fails up front when typst is missing, before any unit runs
    let sink = sink_for(args.format.unwrap_or(config.generator.format))?;

    let today = Local::now().date_naive();
    let synth = match args.seed.or(config.generator.seed) {
        Some(seed) => Synthesizer::seeded(seed, today),
        None => Synthesizer::from_os_rng(today),
    };

    Ok(Batch::new(synth, sink, output_dir)?.with_kind(args.kind))
}

fn cmd_generate(
    cfg_dir: &Path,
    count: usize,
    template: Option<usize>,
    args: &OutputArgs,
) -> Result<()> {
    let config = load_config_or_default(cfg_dir)?;
    let mut batch = build_batch(cfg_dir, &config, args)?;

    println!(
        "Generating {} receipt(s) in {}",
        count,
        batch.output_dir().display()
    );
    let report = batch.generate(count, template);
    print_report(&report);

    Ok(())
}

fn cmd_sample(cfg_dir: &Path, per_template: usize, args: &OutputArgs) -> Result<()> {
    let config = load_config_or_default(cfg_dir)?;
    let mut batch = build_batch(cfg_dir, &config, args)?;

    let template_count = templates(args.kind).len();
    println!(
        "Generating {} receipt(s) for each of {} templates in {}",
        per_template,
        template_count,
        batch.output_dir().display()
    );
    let report = batch.sample_set(per_template);
    print_report(&report);

    Ok(())
}

fn print_report(report: &BatchReport) {
    for path in &report.written {
        println!("  Generated: {}", path.display());
    }
    for (unit, e) in &report.failures {
        println!("  Failed receipt {}: {e}", unit + 1);
    }

    println!();
    println!(
        "Done: {} generated, {} failed",
        report.succeeded(),
        report.failed()
    );
}

// Table row structs for tabled
#[derive(Tabled)]
struct TemplateRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "VENDOR")]
    name: String,
    #[tabled(rename = "TAGLINE")]
    tagline: String,
    #[tabled(rename = "PAGE")]
    page: String,
}

#[derive(Tabled)]
struct UploadRow {
    #[tabled(rename = "RESULT")]
    outcome: &'static str,
    #[tabled(rename = "FILES")]
    count: usize,
}

fn cmd_templates(kind: RecordKind) -> Result<()> {
    let rows: Vec<TemplateRow> = templates(kind)
        .iter()
        .enumerate()
        .map(|(index, style)| TemplateRow {
            index,
            name: style.name.to_string(),
            tagline: style.tagline.to_string(),
            page: format!("{:?}", style.page),
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");
    println!("Use an index with 'generate --template <INDEX>'");

    Ok(())
}

fn cmd_upload(cfg_dir: &Path, directory: Option<PathBuf>, stage: Option<String>) -> Result<()> {
    let config = load_config(cfg_dir)?;
    let settings = config.store.as_ref().ok_or_else(|| {
        ReceiptError::InvalidConfig("config.toml has no [store] section".to_string())
    })?;

    // Flag, then config.toml, then the built-in default
    let stage = stage
        .or_else(|| config.uploader.stage.clone())
        .unwrap_or_else(|| DEFAULT_STAGE.to_string());
    let dir = match directory {
        Some(dir) => dir,
        None => match config.uploader.directory.as_deref() {
            Some(dir) => resolve_path(dir, cfg_dir),
            None => PathBuf::from(DEFAULT_RECEIPTS_DIR),
        },
    };

    let rule = "=".repeat(70);
    println!("{rule}");
    println!("Receipt Uploader");
    println!("{rule}");

    println!("Connecting to store...");
    let store = connect_store(settings, cfg_dir, &stage)?;
    println!("Connected to {}", store.describe());

    if !dir.is_dir() {
        println!("Receipts directory not found: {}", dir.display());
        return Ok(());
    }
    let local = local_receipts(&dir)?;
    println!("Found {} PDF file(s) in {}", local.len(), dir.display());
    if local.is_empty() {
        println!("No receipt files found to upload.");
        return Ok(());
    }

    let summary = upload_receipts_with(store.as_ref(), &dir, |i, total, name, status| {
        println!("Uploading ({i}/{total}): {name}... {status}");
    })?;

    if summary.listing_failed {
        println!("Warning: could not list stage files, assumed the stage was empty");
    }
    if summary.attempted() == 0 {
        println!("All {} file(s) are already in the stage.", summary.local);
        return Ok(());
    }

    let rows = vec![
        UploadRow {
            outcome: "Uploaded",
            count: summary.uploaded(),
        },
        UploadRow {
            outcome: "Skipped",
            count: summary.skipped(),
        },
        UploadRow {
            outcome: "Failed",
            count: summary.failed(),
        },
        UploadRow {
            outcome: "Total",
            count: summary.attempted(),
        },
    ];
    println!();
    println!("{}", Table::new(rows).with(Style::rounded()));

    if let Some(total) = summary.remote_total {
        println!("Total files in stage: {total}");
    }

    Ok(())
}
