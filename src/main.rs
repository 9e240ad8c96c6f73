mod error;
mod parser;
mod record;
mod settings;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use settings::Settings;

#[derive(Parser)]
#[command(
    name = "planopt_extract",
    about = "Convert builtin/planopt benchmark logs into CSV rows"
)]
struct Cli {
    /// Results log to read (default: ../results/2c.txt)
    input: Option<PathBuf>,
    /// Write CSV here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Prefix prepended to the instance token (default: 8-5-)
    #[arg(long)]
    label_prefix: Option<String>,
    /// Pass data lines through unchanged when their labels are missing
    #[arg(long)]
    lenient: bool,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut settings = Settings::load().context("loading PLANOPT_* settings")?;
    if let Some(input) = cli.input {
        settings.input = input;
    }
    if let Some(prefix) = cli.label_prefix {
        settings.label_prefix = prefix;
    }
    settings.lenient |= cli.lenient;
    info!(?settings, output = ?cli.output, "Starting extraction");

    let t0 = Instant::now();
    let opts = settings.options();
    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    let summary = parser::extract_file(&settings.input, &mut out, &opts)
        .with_context(|| format!("extracting {}", settings.input.display()))?;

    info!(
        records = summary.records,
        lines = summary.lines_read,
        dropped = summary.dropped_lines,
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "Done"
    );
    Ok(())
}
