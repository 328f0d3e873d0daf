// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use recase::config::consts::{CASE_CONFIG, FIELD_LIST_CONFIG, OVERVIEW_DOC};
use recase::config::{load_settings, Settings};
use recase::record::{Record, RecordDocument};
use recase::traits::Transformation;
use recase::transform::{ChangeCase, Side};

/// Change the case of selected string fields in a structured record
#[derive(Parser, Debug)]
#[command(name = "recase", version = recase::VERSION)]
struct Cli {
    /// Case to convert to (Uppercase or Lowercase)
    #[arg(long)]
    case: Option<String>,

    /// Field names to convert, at any nesting level
    #[arg(long, value_delimiter = ',')]
    fields: Vec<String>,

    /// YAML or TOML settings file; explicit flags override its values
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Record side to transform
    #[arg(long, default_value = "value")]
    side: Side,

    /// JSON record document to read (defaults to stdin)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Print the accepted options and exit
    #[arg(long)]
    describe: bool,

    /// Pretty-print the output record
    #[arg(long)]
    pretty: bool,
}

fn setup_logging() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

fn build_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = match &cli.settings {
        Some(path) => load_settings(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::new(),
    };

    let mut overrides = Settings::new();
    if let Some(case) = &cli.case {
        overrides.insert(CASE_CONFIG, case.as_str());
    }
    if !cli.fields.is_empty() {
        overrides.insert(FIELD_LIST_CONFIG, cli.fields.clone());
    }
    settings.merge(overrides);
    Ok(settings)
}

fn read_document(input: Option<&PathBuf>) -> Result<RecordDocument> {
    let document = match input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
        }
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).context("Failed to read stdin")?;
            serde_json::from_str(&buffer)
        }
    };
    document.context("Input is not a valid record document")
}

fn write_document(document: &RecordDocument, pretty: bool) -> Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(document)?
    } else {
        serde_json::to_string(document)?
    };
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", text).context("Failed to write output record")?;
    Ok(())
}

fn describe(transform: &ChangeCase) -> String {
    format!(
        "{} {}\n\n{}\n\n{}",
        transform.name(),
        transform.version(),
        OVERVIEW_DOC,
        transform.config().describe()
    )
}

fn transform_document(transform: &ChangeCase, document: RecordDocument) -> Result<RecordDocument> {
    let has_schema = match transform.side() {
        Side::Key => document.key_schema.is_some(),
        Side::Value => document.value_schema.is_some(),
    };
    if !has_schema {
        // schemaless sides are opaque; echo the document as read
        return Ok(document);
    }

    let record = Record::from_document(&document).context("Record does not match its schema")?;
    let output = transform.apply(&record)?.to_document();
    Ok(output)
}

fn run(cli: Cli) -> Result<()> {
    let mut transform = ChangeCase::new(cli.side);

    if cli.describe {
        print!("{}", describe(&transform));
        return Ok(());
    }

    let settings = build_settings(&cli)?;
    transform
        .configure(&settings)
        .context("Invalid change case configuration")?;

    let document = read_document(cli.input.as_ref())?;
    let output = transform_document(&transform, document)?;

    write_document(&output, cli.pretty)?;
    transform.close();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging();
    run(cli)
}
