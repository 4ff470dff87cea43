use anyhow::{Context, Result};
use clap::Parser;
use crossterm::execute;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;
use tc_core::batch::{run_test, write_predictions};
use tc_core::config::{StemmerKind, TcConfig};
use tc_core::evaluate::{evaluate, read_gold};
use tc_core::manifest::{read_testing, read_training};
use tc_core::{Classifier, Trainer};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Multinomial Naive Bayes text categorizer.
#[derive(Parser)]
#[command(name = "tc", version)]
struct Cli {
    /// File of `<document> <label>` training records
    #[arg(short = 'r', value_name = "TRAINING")]
    training: Option<String>,
    /// File of document paths to classify
    #[arg(short = 'e', value_name = "TESTING")]
    testing: Option<String>,
    /// Where to write `<document> <label>` predictions
    #[arg(short = 'o', value_name = "OUTPUT")]
    output: Option<PathBuf>,
    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Stop list file (overrides config)
    #[arg(long)]
    stoplist: Option<PathBuf>,
    /// Stemmer (overrides config)
    #[arg(long, value_enum)]
    stemmer: Option<StemmerKind>,
    /// Scan and classify documents in parallel
    #[arg(long)]
    parallel: bool,
    /// Gold labels to score the predictions against
    #[arg(long)]
    gold: Option<String>,
    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "info" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut config = match &cli.config {
        Some(path) => TcConfig::load(path)?,
        None => TcConfig::default(),
    };
    if let Some(stoplist) = cli.stoplist.clone() {
        config.stoplist = stoplist;
    }
    if let Some(stemmer) = cli.stemmer {
        config.stemmer = stemmer;
    }
    config.parallel |= cli.parallel;

    let normalizer = config.build_normalizer();

    let training = match cli.training {
        Some(path) => path,
        None => prompt("Please input the path to the file containing the training set and corresponding labels: ")?,
    };
    let manifest = read_training(&training)?;
    let model = Trainer::new(&normalizer).parallel(config.parallel).train(&manifest);

    let testing = match cli.testing {
        Some(path) => path,
        None => prompt("Please input the path to the file containing the testing set: ")?,
    };
    let documents = read_testing(&testing)?;
    let classifier = Classifier::new(&model, &normalizer);
    let predictions = run_test(&classifier, &documents, config.parallel);

    let output = match cli.output {
        Some(path) => path,
        None => PathBuf::from(prompt("Please input the path to the file to which output can be written: ")?),
    };
    write_predictions(&predictions, &output)?;

    if let Some(gold) = cli.gold {
        let report = evaluate(&predictions, &read_gold(&gold)?);
        info!(accuracy = report.accuracy(), "evaluation complete");
        print!("{report}");
    }
    Ok(())
}

fn prompt(message: &str) -> Result<String> {
    let mut out = stdout();
    execute!(out, SetForegroundColor(Color::Cyan), Print(message), ResetColor)?;
    out.flush()?;

    let mut line = String::new();
    stdin().read_line(&mut line).context("reading path from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
