//! throwsdoc: extract exception documentation from Java symbol models.
//!
//! Two modes:
//!
//! - **stdin mode**: `throwsdoc < model.json`
//! - **file mode**: `throwsdoc -o specs.json -c com.example.Stack models/*.json`

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::LevelFilter;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use throwsdoc::config::{Config, DEFAULT_FORMAT, DEFAULT_MAX_INHERIT_DEPTH, DEFAULT_ROOT_CLASS};
use throwsdoc::model::{load, ModelDocument, SymbolTable};
use throwsdoc::{sink, Extractor};

#[derive(Parser)]
#[command(
    name = "throwsdoc",
    about = "Extract @throws/@exception documentation from a Java symbol model"
)]
struct Cli {
    /// Model files, directories or glob patterns. If omitted, reads JSON from stdin.
    inputs: Vec<String>,

    /// Output file (stdout when omitted)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: json (default), text
    #[arg(short = 'f', long, default_value = DEFAULT_FORMAT)]
    format: String,

    /// Qualified name of a class to extract. Can be given multiple times.
    /// Defaults to every class in the model.
    #[arg(short = 'c', long = "class")]
    classes: Vec<String>,

    /// Superclass walks stop at this class
    #[arg(long, default_value = DEFAULT_ROOT_CLASS)]
    root_class: String,

    /// Nesting limit for {@inheritDoc} expansion
    #[arg(long, default_value_t = DEFAULT_MAX_INHERIT_DEPTH)]
    max_inherit_depth: usize,

    /// Also extract interfaces when no --class is given
    #[arg(long)]
    include_interfaces: bool,

    /// Debug logging. RUST_LOG overrides.
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            root_class: self.root_class.clone(),
            max_inherit_depth: self.max_inherit_depth,
            format: self.format.clone(),
            output: self.output.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config();
    // Fail on a bad format before doing any work.
    let mut sink = sink::create_sink(&config)?;

    let model = if cli.inputs.is_empty() {
        stdin_model()?
    } else {
        file_model(&cli.inputs)?
    };
    let table = model.with_root_class(&config.root_class);
    if table.is_empty() {
        log::warn!("model contains no classes");
    } else {
        log::info!("model has {} classes", table.len());
    }

    let classes = select_classes(&table, &cli.classes, cli.include_interfaces);
    let extractor = Extractor::new(&table, &config);

    let mut records = Vec::new();
    let mut failed = 0;
    for name in &classes {
        match extractor.extract(name) {
            Ok(class_records) => {
                log::debug!("{}: {} records", name, class_records.len());
                records.extend(class_records);
            }
            Err(e) => {
                eprintln!("error: {}: {}", name, e);
                failed += 1;
            }
        }
    }

    sink.accept(&records).context("failed to write output")?;

    if failed > 0 {
        anyhow::bail!("{} of {} classes failed extraction", failed, classes.len());
    }
    Ok(())
}

fn log_level(verbose: u8) -> LevelFilter {
    if verbose == 0 {
        LevelFilter::Warn
    } else {
        LevelFilter::Debug
    }
}

fn init_logging(verbose: u8) {
    env_logger::Builder::new()
        .filter_level(log_level(verbose))
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// stdin mode: one JSON model document.
fn stdin_model() -> Result<SymbolTable> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;
    let doc = load::parse_json(&input).context("invalid model on stdin")?;
    Ok(SymbolTable::from_documents(vec![("<stdin>".to_string(), doc)]))
}

/// file mode: load every matched model file and merge them.
fn file_model(patterns: &[String]) -> Result<SymbolTable> {
    let input_files = expand_globs(patterns)?;
    if input_files.is_empty() {
        anyhow::bail!("no model files found");
    }

    let mut parsed: Vec<(String, ModelDocument)> = Vec::new();
    for path in &input_files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        match load::parse_file(path, &content) {
            Ok(doc) => parsed.push((path.to_string_lossy().to_string(), doc)),
            Err(e) => eprintln!("warning: skipping {}: {}", path.display(), e),
        }
    }
    if parsed.is_empty() {
        anyhow::bail!("no model file could be loaded");
    }

    Ok(SymbolTable::from_documents(parsed))
}

const SUPPORTED_EXTENSIONS: &[&str] = &["json"];

/// Model files named by the inputs: plain files as given, the JSON models
/// directly inside a directory, and glob matches.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in patterns {
        let path = Path::new(input);
        let found = if path.is_file() {
            vec![path.to_path_buf()]
        } else if path.is_dir() {
            models_in_dir(path)?
        } else {
            glob_models(input)?
        };
        if found.is_empty() {
            eprintln!("warning: no model files in: {}", input);
        }
        files.extend(found);
    }
    // Merge order decides which definition of a class wins.
    files.sort();
    files.dedup();
    Ok(files)
}

fn models_in_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?;
    Ok(entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|p| p.is_file() && has_supported_extension(p))
        .collect())
}

fn glob_models(pattern: &str) -> Result<Vec<PathBuf>> {
    let paths = glob::glob(pattern).with_context(|| format!("invalid glob pattern: {}", pattern))?;
    Ok(paths.filter_map(Result::ok).filter(|p| p.is_file()).collect())
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
}

/// Classes to extract: the requested ones, or every class in model order.
fn select_classes(table: &SymbolTable, requested: &[String], include_interfaces: bool) -> Vec<String> {
    if !requested.is_empty() {
        return requested.to_vec();
    }
    table
        .classes()
        .filter(|c| include_interfaces || !c.is_interface())
        .map(|c| c.name.clone())
        .collect()
}
