//! volltext - transform, preview and check annotated manuscript descriptions

use std::{
    io::{self, Read},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use volltext_config::Config;
use volltext_engine::{
    SerializationError, Volltext,
    rich_text::{PlainTextRenderer, render},
    text::strip_empty_text,
    transform::{self, canonical_form},
    tree::{AnnotatedNode, Element},
};

#[derive(Parser)]
#[command(name = "volltext")]
#[command(version, about = "Round-trip annotated manuscript descriptions through the rich-text model", long_about = None)]
#[command(after_help = "EXAMPLES:
    volltext transform doc.json        Annotated siblings to rich text
    volltext invert root.json          Rich text back to annotated siblings
    volltext preview doc.json          Plain-text rendering
    volltext check                     Round-trip every configured document")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Config file (defaults to ~/.config/volltext/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Treat serialization errors as failures
    #[arg(long, global = true)]
    strict: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Annotated siblings (or a hosting element) to the rich-text root
    Transform {
        /// Input JSON file; stdin when omitted or `-`
        input: Option<PathBuf>,
    },
    /// Rich-text root back to annotated siblings
    Invert { input: Option<PathBuf> },
    /// Transform then invert, comparing against the normalized input
    Roundtrip { input: Option<PathBuf> },
    /// Render the rich-text model as plain text, one line per paragraph
    Preview { input: Option<PathBuf> },
    /// Round-trip every document matched by the config
    Check,
}

/// Accepted annotated input: a bare sibling array or a hosting element.
#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Siblings(Vec<AnnotatedNode>),
    Host(Element),
}

impl Document {
    fn into_siblings(self) -> Vec<AnnotatedNode> {
        match self {
            Self::Siblings(siblings) => siblings,
            Self::Host(host) => host.children,
        }
    }
}

struct Settings {
    pretty: bool,
    strict: bool,
}

/// Outcome of round-tripping one document.
struct Report {
    inverted: Vec<AnnotatedNode>,
    errors: Vec<SerializationError>,
    matches: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = load_config(cli.config.as_deref())?;
    let settings = Settings {
        pretty: cli.pretty || config.as_ref().is_some_and(|c| c.pretty),
        strict: cli.strict || config.as_ref().is_some_and(|c| c.strict),
    };

    match cli.command {
        Command::Transform { input } => {
            let siblings = read_document(input.as_deref())?;
            emit(&transform::transform(siblings), settings.pretty)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Invert { input } => {
            let root: Volltext = serde_json::from_str(&read_input(input.as_deref())?)
                .context("input is not a rich-text root")?;
            let inverted = transform::invert(&root).map(strip_empty_text);
            emit(&inverted.value, settings.pretty)?;
            Ok(exit_code(inverted.errors.is_empty() || !settings.strict))
        }
        Command::Roundtrip { input } => {
            let report = round_trip(read_document(input.as_deref())?);
            emit(&report.inverted, settings.pretty)?;
            if !report.matches {
                log::error!("round trip differs from the normalized input");
            }
            Ok(exit_code(report.matches && (report.errors.is_empty() || !settings.strict)))
        }
        Command::Preview { input } => {
            let root = transform::transform(read_document(input.as_deref())?);
            let mut renderer = PlainTextRenderer::new();
            render(&root, &mut renderer);
            println!("{}", renderer.finish());
            Ok(ExitCode::SUCCESS)
        }
        Command::Check => {
            let Some(config) = config else {
                bail!(
                    "no config file found at {}; `check` needs documents_path",
                    Config::config_path().display()
                );
            };
            check(&config, &settings)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Option<Config>> {
    let config = match path {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    if let Some(config) = &config {
        log::debug!("documents path: {}", config.documents_path.display());
    }
    Ok(config)
}

fn check(config: &Config, settings: &Settings) -> Result<ExitCode> {
    let files = config.document_files()?;
    log::info!(
        "checking {} document(s) under {}",
        files.len(),
        config.documents_path.display()
    );

    let mut failures = 0;
    for file in &files {
        let display = file.display();
        let document = match read_document(Some(file)) {
            Ok(document) => document,
            Err(e) => {
                println!("unreadable {display}: {e:#}");
                failures += 1;
                continue;
            }
        };
        let report = round_trip(document);
        if !report.matches {
            println!("mismatch   {display}");
            failures += 1;
        } else if !report.errors.is_empty() {
            println!("{:<10} {display}", format!("{} error(s)", report.errors.len()));
            if settings.strict {
                failures += 1;
            }
        } else {
            println!("ok         {display}");
        }
    }

    log::info!("{} of {} document(s) failed", failures, files.len());
    Ok(exit_code(failures == 0))
}

fn round_trip(siblings: Vec<AnnotatedNode>) -> Report {
    let expected = canonical_form(&siblings);
    let inverted = transform::round_trip(&siblings);
    Report {
        matches: inverted.value == expected,
        inverted: inverted.value,
        errors: inverted.errors,
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("failed to read stdin")?;
            Ok(content)
        }
    }
}

fn read_document(path: Option<&Path>) -> Result<Vec<AnnotatedNode>> {
    let document: Document = serde_json::from_str(&read_input(path)?)
        .context("input is neither a sibling array nor an element")?;
    Ok(document.into_siblings())
}

fn emit<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
