//! mddoc — generate curated API documentation from a parsed source model.
//!
//! Reads a JSON snapshot of declared types (interfaces, enumerations,
//! methods, constants with their raw comment tags), extracts everything
//! bound to an `md.`-prefixed tag, and renders the resulting document tree
//! to Markdown or JSON.
//!
//! - **stdin mode**: `mddoc < model.json`
//! - **file mode**: `mddoc -o api.md -t "User API" -p tags.properties model.json`

mod convert;
mod document;
mod model;
mod render;
mod report;
mod tags;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mddoc",
    about = "Generate API documentation from a parsed source model using md. tags"
)]
struct Cli {
    /// Source model file (JSON). If omitted, reads from stdin.
    model: Option<PathBuf>,

    /// Output file, or a directory to write into. If omitted, writes to
    /// stdout.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Document title
    #[arg(short = 't', long)]
    title: Option<String>,

    /// Properties file with tag-type descriptions (key=value lines)
    #[arg(short = 'p', long)]
    properties: Option<PathBuf>,

    /// Output format: markdown (default), json
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let input = match &cli.model {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };

    let source: model::SourceModel =
        serde_json::from_str(&input).context("failed to parse source model")?;

    let tag_descriptions = match &cli.properties {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("failed to read properties file {}", path.display()))?;
            parse_properties(&contents)
        }
        None => Vec::new(),
    };

    let options = convert::ConvertOptions {
        title: cli.title.clone(),
        tag_descriptions,
    };
    let document = convert::convert(&source.types, &options, &mut report::LogReporter);

    let renderer = render::create_renderer(&cli.format)?;
    let generated = chrono::Local::now().format("%d-%m-%Y").to_string();
    let output = renderer.render(&document, &generated);

    match &cli.output {
        Some(path) => {
            let path = resolve_output_path(path, cli.model.as_deref(), renderer.file_extension());
            fs::write(&path, &output)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => print!("{output}"),
    }

    Ok(())
}

/// Resolve the output target: a directory gets a file named after the model
/// file's stem (or `api` in stdin mode) with the renderer's extension.
fn resolve_output_path(output: &Path, model: Option<&Path>, extension: &str) -> PathBuf {
    if output.is_dir() {
        let stem = model
            .and_then(|m| m.file_stem())
            .and_then(|s| s.to_str())
            .unwrap_or("api");
        output.join(format!("{stem}.{extension}"))
    } else {
        output.to_path_buf()
    }
}

/// Parse a properties file into ordered (key, value) pairs.
///
/// Supports the common subset: one `key=value` per line, surrounding
/// whitespace trimmed, blank lines and `#`/`!` comment lines skipped.
/// Lines without a separator are ignored.
fn parse_properties(contents: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            if !key.is_empty() {
                pairs.push((key.to_string(), value.trim().to_string()));
            }
        }
    }
    pairs
}
