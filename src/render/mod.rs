//! Output formats for the sealed document tree.
//!
//! Renderers only ever read the frozen [`Document`]; nothing about a
//! specific markup leaks back into the conversion pipeline. Formats are
//! selected by name at the CLI boundary.

pub mod json;
pub mod markdown;

use crate::document::Document;
use anyhow::{anyhow, Result};

/// Trait for rendering a sealed Document into a specific output format.
///
/// `generated` is a preformatted generation date; the renderer never reads
/// the clock itself.
pub trait Renderer {
    fn render(&self, document: &Document, generated: &str) -> String;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use markdown or json", format)),
    }
}
