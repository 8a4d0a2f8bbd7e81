//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the document tree directly; useful for custom rendering
//! pipelines that consume the tree instead of the Markdown output.

use crate::document::Document;
use crate::render::Renderer;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, document: &Document, generated: &str) -> String {
        let value = serde_json::json!({
            "generated": generated,
            "document": document,
        });
        // Serialization of an in-memory tree cannot fail here.
        let mut output =
            serde_json::to_string_pretty(&value).unwrap_or_else(|_| String::from("{}"));
        output.push('\n');
        output
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Interface;

    #[test]
    fn serializes_tree_with_generation_date() {
        let mut builder = Document::builder("API documentation");
        let mut interface = Interface::builder("User");
        interface.paragraph("common", "Entry point.");
        builder.interface(interface.build());

        let output = JsonRenderer.render(&builder.build(), "30-08-2026");
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["generated"], "30-08-2026");
        assert_eq!(value["document"]["title"], "API documentation");
        assert_eq!(value["document"]["interfaces"][0]["name"], "User");
        assert_eq!(
            value["document"]["interfaces"][0]["paragraphs"][0]["type"],
            "common"
        );
    }
}
