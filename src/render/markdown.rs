//! Markdown renderer.
//!
//! Walks the sealed document tree top-down and emits one heading per node.
//! Paragraph types other than `common` are introduced by their configured
//! description; an unconfigured type surfaces the document's placeholder
//! reminder right in the output.

use crate::document::{Document, Enumeration, Interface, Section};
use crate::render::Renderer;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, document: &Document, generated: &str) -> String {
        let mut lines: Vec<String> = Vec::new();

        lines.push(format!("# {}\n", document.title()));

        for interface in document.interfaces() {
            render_interface(&mut lines, document, interface);
        }

        for enumeration in document.enumerations() {
            render_enumeration(&mut lines, document, enumeration);
        }

        lines.push("---\n".to_string());
        lines.push(format!("Generated on {generated}"));

        let mut output = lines.join("\n");
        output.push('\n');
        output
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

fn render_interface(lines: &mut Vec<String>, document: &Document, interface: &Interface) {
    lines.push(format!("## {}\n", interface.name()));
    render_paragraphs(lines, document, interface);

    if !interface.attributes().is_empty() {
        lines.push("### Attributes\n".to_string());
        for attribute in interface.attributes() {
            lines.push(format!("#### {}\n", attribute.name()));
            lines.push(format!("Type: `{}`\n", attribute.type_name()));
            render_paragraphs(lines, document, attribute);
        }
    }

    if !interface.operations().is_empty() {
        lines.push("### Operations\n".to_string());
        for operation in interface.operations() {
            lines.push(format!("#### {}\n", operation.name()));
            lines.push(format!("Returns: `{}`\n", operation.return_type()));
            if !operation.parameters().is_empty() {
                lines.push("Parameters:\n".to_string());
                for parameter in operation.parameters() {
                    lines.push(format!(
                        "* `{}`: `{}`",
                        parameter.name(),
                        parameter.type_name()
                    ));
                }
                lines.push(String::new());
            }
            render_paragraphs(lines, document, operation);
        }
    }
}

fn render_enumeration(lines: &mut Vec<String>, document: &Document, enumeration: &Enumeration) {
    lines.push(format!("## {}\n", enumeration.name()));
    render_paragraphs(lines, document, enumeration);

    if !enumeration.constants().is_empty() {
        lines.push("### Constants\n".to_string());
        for constant in enumeration.constants() {
            lines.push(format!("#### {}\n", constant.name()));
            render_paragraphs(lines, document, constant);
        }
    }
}

/// Emit a section's paragraphs. Non-common paragraphs are preceded by the
/// description of their tag type, which for unconfigured types is the
/// document's loud placeholder.
fn render_paragraphs(lines: &mut Vec<String>, document: &Document, section: &dyn Section) {
    for paragraph in section.paragraphs() {
        if paragraph.type_name() != crate::document::COMMON_PARAGRAPH_TYPE {
            let header = document.header(paragraph.type_name());
            if !header.is_empty() {
                lines.push(header);
                lines.push(String::new());
            }
        }
        if !paragraph.contents().is_empty() {
            lines.push(paragraph.contents().to_string());
            lines.push(String::new());
        }
    }
}
