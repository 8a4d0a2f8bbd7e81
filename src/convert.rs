//! Conversion of the source model into a sealed [`Document`].
//!
//! Two passes over the declared types, both in model order: interfaces
//! first, then enumerations. Hidden declarations are dropped before
//! classification and before any paragraph is extracted; nothing about
//! them reaches the output or the reporter.

use crate::document::{
    Attribute, Constant, Document, Enumeration, Interface, Operation,
};
use crate::model::{MethodModel, Tag, TypeKind, TypeModel};
use crate::report::Reporter;
use crate::tags;

/// Document title used when none is configured.
pub const DEFAULT_TITLE: &str = "API documentation";

/// Per-run configuration for the converter.
#[derive(Debug, Default, Clone)]
pub struct ConvertOptions {
    /// Document title; falls back to [`DEFAULT_TITLE`].
    pub title: Option<String>,
    /// Paragraph type name → human-readable description.
    pub tag_descriptions: Vec<(String, String)>,
}

/// How a method name classifies under the `get`/`is` naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Attribute,
    Operation,
}

/// Classify a method by name alone. Total over all names: anything not
/// matching the accessor convention is an operation.
pub fn classify(name: &str) -> MemberKind {
    if name.starts_with("get") || name.starts_with("is") {
        MemberKind::Attribute
    } else {
        MemberKind::Operation
    }
}

/// Display name of an attribute: the method name minus its accessor prefix.
/// `is` is checked first, so `island` strips to `land` and `getId` to `Id`.
/// No case adjustment is applied.
pub fn attribute_name(name: &str) -> &str {
    let prefix_len = if name.starts_with("is") { 2 } else { 3 };
    &name[prefix_len..]
}

/// Build the document tree from a snapshot of declared types.
///
/// Never fails: missing comments mean empty paragraph lists, unknown type
/// kinds are skipped, and classification is total.
pub fn convert(
    types: &[TypeModel],
    options: &ConvertOptions,
    reporter: &mut dyn Reporter,
) -> Document {
    let title = options.title.as_deref().unwrap_or(DEFAULT_TITLE);
    let mut builder = Document::builder(title);
    for (type_name, description) in &options.tag_descriptions {
        builder.paragraph_description(type_name, description);
    }

    for model in visible(types, TypeKind::Interface) {
        reporter.notice("interface", &model.name);
        builder.interface(convert_interface(model, reporter));
    }

    for model in visible(types, TypeKind::Enumeration) {
        reporter.notice("enumeration", &model.name);
        builder.enumeration(convert_enumeration(model, reporter));
    }

    builder.build()
}

fn visible(types: &[TypeModel], kind: TypeKind) -> impl Iterator<Item = &TypeModel> {
    types
        .iter()
        .filter(move |t| t.kind == kind && !tags::is_hidden(&t.tags))
}

fn convert_interface(model: &TypeModel, reporter: &mut dyn Reporter) -> Interface {
    let mut builder = Interface::builder(&model.name);
    append_paragraphs(&model.tags, |ty, text| builder.paragraph(ty, text));

    for method in &model.methods {
        if tags::is_hidden(&method.tags) {
            continue;
        }
        match classify(&method.name) {
            MemberKind::Attribute => {
                reporter.notice("attribute", &method.name);
                builder.attribute(convert_attribute(method));
            }
            MemberKind::Operation => {
                reporter.notice("operation", &method.name);
                builder.operation(convert_operation(method));
            }
        }
    }

    builder.build()
}

fn convert_attribute(method: &MethodModel) -> Attribute {
    // Parameters of getter-looking methods are dropped on purpose; the
    // convention treats them as plain accessors.
    let mut builder = Attribute::builder(attribute_name(&method.name), &method.return_type);
    append_paragraphs(&method.tags, |ty, text| builder.paragraph(ty, text));
    builder.build()
}

fn convert_operation(method: &MethodModel) -> Operation {
    let mut builder = Operation::builder(&method.name, &method.return_type);
    append_paragraphs(&method.tags, |ty, text| builder.paragraph(ty, text));
    for parameter in &method.parameters {
        builder.parameter(&parameter.name, &parameter.type_name);
    }
    builder.build()
}

fn convert_enumeration(model: &TypeModel, reporter: &mut dyn Reporter) -> Enumeration {
    let mut builder = Enumeration::builder(&model.name);
    append_paragraphs(&model.tags, |ty, text| builder.paragraph(ty, text));

    for constant in &model.constants {
        if tags::is_hidden(&constant.tags) {
            continue;
        }
        reporter.notice("constant", &constant.name);
        let mut constant_builder = Constant::builder(&constant.name);
        append_paragraphs(&constant.tags, |ty, text| {
            constant_builder.paragraph(ty, text)
        });
        builder.constant(constant_builder.build());
    }

    builder.build()
}

/// Feed a declaration's documentation tags, normalized, into a section
/// builder. Non-`md.` tags contribute nothing.
fn append_paragraphs(declaration_tags: &[Tag], mut append: impl FnMut(&str, String)) {
    for (name, bodies) in tags::tag_blocks(declaration_tags) {
        if !tags::is_documentation_tag(&name) {
            continue;
        }
        for body in bodies {
            append(tags::paragraph_type(&name), tags::normalize(&body));
        }
    }
}
