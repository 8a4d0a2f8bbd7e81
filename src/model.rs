//! Source model — the already-parsed declarations mddoc documents.
//!
//! This is the input boundary: a snapshot of declared types as produced by
//! an external parser, deserialized from JSON. mddoc never inspects source
//! code itself; everything it needs (kinds, names, comment tags, members)
//! arrives through these structs.

use serde::Deserialize;

/// One raw documentation tag attached to a declaration.
///
/// `name` is the tag name as written in the comment, e.g. `md.common` or
/// `deprecated`. A declaration may carry the same tag name more than once.
#[derive(Debug, Clone, Deserialize)]
pub struct Tag {
    pub name: String,
    /// Raw free-text body, possibly multi-line.
    #[serde(default)]
    pub body: String,
}

/// Kind of a declared type. Anything that is neither an interface nor an
/// enumeration is skipped by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Interface,
    Enumeration,
    #[serde(other)]
    Other,
}

/// A declared type with its members, in declaration order.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeModel {
    pub kind: TypeKind,
    pub name: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// Methods, for interface-like types.
    #[serde(default)]
    pub methods: Vec<MethodModel>,
    /// Enum constants, for enumerations.
    #[serde(default)]
    pub constants: Vec<ConstantModel>,
}

/// A method declaration on an interface-like type.
#[derive(Debug, Clone, Deserialize)]
pub struct MethodModel {
    pub name: String,
    /// Display form of the declared return type, e.g. `String`.
    #[serde(default)]
    pub return_type: String,
    #[serde(default)]
    pub parameters: Vec<ParameterModel>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// A formal parameter: name plus display form of its declared type.
#[derive(Debug, Clone, Deserialize)]
pub struct ParameterModel {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

/// An enumeration constant.
#[derive(Debug, Clone, Deserialize)]
pub struct ConstantModel {
    pub name: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// Top-level input: the full snapshot of declared types for one run.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceModel {
    pub types: Vec<TypeModel>,
}
