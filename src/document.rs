//! Document tree — the immutable, ordered result of a conversion run.
//!
//! Every node is built in two phases: a mutable builder owned exclusively
//! by the converter, then a sealed value produced by `build()`. Children
//! are sealed before they are attached to their parent, so the mutable
//! phase never leaves the assembling call stack. Downstream code (the
//! renderers) only ever sees the frozen tree.

use serde::Serialize;
use std::collections::BTreeMap;

/// The reserved paragraph type that always renders, in any context.
pub const COMMON_PARAGRAPH_TYPE: &str = "common";

/// A single documentation paragraph: a tag type plus normalized contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    #[serde(rename = "type")]
    type_name: String,
    contents: String,
}

impl Paragraph {
    pub fn new(type_name: impl Into<String>, contents: impl Into<String>) -> Self {
        Paragraph {
            type_name: type_name.into(),
            contents: contents.into(),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }
}

/// A formal parameter of an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    name: String,
    #[serde(rename = "type")]
    type_name: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Parameter {
            name: name.into(),
            type_name: type_name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

/// Common shape of every documentable node: a name plus its paragraphs,
/// in append order.
pub trait Section {
    fn name(&self) -> &str;
    fn paragraphs(&self) -> &[Paragraph];
}

macro_rules! impl_section {
    ($($ty:ty),+) => {
        $(impl Section for $ty {
            fn name(&self) -> &str {
                &self.name
            }

            fn paragraphs(&self) -> &[Paragraph] {
                &self.paragraphs
            }
        })+
    };
}

/// A read-only attribute of an interface, derived from a `get`/`is` method.
#[derive(Debug, Clone, Serialize)]
pub struct Attribute {
    name: String,
    #[serde(rename = "type")]
    type_name: String,
    paragraphs: Vec<Paragraph>,
}

impl Attribute {
    pub fn builder(name: impl Into<String>, type_name: impl Into<String>) -> AttributeBuilder {
        AttributeBuilder {
            name: name.into(),
            type_name: type_name.into(),
            paragraphs: Vec::new(),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

#[derive(Debug)]
pub struct AttributeBuilder {
    name: String,
    type_name: String,
    paragraphs: Vec<Paragraph>,
}

impl AttributeBuilder {
    pub fn paragraph(&mut self, type_name: impl Into<String>, contents: impl Into<String>) {
        self.paragraphs.push(Paragraph::new(type_name, contents));
    }

    pub fn build(self) -> Attribute {
        Attribute {
            name: self.name,
            type_name: self.type_name,
            paragraphs: self.paragraphs,
        }
    }
}

/// A behavioral operation of an interface, with its declared parameters.
#[derive(Debug, Clone, Serialize)]
pub struct Operation {
    name: String,
    return_type: String,
    parameters: Vec<Parameter>,
    paragraphs: Vec<Paragraph>,
}

impl Operation {
    pub fn builder(name: impl Into<String>, return_type: impl Into<String>) -> OperationBuilder {
        OperationBuilder {
            name: name.into(),
            return_type: return_type.into(),
            parameters: Vec::new(),
            paragraphs: Vec::new(),
        }
    }

    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }
}

#[derive(Debug)]
pub struct OperationBuilder {
    name: String,
    return_type: String,
    parameters: Vec<Parameter>,
    paragraphs: Vec<Paragraph>,
}

impl OperationBuilder {
    pub fn paragraph(&mut self, type_name: impl Into<String>, contents: impl Into<String>) {
        self.paragraphs.push(Paragraph::new(type_name, contents));
    }

    pub fn parameter(&mut self, name: impl Into<String>, type_name: impl Into<String>) {
        self.parameters.push(Parameter::new(name, type_name));
    }

    pub fn build(self) -> Operation {
        Operation {
            name: self.name,
            return_type: self.return_type,
            parameters: self.parameters,
            paragraphs: self.paragraphs,
        }
    }
}

/// A constant of an enumeration. Carries nothing beyond its section shape.
#[derive(Debug, Clone, Serialize)]
pub struct Constant {
    name: String,
    paragraphs: Vec<Paragraph>,
}

impl Constant {
    pub fn builder(name: impl Into<String>) -> ConstantBuilder {
        ConstantBuilder {
            name: name.into(),
            paragraphs: Vec::new(),
        }
    }
}

#[derive(Debug)]
pub struct ConstantBuilder {
    name: String,
    paragraphs: Vec<Paragraph>,
}

impl ConstantBuilder {
    pub fn paragraph(&mut self, type_name: impl Into<String>, contents: impl Into<String>) {
        self.paragraphs.push(Paragraph::new(type_name, contents));
    }

    pub fn build(self) -> Constant {
        Constant {
            name: self.name,
            paragraphs: self.paragraphs,
        }
    }
}

/// An interface-like type with its attributes and operations, each list in
/// declaration order.
#[derive(Debug, Clone, Serialize)]
pub struct Interface {
    name: String,
    paragraphs: Vec<Paragraph>,
    attributes: Vec<Attribute>,
    operations: Vec<Operation>,
}

impl Interface {
    pub fn builder(name: impl Into<String>) -> InterfaceBuilder {
        InterfaceBuilder {
            name: name.into(),
            paragraphs: Vec::new(),
            attributes: Vec::new(),
            operations: Vec::new(),
        }
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }
}

#[derive(Debug)]
pub struct InterfaceBuilder {
    name: String,
    paragraphs: Vec<Paragraph>,
    attributes: Vec<Attribute>,
    operations: Vec<Operation>,
}

impl InterfaceBuilder {
    pub fn paragraph(&mut self, type_name: impl Into<String>, contents: impl Into<String>) {
        self.paragraphs.push(Paragraph::new(type_name, contents));
    }

    pub fn attribute(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    pub fn operation(&mut self, operation: Operation) {
        self.operations.push(operation);
    }

    pub fn build(self) -> Interface {
        Interface {
            name: self.name,
            paragraphs: self.paragraphs,
            attributes: self.attributes,
            operations: self.operations,
        }
    }
}

/// An enumeration with its constants in declaration order.
#[derive(Debug, Clone, Serialize)]
pub struct Enumeration {
    name: String,
    paragraphs: Vec<Paragraph>,
    constants: Vec<Constant>,
}

impl Enumeration {
    pub fn builder(name: impl Into<String>) -> EnumerationBuilder {
        EnumerationBuilder {
            name: name.into(),
            paragraphs: Vec::new(),
            constants: Vec::new(),
        }
    }

    pub fn constants(&self) -> &[Constant] {
        &self.constants
    }
}

#[derive(Debug)]
pub struct EnumerationBuilder {
    name: String,
    paragraphs: Vec<Paragraph>,
    constants: Vec<Constant>,
}

impl EnumerationBuilder {
    pub fn paragraph(&mut self, type_name: impl Into<String>, contents: impl Into<String>) {
        self.paragraphs.push(Paragraph::new(type_name, contents));
    }

    pub fn constant(&mut self, constant: Constant) {
        self.constants.push(constant);
    }

    pub fn build(self) -> Enumeration {
        Enumeration {
            name: self.name,
            paragraphs: self.paragraphs,
            constants: self.constants,
        }
    }
}

impl_section!(Interface, Enumeration, Attribute, Operation, Constant);

/// The sealed result of one conversion run.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    title: String,
    interfaces: Vec<Interface>,
    enumerations: Vec<Enumeration>,
    paragraph_descriptions: BTreeMap<String, String>,
}

impl Document {
    pub fn builder(title: impl Into<String>) -> DocumentBuilder {
        let mut paragraph_descriptions = BTreeMap::new();
        // "common" is always declared; an explicit description may
        // overwrite the empty default.
        paragraph_descriptions.insert(COMMON_PARAGRAPH_TYPE.to_string(), String::new());
        DocumentBuilder {
            title: title.into(),
            interfaces: Vec::new(),
            enumerations: Vec::new(),
            paragraph_descriptions,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn interfaces(&self) -> &[Interface] {
        &self.interfaces
    }

    pub fn enumerations(&self) -> &[Enumeration] {
        &self.enumerations
    }

    /// Human-readable description of a paragraph type.
    ///
    /// An undeclared type yields a loud placeholder instead of an error, so
    /// a missing description shows up in the rendered output rather than
    /// aborting the run.
    pub fn header(&self, paragraph_type: &str) -> String {
        match self.paragraph_descriptions.get(paragraph_type) {
            Some(description) => description.clone(),
            None => format!(
                "**Tag `{paragraph_type}` is not documented! Please add it to the properties file!**"
            ),
        }
    }
}

#[derive(Debug)]
pub struct DocumentBuilder {
    title: String,
    interfaces: Vec<Interface>,
    enumerations: Vec<Enumeration>,
    paragraph_descriptions: BTreeMap<String, String>,
}

impl DocumentBuilder {
    pub fn paragraph_description(&mut self, type_name: impl Into<String>, description: impl Into<String>) {
        self.paragraph_descriptions
            .insert(type_name.into(), description.into());
    }

    pub fn interface(&mut self, interface: Interface) {
        self.interfaces.push(interface);
    }

    pub fn enumeration(&mut self, enumeration: Enumeration) {
        self.enumerations.push(enumeration);
    }

    pub fn build(self) -> Document {
        Document {
            title: self.title,
            interfaces: self.interfaces,
            enumerations: self.enumerations,
            paragraph_descriptions: self.paragraph_descriptions,
        }
    }
}
