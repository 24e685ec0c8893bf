use super::error::ConfigError;
use crate::{document::Document, element::Element, element_options::ElementOptions};
use log::trace;
use serde::Deserialize;
use std::path::PathBuf;
use toml::{Table, Value};

/// A serializable document template.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SerializableTemplate {
    output: Option<PathBuf>,
    document: SerializableElement,
}

/// A serializable element.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SerializableElement {
    name: String,
    #[serde(default)]
    void: bool,
    classes: Option<Vec<String>>,
    #[serde(default)]
    attributes: Table,
    #[serde(default)]
    text: String,
    #[serde(default)]
    children: Vec<SerializableElement>,
}

/// Compiles a template into a document.
pub fn compile_template(template: SerializableTemplate) -> Result<Document, ConfigError> {
    let SerializableTemplate { output, document } = template;
    let options = compile_options(&document)?;
    let SerializableElement { name, text, children, .. } = document;

    trace!("compiling document {name}");

    Document::build(name, options, output, |root| compile_body(root, text, children))
}

fn compile_element(element: SerializableElement) -> Result<Element, ConfigError> {
    let options = compile_options(&element)?;
    let SerializableElement { name, text, children, .. } = element;

    trace!("compiling element {name}");

    Element::build(name, options, |parent| compile_body(parent, text, children))
}

fn compile_body(
    element: &mut Element,
    text: String,
    children: Vec<SerializableElement>,
) -> Result<(), ConfigError> {
    element.set_text(text);

    for child in children {
        element.attach(compile_element(child)?);
    }

    Ok(())
}

fn compile_options(element: &SerializableElement) -> Result<ElementOptions, ConfigError> {
    if element.name.is_empty() {
        return Err(ConfigError::EmptyName);
    }

    let options = ElementOptions::new().set_void(element.void);
    let options = if let Some(classes) = &element.classes {
        options.set_classes(classes)
    } else {
        options
    };

    element.attributes.iter().try_fold(
        options,
        |options, (name, value)| match value {
            Value::String(value) => Ok(options.set_attribute(name, value)),
            _ => Err(ConfigError::InvalidAttributeValue {
                element: element.name.clone(),
                attribute: name.clone(),
            }),
        },
    )
}
