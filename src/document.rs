use crate::{element::Element, element_options::ElementOptions, render::serialize};
use std::path::{Path, PathBuf};

/// A document.
///
/// A document owns a root element and an optional output file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Document {
    root: Element,
    output: Option<PathBuf>,
}

impl Document {
    #[cfg(test)]
    pub(crate) fn new(
        name: impl Into<String>,
        options: ElementOptions,
        output: Option<PathBuf>,
    ) -> Self {
        Self {
            root: Element::new(name, options.set_root(true)),
            output,
        }
    }

    /// Builds a document in a scope.
    ///
    /// A document is returned only if `body` succeeds. Otherwise, the error
    /// from `body` is returned as it is and nothing is serialized.
    pub fn build<E>(
        name: impl Into<String>,
        options: ElementOptions,
        output: Option<PathBuf>,
        body: impl FnOnce(&mut Element) -> Result<(), E>,
    ) -> Result<Self, E> {
        Ok(Self {
            root: Element::build(name, options.set_root(true), body)?,
            output,
        })
    }

    /// Returns a root element.
    pub const fn root(&self) -> &Element {
        &self.root
    }

    /// Returns an output file path.
    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    /// Sets an output file path.
    pub fn set_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    /// Serializes a document into a string.
    pub fn serialize(&self) -> String {
        serialize(&self.root)
    }
}
