use crate::element_options::ElementOptions;
use log::trace;
use serde::Serialize;

/// A markup element.
///
/// An element owns its children exclusively. Children are only appended and
/// never removed.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<Self>,
    void: bool,
    root: bool,
}

impl Element {
    /// Creates an element.
    pub fn new(name: impl Into<String>, options: ElementOptions) -> Self {
        let mut element = Self {
            name: name.into(),
            void: options.void(),
            root: options.root(),
            ..Default::default()
        };

        if let Some(class) = options.class() {
            element.set_attribute("class", class);
        }

        for (name, value) in options.attributes() {
            element.set_attribute(name, value);
        }

        element
    }

    /// Builds an element in a scope.
    ///
    /// The element is returned only if `body` succeeds. Otherwise, the error
    /// from `body` is returned as it is. The element is not attached to any
    /// parent.
    pub fn build<E>(
        name: impl Into<String>,
        options: ElementOptions,
        body: impl FnOnce(&mut Self) -> Result<(), E>,
    ) -> Result<Self, E> {
        let mut element = Self::new(name, options);

        trace!("entering a scope of element {}", element.name);
        body(&mut element)?;
        trace!("leaving a scope of element {}", element.name);

        Ok(element)
    }

    /// Returns a tag name.
    #[allow(clippy::missing_const_for_fn)]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns attributes in insertion order.
    pub fn attributes(&self) -> impl ExactSizeIterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Returns text content.
    #[allow(clippy::missing_const_for_fn)]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns child elements.
    #[allow(clippy::missing_const_for_fn)]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Returns whether the element never has a closing tag.
    pub const fn is_void(&self) -> bool {
        self.void
    }

    /// Returns whether the element is a document root.
    pub const fn is_root(&self) -> bool {
        self.root
    }

    /// Sets text content.
    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = text.into();
        self
    }

    /// Sets an attribute.
    ///
    /// If the attribute exists already, its value is replaced in place.
    pub fn set_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        let name = name.into();
        let value = value.into();

        if let Some((_, old)) = self.attributes.iter_mut().find(|(key, _)| key == &name) {
            *old = value;
        } else {
            self.attributes.push((name, value));
        }

        self
    }

    /// Attaches a child element at the end of children.
    pub fn attach(&mut self, child: Self) -> &mut Self {
        self.children.push(child);
        self
    }
}
