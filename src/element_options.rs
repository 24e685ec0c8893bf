use itertools::Itertools;

/// Element construction options.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ElementOptions {
    void: bool,
    root: bool,
    classes: Option<Vec<String>>,
    attributes: Vec<(String, String)>,
}

impl ElementOptions {
    /// Creates element options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether an element never has a closing tag.
    pub const fn void(&self) -> bool {
        self.void
    }

    /// Returns whether an element is a document root.
    pub const fn root(&self) -> bool {
        self.root
    }

    /// Returns a value of the `class` attribute joined from class names.
    ///
    /// The attribute is absent only if class names are not set at all.
    pub fn class(&self) -> Option<String> {
        self.classes
            .as_ref()
            .map(|classes| classes.iter().join(" "))
    }

    /// Returns pass-through attributes.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Sets whether an element never has a closing tag.
    pub const fn set_void(mut self, void: bool) -> Self {
        self.void = void;
        self
    }

    /// Sets whether an element is a document root.
    pub const fn set_root(mut self, root: bool) -> Self {
        self.root = root;
        self
    }

    /// Sets class names.
    pub fn set_classes(mut self, classes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.classes = Some(classes.into_iter().map(Into::into).collect());
        self
    }

    /// Adds a pass-through attribute.
    ///
    /// An attribute name is kept verbatim.
    pub fn set_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }
}
