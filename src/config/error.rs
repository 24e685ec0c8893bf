use core::error::Error;
use core::fmt;
use core::fmt::Display;
use core::fmt::Formatter;
use std::io;

/// A template configuration error.
#[derive(Debug)]
pub enum ConfigError {
    /// An empty element name.
    EmptyName,
    /// A non-string attribute value.
    InvalidAttributeValue {
        /// An element name.
        element: String,
        /// An attribute name.
        attribute: String,
    },
    /// An I/O error.
    Io(io::Error),
    /// A TOML deserialization error.
    Toml(toml::de::Error),
}

impl Display for ConfigError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(formatter, "element name must not be empty"),
            Self::InvalidAttributeValue { element, attribute } => {
                write!(
                    formatter,
                    "attribute value must be a string: {attribute} in {element}"
                )
            }
            Self::Io(error) => write!(formatter, "{error}"),
            Self::Toml(error) => write!(formatter, "{error}"),
        }
    }
}

impl Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(error: toml::de::Error) -> Self {
        Self::Toml(error)
    }
}
