mod error;
mod serde;
mod toml;

pub use self::{
    error::ConfigError,
    serde::{SerializableElement, SerializableTemplate, compile_template},
    toml::read_template,
};
