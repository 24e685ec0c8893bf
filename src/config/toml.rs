use super::{ConfigError, SerializableTemplate};
use log::debug;
use std::path::Path;
use tokio::fs::read_to_string;

/// Reads a template file.
pub async fn read_template(path: &Path) -> Result<SerializableTemplate, ConfigError> {
    debug!("reading a template file {}", path.display());

    Ok(toml::from_str(&read_to_string(path).await?)?)
}
