//! Input validation shared by the CLI layer and the import path.

use anyhow::{bail, Result};

/// Maximum length for user-supplied entity ids.
const MAX_ID_LENGTH: usize = 128;

/// Validate an entity id: alphanumeric, dash, underscore only; non-empty;
/// bounded length.
pub fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() {
        bail!("Id cannot be empty");
    }
    if id.len() > MAX_ID_LENGTH {
        bail!("Id too long: {} characters (max {MAX_ID_LENGTH})", id.len());
    }
    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        bail!("Invalid id '{id}': use alphanumeric, dash, underscore only");
    }
    Ok(())
}

/// Clap value parser wrapper around [`validate_id`].
pub fn clap_id_validator(value: &str) -> Result<String, String> {
    validate_id(value)
        .map(|_| value.to_string())
        .map_err(|e| e.to_string())
}
