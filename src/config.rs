use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ContactsResult;
use crate::model::ids::DEFAULT_MAX_ATTEMPTS;

/// Settings for a contact book session, read from a TOML file.
///
/// Every key is optional:
///
/// ```toml
/// [import]
/// default_file = "contacts.csv"
/// strict = true
///
/// [export]
/// directory = "exports"
/// prefix = "contact_list_export__"
///
/// [ids]
/// max_attempts = 10000
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub import: ImportConfig,
    pub export: ExportConfig,
    pub ids: IdConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImportConfig {
    /// File loaded when the session starts, if any.
    pub default_file: Option<PathBuf>,

    /// Run imported contacts through full validation and the uniqueness
    /// check before they enter the book. When `false`, imported rows are
    /// taken as-is.
    pub strict: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            default_file: None,
            strict: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    pub directory: PathBuf,
    pub prefix: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            prefix: "contact_list_export__".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IdConfig {
    /// Random draws tried before falling back to the lowest free ID.
    pub max_attempts: usize,
}

impl Default for IdConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML is invalid.
    pub fn load(path: &Path) -> ContactsResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> ContactsResult<Self> {
        Ok(toml::from_str(content)?)
    }
}
