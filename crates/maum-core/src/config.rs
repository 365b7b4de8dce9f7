//! Session configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default terminate keyword (Korean for "end").
const DEFAULT_TERMINATE_KEYWORD: &str = "종료";

/// Tunable session settings.
///
/// Loaded from an optional `maum.toml`; every field has a default so an
/// absent or empty file yields a working configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Input containing this substring ends the chat and shows the report.
    #[serde(default = "default_terminate_keyword")]
    pub terminate_keyword: String,
}

fn default_terminate_keyword() -> String {
    DEFAULT_TERMINATE_KEYWORD.to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            terminate_keyword: default_terminate_keyword(),
        }
    }
}

impl SessionConfig {
    /// Loads the configuration from a TOML file.
    ///
    /// A missing file is not an error: the defaults are returned. An
    /// unreadable or malformed file is.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }
}
