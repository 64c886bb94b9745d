//! Swipe code configuration
//!
//! Loaded from TOML:
//!
//! ```toml
//! directions = "intercardinal"
//! code = "up|upright|right"
//! ```
//!
//! A missing `code` means an empty code that never triggers. Everything else
//! is validated eagerly in [`SwipeCodeConfig::build_code`].

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::code::Code;
use crate::direction::Alphabet;
use crate::error::{Result, ResultExt, SwipeCodeError};

/// Alphabet selection plus the code's text form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeCodeConfig {
    /// Direction granularity
    pub directions: Alphabet,

    /// Code as `|`-separated direction names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl SwipeCodeConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the alphabet
    pub fn with_directions(mut self, directions: Alphabet) -> Self {
        self.directions = directions;
        self
    }

    /// Set the code text
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(SwipeCodeError::from)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Validate and build the code against the selected alphabet
    pub fn build_code(&self) -> Result<Code> {
        match &self.code {
            None => Ok(Code::empty(self.directions)),
            Some(text) => Code::parse(text, self.directions),
        }
    }
}
