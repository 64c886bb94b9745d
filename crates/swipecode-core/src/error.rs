//! Error types for Swipecode Core
//!
//! Classification and matching are total and never fail at runtime. The only
//! failures live at configuration time, when a code string is turned into a
//! validated [`Code`](crate::code::Code). We use `thiserror` for the
//! Display/Error implementations.

use thiserror::Error;

use crate::direction::{Alphabet, Direction};

/// Result type alias for Swipecode operations
pub type Result<T> = std::result::Result<T, SwipeCodeError>;

/// Main error type for Swipecode operations
#[derive(Error, Debug)]
pub enum SwipeCodeError {
    /// Malformed code or alphabet selection
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors while reading a configuration file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML decoding errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        source: Box<SwipeCodeError>,
    },
}

/// Errors raised while building a code from its text form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Empty direction name at position {position}")]
    EmptyDirection { position: usize },

    #[error("Unknown direction '{name}' at position {position}")]
    UnknownDirection { name: String, position: usize },

    #[error("Direction {direction} at position {position} is not part of the {alphabet} alphabet")]
    NotInAlphabet {
        direction: Direction,
        alphabet: Alphabet,
        position: usize,
    },
}

impl SwipeCodeError {
    /// Add context to an error
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The configuration error underneath any context layers, if there is one
    pub fn config_error(&self) -> Option<&ConfigError> {
        match self {
            Self::Config(err) => Some(err),
            Self::WithContext { source, .. } => source.config_error(),
            _ => None,
        }
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to a Result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add lazy context to a Result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_context() {
        let err = SwipeCodeError::from(ConfigError::EmptyDirection { position: 2 });
        let err = err.context("Failed to load swipe code");

        let message = err.to_string();
        assert!(message.contains("Failed to load swipe code"));
        assert!(message.contains("position 2"));
    }

    #[test]
    fn test_result_ext_keeps_config_error() {
        let result: Result<()> = Err(ConfigError::UnknownDirection {
            name: "sideways".to_string(),
            position: 0,
        }
        .into());
        let err = result.with_context(|| "layout.toml".to_string()).unwrap_err();

        assert_eq!(
            err.config_error(),
            Some(&ConfigError::UnknownDirection {
                name: "sideways".to_string(),
                position: 0,
            })
        );
    }

    #[test]
    fn test_not_in_alphabet_message() {
        let err = ConfigError::NotInAlphabet {
            direction: Direction::UpLeft,
            alphabet: Alphabet::Cardinal,
            position: 1,
        };
        assert_eq!(
            err.to_string(),
            "Direction upleft at position 1 is not part of the cardinal alphabet"
        );
    }
}
