//! Swipe codes: the ordered direction sequence a user has to reproduce

use std::fmt;

use crate::direction::{Alphabet, Direction};
use crate::error::{ConfigError, Result};

/// Separator between symbol names in the text form of a code
pub const CODE_SEPARATOR: char = '|';

/// Immutable, alphabet-checked sequence of directions
///
/// An empty code is valid and never completes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Code {
    alphabet: Alphabet,
    directions: Vec<Direction>,
}

impl Code {
    /// Build a code, rejecting directions outside `alphabet`
    pub fn new(directions: Vec<Direction>, alphabet: Alphabet) -> Result<Self> {
        if let Some((position, &direction)) = directions
            .iter()
            .enumerate()
            .find(|(_, d)| !alphabet.contains(**d))
        {
            return Err(ConfigError::NotInAlphabet {
                direction,
                alphabet,
                position,
            }
            .into());
        }

        Ok(Self {
            alphabet,
            directions,
        })
    }

    /// Code that never triggers
    pub fn empty(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            directions: Vec::new(),
        }
    }

    /// Parse `up|up|down` style text; names are case-insensitive
    pub fn parse(text: &str, alphabet: Alphabet) -> Result<Self> {
        let directions = text
            .split(CODE_SEPARATOR)
            .enumerate()
            .map(|(position, raw)| {
                let name = raw.trim();
                if name.is_empty() {
                    return Err(ConfigError::EmptyDirection { position });
                }
                Direction::from_name(name).ok_or_else(|| ConfigError::UnknownDirection {
                    name: name.to_string(),
                    position,
                })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Self::new(directions, alphabet)
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    /// Expected direction at cursor position `index`
    pub fn get(&self, index: usize) -> Option<Direction> {
        self.directions.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.directions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, d) in self.directions.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", CODE_SEPARATOR)?;
            }
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        let code = Code::parse("Up|UP| down ", Alphabet::Cardinal).unwrap();
        assert_eq!(
            code.directions(),
            &[Direction::Up, Direction::Up, Direction::Down]
        );
        assert_eq!(code.to_string(), "up|up|down");
    }

    #[test]
    fn test_parse_intercardinal() {
        let code = Code::parse("upleft|RIGHT|downright", Alphabet::Intercardinal).unwrap();
        assert_eq!(code.len(), 3);
        assert_eq!(code.get(0), Some(Direction::UpLeft));
        assert_eq!(code.get(3), None);
        assert_eq!(code.alphabet(), Alphabet::Intercardinal);
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = Code::parse("up||down", Alphabet::Cardinal).unwrap_err();
        assert_eq!(
            err.config_error(),
            Some(&ConfigError::EmptyDirection { position: 1 })
        );

        // An empty string is one empty name, not an empty code
        let err = Code::parse("", Alphabet::Cardinal).unwrap_err();
        assert_eq!(
            err.config_error(),
            Some(&ConfigError::EmptyDirection { position: 0 })
        );
    }

    #[test]
    fn test_unknown_name_rejected() {
        let err = Code::parse("up|sideways", Alphabet::Intercardinal).unwrap_err();
        assert_eq!(
            err.config_error(),
            Some(&ConfigError::UnknownDirection {
                name: "sideways".to_string(),
                position: 1,
            })
        );
    }

    #[test]
    fn test_alphabet_mismatch_rejected() {
        let err = Code::parse("up|upright", Alphabet::Cardinal).unwrap_err();
        assert_eq!(
            err.config_error(),
            Some(&ConfigError::NotInAlphabet {
                direction: Direction::UpRight,
                alphabet: Alphabet::Cardinal,
                position: 1,
            })
        );
    }

    #[test]
    fn test_empty_code() {
        let code = Code::empty(Alphabet::Intercardinal);
        assert!(code.is_empty());
        assert_eq!(code.to_string(), "");
        assert_eq!(Code::default().alphabet(), Alphabet::Cardinal);
    }
}
