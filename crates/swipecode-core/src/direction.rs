//! Direction symbols and the two alphabets they are drawn from
//!
//! A [`Direction`] is a plain symbol. Which angles map to it depends on the
//! [`Alphabet`] in use: `Up` covers 90° ± 45° in the cardinal alphabet but
//! only 90° ± 22.5° in the intercardinal one. Each alphabet owns a static
//! table of half-open `[low, high)` intervals that tiles `[0°, 360°)`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A discrete swipe direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
}

impl Direction {
    /// Lowercase symbol name, as used in code strings
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::UpRight => "upright",
            Direction::Right => "right",
            Direction::DownRight => "downright",
            Direction::Down => "down",
            Direction::DownLeft => "downleft",
            Direction::Left => "left",
            Direction::UpLeft => "upleft",
        }
    }

    /// Look up a symbol by name, ignoring ASCII case
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_DIRECTIONS
            .iter()
            .copied()
            .find(|d| d.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const ALL_DIRECTIONS: [Direction; 8] = [
    Direction::Up,
    Direction::UpRight,
    Direction::Right,
    Direction::DownRight,
    Direction::Down,
    Direction::DownLeft,
    Direction::Left,
    Direction::UpLeft,
];

/// Half-open angle interval `[low, high)` in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleRange {
    pub low: f64,
    pub high: f64,
}

impl AngleRange {
    const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Whether `angle` lies in `[low, high)`
    pub fn contains(&self, angle: f64) -> bool {
        angle >= self.low && angle < self.high
    }

    /// Width of the interval in degrees
    pub fn span(&self) -> f64 {
        self.high - self.low
    }
}

/// One row of an alphabet table: a symbol and the interval(s) it owns
#[derive(Debug, Clone, Copy)]
pub struct DirectionRanges {
    pub direction: Direction,
    pub ranges: &'static [AngleRange],
}

impl DirectionRanges {
    /// Whether any of the symbol's intervals contains `angle`
    pub fn contains(&self, angle: f64) -> bool {
        self.ranges.iter().any(|r| r.contains(angle))
    }
}

static CARDINAL_TABLE: [DirectionRanges; 4] = [
    DirectionRanges {
        direction: Direction::Up,
        ranges: &[AngleRange::new(45.0, 135.0)],
    },
    DirectionRanges {
        direction: Direction::Left,
        ranges: &[AngleRange::new(135.0, 225.0)],
    },
    DirectionRanges {
        direction: Direction::Down,
        ranges: &[AngleRange::new(225.0, 315.0)],
    },
    DirectionRanges {
        direction: Direction::Right,
        ranges: &[AngleRange::new(0.0, 45.0), AngleRange::new(315.0, 360.0)],
    },
];

static INTERCARDINAL_TABLE: [DirectionRanges; 8] = [
    DirectionRanges {
        direction: Direction::UpRight,
        ranges: &[AngleRange::new(22.5, 67.5)],
    },
    DirectionRanges {
        direction: Direction::Up,
        ranges: &[AngleRange::new(67.5, 112.5)],
    },
    DirectionRanges {
        direction: Direction::UpLeft,
        ranges: &[AngleRange::new(112.5, 157.5)],
    },
    DirectionRanges {
        direction: Direction::Left,
        ranges: &[AngleRange::new(157.5, 202.5)],
    },
    DirectionRanges {
        direction: Direction::DownLeft,
        ranges: &[AngleRange::new(202.5, 247.5)],
    },
    DirectionRanges {
        direction: Direction::Down,
        ranges: &[AngleRange::new(247.5, 292.5)],
    },
    DirectionRanges {
        direction: Direction::DownRight,
        ranges: &[AngleRange::new(292.5, 337.5)],
    },
    DirectionRanges {
        direction: Direction::Right,
        ranges: &[AngleRange::new(0.0, 22.5), AngleRange::new(337.5, 360.0)],
    },
];

/// Direction granularity: 4-way or 8-way
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alphabet {
    #[default]
    Cardinal,
    Intercardinal,
}

impl Alphabet {
    /// Interval table, in lookup order
    pub fn table(self) -> &'static [DirectionRanges] {
        match self {
            Alphabet::Cardinal => &CARDINAL_TABLE,
            Alphabet::Intercardinal => &INTERCARDINAL_TABLE,
        }
    }

    /// Symbols of this alphabet, in lookup order
    pub fn directions(self) -> impl Iterator<Item = Direction> + Clone {
        self.table().iter().map(|row| row.direction)
    }

    pub fn contains(self, direction: Direction) -> bool {
        self.directions().any(|d| d == direction)
    }

    /// Interval(s) owned by `direction`, empty if it is not in the alphabet
    pub fn ranges_of(self, direction: Direction) -> &'static [AngleRange] {
        self.table()
            .iter()
            .find(|row| row.direction == direction)
            .map(|row| row.ranges)
            .unwrap_or(&[])
    }

    /// The symbol straddling 0°/360°; also the classifier fallback
    pub fn wrap_around(self) -> Direction {
        Direction::Right
    }

    /// Number of symbols
    pub fn size(self) -> usize {
        self.table().len()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alphabet::Cardinal => write!(f, "cardinal"),
            Alphabet::Intercardinal => write!(f, "intercardinal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_sizes() {
        assert_eq!(Alphabet::Cardinal.size(), 4);
        assert_eq!(Alphabet::Intercardinal.size(), 8);
    }

    #[test]
    fn test_cardinal_membership() {
        assert!(Alphabet::Cardinal.contains(Direction::Up));
        assert!(Alphabet::Cardinal.contains(Direction::Right));
        assert!(!Alphabet::Cardinal.contains(Direction::UpRight));
        assert!(!Alphabet::Cardinal.contains(Direction::DownLeft));
        for d in ALL_DIRECTIONS {
            assert!(Alphabet::Intercardinal.contains(d));
        }
    }

    #[test]
    fn test_exactly_one_wrap_around_symbol() {
        for alphabet in [Alphabet::Cardinal, Alphabet::Intercardinal] {
            let split: Vec<_> = alphabet
                .table()
                .iter()
                .filter(|row| row.ranges.len() == 2)
                .map(|row| row.direction)
                .collect();
            assert_eq!(split, vec![alphabet.wrap_around()]);
        }
    }

    #[test]
    fn test_ranges_cover_full_circle() {
        for alphabet in [Alphabet::Cardinal, Alphabet::Intercardinal] {
            let total: f64 = alphabet
                .table()
                .iter()
                .flat_map(|row| row.ranges.iter())
                .map(AngleRange::span)
                .sum();
            assert!((total - 360.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_half_open_boundaries() {
        let up = Alphabet::Cardinal.ranges_of(Direction::Up)[0];
        assert!(up.contains(45.0));
        assert!(!up.contains(135.0));
        assert!(Alphabet::Cardinal.ranges_of(Direction::UpLeft).is_empty());
    }

    #[test]
    fn test_name_lookup_is_case_insensitive() {
        assert_eq!(Direction::from_name("UP"), Some(Direction::Up));
        assert_eq!(Direction::from_name("DownRight"), Some(Direction::DownRight));
        assert_eq!(Direction::from_name("north"), None);
        assert_eq!(Direction::from_name(""), None);
    }

    #[test]
    fn test_serde_names() {
        #[derive(Deserialize)]
        struct Holder {
            alphabet: Alphabet,
            direction: Direction,
        }

        let holder: Holder =
            toml::from_str("alphabet = \"intercardinal\"\ndirection = \"upleft\"").unwrap();
        assert_eq!(holder.alphabet, Alphabet::Intercardinal);
        assert_eq!(holder.direction, Direction::UpLeft);
    }
}
