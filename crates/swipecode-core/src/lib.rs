//! Swipecode Core - directional swipe-code recognition
//!
//! A swipe code is an ordered sequence of directions ("up, up, down") that a
//! user reproduces with individual flings. Recognition is a two-stage
//! pipeline:
//!
//! ```text
//! fling (x1, y1, x2, y2)
//!        │
//!        ▼
//!  ┌─────────────┐   Direction   ┌─────────────────┐
//!  │ classifier  │ ────────────▶ │ SequenceMatcher │ ──▶ advance | complete + notify | reset
//!  └─────────────┘               └─────────────────┘
//! ```
//!
//! 1. **Direction Classifier** (`classifier`): pure mapping from a start/end
//!    point pair to a [`Direction`] of the selected [`Alphabet`]
//! 2. **Sequence Matcher** (`matcher`): cursor over the expected [`Code`];
//!    a match advances, a mismatch resets, completion notifies listeners
//!
//! [`SwipeCodeRecognizer`] wires both together for a gesture source, and
//! [`SwipeCodeConfig`] turns a TOML/text description into a validated code.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//! use swipecode_core::{SwipeCodeConfig, SwipeCodeRecognizer};
//!
//! let config = SwipeCodeConfig::from_toml_str(r#"
//!     directions = "cardinal"
//!     code = "up|up|down"
//! "#).unwrap();
//!
//! let mut recognizer = SwipeCodeRecognizer::from_config(&config).unwrap();
//!
//! let unlocked = Arc::new(AtomicUsize::new(0));
//! let counter = unlocked.clone();
//! recognizer.add_listener_fn(move || {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! // Screen coordinates: y grows downward
//! recognizer.feed(100.0, 300.0, 100.0, 100.0); // up
//! recognizer.feed(100.0, 300.0, 100.0, 100.0); // up
//! recognizer.feed(100.0, 100.0, 100.0, 300.0); // down
//!
//! assert_eq!(unlocked.load(Ordering::SeqCst), 1);
//! assert_eq!(recognizer.state(), 0);
//! ```
//!
//! # Threading
//!
//! Everything runs synchronously on the caller's thread, listeners included.
//! `feed` takes `&mut self`; callers delivering flings from several threads
//! must serialize access themselves.

#![deny(unsafe_code)]
#![warn(rust_2018_idioms, missing_debug_implementations, clippy::all)]

pub mod classifier;
pub mod code;
pub mod config;
pub mod direction;
pub mod error;
pub mod matcher;
pub mod recognizer;

// Re-export commonly used types for convenience
pub use classifier::{angle, classify, classify_angle};
pub use code::Code;
pub use config::SwipeCodeConfig;
pub use direction::{Alphabet, AngleRange, Direction};
pub use error::{ConfigError, Result, SwipeCodeError};
pub use matcher::{FeedOutcome, SequenceMatcher, SwipeCodeListener};
pub use recognizer::{Fling, Point, SwipeCodeRecognizer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_end_to_end_workflow() {
        let config = SwipeCodeConfig::new()
            .with_directions(Alphabet::Intercardinal)
            .with_code("left|upright|down");
        let mut recognizer = SwipeCodeRecognizer::from_config(&config).unwrap();

        let log = Arc::new(Mutex::new(Vec::new()));
        let l = log.clone();
        recognizer.add_listener_fn(move || l.lock().unwrap().push("unlocked"));

        let flings = [
            Fling::new(Point::new(300.0, 200.0), Point::new(50.0, 210.0)),
            Fling::new(Point::new(100.0, 400.0), Point::new(300.0, 200.0)),
            Fling::new(Point::new(200.0, 100.0), Point::new(190.0, 500.0)),
        ];

        let outcomes: Vec<_> = flings
            .iter()
            .map(|f| {
                let d = f.direction(recognizer.alphabet());
                recognizer.feed_direction(d)
            })
            .collect();

        assert_eq!(
            outcomes,
            vec![
                FeedOutcome::Advanced { state: 1 },
                FeedOutcome::Advanced { state: 2 },
                FeedOutcome::Completed {
                    notified: 1,
                    failed: 0
                },
            ]
        );
        assert_eq!(*log.lock().unwrap(), vec!["unlocked"]);
    }

    #[test]
    fn test_wrong_alphabet_is_a_config_error() {
        let err = SwipeCodeRecognizer::from_config(&SwipeCodeConfig::new().with_code("downleft"))
            .unwrap_err();
        assert!(matches!(err, SwipeCodeError::Config(ConfigError::NotInAlphabet { .. })));
    }
}
