//! Recognizer - classifier and matcher wired together for a gesture source
//!
//! The host hands over one [`Fling`] per completed swipe. Velocity is carried
//! along for convenience but never inspected.

use serde::{Deserialize, Serialize};

use crate::classifier;
use crate::code::Code;
use crate::config::SwipeCodeConfig;
use crate::direction::{Alphabet, Direction};
use crate::error::Result;
use crate::matcher::{FeedOutcome, SequenceMatcher, SwipeCodeListener};

/// A point in screen space (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One completed swipe as reported by the gesture source
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Fling {
    pub start: Point,
    pub end: Point,
    #[serde(default)]
    pub velocity_x: f32,
    #[serde(default)]
    pub velocity_y: f32,
}

impl Fling {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            ..Self::default()
        }
    }

    pub fn with_velocity(mut self, velocity_x: f32, velocity_y: f32) -> Self {
        self.velocity_x = velocity_x;
        self.velocity_y = velocity_y;
        self
    }

    /// Direction of this fling in `alphabet`
    pub fn direction(&self, alphabet: Alphabet) -> Direction {
        classifier::classify(self.start.x, self.start.y, self.end.x, self.end.y, alphabet)
    }
}

/// Classifies flings with the code's alphabet and feeds the matcher
#[derive(Debug)]
pub struct SwipeCodeRecognizer {
    matcher: SequenceMatcher,
}

impl SwipeCodeRecognizer {
    pub fn new(code: Code) -> Self {
        Self {
            matcher: SequenceMatcher::new(code),
        }
    }

    /// Build from configuration, failing on an invalid code
    pub fn from_config(config: &SwipeCodeConfig) -> Result<Self> {
        Ok(Self::new(config.build_code()?))
    }

    pub fn alphabet(&self) -> Alphabet {
        self.matcher.code().alphabet()
    }

    pub fn code(&self) -> &Code {
        self.matcher.code()
    }

    pub fn state(&self) -> usize {
        self.matcher.state()
    }

    pub fn add_listener<L>(&mut self, listener: L)
    where
        L: SwipeCodeListener + 'static,
    {
        self.matcher.register(listener);
    }

    pub fn add_listener_fn<F>(&mut self, f: F)
    where
        F: FnMut() + Send + 'static,
    {
        self.matcher.register_fn(f);
    }

    pub fn reset(&mut self) {
        self.matcher.reset();
    }

    /// Classify a swipe from `(x1, y1)` to `(x2, y2)` and feed it
    pub fn feed(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> FeedOutcome {
        let direction = classifier::classify(x1, y1, x2, y2, self.alphabet());
        self.matcher.feed(direction)
    }

    /// Feed an already classified direction
    pub fn feed_direction(&mut self, direction: Direction) -> FeedOutcome {
        self.matcher.feed(direction)
    }

    /// Gesture-source callback; the fling is always consumed
    pub fn on_fling(&mut self, fling: &Fling) -> bool {
        self.feed(fling.start.x, fling.start.y, fling.end.x, fling.end.y)
            .handled()
    }
}
