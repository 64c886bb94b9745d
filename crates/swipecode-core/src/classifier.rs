//! Direction Classifier - maps a swipe's start/end points to a direction
//!
//! Coordinates are screen space: origin top-left, y growing downward. The
//! vertical delta is inverted before `atan2` so that an upward swipe on
//! screen lands at 90°. 0° points right and angles grow counter-clockwise.

use std::f64::consts::PI;

use crate::direction::{Alphabet, Direction};

/// Swipe angle in degrees, normalized into `[0, 360)`
///
/// `atan2` yields `(-π, π]`; shifting by π and then by another 180° puts
/// the result in `[180, 540]`, which the final modulo folds back onto the
/// circle with 0° on the positive x axis.
pub fn angle(x1: f32, y1: f32, x2: f32, y2: f32) -> f64 {
    let dy = f64::from(y1 - y2);
    let dx = f64::from(x2 - x1);
    ((dy.atan2(dx) + PI) * 180.0 / PI + 180.0) % 360.0
}

/// Direction whose interval(s) contain `angle`
///
/// Angles no row claims (exactly 360.0, NaN) fall back to the alphabet's
/// wrap-around symbol.
pub fn classify_angle(angle: f64, alphabet: Alphabet) -> Direction {
    alphabet
        .table()
        .iter()
        .find(|row| row.contains(angle))
        .map(|row| row.direction)
        .unwrap_or_else(|| alphabet.wrap_around())
}

/// Classify a swipe from `(x1, y1)` to `(x2, y2)`
pub fn classify(x1: f32, y1: f32, x2: f32, y2: f32, alphabet: Alphabet) -> Direction {
    classify_angle(angle(x1, y1, x2, y2), alphabet)
}
