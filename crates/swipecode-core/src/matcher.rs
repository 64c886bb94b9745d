//! Sequence Matcher - advances a cursor through a code one direction at a time
//!
//! The matcher is a single-pass state machine: a correct direction moves the
//! cursor forward, any other direction sends it back to 0. There is no
//! backtracking, so for code `[up, down]` the input `up, up, down` does not
//! complete: the second `up` resets the cursor and is not re-tried as a
//! fresh start.
//!
//! Reaching the end of the code resets the cursor to 0 *before* listeners
//! are notified, so the cursor is never observed at `code.len()`.
//!
//! # Listener failures
//!
//! Listeners return `anyhow::Result<()>`. An `Err` is logged and the
//! remaining listeners are still notified; the number of failures is
//! reported in [`FeedOutcome::Completed`]. Panics are not caught.

use std::fmt;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::code::Code;
use crate::direction::Direction;

/// Callback notified every time the code is completed
pub trait SwipeCodeListener: Send {
    fn on_success(&mut self) -> anyhow::Result<()>;
}

/// Adapter for closures that cannot fail
struct FnListener<F>(F);

impl<F> SwipeCodeListener for FnListener<F>
where
    F: FnMut() + Send,
{
    fn on_success(&mut self) -> anyhow::Result<()> {
        (self.0)();
        Ok(())
    }
}

/// Adapter for closures returning a `Result`
struct FallibleFnListener<F>(F);

impl<F> SwipeCodeListener for FallibleFnListener<F>
where
    F: FnMut() -> anyhow::Result<()> + Send,
{
    fn on_success(&mut self) -> anyhow::Result<()> {
        (self.0)()
    }
}

/// What a single [`SequenceMatcher::feed`] call did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FeedOutcome {
    /// The code is empty; nothing to match
    Ignored,
    /// The direction matched; `state` is the new cursor
    Advanced { state: usize },
    /// The last direction matched; listeners were notified
    Completed { notified: usize, failed: usize },
    /// The direction did not match; cursor was at `from`
    Reset { from: usize },
}

impl FeedOutcome {
    /// Whether the gesture was consumed. Always `true`.
    pub fn handled(&self) -> bool {
        true
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, FeedOutcome::Completed { .. })
    }
}

/// Owns the expected code, the match cursor and the listener registry
pub struct SequenceMatcher {
    code: Code,
    state: usize,
    listeners: Vec<Box<dyn SwipeCodeListener>>,
}

impl SequenceMatcher {
    pub fn new(code: Code) -> Self {
        Self {
            code,
            state: 0,
            listeners: Vec::new(),
        }
    }

    /// Number of leading directions matched so far
    pub fn state(&self) -> usize {
        self.state
    }

    pub fn code(&self) -> &Code {
        &self.code
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Append a listener. No deduplication.
    pub fn register<L>(&mut self, listener: L)
    where
        L: SwipeCodeListener + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Append an infallible closure as a listener
    pub fn register_fn<F>(&mut self, f: F)
    where
        F: FnMut() + Send + 'static,
    {
        self.register(FnListener(f));
    }

    /// Append a fallible closure as a listener
    pub fn register_fallible<F>(&mut self, f: F)
    where
        F: FnMut() -> anyhow::Result<()> + Send + 'static,
    {
        self.register(FallibleFnListener(f));
    }

    /// Drop any partial match without notifying
    pub fn reset(&mut self) {
        self.state = 0;
    }

    /// Consume one classified direction
    pub fn feed(&mut self, direction: Direction) -> FeedOutcome {
        let Some(expected) = self.code.get(self.state) else {
            // Only reachable with an empty code: the cursor never rests at len
            return FeedOutcome::Ignored;
        };

        if direction != expected {
            let from = self.state;
            self.state = 0;
            if from > 0 {
                debug!(%direction, %expected, from, "Swipe code reset");
            }
            return FeedOutcome::Reset { from };
        }

        self.state += 1;
        if self.state < self.code.len() {
            debug!(%direction, state = self.state, "Swipe code advanced");
            return FeedOutcome::Advanced { state: self.state };
        }

        self.state = 0;
        info!(code = %self.code, listeners = self.listeners.len(), "Swipe code completed");
        let failed = self.notify();
        FeedOutcome::Completed {
            notified: self.listeners.len(),
            failed,
        }
    }

    fn notify(&mut self) -> usize {
        let mut failed = 0;
        for (index, listener) in self.listeners.iter_mut().enumerate() {
            if let Err(e) = listener.on_success() {
                failed += 1;
                warn!(listener = index, error = %e, "Swipe code listener failed");
            }
        }
        failed
    }
}

impl fmt::Debug for SequenceMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceMatcher")
            .field("code", &self.code)
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
