//! Invocation counting for the recursive strategies.

use std::cell::Cell;

/// Counts how many times an instrumented recursive body is entered.
///
/// Each recursive strategy owns its own counter; there is no process-wide
/// state, so independent measurements (including parallel test runs) never
/// observe each other's counts. The counter records before any memo lookup,
/// so cache hits are included.
///
/// # Example
///
/// ```rust
/// use dp_strategies::CallCounter;
///
/// let counter = CallCounter::new();
/// counter.record();
/// counter.record();
/// assert_eq!(counter.get(), 2);
///
/// counter.reset();
/// assert_eq!(counter.get(), 0);
/// ```
#[derive(Debug, Default)]
pub struct CallCounter {
    calls: Cell<u64>,
}

impl CallCounter {
    /// Creates a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one entry into the instrumented body.
    pub fn record(&self) {
        self.calls.set(self.calls.get() + 1);
    }

    /// Returns the number of entries recorded since the last reset.
    pub fn get(&self) -> u64 {
        self.calls.get()
    }

    /// Clears the count. Must run before each independent measurement.
    pub fn reset(&self) {
        self.calls.set(0);
    }
}
