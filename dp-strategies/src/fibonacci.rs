//! Fibonacci strategies: naive recursion, top-down memoization, bottom-up iteration.

use crate::counter::CallCounter;
use crate::error::StrategyError;
use crate::memo::Memo;

/// Largest `n` for which `F(n)` fits in a `u64`.
///
/// `F(94)` overflows; rather than wrap silently, the strategies reject
/// anything above this bound.
pub const MAX_FIB_INDEX: usize = 93;

fn check_index(n: usize) -> Result<(), StrategyError> {
    if n > MAX_FIB_INDEX {
        return Err(StrategyError::IndexTooLarge {
            index: n,
            max: MAX_FIB_INDEX,
        });
    }
    Ok(())
}

/// Exponential-time recursive Fibonacci with an invocation counter.
///
/// Every entry into the recursive body — base cases included — records on
/// the counter exactly once, before any other work. No caching, so the
/// first computation of `fib(n)` for `n >= 1` records exactly
/// `2 * F(n+1) - 1` calls.
///
/// # Example
///
/// ```rust
/// use dp_strategies::NaiveFibonacci;
///
/// let fib = NaiveFibonacci::new();
/// assert_eq!(fib.fib(10).unwrap(), 55);
/// assert_eq!(fib.calls(), 177); // 2 * F(11) - 1
/// ```
#[derive(Debug, Default)]
pub struct NaiveFibonacci {
    calls: CallCounter,
}

impl NaiveFibonacci {
    /// Creates a strategy with a zeroed counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes `F(n)` by direct recursion.
    pub fn fib(&self, n: usize) -> Result<u64, StrategyError> {
        check_index(n)?;
        Ok(self.walk(n))
    }

    fn walk(&self, n: usize) -> u64 {
        self.calls.record();
        match n {
            0 => 0,
            1 => 1,
            _ => self.walk(n - 1) + self.walk(n - 2),
        }
    }

    /// Calls recorded since construction or the last reset.
    pub fn calls(&self) -> u64 {
        self.calls.get()
    }

    /// Zeroes the counter before an independent measurement.
    pub fn reset(&self) {
        self.calls.reset();
    }
}

/// Top-down Fibonacci with a memo table keyed by the index.
///
/// Same recurrence as [`NaiveFibonacci`], but each entry consults the memo
/// after recording on the counter; a hit returns the cached value without
/// further recursion. Each index in `0..=n` is therefore computed once,
/// and the first computation of `fib(n)` for `n >= 1` records exactly
/// `2n - 1` calls. A repeated call on the same input records exactly one
/// more (the top-level cache hit).
///
/// # Example
///
/// ```rust
/// use dp_strategies::MemoizedFibonacci;
///
/// let fib = MemoizedFibonacci::new();
/// assert_eq!(fib.fib(30).unwrap(), 832040);
/// assert_eq!(fib.calls(), 59); // 2 * 30 - 1
///
/// // Second call is a single cache hit.
/// assert_eq!(fib.fib(30).unwrap(), 832040);
/// assert_eq!(fib.calls(), 60);
/// ```
#[derive(Debug, Default)]
pub struct MemoizedFibonacci {
    calls: CallCounter,
    memo: Memo<usize, u64>,
}

impl MemoizedFibonacci {
    /// Creates a strategy with a zeroed counter and an empty memo table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes `F(n)`, reusing any subproblem already in the memo table.
    pub fn fib(&self, n: usize) -> Result<u64, StrategyError> {
        check_index(n)?;
        Ok(self.walk(n))
    }

    fn walk(&self, n: usize) -> u64 {
        self.calls.record();
        if let Some(value) = self.memo.get(&n) {
            return value;
        }
        let value = match n {
            0 => 0,
            1 => 1,
            _ => self.walk(n - 1) + self.walk(n - 2),
        };
        self.memo.insert(n, value);
        value
    }

    /// Calls recorded since construction or the last reset.
    pub fn calls(&self) -> u64 {
        self.calls.get()
    }

    /// Zeroes the counter and empties the memo table.
    pub fn reset(&self) {
        self.calls.reset();
        self.memo.clear();
    }
}

/// Bottom-up Fibonacci with two rolling predecessors.
///
/// Not instrumented: its cost is linear time and constant space by
/// construction, so there is nothing to count.
///
/// # Example
///
/// ```rust
/// use dp_strategies::fib_iterative;
///
/// assert_eq!(fib_iterative(0).unwrap(), 0);
/// assert_eq!(fib_iterative(1).unwrap(), 1);
/// assert_eq!(fib_iterative(30).unwrap(), 832040);
/// ```
pub fn fib_iterative(n: usize) -> Result<u64, StrategyError> {
    check_index(n)?;
    if n == 0 {
        return Ok(0);
    }
    if n == 1 {
        return Ok(1);
    }

    let mut prev2: u64 = 0;
    let mut prev1: u64 = 1;
    let mut current: u64 = 0;
    for _ in 2..=n {
        current = prev1 + prev2;
        prev2 = prev1;
        prev1 = current;
    }
    Ok(current)
}
