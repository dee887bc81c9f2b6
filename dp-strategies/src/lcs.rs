//! Longest Common Subsequence strategies: naive recursion and top-down memoization.
//!
//! Both strategies borrow the two sequences for their lifetime, fixing them
//! for the duration of the computation. `length(m, n)` works on the first
//! `m` bytes of the first sequence and the first `n` bytes of the second.

use crate::counter::CallCounter;
use crate::error::StrategyError;
use crate::memo::Memo;

fn check_prefixes(a: &[u8], b: &[u8], m: usize, n: usize) -> Result<(), StrategyError> {
    if m > a.len() {
        return Err(StrategyError::PrefixOutOfRange { len: m, max: a.len() });
    }
    if n > b.len() {
        return Err(StrategyError::PrefixOutOfRange { len: n, max: b.len() });
    }
    Ok(())
}

/// Exponential-time recursive LCS length with an invocation counter.
///
/// Classic recurrence: 0 when either prefix is empty; `1 + walk(m-1, n-1)`
/// when the last characters of the prefixes match; otherwise the max over
/// dropping one character from either side. With no shared characters both
/// branches fire every time, so the worst case is exponential in `m + n`.
///
/// # Example
///
/// ```rust
/// use dp_strategies::NaiveLcs;
///
/// let lcs = NaiveLcs::new(b"ABCDGH", b"AEDFHR");
/// assert_eq!(lcs.length(6, 6).unwrap(), 3); // "ADH"
/// ```
#[derive(Debug)]
pub struct NaiveLcs<'a> {
    a: &'a [u8],
    b: &'a [u8],
    calls: CallCounter,
}

impl<'a> NaiveLcs<'a> {
    /// Creates a strategy over the given sequence pair.
    pub fn new(a: &'a [u8], b: &'a [u8]) -> Self {
        Self {
            a,
            b,
            calls: CallCounter::new(),
        }
    }

    /// LCS length of the first `m` bytes of `a` and the first `n` bytes of `b`.
    pub fn length(&self, m: usize, n: usize) -> Result<usize, StrategyError> {
        check_prefixes(self.a, self.b, m, n)?;
        Ok(self.walk(m, n))
    }

    fn walk(&self, m: usize, n: usize) -> usize {
        self.calls.record();
        if m == 0 || n == 0 {
            0
        } else if self.a[m - 1] == self.b[n - 1] {
            1 + self.walk(m - 1, n - 1)
        } else {
            self.walk(m, n - 1).max(self.walk(m - 1, n))
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

/// Top-down LCS with a memo table keyed by the composite `(m, n)` pair.
///
/// Same recurrence as [`NaiveLcs`], but each entry consults the memo after
/// recording on the counter. The key must stay a genuine tuple: collapsing
/// `(m, n)` to one scalar would conflate distinct states such as `(1, 2)`
/// and `(2, 1)`. Each distinct subproblem is computed at most once, so the
/// table never exceeds `(|a| + 1) * (|b| + 1)` entries.
#[derive(Debug)]
pub struct MemoizedLcs<'a> {
    a: &'a [u8],
    b: &'a [u8],
    calls: CallCounter,
    memo: Memo<(usize, usize), usize>,
}

impl<'a> MemoizedLcs<'a> {
    /// Creates a strategy over the given sequence pair.
    pub fn new(a: &'a [u8], b: &'a [u8]) -> Self {
        Self {
            a,
            b,
            calls: CallCounter::new(),
            memo: Memo::new(),
        }
    }

    /// LCS length of the first `m` bytes of `a` and the first `n` bytes of `b`.
    pub fn length(&self, m: usize, n: usize) -> Result<usize, StrategyError> {
        check_prefixes(self.a, self.b, m, n)?;
        Ok(self.walk(m, n))
    }

    fn walk(&self, m: usize, n: usize) -> usize {
        self.calls.record();
        if let Some(value) = self.memo.get(&(m, n)) {
            return value;
        }
        let value = if m == 0 || n == 0 {
            0
        } else if self.a[m - 1] == self.b[n - 1] {
            1 + self.walk(m - 1, n - 1)
        } else {
            self.walk(m, n - 1).max(self.walk(m - 1, n))
        };
        self.memo.insert((m, n), value);
        value
    }

    /// Calls recorded since construction or the last reset.
    pub fn calls(&self) -> u64 {
        self.calls.get()
    }

    /// Number of distinct subproblems stored so far.
    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }

    /// Zeroes the counter and empties the memo table.
    pub fn reset(&self) {
        self.calls.reset();
        self.memo.clear();
    }
}
