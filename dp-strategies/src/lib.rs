//! Strategy comparison for classic dynamic-programming problems.
//!
//! This crate implements the same two problems — Fibonacci numbers and
//! Longest Common Subsequence (LCS) length — with several algorithmic
//! strategies so their cost can be compared:
//!
//! - [`NaiveFibonacci`]: exponential-time recursion, no caching
//! - [`MemoizedFibonacci`]: top-down recursion with a memo table
//! - [`fib_iterative`]: bottom-up iteration with two rolling values
//! - [`NaiveLcs`]: exponential-time recursive LCS length
//! - [`MemoizedLcs`]: top-down LCS with a composite-keyed memo table
//!
//! # Instrumentation
//!
//! Each recursive strategy owns a [`CallCounter`] that records every entry
//! into the recursive body, *before* any memo lookup, so cache hits are
//! counted too. The memoized strategies additionally own a [`Memo`] table.
//! Both belong to one strategy instance and one measurement run: construct
//! a fresh instance (or call `reset`) before an independent measurement,
//! otherwise counts accumulate and stale memo entries skew the comparison.
//!
//! # Example: counting redundant work
//!
//! ```rust
//! use dp_strategies::{MemoizedFibonacci, NaiveFibonacci};
//!
//! let naive = NaiveFibonacci::new();
//! let memoized = MemoizedFibonacci::new();
//!
//! assert_eq!(naive.fib(10).unwrap(), 55);
//! assert_eq!(memoized.fib(10).unwrap(), 55);
//!
//! // Same answer, very different cost: 2*F(11) - 1 vs 2*10 - 1 calls.
//! assert_eq!(naive.calls(), 177);
//! assert_eq!(memoized.calls(), 19);
//! ```
//!
//! # Example: LCS over borrowed sequences
//!
//! ```rust
//! use dp_strategies::MemoizedLcs;
//!
//! let lcs = MemoizedLcs::new(b"ABCDGH", b"AEDFHR");
//! assert_eq!(lcs.length(6, 6).unwrap(), 3); // "ADH"
//! ```

mod counter;
mod error;
mod fibonacci;
mod lcs;
mod memo;

pub use counter::CallCounter;
pub use error::StrategyError;
pub use fibonacci::{MAX_FIB_INDEX, MemoizedFibonacci, NaiveFibonacci, fib_iterative};
pub use lcs::{MemoizedLcs, NaiveLcs};
pub use memo::Memo;
