//! dp-compare — console comparison of dynamic-programming strategies.
//!
//! Runs each Fibonacci and LCS strategy on fixed inputs and reports the
//! computed result, the invocation count where instrumented, and elapsed
//! wall-clock time. Every measurement uses a fresh strategy instance so
//! counters and memo tables never leak between runs.

mod report;

use std::time::Instant;

use dp_strategies::{
    MemoizedFibonacci, MemoizedLcs, NaiveFibonacci, NaiveLcs, StrategyError, fib_iterative,
};
use report::Measurement;

const FIB_N: usize = 30;
const LCS_A: &str = "ABCDGH";
const LCS_B: &str = "AEDFHR";
const LARGE_LCS_A: &str = "ABCDEFGHIJKLMNOP";
const LARGE_LCS_B: &str = "ACEGIKMOQSUWY";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), StrategyError> {
    println!("=== Fibonacci strategies ===");

    let naive = NaiveFibonacci::new();
    let start = Instant::now();
    let result = naive.fib(FIB_N)?;
    Measurement::counted(
        format!("Naive fib({})", FIB_N),
        result,
        naive.calls(),
        start.elapsed(),
    )
    .print();

    let memoized = MemoizedFibonacci::new();
    let start = Instant::now();
    let result = memoized.fib(FIB_N)?;
    Measurement::counted(
        format!("Memoized fib({})", FIB_N),
        result,
        memoized.calls(),
        start.elapsed(),
    )
    .print();

    let start = Instant::now();
    let result = fib_iterative(FIB_N)?;
    Measurement::plain(format!("Iterative fib({})", FIB_N), result, start.elapsed()).print();

    println!();
    println!("=== LCS strategies ({:?} vs {:?}) ===", LCS_A, LCS_B);
    run_lcs_pair(LCS_A, LCS_B)?;

    println!();
    println!(
        "=== LCS strategies, larger pair ({:?} vs {:?}) ===",
        LARGE_LCS_A, LARGE_LCS_B
    );
    run_lcs_pair(LARGE_LCS_A, LARGE_LCS_B)?;

    Ok(())
}

/// Measure both LCS strategies over the full lengths of one sequence pair.
fn run_lcs_pair(a: &str, b: &str) -> Result<(), StrategyError> {
    let naive = NaiveLcs::new(a.as_bytes(), b.as_bytes());
    let start = Instant::now();
    let result = naive.length(a.len(), b.len())?;
    Measurement::counted("Naive LCS", result, naive.calls(), start.elapsed()).print();

    let memoized = MemoizedLcs::new(a.as_bytes(), b.as_bytes());
    let start = Instant::now();
    let result = memoized.length(a.len(), b.len())?;
    Measurement::counted("Memoized LCS", result, memoized.calls(), start.elapsed()).print();

    Ok(())
}
