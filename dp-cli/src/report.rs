//! Console reporting for strategy measurements.

use std::time::Duration;

/// One measured strategy run: the computed result, the number of recursive
/// calls where the strategy is instrumented, and elapsed wall-clock time.
pub struct Measurement {
    label: String,
    result: String,
    calls: Option<u64>,
    elapsed: Duration,
}

impl Measurement {
    /// A measurement of an instrumented strategy.
    pub fn counted(
        label: impl Into<String>,
        result: impl ToString,
        calls: u64,
        elapsed: Duration,
    ) -> Self {
        Self {
            label: label.into(),
            result: result.to_string(),
            calls: Some(calls),
            elapsed,
        }
    }

    /// A measurement of an uninstrumented strategy (no call count).
    pub fn plain(label: impl Into<String>, result: impl ToString, elapsed: Duration) -> Self {
        Self {
            label: label.into(),
            result: result.to_string(),
            calls: None,
            elapsed,
        }
    }

    /// Print the measurement as a single report line.
    pub fn print(&self) {
        match self.calls {
            Some(calls) => println!(
                "{}: {} ({} calls, {})",
                self.label,
                self.result,
                calls,
                format_duration(self.elapsed)
            ),
            None => println!(
                "{}: {} ({})",
                self.label,
                self.result,
                format_duration(self.elapsed)
            ),
        }
    }
}

/// Format a Duration for display
fn format_duration(d: Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
