//! Elapsed/total time display formatting

/// Format a position in seconds as `M:SS`
///
/// Minutes are unbounded (`3600.0` renders as `60:00`). Callers are expected
/// to pass a finite, non-negative value; anything else renders as `0:00`.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };

    format!("{}:{:02}", total / 60, total % 60)
}

/// Duration reported by an engine, if it is usable for display and seeking
///
/// Engines report `NaN` (or nothing) until metadata is loaded, and some
/// report `+inf` for live sources.
pub fn valid_duration(duration: Option<f64>) -> Option<f64> {
    duration.filter(|d| d.is_finite() && *d > 0.0)
}
