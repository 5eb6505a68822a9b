//! Human-readable rendering of the merged analysis results.

use std::fmt::Write as _;
use std::time::Duration;

use crate::runner::Analysis;

/// Group a count with thousands separators: 1234567 -> "1,234,567".
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn format_elapsed(elapsed: Duration) -> String {
    // Millisecond precision is plenty for a report line.
    let rounded = Duration::from_millis(elapsed.as_millis() as u64);
    humantime::format_duration(rounded).to_string()
}

/// Render the analysis summary.
pub fn render(analysis: &Analysis) -> String {
    let tally = &analysis.tally;
    let mut out = String::new();

    out.push_str("=== Access Log Analysis Results ===\n");
    let _ = writeln!(out, "Total files: {}", tally.files);
    let _ = writeln!(out, "Total requests: {}", format_count(tally.total));
    let _ = writeln!(out, "Processing time: {}", format_elapsed(analysis.elapsed));
    if !analysis.failures.is_empty() {
        let _ = writeln!(out, "Files skipped: {}", analysis.failures.len());
    }
    out.push('\n');

    out.push_str("Status Code Distribution:\n");
    for (status, count) in tally.sorted_statuses() {
        let percentage = count as f64 / tally.total as f64 * 100.0;
        let _ = writeln!(
            out,
            "  {}: {} ({:.2}%)",
            status,
            format_count(count),
            percentage
        );
    }
    out.push('\n');

    let _ = writeln!(out, "Error Rate (4xx + 5xx): {:.2}%", tally.error_rate());
    out
}
