//! Human-readable rendering of a run summary.

use bb84_sim::prelude::*;

/// Render the summary as the multi-line text report.
pub fn render(summary: &Summary, tapped: bool) -> String {
    let heading = if tapped {
        "Run summary (intercept-resend eavesdropper):"
    } else {
        "Run summary (honest channel):"
    };
    [
        heading.to_string(),
        format!("Total bits (N): {}", summary.total_bits),
        format!("Sifted key length: {}", summary.sifted_len),
        format!("Discarded (basis mismatch): {}", summary.discarded),
        format!("Revealed sample: {}", summary.sample_size),
        format!("Errors in sample: {}", summary.mismatches),
        format!("Estimated QBER: {:.2}%", summary.qber * 100.0),
        format!(
            "Expected QBER (honest): {:.0}%",
            summary.expected_qber_honest * 100.0
        ),
        format!(
            "Expected QBER (intercept-resend): {:.0}%",
            summary.expected_qber_intercepted * 100.0
        ),
    ]
    .join("\n")
}
