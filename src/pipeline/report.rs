//! Human-readable summary of a redaction run

use super::RedactionResult;

/// Render the summary printed to stderr after `redact` in text mode
pub fn format_summary(result: &RedactionResult) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str("═══════════════════════════════════════════════════════════════\n");
    output.push_str("                      REDACTION SUMMARY                        \n");
    output.push_str("═══════════════════════════════════════════════════════════════\n");
    output.push_str(&format!("  Invocation:        {}\n", result.invocation_id));
    output.push_str(&format!("  Names Removed:     {}\n", result.names_removed));
    output.push_str(&format!(
        "  Rejected Spans:    {}\n",
        result.rejected_spans.len()
    ));
    output.push_str(&format!(
        "  Processing Time:   {} ms\n",
        result.processing_time_ms
    ));

    if let Some(metrics) = result.metrics {
        output.push_str(&format!("  Original Words:    {}\n", metrics.original_words));
        output.push_str(&format!("  Scrubbed Words:    {}\n", metrics.scrubbed_words));
        output.push_str(&format!(
            "  Reduction:         {:.2}%\n",
            metrics.reduction_pct
        ));
    }

    if !result.scrub_hits.is_empty() {
        output.push('\n');
        output.push_str("  SCRUB RULES\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        for hit in &result.scrub_hits {
            output.push_str(&format!("  {:30} {:>5}\n", hit.rule.name(), hit.matches));
        }
    }

    output.push_str("═══════════════════════════════════════════════════════════════\n");
    output
}
