//! Right-to-left span rewriting
//!
//! Spans are applied in descending start order, so the offsets of every span
//! still waiting to be applied lie before the current rewrite point and stay
//! valid. Instead of re-slicing the text once per span, the untouched
//! segments between spans are collected while walking right to left and
//! joined once at the end.

use super::models::{EntitySpan, Redaction, RemovedName};

/// Replace every span in `spans` with `placeholder`.
///
/// Offsets are character offsets into `text`. Spans that are negative,
/// inverted or reach past the end of `text` are skipped and reported in
/// [`Redaction::rejected`]. Overlapping spans are merged into one replaced
/// region, so no fragment of either survives. Labels are not inspected.
pub fn replace_spans(text: &str, spans: &[EntitySpan], placeholder: &str) -> Redaction {
    // Byte offset of every character boundary, including the end of text.
    let boundaries: Vec<usize> = text
        .char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_len = boundaries.len() - 1;

    let mut rejected = Vec::new();
    let mut accepted: Vec<(usize, usize)> = Vec::with_capacity(spans.len());
    for span in spans {
        match span.check_bounds(char_len) {
            Ok(range) => accepted.push(range),
            Err(e) => rejected.push(e),
        }
    }

    accepted.sort_unstable_by(|a, b| b.cmp(a));
    let regions = merge_descending(accepted);

    let mut pieces: Vec<&str> = Vec::with_capacity(regions.len() * 2 + 1);
    let mut removed = Vec::with_capacity(regions.len());
    let mut tail = text.len();

    for &(start, end) in &regions {
        let (start_byte, end_byte) = (boundaries[start], boundaries[end]);
        pieces.push(&text[end_byte..tail]);
        pieces.push(placeholder);
        removed.push(RemovedName {
            start,
            end,
            original: text[start_byte..end_byte].to_string(),
        });
        tail = start_byte;
    }
    pieces.push(&text[..tail]);

    pieces.reverse();
    removed.reverse();

    Redaction {
        text: pieces.concat(),
        removed,
        rejected,
    }
}

/// Fold spans sorted by descending `(start, end)` into non-overlapping
/// regions, still descending.
fn merge_descending(spans: Vec<(usize, usize)>) -> Vec<(usize, usize)> {
    let mut regions: Vec<(usize, usize)> = Vec::with_capacity(spans.len());

    for (start, end) in spans {
        match regions.last_mut() {
            Some(last) if end > last.0 => {
                tracing::debug!(
                    start,
                    end,
                    region_start = last.0,
                    region_end = last.1,
                    "Merging overlapping entity spans"
                );
                last.0 = start;
                last.1 = last.1.max(end);
            }
            _ => regions.push((start, end)),
        }
    }

    regions
}
