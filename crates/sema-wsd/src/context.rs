//! Context window builder

use sema_core::TaggedTerm;

/// Surface forms surrounding `idx` within `radius` terms on each side.
///
/// Covers the half-open range `[max(0, idx - radius), min(len, idx + radius
/// + 1))` excluding `idx` itself. Windows near a sequence boundary are
/// truncated, never padded, so edge terms simply see fewer context terms.
/// Other occurrences of the target's surface form elsewhere in the window
/// are kept; only the target position is removed.
///
/// # Panics
///
/// Panics if `idx` is out of bounds for `terms`.
pub fn context_window(terms: &[TaggedTerm], idx: usize, radius: usize) -> Vec<&str> {
    assert!(idx < terms.len(), "context window index out of bounds");

    let start = idx.saturating_sub(radius);
    let end = (idx + radius + 1).min(terms.len());

    (start..end)
        .filter(|&i| i != idx)
        .map(|i| terms[i].surface.as_str())
        .collect()
}
