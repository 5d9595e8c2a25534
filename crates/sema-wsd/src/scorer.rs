//! Sense scoring and selection
//!
//! Each candidate sense of the target term is scored by summing, over every
//! context term, the maximum defined similarity between the candidate and
//! any sense of that context term. Context terms are deliberately not
//! POS-restricted: their own tags may be noisy, and the topically relevant
//! sense need not match their grammatical role.

use sema_core::{PosClass, SenseId, SenseInventory, Similarity};

/// Select the best sense for `surface` given its POS class and context.
///
/// Returns the winning sense and its aggregate score, or `None` when the
/// term has no candidate senses or no candidate scores above zero. With no
/// candidates the taxonomy is never asked for a single similarity. Ties go
/// to the candidate the taxonomy enumerated first.
pub fn best_sense(
    inventory: &dyn SenseInventory,
    surface: &str,
    pos: PosClass,
    context: &[&str],
) -> Option<(SenseId, f64)> {
    let candidates = inventory.candidate_senses(surface, pos);
    if candidates.is_empty() {
        return None;
    }

    let mut best: Option<SenseId> = None;
    let mut best_score = 0.0;

    for candidate in candidates {
        let score = context_score(inventory, &candidate, context);
        // Strictly greater: on a tie the first-enumerated candidate stays,
        // and a total of zero never selects anything.
        if score > best_score {
            best_score = score;
            best = Some(candidate);
        }
    }

    best.map(|sense| (sense, best_score))
}

/// Aggregate similarity of one candidate sense against the context.
///
/// A context term whose every comparison is undefined, or that has no known
/// senses at all, contributes exactly zero. Undefined similarities are
/// missing data points, not zeros: they are dropped from the per-term
/// maximum rather than participating in it.
fn context_score(inventory: &dyn SenseInventory, candidate: &SenseId, context: &[&str]) -> f64 {
    context
        .iter()
        .map(|term| {
            inventory
                .all_senses(term)
                .iter()
                .filter_map(|sense| inventory.similarity(candidate, sense).defined())
                .fold(0.0, f64::max)
        })
        .sum()
}
