//! Disambiguation driver
//!
//! Walks the tagged-term sequence and resolves each term against its
//! context window. Terms are independent of each other's results, so the
//! driver also offers a rayon-backed parallel walk that preserves input
//! order by collecting into an index-addressed vector.

use rayon::prelude::*;

use sema_core::{DisambiguationResult, SenseId, SenseInventory, TaggedTerm, WsdConfig};

use crate::context::context_window;
use crate::scorer::best_sense;

/// Per-term diagnostic event emitted through the driver's observer.
///
/// Informational only; consuming or ignoring events never changes results.
#[derive(Debug, Clone, PartialEq)]
pub enum WsdEvent {
    /// A sense was assigned with the given aggregate score
    Assigned {
        term: String,
        sense: SenseId,
        score: f64,
    },
    /// No candidate scored above zero, or the term had no candidates
    Unresolved { term: String },
}

/// Context-window disambiguation driver over a `SenseInventory` backend.
pub struct Disambiguator<'a> {
    inventory: &'a dyn SenseInventory,
    radius: usize,
    observer: Option<Box<dyn Fn(&WsdEvent) + Send + Sync + 'a>>,
}

impl<'a> Disambiguator<'a> {
    /// Create a driver with the default window radius (5)
    pub fn new(inventory: &'a dyn SenseInventory) -> Self {
        Self {
            inventory,
            radius: WsdConfig::default().window_radius,
            observer: None,
        }
    }

    /// Create a driver from configuration
    pub fn from_config(inventory: &'a dyn SenseInventory, config: &WsdConfig) -> Self {
        Self::new(inventory).with_radius(config.window_radius)
    }

    /// Set the context window radius
    pub fn with_radius(mut self, radius: usize) -> Self {
        self.radius = radius;
        self
    }

    /// Attach an observer receiving one event per disambiguated term
    pub fn with_observer(
        mut self,
        observer: impl Fn(&WsdEvent) + Send + Sync + 'a,
    ) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Disambiguate every term in order.
    ///
    /// The output has exactly the length and order of the input; terms are
    /// never dropped or reordered.
    pub fn disambiguate(&self, terms: &[TaggedTerm]) -> Vec<DisambiguationResult> {
        (0..terms.len())
            .map(|idx| self.disambiguate_at(terms, idx))
            .collect()
    }

    /// Disambiguate every term on the rayon thread pool.
    ///
    /// The taxonomy is shared read-only across workers and results are
    /// collected by index, so output order matches input order regardless
    /// of completion order. Produces the same results as `disambiguate`.
    pub fn disambiguate_parallel(&self, terms: &[TaggedTerm]) -> Vec<DisambiguationResult> {
        (0..terms.len())
            .into_par_iter()
            .map(|idx| self.disambiguate_at(terms, idx))
            .collect()
    }

    /// Resolve the single term at `idx` against its context window
    fn disambiguate_at(&self, terms: &[TaggedTerm], idx: usize) -> DisambiguationResult {
        let term = &terms[idx];
        let context = context_window(terms, idx, self.radius);

        let selected = best_sense(self.inventory, &term.surface, term.pos_class(), &context);

        if let Some(observer) = &self.observer {
            let event = match &selected {
                Some((sense, score)) => WsdEvent::Assigned {
                    term: term.surface.clone(),
                    sense: sense.clone(),
                    score: *score,
                },
                None => WsdEvent::Unresolved {
                    term: term.surface.clone(),
                },
            };
            observer(&event);
        }

        DisambiguationResult {
            term: term.surface.clone(),
            sense: selected.map(|(sense, _)| sense),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Inventory that relates every noun pair it knows at a fixed score.
    struct Flat;

    impl SenseInventory for Flat {
        fn candidate_senses(&self, surface: &str, _pos: sema_core::PosClass) -> Vec<SenseId> {
            match surface {
                "bank" => vec![SenseId::from("bank.n.01")],
                _ => vec![],
            }
        }

        fn all_senses(&self, surface: &str) -> Vec<SenseId> {
            match surface {
                "bank" => vec![SenseId::from("bank.n.01")],
                "money" => vec![SenseId::from("money.n.01")],
                _ => vec![],
            }
        }

        fn similarity(&self, _a: &SenseId, _b: &SenseId) -> sema_core::Similarity {
            sema_core::Similarity::Score(0.5)
        }

        fn name(&self) -> &str {
            "flat"
        }
    }

    #[test]
    fn test_single_term_document_is_unresolved() {
        let terms = vec![TaggedTerm::new("bank", "NN")];
        let results = Disambiguator::new(&Flat).disambiguate(&terms);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].term, "bank");
        assert_eq!(results[0].sense, None);
    }

    #[test]
    fn test_observer_sees_every_term() {
        let events: Mutex<Vec<WsdEvent>> = Mutex::new(Vec::new());
        let terms = vec![
            TaggedTerm::new("bank", "NN"),
            TaggedTerm::new("money", "NN"),
        ];

        let driver = Disambiguator::new(&Flat)
            .with_observer(|event| events.lock().unwrap().push(event.clone()));
        driver.disambiguate(&terms);
        drop(driver);

        let events = events.into_inner().unwrap();
        assert_eq!(events.len(), 2);
        assert!(matches!(
            events[0],
            WsdEvent::Assigned { ref term, .. } if term == "bank"
        ));
        // "money" has no candidates, only senses.
        assert!(matches!(
            events[1],
            WsdEvent::Unresolved { ref term } if term == "money"
        ));
    }

    #[test]
    fn test_from_config_uses_configured_radius() {
        let config = WsdConfig {
            window_radius: 1,
            parallel: false,
        };
        let terms = vec![
            TaggedTerm::new("bank", "NN"),
            TaggedTerm::new("x", "NN"),
            TaggedTerm::new("money", "NN"),
        ];

        // With radius 1 only "x" is visible to "bank", and "x" has no
        // senses, so the score stays zero.
        let results = Disambiguator::from_config(&Flat, &config).disambiguate(&terms);
        assert_eq!(results[0].sense, None);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let terms: Vec<TaggedTerm> = ["bank", "money", "bank", "x", "money", "bank"]
            .iter()
            .map(|w| TaggedTerm::new(*w, "NN"))
            .collect();

        let driver = Disambiguator::new(&Flat).with_radius(2);
        assert_eq!(
            driver.disambiguate(&terms),
            driver.disambiguate_parallel(&terms)
        );
    }
}
