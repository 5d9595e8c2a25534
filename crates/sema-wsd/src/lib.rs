//! Sema WSD - Context-window word-sense disambiguation
//!
//! Given a sequence of part-of-speech-tagged terms, assigns each term the
//! single taxonomic sense that best fits its surrounding context:
//!
//! 1. A sliding window collects the neighboring surface forms of each term.
//! 2. Every candidate sense of the term is scored against the best-matching
//!    sense of every context term.
//! 3. The candidate with the strictly highest aggregate score wins; a zero
//!    score or an empty candidate set yields no sense.
//!
//! The engine is pure with respect to its inputs: the tagged-term sequence
//! and the `SenseInventory` backend are read-only, and each term's result is
//! independent of every other term's result. Diagnostics go through an
//! optional observer callback supplied by the caller, not a process-wide
//! logger.

pub mod context;
pub mod driver;
pub mod scorer;

pub use context::context_window;
pub use driver::{Disambiguator, WsdEvent};
