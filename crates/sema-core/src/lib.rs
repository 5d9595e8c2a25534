//! Sema Core - Domain models, traits, and shared types
//!
//! This crate defines the core abstractions used throughout the sema system:
//! - Tagged terms and part-of-speech classes
//! - Sense identifiers and the tri-state similarity score
//! - The `SenseInventory` trait implemented by taxonomy backends
//! - Common error types
//! - Configuration management

pub mod config;

pub use config::{
    AppConfig, ConfigError, LoggingConfig, PipelineConfig, TaxonomyConfig, WsdConfig,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Core error types for sema operations
#[derive(Error, Debug)]
pub enum SemaError {
    #[error("Taxonomy error: {0}")]
    TaxonomyError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, SemaError>;

// ============================================================================
// Tagged Terms and Part-of-Speech Classes
// ============================================================================

/// A surface form paired with the fine-grained tag the tagger assigned to it.
///
/// Position within a document is significant: the disambiguation engine uses
/// neighboring terms as evidence, so sequences of tagged terms must stay in
/// document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedTerm {
    /// The term as it appears in the document (post-tokenization)
    pub surface: String,

    /// Fine-grained tag, Penn Treebank style (e.g. "NN", "VBZ", "JJ")
    pub tag: String,
}

impl TaggedTerm {
    /// Create a new tagged term
    pub fn new(surface: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            tag: tag.into(),
        }
    }

    /// Coarse part-of-speech class for this term's tag
    pub fn pos_class(&self) -> PosClass {
        PosClass::from_tag(&self.tag)
    }
}

/// Coarse part-of-speech class used to scope sense lookups
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PosClass {
    Adjective,
    Verb,
    #[default]
    Noun,
    Adverb,
}

impl PosClass {
    /// Derive the class from a fine-grained tag.
    ///
    /// Only the first byte of the tag is significant: `J` maps to adjective,
    /// `V` to verb, `N` to noun, and `R` to adverb. Every other tag,
    /// including an empty one, falls back to `Noun`. The fallback is part of
    /// the contract: malformed tags never fail a run.
    pub fn from_tag(tag: &str) -> Self {
        match tag.as_bytes().first() {
            Some(b'J') => Self::Adjective,
            Some(b'V') => Self::Verb,
            Some(b'N') => Self::Noun,
            Some(b'R') => Self::Adverb,
            _ => Self::Noun,
        }
    }

    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Adjective => "adjective",
            Self::Verb => "verb",
            Self::Noun => "noun",
            Self::Adverb => "adverb",
        }
    }
}

impl std::fmt::Display for PosClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Senses and Similarity
// ============================================================================

/// Opaque identifier naming one node in the lexical taxonomy.
///
/// Sense identifiers are minted by the taxonomy backend and only ever read
/// and compared by the disambiguation engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SenseId(String);

impl SenseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SenseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SenseId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SenseId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Tri-state similarity between two senses.
///
/// `Undefined` is the taxonomy's explicit signal that two senses cannot be
/// meaningfully compared (disconnected subgraphs, unknown identifiers). It
/// is distinct from a score of zero and is excluded from aggregation rather
/// than coerced to `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Similarity {
    /// A defined relatedness score in `[0.0, 1.0]`
    Score(f64),
    /// The senses are not comparable
    Undefined,
}

impl Similarity {
    /// The score if defined, `None` otherwise
    pub fn defined(&self) -> Option<f64> {
        match self {
            Self::Score(s) => Some(*s),
            Self::Undefined => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }
}

/// The outcome of disambiguating a single term.
///
/// Output sequences always have the same length and order as the input
/// tagged-term sequence. `sense` is `None` for terms the engine could not
/// resolve: no candidate senses, or no positive contextual evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisambiguationResult {
    /// Surface form of the input term
    pub term: String,

    /// The selected sense, if any
    pub sense: Option<SenseId>,
}

// ============================================================================
// Traits
// ============================================================================

/// Query surface of a lexical taxonomy backend.
///
/// Implementations must be safe to share across worker threads for
/// concurrent read access; the taxonomy is never mutated during
/// disambiguation. Enumeration order of returned sense lists is meaningful:
/// the engine breaks scoring ties in favor of the first-listed candidate.
pub trait SenseInventory: Send + Sync {
    /// Candidate senses for a surface form restricted to one POS class
    fn candidate_senses(&self, surface: &str, pos: PosClass) -> Vec<SenseId>;

    /// All senses of a surface form across every POS class
    fn all_senses(&self, surface: &str) -> Vec<SenseId>;

    /// Graph-distance similarity between two senses.
    ///
    /// Structural faults (unknown ids, disconnected regions) surface as
    /// `Similarity::Undefined`, never as an error.
    fn similarity(&self, a: &SenseId, b: &SenseId) -> Similarity;

    /// Backend name for logging
    fn name(&self) -> &str;
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_class_from_tag() {
        assert_eq!(PosClass::from_tag("JJ"), PosClass::Adjective);
        assert_eq!(PosClass::from_tag("VBZ"), PosClass::Verb);
        assert_eq!(PosClass::from_tag("NNS"), PosClass::Noun);
        assert_eq!(PosClass::from_tag("RB"), PosClass::Adverb);
    }

    #[test]
    fn test_pos_class_fallback_is_noun() {
        assert_eq!(PosClass::from_tag("DT"), PosClass::Noun);
        assert_eq!(PosClass::from_tag("X"), PosClass::Noun);
        assert_eq!(PosClass::from_tag(""), PosClass::Noun);
    }

    #[test]
    fn test_tagged_term_pos_class() {
        let term = TaggedTerm::new("running", "VBG");
        assert_eq!(term.pos_class(), PosClass::Verb);
    }

    #[test]
    fn test_similarity_defined() {
        assert_eq!(Similarity::Score(0.5).defined(), Some(0.5));
        assert_eq!(Similarity::Undefined.defined(), None);
        assert!(Similarity::Undefined.is_undefined());
    }

    #[test]
    fn test_sense_id_round_trip() {
        let id = SenseId::from("bank.n.01");
        assert_eq!(id.as_str(), "bank.n.01");
        assert_eq!(id.to_string(), "bank.n.01");
    }
}
