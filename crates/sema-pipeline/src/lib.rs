//! Sema Pipeline - Text processing ahead of disambiguation
//!
//! Turns raw document text into the tagged-term sequences the WSD engine
//! consumes: tokenization with stopword filtering, and a swappable
//! part-of-speech tagger with a rule-based default. Also provides ranked
//! retrieval metrics for evaluating downstream search quality.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sema_core::{DisambiguationResult, TaggedTerm};

pub mod metrics;
pub mod tagger;
pub mod tokenize;

pub use tagger::RuleTagger;
pub use tokenize::SimpleTokenizer;

/// A processed document ready for indexing or enrichment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedDocument {
    /// Unique identifier
    pub id: Uuid,

    /// Document title
    pub title: String,

    /// Normalized tokens in document order
    pub tokens: Vec<String>,

    /// Original text
    pub raw_text: String,

    /// Per-token sense assignments, if disambiguation ran
    pub disambiguated: Option<Vec<DisambiguationResult>>,
}

impl ProcessedDocument {
    /// Create a processed document from its title, tokens, and source text
    pub fn new(
        title: impl Into<String>,
        tokens: Vec<String>,
        raw_text: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            tokens,
            raw_text: raw_text.into(),
            disambiguated: None,
        }
    }
}

/// Trait for text processors producing normalized token streams
pub trait TextProcessor: Send + Sync {
    fn process_text(&self, text: &str) -> Vec<String>;
}

/// Trait for part-of-speech taggers.
///
/// The WSD engine only sees the produced `TaggedTerm` sequence, so any
/// tagger (rule-based, statistical, remote) can stand behind this trait.
pub trait Tagger: Send + Sync {
    fn tag(&self, tokens: &[String]) -> Vec<TaggedTerm>;
}
