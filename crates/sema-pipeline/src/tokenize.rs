//! Tokenization and normalization
//!
//! Keeps alphabetic tokens, lowercases them, and drops English stopwords.
//! Purely functional words carry no taxonomic senses, so removing them up
//! front saves the disambiguation engine pointless lookups.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::TextProcessor;
use sema_core::PipelineConfig;

static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "about", "above", "after", "again", "all", "an", "and", "any", "are", "as", "at",
        "be", "because", "been", "before", "being", "below", "between", "both", "but", "by",
        "can", "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from",
        "further", "had", "has", "have", "having", "he", "her", "here", "hers", "him", "his",
        "how", "i", "if", "in", "into", "is", "it", "its", "just", "me", "more", "most", "my",
        "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other", "our",
        "out", "over", "own", "same", "she", "should", "so", "some", "such", "than", "that",
        "the", "their", "them", "then", "there", "these", "they", "this", "those", "through",
        "to", "too", "under", "until", "up", "very", "was", "we", "were", "what", "when",
        "where", "which", "while", "who", "whom", "why", "will", "with", "you", "your",
    ]
    .into_iter()
    .collect()
});

/// Tokenizer keeping alphabetic, non-stopword tokens
pub struct SimpleTokenizer {
    min_token_len: usize,
    keep_stopwords: bool,
    lowercase: bool,
    extra_stopwords: HashSet<String>,
}

impl SimpleTokenizer {
    pub fn new() -> Self {
        Self::from_config(&PipelineConfig::default())
    }

    /// Create a tokenizer from pipeline configuration
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self {
            min_token_len: config.min_token_len,
            keep_stopwords: config.keep_stopwords,
            lowercase: config.lowercase,
            extra_stopwords: HashSet::new(),
        }
    }

    /// Add domain-specific stopwords on top of the built-in list
    pub fn with_extra_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_stopwords
            .extend(words.into_iter().map(|w| w.into().to_lowercase()));
        self
    }

    fn is_stopword(&self, token: &str) -> bool {
        let lower = token.to_lowercase();
        STOPWORDS.contains(lower.as_str()) || self.extra_stopwords.contains(&lower)
    }
}

impl Default for SimpleTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor for SimpleTokenizer {
    fn process_text(&self, text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphabetic())
            .filter(|token| token.chars().count() >= self.min_token_len)
            .filter(|token| self.keep_stopwords || !self.is_stopword(token))
            .map(|token| {
                if self.lowercase {
                    token.to_lowercase()
                } else {
                    token.to_string()
                }
            })
            .collect()
    }
}
