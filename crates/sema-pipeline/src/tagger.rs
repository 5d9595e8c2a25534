//! Rule-based part-of-speech tagging
//!
//! A lightweight default tagger: a closed-class lexicon for common verbs
//! and adverbs, then suffix patterns, then the noun fallback. Fine-grained
//! accuracy matters less than it seems here; the disambiguation engine only
//! consumes the coarse POS class, and unknown tags degrade to nouns.

use std::collections::HashMap;

use regex::Regex;

use crate::Tagger;
use sema_core::TaggedTerm;

/// Suffix- and lexicon-driven tagger emitting Penn-style tags
pub struct RuleTagger {
    /// Suffix patterns, first match wins
    patterns: Vec<(Regex, &'static str)>,
    /// Exact-match lexicon for closed-class and irregular words
    lexicon: HashMap<&'static str, &'static str>,
}

impl RuleTagger {
    pub fn new() -> Self {
        let mut tagger = Self {
            patterns: Vec::new(),
            lexicon: HashMap::new(),
        };

        tagger.init_patterns();
        tagger.init_lexicon();
        tagger
    }

    fn init_patterns(&mut self) {
        self.add_pattern(r"(?i)ly$", "RB");
        self.add_pattern(r"(?i)(ing|ed|ize|ise|ify)$", "VB");
        self.add_pattern(r"(?i)(ful|ous|ive|able|ible|ish|less|ic|al)$", "JJ");
        self.add_pattern(r"(?i)(tion|ment|ness|ity|ship|ance|ence|er|or|ist)$", "NN");
    }

    fn init_lexicon(&mut self) {
        for word in [
            "be", "is", "are", "was", "were", "been", "am", "do", "does", "did", "have", "has",
            "had", "go", "goes", "went", "make", "made", "take", "took", "run", "ran", "say",
            "said", "get", "got", "see", "saw", "know", "knew", "use", "show", "find",
        ] {
            self.lexicon.insert(word, "VB");
        }

        for word in ["not", "very", "also", "often", "never", "always", "again", "here", "there"] {
            self.lexicon.insert(word, "RB");
        }

        for word in ["good", "new", "first", "last", "long", "great", "little", "own", "old", "high", "big", "deep"] {
            self.lexicon.insert(word, "JJ");
        }
    }

    fn add_pattern(&mut self, pattern: &str, tag: &'static str) {
        // Patterns are static and known-valid.
        if let Ok(regex) = Regex::new(pattern) {
            self.patterns.push((regex, tag));
        }
    }

    /// Tag a single token
    pub fn tag_token(&self, token: &str) -> &'static str {
        let lower = token.to_lowercase();
        if let Some(tag) = self.lexicon.get(lower.as_str()) {
            return tag;
        }

        for (regex, tag) in &self.patterns {
            if regex.is_match(token) {
                return tag;
            }
        }

        "NN"
    }
}

impl Default for RuleTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl Tagger for RuleTagger {
    fn tag(&self, tokens: &[String]) -> Vec<TaggedTerm> {
        let tagged: Vec<TaggedTerm> = tokens
            .iter()
            .map(|token| TaggedTerm::new(token.clone(), self.tag_token(token)))
            .collect();

        tracing::debug!(terms = tagged.len(), "tagged token stream");
        tagged
    }
}
