//! Taxonomy file loader
//!
//! Reads a taxonomy from a JSON array of synset records:
//!
//! ```json
//! [
//!   { "id": "bank.n.01", "pos": "noun", "lemmas": ["bank"],
//!     "hypernyms": ["institution.n.01"], "gloss": "a financial institution" }
//! ]
//! ```
//!
//! Record order in the file is preserved as sense enumeration order.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::graph::LexicalTaxonomy;
use sema_core::{PosClass, Result, SemaError};

/// One synset entry in a taxonomy file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynsetRecord {
    /// Unique synset id (e.g. "bank.n.01")
    pub id: String,

    /// POS class of this synset
    pub pos: PosClass,

    /// Surface forms naming this synset
    pub lemmas: Vec<String>,

    /// Hypernym synset ids
    #[serde(default)]
    pub hypernyms: Vec<String>,

    /// Optional human-readable definition
    #[serde(default)]
    pub gloss: Option<String>,
}

/// Load a taxonomy from a JSON file
pub fn load_taxonomy(path: impl AsRef<Path>) -> Result<LexicalTaxonomy> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;

    let records: Vec<SynsetRecord> = serde_json::from_str(&content).map_err(|e| {
        SemaError::ParseError(format!("{}: {}", path.display(), e))
    })?;

    tracing::info!(path = %path.display(), synsets = records.len(), "loading taxonomy");
    from_records(records)
}

/// Build a taxonomy from parsed records
pub fn from_records(records: Vec<SynsetRecord>) -> Result<LexicalTaxonomy> {
    let mut builder = LexicalTaxonomy::builder();
    for record in &records {
        let lemmas: Vec<&str> = record.lemmas.iter().map(String::as_str).collect();
        let hypernyms: Vec<&str> = record.hypernyms.iter().map(String::as_str).collect();
        builder = builder.synset(&record.id, record.pos, &lemmas, &hypernyms);
    }
    builder.build()
}
