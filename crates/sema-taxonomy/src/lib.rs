//! Sema Taxonomy - Lexical knowledge base backend
//!
//! Provides an in-memory taxonomy of synsets connected by hypernym
//! relations, with graph-distance path similarity. Implements the
//! `SenseInventory` trait from `sema-core`; any other backend (embedded
//! database, remote service) can stand in behind the same trait.

pub mod graph;
pub mod loader;

pub use graph::{LexicalTaxonomy, TaxonomyBuilder};
pub use loader::{load_taxonomy, SynsetRecord};
