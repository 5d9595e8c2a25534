//! Synset graph and path similarity
//!
//! The taxonomy is an undirected view of the hypernym hierarchy: similarity
//! between two synsets is `1 / (1 + d)` where `d` is the shortest hop
//! distance between them. Synsets in disconnected components (typically
//! different part-of-speech hierarchies) are not comparable and report
//! `Similarity::Undefined`.

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};

use sema_core::{PosClass, Result, SemaError, SenseId, SenseInventory, Similarity};

/// In-memory lexical taxonomy backed by a petgraph synset graph
#[derive(Debug)]
pub struct LexicalTaxonomy {
    /// Hypernym/hyponym edges, traversed in both directions
    graph: UnGraph<String, ()>,

    /// Synset id -> graph node
    nodes: HashMap<String, NodeIndex>,

    /// (lowercased lemma, POS class) -> senses in insertion order
    by_lemma_pos: HashMap<(String, PosClass), Vec<SenseId>>,

    /// lowercased lemma -> senses across all POS classes, in insertion order
    by_lemma: HashMap<String, Vec<SenseId>>,
}

impl LexicalTaxonomy {
    /// Start building a taxonomy
    pub fn builder() -> TaxonomyBuilder {
        TaxonomyBuilder::default()
    }

    /// Number of synsets in the taxonomy
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether a synset id exists
    pub fn contains(&self, id: &SenseId) -> bool {
        self.nodes.contains_key(id.as_str())
    }

    /// Shortest hop distance between two synsets, if connected
    fn hop_distance(&self, a: NodeIndex, b: NodeIndex) -> Option<usize> {
        if a == b {
            return Some(0);
        }

        // Plain BFS; the graph is unweighted.
        let mut dist: HashMap<NodeIndex, usize> = HashMap::new();
        let mut queue = std::collections::VecDeque::new();
        dist.insert(a, 0);
        queue.push_back(a);

        while let Some(node) = queue.pop_front() {
            let d = dist[&node];
            for next in self.graph.neighbors(node) {
                if !dist.contains_key(&next) {
                    if next == b {
                        return Some(d + 1);
                    }
                    dist.insert(next, d + 1);
                    queue.push_back(next);
                }
            }
        }

        None
    }
}

impl SenseInventory for LexicalTaxonomy {
    fn candidate_senses(&self, surface: &str, pos: PosClass) -> Vec<SenseId> {
        self.by_lemma_pos
            .get(&(surface.to_lowercase(), pos))
            .cloned()
            .unwrap_or_default()
    }

    fn all_senses(&self, surface: &str) -> Vec<SenseId> {
        self.by_lemma
            .get(&surface.to_lowercase())
            .cloned()
            .unwrap_or_default()
    }

    fn similarity(&self, a: &SenseId, b: &SenseId) -> Similarity {
        let (Some(&na), Some(&nb)) = (self.nodes.get(a.as_str()), self.nodes.get(b.as_str()))
        else {
            return Similarity::Undefined;
        };

        match self.hop_distance(na, nb) {
            Some(d) => Similarity::Score(1.0 / (1.0 + d as f64)),
            None => Similarity::Undefined,
        }
    }

    fn name(&self) -> &str {
        "in-memory"
    }
}

/// Builder collecting synsets before wiring hypernym edges.
///
/// Edges can only be validated once every synset is known, so the builder
/// records raw hypernym id lists and resolves them in `build`.
#[derive(Default)]
pub struct TaxonomyBuilder {
    synsets: Vec<PendingSynset>,
}

struct PendingSynset {
    id: String,
    pos: PosClass,
    lemmas: Vec<String>,
    hypernyms: Vec<String>,
}

impl TaxonomyBuilder {
    /// Add a synset with its lemmas and hypernym synset ids
    pub fn synset(
        mut self,
        id: impl Into<String>,
        pos: PosClass,
        lemmas: &[&str],
        hypernyms: &[&str],
    ) -> Self {
        self.synsets.push(PendingSynset {
            id: id.into(),
            pos,
            lemmas: lemmas.iter().map(|s| s.to_string()).collect(),
            hypernyms: hypernyms.iter().map(|s| s.to_string()).collect(),
        });
        self
    }

    /// Resolve edges and produce the taxonomy.
    ///
    /// Fails on duplicate synset ids and on hypernym references to unknown
    /// synsets. Lemma index order follows synset insertion order, which is
    /// the enumeration order the disambiguation engine uses for tie-breaks.
    pub fn build(self) -> Result<LexicalTaxonomy> {
        let mut graph = UnGraph::new_undirected();
        let mut nodes: HashMap<String, NodeIndex> = HashMap::new();
        let mut by_lemma_pos: HashMap<(String, PosClass), Vec<SenseId>> = HashMap::new();
        let mut by_lemma: HashMap<String, Vec<SenseId>> = HashMap::new();

        for synset in &self.synsets {
            if nodes.contains_key(&synset.id) {
                return Err(SemaError::ValidationError(format!(
                    "duplicate synset id: {}",
                    synset.id
                )));
            }
            let node = graph.add_node(synset.id.clone());
            nodes.insert(synset.id.clone(), node);

            let sense = SenseId::new(&synset.id);
            for lemma in &synset.lemmas {
                let lemma = lemma.to_lowercase();
                by_lemma_pos
                    .entry((lemma.clone(), synset.pos))
                    .or_default()
                    .push(sense.clone());
                by_lemma.entry(lemma).or_default().push(sense.clone());
            }
        }

        for synset in &self.synsets {
            let child = nodes[&synset.id];
            for hypernym in &synset.hypernyms {
                let Some(&parent) = nodes.get(hypernym) else {
                    return Err(SemaError::ValidationError(format!(
                        "synset {} references unknown hypernym {}",
                        synset.id, hypernym
                    )));
                };
                graph.add_edge(child, parent, ());
            }
        }

        tracing::debug!(
            synsets = nodes.len(),
            lemmas = by_lemma.len(),
            "taxonomy built"
        );

        Ok(LexicalTaxonomy {
            graph,
            nodes,
            by_lemma_pos,
            by_lemma,
        })
    }
}
