//! Conflict predicate between offerings and the conflict graph used by
//! heuristics that need conflict degrees.

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};

use crate::model::Offering;

/// Returns true if `candidate` overlaps any offering already in `chosen`.
pub fn conflicts_with_any(chosen: &[&Offering], candidate: &Offering) -> bool {
    chosen.iter().any(|existing| existing.overlaps(candidate))
}

/// Returns true if no offering of `left` overlaps any offering of `right`.
pub fn compatible(left: &[&Offering], right: &[&Offering]) -> bool {
    left.iter().all(|l| !conflicts_with_any(right, l))
}

/// Undirected graph whose nodes are candidate offerings and whose edges join
/// every pair of offerings that overlap.
///
/// Offerings are identified by id, so ids must be unique within a catalog.
/// An offering listed in several slots (a subject requested twice) becomes a
/// single node.
#[derive(Debug, Clone)]
pub struct ConflictGraph<'a> {
    graph: UnGraph<&'a Offering, ()>,
    index: HashMap<&'a str, NodeIndex>,
}

impl<'a> ConflictGraph<'a> {
    /// Builds the graph over every candidate of every slot.
    pub fn build(slots: &[Vec<&'a Offering>]) -> Self {
        let mut graph = UnGraph::default();
        let mut index = HashMap::new();

        for &offering in slots.iter().flatten() {
            index
                .entry(offering.id())
                .or_insert_with(|| graph.add_node(offering));
        }

        let nodes: Vec<NodeIndex> = graph.node_indices().collect();
        for (i, &a) in nodes.iter().enumerate() {
            for &b in &nodes[i + 1..] {
                if graph[a].overlaps(graph[b]) {
                    graph.add_edge(a, b, ());
                }
            }
        }

        Self { graph, index }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns true if both offerings are in the graph and overlap.
    pub fn conflicts(&self, a: &Offering, b: &Offering) -> bool {
        match (self.index.get(a.id()), self.index.get(b.id())) {
            (Some(&na), Some(&nb)) => self.graph.find_edge(na, nb).is_some(),
            _ => false,
        }
    }

    /// Counts the offerings of *other* subjects that `offering` overlaps.
    ///
    /// Each neighbour is weighted by how many times its subject appears in
    /// the request (`subject_weights`), so a subject requested twice counts
    /// its conflicts twice.
    pub fn potential_conflicts(
        &self,
        offering: &Offering,
        subject_weights: &HashMap<&str, usize>,
    ) -> usize {
        let Some(&node) = self.index.get(offering.id()) else {
            return 0;
        };
        self.graph
            .neighbors(node)
            .map(|n| self.graph[n])
            .filter(|other| other.subject() != offering.subject())
            .map(|other| subject_weights.get(other.subject()).copied().unwrap_or(0))
            .sum()
    }
}
