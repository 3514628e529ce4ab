use crate::core::models::graph::MolecularGraph;
use std::collections::HashMap;

/// A bidirectional mapping between graph atom indices and compact local
/// indices over an arbitrary atom subset, with a local adjacency view.
///
/// Traversals restricted to a polymer unit's atom list run over this index
/// instead of repeatedly scanning the membership list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubgraphIndex {
    to_local: HashMap<usize, usize>,
    to_graph: Vec<usize>,
}

impl SubgraphIndex {
    /// Builds the index over the given member atoms.
    ///
    /// Duplicate members are collapsed; local indices follow first
    /// occurrence order.
    ///
    /// # Arguments
    ///
    /// * `members` - Graph atom indices to include.
    pub fn new(members: &[usize]) -> Self {
        let mut to_local = HashMap::with_capacity(members.len());
        let mut to_graph = Vec::with_capacity(members.len());
        for &atom in members {
            if !to_local.contains_key(&atom) {
                to_local.insert(atom, to_graph.len());
                to_graph.push(atom);
            }
        }
        Self { to_local, to_graph }
    }

    /// The local index of a graph atom, if it is a member.
    pub fn local(&self, graph_index: usize) -> Option<usize> {
        self.to_local.get(&graph_index).copied()
    }

    /// The graph index behind a local index.
    pub fn graph(&self, local_index: usize) -> Option<usize> {
        self.to_graph.get(local_index).copied()
    }

    /// True if the graph atom is a member of the subset.
    pub fn contains(&self, graph_index: usize) -> bool {
        self.to_local.contains_key(&graph_index)
    }

    /// Number of member atoms.
    pub fn len(&self) -> usize {
        self.to_graph.len()
    }

    /// True if the subset is empty.
    pub fn is_empty(&self) -> bool {
        self.to_graph.is_empty()
    }

    /// Local adjacency view: the member neighbors of a member atom, as
    /// local indices.
    pub fn local_neighbors<'a>(
        &'a self,
        graph: &'a MolecularGraph,
        local_index: usize,
    ) -> impl Iterator<Item = usize> + 'a {
        self.graph(local_index)
            .into_iter()
            .flat_map(move |g| graph.neighbors(g))
            .filter_map(move |n| self.local(n))
    }
}
