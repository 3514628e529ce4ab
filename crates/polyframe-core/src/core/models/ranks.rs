use super::graph::MolecularGraph;
use super::rings::RingSystems;
use crate::core::chem::elements;

/// Immutable per-atom seniority data, computed once per analysis and
/// consumed read-only by the seniority ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AtomRank {
    /// Seniority rank of the atom's element.
    pub element_rank: u32,
    /// True if the atom lies in a ring.
    pub in_ring: bool,
    /// Size of the smallest ring through the atom, 0 for chain atoms.
    pub ring_size: usize,
    /// Highest element rank found in the atom's fused ring system, 0 for
    /// chain atoms.
    pub senior_ring_rank: u32,
    /// True if the element is neither carbon nor hydrogen.
    pub heteroatom: bool,
}

/// The per-atom rank table for one analysis pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AtomRankTable {
    ranks: Vec<AtomRank>,
}

impl AtomRankTable {
    /// Computes the table from the whole graph and its ring assignment.
    ///
    /// # Arguments
    ///
    /// * `graph` - The molecular graph.
    /// * `rings` - Externally supplied ring-system assignment.
    pub fn compute(graph: &MolecularGraph, rings: &RingSystems) -> Self {
        // Senior element rank per ring system, over all member atoms.
        let mut system_senior: std::collections::HashMap<usize, u32> =
            std::collections::HashMap::new();
        for (index, atom) in graph.atoms_iter() {
            if let Some(system) = rings.system_of(index) {
                let rank = elements::seniority_rank(&atom.element);
                let entry = system_senior.entry(system).or_insert(0);
                *entry = (*entry).max(rank);
            }
        }
        let ranks = graph
            .atoms_iter()
            .map(|(index, atom)| {
                let in_ring = rings.in_ring(index);
                AtomRank {
                    element_rank: elements::seniority_rank(&atom.element),
                    in_ring,
                    ring_size: rings.ring_size(index),
                    senior_ring_rank: rings
                        .system_of(index)
                        .and_then(|s| system_senior.get(&s).copied())
                        .unwrap_or(0),
                    heteroatom: atom.is_heteroatom(),
                }
            })
            .collect();
        Self { ranks }
    }

    /// The rank tuple of an atom; a default (chain carbon-like) rank for an
    /// out-of-range index.
    pub fn rank(&self, atom: usize) -> AtomRank {
        self.ranks.get(atom).copied().unwrap_or_default()
    }

    /// Number of atoms covered.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// True if the table covers no atoms.
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::bond::BondOrder;
    use nalgebra::Point3;

    /// A five-membered N-containing ring (0..=4) with a chain carbon (5).
    fn hetero_ring_graph() -> (MolecularGraph, RingSystems) {
        let mut g = MolecularGraph::new();
        for e in ["N", "C", "C", "C", "C", "C"] {
            g.add_atom(e, Point3::origin());
        }
        for (a, b) in [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0), (2, 5)] {
            g.add_bond(a, b, BondOrder::Single).unwrap();
        }
        let mut rings = RingSystems::new(6);
        for atom in 0..5 {
            rings.assign(atom, 1, 5);
        }
        (g, rings)
    }

    #[test]
    fn ring_atoms_carry_the_system_senior_rank() {
        let (g, rings) = hetero_ring_graph();
        let table = AtomRankTable::compute(&g, &rings);
        let nitrogen_rank = crate::core::chem::elements::seniority_rank("N");
        // every ring member sees nitrogen as the system's senior element
        for atom in 0..5 {
            assert_eq!(table.rank(atom).senior_ring_rank, nitrogen_rank);
            assert!(table.rank(atom).in_ring);
            assert_eq!(table.rank(atom).ring_size, 5);
        }
    }

    #[test]
    fn chain_atoms_have_no_ring_data() {
        let (g, rings) = hetero_ring_graph();
        let table = AtomRankTable::compute(&g, &rings);
        let chain = table.rank(5);
        assert!(!chain.in_ring);
        assert_eq!(chain.ring_size, 0);
        assert_eq!(chain.senior_ring_rank, 0);
        assert!(!chain.heteroatom);
    }

    #[test]
    fn out_of_range_rank_is_default() {
        let (g, rings) = hetero_ring_graph();
        let table = AtomRankTable::compute(&g, &rings);
        assert_eq!(table.rank(99), AtomRank::default());
    }
}
