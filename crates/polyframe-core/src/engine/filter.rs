use crate::core::models::bond::BondOrder;
use crate::core::models::graph::MolecularGraph;
use crate::core::models::rings::RingSystems;

/// Filters a candidate backbone-bond list down to the frame-shiftable bonds.
///
/// A bond is removed when both endpoints share a fused ring system, when its
/// order is not exactly single, or when the external normalizer marked it
/// tautomeric. Candidates without an actual bond in the graph are removed
/// as well.
///
/// If everything is filtered away the caller falls back to treating the
/// direct end1-end2 bond as the sole frame-shift bond; that policy lives at
/// the call site, not here.
///
/// # Arguments
///
/// * `graph` - The molecular graph.
/// * `rings` - Externally supplied ring-system assignment.
/// * `candidates` - Candidate bonds as endpoint pairs.
///
/// # Return
///
/// The surviving candidates, in input order.
pub fn filter_frame_shiftable(
    graph: &MolecularGraph,
    rings: &RingSystems,
    candidates: &[(usize, usize)],
) -> Vec<(usize, usize)> {
    candidates
        .iter()
        .copied()
        .filter(|&(a, b)| {
            let Some(record) = graph.bond_between(a, b) else {
                return false;
            };
            if rings.same_system(a, b) {
                return false;
            }
            record.order == BondOrder::Single && !record.tautomeric
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    /// chain 0-1-2-3 plus a ring 1-2-4 (so bond (1,2) is ring-internal).
    fn graph_with_ring() -> (MolecularGraph, RingSystems) {
        let mut g = MolecularGraph::new();
        for _ in 0..5 {
            g.add_atom("C", Point3::origin());
        }
        for (a, b) in [(0, 1), (1, 2), (2, 3), (1, 4), (4, 2)] {
            g.add_bond(a, b, BondOrder::Single).unwrap();
        }
        let mut rings = RingSystems::new(5);
        for atom in [1, 2, 4] {
            rings.assign(atom, 1, 3);
        }
        (g, rings)
    }

    #[test]
    fn ring_internal_bonds_are_removed() {
        let (g, rings) = graph_with_ring();
        let kept = filter_frame_shiftable(&g, &rings, &[(0, 1), (1, 2), (2, 3)]);
        assert_eq!(kept, vec![(0, 1), (2, 3)]);
    }

    #[test]
    fn non_single_bonds_are_removed() {
        let (mut g, rings) = graph_with_ring();
        g.set_bond_order(2, 3, BondOrder::Double).unwrap();
        let kept = filter_frame_shiftable(&g, &rings, &[(0, 1), (2, 3)]);
        assert_eq!(kept, vec![(0, 1)]);
    }

    #[test]
    fn tautomeric_bonds_are_removed() {
        let (mut g, rings) = graph_with_ring();
        g.set_bond_tautomeric(0, 1, true).unwrap();
        let kept = filter_frame_shiftable(&g, &rings, &[(0, 1), (2, 3)]);
        assert_eq!(kept, vec![(2, 3)]);
    }

    #[test]
    fn missing_bonds_are_removed() {
        let (g, rings) = graph_with_ring();
        let kept = filter_frame_shiftable(&g, &rings, &[(0, 3), (2, 3)]);
        assert_eq!(kept, vec![(2, 3)]);
    }

    #[test]
    fn ring_atoms_in_different_systems_still_qualify() {
        let (g, mut rings) = graph_with_ring();
        // pretend 0 is in another ring system than 1
        rings.assign(0, 2, 5);
        let kept = filter_frame_shiftable(&g, &rings, &[(0, 1)]);
        assert_eq!(kept, vec![(0, 1)]);
    }
}
