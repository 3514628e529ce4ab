use crate::core::models::ranks::{AtomRank, AtomRankTable};
use std::cmp::Ordering;

/// Top-level seniority class of an atom. Higher is more senior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SeniorityClass {
    PlainChain,
    CarbocyclicRing,
    HeteroChain,
    HeteroRing,
}

/// Classifies an atom by its rank tuple.
pub fn classify(rank: &AtomRank) -> SeniorityClass {
    // a ring containing any heteroatom makes all its members heterocyclic
    let hetero_ring = rank.in_ring && rank.senior_ring_rank > 1;
    match (rank.in_ring, hetero_ring, rank.heteroatom) {
        (true, true, _) => SeniorityClass::HeteroRing,
        (true, false, _) => SeniorityClass::CarbocyclicRing,
        (false, _, true) => SeniorityClass::HeteroChain,
        (false, _, false) => SeniorityClass::PlainChain,
    }
}

/// Compares two atoms by seniority.
///
/// Heterocyclic-ring atoms beat heteroatom chain atoms, which beat
/// carbocyclic-ring atoms, which beat plain chain atoms. Ties within a class
/// break on (senior-ring element rank, ring size) for ring atoms or element
/// rank for chain atoms; a final tie breaks on the lower atom index, so the
/// comparator is a strict total order and never reports equality for two
/// distinct atoms.
///
/// # Return
///
/// `Ordering::Less` when `a` is senior to `b`, so sorting ascending places
/// the most senior atom first.
pub fn compare_atoms(a: usize, b: usize, ranks: &AtomRankTable) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    let ra = ranks.rank(a);
    let rb = ranks.rank(b);
    let class_a = classify(&ra);
    let class_b = classify(&rb);
    // senior first: compare descending on class
    class_b
        .cmp(&class_a)
        .then_with(|| match class_a {
            SeniorityClass::HeteroRing | SeniorityClass::CarbocyclicRing => rb
                .senior_ring_rank
                .cmp(&ra.senior_ring_rank)
                .then(ra.ring_size.cmp(&rb.ring_size)),
            SeniorityClass::HeteroChain | SeniorityClass::PlainChain => {
                rb.element_rank.cmp(&ra.element_rank)
            }
        })
        .then(a.cmp(&b))
}

/// Orients a bond senior endpoint first.
pub fn orient_senior_first(bond: (usize, usize), ranks: &AtomRankTable) -> (usize, usize) {
    match compare_atoms(bond.0, bond.1, ranks) {
        Ordering::Greater => (bond.1, bond.0),
        _ => bond,
    }
}

/// Compares two bonds by the seniority of their endpoints.
///
/// Each bond is judged by its senior endpoint first, then its junior one,
/// with the same atom comparator throughout.
///
/// # Return
///
/// `Ordering::Less` when `b1` is senior to `b2`.
pub fn compare_bonds(b1: (usize, usize), b2: (usize, usize), ranks: &AtomRankTable) -> Ordering {
    let (s1, j1) = orient_senior_first(b1, ranks);
    let (s2, j2) = orient_senior_first(b2, ranks);
    compare_atoms(s1, s2, ranks).then_with(|| compare_atoms(j1, j2, ranks))
}

/// Sorts candidate crossing bonds into their canonical order.
///
/// The senior bond lands in slot 0, oriented senior atom first; the rest are
/// kept sorted ascending by (first, second) atom number, matching the
/// ordering contract of the printed candidate list.
///
/// # Return
///
/// The senior bond, or `None` for an empty candidate list.
pub fn sort_backbone_bonds(
    bonds: &mut Vec<(usize, usize)>,
    ranks: &AtomRankTable,
) -> Option<(usize, usize)> {
    if bonds.is_empty() {
        return None;
    }
    for bond in bonds.iter_mut() {
        let (a, b) = *bond;
        *bond = (a.min(b), a.max(b));
    }
    bonds.sort_unstable();
    let senior_pos = (0..bonds.len())
        .min_by(|&i, &j| compare_bonds(bonds[i], bonds[j], ranks))
        .expect("nonempty candidate list");
    let senior = orient_senior_first(bonds[senior_pos], ranks);
    bonds.remove(senior_pos);
    bonds.insert(0, senior);
    Some(senior)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::bond::BondOrder;
    use crate::core::models::graph::MolecularGraph;
    use crate::core::models::rings::RingSystems;
    use nalgebra::Point3;

    /// Atoms in distinct seniority situations:
    /// 0: chain C, 1: chain N, 2: carbocyclic ring C (ring A, size 6),
    /// 3: heterocyclic ring C (ring B with an O, size 5), 4: ring B's O.
    fn mixed_graph() -> (MolecularGraph, AtomRankTable) {
        let mut g = MolecularGraph::new();
        for e in ["C", "N", "C", "C", "O"] {
            g.add_atom(e, Point3::origin());
        }
        g.add_bond(3, 4, BondOrder::Single).unwrap();
        let mut rings = RingSystems::new(5);
        rings.assign(2, 1, 6);
        rings.assign(3, 2, 5);
        rings.assign(4, 2, 5);
        let table = AtomRankTable::compute(&g, &rings);
        (g, table)
    }

    #[test]
    fn class_order_is_hetero_ring_hetero_chain_carbo_ring_plain_chain() {
        assert!(SeniorityClass::HeteroRing > SeniorityClass::HeteroChain);
        assert!(SeniorityClass::HeteroChain > SeniorityClass::CarbocyclicRing);
        assert!(SeniorityClass::CarbocyclicRing > SeniorityClass::PlainChain);
    }

    #[test]
    fn classify_uses_ring_composition_not_own_element() {
        let (_, table) = mixed_graph();
        // carbon inside the O-containing ring counts as heterocyclic
        assert_eq!(classify(&table.rank(3)), SeniorityClass::HeteroRing);
        assert_eq!(classify(&table.rank(2)), SeniorityClass::CarbocyclicRing);
        assert_eq!(classify(&table.rank(1)), SeniorityClass::HeteroChain);
        assert_eq!(classify(&table.rank(0)), SeniorityClass::PlainChain);
    }

    #[test]
    fn compare_atoms_is_a_strict_total_order() {
        let (_, table) = mixed_graph();
        // heterocyclic ring atom beats everything else
        for other in [0, 1, 2] {
            assert_eq!(compare_atoms(3, other, &table), Ordering::Less);
            assert_eq!(compare_atoms(other, 3, &table), Ordering::Greater);
        }
        // equal ranks (two atoms of ring B) break on index, never tie
        assert_eq!(compare_atoms(3, 4, &table), Ordering::Less);
        assert_eq!(compare_atoms(4, 3, &table), Ordering::Greater);
        assert_eq!(compare_atoms(2, 2, &table), Ordering::Equal);
    }

    #[test]
    fn hetero_ring_bond_beats_carbo_ring_bond_regardless_of_numbers() {
        let (_, table) = mixed_graph();
        // bond1 = (heterocyclic ring atom 3, chain atom 0)
        // bond2 = (carbocyclic ring atom 2, chain atom 1)
        let b1 = (0, 3);
        let b2 = (1, 2);
        assert_eq!(compare_bonds(b1, b2, &table), Ordering::Less);
        assert_eq!(compare_bonds(b2, b1, &table), Ordering::Greater);
    }

    #[test]
    fn sort_backbone_bonds_puts_senior_bond_first_senior_atom_first() {
        let (_, table) = mixed_graph();
        let mut bonds = vec![(1, 0), (0, 3), (2, 1)];
        let senior = sort_backbone_bonds(&mut bonds, &table).unwrap();
        // senior bond involves the heterocyclic ring atom, oriented with it
        // in front
        assert_eq!(senior, (3, 0));
        assert_eq!(bonds[0], (3, 0));
        // the rest are in ascending pair order
        assert_eq!(&bonds[1..], &[(0, 1), (1, 2)]);
    }

    #[test]
    fn sort_backbone_bonds_handles_empty_list() {
        let (_, table) = mixed_graph();
        let mut bonds: Vec<(usize, usize)> = Vec::new();
        assert_eq!(sort_backbone_bonds(&mut bonds, &table), None);
    }
}
