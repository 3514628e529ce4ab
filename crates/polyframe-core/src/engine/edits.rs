use super::config::PolymerConfig;
use super::error::EngineError;
use super::paths::collect_reachable;
use crate::core::models::bond::{BondOrder, BondStereo};
use crate::core::models::graph::MolecularGraph;
use crate::core::models::unit::Polymer;
use std::collections::VecDeque;
use tracing::debug;

/// A bond rewiring: the old endpoint pair is removed and the new pair added,
/// carrying over the old bond's order and stereo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BondRewire {
    pub old: (usize, usize),
    pub new: (usize, usize),
}

/// A transactional collection of graph edits, planned in full before any
/// mutation happens.
///
/// Created fresh per planning call, consumed exactly once by [`apply`], then
/// discarded. The lists are append-only; application order is fixed by
/// [`apply`], not by insertion order across lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSet {
    /// Bonds to remove, as endpoint pairs.
    pub delete_bonds: Vec<(usize, usize)>,
    /// Bonds to add; order and stereo are reused from freed bonds in
    /// removal order (first removed, first reused).
    pub add_bonds: Vec<(usize, usize)>,
    /// Bonds to rewire from one endpoint pair to another.
    pub modify_bonds: Vec<BondRewire>,
    /// Atom pairs whose coordinates are swapped.
    pub swap_coordinates: Vec<(usize, usize)>,
    /// Atoms to delete.
    pub delete_atoms: Vec<usize>,
    /// When set, the delete set is transitively extended over everything
    /// reachable from each deleted atom, so no orphaned side-chain stubs
    /// survive.
    pub delete_side_chains: bool,
}

impl EditSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the set plans no edits at all.
    pub fn is_empty(&self) -> bool {
        self.delete_bonds.is_empty()
            && self.add_bonds.is_empty()
            && self.modify_bonds.is_empty()
            && self.swap_coordinates.is_empty()
            && self.delete_atoms.is_empty()
    }

    pub fn delete_bond(&mut self, a: usize, b: usize) -> &mut Self {
        self.delete_bonds.push((a, b));
        self
    }

    pub fn add_bond(&mut self, a: usize, b: usize) -> &mut Self {
        self.add_bonds.push((a, b));
        self
    }

    pub fn modify_bond(&mut self, old: (usize, usize), new: (usize, usize)) -> &mut Self {
        self.modify_bonds.push(BondRewire { old, new });
        self
    }

    pub fn swap_coordinate(&mut self, a: usize, b: usize) -> &mut Self {
        self.swap_coordinates.push((a, b));
        self
    }

    pub fn delete_atom(&mut self, atom: usize) -> &mut Self {
        self.delete_atoms.push(atom);
        self
    }
}

/// The index compaction produced by atom deletion.
///
/// `map[old_index]` is the surviving atom's new index, or `None` for a
/// deleted atom. Survivor values are strictly increasing over surviving
/// original indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenumberMap {
    map: Vec<Option<usize>>,
}

impl RenumberMap {
    pub fn from_vec(map: Vec<Option<usize>>) -> Self {
        Self { map }
    }

    /// The new index of an old atom, or `None` if it was deleted.
    pub fn get(&self, old: usize) -> Option<usize> {
        self.map.get(old).copied().flatten()
    }

    /// True if the old index was deleted.
    pub fn is_deleted(&self, old: usize) -> bool {
        self.map.get(old).map(|m| m.is_none()).unwrap_or(false)
    }

    /// `(old, new)` pairs of all survivors, in old-index order.
    pub fn survivors(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.map
            .iter()
            .enumerate()
            .filter_map(|(old, new)| new.map(|n| (old, n)))
    }

    pub fn as_slice(&self) -> &[Option<usize>] {
        &self.map
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

fn same_pair(a: (usize, usize), b: (usize, usize)) -> bool {
    (a.0 == b.0 && a.1 == b.1) || (a.0 == b.1 && a.1 == b.0)
}

/// Applies an edit set against the shared graph, one unit's plan at a time.
///
/// Order of operations: remove bonds, add bonds, rewire bonds, swap
/// coordinates, delete atoms (with optional transitive side-chain
/// extension), then renumber and rewrite every dependent cross-reference:
/// unit atom/crossing/backbone lists and the stereo collection tables.
/// Each step is idempotence-checked: a repeated identical edit is a no-op,
/// a conflicting one an error.
///
/// On error the graph is left as mutated so far; the caller owns the
/// working-copy-discard policy and must not keep using the graph.
///
/// # Arguments
///
/// * `graph` - The working graph to mutate.
/// * `polymer` - Unit and collection bookkeeping to keep consistent.
/// * `edits` - The planned edit set.
/// * `config` - Engine configuration; bounds the side-chain reachability
///   traversal.
///
/// # Return
///
/// The number of individual edits actually applied.
///
/// # Errors
///
/// [`EngineError::EditInconsistency`] when a requested bond removal or
/// addition cannot find / already has the target edge, or when a deletion
/// leaves a unit without a cap or end atom.
pub fn apply(
    graph: &mut MolecularGraph,
    polymer: &mut Polymer,
    edits: &EditSet,
    config: &PolymerConfig,
) -> Result<usize, EngineError> {
    let mut applied = 0usize;
    let mut freed: VecDeque<(BondOrder, BondStereo)> = VecDeque::new();

    // 1. remove bonds
    let mut removed: Vec<(usize, usize)> = Vec::new();
    for &(a, b) in &edits.delete_bonds {
        if removed.iter().any(|&p| same_pair(p, (a, b))) {
            continue;
        }
        if !graph.contains_bond(a, b) {
            return Err(EngineError::EditInconsistency {
                detail: format!("cannot remove missing bond ({a}, {b})"),
            });
        }
        freed.push_back(graph.remove_bond(a, b)?);
        removed.push((a, b));
        applied += 1;
    }

    // 2. add bonds, reusing freed (order, stereo) when available
    let mut added: Vec<(usize, usize)> = Vec::new();
    for &(a, b) in &edits.add_bonds {
        if added.iter().any(|&p| same_pair(p, (a, b))) {
            continue;
        }
        if graph.contains_bond(a, b) {
            return Err(EngineError::EditInconsistency {
                detail: format!("bond ({a}, {b}) to add already present"),
            });
        }
        let (order, stereo) = freed
            .pop_front()
            .unwrap_or((BondOrder::Single, BondStereo::None));
        graph.add_bond(a, b, order)?;
        graph.set_bond_stereo(a, b, stereo)?;
        added.push((a, b));
        applied += 1;
    }

    // 3. rewire bonds, updating any unit crossing-bond list referencing the
    // old pair
    let mut rewired: Vec<BondRewire> = Vec::new();
    for rewire in &edits.modify_bonds {
        if rewired
            .iter()
            .any(|r| same_pair(r.old, rewire.old) && same_pair(r.new, rewire.new))
        {
            continue;
        }
        let (a, b) = rewire.old;
        if !graph.contains_bond(a, b) {
            return Err(EngineError::EditInconsistency {
                detail: format!("cannot rewire missing bond ({a}, {b})"),
            });
        }
        let (na, nb) = rewire.new;
        if graph.contains_bond(na, nb) {
            return Err(EngineError::EditInconsistency {
                detail: format!("rewire target bond ({na}, {nb}) already present"),
            });
        }
        let (order, stereo) = graph.remove_bond(a, b)?;
        graph.add_bond(na, nb, order)?;
        graph.set_bond_stereo(na, nb, stereo)?;
        for unit in &mut polymer.units {
            for chunk in unit.blist.chunks_exact_mut(2) {
                if same_pair((chunk[0], chunk[1]), rewire.old) {
                    chunk[0] = rewire.new.0;
                    chunk[1] = rewire.new.1;
                }
            }
        }
        rewired.push(*rewire);
        applied += 1;
    }

    // 4. swap coordinates
    for &(a, b) in &edits.swap_coordinates {
        graph.swap_positions(a, b)?;
        applied += 1;
    }

    // 5. delete atoms, transitively extended over side chains when asked
    if !edits.delete_atoms.is_empty() {
        let mut delete = vec![false; graph.atom_count()];
        for &atom in &edits.delete_atoms {
            if atom >= delete.len() {
                return Err(EngineError::EditInconsistency {
                    detail: format!("cannot delete out-of-range atom {atom}"),
                });
            }
            delete[atom] = true;
        }
        if edits.delete_side_chains {
            for &atom in &edits.delete_atoms {
                for reachable in collect_reachable(graph, atom, &[], config.reachable_capacity)? {
                    delete[reachable] = true;
                }
            }
        }
        let n_deleted = delete.iter().filter(|&&d| d).count();
        let renumber = RenumberMap::from_vec(graph.delete_atoms(&delete));
        debug!(n_deleted, survivors = graph.atom_count(), "compacted atom array");
        for unit in &mut polymer.units {
            unit.remap(renumber.as_slice())
                .map_err(EngineError::from)?;
        }
        polymer.collections.remap(renumber.as_slice());
        applied += n_deleted;
    }

    // recompute cap/end bookkeeping from the rewritten crossing-bond lists
    for unit in &mut polymer.units {
        if unit.is_structural() {
            unit.find_ends_and_caps(graph)?;
        }
    }

    Ok(applied)
}
