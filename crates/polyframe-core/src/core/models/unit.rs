use super::graph::MolecularGraph;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnitTopologyError {
    #[error("Unit has {n} crossing bonds; only 0 or 2 are supported")]
    BadCrossingBondCount { n: usize },
    #[error("Crossing bond ({a}, {b}) does not cross the unit boundary")]
    BondDoesNotCross { a: usize, b: usize },
    #[error("Cap atom {cap} appears inside the unit atom list")]
    CapInsideUnit { cap: usize },
    #[error("Both crossing bonds share the cap atom {cap}")]
    SharedCap { cap: usize },
    #[error("Hydrogen as polymer end group is not supported (atom {cap})")]
    HydrogenCap { cap: usize },
    #[error("Crossing bond endpoint {index} is out of range")]
    EndpointOutOfRange { index: usize },
    #[error("Unit bookkeeping references deleted atom {index}")]
    ReferencesDeletedAtom { index: usize },
}

/// A constitutional repeating unit (CRU): the bracketed, repeating
/// substructure of a polymer drawing.
///
/// `alist` holds the member atoms, `blist` the flattened endpoint pairs of
/// the bracket-crossing bonds (length 0 or 4). For each crossing bond exactly
/// one endpoint lies inside `alist` (the *end*) and one outside (the *cap*);
/// [`PolymerUnit::find_ends_and_caps`] derives and validates them. A unit
/// with an empty `blist` is source-based rather than structural and is
/// skipped by the engine.
///
/// All atom references are dense graph indices; they are rewritten through
/// the renumber map whenever atoms are deleted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolymerUnit {
    /// S-group identifier carried over from the input.
    pub id: usize,
    /// Bracket subscript text (e.g., "n"), informational only.
    pub subscript: String,
    /// Member atom indices, in declaration order.
    pub alist: Vec<usize>,
    /// Flattened crossing-bond endpoints: `[b1a1, b1a2, b2a1, b2a2]` or empty.
    pub blist: Vec<usize>,
    /// Cap and end of the first crossing bond, once derived.
    pub cap1: Option<usize>,
    pub end1: Option<usize>,
    /// Cap and end of the second crossing bond, once derived.
    pub cap2: Option<usize>,
    pub end2: Option<usize>,
    /// Backbone bonds eligible for frame shifting, as index pairs.
    pub backbone_bonds: Vec<(usize, usize)>,
    /// True if the unit may be closed into a ring for frame-shift analysis.
    pub cyclizable: bool,
    /// True while the unit's ends are joined and its caps detached.
    pub cyclized: bool,
}

impl PolymerUnit {
    /// Creates a structural unit from its atom list and crossing-bond pairs.
    pub fn new(id: usize, alist: Vec<usize>, crossing: &[(usize, usize)]) -> Self {
        let mut blist = Vec::with_capacity(crossing.len() * 2);
        for &(a, b) in crossing {
            blist.push(a);
            blist.push(b);
        }
        Self {
            id,
            alist,
            blist,
            cyclizable: true,
            ..Self::default()
        }
    }

    /// Number of crossing bonds (0 or 2 for a well-formed structural unit).
    pub fn crossing_bond_count(&self) -> usize {
        self.blist.len() / 2
    }

    /// True if the unit carries crossing bonds and is subject to
    /// frame-shift/fold analysis.
    pub fn is_structural(&self) -> bool {
        !self.blist.is_empty()
    }

    /// The crossing bonds as endpoint pairs.
    pub fn crossing_bonds(&self) -> Vec<(usize, usize)> {
        self.blist.chunks_exact(2).map(|c| (c[0], c[1])).collect()
    }

    /// True if the given atom index is a member of the unit.
    pub fn contains_atom(&self, index: usize) -> bool {
        self.alist.contains(&index)
    }

    /// Derives `cap1/end1` and `cap2/end2` from `blist` and validates the
    /// unit topology.
    ///
    /// # Errors
    ///
    /// Returns a [`UnitTopologyError`] if the crossing-bond count is not 0
    /// or 2, a crossing bond does not have exactly one endpoint in `alist`,
    /// a cap appears inside the unit, both bonds share one cap, or a cap is
    /// a hydrogen atom.
    pub fn find_ends_and_caps(&mut self, graph: &MolecularGraph) -> Result<(), UnitTopologyError> {
        let n = self.crossing_bond_count();
        if n == 0 {
            self.cap1 = None;
            self.end1 = None;
            self.cap2 = None;
            self.end2 = None;
            return Ok(());
        }
        if n != 2 {
            return Err(UnitTopologyError::BadCrossingBondCount { n });
        }
        let mut caps = [0usize; 2];
        let mut ends = [0usize; 2];
        for (k, (a, b)) in self.crossing_bonds().into_iter().enumerate() {
            for index in [a, b] {
                if graph.atom(index).is_none() {
                    return Err(UnitTopologyError::EndpointOutOfRange { index });
                }
            }
            let a_in = self.contains_atom(a);
            let b_in = self.contains_atom(b);
            let (end, cap) = match (a_in, b_in) {
                (true, false) => (a, b),
                (false, true) => (b, a),
                _ => return Err(UnitTopologyError::BondDoesNotCross { a, b }),
            };
            if self.contains_atom(cap) {
                return Err(UnitTopologyError::CapInsideUnit { cap });
            }
            if graph.atom(cap).map(|at| at.element == "H").unwrap_or(false)
                || graph.atom(end).map(|at| at.element == "H").unwrap_or(false)
            {
                return Err(UnitTopologyError::HydrogenCap { cap });
            }
            ends[k] = end;
            caps[k] = cap;
        }
        if caps[0] == caps[1] {
            return Err(UnitTopologyError::SharedCap { cap: caps[0] });
        }
        self.cap1 = Some(caps[0]);
        self.end1 = Some(ends[0]);
        self.cap2 = Some(caps[1]);
        self.end2 = Some(ends[1]);
        Ok(())
    }

    /// Rewrites every atom reference through a renumber map produced by a
    /// compaction.
    ///
    /// Deleted members are dropped from `alist`; backbone bonds with a
    /// deleted endpoint are dropped as well.
    ///
    /// # Errors
    ///
    /// Returns [`UnitTopologyError::ReferencesDeletedAtom`] if a crossing
    /// bond endpoint was deleted, which leaves the unit inconsistent.
    pub fn remap(&mut self, map: &[Option<usize>]) -> Result<(), UnitTopologyError> {
        self.alist = self
            .alist
            .iter()
            .filter_map(|&old| map.get(old).copied().flatten())
            .collect();
        let mut blist = Vec::with_capacity(self.blist.len());
        for &old in &self.blist {
            match map.get(old).copied().flatten() {
                Some(new) => blist.push(new),
                None => return Err(UnitTopologyError::ReferencesDeletedAtom { index: old }),
            }
        }
        self.blist = blist;
        self.backbone_bonds = self
            .backbone_bonds
            .iter()
            .filter_map(|&(a, b)| {
                match (map.get(a).copied().flatten(), map.get(b).copied().flatten()) {
                    (Some(na), Some(nb)) => Some((na, nb)),
                    _ => None,
                }
            })
            .collect();
        for slot in [&mut self.cap1, &mut self.end1, &mut self.cap2, &mut self.end2] {
            *slot = slot.and_then(|old| map.get(old).copied().flatten());
        }
        Ok(())
    }
}

/// Renumber-sensitive v3000 stereo collection tables carried alongside the
/// polymer units (absolute, racemic, and relative stereo groups).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StereoCollections {
    pub steabs: Vec<Vec<usize>>,
    pub sterac: Vec<Vec<usize>>,
    pub sterel: Vec<Vec<usize>>,
}

impl StereoCollections {
    /// Rewrites every atom list through a renumber map, dropping deleted
    /// atoms and then empty groups.
    pub fn remap(&mut self, map: &[Option<usize>]) {
        for lists in [&mut self.steabs, &mut self.sterac, &mut self.sterel] {
            for list in lists.iter_mut() {
                list.retain_mut(|old| match map.get(*old).copied().flatten() {
                    Some(new) => {
                        *old = new;
                        true
                    }
                    None => false,
                });
            }
            lists.retain(|list| !list.is_empty());
        }
    }
}

/// All polymer bookkeeping of one structure: the units plus the
/// renumber-sensitive stereo collections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polymer {
    pub units: Vec<PolymerUnit>,
    pub collections: StereoCollections,
}
