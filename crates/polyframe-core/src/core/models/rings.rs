/// Per-atom ring-system assignment, produced by an external
/// articulation-point/ring-perception pass and consumed read-only.
///
/// Two atoms sharing a system id lie in one fused ring system; a bond whose
/// endpoints share a system id is ring-internal and never frame-shiftable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RingSystems {
    system_of: Vec<Option<usize>>,
    smallest_size: Vec<usize>,
}

impl RingSystems {
    /// Creates an assignment with no atom in any ring.
    ///
    /// # Arguments
    ///
    /// * `atom_count` - Number of atoms in the underlying graph.
    pub fn new(atom_count: usize) -> Self {
        Self {
            system_of: vec![None; atom_count],
            smallest_size: vec![0; atom_count],
        }
    }

    /// Marks an atom as belonging to a ring system.
    ///
    /// # Arguments
    ///
    /// * `atom` - Dense atom index.
    /// * `system_id` - Identifier of the fused ring system.
    /// * `ring_size` - Size of the smallest ring through the atom.
    pub fn assign(&mut self, atom: usize, system_id: usize, ring_size: usize) {
        if atom < self.system_of.len() {
            self.system_of[atom] = Some(system_id);
            self.smallest_size[atom] = ring_size;
        }
    }

    /// The ring-system id of an atom, if it is in a ring.
    pub fn system_of(&self, atom: usize) -> Option<usize> {
        self.system_of.get(atom).copied().flatten()
    }

    /// True if the atom lies in any ring.
    pub fn in_ring(&self, atom: usize) -> bool {
        self.system_of(atom).is_some()
    }

    /// Size of the smallest ring through the atom, 0 for chain atoms.
    pub fn ring_size(&self, atom: usize) -> usize {
        self.smallest_size.get(atom).copied().unwrap_or(0)
    }

    /// True if both atoms lie in the same fused ring system.
    pub fn same_system(&self, a: usize, b: usize) -> bool {
        match (self.system_of(a), self.system_of(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }

    /// Number of atoms covered by the assignment.
    pub fn len(&self) -> usize {
        self.system_of.len()
    }

    /// True if the assignment covers no atoms.
    pub fn is_empty(&self) -> bool {
        self.system_of.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_assignment_has_no_ring_atoms() {
        let rings = RingSystems::new(3);
        assert!(!rings.in_ring(0));
        assert_eq!(rings.ring_size(2), 0);
        assert!(!rings.same_system(0, 1));
    }

    #[test]
    fn assigned_atoms_share_systems_as_expected() {
        let mut rings = RingSystems::new(4);
        rings.assign(0, 1, 6);
        rings.assign(1, 1, 6);
        rings.assign(2, 2, 5);
        assert!(rings.same_system(0, 1));
        assert!(!rings.same_system(1, 2));
        assert!(!rings.same_system(2, 3));
        assert_eq!(rings.ring_size(2), 5);
    }

    #[test]
    fn out_of_range_queries_are_harmless() {
        let rings = RingSystems::new(1);
        assert_eq!(rings.system_of(9), None);
        assert_eq!(rings.ring_size(9), 0);
    }
}
