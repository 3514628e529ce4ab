use super::atom::{Atom, MAX_NEIGHBORS};
use super::bond::{BondOrder, BondRecord, BondStereo};
use nalgebra::Point3;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("Atom index {index} out of range (graph has {len} atoms)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Atom {index} cannot bond to itself")]
    SelfBond { index: usize },
    #[error("Bond ({a}, {b}) already present")]
    DuplicateBond { a: usize, b: usize },
    #[error("No bond between atoms {a} and {b}")]
    NoSuchBond { a: usize, b: usize },
    #[error("Atom {index} exceeds the maximum of {MAX_NEIGHBORS} neighbors")]
    TooManyNeighbors { index: usize },
}

/// A mutable molecular graph over dense atom indices.
///
/// The graph owns a flat atom array; adjacency lives on the atoms themselves
/// as per-bond records. Every mutating operation maintains the symmetry
/// invariant: if `b` appears in `a`'s records then `a` appears in `b`'s, with
/// identical order, stereo, and tautomeric marks on both sides.
///
/// Atom deletion compacts the array and reports the index mapping to the
/// caller; `orig_number` on each surviving atom is untouched, which is how
/// identity is kept stable across edits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MolecularGraph {
    atoms: Vec<Atom>,
}

impl MolecularGraph {
    /// Creates a new, empty molecular graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an atom, assigning the next 1-based original number.
    ///
    /// # Arguments
    ///
    /// * `element` - The element symbol.
    /// * `position` - The 3-D coordinates.
    ///
    /// # Return
    ///
    /// Returns the dense index of the new atom.
    pub fn add_atom(&mut self, element: &str, position: Point3<f64>) -> usize {
        let index = self.atoms.len();
        self.atoms.push(Atom::new(element, index + 1, position));
        index
    }

    /// Retrieves an immutable reference to an atom by index.
    pub fn atom(&self, index: usize) -> Option<&Atom> {
        self.atoms.get(index)
    }

    /// Retrieves a mutable reference to an atom by index.
    pub fn atom_mut(&mut self, index: usize) -> Option<&mut Atom> {
        self.atoms.get_mut(index)
    }

    /// Returns the number of atoms in the graph.
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Returns an iterator over `(index, &Atom)` pairs.
    pub fn atoms_iter(&self) -> impl Iterator<Item = (usize, &Atom)> {
        self.atoms.iter().enumerate()
    }

    /// Finds the dense index of the atom carrying a given original number.
    pub fn index_of_orig(&self, orig_number: usize) -> Option<usize> {
        self.atoms.iter().position(|a| a.orig_number == orig_number)
    }

    fn check_index(&self, index: usize) -> Result<(), GraphError> {
        if index >= self.atoms.len() {
            return Err(GraphError::IndexOutOfRange {
                index,
                len: self.atoms.len(),
            });
        }
        Ok(())
    }

    /// Adds a bond between two atoms, mirrored on both adjacency lists.
    ///
    /// # Arguments
    ///
    /// * `a`, `b` - Dense indices of the endpoints.
    /// * `order` - The bond order.
    ///
    /// # Errors
    ///
    /// Returns a [`GraphError`] if an index is out of range, `a == b`, the
    /// bond already exists, or either endpoint is at the neighbor cap.
    pub fn add_bond(&mut self, a: usize, b: usize, order: BondOrder) -> Result<(), GraphError> {
        self.check_index(a)?;
        self.check_index(b)?;
        if a == b {
            return Err(GraphError::SelfBond { index: a });
        }
        if self.atoms[a].bond_to(b).is_some() {
            return Err(GraphError::DuplicateBond { a, b });
        }
        if self.atoms[a].degree() >= MAX_NEIGHBORS {
            return Err(GraphError::TooManyNeighbors { index: a });
        }
        if self.atoms[b].degree() >= MAX_NEIGHBORS {
            return Err(GraphError::TooManyNeighbors { index: b });
        }
        self.atoms[a].bonds.push(BondRecord::new(b, order));
        self.atoms[b].bonds.push(BondRecord::new(a, order));
        Ok(())
    }

    /// Removes the bond between two atoms from both adjacency lists.
    ///
    /// # Return
    ///
    /// Returns the `(order, stereo)` the removed bond carried, so a caller
    /// may transfer them onto a replacement bond.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NoSuchBond`] if the atoms are not bonded.
    pub fn remove_bond(&mut self, a: usize, b: usize) -> Result<(BondOrder, BondStereo), GraphError> {
        self.check_index(a)?;
        self.check_index(b)?;
        let pos_a = self.atoms[a]
            .bonds
            .iter()
            .position(|r| r.neighbor == b)
            .ok_or(GraphError::NoSuchBond { a, b })?;
        let record = self.atoms[a].bonds.remove(pos_a);
        let pos_b = self.atoms[b]
            .bonds
            .iter()
            .position(|r| r.neighbor == a)
            .ok_or(GraphError::NoSuchBond { a: b, b: a })?;
        self.atoms[b].bonds.remove(pos_b);
        Ok((record.order, record.stereo))
    }

    /// Returns a copy of the adjacency record for the bond `a`-`b`, if any.
    pub fn bond_between(&self, a: usize, b: usize) -> Option<BondRecord> {
        self.atoms.get(a).and_then(|at| at.bond_to(b).copied())
    }

    /// True if atoms `a` and `b` are bonded.
    pub fn contains_bond(&self, a: usize, b: usize) -> bool {
        self.bond_between(a, b).is_some()
    }

    /// Sets the order of an existing bond on both adjacency lists.
    pub fn set_bond_order(&mut self, a: usize, b: usize, order: BondOrder) -> Result<(), GraphError> {
        self.with_bond_mut(a, b, |rec| rec.order = order)
    }

    /// Sets the stereo mark of an existing bond on both adjacency lists.
    pub fn set_bond_stereo(&mut self, a: usize, b: usize, stereo: BondStereo) -> Result<(), GraphError> {
        self.with_bond_mut(a, b, |rec| rec.stereo = stereo)
    }

    /// Sets the tautomeric mark of an existing bond on both adjacency lists.
    pub fn set_bond_tautomeric(&mut self, a: usize, b: usize, tautomeric: bool) -> Result<(), GraphError> {
        self.with_bond_mut(a, b, |rec| rec.tautomeric = tautomeric)
    }

    fn with_bond_mut(
        &mut self,
        a: usize,
        b: usize,
        f: impl Fn(&mut BondRecord),
    ) -> Result<(), GraphError> {
        self.check_index(a)?;
        self.check_index(b)?;
        for (from, to) in [(a, b), (b, a)] {
            let rec = self.atoms[from]
                .bonds
                .iter_mut()
                .find(|r| r.neighbor == to)
                .ok_or(GraphError::NoSuchBond { a, b })?;
            f(rec);
        }
        Ok(())
    }

    /// Returns an iterator over the neighbor indices of an atom.
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.atoms
            .get(index)
            .into_iter()
            .flat_map(|a| a.bonds.iter().map(|r| r.neighbor))
    }

    /// Swaps the 3-D positions of two atoms, leaving all else untouched.
    pub fn swap_positions(&mut self, a: usize, b: usize) -> Result<(), GraphError> {
        self.check_index(a)?;
        self.check_index(b)?;
        if a != b {
            let pa = self.atoms[a].position;
            self.atoms[a].position = self.atoms[b].position;
            self.atoms[b].position = pa;
        }
        Ok(())
    }

    /// Deletes the flagged atoms and compacts the survivors in index order.
    ///
    /// Surviving atoms keep their `orig_number`; their adjacency records are
    /// rewritten in place, dropping records that pointed at deleted atoms and
    /// remapping the rest.
    ///
    /// # Arguments
    ///
    /// * `delete` - One flag per current atom index; `true` means delete.
    ///
    /// # Return
    ///
    /// Returns `map[old_index] = Some(new_index)` for survivors and `None`
    /// for deleted atoms.
    pub fn delete_atoms(&mut self, delete: &[bool]) -> Vec<Option<usize>> {
        let n = self.atoms.len();
        debug_assert_eq!(delete.len(), n);
        let mut map: Vec<Option<usize>> = vec![None; n];
        let mut next = 0usize;
        for (old, flag) in delete.iter().enumerate() {
            if !flag {
                map[old] = Some(next);
                next += 1;
            }
        }
        let mut survivors = Vec::with_capacity(next);
        for (old, mut atom) in std::mem::take(&mut self.atoms).into_iter().enumerate() {
            if map[old].is_none() {
                continue;
            }
            atom.bonds.retain(|rec| map[rec.neighbor].is_some());
            for rec in &mut atom.bonds {
                rec.neighbor = map[rec.neighbor].expect("retained neighbor survives");
            }
            survivors.push(atom);
        }
        self.atoms = survivors;
        map
    }

    /// Checks the adjacency symmetry invariant; used by tests and debug
    /// assertions after bulk edits.
    pub fn is_symmetric(&self) -> bool {
        self.atoms.iter().enumerate().all(|(i, atom)| {
            atom.bonds.iter().all(|rec| {
                self.atoms
                    .get(rec.neighbor)
                    .and_then(|n| n.bond_to(i))
                    .map(|back| {
                        back.order == rec.order
                            && back.stereo == rec.stereo
                            && back.tautomeric == rec.tautomeric
                    })
                    .unwrap_or(false)
            })
        })
    }
}
