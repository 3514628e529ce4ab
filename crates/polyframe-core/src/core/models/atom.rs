use super::bond::BondRecord;
use nalgebra::Point3;

/// The maximum number of neighbors an atom may carry.
///
/// Matches the bounded-degree neighbor lists of common connection-table
/// formats; exceeding it during an edit is a graph error, not a panic.
pub const MAX_NEIGHBORS: usize = 20;

/// Tetrahedral stereo parity of an atom, as assigned by the external
/// normalizer from 3-D coordinates.
///
/// Parity participates in extended fragment classes so that stereo-distinct
/// atoms never collapse into one repeat-detection class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AtomParity {
    /// Not a stereocenter, or parity not determined.
    #[default]
    None,
    /// Odd parity.
    Odd,
    /// Even parity.
    Even,
}

impl AtomParity {
    /// Offset used when extending equivalence classes with stereo information.
    ///
    /// # Return
    ///
    /// Returns 0, 1, or 2 for `None`, `Odd`, `Even` respectively.
    pub fn class_offset(&self) -> usize {
        match self {
            AtomParity::None => 0,
            AtomParity::Odd => 1,
            AtomParity::Even => 2,
        }
    }
}

/// Represents an atom in a molecular graph.
///
/// An atom carries its element symbol, a stable original number, 3-D
/// coordinates, stereo parity, and its own adjacency records. The original
/// number is assigned at construction and survives every edit until the atom
/// itself is deleted, which is what lets polymer bookkeeping reference atoms
/// across renumbering.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The element symbol (e.g., "C", "N", "Zz" for a star/cap placeholder).
    pub element: String,
    /// 1-based original number, stable across edits until deletion.
    pub orig_number: usize,
    /// The 3-D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
    /// Formal charge in elementary charge units.
    pub charge: i8,
    /// Tetrahedral stereo parity.
    pub parity: AtomParity,
    /// Per-bond adjacency records, bounded by [`MAX_NEIGHBORS`].
    pub bonds: Vec<BondRecord>,
}

impl Atom {
    /// Creates a new `Atom` with no neighbors and default properties.
    ///
    /// # Arguments
    ///
    /// * `element` - The element symbol.
    /// * `orig_number` - The stable 1-based original number.
    /// * `position` - The 3-D coordinates of the atom.
    pub fn new(element: &str, orig_number: usize, position: Point3<f64>) -> Self {
        Self {
            element: element.to_string(),
            orig_number,
            position,
            charge: 0,
            parity: AtomParity::None,
            bonds: Vec::new(),
        }
    }

    /// Returns the current degree (number of explicit neighbors).
    pub fn degree(&self) -> usize {
        self.bonds.len()
    }

    /// Looks up the adjacency record towards a neighbor index, if bonded.
    pub fn bond_to(&self, neighbor: usize) -> Option<&BondRecord> {
        self.bonds.iter().find(|b| b.neighbor == neighbor)
    }

    /// True if the element is neither carbon nor hydrogen.
    pub fn is_heteroatom(&self) -> bool {
        self.element != "C" && self.element != "H"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::bond::BondOrder;

    #[test]
    fn new_atom_has_expected_default_fields() {
        let atom = Atom::new("N", 7, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(atom.element, "N");
        assert_eq!(atom.orig_number, 7);
        assert_eq!(atom.position, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(atom.charge, 0);
        assert_eq!(atom.parity, AtomParity::None);
        assert!(atom.bonds.is_empty());
        assert_eq!(atom.degree(), 0);
    }

    #[test]
    fn bond_to_finds_existing_record_only() {
        let mut atom = Atom::new("C", 1, Point3::origin());
        atom.bonds.push(BondRecord::new(4, BondOrder::Single));
        assert!(atom.bond_to(4).is_some());
        assert!(atom.bond_to(5).is_none());
    }

    #[test]
    fn heteroatom_excludes_carbon_and_hydrogen() {
        assert!(Atom::new("O", 1, Point3::origin()).is_heteroatom());
        assert!(Atom::new("S", 1, Point3::origin()).is_heteroatom());
        assert!(!Atom::new("C", 1, Point3::origin()).is_heteroatom());
        assert!(!Atom::new("H", 1, Point3::origin()).is_heteroatom());
    }

    #[test]
    fn parity_class_offsets_are_distinct() {
        assert_eq!(AtomParity::None.class_offset(), 0);
        assert_eq!(AtomParity::Odd.class_offset(), 1);
        assert_eq!(AtomParity::Even.class_offset(), 2);
    }
}
