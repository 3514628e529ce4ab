use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Represents the order of a chemical bond.
///
/// Frame-shift analysis only ever shifts across single bonds, but the graph
/// carries the full order so the backbone filter can reject the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BondOrder {
    Single,
    Double,
    Triple,
    Aromatic,
}

impl Default for BondOrder {
    fn default() -> Self {
        BondOrder::Single
    }
}

#[derive(Debug, Error)]
#[error("Invalid bond order string")]
pub struct ParseBondOrderError;

impl FromStr for BondOrder {
    type Err = ParseBondOrderError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1" | "s" | "single" => Ok(Self::Single),
            "2" | "d" | "double" => Ok(Self::Double),
            "3" | "t" | "triple" => Ok(Self::Triple),
            "ar" | "aromatic" => Ok(Self::Aromatic),
            _ => Err(ParseBondOrderError),
        }
    }
}

impl fmt::Display for BondOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Single => "Single",
                Self::Double => "Double",
                Self::Triple => "Triple",
                Self::Aromatic => "Aromatic",
            }
        )
    }
}

/// Wedge/hash stereo mark on a bond, mirrored at both endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BondStereo {
    #[default]
    None,
    Up,
    Down,
    Either,
}

/// One adjacency record stored on an atom.
///
/// Each atom owns one `BondRecord` per incident bond, so order, stereo, and
/// the tautomeric mark travel together instead of living in parallel arrays
/// that can drift apart during edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BondRecord {
    /// Index of the neighboring atom in the owning graph.
    pub neighbor: usize,
    /// The bond order.
    pub order: BondOrder,
    /// The stereo mark, mirrored on the neighbor's record.
    pub stereo: BondStereo,
    /// Set by the external normalizer on bonds in a mobile-H group;
    /// such bonds are never frame-shift candidates.
    pub tautomeric: bool,
}

impl BondRecord {
    pub fn new(neighbor: usize, order: BondOrder) -> Self {
        Self {
            neighbor,
            order,
            stereo: BondStereo::None,
            tautomeric: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bond_order_from_str_parses_valid_strings() {
        assert_eq!("1".parse::<BondOrder>().unwrap(), BondOrder::Single);
        assert_eq!("single".parse::<BondOrder>().unwrap(), BondOrder::Single);
        assert_eq!("2".parse::<BondOrder>().unwrap(), BondOrder::Double);
        assert_eq!("D".parse::<BondOrder>().unwrap(), BondOrder::Double);
        assert_eq!("3".parse::<BondOrder>().unwrap(), BondOrder::Triple);
        assert_eq!("ar".parse::<BondOrder>().unwrap(), BondOrder::Aromatic);
    }

    #[test]
    fn bond_order_from_str_rejects_invalid_strings() {
        assert!("".parse::<BondOrder>().is_err());
        assert!("quadruple".parse::<BondOrder>().is_err());
        assert!("0".parse::<BondOrder>().is_err());
    }

    #[test]
    fn bond_order_default_is_single() {
        assert_eq!(BondOrder::default(), BondOrder::Single);
    }

    #[test]
    fn bond_record_new_has_no_stereo_or_tautomeric_mark() {
        let rec = BondRecord::new(3, BondOrder::Double);
        assert_eq!(rec.neighbor, 3);
        assert_eq!(rec.order, BondOrder::Double);
        assert_eq!(rec.stereo, BondStereo::None);
        assert!(!rec.tautomeric);
    }
}
