use phf::phf_map;

/// Seniority rank of known elements; higher is more senior.
///
/// The ladder follows the chemistry-derived order used when choosing a
/// canonical crossing bond: chalcogens above pnictogens above the metalloid
/// block above halogens, with carbon just above hydrogen at the bottom.
/// Heteroatoms absent from the table still rank above carbon.
static SENIORITY: phf::Map<&'static str, u32> = phf_map! {
    "O" => 100,
    "S" => 96,
    "Se" => 94,
    "Te" => 92,
    "N" => 90,
    "P" => 86,
    "As" => 84,
    "Sb" => 82,
    "B" => 72,
    "Si" => 66,
    "Ge" => 64,
    "Sn" => 62,
    "Pb" => 60,
    "F" => 52,
    "Cl" => 50,
    "Br" => 48,
    "I" => 46,
    "C" => 1,
    "H" => 0,
};

/// Rank assigned to heteroatoms missing from the seniority table.
const DEFAULT_HETERO_RANK: u32 = 10;

/// Returns the seniority rank of an element symbol.
///
/// # Arguments
///
/// * `symbol` - The element symbol as written in the graph.
///
/// # Return
///
/// The rank from the seniority ladder; unknown non-carbon, non-hydrogen
/// symbols get a small positive heteroatom rank, and cap placeholders rank 0.
pub fn seniority_rank(symbol: &str) -> u32 {
    if is_cap_placeholder(symbol) {
        return 0;
    }
    SENIORITY
        .get(symbol)
        .copied()
        .unwrap_or(DEFAULT_HETERO_RANK)
}

/// True for the star/placeholder symbols used for bracket cap atoms.
pub fn is_cap_placeholder(symbol: &str) -> bool {
    matches!(symbol, "Zz" | "*")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chalcogens_outrank_pnictogens_and_carbon() {
        assert!(seniority_rank("O") > seniority_rank("N"));
        assert!(seniority_rank("S") > seniority_rank("P"));
        assert!(seniority_rank("N") > seniority_rank("C"));
        assert!(seniority_rank("C") > seniority_rank("H"));
    }

    #[test]
    fn unknown_heteroatoms_rank_above_carbon() {
        assert!(seniority_rank("Fe") > seniority_rank("C"));
        assert!(seniority_rank("Fe") < seniority_rank("I"));
    }

    #[test]
    fn cap_placeholders_rank_zero() {
        assert!(is_cap_placeholder("Zz"));
        assert!(is_cap_placeholder("*"));
        assert_eq!(seniority_rank("Zz"), 0);
        assert_eq!(seniority_rank("*"), 0);
        assert!(!is_cap_placeholder("Zn"));
    }
}
