use crate::core::models::atom::AtomParity;
use itertools::Itertools;
use std::collections::HashMap;
use std::fmt::Write;

/// A contiguous slice of a unit's backbone between two cuts (or a cut and an
/// end atom). Created and discarded within a single fold analysis call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    /// The fragment atoms in backbone order.
    pub atoms: Vec<usize>,
}

impl Fragment {
    /// The boundary atom on the end1 side.
    pub fn first(&self) -> Option<usize> {
        self.atoms.first().copied()
    }

    /// The boundary atom on the end2 side.
    pub fn last(&self) -> Option<usize> {
        self.atoms.last().copied()
    }
}

/// Extends base equivalence classes with stereo parity.
///
/// The extended class is `base + n_classes * offset` where the offset is
/// 0, 1, or 2 for no/odd/even parity and `n_classes` is the base class
/// count. Stereo-distinct atoms therefore never collide with non-stereo
/// atoms of an unrelated class id.
///
/// # Arguments
///
/// * `base` - Per-atom base equivalence class ids.
/// * `parities` - Per-atom stereo parity, same length.
pub fn extended_classes(base: &[usize], parities: &[AtomParity]) -> Vec<usize> {
    debug_assert_eq!(base.len(), parities.len());
    let n_classes = base.iter().copied().max().map(|m| m + 1).unwrap_or(0);
    base.iter()
        .zip(parities)
        .map(|(&class, parity)| class + n_classes * parity.class_offset())
        .collect()
}

/// Computes a fragment's canonical signature from per-atom classes.
///
/// The format is `size,end1_class,end2_class{ (class:count) ...}` with the
/// histogram sorted by class id and zero counts omitted. Two fragments are
/// equal iff their signatures are textually identical.
///
/// # Arguments
///
/// * `fragment` - The fragment to summarize.
/// * `classes` - Per-atom (extended) equivalence classes.
pub fn make_signature(fragment: &Fragment, classes: &[usize]) -> String {
    let class_of = |atom: usize| classes.get(atom).copied().unwrap_or(usize::MAX);
    let mut histogram: HashMap<usize, usize> = HashMap::new();
    for &atom in &fragment.atoms {
        *histogram.entry(class_of(atom)).or_insert(0) += 1;
    }
    let mut signature = format!(
        "{},{},{}{{",
        fragment.atoms.len(),
        fragment.first().map(class_of).unwrap_or(usize::MAX),
        fragment.last().map(class_of).unwrap_or(usize::MAX),
    );
    for (class, count) in histogram.into_iter().sorted() {
        write!(signature, " ({class}:{count})").expect("writing to string cannot fail");
    }
    signature.push('}');
    signature
}

/// Partitions an ordered backbone into fragments at a set of cut bonds.
///
/// A new fragment starts after every consecutive atom pair that appears in
/// `cuts` (in either orientation); bonds not on the backbone are ignored.
///
/// # Arguments
///
/// * `backbone_atoms` - The path atoms in order, end1 first.
/// * `cuts` - The cut bonds as endpoint pairs.
pub fn split_at_cuts(backbone_atoms: &[usize], cuts: &[(usize, usize)]) -> Vec<Fragment> {
    let is_cut = |a: usize, b: usize| {
        cuts.iter()
            .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
    };
    let mut fragments = Vec::new();
    let mut current = Vec::new();
    for (i, &atom) in backbone_atoms.iter().enumerate() {
        current.push(atom);
        let next_is_cut = backbone_atoms
            .get(i + 1)
            .map(|&next| is_cut(atom, next))
            .unwrap_or(false);
        if next_is_cut {
            fragments.push(Fragment {
                atoms: std::mem::take(&mut current),
            });
        }
    }
    if !current.is_empty() {
        fragments.push(Fragment { atoms: current });
    }
    fragments
}

/// Maps fragment signatures onto dense class ids in first-seen order.
///
/// # Arguments
///
/// * `fragments` - The backbone fragments in order.
/// * `classes` - Per-atom (extended) equivalence classes.
///
/// # Return
///
/// One id per fragment; equal ids mean textually identical signatures.
pub fn signature_classes(fragments: &[Fragment], classes: &[usize]) -> Vec<usize> {
    let mut ids: HashMap<String, usize> = HashMap::new();
    fragments
        .iter()
        .map(|fragment| {
            let signature = make_signature(fragment, classes);
            let next = ids.len();
            *ids.entry(signature).or_insert(next)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_lists_sorted_nonzero_counts() {
        let fragment = Fragment {
            atoms: vec![0, 1, 2, 3],
        };
        let classes = vec![2, 7, 2, 7];
        assert_eq!(make_signature(&fragment, &classes), "4,2,7{ (2:2) (7:2)}");
    }

    #[test]
    fn signature_is_insensitive_to_absolute_class_ids() {
        // two numbering schemes related by the relabeling 5 -> 40, 9 -> 17;
        // equal fragments must stay equal under either scheme
        let a = Fragment { atoms: vec![0, 1, 2] };
        let b = Fragment { atoms: vec![3, 4, 5] };
        let scheme1 = vec![5, 9, 5, 5, 9, 5];
        let scheme2 = vec![40, 17, 40, 40, 17, 40];
        assert_eq!(make_signature(&a, &scheme1), make_signature(&b, &scheme1));
        assert_eq!(make_signature(&a, &scheme2), make_signature(&b, &scheme2));
        // the derived fragment classes match under both schemes
        assert_eq!(signature_classes(&[a.clone(), b.clone()], &scheme1), vec![0, 0]);
        assert_eq!(signature_classes(&[a, b], &scheme2), vec![0, 0]);
    }

    #[test]
    fn signature_distinguishes_boundary_classes() {
        let a = Fragment { atoms: vec![0, 1] };
        let b = Fragment { atoms: vec![1, 0] };
        let classes = vec![1, 2];
        assert_ne!(make_signature(&a, &classes), make_signature(&b, &classes));
    }

    #[test]
    fn extended_classes_separate_parity_from_base_class() {
        use AtomParity::*;
        let base = vec![0, 1, 0, 1];
        let parities = vec![None, None, Odd, Even];
        let extended = extended_classes(&base, &parities);
        assert_eq!(extended, vec![0, 1, 2, 5]);
        // no collision between a stereo atom and any base class
        assert!(extended[2] >= 2 && extended[3] >= 2);
    }

    #[test]
    fn split_at_cuts_partitions_the_backbone() {
        let backbone = [10, 11, 12, 13, 14, 15];
        let cuts = [(11, 12), (14, 13)]; // orientation of a cut is irrelevant
        let fragments = split_at_cuts(&backbone, &cuts);
        assert_eq!(fragments.len(), 3);
        assert_eq!(fragments[0].atoms, vec![10, 11]);
        assert_eq!(fragments[1].atoms, vec![12, 13]);
        assert_eq!(fragments[2].atoms, vec![14, 15]);
        assert_eq!(fragments[0].first(), Some(10));
        assert_eq!(fragments[0].last(), Some(11));
    }

    #[test]
    fn split_without_cuts_is_one_fragment() {
        let fragments = split_at_cuts(&[1, 2, 3], &[]);
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].atoms, vec![1, 2, 3]);
    }

    #[test]
    fn signature_classes_assign_ids_in_first_seen_order() {
        let fragments = vec![
            Fragment { atoms: vec![0] },
            Fragment { atoms: vec![1] },
            Fragment { atoms: vec![2] },
        ];
        let classes = vec![4, 8, 4];
        assert_eq!(signature_classes(&fragments, &classes), vec![0, 1, 0]);
    }
}
