/// Finds the smallest repeating prefix period of a sequence.
///
/// A period `p` satisfies `seq[k] == seq[k - p]` for every `k >= p`. Only
/// periods up to half the length qualify; a sequence that does not repeat
/// has period 0.
///
/// # Arguments
///
/// * `seq` - The fragment signature-class sequence.
///
/// # Return
///
/// The smallest `p` with `1 <= p <= ceil(n / 2)`, or 0 if none exists.
pub fn find_period<T: PartialEq>(seq: &[T]) -> usize {
    let n = seq.len();
    if n < 2 {
        return 0;
    }
    let max_p = n.div_ceil(2);
    for p in 1..=max_p {
        if (p..n).all(|k| seq[k] == seq[k - p]) {
            return p;
        }
    }
    0
}

/// The fold factor for a sequence of length `n` with period `p`.
///
/// Folding only applies when the period properly divides the length with
/// more than one repeat; otherwise the unit is left unfolded.
///
/// # Return
///
/// `Some(n / p)` when `p > 0`, `p` divides `n`, and `n / p > 1`.
pub fn fold_factor(n: usize, p: usize) -> Option<usize> {
    if p == 0 || n % p != 0 {
        return None;
    }
    let factor = n / p;
    (factor > 1).then_some(factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_sequence_has_period_one() {
        assert_eq!(find_period(&[1, 1, 1, 1]), 1);
    }

    #[test]
    fn alternating_sequence_has_period_two() {
        assert_eq!(find_period(&[1, 2, 1, 2, 1, 2]), 2);
    }

    #[test]
    fn non_repeating_sequences_have_period_zero() {
        assert_eq!(find_period(&[1, 2, 3]), 0);
        assert_eq!(find_period(&[1, 2, 1, 3]), 0);
    }

    #[test]
    fn short_sequences_have_period_zero() {
        assert_eq!(find_period::<u32>(&[]), 0);
        assert_eq!(find_period(&[7]), 0);
    }

    #[test]
    fn partial_trailing_repeat_counts_as_period() {
        // period 2 holds at every position even though 5 is not divisible
        assert_eq!(find_period(&[1, 2, 1, 2, 1]), 2);
        // but it yields no fold factor
        assert_eq!(fold_factor(5, 2), None);
    }

    #[test]
    fn fold_factor_requires_proper_division_and_multiple_repeats() {
        assert_eq!(fold_factor(6, 2), Some(3));
        assert_eq!(fold_factor(4, 1), Some(4));
        assert_eq!(fold_factor(6, 4), None);
        assert_eq!(fold_factor(3, 3), None);
        assert_eq!(fold_factor(3, 0), None);
    }
}
