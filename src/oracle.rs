//! Known N-Queens solution counts (OEIS A000170).

/// Solutions on an N×N board, indexed by N.
pub const KNOWN_SOLUTIONS: [u64; 28] = [
    1,
    1,
    0,
    0,
    2,
    10,
    4,
    40,
    92,
    352,
    724,
    2_680,
    14_200,
    73_712,
    365_596,
    2_279_184,
    14_772_512,
    95_815_104,
    666_090_624,
    4_968_057_848,
    39_029_188_884,
    314_666_222_712,
    2_691_008_701_644,
    24_233_937_684_440,
    227_514_171_973_736,
    2_207_893_435_808_352,
    22_317_699_616_364_044,
    234_907_967_154_122_528,
];

/// Known count for an N×N board, `None` past the end of the table.
#[must_use]
pub fn expected_solutions(n: usize) -> Option<u64> {
    KNOWN_SOLUTIONS.get(n).copied()
}

/// Whether `count` is the known count for N. Unknown sizes never check.
#[must_use]
pub fn check_solutions(n: usize, count: u64) -> bool {
    expected_solutions(n) == Some(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(expected_solutions(0), Some(1));
        assert_eq!(expected_solutions(8), Some(92));
        assert_eq!(expected_solutions(27), Some(234_907_967_154_122_528));
        assert_eq!(expected_solutions(28), None);
    }

    #[test]
    fn test_check() {
        assert!(check_solutions(6, 4));
        assert!(!check_solutions(6, 5));
        assert!(!check_solutions(31, 0));
    }
}
