use nucleo_dp::{lcs_length, lcs_length_naive, max_pairings, max_pairings_naive};
use proptest::prelude::*;

#[test]
fn empty_inputs_score_zero() {
    assert_eq!(lcs_length(b"", b"").unwrap(), 0);
    assert_eq!(lcs_length(b"", b"ACGT").unwrap(), 0);
    assert_eq!(lcs_length(b"GATTACA", b"").unwrap(), 0);
    assert_eq!(lcs_length_naive(b"", b"ACGT").unwrap(), 0);
    assert_eq!(max_pairings(b"").unwrap(), 0);
    assert_eq!(max_pairings_naive(b"").unwrap(), 0);
}

#[test]
fn single_base_never_pairs() {
    for &b in b"ACGUacgu" {
        assert_eq!(max_pairings(&[b]).unwrap(), 0);
        assert_eq!(max_pairings_naive(&[b]).unwrap(), 0);
    }
}

#[test]
fn wobble_pairs_do_not_count() {
    assert_eq!(max_pairings(b"GGGGUUUU").unwrap(), 0);
    assert_eq!(max_pairings(b"GU").unwrap(), 0);
    assert_eq!(max_pairings(b"UG").unwrap(), 0);
}

proptest! {
    #[test]
    fn lcs_is_symmetric(a in "[ACGT]{0,30}", b in "[ACGT]{0,30}") {
        prop_assert_eq!(
            lcs_length(a.as_bytes(), b.as_bytes()).unwrap(),
            lcs_length(b.as_bytes(), a.as_bytes()).unwrap()
        );
    }

    #[test]
    fn lcs_of_self_is_length(s in "[ACGT]{0,60}") {
        prop_assert_eq!(lcs_length(s.as_bytes(), s.as_bytes()).unwrap() as usize, s.len());
    }

    #[test]
    fn lcs_bounded_by_shorter(a in "[ACGT]{0,30}", b in "[ACGT]{0,30}") {
        let len = lcs_length(a.as_bytes(), b.as_bytes()).unwrap() as usize;
        prop_assert!(len <= a.len().min(b.len()));
    }

    #[test]
    fn pairings_at_most_half(s in "[ACGU]{0,50}") {
        let pairs = max_pairings(s.as_bytes()).unwrap() as usize;
        prop_assert!(pairs <= s.len() / 2);
    }

    #[test]
    fn pairings_ignore_case(s in "[ACGU]{0,30}") {
        let lower = s.to_ascii_lowercase();
        prop_assert_eq!(
            max_pairings(lower.as_bytes()).unwrap(),
            max_pairings(s.as_bytes()).unwrap()
        );
    }

    #[test]
    fn scoring_is_deterministic(a in "[ACGT]{0,20}", r in "[ACGU]{0,20}") {
        let a = a.as_bytes();
        let r = r.as_bytes();
        prop_assert_eq!(lcs_length(a, a).unwrap(), lcs_length(a, a).unwrap());
        prop_assert_eq!(max_pairings(r).unwrap(), max_pairings(r).unwrap());
    }

    #[test]
    fn perfect_hairpin_pairs_everything(stem in "[ACGU]{1,20}") {
        // stem + reverse complement folds into a fully paired hairpin.
        let complement: Vec<u8> = stem
            .bytes()
            .rev()
            .map(|b| match b {
                b'A' => b'U',
                b'U' => b'A',
                b'G' => b'C',
                _ => b'G',
            })
            .collect();
        let mut seq = stem.clone().into_bytes();
        seq.extend_from_slice(&complement);
        prop_assert_eq!(max_pairings(&seq).unwrap() as usize, stem.len());
    }
}
