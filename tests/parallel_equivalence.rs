#![cfg(feature = "parallel")]

use nucleo_dp::{problems::fold::FoldProblem, DpEngine, Scorer};
use proptest::prelude::*;

proptest! {
    #[test]
    fn parallel_fill_matches_memo(seq in "[ACGU]{0,60}") {
        let s = seq.as_bytes();
        let problem = FoldProblem::new(s);
        let par = problem.tabulate_par();
        prop_assert_eq!(par, problem.tabulate());
        prop_assert_eq!(par, DpEngine::new(problem).run());
    }
}

#[test]
fn parallel_scorer_matches_known_strand() {
    let seq = b"GGAUACGGCCAUACUGCGCAGAAAGCACCGCUUCCCAUCCGAACAGCGAAGUUAAGCUGCGCCAGGCGGUGUUAGUACUGGGGUGGGCGACCACCCGGGAAUCCACCGUGCCGUAUCCU";
    let scorer = Scorer::default();
    assert_eq!(scorer.max_pairings_par(seq).unwrap(), 52);
    assert_eq!(scorer.max_pairings_par(b"").unwrap(), 0);
    assert!(scorer.max_pairings_par(b"ACGT").is_err());
}
