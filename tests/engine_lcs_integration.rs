use nucleo_dp::{lcs_length, lcs_length_naive, problems::lcs::LcsProblem, DpEngine};

const SHORT_CASES: &[(&[u8], &[u8], u32)] = &[
    (b"ATCTGAT", b"TGCATA", 4),
    (b"ATGTTAT", b"ATCGTAC", 5),
    (b"ATATATAT", b"TATATATA", 7),
    (b"GACACGAGAAA", b"GTTTTCAGCAGAA", 8),
];

const LONG_CASES: &[(&[u8], &[u8], u32)] = &[
    (
        b"TCCCAGTTATGTCAGGGGACACGAGAATGCAGAGAC",
        b"AATTGCCGCCGTCGTTTTCAGCAGTTATGTCAGATC",
        23,
    ),
    (
        b"GCGCGTGCGCGGAAGGAGCCAAGGTGAAGTTGTAGCAGTGTGTCAGAAGAGGTGCGTGGCACCATGCTGTCCCCCGAGGCGGAGCGGGTGCTGCGGTACCTGGTCGAAGTAGAGGAGTTG",
        b"GACTTGTGGAACCTACTTCCTGAAAATAACCTTCTGTCCTCCGAGCTCTCCGCACCCGTGGATGACCTGCTCCCGTACACAGATGTTGCCACCTGGCTGGATGAATGTCCGAATGAAGCG",
        75,
    ),
    (b"GACACGAGAAA", b"GTTTTCAGCAGAA", 8),
    (b"CGAGAATGCAGA", b"CAGCAGTTATGTCA", 9),
    (b"TGAATCAGTAAGTG", b"GTTAATGTAACTGCAT", 10),
    (
        b"GCGTGCGCGGAAGGAGCCAAGGTGAAGTGTTG",
        b"CTTGTGGAACCTACTTCCTGAAAATAACCTTCTGTCCTCCGAGCTCTCCGCACCAGCG",
        21,
    ),
    (
        b"ACTTGCCACATGCGTGCGCGGAAGGAGCCAAGGTGAAGTGTTATCGGA",
        b"ACCGCTTGTGGAACCTACTTCCTGAAAATAACCTTCTGTCCTCCGAGCTCTCCGCCAAACCAGCGATT",
        31,
    ),
    (
        b"AATACAGTATCGTTTGCCACATGCGTGAGAGTCGCTTCAAGGTGAGAAGATTATCATGATTAAGTGGAGCCAAGGTGAATAGTGTTATCGAGA",
        b"AATCGGTCCGCTTGATGGATAACCTACTTCACTAGAATGCAATAACCTTCTGTCCTCCGAGCTCTCCGACCAAACCAGCGAAAGAATACAGGT",
        59,
    ),
];

#[test]
fn naive_short_scenarios() {
    for &(a, b, expected) in SHORT_CASES {
        assert_eq!(lcs_length_naive(a, b).unwrap(), expected);
    }
}

#[test]
fn memoized_short_scenarios() {
    for &(a, b, expected) in SHORT_CASES {
        assert_eq!(lcs_length(a, b).unwrap(), expected);
    }
}

#[test]
fn memoized_long_scenarios() {
    for &(a, b, expected) in LONG_CASES {
        assert_eq!(lcs_length(a, b).unwrap(), expected);
        assert_eq!(LcsProblem::new(a, b).tabulate(), expected);
    }
}

#[test]
fn memo_table_stays_within_shape() {
    let (a, b, expected) = LONG_CASES[1];
    let (score, stats) = DpEngine::new(LcsProblem::new(a, b)).run_with_stats();
    assert_eq!(score, expected);
    assert_eq!(stats.table_cells, a.len() * b.len());
    assert!(stats.cells_filled <= stats.table_cells);
    assert_eq!(stats.calls, stats.hits + stats.cells_filled as u64);
}

#[cfg(feature = "heavy")]
#[test]
fn naive_heavy_scenarios() {
    assert_eq!(lcs_length_naive(b"CGAGAATGCAGA", b"CAGCAGTTATGTCA").unwrap(), 9);
    assert_eq!(lcs_length_naive(b"TGAATCAGTAAGTG", b"GTTAATGTAACTGCAT").unwrap(), 10);
}
