use dp_align::{
    build_matrix, enumerate_alignments, Aligner, AlignmentMode, Cell, CostModel,
    EnumerationLimits,
};

fn rendered(a: &[u8], b: &[u8], costs: &CostModel) -> Vec<(String, String)> {
    let matrix = build_matrix(a, b, costs, AlignmentMode::Global).unwrap();
    matrix.alignments().map(|aln| aln.to_strings()).collect()
}

#[test]
fn edit_distance_example() {
    let a = b"TGCATAT";
    let b = b"ATCCGAT";
    let costs = CostModel::edit_distance();
    let matrix = build_matrix(a, b, &costs, AlignmentMode::Global).unwrap();
    assert_eq!(matrix.best_score(), 4.0);
    assert_eq!(matrix.default_start(), Cell::new(7, 7));

    let alns: Vec<_> = matrix.alignments().collect();
    assert_eq!(alns.len(), 4);
    for aln in &alns {
        assert_eq!(aln.score, 4.0);
        assert_eq!(aln.recompute_score(&costs), 4.0);
        assert_eq!(aln.ungapped_top(), a.to_vec());
        assert_eq!(aln.ungapped_bottom(), b.to_vec());
        assert_eq!(aln.top.len(), aln.bottom.len());
    }
}

#[test]
fn against_empty_sequence_is_pure_gaps() {
    let costs = CostModel::new(2.0, 3.0, 1.0, 0.0);

    let only_deletions = rendered(b"ACGT", b"", &costs);
    assert_eq!(only_deletions, vec![("ACGT".to_string(), "----".to_string())]);
    let m = build_matrix(b"ACGT", b"", &costs, AlignmentMode::Global).unwrap();
    assert_eq!(m.best_score(), 4.0 * 3.0);

    let only_insertions = rendered(b"", b"ACG", &costs);
    assert_eq!(only_insertions, vec![("---".to_string(), "ACG".to_string())]);
    let m = build_matrix(b"", b"ACG", &costs, AlignmentMode::Global).unwrap();
    assert_eq!(m.best_score(), 3.0 * 2.0);

    let both_empty = rendered(b"", b"", &costs);
    assert_eq!(both_empty, vec![(String::new(), String::new())]);
}

#[test]
fn identical_sequences_align_on_the_diagonal() {
    let s = b"HELLO";
    let alns = rendered(s, s, &CostModel::edit_distance());
    assert_eq!(alns, vec![("HELLO".to_string(), "HELLO".to_string())]);
}

#[test]
fn all_mismatching_sequences_are_total() {
    let costs = CostModel::edit_distance();
    let matrix = build_matrix(b"AAA", b"CCC", &costs, AlignmentMode::Global).unwrap();
    assert_eq!(matrix.best_score(), 3.0);
    for aln in matrix.alignments() {
        assert_eq!(aln.recompute_score(&costs), 3.0);
    }
}

#[test]
fn ties_fork_into_every_path() {
    // With free edits every monotone path is optimal: Delannoy(2, 2) = 13.
    let costs = CostModel::new(0.0, 0.0, 0.0, 0.0);
    let matrix = build_matrix(b"AB", b"CD", &costs, AlignmentMode::Global).unwrap();
    assert_eq!(matrix.alignments().count(), 13);
}

#[test]
fn enumeration_is_deterministic() {
    let costs = CostModel::edit_distance();
    let first = rendered(b"GATTACA", b"GCATGCU", &costs);
    let second = rendered(b"GATTACA", b"GCATGCU", &costs);
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn limit_yields_a_prefix_of_the_full_order() {
    let costs = CostModel::new(0.0, 0.0, 0.0, 0.0);
    let matrix = build_matrix(b"ABC", b"DEF", &costs, AlignmentMode::Global).unwrap();
    let full: Vec<_> = matrix.alignments().collect();
    let capped: Vec<_> =
        enumerate_alignments(&matrix, None, EnumerationLimits::default().with_max_results(5))
            .unwrap()
            .collect();
    assert_eq!(capped.len(), 5);
    assert_eq!(&full[..5], &capped[..]);
}

#[test]
fn word_tokens_as_symbols() {
    let a = ["the", "quick", "brown", "fox"];
    let b = ["the", "brown", "fox", "jumps"];
    let alns = Aligner::global().align(&a, &b).unwrap();
    assert!(!alns.is_empty());
    for aln in &alns {
        assert_eq!(aln.score, 2.0);
        assert_eq!(aln.ungapped_top(), a.to_vec());
        assert_eq!(aln.ungapped_bottom(), b.to_vec());
    }
}
