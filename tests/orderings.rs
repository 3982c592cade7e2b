use independence::board::Board;
use independence::pieces::{Material, PieceKind};
use independence::problem::{Problem, SearchError, SearchLimits, SearchOptions};
use independence::search::orderings::{distinct_orderings, for_each_distinct};
use independence::search::play;
use rustc_hash::FxHashSet;

#[test]
fn generated_orderings_are_distinct_and_complete() {
    let mat = Material::new()
        .with_kings(1)
        .with_queens(1)
        .with_rooks(2)
        .with_knights(2);

    let mut seen: FxHashSet<Vec<PieceKind>> = FxHashSet::default();
    for_each_distinct(&mat, &mut |ordering| {
        assert!(seen.insert(ordering.to_vec()), "duplicate: {ordering:?}");
        Ok(())
    })
    .unwrap();

    // 6!/(2!*2!) = 180
    assert_eq!(seen.len() as u128, distinct_orderings(&mat));
    assert_eq!(seen.len(), 180);
}

#[test]
fn single_kind_runs_exactly_one_pass() {
    let problem = Problem::new(Board::new(6, 6), Material::new().with_queens(6));
    let report = play(&problem, &SearchOptions::default()).unwrap();
    assert_eq!(report.num_orderings, 1);
}

#[test]
fn collected_solutions_are_pairwise_distinct_assignments() {
    let problem = Problem::new(
        Board::new(4, 4),
        Material::new().with_rooks(2).with_knights(4),
    );
    let options = SearchOptions {
        collect_solutions: true,
        ..SearchOptions::default()
    };
    let report = play(&problem, &options).unwrap();

    assert_eq!(report.solutions.len() as u64, report.num_solutions);

    // Swapping identities among same-kind pieces must not yield a second
    // copy of the same square->kind assignment.
    let mut seen: FxHashSet<Vec<(u16, PieceKind)>> = FxHashSet::default();
    for s in &report.solutions {
        let mut assignment: Vec<(u16, PieceKind)> =
            s.placements.iter().map(|p| (p.square, p.kind)).collect();
        assignment.sort_unstable();
        assert!(seen.insert(assignment), "double-counted solution");
    }
}

#[test]
fn invalid_problems_are_rejected_before_search() {
    let cases = [
        Problem::new(Board::new(0, 8), Material::new().with_queens(1)),
        Problem::new(Board::new(8, 0), Material::new().with_queens(1)),
        Problem::new(Board::new(3, 3), Material::new()),
        Problem::new(Board::new(2, 2), Material::new().with_knights(5)),
    ];
    for problem in cases {
        match play(&problem, &SearchOptions::default()) {
            Err(SearchError::InvalidProblem { .. }) => {}
            other => panic!("expected InvalidProblem, got {other:?}"),
        }
    }
}

#[test]
fn full_board_of_knights_is_valid_input() {
    // Total pieces equal to the square count is the degenerate upper
    // bound; it must be attempted, not rejected.
    let problem = Problem::new(Board::new(1, 2), Material::new().with_knights(2));
    let report = play(&problem, &SearchOptions::default()).unwrap();
    // Two adjacent knights do not attack each other.
    assert_eq!(report.num_solutions, 1);
}

#[test]
fn node_budget_aborts_explosive_runs() {
    let problem = Problem::new(Board::new(8, 8), Material::new().with_queens(8));
    let options = SearchOptions {
        collect_solutions: false,
        limits: SearchLimits { max_nodes: 100 },
    };
    match play(&problem, &options) {
        Err(SearchError::LimitExceeded { limit, observed, .. }) => {
            assert_eq!(limit, 100);
            assert!(observed > limit);
        }
        other => panic!("expected LimitExceeded, got {other:?}"),
    }
}
