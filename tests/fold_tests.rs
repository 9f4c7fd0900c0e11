// Engine-level tests for fold application and punching

use punchfold::engine::engine::{PaperState, PunchOutcome, Simulator};
use punchfold::engine::errors::SimError;
use punchfold::grid::{all_coords, Coord, GRID_SIZE};
use punchfold::parser::spec::{FoldSpec, Scenario};

fn coord(row: i32, col: i32) -> Coord {
    Coord::new(row, col)
}

#[test]
fn test_zero_folds_punch_is_identity() {
    let mut simulator = Simulator::new(Scenario {
        folds: vec![],
        punch: coord(3, 4),
    });
    simulator.run();

    match simulator.punch() {
        PunchOutcome::Holes(result) => {
            assert_eq!(result.hole_count(), 1);
            assert!(result.is_punched(coord(3, 4)));
        }
        PunchOutcome::Blocked => panic!("identity punch should not be blocked"),
    }
}

#[test]
fn test_horizontal_near_fold_reflects_columns() {
    let mut state = PaperState::new();
    state.apply(&FoldSpec::Horizontal { line: 2 });

    // Columns 1 and 2 fold onto 4 and 3
    assert!(state.grid.is_empty(coord(1, 1)));
    assert!(state.grid.is_empty(coord(5, 2)));
    assert_eq!(state.grid.tokens(coord(1, 4)), &[coord(1, 4), coord(1, 1)]);
    assert_eq!(state.grid.tokens(coord(5, 3)), &[coord(5, 3), coord(5, 2)]);

    // Columns past the crease are unaffected
    assert_eq!(state.grid.tokens(coord(2, 5)), &[coord(2, 5)]);
    assert_eq!(state.grid.tokens(coord(6, 6)), &[coord(6, 6)]);
    assert!(state.grid.is_conserved());
}

#[test]
fn test_horizontal_far_fold_reflects_columns() {
    let mut state = PaperState::new();
    state.apply(&FoldSpec::Horizontal { line: 4 });

    // Columns 6 and 5 fold onto 3 and 4
    assert!(state.grid.is_empty(coord(2, 6)));
    assert!(state.grid.is_empty(coord(2, 5)));
    assert_eq!(state.grid.tokens(coord(2, 3)), &[coord(2, 3), coord(2, 6)]);
    assert_eq!(state.grid.tokens(coord(2, 4)), &[coord(2, 4), coord(2, 5)]);
    assert!(state.grid.is_conserved());
}

#[test]
fn test_vertical_near_fold_reflects_rows() {
    let mut state = PaperState::new();
    state.apply(&FoldSpec::Vertical { line: 3 });

    // Rows 1..3 fold onto rows 6..4
    assert!(state.grid.is_empty(coord(1, 2)));
    assert_eq!(state.grid.tokens(coord(6, 2)), &[coord(6, 2), coord(1, 2)]);
    assert_eq!(state.grid.tokens(coord(4, 5)), &[coord(4, 5), coord(3, 5)]);
    assert!(state.grid.is_conserved());
}

#[test]
fn test_axis_folds_never_touch_the_mask() {
    let mut state = PaperState::new();
    state.apply(&FoldSpec::Horizontal { line: 3 });
    state.apply(&FoldSpec::Vertical { line: 5 });

    for cell in all_coords() {
        assert!(state.mask.is_valid(cell));
    }
}

#[test]
fn test_rising_diagonal_at_main_diagonal_transposes() {
    let mut state = PaperState::new();
    state.apply(&FoldSpec::DiagonalRising { intercept: 0 });

    // Crease cells (i, i) are invalidated but keep their own token
    for i in 1..=GRID_SIZE {
        assert!(!state.mask.is_valid(coord(i, i)));
        assert_eq!(state.grid.tokens(coord(i, i)), &[coord(i, i)]);
    }

    // The lower triangle (15 cells) folds onto the upper (15 non-crease
    // cells plus 6 crease cells count as the large side)
    assert!(state.grid.is_empty(coord(5, 2)));
    assert_eq!(state.grid.tokens(coord(2, 5)), &[coord(2, 5), coord(5, 2)]);
    assert_eq!(state.grid.tokens(coord(1, 6)), &[coord(1, 6), coord(6, 1)]);
    assert!(state.grid.is_conserved());
}

#[test]
fn test_falling_diagonal_worked_example() {
    let mut state = PaperState::new();
    state.apply(&FoldSpec::DiagonalFalling { intercept: 7 });

    // Crease row + col = 7 passes through six cells
    for (row, col) in [(1, 6), (2, 5), (3, 4), (4, 3), (5, 2), (6, 1)] {
        assert!(!state.mask.is_valid(coord(row, col)));
    }

    // The side below the crease (15 cells) folds across it
    assert!(state.grid.is_empty(coord(1, 1)));
    assert!(state.grid.is_empty(coord(2, 1)));
    assert_eq!(state.grid.tokens(coord(6, 6)), &[coord(6, 6), coord(1, 1)]);
    assert_eq!(state.grid.tokens(coord(6, 5)), &[coord(6, 5), coord(2, 1)]);
    assert!(state.grid.is_conserved());
}

#[test]
fn test_conservation_across_mixed_fold_sequence() {
    let mut state = PaperState::new();
    let folds = [
        FoldSpec::Horizontal { line: 2 },
        FoldSpec::DiagonalFalling { intercept: 9 },
        FoldSpec::Vertical { line: 4 },
        FoldSpec::DiagonalRising { intercept: 1 },
        FoldSpec::Horizontal { line: 5 },
        FoldSpec::DiagonalRising { intercept: -2 },
    ];
    for fold in &folds {
        state.apply(fold);
        assert!(state.grid.is_conserved(), "conservation broke at {}", fold);
    }
    assert_eq!(state.grid.total_tokens(), 36);
}

#[test]
fn test_crease_invalidation_is_monotone() {
    let mut state = PaperState::new();
    state.apply(&FoldSpec::DiagonalRising { intercept: 0 });
    assert!(!state.mask.is_valid(coord(3, 3)));

    // Later folds may stack tokens onto the crease cells, but the mask
    // never flips back
    state.apply(&FoldSpec::Horizontal { line: 4 });
    state.apply(&FoldSpec::Vertical { line: 2 });
    state.apply(&FoldSpec::DiagonalFalling { intercept: 10 });
    assert!(!state.mask.is_valid(coord(3, 3)));
    assert!(!state.mask.is_valid(coord(6, 6)));
}

#[test]
fn test_punch_on_crease_is_blocked() {
    let mut state = PaperState::new();
    state.apply(&FoldSpec::DiagonalFalling { intercept: 7 });
    assert_eq!(state.punch(coord(3, 4)), PunchOutcome::Blocked);
}

#[test]
fn test_punch_on_emptied_cell_yields_no_holes() {
    let mut state = PaperState::new();
    state.apply(&FoldSpec::Horizontal { line: 2 });

    // Column 1 was folded away; the cell is valid but holds no paper
    match state.punch(coord(1, 1)) {
        PunchOutcome::Holes(result) => assert_eq!(result.hole_count(), 0),
        PunchOutcome::Blocked => panic!("cell off the crease must be punchable"),
    }
}

#[test]
fn test_out_of_board_mirror_leaves_tokens_in_place() {
    let mut state = PaperState::new();

    // Stack the paper so that the large side of the coming crease holds
    // fewer cells than the small side: keep (1,1), (1,2), (2,1) below the
    // crease and (2,3), (6,6) above it, piling everything else onto (6,6).
    let kept = [coord(1, 1), coord(1, 2), coord(2, 1), coord(2, 3), coord(6, 6)];
    for cell in all_coords() {
        if !kept.contains(&cell) {
            state.grid.move_all(cell, coord(6, 6));
        }
    }
    let stacked_depth = state.grid.depth(coord(6, 6));

    state.apply(&FoldSpec::DiagonalFalling { intercept: 4 });

    // The large side (2 non-empty cells vs 3) folds across row + col = 4.
    // (6,6) mirrors to (-2,-2), off the board, so its stack stays put;
    // (2,3) mirrors to (1,2) and moves in the same pass.
    assert_eq!(state.grid.depth(coord(6, 6)), stacked_depth);
    assert!(state.grid.is_empty(coord(2, 3)));
    assert_eq!(state.grid.tokens(coord(1, 2)), &[coord(1, 2), coord(2, 3)]);
    assert!(state.grid.is_conserved());
}

#[test]
fn test_simulator_records_one_snapshot_per_fold() {
    let mut simulator = Simulator::new(Scenario {
        folds: vec![
            FoldSpec::Horizontal { line: 2 },
            FoldSpec::DiagonalRising { intercept: 0 },
        ],
        punch: coord(1, 4),
    });
    simulator.run();

    assert_eq!(simulator.total_snapshots(), 3);
    assert_eq!(simulator.history_position(), 2);

    let labels: Vec<&str> = simulator
        .snapshots()
        .iter()
        .map(|s| s.label.as_str())
        .collect();
    assert_eq!(
        labels,
        vec![
            "Original paper",
            "Horizontal fold (line=2)",
            "Rising diagonal fold (b=0)",
        ]
    );
}

#[test]
fn test_history_navigation_bounds() {
    let mut simulator = Simulator::new(Scenario {
        folds: vec![FoldSpec::Vertical { line: 3 }],
        punch: coord(6, 6),
    });
    simulator.run();

    assert_eq!(
        simulator.step_forward(),
        Err(SimError::NoMoreSteps {
            position: 1,
            total: 2
        })
    );
    assert_eq!(simulator.step_backward(), Ok(()));
    assert_eq!(simulator.step_backward(), Err(SimError::AlreadyAtStart));

    // The punch still answers from the final state after rewinding
    match simulator.punch() {
        PunchOutcome::Holes(result) => {
            assert!(result.is_punched(coord(6, 6)));
        }
        PunchOutcome::Blocked => panic!("punch target is not on a crease"),
    }
}

#[test]
fn test_snapshots_preserve_intermediate_states() {
    let mut simulator = Simulator::new(Scenario {
        folds: vec![
            FoldSpec::Horizontal { line: 2 },
            FoldSpec::Horizontal { line: 4 },
        ],
        punch: coord(1, 3),
    });
    simulator.run();

    let initial = &simulator.snapshots()[0];
    assert_eq!(initial.grid.depth(coord(1, 1)), 1);

    let after_first = &simulator.snapshots()[1];
    assert!(after_first.grid.is_empty(coord(1, 1)));
    assert_eq!(after_first.grid.depth(coord(1, 4)), 2);

    let after_second = &simulator.snapshots()[2];
    assert_eq!(after_second.grid.depth(coord(1, 3)), 3);
}
