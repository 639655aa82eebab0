//! Integration test: rules scenarios
//!
//! Captures, territory and scoring driven through the public API.

use goban::{
    apply_move, classify_territory, connected_group, score, Board, Captures, GoError, Score,
    ScoringRule, Stone, Territory,
};

fn board(rows: &[&str]) -> Board {
    Board::from_rows(rows).expect("valid diagram")
}

// =============================================================================
// Move Engine
// =============================================================================

#[test]
fn test_single_white_stone_captured_on_19x19() {
    let mut b = Board::default();
    b.place(1, 1, Stone::White).unwrap();
    b.place(0, 1, Stone::Black).unwrap();
    b.place(2, 1, Stone::Black).unwrap();
    b.place(1, 0, Stone::Black).unwrap();

    let result = apply_move(&mut b, 1, 2, Stone::Black).unwrap();
    assert_eq!(result.count(), 1);
    assert_eq!(b.get(1, 1), Ok(None));
    assert_eq!(b.stone_count(Stone::Black), 4);
    assert_eq!(b.stone_count(Stone::White), 0);
}

#[test]
fn test_lone_stone_never_captures() {
    let mut b = board(&[
        "O....",
        ".....",
        ".....",
        ".....",
        "....O",
    ]);
    let result = apply_move(&mut b, 2, 2, Stone::Black).unwrap();
    assert_eq!(result.count(), 0);
    assert_eq!(b.stone_count(Stone::White), 2);
}

#[test]
fn test_disjoint_groups_captured_together() {
    // Black at (2, 2) is the last liberty of a 2-stone group above and a
    // 3-stone group to the right.
    let mut b = board(&[
        ".XOX.",
        ".XOXX",
        "...OO",
        "..XXO",
        "....X",
    ]);
    let result = apply_move(&mut b, 2, 2, Stone::Black).unwrap();
    assert_eq!(result.count(), 5);
    assert_eq!(
        result.removed,
        vec![(2, 0), (2, 1), (3, 2), (4, 2), (4, 3)]
    );
    assert_eq!(b.stone_count(Stone::White), 0);
}

#[test]
fn test_occupied_move_is_rejected_without_change() {
    let mut b = board(&[
        "XO.",
        "OX.",
        "...",
    ]);
    for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
        for stone in Stone::ALL {
            let before = b.clone();
            assert_eq!(
                apply_move(&mut b, x, y, stone),
                Err(GoError::CellOccupied { x, y })
            );
            assert_eq!(b, before);
        }
    }
}

#[test]
fn test_invalid_color_from_text() {
    let mut b = Board::new(9).unwrap();
    assert!(matches!("green".parse::<Stone>(), Err(GoError::InvalidColor(_))));
    assert!(matches!(b.place_cell(0, 0, None), Err(GoError::InvalidColor(_))));
    assert_eq!(b, Board::new(9).unwrap());
}

// =============================================================================
// Group Analyzer
// =============================================================================

#[test]
fn test_long_chain_has_no_recursion_limit() {
    // Snake filling most of a 19x19 board.
    let mut b = Board::default();
    for y in (0..19).step_by(2) {
        for x in 0..19 {
            b.place(x, y, Stone::Black).unwrap();
        }
        if y + 1 < 19 {
            let link = if (y / 2) % 2 == 0 { 18 } else { 0 };
            b.place(link, y + 1, Stone::Black).unwrap();
        }
    }
    let group = connected_group(&b, 0, 0).unwrap();
    assert_eq!(group.len(), b.stone_count(Stone::Black));
}

// =============================================================================
// Territory and Scoring
// =============================================================================

#[test]
fn test_black_only_border_is_black_territory() {
    let b = board(&[
        ".X...",
        "XX...",
        ".....",
        "...OO",
        "...O.",
    ]);
    let t = classify_territory(&b);
    // Corner (0,0) is black; (4,4) is white; the middle touches both.
    assert_eq!(t, Territory { black: 1, white: 1 });
}

#[test]
fn test_rules_diverge_after_capture() {
    let mut b = board(&[
        ".X...",
        "XOX..",
        ".....",
        ".....",
        "....O",
    ]);
    let mut captures = Captures::default();
    let result = apply_move(&mut b, 1, 2, Stone::Black).unwrap();
    captures.add(Stone::Black, result.count());
    assert_eq!(captures.by_black, 1);

    let chinese = score(&b, &captures, ScoringRule::Chinese);
    let japanese = score(&b, &captures, ScoringRule::Japanese);
    assert_ne!(chinese, japanese);
    // (0,0) and the captured point (1,1) are black territory.
    assert_eq!(chinese, Score { black: 2 + 4, white: 1 });
    assert_eq!(japanese, Score { black: 2 + 1, white: 0 });
}

#[test]
fn test_score_twice_same_result() {
    let b = board(&[
        "X.O",
        "X.O",
        ".XO",
    ]);
    let captures = Captures { by_black: 1, by_white: 2 };
    for rule in ScoringRule::ALL {
        assert_eq!(score(&b, &captures, rule), score(&b, &captures, rule));
    }
}
