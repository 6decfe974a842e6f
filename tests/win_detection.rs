//! Win detector properties across every line pattern

use oxo::{Board, Cell, LINE_MASKS, Outcome, Player, detect};

fn board_from_mask(mask: u16, cell: Cell) -> Board {
    let mut board = Board::new();
    for pos in 0..9 {
        if mask & (1 << pos) != 0 {
            board.cells[pos] = cell;
        }
    }
    board
}

mod line_patterns {
    use super::*;

    #[test]
    fn every_pattern_wins_for_x() {
        for &line in &LINE_MASKS {
            let board = board_from_mask(line, Cell::X);
            assert_eq!(
                detect(&board),
                Outcome::Win {
                    player: Player::X,
                    line
                },
                "pattern {line:#011b} should win for X"
            );
        }
    }

    #[test]
    fn every_pattern_wins_for_o() {
        for &line in &LINE_MASKS {
            let board = board_from_mask(line, Cell::O);
            assert_eq!(
                detect(&board),
                Outcome::Win {
                    player: Player::O,
                    line
                },
                "pattern {line:#011b} should win for O"
            );
        }
    }

    #[test]
    fn reported_line_matches_the_occupied_cells() {
        for &line in &LINE_MASKS {
            let board = board_from_mask(line, Cell::X);
            let Outcome::Win { line: reported, .. } = detect(&board) else {
                panic!("expected a win for pattern {line:#011b}");
            };
            for pos in 0..9 {
                if reported & (1 << pos) != 0 {
                    assert_eq!(board.get(pos), Cell::X);
                }
            }
        }
    }
}

mod boundaries {
    use super::*;

    #[test]
    fn empty_board_is_in_progress() {
        assert_eq!(detect(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn full_board_without_a_line_is_a_tie() {
        let board = Board::from_string("XOOOXXOXO").unwrap();
        assert_eq!(detect(&board), Outcome::Tie);
    }

    #[test]
    fn another_full_board_without_a_line_is_a_tie() {
        let board = Board::from_string("OOXXXOOXO").unwrap();
        assert_eq!(detect(&board), Outcome::Tie);
    }

    #[test]
    fn detection_is_idempotent() {
        let boards = [
            Board::new(),
            Board::from_string("XX.O.....").unwrap(),
            Board::from_string("XOOOXXOXO").unwrap(),
            Board::from_string("XXX.OO.O.").unwrap(),
        ];
        for board in boards {
            assert_eq!(detect(&board), detect(&board));
        }
    }
}

mod malformed_double_wins {
    use super::*;

    // Boards with complete lines for both players cannot arise from legal
    // play, but the detector must still answer deterministically: first
    // match in pattern order, X before O inside each pattern.

    #[test]
    fn pattern_order_decides_between_disjoint_columns() {
        // X fills the left column, O fills the right; columns scan
        // left-to-right
        let board = Board::from_string("X.OX.OX.O").unwrap();
        assert_eq!(
            detect(&board),
            Outcome::Win {
                player: Player::X,
                line: 0b001_001_001
            }
        );
    }

    #[test]
    fn earlier_pattern_wins_even_for_the_second_player() {
        // O on the top row beats X on the middle row: no column completes,
        // and the top row is scanned before the middle row
        let board = Board::from_string("OOOXXX...").unwrap();
        assert_eq!(
            detect(&board),
            Outcome::Win {
                player: Player::O,
                line: 0b000_000_111
            }
        );
    }

    #[test]
    fn pattern_precedence_dominates_player_precedence() {
        // O holds the left column, X the right: scanning player-first would
        // hand this to X, but the left column is the earlier pattern
        let board = Board::from_string("O.XO.XO.X").unwrap();
        assert_eq!(
            detect(&board),
            Outcome::Win {
                player: Player::O,
                line: 0b001_001_001
            }
        );
    }
}
