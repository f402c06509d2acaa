//! Game Flow Integration Tests
//!
//! Tests for full game flows including:
//! - Turn alternation
//! - Board mutation after accepted moves
//! - Castling execution
//! - King capture ending the game

use kchess_rules::{
    Board, CastleSide, ClickOutcome, Game, GameStatus, Piece, PieceKind, RulesError, Square, Team,
};

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col).expect("valid square")
}

fn play(game: &mut Game, moves: &[((u8, u8), (u8, u8))]) {
    for &((fr, fc), (tr, tc)) in moves {
        game.make_move(sq(fr, fc), sq(tr, tc))
            .unwrap_or_else(|e| panic!("({fr}, {fc}) -> ({tr}, {tc}) rejected: {e}"));
    }
}

// ============================================================================
// Turn Alternation Tests
// ============================================================================

#[test]
fn test_white_moves_first() {
    let mut game = Game::new();

    assert_eq!(game.to_move(), Team::White);
    assert!(game.make_move(sq(1, 4), sq(3, 4)).is_err());
    assert!(game.make_move(sq(6, 4), sq(4, 4)).is_ok());
    assert_eq!(game.to_move(), Team::Black);
}

#[test]
fn test_rejected_move_keeps_turn() {
    let mut game = Game::new();
    play(&mut game, &[((6, 4), (4, 4))]);

    let before = game.board().clone();
    assert!(game.make_move(sq(0, 3), sq(4, 7)).is_err(), "queen is boxed in");
    assert_eq!(game.board(), &before);
    assert_eq!(game.to_move(), Team::Black);
}

// ============================================================================
// Board Mutation Tests
// ============================================================================

#[test]
fn test_move_changes_board_state() {
    let mut game = Game::new();

    play(&mut game, &[((6, 4), (4, 4))]);

    let board = game.board();
    assert!(board.is_empty(sq(6, 4)));
    assert_eq!(
        board.occupant(sq(4, 4)),
        Some(Piece::new(Team::White, PieceKind::Pawn))
    );
    assert!(board.has_moved(sq(4, 4)));
    assert!(!board.has_moved(sq(6, 4)));
}

#[test]
fn test_moved_pawn_loses_double_step() {
    let mut game = Game::new();
    play(&mut game, &[((6, 0), (5, 0)), ((1, 7), (2, 7))]);

    assert!(!game.is_legal(sq(5, 0), sq(3, 0)));
    assert!(game.is_legal(sq(5, 0), sq(4, 0)));
}

#[test]
fn test_capture_reports_victim() {
    let mut game = Game::new();
    play(&mut game, &[((6, 4), (4, 4)), ((1, 3), (3, 3))]);

    let outcome = game.make_move(sq(4, 4), sq(3, 3)).unwrap();

    assert_eq!(
        outcome.captured,
        Some(Piece::new(Team::Black, PieceKind::Pawn))
    );
    assert_eq!(outcome.status, GameStatus::InProgress);
}

// ============================================================================
// Castling Tests
// ============================================================================

#[test]
fn test_castle_queenside_moves_rook() {
    let mut game = Game::new();
    // Clear b1, c1, d1 for White: knight out, pawn d2-d3 frees the bishop, queen out
    play(
        &mut game,
        &[
            ((7, 1), (5, 0)),
            ((1, 0), (2, 0)),
            ((6, 3), (5, 3)),
            ((1, 1), (2, 1)),
            ((7, 2), (5, 4)),
            ((1, 2), (2, 2)),
            ((7, 3), (6, 3)),
            ((1, 3), (2, 3)),
        ],
    );

    let outcome = game.make_move(sq(7, 4), sq(7, 2)).unwrap();
    let castling = outcome.mv.castling.expect("castle reported");
    assert_eq!(castling.side, CastleSide::Queenside);

    let board = game.board();
    assert_eq!(
        board.occupant(sq(7, 2)),
        Some(Piece::new(Team::White, PieceKind::King))
    );
    assert_eq!(
        board.occupant(sq(7, 3)),
        Some(Piece::new(Team::White, PieceKind::Rook))
    );
    assert!(board.is_empty(sq(7, 0)));
    assert!(board.is_empty(sq(7, 4)));
    assert!(board.has_moved(sq(7, 2)));
    assert!(board.has_moved(sq(7, 3)));
    assert_eq!(game.to_move(), Team::Black);
}

#[test]
fn test_castle_kingside_moves_rook() {
    let mut board = Board::empty();
    board.place(sq(0, 4), Piece::new(Team::Black, PieceKind::King));
    board.place(sq(0, 7), Piece::new(Team::Black, PieceKind::Rook));
    board.place(sq(7, 4), Piece::new(Team::White, PieceKind::King));
    let mut game = Game::with_board(board, Team::Black);

    let outcome = game.make_move(sq(0, 4), sq(0, 6)).unwrap();
    assert_eq!(
        outcome.mv.castling.map(|c| c.side),
        Some(CastleSide::Kingside)
    );
    assert_eq!(
        game.board().occupant(sq(0, 5)),
        Some(Piece::new(Team::Black, PieceKind::Rook))
    );
    assert!(game.board().is_empty(sq(0, 7)));
}

#[test]
fn test_legality_check_does_not_castle() {
    //! Asking whether a castle is legal must not move anything.
    let mut board = Board::empty();
    board.place(sq(7, 4), Piece::new(Team::White, PieceKind::King));
    board.place(sq(7, 0), Piece::new(Team::White, PieceKind::Rook));
    board.place(sq(0, 4), Piece::new(Team::Black, PieceKind::King));
    let mut game = Game::with_board(board.clone(), Team::White);

    assert!(game.is_legal(sq(7, 4), sq(7, 2)));
    assert!(game.is_legal(sq(7, 4), sq(7, 2)));
    assert_eq!(game.board(), &board);

    // A following plain king step carries no rook relocation
    let outcome = game.make_move(sq(7, 4), sq(6, 4)).unwrap();
    assert!(outcome.mv.castling.is_none());
    assert_eq!(
        game.board().occupant(sq(7, 0)),
        Some(Piece::new(Team::White, PieceKind::Rook))
    );
}

#[test]
fn test_castling_rights_lost_after_king_returns() {
    let mut board = Board::empty();
    board.place(sq(7, 4), Piece::new(Team::White, PieceKind::King));
    board.place(sq(7, 7), Piece::new(Team::White, PieceKind::Rook));
    board.place(sq(0, 0), Piece::new(Team::Black, PieceKind::King));
    let mut game = Game::with_board(board, Team::White);

    play(
        &mut game,
        &[((7, 4), (6, 4)), ((0, 0), (0, 1)), ((6, 4), (7, 4)), ((0, 1), (0, 0))],
    );

    assert!(!game.is_legal(sq(7, 4), sq(7, 6)));
}

// ============================================================================
// Game Over Tests
// ============================================================================

#[test]
fn test_king_capture_ends_game() {
    let mut board = Board::empty();
    board.place(sq(7, 4), Piece::new(Team::White, PieceKind::King));
    board.place(sq(4, 4), Piece::new(Team::White, PieceKind::Rook));
    board.place(sq(0, 4), Piece::new(Team::Black, PieceKind::King));
    let mut game = Game::with_board(board, Team::White);
    assert!(!game.is_game_over());

    let outcome = game.make_move(sq(4, 4), sq(0, 4)).unwrap();

    assert_eq!(
        outcome.captured,
        Some(Piece::new(Team::Black, PieceKind::King))
    );
    assert!(game.is_game_over());
    assert_eq!(game.winner(), Some(Team::White));
    assert_eq!(
        outcome.status,
        GameStatus::Ended {
            winner: Some(Team::White)
        }
    );
}

#[test]
fn test_no_moves_after_game_over() {
    let mut board = Board::empty();
    board.place(sq(7, 4), Piece::new(Team::White, PieceKind::King));
    board.place(sq(1, 4), Piece::new(Team::White, PieceKind::Queen));
    board.place(sq(0, 4), Piece::new(Team::Black, PieceKind::King));
    board.place(sq(0, 0), Piece::new(Team::Black, PieceKind::Rook));
    let mut game = Game::with_board(board, Team::White);

    play(&mut game, &[((1, 4), (0, 4))]);

    assert_eq!(
        game.make_move(sq(0, 0), sq(7, 0)),
        Err(RulesError::GameOver)
    );
    assert_eq!(game.click(sq(0, 0)), ClickOutcome::Ignored);
    assert!(!game.attempt_move(0, 0, 7, 0));
}

#[test]
fn test_fools_line_to_king_capture() {
    //! Without check rules the game only ends when the king is taken.
    let mut game = Game::new();
    play(
        &mut game,
        &[
            ((6, 5), (5, 5)),
            ((1, 4), (3, 4)),
            ((6, 6), (4, 6)),
            ((0, 3), (4, 7)),
        ],
    );
    assert!(!game.is_game_over(), "checkmate is not game over here");

    // White ignores the threat
    play(&mut game, &[((6, 0), (5, 0))]);
    let outcome = game.make_move(sq(4, 7), sq(7, 4)).unwrap();

    assert_eq!(outcome.status.winner(), Some(Team::Black));
    assert!(game.is_game_over());
}

#[test]
fn test_reset_after_game_over() {
    let mut game = Game::with_board(Board::empty(), Team::White);
    assert!(game.is_game_over());

    game.reset();
    assert!(!game.is_game_over());
    assert_eq!(game.board(), &Board::new());
}

// ============================================================================
// Fail-Closed Coordinate Tests
// ============================================================================

#[test]
fn test_out_of_range_is_illegal() {
    let mut game = Game::new();

    assert!(!kchess_rules::is_legal_coords(game.board(), 6, 4, 8, 4));
    assert!(!game.attempt_move(6, 4, 8, 4));
    assert!(!game.attempt_move(-1, -1, 5, 4));
    assert_eq!(game.to_move(), Team::White);
    assert_eq!(game.board(), &Board::new());
}
