//! Move legality for every piece type.

use crate::board::{
    generate_moves, Board, Color, Game, GameBuilder, Move, Piece, Square, Validation,
};

fn diagram(rows: [&str; 8]) -> Game {
    Game::from_board(Board::from_rows(&rows).unwrap(), Color::White)
}

#[test]
fn test_no_piece_may_capture_own_color_or_leave_board() {
    let friends = [
        Square(3, 3),
        Square(3, 4),
        Square(3, 5),
        Square(4, 3),
        Square(4, 5),
        Square(5, 3),
        Square(5, 4),
        Square(5, 5),
        Square(2, 3),
        Square(6, 5),
    ];
    let off_board = [Square(8, 4), Square(4, 8), Square(9, 9), Square(usize::MAX, 0)];

    for piece in Piece::ALL {
        let mut builder = GameBuilder::new()
            .piece(Square(0, 0), Color::Black, Piece::King)
            .piece(Square(4, 4), Color::White, piece);
        if piece != Piece::King {
            builder = builder.piece(Square(7, 7), Color::White, Piece::King);
        }
        for &sq in &friends {
            builder = builder.piece(sq, Color::White, Piece::Pawn);
        }
        let game = builder.build();

        for sq in Square::all().filter(|&sq| game.board().is_color(sq, Color::White)) {
            for mode in [Validation::Legal, Validation::Pseudo] {
                assert!(
                    !game.is_valid_move_with(Square(4, 4), sq, Color::White, mode),
                    "{piece:?} captured own piece on {sq}"
                );
            }
        }
        for &sq in &off_board {
            assert!(!game.is_valid_move(Square(4, 4), sq, Color::White));
        }
    }
}

#[test]
fn test_knight_cannot_move_straight() {
    let game = Game::default();
    assert!(!game.is_valid_move(Square(7, 6), Square(5, 6), Color::White));
    assert!(game.is_valid_move(Square(7, 6), Square(5, 5), Color::White));
}

#[test]
fn test_rook_cannot_jump() {
    let game = diagram([
        "rnbqkbnr", "pppppppp", "........", "P.......", "........", "........", ".PPPPPPP",
        "RNBQKBNR",
    ]);
    assert!(game.is_valid_move(Square(7, 0), Square(4, 0), Color::White));
    assert!(!game.is_valid_move(Square(7, 0), Square(2, 0), Color::White));
    assert!(!game.is_valid_move(Square(7, 0), Square(3, 0), Color::White));
}

#[test]
fn test_pawn_double_step_only_from_start() {
    let game = diagram([
        "rnbqkbnr", "pppppppp", "........", "P.......", "........", "........", ".PPPPPPP",
        "RNBQKBNR",
    ]);
    assert!(!game.is_valid_move(Square(3, 0), Square(1, 0), Color::White));
    assert!(game.is_valid_move(Square(3, 0), Square(2, 0), Color::White));
    assert!(game.is_valid_move(Square(6, 1), Square(4, 1), Color::White));
}

#[test]
fn test_pawn_cannot_capture_forward() {
    let game = diagram([
        "....k...", "........", "........", "....p...", "....P...", "........", "........",
        "....K...",
    ]);
    assert!(!game.is_valid_move(Square(4, 4), Square(3, 4), Color::White));
    assert!(!game.is_valid_move(Square(3, 4), Square(4, 4), Color::Black));
}

#[test]
fn test_king_cannot_step_into_attack() {
    let game = diagram([
        "...rk...", "........", "........", "........", "........", "........", "........",
        "....K...",
    ]);
    assert!(!game.is_valid_move(Square(7, 4), Square(7, 3), Color::White));
    assert!(!game.is_valid_move(Square(7, 4), Square(6, 3), Color::White));
    assert!(game.is_valid_move(Square(7, 4), Square(7, 5), Color::White));
    assert!(game.is_valid_move_with(Square(7, 4), Square(7, 3), Color::White, Validation::Pseudo));
}

#[test]
fn test_king_cannot_hide_behind_itself() {
    let game = diagram([
        "....k...", "........", "........", "........", "........", "........", "........",
        "r.....K.",
    ]);
    assert!(game.is_in_check(Color::White));
    assert!(!game.is_valid_move(Square(7, 6), Square(7, 7), Color::White));
    assert!(game.is_valid_move(Square(7, 6), Square(6, 6), Color::White));
}

#[test]
fn test_moves_out_of_turn_still_judged_by_color() {
    let game = Game::default();
    assert!(game.is_valid_move(Square(1, 4), Square(3, 4), Color::Black));
    assert!(!game.is_valid_move(Square(1, 4), Square(3, 4), Color::White));
}

#[test]
fn test_crowded_position_keeps_every_move() {
    let game =
        Game::from_fen("kQQQQQQQ/1Q5Q/1Q5Q/1Q5Q/Q6Q/Q6Q/Q6Q/QQQQQQQK w - - 0 1").unwrap();
    let moves = generate_moves(game.board(), Color::White);

    let mut pseudo = 0;
    for (from, _) in game.board().pieces_of(Color::White) {
        for to in Square::all() {
            if game.is_valid_move_with(from, to, Color::White, Validation::Pseudo) {
                assert!(moves.contains(Move::new(from, to)), "{from}{to}");
                pseudo += 1;
            }
        }
    }
    assert_eq!(moves.len(), 272);
    assert_eq!(pseudo, moves.len());
}
