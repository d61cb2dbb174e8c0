use std::env;

use chess_bot::board::{Game, Move};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: check_mate_status <move1> <move2> ...");
        return;
    }

    let mut game = Game::default();
    for text in args.iter().skip(1) {
        let mv: Move = match text.parse() {
            Ok(mv) => mv,
            Err(err) => {
                eprintln!("{text}: {err}");
                return;
            }
        };
        let side = game.side_to_move();
        if !game.is_valid_move(mv.from(), mv.to(), side) {
            eprintln!("{text}: illegal for {side}");
            return;
        }
        if let Err(err) = game.move_piece(mv.from(), mv.to()) {
            eprintln!("{text}: {err}");
            return;
        }
    }

    let side = game.side_to_move();
    let legal_moves = game.legal_moves(side);
    println!("side_to_move: {}", side.to_string().to_lowercase());
    println!("legal_moves: {}", legal_moves.len());
    println!("check: {}", game.is_in_check(side));
    println!("checkmate: {}", game.is_in_checkmate(side));
    println!("stalemate: {}", game.is_stalemate(side));
    for mv in &legal_moves {
        println!("{mv}");
    }
}
