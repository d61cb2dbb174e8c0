use std::env;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;

use chess_bot::board::{Color, Game, GameMode, GameStatus, Move, Square};
use chess_bot::bot::{random_thinking_delay, BotController, BotPlayer};

/// Environment variable selecting the log level (`trace`, `debug`, ...)
const LOG_ENV: &str = "CHESS_BOT_LOG";

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging() {
    let Ok(level) = env::var(LOG_ENV) else {
        return;
    };
    let filter = level.parse().unwrap_or(LevelFilter::Debug);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(filter);
    }
}

fn parse_mode(arg: Option<&str>) -> Option<GameMode> {
    match arg {
        None | Some("computer") => Some(GameMode::AgainstComputer {
            bot_color: Color::Black,
        }),
        Some("friend") => Some(GameMode::AgainstFriend),
        Some(_) => None,
    }
}

fn print_help() {
    println!("Enter moves as e2e4, e2-e4 or row/col digits (6444).");
    println!("Other commands: moves <square>, history, fen, new, help, quit");
}

/// Print the status after a move; true when the game is over.
fn report(game: &Game) -> bool {
    println!("{}", game.board());
    match game.status() {
        GameStatus::Checkmate(loser) => {
            println!("Checkmate! {} wins.", loser.opponent());
            true
        }
        GameStatus::Check(color) => {
            println!("{color} is in check.");
            false
        }
        GameStatus::Ongoing => {
            let side = game.side_to_move();
            if game.legal_moves(side).is_empty() {
                println!("{side} has no legal moves. Game over.");
                return true;
            }
            false
        }
    }
}

fn bot_turn(controller: &mut BotController) -> bool {
    println!("Bot is thinking...");
    let delay = random_thinking_delay(&mut rand::thread_rng());
    if let Err(err) = controller.request_move(delay) {
        eprintln!("{err}");
        return true;
    }
    match controller.wait() {
        Some(Ok(Some(record))) => {
            println!("Bot played {record}");
            report(&controller.game().lock())
        }
        Some(Ok(None)) | None => {
            println!("Bot has no move. Game over.");
            true
        }
        Some(Err(err)) => {
            eprintln!("{err}");
            true
        }
    }
}

fn human_turn(game: &Arc<Mutex<Game>>, line: &str) -> bool {
    let mut game = game.lock();
    let side = game.side_to_move();
    let mv: Move = match line.parse() {
        Ok(mv) => mv,
        Err(err) => {
            println!("{err}");
            return false;
        }
    };
    if !game.is_valid_move(mv.from(), mv.to(), side) {
        println!("Illegal move {mv} for {side}.");
        return false;
    }
    match game.move_piece(mv.from(), mv.to()) {
        Ok(record) => {
            println!("{record}");
            report(&game)
        }
        Err(err) => {
            println!("{err}");
            false
        }
    }
}

fn main() {
    init_logging();

    let args: Vec<String> = env::args().collect();
    let Some(mode) = parse_mode(args.get(1).map(String::as_str)) else {
        eprintln!("usage: chess_bot [computer|friend]");
        return;
    };

    let game = Arc::new(Mutex::new(Game::new(mode)));
    let mut controller = mode
        .bot_color()
        .map(|color| BotController::new(Arc::clone(&game), BotPlayer::new(color)));

    print_help();
    println!("{}", game.lock().board());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut over = false;
    loop {
        if !over && game.lock().is_bot_turn() {
            if let Some(controller) = controller.as_mut() {
                over = bot_turn(controller);
                continue;
            }
        }

        print!("{}> ", game.lock().side_to_move());
        let _ = io::stdout().flush();
        let Some(Ok(line)) = lines.next() else {
            break;
        };
        let line = line.trim();

        match line.split_whitespace().collect::<Vec<_>>().as_slice() {
            [] => {}
            ["quit" | "exit"] => break,
            ["help"] => print_help(),
            ["history"] => print!("{}", game.lock().history_text()),
            ["fen"] => println!("{}", game.lock().to_fen()),
            ["new"] => {
                game.lock().initialize_board();
                over = false;
                println!("{}", game.lock().board());
            }
            ["moves", square] => match square.parse::<Square>() {
                Ok(from) => {
                    let game = game.lock();
                    let targets: Vec<String> = game
                        .calculate_possible_moves(from, game.side_to_move())
                        .iter()
                        .map(Square::to_string)
                        .collect();
                    println!("{}", targets.join(" "));
                }
                Err(err) => println!("{err}"),
            },
            _ if over => println!("Game over. Type 'new' to play again."),
            _ => over = human_turn(&game, line),
        }
    }
}
