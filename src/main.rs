use std::env;
use std::io::{self, BufRead};
use std::sync::Arc;
use std::time::Instant;

use chess_opponent::board::{Difficulty, SearchIterationInfo};
use chess_opponent::GameSession;

fn print_board(session: &GameSession) {
    println!("{}", session.position());
    println!("Black win probability: {}%", session.black_win_probability());
}

fn main() {
    env_logger::init();

    let difficulty = match env::args().nth(1).map(|arg| arg.parse::<Difficulty>()) {
        Some(Ok(level)) => level,
        Some(Err(err)) => {
            eprintln!("{err}");
            return;
        }
        None => Difficulty::default(),
    };

    let mut session = GameSession::new(difficulty.profile());
    session.set_progress_callback(Arc::new(|info: &SearchIterationInfo| {
        println!(
            "  depth {} score {} best {} nodes {} ({} ms)",
            info.depth, info.score, info.best_move, info.nodes, info.time_ms
        );
    }));

    println!("Playing White against the {difficulty} engine.");
    println!("Enter moves like e2e4, or: new, resign, quit");
    print_board(&session);

    let stdin = io::stdin();
    let mut prompt_started = Instant::now();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let human = session.human_side();
        match line.trim() {
            "" => continue,
            "quit" => break,
            "new" => {
                session.new_game();
                print_board(&session);
                prompt_started = Instant::now();
                continue;
            }
            "resign" => session.resign(human),
            text => {
                session.charge_clock(human, prompt_started.elapsed().as_millis() as u64);
                if let Err(err) = session.play_human_move(text) {
                    println!("{err}");
                    continue;
                }
                if let Some(pending) = session.spawn_engine_search() {
                    match session.complete_engine_search(pending) {
                        Some(mv) => println!("Engine plays {mv}"),
                        None => println!("Engine has no move"),
                    }
                }
                print_board(&session);
            }
        }

        if let Some(outcome) = session.outcome() {
            println!("{outcome}. Type 'new' to play again or 'quit'.");
        } else if session.status().is_over() {
            println!("Game over.");
        }
        prompt_started = Instant::now();
    }
}
