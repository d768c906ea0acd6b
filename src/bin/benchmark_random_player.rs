/// Benchmark MCTS against a random player
///
/// Plays seeded games between the MCTS AI and an opponent that picks
/// uniformly among legal columns, alternating who moves first.
///
/// This answers: "How much does the search actually improve over random play?"
use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use serde::Serialize;
use std::error::Error;

use connect_four_mcts::logging::setup_logging;
use connect_four_mcts::{
    apply_move, choose_move_with, create_board_empty, get_legal_moves, is_terminal, winner,
    MctsHyperparameters, Player,
};

#[derive(Parser, Debug)]
#[command(
    name = "benchmark-random-player",
    about = "Benchmark MCTS move selection against a uniformly random opponent"
)]
struct Args {
    /// Number of games to play
    #[arg(short, long, default_value_t = 20)]
    games: usize,

    /// Iterations per MCTS move
    #[arg(short = 's', long, default_value_t = 1_000)]
    simulations: usize,

    /// RNG seed for reproducible results
    #[arg(short = 'r', long, default_value_t = 2025)]
    seed: u64,

    /// Print the summary as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Debug, Default, Serialize)]
struct Summary {
    games: usize,
    simulations: usize,
    seed: u64,
    mcts_wins: usize,
    random_wins: usize,
    draws: usize,
    mean_game_length: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let _logger = setup_logging("info", None)?;

    log::info!("🎲 MCTS vs Random Player Benchmark");
    log::info!(
        "   Games: {}, Simulations: {}, Seed: {}",
        args.games,
        args.simulations,
        args.seed
    );

    if args.games == 0 {
        return Err("At least one game is required.".into());
    }

    let hyperparams = MctsHyperparameters {
        num_simulations: args.simulations,
        ..Default::default()
    };
    hyperparams.validate()?;

    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut summary = Summary {
        games: args.games,
        simulations: args.simulations,
        seed: args.seed,
        ..Default::default()
    };
    let mut total_moves = 0usize;

    for game_idx in 0..args.games {
        // MCTS opens the even games
        let mcts_player = if game_idx % 2 == 0 { Player::X } else { Player::O };
        let mut board = create_board_empty();
        let mut moves = 0usize;

        while !is_terminal(&board) {
            let column = if board.current_player() == mcts_player {
                choose_move_with(&board, &hyperparams, &mut rng)?.best_column
            } else {
                *get_legal_moves(&board)
                    .choose(&mut rng)
                    .ok_or("non-terminal board without legal moves")?
            };
            apply_move(&mut board, column)?;
            moves += 1;
        }
        total_moves += moves;

        match winner(&board) {
            Some(player) if player == mcts_player => summary.mcts_wins += 1,
            Some(_) => summary.random_wins += 1,
            None => summary.draws += 1,
        }
        log::debug!(
            "Game {}: MCTS as {}, winner {:?} after {} moves",
            game_idx + 1,
            mcts_player,
            winner(&board),
            moves
        );

        if (game_idx + 1) % 10 == 0 {
            log::info!("   Completed {}/{} games", game_idx + 1, args.games);
        }
    }
    summary.mean_game_length = total_moves as f64 / args.games as f64;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let win_rate = 100.0 * summary.mcts_wins as f64 / args.games as f64;
    println!("\n{}", "=".repeat(60));
    println!("===== MCTS vs Random Player =====");
    println!("Games played       : {}", summary.games);
    println!("Simulations / move : {}", summary.simulations);
    println!();
    println!("MCTS wins          : {} ({:.1}%)", summary.mcts_wins, win_rate);
    println!("Random wins        : {}", summary.random_wins);
    println!("Draws              : {}", summary.draws);
    println!("Mean game length   : {:.1} moves", summary.mean_game_length);
    println!("{}", "=".repeat(60));

    Ok(())
}
