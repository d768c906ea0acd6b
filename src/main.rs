// main.rs - human against the MCTS AI in the terminal
use clap::Parser;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use connect_four_mcts::logging::setup_logging;
use connect_four_mcts::{
    apply_move, create_board_empty, is_terminal, winner, Board, ConnectFourError,
    IllegalMoveReason, MctsEngine, MctsHyperparameters, Player, COLS,
};

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    /// Moves first
    X,
    O,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Player::X,
            Side::O => Player::O,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "connect_four_mcts",
    version,
    about = "Play Connect-4 against a Monte Carlo Tree Search AI"
)]
struct Config {
    /// Iterations per AI move (overrides the config file)
    #[arg(short = 's', long)]
    simulations: Option<usize>,

    /// RNG seed for a reproducible AI (overrides the config file)
    #[arg(short = 'r', long)]
    seed: Option<u64>,

    /// JSON file with MCTS hyperparameters
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Side played by the human
    #[arg(long, value_enum, default_value = "x")]
    human: Side,

    /// Print per-column search statistics after every AI move
    #[arg(long, default_value_t = false)]
    stats: bool,

    /// Print search statistics as JSON (implies --stats)
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Directory for rotated log files
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GameOutcome {
    Won(Player),
    Draw,
    /// Input ended before the game did
    Abandoned,
}

#[derive(Debug, Clone, Copy, Default)]
struct StatsOutput {
    table: bool,
    json: bool,
}

/// Reads lines until one names a legal column, applies it and returns it.
/// `None` means the input is exhausted.
fn read_human_move<R: BufRead, W: Write>(
    board: &mut Board,
    input: &mut R,
    out: &mut W,
) -> Result<Option<usize>, Box<dyn Error>> {
    loop {
        write!(out, "Enter column (1-{}): ", COLS)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let Some(column) = line.trim().parse::<usize>().ok().and_then(|n| n.checked_sub(1))
        else {
            writeln!(out, "Please enter a number between 1 and {}.", COLS)?;
            continue;
        };

        match apply_move(board, column) {
            Ok(_) => return Ok(Some(column)),
            Err(ConnectFourError::IllegalMove {
                reason: IllegalMoveReason::OutOfRange,
                ..
            }) => writeln!(out, "Please enter a number between 1 and {}.", COLS)?,
            Err(ConnectFourError::IllegalMove {
                reason: IllegalMoveReason::ColumnFull,
                ..
            }) => writeln!(out, "Column {} is full.", column + 1)?,
            Err(err) => return Err(err.into()),
        }
    }
}

fn play_game<R: BufRead, W: Write>(
    engine: &mut MctsEngine,
    human: Player,
    stats: StatsOutput,
    mut input: R,
    mut out: W,
) -> Result<GameOutcome, Box<dyn Error>> {
    let mut board = create_board_empty();
    writeln!(out, "You are {}", human)?;

    while !is_terminal(&board) {
        write!(out, "{}", board)?;
        writeln!(out)?;

        if board.current_player() == human {
            match read_human_move(&mut board, &mut input, &mut out)? {
                Some(column) => log::debug!("Human plays column {}", column),
                None => {
                    log::info!("Input closed, leaving the game");
                    return Ok(GameOutcome::Abandoned);
                }
            }
        } else {
            writeln!(out, "AI is thinking...")?;
            let result = engine.choose_move(&board)?;
            if stats.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
            } else if stats.table {
                writeln!(out, "{}", result)?;
            }
            apply_move(&mut board, result.best_column)?;
            writeln!(out, "AI plays column {}", result.best_column + 1)?;
        }
    }

    write!(out, "{}", board)?;
    let outcome = match winner(&board) {
        Some(player) => GameOutcome::Won(player),
        None => GameOutcome::Draw,
    };
    match outcome {
        GameOutcome::Won(player) if player == human => writeln!(out, "You win!")?,
        GameOutcome::Won(_) => writeln!(out, "AI wins!")?,
        _ => writeln!(out, "Draw.")?,
    }
    Ok(outcome)
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::parse();

    let _logger = setup_logging("info", config.log_dir.as_deref())?;

    let mut hyperparams = match &config.config {
        Some(path) => MctsHyperparameters::from_json_file(path)?,
        None => MctsHyperparameters::default(),
    };
    if let Some(simulations) = config.simulations {
        hyperparams.num_simulations = simulations;
    }
    if config.seed.is_some() {
        hyperparams.seed = config.seed;
    }
    log::info!("🎯 MCTS configuration: {}", hyperparams.to_config_string());

    let mut engine = MctsEngine::new(hyperparams)?;
    let stats = StatsOutput {
        table: config.stats || config.json,
        json: config.json,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = play_game(
        &mut engine,
        config.human.into(),
        stats,
        stdin.lock(),
        stdout.lock(),
    )?;
    log::info!("Game finished: {:?}", outcome);
    Ok(())
}
