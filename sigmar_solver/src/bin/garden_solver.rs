use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use sigmar_solver::engine::Board;
use sigmar_solver::generator::deal;
use sigmar_solver::heuristics::MoveOrdering;
use sigmar_solver::solver::{solve_with_config, SearchStrategy, SolverConfig};
use sigmar_solver::tile::Tile;
use sigmar_solver::utils::board_from_str;
use std::fs;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyArg {
    Recursive,
    Iterative,
    Parallel,
}

impl From<StrategyArg> for SearchStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Recursive => SearchStrategy::Recursive,
            StrategyArg::Iterative => SearchStrategy::Iterative,
            StrategyArg::Parallel => SearchStrategy::Parallel,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OrderingArg {
    Heuristic,
    Generation,
}

impl From<OrderingArg> for MoveOrdering {
    fn from(arg: OrderingArg) -> Self {
        match arg {
            OrderingArg::Heuristic => MoveOrdering::Heuristic,
            OrderingArg::Generation => MoveOrdering::Generation,
        }
    }
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the board file (one symbol per cell, whitespace ignored)
    #[clap(required_unless_present = "seed")]
    board_file: Option<PathBuf>,

    /// Solve a generated board instead of reading a file
    #[clap(short, long, conflicts_with = "board_file")]
    seed: Option<u64>,

    /// Search driver
    #[clap(long, value_enum, default_value = "recursive")]
    strategy: StrategyArg,

    /// Order in which candidate moves are tried
    #[clap(long, value_enum, default_value = "heuristic")]
    ordering: OrderingArg,

    /// Metal that is currently matchable, as its board symbol (e.g. `T` for tin)
    #[clap(long, value_parser = parse_metal)]
    active_metal: Option<Tile>,
}

fn parse_metal(s: &str) -> Result<Tile, String> {
    let mut chars = s.chars();
    match (chars.next().and_then(Tile::from_char), chars.next()) {
        (Some(tile), None) if tile.is_metal() => Ok(tile),
        _ => Err(format!("'{}' is not a metal symbol (L, T, I, C, S, G)", s)),
    }
}

fn load_board(args: &Args) -> Result<Board> {
    let mut board = match (&args.board_file, args.seed) {
        (_, Some(seed)) => deal(seed).with_context(|| format!("Failed to deal seed {}", seed))?,
        (Some(path), None) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?;
            board_from_str(&content)
                .with_context(|| format!("Invalid board in {}", path.display()))?
        }
        (None, None) => bail!("either a board file or --seed is required"),
    };
    if let Some(metal) = args.active_metal {
        board.set_active_metal(Some(metal));
    }
    Ok(board)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let board = load_board(&args)?;
    println!("Initial board state:\n{}\n", board);

    let config = SolverConfig {
        strategy: args.strategy.into(),
        ordering: args.ordering.into(),
    };
    println!("Searching for a solution ({:?}, {:?})...\n", config.strategy, config.ordering);

    match solve_with_config(&board, &config) {
        Some(solution) => {
            println!("Solution found:\n");
            println!("Moves ({}):", solution.moves.len());
            if solution.moves.is_empty() {
                println!("  Board is already clear.");
            }
            for (i, mv) in solution.moves.iter().enumerate() {
                println!("  Move {}: {}", i + 1, mv);
            }
            println!("\nBoards visited: {}", solution.states_visited);
        }
        None => println!("No solution exists.\n"),
    }
    Ok(())
}
