use anyhow::{Context, Result};
use clap::Parser;
use sigmar_solver::engine::{Game, Move};
use sigmar_solver::generator::deal;
use sigmar_solver::solver::solve;
use sigmar_solver::utils::board_from_str;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Seed of the generated board to play
    #[clap(short, long, default_value_t = 0)]
    seed: u64,

    /// Play a board read from a file instead of a generated one
    #[clap(short, long)]
    board_file: Option<PathBuf>,
}

fn print_moves(moves: &[Move]) {
    for (i, mv) in moves.iter().enumerate() {
        println!("  [{}] {}", i + 1, mv);
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let board = match &args.board_file {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?;
            board_from_str(&content).with_context(|| format!("Invalid board in {}", path.display()))?
        }
        None => deal(args.seed)?,
    };
    let mut game = Game::new_with_board(board);
    println!("Welcome to the alchemical garden!");

    loop {
        println!("---------------------");
        println!(
            "Steps: {}, Tiles left: {}, Active metal: {:?}",
            game.steps(),
            game.board().tile_count(),
            game.board().active_metal()
        );
        println!("{}\n", game.board());

        if game.is_won() {
            println!("The garden is clear in {} moves!", game.steps());
            break;
        }

        let moves = game.board().get_moves();
        if moves.is_empty() {
            println!("No moves left. Enter 'u' to undo or 'q' to quit.");
        } else {
            println!("Legal moves:");
            print_moves(&moves);
        }

        print!("Enter a move number, 'h' for a hint, 'u' to undo, 'q' to quit: ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }

        match input.trim() {
            "q" => {
                println!("Thanks for playing!");
                break;
            }
            "u" => {
                if game.undo_last_move() {
                    println!("Move undone.");
                } else {
                    println!("Nothing to undo.");
                }
            }
            "h" => match solve(game.board()) {
                Some(solution) => match solution.moves.first() {
                    Some(mv) => println!("Hint: {}", mv),
                    None => println!("The board is already clear."),
                },
                None => println!("No solution from here; try undoing."),
            },
            other => match other.parse::<usize>() {
                Ok(n) if (1..=moves.len()).contains(&n) => {
                    if let Err(err) = game.play(&moves[n - 1]) {
                        println!("{}", err);
                    }
                }
                _ => println!("Invalid input: enter a number between 1 and {}.", moves.len()),
            },
        }
    }
    Ok(())
}
