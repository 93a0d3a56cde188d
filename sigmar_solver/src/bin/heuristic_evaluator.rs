use anyhow::Result;
use clap::Parser;
use log::warn;
use sigmar_solver::generator::deal;
use sigmar_solver::heuristics::MoveOrdering;
use sigmar_solver::solver::{solve_with_config, SearchStrategy, SolverConfig};
use std::ops::Range;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of generated boards to evaluate
    #[clap(short, long, default_value_t = 20)]
    boards: u64,

    /// Seed of the first board
    #[clap(long, default_value_t = 0)]
    start_seed: u64,

    /// Also evaluate plain generation order (can be very slow on full boards)
    #[clap(long)]
    include_generation: bool,
}

fn label(config: &SolverConfig) -> String {
    format!("{:?}/{:?}", config.strategy, config.ordering)
}

/// Seeds to evaluate, clamped at `u64::MAX`.
fn seed_range(start: u64, count: u64) -> Range<u64> {
    start..start.saturating_add(count)
}

#[derive(Default)]
struct Tally {
    solved: u32,
    states: usize,
    elapsed: Duration,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut configs = Vec::new();
    let mut orderings = vec![MoveOrdering::Heuristic];
    if args.include_generation {
        orderings.push(MoveOrdering::Generation);
    }
    for ordering in orderings {
        for strategy in [SearchStrategy::Recursive, SearchStrategy::Iterative, SearchStrategy::Parallel] {
            configs.push(SolverConfig { strategy, ordering });
        }
    }
    let mut tallies: Vec<Tally> = configs.iter().map(|_| Tally::default()).collect();

    println!("Starting evaluation on {} boards...", args.boards);

    for seed in seed_range(args.start_seed, args.boards) {
        let board = deal(seed)?;
        println!("\nEvaluating board with seed {}", seed);

        for (config, tally) in configs.iter().zip(tallies.iter_mut()) {
            let started = Instant::now();
            let result = solve_with_config(&board, config);
            let elapsed = started.elapsed();
            tally.elapsed += elapsed;

            match result {
                Some(solution) => {
                    tally.solved += 1;
                    tally.states += solution.states_visited;
                    println!(
                        "  {:<22} moves: {:<3} boards: {:<8} time: {:?}",
                        label(config),
                        solution.moves.len(),
                        solution.states_visited,
                        elapsed
                    );
                }
                None => warn!(
                    "{} found no solution for seed {}, which should be solvable",
                    label(config),
                    seed
                ),
            }
        }
    }

    println!("\n--- Evaluation Complete ---");
    for (config, tally) in configs.iter().zip(&tallies) {
        let avg_states = if tally.solved == 0 {
            0.0
        } else {
            tally.states as f64 / tally.solved as f64
        };
        println!(
            "{:<22} solved: {}/{} avg boards: {:.1} total time: {:?}",
            label(config),
            tally.solved,
            args.boards,
            avg_states,
            tally.elapsed
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_range_counts_boards() {
        assert_eq!(seed_range(3, 4), 3..7);
        assert_eq!(seed_range(0, 0).count(), 0);
    }

    #[test]
    fn test_seed_range_saturates() {
        assert_eq!(seed_range(u64::MAX - 1, 10), u64::MAX - 1..u64::MAX);
        assert_eq!(seed_range(u64::MAX, 1).count(), 0);
    }
}
