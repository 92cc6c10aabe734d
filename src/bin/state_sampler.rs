use clap::Parser;
use log::{error, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::process;
use tile_solver::engine::State;
use tile_solver::enumerate::{enumerate_states, enumerate_states_confirmed, state_count};
use tile_solver::sampling::sample_k_valid_states;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Enumerate every puzzle state and sample ones with no adjacent odd tiles", long_about = None)]
struct Args {
    /// Grid side length n
    #[clap(short = 'n', long, default_value_t = 3)]
    side: usize,

    /// Number of valid states to sample
    #[clap(short = 'k', long, default_value_t = 10)]
    count: usize,

    /// Seed for the sampler. A random seed is used if omitted
    #[clap(short, long)]
    seed: Option<u64>,

    /// Allow enumerating grids of side 4 or more
    #[clap(long)]
    confirm_large: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let enumerator = if args.confirm_large {
        enumerate_states_confirmed(args.side)
    } else {
        enumerate_states(args.side)
    };
    let enumerator = enumerator.unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(2);
    });

    info!(
        "Enumerating {} states of the {}x{} grid...",
        state_count(args.side).map_or_else(|| "too many".to_string(), |c| c.to_string()),
        args.side,
        args.side
    );
    let states: Vec<State> = enumerator.collect();
    info!("Generated {} states", states.len());

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    match sample_k_valid_states(states, args.count, &mut rng) {
        Ok(sample) => {
            println!("{} states with no adjacent odd tiles:\n", sample.len());
            for (i, state) in sample.iter().enumerate() {
                println!("State {}: {:?}\n{}\n", i + 1, state.tiles(), state);
            }
        }
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}
