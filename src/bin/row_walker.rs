use clap::Parser;
use log::{error, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::process;
use tile_solver::utils::state_from_str;
use tile_solver::walk::{row_divisibility_walk, DEFAULT_MAX_STEPS};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Randomly move odd tiles until every row is divisible", long_about = None)]
struct Args {
    /// Start state as a tile list, e.g. "7,2,4,5,0,6,8,3,1"
    start: String,

    /// Every row, read as a base-10 number, must be divisible by this
    #[clap(short, long, default_value_t = 3)]
    divisor: u64,

    /// Give up after this many steps
    #[clap(short, long, default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: usize,

    /// Seed for the walk. A random seed is used if omitted
    #[clap(short, long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.divisor == 0 {
        error!("Divisor must be positive");
        process::exit(2);
    }
    let start = state_from_str(&args.start).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(2);
    });

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    info!("Walking from {:?} until every row is divisible by {}", start.tiles(), args.divisor);
    match row_divisibility_walk(&start, args.divisor, args.max_steps, &mut rng) {
        Ok(walk) => {
            println!("Final state:\n{}\n", walk.final_state);
            println!("Number of steps: {}", walk.steps);
            let path: Vec<&[u8]> = walk.path.iter().map(|s| s.tiles()).collect();
            println!("Path: {:?}", path);
        }
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}
