use clap::Parser;
use log::{error, info};
use std::fs;
use std::path::PathBuf;
use std::process;
use tile_solver::config::SearchConfig;
use tile_solver::engine::State;
use tile_solver::solver::{search_with_config, SearchResult, Strategy};
use tile_solver::utils::{state_from_str, state_from_text};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Solve a sliding-tile puzzle with BFS, DFS or uniform-cost search", long_about = None)]
struct Args {
    /// Start state as a tile list, e.g. "4,0,2,1,3,7,6,8,5" (0 is the blank)
    #[clap(required_unless_present = "board_file")]
    start: Option<String>,

    /// Read the start state from a file (one grid row per line, or a single tile list)
    #[clap(long, conflicts_with = "start")]
    board_file: Option<PathBuf>,

    /// Goal state as a tile list. Defaults to 0,1,...,n*n-1
    #[clap(short, long)]
    goal: Option<String>,

    /// Search strategy: bfs, dfs, ucs or weighted-ucs
    #[clap(short, long, default_value = "bfs")]
    strategy: Strategy,

    /// Stop after this many expansions
    #[clap(short, long)]
    limit: Option<usize>,

    /// Print every intermediate state of the solution
    #[clap(long)]
    show_states: bool,
}

fn read_start(args: &Args) -> Result<State, String> {
    if let Some(path) = &args.board_file {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read file {}: {}", path.display(), e))?;
        return state_from_text(&content).map_err(|e| e.to_string());
    }
    match &args.start {
        Some(start) => state_from_str(start).map_err(|e| e.to_string()),
        None => Err("No start state given".to_string()),
    }
}

fn build_config(args: &Args, start: &State) -> Result<SearchConfig, String> {
    let goal = match &args.goal {
        Some(goal) => state_from_str(goal).map_err(|e| format!("Invalid goal: {}", e))?,
        None => State::goal(start.side()).map_err(|e| e.to_string())?,
    };
    let mut config = SearchConfig::new(goal).with_strategy(args.strategy);
    if let Some(limit) = args.limit {
        config = config.with_expansion_limit(limit);
    }
    Ok(config)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let start = read_start(&args).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(2);
    });
    let config = build_config(&args, &start).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(2);
    });

    println!("Start state:\n{}\n", start);
    println!("Goal state:\n{}\n", config.goal);
    info!("Searching with {}...", config.strategy);

    let report = search_with_config(&start, &config);
    info!(
        "Expanded {} states, generated {} nodes, largest frontier {}",
        report.stats.expanded, report.stats.generated, report.stats.max_frontier
    );

    match report.result {
        SearchResult::Found { path, states, cost } => {
            println!("Solution found:\n");
            println!("Moves ({}), cost {}:", path.len(), cost);
            if path.is_empty() {
                println!("  No moves needed.");
            } else {
                let codes: String = path.iter().map(|a| a.to_char()).collect();
                println!("  {}", codes);
            }
            if args.show_states {
                for (i, state) in states.iter().enumerate() {
                    println!("\nStep {}:\n{}", i, state);
                }
            }
        }
        SearchResult::NotFound => {
            if report.stats.limit_reached {
                println!("No solution found within {} expansions.", report.stats.expanded);
            } else {
                println!("No solution found: the goal is not reachable from the start.");
            }
            process::exit(1);
        }
    }
}
