// Match driver: plays the minimax agent against an opponent over several games
//
// Usage:
//   cargo run --release -- [options]
//
// Options:
//   --games <n>                Number of games (default: 1)
//   --opponent <minimax|random> Opponent for the second seat (default: random)
//   --seed <n>                 Base seed for the random opponent (default: 0)
//   --depth <n>                Override the configured search depth
//   --rows <n> / --cols <n>    Override the configured board size
//   --config <path>            Path to Isola.toml (default: Isola.toml)
//   --show-board               Print the final board of each game

use log::{error, info};
use rayon::prelude::*;
use std::env;
use std::process;
use std::time::Instant;

use isola_agent::agent::{Agent, MinimaxAgent, RandomAgent};
use isola_agent::board::Board;
use isola_agent::config::Config;
use isola_agent::debug_logger::DebugLogger;
use isola_agent::error::AgentError;
use isola_agent::game::{Game, GameRecord};
use isola_agent::types::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Opponent {
    Minimax,
    Random,
}

struct MatchOptions {
    games: usize,
    opponent: Opponent,
    seed: u64,
    show_board: bool,
}

fn print_usage() {
    eprintln!("Isola Match Driver");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("  isola-match [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("  --games <n>                  Number of games to play (default: 1)");
    eprintln!("  --opponent <minimax|random>  Second-seat opponent (default: random)");
    eprintln!("  --seed <n>                   Base seed for the random opponent (default: 0)");
    eprintln!("  --depth <n>                  Override the configured search depth");
    eprintln!("  --rows <n>                   Override the configured board rows");
    eprintln!("  --cols <n>                   Override the configured board columns");
    eprintln!("  --config <path>              Path to Isola.toml (default: Isola.toml)");
    eprintln!("  --show-board                 Print the final board of each game");
    eprintln!("  --help                       Show this help message");
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T {
    let Some(raw) = args.get(i + 1) else {
        eprintln!("Error: {} requires an argument", flag);
        process::exit(1);
    };
    raw.parse::<T>().unwrap_or_else(|_| {
        eprintln!("Error: invalid value '{}' for {}", raw, flag);
        process::exit(1);
    })
}

fn play_one(
    id: usize,
    config: &Config,
    options: &MatchOptions,
    logger: &DebugLogger,
) -> Result<GameRecord, AgentError> {
    let board = Board::new(config.board.rows, config.board.cols)?;

    let mut first = MinimaxAgent::new(Player::First, config);
    let mut second: Box<dyn Agent> = match options.opponent {
        Opponent::Minimax => Box::new(MinimaxAgent::new(Player::Second, config)),
        Opponent::Random => Box::new(RandomAgent::new(
            Player::Second,
            options.seed.wrapping_add(id as u64),
        )),
    };

    Game::new(id, board).play(&mut first, second.as_mut(), logger)
}

fn main() {
    // We default to 'info' level logging. But if the `RUST_LOG` environment variable is set,
    // we keep that value instead.
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }

    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.contains(&"--help".to_string()) {
        print_usage();
        process::exit(0);
    }

    let mut config_path = "Isola.toml".to_string();
    let mut depth: Option<u8> = None;
    let mut rows: Option<usize> = None;
    let mut cols: Option<usize> = None;
    let mut options = MatchOptions {
        games: 1,
        opponent: Opponent::Random,
        seed: 0,
        show_board: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--games" => {
                options.games = parse_value(&args, i, "--games");
                i += 1;
            }
            "--opponent" => {
                let name: String = parse_value(&args, i, "--opponent");
                options.opponent = match name.as_str() {
                    "minimax" => Opponent::Minimax,
                    "random" => Opponent::Random,
                    other => {
                        eprintln!("Error: unknown opponent '{}'", other);
                        process::exit(1);
                    }
                };
                i += 1;
            }
            "--seed" => {
                options.seed = parse_value(&args, i, "--seed");
                i += 1;
            }
            "--depth" => {
                depth = Some(parse_value(&args, i, "--depth"));
                i += 1;
            }
            "--rows" => {
                rows = Some(parse_value(&args, i, "--rows"));
                i += 1;
            }
            "--cols" => {
                cols = Some(parse_value(&args, i, "--cols"));
                i += 1;
            }
            "--config" => {
                config_path = parse_value(&args, i, "--config");
                i += 1;
            }
            "--show-board" => {
                options.show_board = true;
            }
            _ => {
                eprintln!("Error: Unknown option '{}'", args[i]);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    let mut config = Config::from_file(&config_path).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from '{}': {}", config_path, e);
        eprintln!("Using default configuration");
        Config::default_hardcoded()
    });
    if let Some(depth) = depth {
        config.search.depth = depth;
    }
    if let Some(rows) = rows {
        config.board.rows = rows;
    }
    if let Some(cols) = cols {
        config.board.cols = cols;
    }

    info!(
        "Playing {} game(s) on {}x{} at depth {} against {:?}",
        options.games, config.board.rows, config.board.cols, config.search.depth, options.opponent
    );

    let logger = DebugLogger::new(config.debug.enabled, &config.debug.log_file_path);
    let start_time = Instant::now();

    let results: Vec<(usize, Result<GameRecord, AgentError>)> = (0..options.games)
        .into_par_iter()
        .map(|id| (id, play_one(id, &config, &options, &logger)))
        .collect();

    let mut first_wins = 0;
    let mut second_wins = 0;
    let mut failures = 0;
    let mut total_turns = 0;

    for (id, result) in &results {
        match result {
            Ok(record) => {
                match record.winner {
                    Player::First => first_wins += 1,
                    Player::Second => second_wins += 1,
                }
                total_turns += record.turns;
                println!(
                    "Game {}: {} wins after {} turns",
                    id, record.winner, record.turns
                );
                if options.show_board {
                    println!("{}", record.final_board);
                }
            }
            Err(e) => {
                error!("Game {} aborted: {}", id, e);
                failures += 1;
            }
        }
    }

    let finished = results.len() - failures;
    println!();
    println!("=== Match Summary ===");
    println!("Games:        {}", results.len());
    println!("First wins:   {}", first_wins);
    println!("Second wins:  {}", second_wins);
    if finished > 0 {
        println!("Avg turns:    {:.1}", total_turns as f64 / finished as f64);
    }
    println!("Elapsed:      {}ms", start_time.elapsed().as_millis());

    if failures > 0 {
        process::exit(1);
    }
}
