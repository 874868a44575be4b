// Standalone replay tool for auditing Isola debug logs
//
// Usage:
//   cargo run --bin replay -- <log_file> [options]
//
// Options:
//   --all                  Replay all turns played by the minimax agent
//   --turns <turn1,turn2>  Replay specific turns (comma-separated)
//   --verbose              Show detailed output for each turn
//   --config <path>        Path to Isola.toml (default: Isola.toml)

use std::env;
use std::process;

use isola_agent::config::Config;
use isola_agent::replay::{ReplayEngine, ReplayResult, ReplayStats};

fn print_usage() {
    eprintln!("Isola Replay Tool");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("  replay <log_file> [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("  --all                   Replay all turns in the log");
    eprintln!("  --turns <T1,T2,...>     Replay specific turns (comma-separated)");
    eprintln!("  --verbose               Show detailed output for each turn");
    eprintln!("  --config <path>         Path to Isola.toml (default: Isola.toml)");
    eprintln!("  --help                  Show this help message");
    eprintln!();
    eprintln!("EXAMPLES:");
    eprintln!("  replay isola_debug.jsonl --all");
    eprintln!("  replay isola_debug.jsonl --turns 0,4,8 --verbose");
}

fn parse_turns(s: &str) -> Result<Vec<usize>, String> {
    s.split(',')
        .map(|t| {
            t.trim()
                .parse::<usize>()
                .map_err(|e| format!("Invalid turn number '{}': {}", t, e))
        })
        .collect()
}

fn print_report(results: &[ReplayResult], stats: &ReplayStats) {
    println!("=== Replay Report ===");
    println!("Turns replayed: {}", stats.total_turns);
    println!("Matches:        {}", stats.matches);
    println!("Mismatches:     {}", stats.mismatches);
    println!("Match rate:     {:.1}%", stats.match_rate * 100.0);
    println!("Skipped:        {} (other agents)", stats.skipped);

    let mismatches: Vec<&ReplayResult> = results.iter().filter(|r| !r.matches).collect();
    if !mismatches.is_empty() {
        println!();
        println!("Mismatched turns:");
        for r in mismatches {
            println!(
                "  game {} turn {} ({}): logged {}, replayed {}",
                r.game, r.turn, r.player, r.original_action, r.replayed_action
            );
        }
    }
}

fn main() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "warn");
    }
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.contains(&"--help".to_string()) {
        print_usage();
        process::exit(if args.contains(&"--help".to_string()) {
            0
        } else {
            1
        });
    }

    let log_file = &args[1];
    let mut config_path = "Isola.toml".to_string();
    let mut verbose = false;
    let mut all = false;
    let mut turns: Option<Vec<usize>> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--all" => {
                all = true;
            }
            "--turns" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --turns requires an argument");
                    process::exit(1);
                }
                match parse_turns(&args[i + 1]) {
                    Ok(parsed) => turns = Some(parsed),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        process::exit(1);
                    }
                }
                i += 1;
            }
            "--config" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --config requires an argument");
                    process::exit(1);
                }
                config_path = args[i + 1].clone();
                i += 1;
            }
            "--verbose" => {
                verbose = true;
            }
            _ => {
                eprintln!("Error: Unknown option '{}'", args[i]);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    if !all && turns.is_none() {
        eprintln!("Error: Must specify --all or --turns");
        print_usage();
        process::exit(1);
    }

    let config = Config::from_file(&config_path).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from '{}': {}", config_path, e);
        eprintln!("Using default configuration");
        Config::default_hardcoded()
    });

    println!("Loaded configuration from: {}", config_path);
    println!("Replay log file: {}", log_file);
    println!();

    let engine = ReplayEngine::new(config, verbose);

    let entries = match engine.load_log_file(log_file) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error loading log file: {}", e);
            process::exit(1);
        }
    };

    if entries.is_empty() {
        eprintln!("Error: Log file is empty");
        process::exit(1);
    }

    let outcome = match turns {
        Some(turns) if !all => engine.replay_turns(&entries, &turns),
        _ => engine.replay_all(&entries),
    };

    match outcome {
        Ok((results, stats)) => {
            print_report(&results, &stats);
            if stats.mismatches > 0 {
                process::exit(2);
            }
        }
        Err(e) => {
            eprintln!("Error during replay: {}", e);
            process::exit(1);
        }
    }
}
