// Replay module for auditing logged games
//
// This module provides functionality to:
// 1. Parse JSONL debug logs
// 2. Re-run the minimax agent on every board it played, at the logged depth
// 3. Compare the logged and replayed actions
//
// Turns played by other agents (the random baseline) are skipped.
//
// The agent is deterministic, so any mismatch means the code or config that
// produced the log differs from the one replaying it.

use log::{info, warn};
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use crate::agent::{MinimaxAgent, AGENT_NAME};
use crate::config::Config;
use crate::debug_logger::DebugLogEntry;
use crate::types::{Action, Player};

/// Result of replaying a single turn
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayResult {
    pub game: usize,
    pub turn: usize,
    pub player: Player,
    pub original_action: Action,
    pub replayed_action: Action,
    pub matches: bool,
    pub replayed_score: f64,
    pub nodes: u64,
    pub computation_time_ms: u128,
}

/// Statistics for a complete replay session
#[derive(Debug, Default, PartialEq)]
pub struct ReplayStats {
    pub total_turns: usize,
    pub matches: usize,
    pub mismatches: usize,
    pub match_rate: f64,
    /// Entries not played by the minimax agent
    pub skipped: usize,
}

impl ReplayStats {
    pub fn from_results(results: &[ReplayResult]) -> Self {
        let total_turns = results.len();
        let matches = results.iter().filter(|r| r.matches).count();
        let match_rate = if total_turns > 0 {
            matches as f64 / total_turns as f64
        } else {
            0.0
        };

        ReplayStats {
            total_turns,
            matches,
            mismatches: total_turns - matches,
            match_rate,
            skipped: 0,
        }
    }
}

/// Replay engine for analyzing debug logs
pub struct ReplayEngine {
    config: Config,
    verbose: bool,
}

impl ReplayEngine {
    /// Creates a new replay engine with the given configuration
    pub fn new(config: Config, verbose: bool) -> Self {
        ReplayEngine { config, verbose }
    }

    /// Loads all log entries from a JSONL file
    pub fn load_log_file<P: AsRef<Path>>(&self, log_path: P) -> Result<Vec<DebugLogEntry>, String> {
        let file =
            File::open(log_path.as_ref()).map_err(|e| format!("Failed to open log file: {}", e))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| format!("Failed to read line {}: {}", line_num + 1, e))?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: DebugLogEntry = serde_json::from_str(&line)
                .map_err(|e| format!("Failed to parse JSON on line {}: {}", line_num + 1, e))?;

            entries.push(entry);
        }

        info!("Loaded {} log entries", entries.len());
        Ok(entries)
    }

    /// True if the entry was played by the minimax agent
    pub fn is_replayable(entry: &DebugLogEntry) -> bool {
        entry.agent == AGENT_NAME
    }

    /// Re-runs the agent on one logged board, at the depth it was played at
    pub fn replay_entry(&self, entry: &DebugLogEntry) -> Result<ReplayResult, String> {
        if !Self::is_replayable(entry) {
            return Err(format!(
                "Game {} turn {}: played by '{}', only '{}' turns can be replayed",
                entry.game, entry.turn, entry.agent, AGENT_NAME
            ));
        }

        let start_time = Instant::now();

        let mut agent = MinimaxAgent::new(entry.player, &self.config);
        if let Some(depth) = entry.depth {
            agent = agent.with_depth(depth);
        }
        let decision = agent.decide(&entry.board).map_err(|e| {
            format!(
                "Game {} turn {}: replay failed: {}",
                entry.game, entry.turn, e
            )
        })?;

        let matches = decision.action == entry.action;
        if !matches {
            warn!(
                "Game {} turn {}: logged {} but replay chose {}",
                entry.game, entry.turn, entry.action, decision.action
            );
        }

        let result = ReplayResult {
            game: entry.game,
            turn: entry.turn,
            player: entry.player,
            original_action: entry.action,
            replayed_action: decision.action,
            matches,
            replayed_score: decision.score,
            nodes: decision.nodes,
            computation_time_ms: start_time.elapsed().as_millis(),
        };

        if self.verbose {
            self.print_result(entry, &result);
        }

        Ok(result)
    }

    /// Replays every minimax entry, in parallel, keeping log order in the output
    pub fn replay_all(&self, entries: &[DebugLogEntry]) -> Result<(Vec<ReplayResult>, ReplayStats), String> {
        let results = entries
            .par_iter()
            .filter(|entry| Self::is_replayable(entry))
            .map(|entry| self.replay_entry(entry))
            .collect::<Result<Vec<_>, String>>()?;

        let mut stats = ReplayStats::from_results(&results);
        stats.skipped = entries.len() - results.len();
        if stats.skipped > 0 {
            info!("Skipped {} entries not played by {}", stats.skipped, AGENT_NAME);
        }
        Ok((results, stats))
    }

    /// Replays only the listed turns
    pub fn replay_turns(
        &self,
        entries: &[DebugLogEntry],
        turns: &[usize],
    ) -> Result<(Vec<ReplayResult>, ReplayStats), String> {
        let selected: Vec<DebugLogEntry> = entries
            .iter()
            .filter(|entry| turns.contains(&entry.turn))
            .cloned()
            .collect();

        if selected.is_empty() {
            return Err(format!("None of the turns {:?} are in the log", turns));
        }

        self.replay_all(&selected)
    }

    fn print_result(&self, entry: &DebugLogEntry, result: &ReplayResult) {
        println!(
            "\n=== Game {} Turn {} ({}) ===",
            result.game, result.turn, result.player
        );
        print!("{}", entry.board);
        println!("Logged:   {}", result.original_action);
        println!("Replayed: {}", result.replayed_action);
        println!(
            "Score: {}  Nodes: {}  Time: {}ms  {}",
            result.replayed_score,
            result.nodes,
            result.computation_time_ms,
            if result.matches { "MATCH" } else { "MISMATCH" }
        );
    }
}
