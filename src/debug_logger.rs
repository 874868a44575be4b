// Debug logging module for per-turn game records
//
// Each decided turn is appended to a JSONL file so games can be replayed
// later. Write failures are logged and otherwise ignored.

use log::error;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Arc;

use crate::agent::Agent;
use crate::board::Board;
use crate::types::{Action, Player};

/// Represents a single debug log entry: the board the player saw and what it did
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DebugLogEntry {
    pub game: usize,
    pub turn: usize,
    pub player: Player,
    /// Name of the agent that played the turn
    pub agent: String,
    /// Search depth the agent ran at; None for agents that do not search
    pub depth: Option<u8>,
    pub action: Action,
    pub board: Board,
    pub timestamp: String,
}

/// Shared debug logger state
/// Clones share one file handle, so games on different threads can log together
#[derive(Clone)]
pub struct DebugLogger {
    file: Arc<Mutex<Option<File>>>,
    enabled: bool,
}

impl DebugLogger {
    /// Creates a new debug logger
    /// If enabled is true, initializes the log file (truncating if it exists)
    pub fn new(enabled: bool, log_file_path: &str) -> Self {
        if !enabled {
            return Self::disabled();
        }

        match OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_file_path)
        {
            Ok(file) => {
                log::info!("Debug logging enabled: {}", log_file_path);
                DebugLogger {
                    file: Arc::new(Mutex::new(Some(file))),
                    enabled: true,
                }
            }
            Err(e) => {
                error!("Failed to create debug log file '{}': {}", log_file_path, e);
                Self::disabled()
            }
        }
    }

    /// Creates a disabled debug logger (no-op)
    pub fn disabled() -> Self {
        DebugLogger {
            file: Arc::new(Mutex::new(None)),
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Appends one turn played by `agent`. `board` is the position before the action.
    pub fn log_turn(&self, game: usize, turn: usize, agent: &dyn Agent, board: &Board, action: Action) {
        if !self.enabled {
            return;
        }

        let entry = DebugLogEntry {
            game,
            turn,
            player: agent.player(),
            agent: agent.name().to_string(),
            depth: agent.search_depth(),
            action,
            board: board.clone(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        let json_line = match serde_json::to_string(&entry) {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to serialize debug log entry: {}", e);
                return;
            }
        };

        let mut file_guard = self.file.lock();
        if let Some(file) = file_guard.as_mut() {
            if let Err(e) = writeln!(file, "{}", json_line) {
                error!("Failed to write debug log entry: {}", e);
            } else if let Err(e) = file.flush() {
                error!("Failed to flush debug log: {}", e);
            }
        }
    }
}
