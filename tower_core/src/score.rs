//! Run scoring and high score persistence

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("score file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("score file format error: {0}")]
    Format(#[from] serde_json::Error),
}

/// Where high scores live between runs
pub trait ScoreStore {
    fn load(&self) -> Result<u64, ScoreError>;
    fn save(&self, high_score: u64) -> Result<(), ScoreError>;
}

#[derive(Serialize, Deserialize)]
struct ScoreFile {
    high_score: u64,
}

/// High score stored as a small JSON file. A missing file reads as zero.
#[derive(Debug, Clone)]
pub struct JsonScoreStore {
    path: PathBuf,
}

impl JsonScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonScoreStore { path: path.into() }
    }
}

impl ScoreStore for JsonScoreStore {
    fn load(&self) -> Result<u64, ScoreError> {
        if !self.path.exists() {
            return Ok(0);
        }
        let contents = fs::read_to_string(&self.path)?;
        let file: ScoreFile = serde_json::from_str(&contents)?;
        Ok(file.high_score)
    }

    fn save(&self, high_score: u64) -> Result<(), ScoreError> {
        let contents = serde_json::to_string_pretty(&ScoreFile { high_score })?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

/// Running score for the current game against the best score seen so far
#[derive(Debug, Clone, Default)]
pub struct ScoreBoard {
    score: u64,
    high_score: u64,
}

impl ScoreBoard {
    pub fn new(high_score: u64) -> Self {
        ScoreBoard {
            score: 0,
            high_score,
        }
    }

    pub fn add(&mut self, points: u64) {
        self.score += points;
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    /// Close out the run. Returns true when this run set a new high score.
    pub fn finish(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            info!(score = self.score, "new high score");
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_tracks_new_high() {
        let mut board = ScoreBoard::new(100);
        board.add(60);
        board.add(60);
        assert_eq!(board.score(), 120);
        assert!(board.finish());
        assert_eq!(board.high_score(), 120);
    }

    #[test]
    fn test_board_keeps_old_high() {
        let mut board = ScoreBoard::new(100);
        board.add(40);
        assert!(!board.finish());
        assert_eq!(board.high_score(), 100);
    }

    #[test]
    fn test_store_round_trip() {
        let path = std::env::temp_dir().join("tower_core_score_round_trip.json");
        let _ = fs::remove_file(&path);

        let store = JsonScoreStore::new(&path);
        assert_eq!(store.load().unwrap(), 0);

        store.save(4200).unwrap();
        assert_eq!(store.load().unwrap(), 4200);

        let _ = fs::remove_file(&path);
    }
}
