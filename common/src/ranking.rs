use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::constants::RANKING_CAPACITY;

/// One finished game: final score and playtime in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub score: u32,
    pub time: u32,
}

/// Top-score list persisted as a single JSON document, overwritten
/// wholesale after every game over.
#[derive(Debug, Clone)]
pub struct RankingStore {
    path: PathBuf,
}

impl RankingStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        RankingStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored ranking. Absent or unreadable data is treated as an
    /// empty list, never as an error.
    pub fn load(&self) -> Vec<RankingEntry> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_str(&data) {
            Ok(entries) => entries,
            Err(err) => {
                warn!("Discarding unreadable ranking data: {err}");
                Vec::new()
            }
        }
    }

    /// Insert a finished game, keep the best five entries (score
    /// descending, faster time first on ties), persist the truncated list
    /// and return it as stored.
    pub fn record(&self, entry: RankingEntry) -> Result<Vec<RankingEntry>> {
        let mut entries = self.load();
        entries.push(entry);
        entries.sort_by(|a, b| b.score.cmp(&a.score).then(a.time.cmp(&b.time)));
        entries.truncate(RANKING_CAPACITY);

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory {parent:?}"))?;
            }
        }
        let json = serde_json::to_string(&entries).context("Failed to serialize ranking")?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write ranking to {:?}", self.path))?;

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> RankingStore {
        RankingStore::new(dir.path().join("ranking.json"))
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.load().is_empty());
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "not json at all").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn load_is_idempotent_between_records() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.record(RankingEntry { score: 3, time: 12 }).unwrap();
        assert_eq!(store.load(), store.load());
    }

    #[test]
    fn record_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let entry = RankingEntry { score: 8, time: 42 };
        let stored = store.record(entry).unwrap();
        assert!(stored.contains(&entry));
        assert_eq!(store.load(), stored);
    }

    #[test]
    fn record_sorts_by_score_descending() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.record(RankingEntry { score: 2, time: 10 }).unwrap();
        store.record(RankingEntry { score: 9, time: 10 }).unwrap();
        let stored = store.record(RankingEntry { score: 5, time: 10 }).unwrap();
        let scores: Vec<u32> = stored.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![9, 5, 2]);
    }

    #[test]
    fn equal_scores_rank_faster_time_first() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.record(RankingEntry { score: 10, time: 30 }).unwrap();
        let stored = store.record(RankingEntry { score: 10, time: 20 }).unwrap();
        assert_eq!(
            stored,
            vec![
                RankingEntry { score: 10, time: 20 },
                RankingEntry { score: 10, time: 30 },
            ]
        );
    }

    #[test]
    fn ranking_never_exceeds_five_entries() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        for score in 1..=7 {
            store.record(RankingEntry { score, time: 1 }).unwrap();
        }
        let stored = store.load();
        assert_eq!(stored.len(), RANKING_CAPACITY);
        // The two lowest scores were displaced.
        assert!(stored.iter().all(|e| e.score >= 3));
    }

    #[test]
    fn record_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = RankingStore::new(dir.path().join("nested/deeper/ranking.json"));
        store.record(RankingEntry { score: 1, time: 1 }).unwrap();
        assert_eq!(store.load().len(), 1);
    }
}
