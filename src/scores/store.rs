//! High score storage backends.

use crate::core::constants::{HIGH_SCORE_FILE, HIGH_SCORE_SLOT};
use crate::utils::persistence::{load_json, load_json_or_default, save_json};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

/// Persists a single integer high score.
pub trait ScoreStore {
    /// Read the stored high score. A store with nothing saved yields 0.
    fn load(&self) -> io::Result<u32>;

    /// Overwrite the stored high score.
    fn save(&mut self, score: u32) -> io::Result<()>;

    /// Forget the stored high score.
    fn clear(&mut self) -> io::Result<()>;

    /// False when saved scores do not outlive the process.
    fn is_durable(&self) -> bool {
        true
    }
}

/// One persisted slot in the scores file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub score: u32,
    /// Unix seconds when the score was set
    pub achieved_at: i64,
}

/// Contents of `high_scores.json`, keyed by slot name.
pub type ScoreFile = BTreeMap<String, ScoreRecord>;

/// JSON file store (`~/.snake/high_scores.json` by default).
#[derive(Debug, Clone)]
pub struct JsonScoreStore {
    path: PathBuf,
    slot: String,
}

impl JsonScoreStore {
    /// Store in `dir` under the standard slot.
    pub fn in_dir(dir: &Path) -> Self {
        Self::at(dir.join(HIGH_SCORE_FILE), HIGH_SCORE_SLOT)
    }

    pub fn at(path: PathBuf, slot: &str) -> Self {
        Self {
            path,
            slot: slot.to_string(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file. Other slots are preserved on save.
    fn read_file(&self) -> io::Result<ScoreFile> {
        Ok(load_json(&self.path)?.unwrap_or_default())
    }

    /// The stored record for this store's slot, if any.
    pub fn record(&self) -> io::Result<Option<ScoreRecord>> {
        Ok(self.read_file()?.get(&self.slot).copied())
    }
}

impl ScoreStore for JsonScoreStore {
    fn load(&self) -> io::Result<u32> {
        Ok(self.record()?.map(|r| r.score).unwrap_or(0))
    }

    fn save(&mut self, score: u32) -> io::Result<()> {
        // A corrupt file is replaced rather than blocking new records.
        let mut file: ScoreFile = load_json_or_default(&self.path);
        file.insert(
            self.slot.clone(),
            ScoreRecord {
                score,
                achieved_at: chrono::Utc::now().timestamp(),
            },
        );
        save_json(&self.path, &file)
    }

    fn clear(&mut self) -> io::Result<()> {
        let mut file: ScoreFile = load_json_or_default(&self.path);
        if file.remove(&self.slot).is_some() {
            save_json(&self.path, &file)?;
        }
        Ok(())
    }
}

/// Store that lives only for the process. Counts writes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryScoreStore {
    pub score: u32,
    pub saves: u32,
}

impl MemoryScoreStore {
    pub fn with_score(score: u32) -> Self {
        Self { score, saves: 0 }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> io::Result<u32> {
        Ok(self.score)
    }

    fn save(&mut self, score: u32) -> io::Result<()> {
        self.score = score;
        self.saves += 1;
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.score = 0;
        Ok(())
    }
}

/// Store picked at startup: the JSON file when the data directory is usable,
/// memory otherwise.
#[derive(Debug, Clone)]
pub enum ScoreBackend {
    File(JsonScoreStore),
    Memory(MemoryScoreStore),
}

impl ScoreBackend {
    /// Open the file store in `data_dir`, or fall back to memory if the
    /// directory could not be set up. Never fails.
    pub fn open(data_dir: io::Result<PathBuf>) -> Self {
        match data_dir {
            Ok(dir) => Self::File(JsonScoreStore::in_dir(&dir)),
            Err(e) => {
                warn!("Data directory unavailable, high score kept in memory: {}", e);
                Self::Memory(MemoryScoreStore::default())
            }
        }
    }

}

impl ScoreStore for ScoreBackend {
    fn load(&self) -> io::Result<u32> {
        match self {
            Self::File(store) => store.load(),
            Self::Memory(store) => store.load(),
        }
    }

    fn save(&mut self, score: u32) -> io::Result<()> {
        match self {
            Self::File(store) => store.save(score),
            Self::Memory(store) => store.save(score),
        }
    }

    fn clear(&mut self) -> io::Result<()> {
        match self {
            Self::File(store) => store.clear(),
            Self::Memory(store) => store.clear(),
        }
    }

    fn is_durable(&self) -> bool {
        matches!(self, Self::File(_))
    }
}
