//! Session-wide high score backed by a `ScoreStore`.

use super::store::ScoreStore;
use log::{info, warn};

/// The best score seen so far, persisted through `S` while the store works.
///
/// A failed write switches the tracker to memory-only for the rest of the
/// session; the value keeps updating, it just stops being written.
#[derive(Debug)]
pub struct HighScore<S: ScoreStore> {
    best: u32,
    store: S,
    persistent: bool,
}

impl<S: ScoreStore> HighScore<S> {
    /// Read the stored value. An unreadable store starts from 0 but stays
    /// writable, so a new record can repair it.
    pub fn load(store: S) -> Self {
        let best = match store.load() {
            Ok(score) => score,
            Err(e) => {
                warn!("Could not read high score, starting from 0: {}", e);
                0
            }
        };
        Self {
            best,
            store,
            persistent: true,
        }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// False once a write has failed.
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Offer a score. Returns true when it beats the current best, in which
    /// case the new best is written to the store once.
    pub fn record(&mut self, score: u32) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        if self.persistent {
            if let Err(e) = self.store.save(score) {
                warn!(
                    "Could not save high score {}, keeping it in memory only: {}",
                    score, e
                );
                self.persistent = false;
            }
        }
        info!("New high score: {}", score);
        true
    }

    /// Drop the best score back to 0 and clear the store.
    pub fn clear(&mut self) {
        self.best = 0;
        if self.persistent {
            if let Err(e) = self.store.clear() {
                warn!("Could not clear stored high score: {}", e);
                self.persistent = false;
            }
        }
    }
}
