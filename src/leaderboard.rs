//! Leaderboard persisted as a flat JSON object of name to score.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Errors from loading or saving the leaderboard.
#[derive(Debug, Display, Error)]
pub enum LeaderboardError {
    /// The file exists but is not a JSON object of integer scores.
    #[display("invalid JSON format in leaderboard file {}: {source}", path.display())]
    Format {
        /// File that failed to parse.
        path: PathBuf,
        /// Parser error.
        source: serde_json::Error,
    },
    /// Reading or writing the file failed.
    #[display("error accessing leaderboard file {}: {source}", path.display())]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

/// Player name to last saved score. Saving an existing name overwrites it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    scores: BTreeMap<String, i64>,
}

impl Leaderboard {
    /// Empty leaderboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name`'s score, returning the previous one.
    pub fn insert(&mut self, name: impl Into<String>, score: i64) -> Option<i64> {
        self.scores.insert(name.into(), score)
    }

    /// Score saved for `name`.
    pub fn get(&self, name: &str) -> Option<i64> {
        self.scores.get(name).copied()
    }

    /// Number of players.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether no scores are saved.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Entries ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.scores.iter().map(|(name, score)| (name.as_str(), *score))
    }

    /// Formats the leaderboard as a table.
    pub fn render(&self) -> String {
        if self.is_empty() {
            return "Leaderboard is empty.\n".to_string();
        }
        let rule = "-".repeat(44);
        let mut out = format!("Leaderboard:\n{rule}\n| Player{:25}| Score   |\n{rule}\n", "");
        for (player, score) in self.iter() {
            out.push_str(&format!("| {player:<30} | {score:^7} |\n"));
        }
        out.push_str(&rule);
        out.push('\n');
        out
    }
}

impl FromIterator<(String, i64)> for Leaderboard {
    fn from_iter<T: IntoIterator<Item = (String, i64)>>(iter: T) -> Self {
        Self {
            scores: iter.into_iter().collect(),
        }
    }
}

/// File-backed store. Loads and saves whole leaderboards; merging is
/// done by the caller, see [`LeaderboardStore::record`].
#[derive(Debug, Clone, Getters)]
pub struct LeaderboardStore {
    path: PathBuf,
}

impl LeaderboardStore {
    /// Store backed by `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the leaderboard. A missing file is an empty leaderboard.
    ///
    /// # Errors
    ///
    /// Returns [`LeaderboardError::Format`] for malformed content and
    /// [`LeaderboardError::Io`] if the file cannot be read.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Leaderboard, LeaderboardError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No leaderboard file, starting empty");
                return Ok(Leaderboard::new());
            }
            Err(source) => return Err(self.io_error(source)),
        };
        let board: Leaderboard =
            serde_json::from_str(&content).map_err(|source| LeaderboardError::Format {
                path: self.path.clone(),
                source,
            })?;
        debug!(entries = board.len(), "Leaderboard loaded");
        Ok(board)
    }

    /// Replaces the file with `leaderboard`.
    ///
    /// The new content is written to a temporary file in the same directory
    /// and renamed over the old one, so a failure leaves the previous file
    /// intact. An existing file keeps its permissions; a new one gets the
    /// usual umask-filtered mode.
    ///
    /// # Errors
    ///
    /// Returns [`LeaderboardError::Io`] if the write or rename fails.
    #[instrument(
        skip(self, leaderboard),
        fields(path = %self.path.display(), entries = leaderboard.len())
    )]
    pub fn save(&self, leaderboard: &Leaderboard) -> Result<(), LeaderboardError> {
        let json =
            serde_json::to_string(leaderboard).map_err(|source| LeaderboardError::Format {
                path: self.path.clone(),
                source,
            })?;

        let existing = match fs::metadata(&self.path) {
            Ok(metadata) => Some(metadata.permissions()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => return Err(self.io_error(e)),
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut builder = tempfile::Builder::new();
        // Temp files default to 0600; a fresh leaderboard should follow the umask.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if existing.is_none() {
                builder.permissions(fs::Permissions::from_mode(0o666));
            }
        }
        let mut tmp = builder.tempfile_in(dir).map_err(|e| self.io_error(e))?;
        if let Some(permissions) = existing {
            debug!("Keeping existing file permissions");
            tmp.as_file()
                .set_permissions(permissions)
                .map_err(|e| self.io_error(e))?;
        }
        tmp.write_all(json.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| self.io_error(e))?;
        tmp.persist(&self.path).map_err(|e| self.io_error(e.error))?;

        info!("Leaderboard saved");
        Ok(())
    }

    /// Loads, sets `name` to `score`, and saves.
    ///
    /// # Errors
    ///
    /// Fails without touching the file if the existing leaderboard cannot
    /// be loaded.
    #[instrument(skip(self))]
    pub fn record(&self, name: &str, score: i64) -> Result<Leaderboard, LeaderboardError> {
        let mut board = self.load()?;
        if let Some(previous) = board.insert(name, score) {
            debug!(previous, "Overwriting existing score");
        }
        self.save(&board)?;
        Ok(board)
    }

    fn io_error(&self, source: io::Error) -> LeaderboardError {
        LeaderboardError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
