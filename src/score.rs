use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const APP_DIR_NAME: &str = "toroid-snake";
const SCORE_FILE_NAME: &str = "scores.json";

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ScoreFile {
    high_score: u32,
}

/// High-score persistence in the platform data directory.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    /// Creates a store at the platform-correct location.
    #[must_use]
    pub fn new() -> Self {
        let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        base.push(APP_DIR_NAME);
        base.push(SCORE_FILE_NAME);
        Self { path: base }
    }

    /// Creates a store backed by an explicit file, for tests.
    #[must_use]
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the persisted high score.
    ///
    /// Returns `Ok(0)` when the file does not exist yet (first run) and
    /// `Err` when it exists but cannot be read or parsed.
    pub fn load(&self) -> io::Result<u32> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e),
        };

        serde_json::from_str::<ScoreFile>(&raw)
            .map(|file| file.high_score)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Saves `score`, creating parent directories when needed.
    pub fn save(&self, score: u32) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let payload = ScoreFile { high_score: score };
        let json = serde_json::to_string_pretty(&payload)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        fs::write(&self.path, json)
    }
}

impl Default for HighScoreStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::HighScoreStore;

    #[test]
    fn score_round_trips_through_disk() {
        let path = unique_test_path("round_trip");
        let store = HighScoreStore::at(path.clone());

        store.save(42).expect("score save should succeed");
        assert_eq!(store.load().expect("load should succeed"), 42);

        cleanup_test_path(&path);
    }

    #[test]
    fn missing_score_file_reads_as_zero() {
        let path = unique_test_path("missing");
        let store = HighScoreStore::at(path);

        assert_eq!(store.load().expect("missing file should be Ok(0)"), 0);
    }

    #[test]
    fn malformed_score_file_is_an_error() {
        let path = unique_test_path("malformed");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(&path, "not-json").expect("test file write should succeed");

        assert!(HighScoreStore::at(path.clone()).load().is_err());

        cleanup_test_path(&path);
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("toroid-snake-score-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
