use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use mathterm_core::{Profile, ProfileStore, QuizError, QuizResult};

const PROFILE_FILE: &str = "profile.json";

/// Profile persisted as a single pretty-printed JSON file.
pub struct JsonProfileStore {
    dir: PathBuf,
    username: String,
}

impl JsonProfileStore {
    /// `username` names the fresh profile created when nothing is stored yet.
    pub fn new(dir: impl Into<PathBuf>, username: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            username: username.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(PROFILE_FILE)
    }

    fn read(&self, path: &Path) -> QuizResult<Profile> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl ProfileStore for JsonProfileStore {
    fn load(&self) -> Profile {
        let path = self.path();
        if !path.exists() {
            debug!(path = %path.display(), "no saved profile, starting fresh");
            return Profile::new(self.username.clone());
        }
        match self.read(&path) {
            Ok(profile) => profile,
            Err(e) => {
                warn!(path = %path.display(), "unreadable profile, starting fresh: {e}");
                Profile::new(self.username.clone())
            }
        }
    }

    fn save(&self, profile: &Profile) -> QuizResult<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| QuizError::Storage(format!("cannot create data directory: {e}")))?;
        let json = serde_json::to_string_pretty(profile)?;

        // Write beside the target and rename so a crash never leaves a half-written file.
        let path = self.path();
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .map_err(|e| QuizError::Storage(format!("cannot write {}: {e}", tmp.display())))?;
        fs::rename(&tmp, &path)
            .map_err(|e| QuizError::Storage(format!("cannot replace {}: {e}", path.display())))?;
        debug!(path = %path.display(), sessions = profile.history.len(), "profile saved");
        Ok(())
    }
}
