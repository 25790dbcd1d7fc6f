use crate::error::QuizResult;
use crate::profile::Profile;

pub trait ProfileStore {
    /// Load the saved profile. A missing or unreadable record yields a fresh one.
    fn load(&self) -> Profile;

    /// Persist the whole profile, replacing what was stored.
    fn save(&self, profile: &Profile) -> QuizResult<()>;
}
