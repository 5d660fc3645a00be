use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::warn;

use campusbooks_types::models::User;

/// Well-known key the session record is stored under.
pub const SESSION_KEY: &str = "user";

/// Durable client storage for the session: one JSON record in the state
/// directory, written on login/signup, removed on logout, read once at
/// startup.
#[derive(Debug, Clone)]
pub struct SessionStorage {
    dir: PathBuf,
}

impl SessionStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn record_path(&self) -> PathBuf {
        self.dir.join(format!("{SESSION_KEY}.json"))
    }

    /// Read the stored user, if any. A corrupt record is treated as
    /// logged-out rather than an error.
    pub fn load(&self) -> Result<Option<User>> {
        let path = self.record_path();
        let data = match fs::read(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_slice::<User>(&data) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                warn!(path = %path.display(), "discarding unreadable session record: {e}");
                Ok(None)
            }
        }
    }

    pub fn store(&self, user: &User) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let data = serde_json::to_vec_pretty(user)?;
        fs::write(self.record_path(), data)?;
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(self.record_path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl AsRef<Path> for SessionStorage {
    fn as_ref(&self) -> &Path {
        &self.dir
    }
}
