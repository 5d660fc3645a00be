//! The session context: who is signed in, and the one durable record that
//! survives a reload. Authentication is a mock: any non-empty credentials
//! succeed and a user record is fabricated on the spot.

pub mod storage;

use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use tracing::{info, warn};

use campusbooks_types::models::User;

pub use storage::SessionStorage;

/// An explicitly constructed session, restored from durable storage at
/// startup and torn down by `logout`. There is exactly one per app.
pub struct Session {
    user: Option<User>,
    storage: SessionStorage,
    latency: Duration,
}

impl Session {
    /// Restore the session from the durable record, if one exists.
    pub fn load(storage: SessionStorage) -> Result<Self> {
        let user = storage.load()?;
        if let Some(user) = &user {
            info!(user_id = %user.id, "session restored");
        }
        Ok(Self {
            user,
            storage,
            latency: Duration::ZERO,
        })
    }

    /// Fixed artificial delay applied to login/signup, mimicking network
    /// latency. Zero by default.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Mock login: any non-empty email/password pair succeeds. The fabricated
    /// user takes its id from the current time and its name from the email's
    /// local part. Empty input fails without touching any state.
    pub async fn login(&mut self, email: &str, password: &str) -> bool {
        if email.is_empty() || password.is_empty() {
            warn!("login rejected: empty credentials");
            return false;
        }
        tokio::time::sleep(self.latency).await;

        let name = email.split('@').next().unwrap_or(email).to_string();
        self.authenticate(User {
            id: fresh_user_id(),
            name,
            email: email.to_string(),
            avatar: None,
            is_admin: false,
        });
        true
    }

    /// Mock signup: same as login, but the provided name is used verbatim.
    pub async fn signup(&mut self, name: &str, email: &str, password: &str) -> bool {
        if name.is_empty() || email.is_empty() || password.is_empty() {
            warn!("signup rejected: missing required fields");
            return false;
        }
        tokio::time::sleep(self.latency).await;

        self.authenticate(User {
            id: fresh_user_id(),
            name: name.to_string(),
            email: email.to_string(),
            avatar: None,
            is_admin: false,
        });
        true
    }

    /// Teardown: clear the in-memory user and erase the durable record.
    pub fn logout(&mut self) {
        self.user = None;
        if let Err(e) = self.storage.clear() {
            warn!("failed to clear session record: {e}");
        }
        info!("session cleared");
    }

    fn authenticate(&mut self, user: User) {
        // The in-memory session is authoritative; the durable record is
        // best-effort.
        if let Err(e) = self.storage.store(&user) {
            warn!(user_id = %user.id, "failed to persist session record: {e}");
        }
        info!(user_id = %user.id, email = %user.email, "signed in");
        self.user = Some(user);
    }
}

fn fresh_user_id() -> String {
    format!("user-{}", Utc::now().timestamp_millis())
}
