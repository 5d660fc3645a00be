pub mod error;

mod queries;
mod seed;

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use tracing::info;

use campusbooks_types::models::{Book, Conversation, Message, Report, User};

pub use error::StoreError;
pub use queries::MarketStats;

/// Central in-memory entity store. Every collection the pages read from
/// lives here, behind one lock, so a mutation and the denormalized fields it
/// maintains always move together.
pub struct Store {
    inner: Mutex<StoreInner>,
}

#[derive(Debug, Default)]
struct StoreInner {
    users: Vec<User>,
    books: Vec<Book>,
    conversations: Vec<Conversation>,
    /// Ordered message list per conversation id.
    messages: HashMap<String, Vec<Message>>,
    /// Book ids the session user has wishlisted.
    wishlist: HashSet<String>,
    reports: Vec<Report>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner::default()),
        }
    }

    /// A store pre-populated with the demo catalog, users, and threads.
    pub fn with_demo_data() -> Self {
        let mut inner = StoreInner::default();
        seed::populate(&mut inner);
        info!(
            books = inner.books.len(),
            conversations = inner.conversations.len(),
            "demo catalog loaded"
        );
        Self {
            inner: Mutex::new(inner),
        }
    }

    fn with_inner<F, T>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&StoreInner) -> Result<T, StoreError>,
    {
        let inner = self
            .inner
            .lock()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;
        f(&inner)
    }

    fn with_inner_mut<F, T>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut StoreInner) -> Result<T, StoreError>,
    {
        let mut inner = self
            .inner
            .lock()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;
        f(&mut inner)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
