use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store lock poisoned: {0}")]
    LockPoisoned(String),

    #[error("unknown conversation: {0}")]
    UnknownConversation(String),

    #[error("unknown book: {0}")]
    UnknownBook(String),

    #[error("unknown user: {0}")]
    UnknownUser(String),

    #[error("unknown report: {0}")]
    UnknownReport(String),

    #[error("message text is empty")]
    BlankMessage,
}
