use tracing::debug;

use campusbooks_store::{Store, StoreError};
use campusbooks_types::models::{Book, Conversation, Message};

/// Everything the messages page renders: the (filtered) sidebar, the active
/// thread, and the book the thread is about, if any.
#[derive(Debug, Clone)]
pub struct MessagesView {
    pub conversations: Vec<Conversation>,
    pub active: Option<Conversation>,
    pub thread: Vec<Message>,
    pub related_book: Option<Book>,
}

/// Build the page for a route's conversation id and the sidebar search box.
/// Selection resolves against the full list (the search box only narrows the
/// sidebar): a known id wins, an unknown or absent one falls back to the
/// first thread.
pub fn messages(
    store: &Store,
    requested: Option<&str>,
    search: &str,
) -> Result<MessagesView, StoreError> {
    let active = store.resolve_conversation(requested)?;
    let (thread, related_book) = match &active {
        Some(conversation) => (
            store.messages(&conversation.id)?,
            store.related_book(&conversation.id)?,
        ),
        None => (Vec::new(), None),
    };

    Ok(MessagesView {
        conversations: store.list_conversations(search)?,
        active,
        thread,
        related_book,
    })
}

/// Opening a thread clears its unread badge.
pub fn open_conversation(store: &Store, conversation_id: &str) -> Result<(), StoreError> {
    store.mark_read(conversation_id)
}

/// The send box. Blank text or no selection is a quiet no-op; the message is
/// returned on success so the UI can append it.
pub fn send(
    store: &Store,
    sender_id: &str,
    active: Option<&str>,
    text: &str,
) -> Result<Option<Message>, StoreError> {
    let Some(conversation_id) = active else {
        debug!("send ignored: no conversation selected");
        return Ok(None);
    };
    match store.send_message(conversation_id, sender_id, text) {
        Ok(message) => Ok(Some(message)),
        Err(StoreError::BlankMessage) => {
            debug!("send ignored: blank message");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
