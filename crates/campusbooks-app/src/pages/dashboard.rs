use campusbooks_session::Session;
use campusbooks_store::{Store, StoreError};
use campusbooks_types::models::{Book, Conversation, User};

/// The signed-in user's home: their listings, wishlist, and threads.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub user: User,
    pub my_books: Vec<Book>,
    pub wishlist_books: Vec<Book>,
    pub conversations: Vec<Conversation>,
    pub unread_total: u32,
}

/// `None` when no one is signed in; the route guard normally keeps that from
/// happening.
pub fn dashboard(store: &Store, session: &Session) -> Result<Option<DashboardView>, StoreError> {
    let Some(user) = session.user() else {
        return Ok(None);
    };
    Ok(Some(DashboardView {
        user: user.clone(),
        my_books: store.books_by_seller(&user.id)?,
        wishlist_books: store.wishlist_books()?,
        conversations: store.list_conversations("")?,
        unread_total: store.unread_total()?,
    }))
}
