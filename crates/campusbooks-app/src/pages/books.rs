use std::collections::HashSet;

use campusbooks_store::{Store, StoreError};
use campusbooks_types::forms::BookFilters;
use campusbooks_types::models::{Book, Message, User};

/// Landing page: the featured shelf plus current wishlist membership.
#[derive(Debug, Clone)]
pub struct HomeView {
    pub featured: Vec<Book>,
    pub wishlisted: HashSet<String>,
}

pub fn home(store: &Store) -> Result<HomeView, StoreError> {
    Ok(HomeView {
        featured: store.featured_books()?,
        wishlisted: store.wishlist_ids()?.into_iter().collect(),
    })
}

/// Browse page: search results for the query/filter pair.
#[derive(Debug, Clone)]
pub struct BrowseView {
    pub results: Vec<Book>,
    pub wishlisted: HashSet<String>,
}

pub fn browse(store: &Store, query: &str, filters: &BookFilters) -> Result<BrowseView, StoreError> {
    Ok(BrowseView {
        results: store.search_books(query, filters)?,
        wishlisted: store.wishlist_ids()?.into_iter().collect(),
    })
}

/// Book details page. `book` is `None` for an unknown id, which renders as
/// the not-found state rather than an error.
#[derive(Debug, Clone)]
pub struct BookDetailsView {
    pub book: Option<Book>,
    pub wishlisted: bool,
}

/// A missing id (link without a param) falls back to the first book in the
/// catalog.
pub fn book_details(store: &Store, book_id: Option<&str>) -> Result<BookDetailsView, StoreError> {
    let book = match book_id {
        Some(id) => store.get_book(id)?,
        None => store.list_books()?.into_iter().next(),
    };
    let wishlisted = match &book {
        Some(b) => store.is_wishlisted(&b.id)?,
        None => false,
    };
    Ok(BookDetailsView { book, wishlisted })
}

/// The contact-seller form. Blank text is a no-op; a successful send returns
/// the message so the UI can confirm.
pub fn contact_seller(
    store: &Store,
    sender: &User,
    book_id: &str,
    text: &str,
) -> Result<Option<Message>, StoreError> {
    match store.contact_seller(book_id, sender, text) {
        Ok(message) => Ok(Some(message)),
        Err(StoreError::BlankMessage) => Ok(None),
        Err(e) => Err(e),
    }
}
