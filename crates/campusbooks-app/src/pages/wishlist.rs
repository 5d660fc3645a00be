use campusbooks_store::{Store, StoreError};
use campusbooks_types::models::Book;

#[derive(Debug, Clone)]
pub struct WishlistView {
    pub books: Vec<Book>,
}

pub fn wishlist(store: &Store) -> Result<WishlistView, StoreError> {
    Ok(WishlistView {
        books: store.wishlist_books()?,
    })
}

/// The heart button: returns whether the book is wishlisted afterwards.
pub fn toggle(store: &Store, book_id: &str) -> Result<bool, StoreError> {
    store.toggle_wishlist(book_id)
}
