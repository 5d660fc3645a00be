//! Per-page view builders. Each one reads the store/session and returns
//! plain data for a renderer to consume; user actions come back in as store
//! mutations. No rendering engine is involved, which keeps all of this
//! testable directly.

pub mod admin;
pub mod books;
pub mod dashboard;
pub mod messages;
pub mod upload;
pub mod wishlist;
