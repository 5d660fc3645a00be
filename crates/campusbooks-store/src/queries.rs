use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use campusbooks_types::forms::{BookFilters, ListingDraft};
use campusbooks_types::models::{
    Book, Conversation, Message, Report, ReportStatus, User,
};

use crate::{Store, StoreError, StoreInner};

/// Counts for the admin analytics tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketStats {
    pub users: usize,
    pub listings: usize,
    pub featured_listings: usize,
    pub pending_reports: usize,
}

impl Store {
    // -- Books --

    pub fn list_books(&self) -> Result<Vec<Book>, StoreError> {
        self.with_inner(|inner| Ok(inner.books.clone()))
    }

    pub fn get_book(&self, id: &str) -> Result<Option<Book>, StoreError> {
        self.with_inner(|inner| Ok(inner.books.iter().find(|b| b.id == id).cloned()))
    }

    pub fn featured_books(&self) -> Result<Vec<Book>, StoreError> {
        self.with_inner(|inner| Ok(inner.books.iter().filter(|b| b.featured).cloned().collect()))
    }

    pub fn books_by_seller(&self, seller_id: &str) -> Result<Vec<Book>, StoreError> {
        self.with_inner(|inner| {
            Ok(inner
                .books
                .iter()
                .filter(|b| b.seller_id == seller_id)
                .cloned()
                .collect())
        })
    }

    /// Client-side search: a free-text query over title/author/department/
    /// course combined with the optional filters, all ANDed together.
    /// Catalog order is preserved; there is no ranking.
    pub fn search_books(
        &self,
        query: &str,
        filters: &BookFilters,
    ) -> Result<Vec<Book>, StoreError> {
        let needle = query.trim().to_lowercase();
        self.with_inner(|inner| {
            Ok(inner
                .books
                .iter()
                .filter(|b| matches_query(b, &needle) && matches_filters(b, filters))
                .cloned()
                .collect())
        })
    }

    pub fn create_book(&self, draft: ListingDraft, seller: &User) -> Result<Book, StoreError> {
        self.with_inner_mut(|inner| {
            let book = Book {
                id: Uuid::new_v4().to_string(),
                title: draft.title,
                author: draft.author,
                description: draft.description,
                price: draft.price,
                condition: draft.condition,
                course: draft.course,
                department: draft.department,
                cover_image: draft.cover_image,
                seller_id: seller.id.clone(),
                seller_name: seller.name.clone(),
                seller_image: seller.avatar.clone(),
                created_at: Utc::now(),
                featured: false,
            };
            inner.books.push(book.clone());
            debug!(book_id = %book.id, seller_id = %book.seller_id, "listing created");
            Ok(book)
        })
    }

    pub fn set_featured(&self, book_id: &str, featured: bool) -> Result<(), StoreError> {
        self.with_inner_mut(|inner| {
            let book = inner
                .books
                .iter_mut()
                .find(|b| b.id == book_id)
                .ok_or_else(|| StoreError::UnknownBook(book_id.to_string()))?;
            book.featured = featured;
            Ok(())
        })
    }

    pub fn remove_book(&self, book_id: &str) -> Result<(), StoreError> {
        self.with_inner_mut(|inner| {
            let before = inner.books.len();
            inner.books.retain(|b| b.id != book_id);
            if inner.books.len() == before {
                return Err(StoreError::UnknownBook(book_id.to_string()));
            }
            inner.wishlist.remove(book_id);
            Ok(())
        })
    }

    // -- Conversations --

    /// Sidebar listing: case-insensitive substring match on the participant
    /// name. Underlying order is preserved, not sorted by recency.
    pub fn list_conversations(&self, filter: &str) -> Result<Vec<Conversation>, StoreError> {
        let needle = filter.to_lowercase();
        self.with_inner(|inner| {
            Ok(inner
                .conversations
                .iter()
                .filter(|c| c.participant_name.to_lowercase().contains(&needle))
                .cloned()
                .collect())
        })
    }

    pub fn conversation(&self, id: &str) -> Result<Option<Conversation>, StoreError> {
        self.with_inner(|inner| Ok(inner.conversations.iter().find(|c| c.id == id).cloned()))
    }

    /// Selection for the messages page. A known id selects that thread; an
    /// unknown or absent id falls back to the first thread in the list, and
    /// an empty store yields no selection. The fallback-on-miss is deliberate
    /// behavior, not an error.
    pub fn resolve_conversation(
        &self,
        requested: Option<&str>,
    ) -> Result<Option<Conversation>, StoreError> {
        self.with_inner(|inner| {
            let found = requested.and_then(|id| inner.conversations.iter().find(|c| c.id == id));
            Ok(found.or_else(|| inner.conversations.first()).cloned())
        })
    }

    /// Ordered thread for a conversation; unknown ids yield an empty list.
    pub fn messages(&self, conversation_id: &str) -> Result<Vec<Message>, StoreError> {
        self.with_inner(|inner| {
            Ok(inner
                .messages
                .get(conversation_id)
                .cloned()
                .unwrap_or_default())
        })
    }

    /// Append a message to a thread. Blank text and unknown conversations are
    /// rejected before anything is touched; on success the message lands at
    /// the end of the thread and the conversation's last-message text and
    /// timestamp are updated in the same critical section.
    pub fn send_message(
        &self,
        conversation_id: &str,
        sender_id: &str,
        text: &str,
    ) -> Result<Message, StoreError> {
        if text.trim().is_empty() {
            return Err(StoreError::BlankMessage);
        }
        self.with_inner_mut(|inner| {
            let recipient_id = inner
                .conversations
                .iter()
                .find(|c| c.id == conversation_id)
                .map(|c| c.participant_id.clone())
                .ok_or_else(|| StoreError::UnknownConversation(conversation_id.to_string()))?;

            let message = Message {
                id: Uuid::new_v4().to_string(),
                sender_id: sender_id.to_string(),
                recipient_id,
                content: text.to_string(),
                timestamp: Utc::now(),
                read: true,
                book_id: None,
            };
            inner.append_message(conversation_id, message)
        })
    }

    /// The "contact seller" form on a book page: reuse the existing thread
    /// with that seller, or start a new one, and tag the message with the
    /// book it is about.
    pub fn contact_seller(
        &self,
        book_id: &str,
        sender: &User,
        text: &str,
    ) -> Result<Message, StoreError> {
        if text.trim().is_empty() {
            return Err(StoreError::BlankMessage);
        }
        self.with_inner_mut(|inner| {
            let book = inner
                .books
                .iter()
                .find(|b| b.id == book_id)
                .cloned()
                .ok_or_else(|| StoreError::UnknownBook(book_id.to_string()))?;

            let conversation_id = match inner
                .conversations
                .iter()
                .find(|c| c.participant_id == book.seller_id)
            {
                Some(existing) => existing.id.clone(),
                None => {
                    let conversation = Conversation {
                        id: Uuid::new_v4().to_string(),
                        participant_id: book.seller_id.clone(),
                        participant_name: book.seller_name.clone(),
                        participant_image: book.seller_image.clone(),
                        last_message: String::new(),
                        timestamp: Utc::now(),
                        unread_count: 0,
                    };
                    let id = conversation.id.clone();
                    debug!(seller_id = %book.seller_id, "starting conversation with seller");
                    inner.conversations.push(conversation);
                    id
                }
            };

            let message = Message {
                id: Uuid::new_v4().to_string(),
                sender_id: sender.id.clone(),
                recipient_id: book.seller_id.clone(),
                content: text.to_string(),
                timestamp: Utc::now(),
                read: true,
                book_id: Some(book.id.clone()),
            };
            inner.append_message(&conversation_id, message)
        })
    }

    /// The book a thread is about: the first book-tagged message wins.
    pub fn related_book(&self, conversation_id: &str) -> Result<Option<Book>, StoreError> {
        self.with_inner(|inner| {
            let book_id = inner
                .messages
                .get(conversation_id)
                .and_then(|thread| thread.iter().find_map(|m| m.book_id.clone()));
            Ok(book_id.and_then(|id| inner.books.iter().find(|b| b.id == id).cloned()))
        })
    }

    /// Clear the unread badge for a thread. Unknown ids are a no-op.
    pub fn mark_read(&self, conversation_id: &str) -> Result<(), StoreError> {
        self.with_inner_mut(|inner| {
            if let Some(conversation) = inner
                .conversations
                .iter_mut()
                .find(|c| c.id == conversation_id)
            {
                conversation.unread_count = 0;
            }
            if let Some(thread) = inner.messages.get_mut(conversation_id) {
                for message in thread.iter_mut() {
                    message.read = true;
                }
            }
            Ok(())
        })
    }

    /// Total unread messages across all threads, for the header badge.
    pub fn unread_total(&self) -> Result<u32, StoreError> {
        self.with_inner(|inner| Ok(inner.conversations.iter().map(|c| c.unread_count).sum()))
    }

    // -- Wishlist --

    /// Toggle a book id in the wishlist set: removes if present, inserts if
    /// not. Returns whether the id is wishlisted afterwards.
    pub fn toggle_wishlist(&self, book_id: &str) -> Result<bool, StoreError> {
        self.with_inner_mut(|inner| {
            if inner.wishlist.remove(book_id) {
                Ok(false)
            } else {
                inner.wishlist.insert(book_id.to_string());
                Ok(true)
            }
        })
    }

    pub fn is_wishlisted(&self, book_id: &str) -> Result<bool, StoreError> {
        self.with_inner(|inner| Ok(inner.wishlist.contains(book_id)))
    }

    pub fn wishlist_ids(&self) -> Result<Vec<String>, StoreError> {
        self.with_inner(|inner| Ok(inner.wishlist.iter().cloned().collect()))
    }

    /// Wishlisted books in catalog order.
    pub fn wishlist_books(&self) -> Result<Vec<Book>, StoreError> {
        self.with_inner(|inner| {
            Ok(inner
                .books
                .iter()
                .filter(|b| inner.wishlist.contains(&b.id))
                .cloned()
                .collect())
        })
    }

    // -- Users --

    pub fn list_users(&self) -> Result<Vec<User>, StoreError> {
        self.with_inner(|inner| Ok(inner.users.clone()))
    }

    pub fn get_user(&self, id: &str) -> Result<Option<User>, StoreError> {
        self.with_inner(|inner| Ok(inner.users.iter().find(|u| u.id == id).cloned()))
    }

    /// Admin search: case-insensitive substring match on name or email.
    pub fn search_users(&self, query: &str) -> Result<Vec<User>, StoreError> {
        let needle = query.trim().to_lowercase();
        self.with_inner(|inner| {
            Ok(inner
                .users
                .iter()
                .filter(|u| {
                    u.name.to_lowercase().contains(&needle)
                        || u.email.to_lowercase().contains(&needle)
                })
                .cloned()
                .collect())
        })
    }

    pub fn remove_user(&self, user_id: &str) -> Result<(), StoreError> {
        self.with_inner_mut(|inner| {
            let before = inner.users.len();
            inner.users.retain(|u| u.id != user_id);
            if inner.users.len() == before {
                return Err(StoreError::UnknownUser(user_id.to_string()));
            }
            Ok(())
        })
    }

    // -- Reports --

    pub fn reports(&self) -> Result<Vec<Report>, StoreError> {
        self.with_inner(|inner| Ok(inner.reports.clone()))
    }

    pub fn pending_report_count(&self) -> Result<usize, StoreError> {
        self.with_inner(|inner| {
            Ok(inner
                .reports
                .iter()
                .filter(|r| r.status == ReportStatus::Pending)
                .count())
        })
    }

    pub fn set_report_status(
        &self,
        report_id: &str,
        status: ReportStatus,
    ) -> Result<(), StoreError> {
        self.with_inner_mut(|inner| {
            let report = inner
                .reports
                .iter_mut()
                .find(|r| r.id == report_id)
                .ok_or_else(|| StoreError::UnknownReport(report_id.to_string()))?;
            report.status = status;
            Ok(())
        })
    }

    // -- Stats --

    pub fn stats(&self) -> Result<MarketStats, StoreError> {
        self.with_inner(|inner| {
            Ok(MarketStats {
                users: inner.users.len(),
                listings: inner.books.len(),
                featured_listings: inner.books.iter().filter(|b| b.featured).count(),
                pending_reports: inner
                    .reports
                    .iter()
                    .filter(|r| r.status == ReportStatus::Pending)
                    .count(),
            })
        })
    }
}

impl StoreInner {
    /// The one place the denormalized last-message fields get written:
    /// appending a message and syncing the conversation happen together or
    /// not at all.
    fn append_message(
        &mut self,
        conversation_id: &str,
        message: Message,
    ) -> Result<Message, StoreError> {
        let conversation = self
            .conversations
            .iter_mut()
            .find(|c| c.id == conversation_id)
            .ok_or_else(|| StoreError::UnknownConversation(conversation_id.to_string()))?;

        conversation.last_message = message.content.clone();
        conversation.timestamp = message.timestamp;
        self.messages
            .entry(conversation_id.to_string())
            .or_default()
            .push(message.clone());
        Ok(message)
    }
}

fn matches_query(book: &Book, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    book.title.to_lowercase().contains(needle)
        || book.author.to_lowercase().contains(needle)
        || book
            .department
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(needle))
        || book
            .course
            .as_deref()
            .is_some_and(|c| c.to_lowercase().contains(needle))
}

fn matches_filters(book: &Book, filters: &BookFilters) -> bool {
    if let Some(department) = &filters.department {
        if !book
            .department
            .as_deref()
            .is_some_and(|d| d.eq_ignore_ascii_case(department))
        {
            return false;
        }
    }
    if let Some(course) = &filters.course {
        if !book
            .course
            .as_deref()
            .is_some_and(|c| c.eq_ignore_ascii_case(course))
        {
            return false;
        }
    }
    if let Some(condition) = filters.condition {
        if book.condition != condition {
            return false;
        }
    }
    if let Some(min) = filters.min_price {
        if book.price < min {
            return false;
        }
    }
    if let Some(max) = filters.max_price {
        if book.price > max {
            return false;
        }
    }
    true
}
