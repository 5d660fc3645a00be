use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

/// Listing condition, serialized with the labels shown in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookCondition {
    New,
    #[serde(rename = "Like New")]
    LikeNew,
    #[serde(rename = "Very Good")]
    VeryGood,
    Good,
    Fair,
    Poor,
}

impl BookCondition {
    pub const ALL: [BookCondition; 6] = [
        BookCondition::New,
        BookCondition::LikeNew,
        BookCondition::VeryGood,
        BookCondition::Good,
        BookCondition::Fair,
        BookCondition::Poor,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BookCondition::New => "New",
            BookCondition::LikeNew => "Like New",
            BookCondition::VeryGood => "Very Good",
            BookCondition::Good => "Good",
            BookCondition::Fair => "Fair",
            BookCondition::Poor => "Poor",
        }
    }

    pub fn from_label(label: &str) -> Option<BookCondition> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }
}

impl Default for BookCondition {
    fn default() -> Self {
        BookCondition::Good
    }
}

impl fmt::Display for BookCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A listed book. Immutable once created, except for the admin-controlled
/// featured flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub description: String,
    pub price: f64,
    pub condition: BookCondition,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    pub cover_image: String,
    pub seller_id: String,
    pub seller_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_image: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub featured: bool,
}

/// One message within a conversation. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub recipient_id: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_id: Option<String>,
}

/// A thread between the session user and one other participant. The
/// `last_message`/`timestamp` pair always mirrors the most recently appended
/// message in the thread; the store updates both in the same mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub participant_id: String,
    pub participant_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant_image: Option<String>,
    pub last_message: String,
    pub timestamp: DateTime<Utc>,
    pub unread_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "lowercase")]
pub enum ReportTarget {
    Book(String),
    User(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Pending,
    Resolved,
    Rejected,
}

/// A moderation report filed against a listing or a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub reporter_id: String,
    pub reporter_name: String,
    pub target: ReportTarget,
    pub reason: String,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_labels_round_trip() {
        for c in BookCondition::ALL {
            assert_eq!(BookCondition::from_label(c.label()), Some(c));
        }
        assert_eq!(BookCondition::from_label("Mint"), None);
    }

    #[test]
    fn condition_serializes_with_ui_labels() {
        let json = serde_json::to_string(&BookCondition::LikeNew).unwrap();
        assert_eq!(json, "\"Like New\"");
        let back: BookCondition = serde_json::from_str("\"Very Good\"").unwrap();
        assert_eq!(back, BookCondition::VeryGood);
    }

    #[test]
    fn user_admin_flag_defaults_to_false() {
        let user: User =
            serde_json::from_str(r#"{"id":"user-1","name":"Alice","email":"alice@u.edu"}"#)
                .unwrap();
        assert!(!user.is_admin);
        assert!(user.avatar.is_none());
    }
}
