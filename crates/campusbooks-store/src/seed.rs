//! Demo catalog: the users, listings, threads, and reports the app ships
//! with when no backend exists. Thread contents and the conversations'
//! last-message fields are kept in sync by construction.

use chrono::{DateTime, Duration, Utc};

use campusbooks_types::models::{
    Book, BookCondition, Conversation, Message, Report, ReportStatus, ReportTarget, User,
};

use crate::StoreInner;

pub(crate) fn populate(inner: &mut StoreInner) {
    let now = Utc::now();

    inner.users = users();
    inner.books = books(now);
    inner.reports = reports(now);

    for (conversation, thread) in threads(now) {
        inner
            .messages
            .insert(conversation.id.clone(), thread);
        inner.conversations.push(conversation);
    }

    inner.wishlist.insert("5".to_string());
}

fn users() -> Vec<User> {
    vec![
        User {
            id: "user1".into(),
            name: "Alice Johnson".into(),
            email: "alice@university.edu".into(),
            avatar: Some("https://i.pravatar.cc/100?img=1".into()),
            is_admin: true,
        },
        User {
            id: "user2".into(),
            name: "Mark Wilson".into(),
            email: "mark@university.edu".into(),
            avatar: Some("https://i.pravatar.cc/100?img=2".into()),
            is_admin: false,
        },
        User {
            id: "user3".into(),
            name: "David Chen".into(),
            email: "david@university.edu".into(),
            avatar: Some("https://i.pravatar.cc/100?img=3".into()),
            is_admin: false,
        },
        User {
            id: "user4".into(),
            name: "Jessica Taylor".into(),
            email: "jessica@university.edu".into(),
            avatar: Some("https://i.pravatar.cc/100?img=4".into()),
            is_admin: false,
        },
    ]
}

fn books(now: DateTime<Utc>) -> Vec<Book> {
    vec![
        Book {
            id: "1".into(),
            title: "Introduction to Computer Science".into(),
            author: "John Smith".into(),
            description: "A comprehensive introduction to computer science fundamentals.".into(),
            price: 45.99,
            condition: BookCondition::VeryGood,
            course: Some("CS101".into()),
            department: Some("Computer Science".into()),
            cover_image: "https://images.unsplash.com/photo-1517842645767-c639042777db?q=80&w=300"
                .into(),
            seller_id: "user1".into(),
            seller_name: "Alice Johnson".into(),
            seller_image: Some("https://i.pravatar.cc/100?img=1".into()),
            created_at: now,
            featured: true,
        },
        Book {
            id: "2".into(),
            title: "Calculus for Engineers".into(),
            author: "Robert Brown".into(),
            description: "Advanced calculus concepts for engineering students.".into(),
            price: 38.50,
            condition: BookCondition::Good,
            course: Some("MATH202".into()),
            department: Some("Mathematics".into()),
            cover_image: "https://images.unsplash.com/photo-1613125700782-8394bec16894?q=80&w=300"
                .into(),
            seller_id: "user2".into(),
            seller_name: "Mark Wilson".into(),
            seller_image: Some("https://i.pravatar.cc/100?img=2".into()),
            created_at: now,
            featured: true,
        },
        Book {
            id: "3".into(),
            title: "Principles of Economics".into(),
            author: "Sarah Miller".into(),
            description: "Introduction to micro and macroeconomic principles.".into(),
            price: 52.25,
            condition: BookCondition::LikeNew,
            course: Some("ECON101".into()),
            department: Some("Business".into()),
            cover_image: "https://images.unsplash.com/photo-1621944190310-e3cca1564bd7?q=80&w=300"
                .into(),
            seller_id: "user3".into(),
            seller_name: "David Chen".into(),
            seller_image: Some("https://i.pravatar.cc/100?img=3".into()),
            created_at: now,
            featured: true,
        },
        Book {
            id: "5".into(),
            title: "Advanced Data Structures".into(),
            author: "Thomas Reed".into(),
            description: "In-depth coverage of advanced data structures and algorithms.".into(),
            price: 55.75,
            condition: BookCondition::VeryGood,
            course: Some("CS301".into()),
            department: Some("Computer Science".into()),
            cover_image: "https://images.unsplash.com/photo-1555066931-4365d14bab8c?q=80&w=300"
                .into(),
            seller_id: "user5".into(),
            seller_name: "Ryan Harris".into(),
            seller_image: None,
            created_at: now,
            featured: false,
        },
        Book {
            id: "10".into(),
            title: "Biology Fundamentals".into(),
            author: "Patricia Green".into(),
            description: "An introductory textbook covering basic biological concepts.".into(),
            price: 42.50,
            condition: BookCondition::Good,
            course: Some("BIO101".into()),
            department: Some("Science".into()),
            cover_image: "https://images.unsplash.com/photo-1530538987395-032d1800fdd4?q=80&w=300"
                .into(),
            seller_id: "user1".into(),
            seller_name: "Alice Johnson".into(),
            seller_image: Some("https://i.pravatar.cc/100?img=1".into()),
            created_at: now,
            featured: false,
        },
        Book {
            id: "11".into(),
            title: "History of Western Art".into(),
            author: "Elizabeth Wallace".into(),
            description: "A survey of Western art from ancient to modern periods.".into(),
            price: 35.00,
            condition: BookCondition::LikeNew,
            course: Some("ART202".into()),
            department: Some("Liberal Arts".into()),
            cover_image: "https://images.unsplash.com/photo-1549497538-303791108f95?q=80&w=300"
                .into(),
            seller_id: "user1".into(),
            seller_name: "Alice Johnson".into(),
            seller_image: Some("https://i.pravatar.cc/100?img=1".into()),
            created_at: now,
            featured: false,
        },
    ]
}

fn threads(now: DateTime<Utc>) -> Vec<(Conversation, Vec<Message>)> {
    let conv1_thread = vec![
        message("msg1", "user2", "user1", "Hi, is the Calculus book still available?",
            now - Duration::minutes(60), Some("2")),
        message("msg2", "user1", "user2", "Yes, it's still available! Are you interested?",
            now - Duration::minutes(50), None),
        message("msg3", "user2", "user1",
            "Great! How much are you selling it for again? And what's the condition like?",
            now - Duration::minutes(40), None),
        message("msg4", "user1", "user2",
            "I'm selling it for $38.50. It's in good condition with minimal highlighting in the first few chapters.",
            now - Duration::minutes(30), None),
        message("msg5", "user2", "user1",
            "Sounds good. Would you be able to meet tomorrow at the student center?",
            now - Duration::minutes(10), None),
    ];

    let conv2_thread = vec![
        message("msg6", "user3", "user1",
            "Hello! I'm interested in your Economics book. Is it still for sale?",
            now - Duration::hours(26), Some("3")),
        message("msg7", "user1", "user3", "Hi David! Yes, it's still available.",
            now - Duration::hours(25), None),
        message("msg8", "user3", "user1",
            "Great! Would you be willing to meet on campus to make the exchange?",
            now - Duration::seconds(86_500), None),
        message("msg9", "user1", "user3",
            "Sure, I'm available tomorrow afternoon. Does that work for you?",
            now - Duration::seconds(86_400), None),
        message("msg10", "user3", "user1", "Thanks for the information. Can we meet tomorrow?",
            now - Duration::seconds(86_300), None),
    ];

    let conv3_thread = vec![message(
        "msg11",
        "user4",
        "user1",
        "Great! See you at the library.",
        now - Duration::days(2),
        None,
    )];

    vec![
        (
            conversation("conv1", "user2", "Mark Wilson", 2, &conv1_thread),
            conv1_thread,
        ),
        (
            conversation("conv2", "user3", "David Chen", 3, &conv2_thread),
            conv2_thread,
        ),
        (
            conversation("conv3", "user4", "Jessica Taylor", 4, &conv3_thread),
            conv3_thread,
        ),
    ]
}

fn conversation(
    id: &str,
    participant_id: &str,
    participant_name: &str,
    avatar_index: u8,
    thread: &[Message],
) -> Conversation {
    // Denormalized fields mirror the newest message in the thread.
    let last = thread.last();
    Conversation {
        id: id.into(),
        participant_id: participant_id.into(),
        participant_name: participant_name.into(),
        participant_image: Some(format!("https://i.pravatar.cc/100?img={avatar_index}")),
        last_message: last.map(|m| m.content.clone()).unwrap_or_default(),
        timestamp: last.map(|m| m.timestamp).unwrap_or_else(Utc::now),
        unread_count: if id == "conv1" { 2 } else { 0 },
    }
}

fn message(
    id: &str,
    sender_id: &str,
    recipient_id: &str,
    content: &str,
    timestamp: DateTime<Utc>,
    book_id: Option<&str>,
) -> Message {
    Message {
        id: id.into(),
        sender_id: sender_id.into(),
        recipient_id: recipient_id.into(),
        content: content.into(),
        timestamp,
        read: true,
        book_id: book_id.map(String::from),
    }
}

fn reports(now: DateTime<Utc>) -> Vec<Report> {
    vec![
        Report {
            id: "report1".into(),
            reporter_id: "user2".into(),
            reporter_name: "Mark Wilson".into(),
            target: ReportTarget::Book("4".into()),
            reason: "Misleading description. Book is in worse condition than stated.".into(),
            status: ReportStatus::Pending,
            created_at: now - Duration::days(1),
        },
        Report {
            id: "report2".into(),
            reporter_id: "user3".into(),
            reporter_name: "David Chen".into(),
            target: ReportTarget::User("user4".into()),
            reason: "User didn't show up for scheduled meeting.".into(),
            status: ReportStatus::Pending,
            created_at: now - Duration::days(2),
        },
    ]
}
