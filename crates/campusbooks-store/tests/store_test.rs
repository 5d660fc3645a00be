/// Integration tests for the in-memory store: messaging invariants, search
/// filtering, wishlist behavior, and the admin operations, all against the
/// demo catalog.
use campusbooks_store::{Store, StoreError};
use campusbooks_types::forms::{BookFilters, ListingForm};
use campusbooks_types::models::{BookCondition, ReportStatus, User};

fn session_user() -> User {
    User {
        id: "user1".into(),
        name: "Alice Johnson".into(),
        email: "alice@university.edu".into(),
        avatar: None,
        is_admin: true,
    }
}

// -- Messaging --

#[test]
fn send_message_appends_and_syncs_last_message() {
    let store = Store::with_demo_data();

    let sent = store.send_message("conv1", "user1", "hello").unwrap();

    let thread = store.messages("conv1").unwrap();
    let last = thread.last().unwrap();
    assert_eq!(last.id, sent.id);
    assert_eq!(last.content, "hello");
    assert_eq!(last.recipient_id, "user2");

    let conversation = store.conversation("conv1").unwrap().unwrap();
    assert_eq!(conversation.last_message, "hello");
    assert_eq!(conversation.timestamp, last.timestamp);
}

#[test]
fn blank_message_is_rejected_without_mutation() {
    let store = Store::with_demo_data();
    let before_thread = store.messages("conv1").unwrap();
    let before_conv = store.conversation("conv1").unwrap().unwrap();

    for text in ["", "   ", "\n\t"] {
        let err = store.send_message("conv1", "user1", text).unwrap_err();
        assert!(matches!(err, StoreError::BlankMessage));
    }

    let after_conv = store.conversation("conv1").unwrap().unwrap();
    assert_eq!(store.messages("conv1").unwrap().len(), before_thread.len());
    assert_eq!(after_conv.last_message, before_conv.last_message);
    assert_eq!(after_conv.timestamp, before_conv.timestamp);
}

#[test]
fn sending_to_unknown_conversation_is_rejected() {
    let store = Store::with_demo_data();
    let err = store.send_message("nope", "user1", "hello").unwrap_err();
    assert!(matches!(err, StoreError::UnknownConversation(_)));
}

#[test]
fn unknown_conversation_falls_back_to_first() {
    let store = Store::with_demo_data();

    let selected = store.resolve_conversation(Some("unknown")).unwrap().unwrap();
    assert_eq!(selected.id, "conv1");

    let selected = store.resolve_conversation(None).unwrap().unwrap();
    assert_eq!(selected.id, "conv1");

    let selected = store.resolve_conversation(Some("conv2")).unwrap().unwrap();
    assert_eq!(selected.id, "conv2");
}

#[test]
fn empty_store_resolves_no_conversation() {
    let store = Store::new();
    assert!(store.resolve_conversation(Some("conv1")).unwrap().is_none());
    assert!(store.resolve_conversation(None).unwrap().is_none());
}

#[test]
fn conversation_filter_matches_participant_name() {
    let store = Store::with_demo_data();

    let all = store.list_conversations("").unwrap();
    assert_eq!(all.len(), 3);
    // Order preserved from the underlying list, not recency-sorted.
    assert_eq!(all[0].id, "conv1");

    let filtered = store.list_conversations("david").unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].participant_name, "David Chen");

    assert!(store.list_conversations("zzz").unwrap().is_empty());
}

#[test]
fn messages_for_unknown_conversation_are_empty() {
    let store = Store::with_demo_data();
    assert!(store.messages("unknown").unwrap().is_empty());
}

#[test]
fn related_book_comes_from_first_tagged_message() {
    let store = Store::with_demo_data();
    let book = store.related_book("conv1").unwrap().unwrap();
    assert_eq!(book.title, "Calculus for Engineers");
    assert!(store.related_book("conv3").unwrap().is_none());
}

#[test]
fn contact_seller_reuses_existing_thread() {
    let store = Store::with_demo_data();
    // Book "2" is sold by user2, who already has thread conv1.
    let sent = store
        .contact_seller("2", &session_user(), "Is it still available?")
        .unwrap();
    assert_eq!(sent.book_id.as_deref(), Some("2"));

    assert_eq!(store.list_conversations("").unwrap().len(), 3);
    let conversation = store.conversation("conv1").unwrap().unwrap();
    assert_eq!(conversation.last_message, "Is it still available?");
}

#[test]
fn contact_seller_starts_thread_for_new_participant() {
    let store = Store::with_demo_data();
    // Book "5" is sold by user5, who has no thread yet.
    let sent = store
        .contact_seller("5", &session_user(), "Hi, interested in the book.")
        .unwrap();

    let conversations = store.list_conversations("").unwrap();
    assert_eq!(conversations.len(), 4);
    let new = conversations.last().unwrap();
    assert_eq!(new.participant_id, "user5");
    assert_eq!(new.last_message, "Hi, interested in the book.");

    let thread = store.messages(&new.id).unwrap();
    assert_eq!(thread.len(), 1);
    assert_eq!(thread[0].id, sent.id);
}

#[test]
fn mark_read_clears_unread_badge() {
    let store = Store::with_demo_data();
    assert_eq!(store.unread_total().unwrap(), 2);

    store.mark_read("conv1").unwrap();
    assert_eq!(store.unread_total().unwrap(), 0);

    // Unknown ids are a no-op, not an error.
    store.mark_read("unknown").unwrap();
}

// -- Search --

#[test]
fn empty_search_returns_whole_catalog() {
    let store = Store::with_demo_data();
    let all = store.search_books("", &BookFilters::default()).unwrap();
    assert_eq!(all.len(), store.list_books().unwrap().len());
}

#[test]
fn query_matches_title_author_department_and_course() {
    let store = Store::with_demo_data();
    let filters = BookFilters::default();

    assert_eq!(store.search_books("calculus", &filters).unwrap().len(), 1);
    assert_eq!(store.search_books("sarah miller", &filters).unwrap().len(), 1);
    assert_eq!(
        store.search_books("computer science", &filters).unwrap().len(),
        2
    );
    assert_eq!(store.search_books("MATH202", &filters).unwrap().len(), 1);
    assert!(store.search_books("quantum", &filters).unwrap().is_empty());
}

#[test]
fn filters_combine_with_logical_and() {
    let store = Store::with_demo_data();

    let filters = BookFilters {
        department: Some("Computer Science".into()),
        ..Default::default()
    };
    assert_eq!(store.search_books("", &filters).unwrap().len(), 2);

    let filters = BookFilters {
        department: Some("Computer Science".into()),
        condition: Some(BookCondition::VeryGood),
        ..Default::default()
    };
    assert_eq!(store.search_books("", &filters).unwrap().len(), 2);

    let filters = BookFilters {
        department: Some("Computer Science".into()),
        condition: Some(BookCondition::VeryGood),
        max_price: Some(50.0),
        ..Default::default()
    };
    let results = store.search_books("", &filters).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Introduction to Computer Science");
}

#[test]
fn adding_a_constraint_never_grows_the_result_set() {
    let store = Store::with_demo_data();

    let unconstrained = store
        .search_books("", &BookFilters::default())
        .unwrap()
        .len();

    let mut filters = BookFilters::default();
    filters.min_price = Some(40.0);
    let one = store.search_books("", &filters).unwrap().len();
    assert!(one <= unconstrained);

    filters.condition = Some(BookCondition::LikeNew);
    let two = store.search_books("", &filters).unwrap().len();
    assert!(two <= one);

    filters.department = Some("Business".into());
    let three = store.search_books("", &filters).unwrap().len();
    assert!(three <= two);
}

#[test]
fn price_bounds_are_inclusive() {
    let store = Store::with_demo_data();
    let filters = BookFilters {
        min_price: Some(38.50),
        max_price: Some(38.50),
        ..Default::default()
    };
    let results = store.search_books("", &filters).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "2");
}

// -- Listings --

#[test]
fn create_book_from_validated_draft() {
    let store = Store::with_demo_data();
    let form = ListingForm {
        title: "Organic Chemistry".into(),
        author: "Paula Bruice".into(),
        description: "Eighth edition, some notes in margins.".into(),
        price: "60".into(),
        condition: BookCondition::Fair,
        course: "CHEM201".into(),
        department: "Science".into(),
        cover_image: Some("covers/ochem.jpg".into()),
    };
    let draft = form.validate().unwrap();

    let book = store.create_book(draft, &session_user()).unwrap();
    assert_eq!(book.seller_name, "Alice Johnson");
    assert!(!book.featured);

    let mine = store.books_by_seller("user1").unwrap();
    assert!(mine.iter().any(|b| b.id == book.id));
}

#[test]
fn featured_toggle_and_removal() {
    let store = Store::with_demo_data();
    assert_eq!(store.featured_books().unwrap().len(), 3);

    store.set_featured("5", true).unwrap();
    assert_eq!(store.featured_books().unwrap().len(), 4);

    store.remove_book("5").unwrap();
    assert_eq!(store.featured_books().unwrap().len(), 3);
    // Removal also drops the book from the wishlist.
    assert!(!store.is_wishlisted("5").unwrap());

    assert!(matches!(
        store.set_featured("5", true).unwrap_err(),
        StoreError::UnknownBook(_)
    ));
}

// -- Wishlist --

#[test]
fn wishlist_toggle_is_involutive() {
    let store = Store::with_demo_data();

    for id in ["1", "5"] {
        let before = store.is_wishlisted(id).unwrap();
        store.toggle_wishlist(id).unwrap();
        store.toggle_wishlist(id).unwrap();
        assert_eq!(store.is_wishlisted(id).unwrap(), before);
    }
}

#[test]
fn wishlist_toggle_reports_membership() {
    let store = Store::new();
    assert!(store.toggle_wishlist("1").unwrap());
    assert!(store.is_wishlisted("1").unwrap());
    assert!(!store.toggle_wishlist("1").unwrap());
    assert!(!store.is_wishlisted("1").unwrap());
}

#[test]
fn wishlist_books_follow_catalog_order() {
    let store = Store::with_demo_data();
    store.toggle_wishlist("1").unwrap();
    let books = store.wishlist_books().unwrap();
    let ids: Vec<&str> = books.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "5"]);
}

// -- Admin --

#[test]
fn user_search_matches_name_or_email() {
    let store = Store::with_demo_data();
    assert_eq!(store.search_users("jessica").unwrap().len(), 1);
    assert_eq!(store.search_users("@university.edu").unwrap().len(), 4);
    assert!(store.search_users("nobody").unwrap().is_empty());

    assert_eq!(store.get_user("user2").unwrap().unwrap().name, "Mark Wilson");
    assert!(store.get_user("user9").unwrap().is_none());
}

#[test]
fn report_actions_update_status() {
    let store = Store::with_demo_data();
    assert_eq!(store.pending_report_count().unwrap(), 2);

    store
        .set_report_status("report1", ReportStatus::Resolved)
        .unwrap();
    store
        .set_report_status("report2", ReportStatus::Rejected)
        .unwrap();
    assert_eq!(store.pending_report_count().unwrap(), 0);

    assert!(matches!(
        store
            .set_report_status("report9", ReportStatus::Resolved)
            .unwrap_err(),
        StoreError::UnknownReport(_)
    ));
}

#[test]
fn stats_reflect_the_catalog() {
    let store = Store::with_demo_data();
    let stats = store.stats().unwrap();
    assert_eq!(stats.users, 4);
    assert_eq!(stats.listings, 6);
    assert_eq!(stats.featured_listings, 3);
    assert_eq!(stats.pending_reports, 2);

    store.remove_user("user4").unwrap();
    assert_eq!(store.stats().unwrap().users, 3);
}
