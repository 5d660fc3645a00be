/// Session lifecycle tests: mock auth, the durable record, and restore on
/// reload, each against its own temp state directory.
use std::fs;

use campusbooks_session::{Session, SessionStorage};

fn temp_storage(tag: &str) -> SessionStorage {
    let dir = std::env::temp_dir().join(format!("campusbooks_session_{tag}_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    SessionStorage::new(dir)
}

#[tokio::test]
async fn login_succeeds_for_any_nonempty_credentials() {
    let mut session = Session::load(temp_storage("login")).unwrap();
    assert!(!session.is_authenticated());

    assert!(session.login("alice@university.edu", "hunter2").await);
    let user = session.user().unwrap();
    assert_eq!(user.email, "alice@university.edu");
    assert_eq!(user.name, "alice");
    assert!(user.id.starts_with("user-"));
    assert!(!user.is_admin);
}

#[tokio::test]
async fn empty_credentials_fail_without_mutating_state() {
    let storage = temp_storage("empty");
    let mut session = Session::load(storage.clone()).unwrap();

    assert!(!session.login("", "hunter2").await);
    assert!(!session.login("alice@university.edu", "").await);
    assert!(!session.is_authenticated());
    assert!(storage.load().unwrap().is_none());
}

#[tokio::test]
async fn signup_requires_every_field() {
    let mut session = Session::load(temp_storage("signup")).unwrap();

    assert!(!session.signup("", "bob@university.edu", "pw").await);
    assert!(!session.signup("Bob", "", "pw").await);
    assert!(!session.signup("Bob", "bob@university.edu", "").await);
    assert!(!session.is_authenticated());

    assert!(session.signup("Bob Smith", "bob@university.edu", "pw").await);
    assert_eq!(session.user().unwrap().name, "Bob Smith");
}

#[tokio::test]
async fn session_round_trips_through_the_durable_record() {
    let storage = temp_storage("reload");

    let mut session = Session::load(storage.clone()).unwrap();
    assert!(session.login("carol@university.edu", "pw").await);
    let id = session.user().unwrap().id.clone();
    assert!(storage.record_path().exists());

    // A fresh load simulates the page reload.
    let restored = Session::load(storage).unwrap();
    let user = restored.user().unwrap();
    assert_eq!(user.id, id);
    assert_eq!(user.email, "carol@university.edu");
}

#[tokio::test]
async fn logout_erases_the_durable_record() {
    let storage = temp_storage("logout");

    let mut session = Session::load(storage.clone()).unwrap();
    assert!(session.login("dave@university.edu", "pw").await);
    session.logout();

    assert!(!session.is_authenticated());
    assert!(!storage.record_path().exists());

    // Logging out twice is harmless.
    session.logout();
}

#[tokio::test]
async fn corrupt_record_is_treated_as_logged_out() {
    let storage = temp_storage("corrupt");
    fs::create_dir_all(storage.as_ref()).unwrap();
    fs::write(storage.record_path(), b"{not json").unwrap();

    let session = Session::load(storage).unwrap();
    assert!(!session.is_authenticated());
}
