use campusbooks_store::{MarketStats, Store, StoreError};
use campusbooks_types::models::{Book, Report, ReportStatus, User};

/// One row of the admin users table.
#[derive(Debug, Clone)]
pub struct AdminUserRow {
    pub user: User,
    pub books_listed: usize,
}

/// The admin panel: users, books, and reports tabs share one search box;
/// the analytics tab shows the stats counters.
#[derive(Debug, Clone)]
pub struct AdminView {
    pub users: Vec<AdminUserRow>,
    pub books: Vec<Book>,
    pub reports: Vec<Report>,
    pub pending_reports: usize,
    pub stats: MarketStats,
}

pub fn admin(store: &Store, search: &str) -> Result<AdminView, StoreError> {
    let users = store
        .search_users(search)?
        .into_iter()
        .map(|user| {
            let books_listed = store.books_by_seller(&user.id)?.len();
            Ok(AdminUserRow { user, books_listed })
        })
        .collect::<Result<Vec<_>, StoreError>>()?;

    Ok(AdminView {
        users,
        books: store.search_books(search, &Default::default())?,
        reports: store.reports()?,
        pending_reports: store.pending_report_count()?,
        stats: store.stats()?,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportAction {
    Resolve,
    Reject,
}

pub fn handle_report(
    store: &Store,
    report_id: &str,
    action: ReportAction,
) -> Result<(), StoreError> {
    let status = match action {
        ReportAction::Resolve => ReportStatus::Resolved,
        ReportAction::Reject => ReportStatus::Rejected,
    };
    store.set_report_status(report_id, status)
}

pub fn feature_book(store: &Store, book_id: &str, featured: bool) -> Result<(), StoreError> {
    store.set_featured(book_id, featured)
}

pub fn remove_book(store: &Store, book_id: &str) -> Result<(), StoreError> {
    store.remove_book(book_id)
}

pub fn remove_user(store: &Store, user_id: &str) -> Result<(), StoreError> {
    store.remove_user(user_id)
}
