//! The navigation surface as a typed table: paths parse into routes, routes
//! print back to paths, and protected routes redirect unauthenticated
//! visitors to the login page with the requested location preserved.

use tracing::debug;

use campusbooks_session::Session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Signup,
    ForgotPassword,
    HowItWorks,
    Books,
    BookDetails(String),
    BookUpload,
    Dashboard,
    /// `/messages` or `/messages/:conversation_id`.
    Messages(Option<String>),
    Admin,
    Wishlist,
}

impl Route {
    pub fn parse(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();

        let route = match segments.as_slice() {
            [] => Route::Home,
            ["login"] => Route::Login,
            ["signup"] => Route::Signup,
            ["forgot-password"] => Route::ForgotPassword,
            ["how-it-works"] => Route::HowItWorks,
            ["books"] => Route::Books,
            ["book", id] => Route::BookDetails((*id).to_string()),
            ["book-upload"] => Route::BookUpload,
            ["dashboard"] => Route::Dashboard,
            ["messages"] => Route::Messages(None),
            ["messages", id] => Route::Messages(Some((*id).to_string())),
            ["admin"] => Route::Admin,
            ["wishlist"] => Route::Wishlist,
            _ => return None,
        };
        Some(route)
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".into(),
            Route::Login => "/login".into(),
            Route::Signup => "/signup".into(),
            Route::ForgotPassword => "/forgot-password".into(),
            Route::HowItWorks => "/how-it-works".into(),
            Route::Books => "/books".into(),
            Route::BookDetails(id) => format!("/book/{id}"),
            Route::BookUpload => "/book-upload".into(),
            Route::Dashboard => "/dashboard".into(),
            Route::Messages(None) => "/messages".into(),
            Route::Messages(Some(id)) => format!("/messages/{id}"),
            Route::Admin => "/admin".into(),
            Route::Wishlist => "/wishlist".into(),
        }
    }

    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Route::BookUpload
                | Route::Dashboard
                | Route::Messages(_)
                | Route::Admin
                | Route::Wishlist
        )
    }
}

/// What the router decided for a requested path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Page(Route),
    /// Protected route, no session: go log in, then come back here.
    RedirectToLogin { from: String },
    NotFound(String),
}

/// Resolve a requested path against the current session. Missing pages and
/// insufficient permissions both land on the not-found view; nothing here is
/// fatal.
pub fn resolve(path: &str, session: &Session) -> Resolution {
    let Some(route) = Route::parse(path) else {
        debug!(path, "no route matched");
        return Resolution::NotFound(path.to_string());
    };

    if route.requires_auth() && !session.is_authenticated() {
        return Resolution::RedirectToLogin {
            from: route.path(),
        };
    }

    if route == Route::Admin {
        let is_admin = session.user().is_some_and(|u| u.is_admin);
        if !is_admin {
            debug!("admin route refused for non-admin session");
            return Resolution::NotFound(path.to_string());
        }
    }

    Resolution::Page(route)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        let routes = [
            Route::Home,
            Route::Login,
            Route::Signup,
            Route::ForgotPassword,
            Route::HowItWorks,
            Route::Books,
            Route::BookDetails("2".into()),
            Route::BookUpload,
            Route::Dashboard,
            Route::Messages(None),
            Route::Messages(Some("conv1".into())),
            Route::Admin,
            Route::Wishlist,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert_eq!(Route::parse("/books/"), Some(Route::Books));
        assert_eq!(Route::parse("/"), Some(Route::Home));
    }

    #[test]
    fn unknown_paths_do_not_parse() {
        assert_eq!(Route::parse("/profile"), None);
        assert_eq!(Route::parse("/book"), None);
        assert_eq!(Route::parse("/messages/a/b"), None);
    }

    #[test]
    fn public_routes_do_not_require_auth() {
        for route in [Route::Home, Route::Login, Route::Books, Route::HowItWorks] {
            assert!(!route.requires_auth());
        }
        for route in [
            Route::Dashboard,
            Route::Messages(None),
            Route::Admin,
            Route::Wishlist,
            Route::BookUpload,
        ] {
            assert!(route.requires_auth());
        }
    }
}
