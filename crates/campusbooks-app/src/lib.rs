pub mod config;
pub mod pages;
pub mod routes;

use anyhow::Result;
use tracing::info;

use campusbooks_session::{Session, SessionStorage};
use campusbooks_store::Store;
use campusbooks_types::forms::ListingForm;

pub use config::AppConfig;
pub use routes::{Resolution, Route};

/// Initialize the tracing subscriber. `RUST_LOG` wins when set.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campusbooks=debug".into()),
        )
        .init();
}

/// Composition root: owns the session and the store, and carries the
/// configured artificial latency into the operations that simulate a
/// network round-trip.
pub struct App {
    pub config: AppConfig,
    pub store: Store,
    pub session: Session,
}

impl App {
    pub fn init(config: AppConfig) -> Result<Self> {
        let storage = SessionStorage::new(&config.state_dir);
        let session = Session::load(storage)?.with_latency(config.fake_latency());
        let store = if config.demo_data {
            Store::with_demo_data()
        } else {
            Store::new()
        };
        info!(
            state_dir = %config.state_dir.display(),
            demo_data = config.demo_data,
            "app initialized"
        );
        Ok(Self {
            config,
            store,
            session,
        })
    }

    /// Resolve a requested path against the current session.
    pub fn resolve(&self, path: &str) -> Resolution {
        routes::resolve(path, &self.session)
    }

    pub async fn login(&mut self, email: &str, password: &str) -> bool {
        self.session.login(email, password).await
    }

    pub async fn signup(&mut self, name: &str, email: &str, password: &str) -> bool {
        self.session.signup(name, email, password).await
    }

    pub fn logout(&mut self) {
        self.session.logout();
    }

    /// Submit the listing form. Validation failures return immediately; a
    /// successful submission waits out the simulated round-trip before the
    /// UI navigates back to the dashboard.
    pub async fn submit_listing(&self, form: &ListingForm) -> Result<pages::upload::UploadOutcome> {
        let seller = self
            .session
            .user()
            .ok_or_else(|| anyhow::anyhow!("not signed in"))?;

        let outcome = pages::upload::submit(&self.store, seller, form)?;
        if matches!(outcome, pages::upload::UploadOutcome::Created(_)) {
            tokio::time::sleep(self.config.fake_latency()).await;
        }
        Ok(outcome)
    }
}
