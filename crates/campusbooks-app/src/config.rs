use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;

/// App configuration, read once at startup from the environment (a `.env`
/// file is honored if present).
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the durable session record.
    pub state_dir: PathBuf,
    /// Fixed artificial delay applied to login/signup and listing
    /// submission, mimicking network latency.
    pub fake_latency_ms: u64,
    /// Whether to seed the store with the demo catalog.
    pub demo_data: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let state_dir =
            env::var("CAMPUSBOOKS_STATE_DIR").unwrap_or_else(|_| ".campusbooks".into());
        let fake_latency_ms: u64 = env::var("CAMPUSBOOKS_FAKE_LATENCY_MS")
            .unwrap_or_else(|_| "0".into())
            .parse()?;
        let demo_data = env::var("CAMPUSBOOKS_DEMO_DATA")
            .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
            .unwrap_or(true);

        Ok(Self {
            state_dir: PathBuf::from(state_dir),
            fake_latency_ms,
            demo_data,
        })
    }

    pub fn fake_latency(&self) -> Duration {
        Duration::from_millis(self.fake_latency_ms)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            state_dir: PathBuf::from(".campusbooks"),
            fake_latency_ms: 0,
            demo_data: true,
        }
    }
}
