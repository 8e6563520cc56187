//! webpilot
//!
//! Retry-aware browser automation over a remote WebDriver session. A
//! [`Pilot`] resolves elements with a bounded polling retry loop, exposes
//! locate-and-act primitives (get, click, submit, clear, send_keys), and
//! replays declarative command sequences:
//!
//! ```no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use webpilot::{Pilot, SequenceStep, WebDriverSession};
//! use thirtyfour::{DesiredCapabilities, WebDriver};
//!
//! let driver = WebDriver::new("http://localhost:9515", DesiredCapabilities::chrome()).await?;
//! let pilot = Pilot::new(WebDriverSession::new(driver));
//!
//! let sequence: Vec<SequenceStep> = serde_json::from_value(serde_json::json!([
//!     {"get": {"url": "https://www.google.com"}},
//!     {"send_keys": {"by": "xpath", "value": "//textarea[@title='Search']", "text": "iphone"}},
//!     {"send_keys": {"by": "xpath", "value": "//textarea[@title='Search']", "text": webpilot::keys::ENTER}},
//! ]))?;
//!
//! pilot.execute(&sequence).await?;
//! # Ok(())
//! # }
//! ```

pub mod keys;
pub mod pilot;
pub mod session;

use std::path::PathBuf;

pub use pilot::{
    ActionOptions, GetOptions, Pilot, PilotError, SendKeysOptions, SequenceStep, DEFAULT_TIMEOUT,
};
pub use session::{
    Locator, RemoteElement, RemoteSession, SessionError, Strategy, WebDriverElement,
    WebDriverSession,
};

/// Get log directory path (shared across modules)
pub fn log_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("webpilot").join("logs"))
}

/// Initialize tracing with console output and daily-rolling file logs.
/// Returns the file writer guard; keep it alive for the program's lifetime.
pub fn init_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false);

    if let Some(log_dir) = log_dir() {
        let _ = std::fs::create_dir_all(&log_dir);
        let file_appender = tracing_appender::rolling::daily(&log_dir, "webpilot.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let file_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .with_writer(non_blocking);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .with(file_layer)
            .init();

        Some(guard)
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .init();

        None
    }
}
