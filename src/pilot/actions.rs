//! Action primitives.
//!
//! Every non-navigation action resolves its element through the retry engine,
//! records the element's outer HTML at debug level, then invokes exactly one
//! underlying operation. Elements are re-resolved on every call and never
//! cached.

use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::{debug, error, info, warn};

use super::errors::PilotError;
use super::resolver::{self, RETRY_INTERVAL};
use crate::keys;
use crate::session::{Locator, RemoteElement, RemoteSession};

/// Default retry budget for a single action.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Per-call policy for the element-backed actions.
#[derive(Debug, Clone)]
pub struct ActionOptions {
    /// How long resolution may retry.
    pub timeout: Duration,
    /// Fixed pre-delay before the first attempt.
    pub wait: Option<Duration>,
}

impl Default for ActionOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            wait: None,
        }
    }
}

/// Per-call policy for [`Pilot::get`].
#[derive(Debug, Clone)]
pub struct GetOptions {
    pub timeout: Duration,
    pub wait: Option<Duration>,
    /// Verify the post-navigation URL and reload until it matches.
    pub url_match: bool,
}

impl Default for GetOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            wait: None,
            url_match: true,
        }
    }
}

/// Per-call policy for [`Pilot::send_keys`].
#[derive(Debug, Clone)]
pub struct SendKeysOptions {
    /// Append to the existing content instead of replacing it.
    pub append: bool,
    pub timeout: Duration,
    pub wait: Option<Duration>,
}

impl Default for SendKeysOptions {
    fn default() -> Self {
        Self {
            append: false,
            timeout: DEFAULT_TIMEOUT,
            wait: None,
        }
    }
}

/// Drives one remote session through locate-and-act operations.
pub struct Pilot<S: RemoteSession> {
    session: S,
}

impl<S: RemoteSession> Pilot<S> {
    pub fn new(session: S) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn into_session(self) -> S {
        self.session
    }

    /// Resolve an element without acting on it.
    pub async fn resolve(
        &self,
        locator: &Locator,
        options: &ActionOptions,
    ) -> Result<S::Element, PilotError> {
        resolver::resolve(&self.session, locator, options.timeout, options.wait).await
    }

    /// Load a page. With `url_match` enabled the load is re-issued until the
    /// reported URL matches the target (modulo one trailing slash) or the
    /// deadline passes.
    pub async fn get(&self, url: &str, options: &GetOptions) -> Result<(), PilotError> {
        info!(url, "get");

        if let Some(wait) = options.wait {
            sleep(wait).await;
        }

        if !options.url_match {
            self.session.navigate(url).await?;
            return Ok(());
        }

        let target = strip_trailing_slash(url);
        let deadline = Instant::now() + options.timeout;

        loop {
            self.session.navigate(url).await?;
            let current = self.session.current_url().await?;

            if strip_trailing_slash(&current) == target {
                return Ok(());
            }
            if Instant::now() >= deadline {
                error!(url, %current, "url never matched before deadline");
                return Err(PilotError::NavigationTimeout {
                    url: url.to_string(),
                    timeout: options.timeout,
                });
            }
            warn!(url, %current, "url mismatch, reloading");
            sleep(RETRY_INTERVAL).await;
        }
    }

    pub async fn click(&self, locator: &Locator, options: &ActionOptions) -> Result<(), PilotError> {
        info!(%locator, "click");
        let element = self.resolve(locator, options).await?;
        log_markup("click", &element).await;
        element.click().await?;
        Ok(())
    }

    pub async fn submit(
        &self,
        locator: &Locator,
        options: &ActionOptions,
    ) -> Result<(), PilotError> {
        info!(%locator, "submit");
        let element = self.resolve(locator, options).await?;
        log_markup("submit", &element).await;
        element.submit().await?;
        Ok(())
    }

    pub async fn clear(&self, locator: &Locator, options: &ActionOptions) -> Result<(), PilotError> {
        info!(%locator, "clear");
        let element = self.resolve(locator, options).await?;
        log_markup("clear", &element).await;
        element.clear().await?;
        Ok(())
    }

    /// Type into an element. Unless `append` is set, existing content is
    /// cleared first; control-key codes (see [`crate::keys`]) are sent as-is
    /// and never trigger the clear.
    pub async fn send_keys(
        &self,
        locator: &Locator,
        text: &str,
        options: &SendKeysOptions,
    ) -> Result<(), PilotError> {
        info!(%locator, "send_keys");
        let element = resolver::resolve(&self.session, locator, options.timeout, options.wait).await?;
        log_markup("send_keys", &element).await;

        if !options.append && !keys::is_control_key(text) {
            element.clear().await?;
        }
        element.type_text(text).await?;
        Ok(())
    }
}

async fn log_markup<E: RemoteElement>(action: &str, element: &E) {
    // Observability only: markup read failures never fail the action.
    if let Ok(markup) = element.serialized_markup().await {
        debug!(action, %markup, "acting on element");
    }
}

/// Strip one trailing slash, and only when the slash is the final character.
fn strip_trailing_slash(url: &str) -> &str {
    url.strip_suffix('/').unwrap_or(url)
}
