//! Bounded-retry element resolution.
//!
//! Turns a (locator, timeout, initial wait) triple into a ready element or a
//! [`PilotError::ResolutionTimeout`]. The driver-level implicit wait is set to
//! a slice of the budget so each locate attempt retries briefly at the
//! transport level while the outer loop keeps re-polling readiness; a single
//! long implicit wait would burn the whole budget on one failed attempt.

use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::error;

use super::errors::PilotError;
use crate::session::{Locator, RemoteElement, RemoteSession};

/// Pacing between attempts in the resolve and navigate-verify loops.
pub(crate) const RETRY_INTERVAL: Duration = Duration::from_millis(100);

/// Fraction of the budget handed to each driver-level locate attempt.
const IMPLICIT_WAIT_DIVISOR: u32 = 5;

/// Resolve one element. The optional `initial_wait` is a fixed pre-delay and
/// not part of the retry budget. Never returns an element that failed the
/// readiness check.
pub(crate) async fn resolve<S: RemoteSession>(
    session: &S,
    locator: &Locator,
    timeout: Duration,
    initial_wait: Option<Duration>,
) -> Result<S::Element, PilotError> {
    if let Some(wait) = initial_wait {
        sleep(wait).await;
    }

    let deadline = Instant::now() + timeout;
    let slice = timeout / IMPLICIT_WAIT_DIVISOR;
    let mut last_error: Option<crate::session::SessionError> = None;

    loop {
        // Driver errors anywhere in the attempt are captured, not fatal; the
        // loop keeps retrying until the deadline.
        match session.set_implicit_wait(slice).await {
            Ok(()) => match session.locate(locator).await {
                Ok(element) => match element.is_ready().await {
                    Ok(true) => return Ok(element),
                    Ok(false) => {}
                    Err(e) => last_error = Some(e),
                },
                Err(e) => last_error = Some(e),
            },
            Err(e) => last_error = Some(e),
        }

        if Instant::now() >= deadline {
            error!(%locator, ?timeout, "element not ready before deadline");
            return Err(PilotError::ResolutionTimeout {
                locator: locator.clone(),
                timeout,
                source: last_error,
            });
        }

        sleep(RETRY_INTERVAL).await;
    }
}
