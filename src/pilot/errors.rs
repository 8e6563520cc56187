//! Pilot error types

use std::time::Duration;
use thiserror::Error;

use crate::session::{Locator, SessionError};

/// Errors produced by the pilot core.
#[derive(Error, Debug)]
pub enum PilotError {
    /// No ready element before the deadline. `source` carries the last
    /// underlying lookup error; it is `None` when an element was located but
    /// never became ready.
    #[error("no ready element for {locator} within {timeout:?}")]
    ResolutionTimeout {
        locator: Locator,
        timeout: Duration,
        #[source]
        source: Option<SessionError>,
    },

    /// The reload loop never observed the expected URL before the deadline.
    #[error("navigation to {url} not confirmed within {timeout:?}")]
    NavigationTimeout { url: String, timeout: Duration },

    /// A required key was absent (or malformed) in a command descriptor.
    #[error("command '{command}': invalid parameters: {detail}")]
    MissingParameter { command: String, detail: String },

    /// Failure propagated from the session backend.
    #[error(transparent)]
    Session(#[from] SessionError),
}
