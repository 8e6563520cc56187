//! Remote session contract.
//!
//! The pilot core never talks to a browser directly. It drives anything that
//! implements [`RemoteSession`]: navigate to a URL, locate an element by a
//! strategy + value pair under a driver-level implicit wait, and read back the
//! current URL. Located elements implement [`RemoteElement`]. The default
//! backend is [`WebDriverSession`] over a connected `thirtyfour` driver.

mod webdriver;

#[cfg(test)]
pub(crate) mod mock;

pub use webdriver::{WebDriverElement, WebDriverSession};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Errors surfaced by a session backend.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Network, protocol or driver failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// No matching node within one implicit-wait slice.
    #[error("element not found: {0}")]
    NotFound(String),
}

/// How to search the remote DOM for a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Id,
    Name,
    #[serde(rename = "xpath")]
    XPath,
    #[serde(alias = "css_selector")]
    Css,
    ClassName,
    Tag,
    LinkText,
    PartialLinkText,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Id => "id",
            Strategy::Name => "name",
            Strategy::XPath => "xpath",
            Strategy::Css => "css",
            Strategy::ClassName => "class_name",
            Strategy::Tag => "tag",
            Strategy::LinkText => "link_text",
            Strategy::PartialLinkText => "partial_link_text",
        };
        f.write_str(name)
    }
}

/// A strategy + value pair identifying one DOM node. Constructed per call,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locator {
    pub strategy: Strategy,
    pub value: String,
}

impl Locator {
    pub fn new(strategy: Strategy, value: impl Into<String>) -> Self {
        Self {
            strategy,
            value: value.into(),
        }
    }

    pub fn id(value: impl Into<String>) -> Self {
        Self::new(Strategy::Id, value)
    }

    pub fn xpath(value: impl Into<String>) -> Self {
        Self::new(Strategy::XPath, value)
    }

    pub fn css(value: impl Into<String>) -> Self {
        Self::new(Strategy::Css, value)
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.strategy, self.value)
    }
}

/// A located DOM node. Owned transiently by one action; never cached
/// across calls.
#[async_trait]
pub trait RemoteElement: Send + Sync {
    /// True when the element is present and interactable, not merely in the
    /// document.
    async fn is_ready(&self) -> Result<bool, SessionError>;

    async fn click(&self) -> Result<(), SessionError>;

    async fn submit(&self) -> Result<(), SessionError>;

    async fn clear(&self) -> Result<(), SessionError>;

    async fn type_text(&self, text: &str) -> Result<(), SessionError>;

    /// Serialized markup of the node (outer HTML), used for diagnostics only.
    async fn serialized_markup(&self) -> Result<String, SessionError>;
}

/// An open browser session. Exclusively owned by one [`crate::Pilot`]; the
/// core issues calls strictly sequentially.
#[async_trait]
pub trait RemoteSession: Send + Sync {
    type Element: RemoteElement;

    /// Load a page, failing with [`SessionError::Transport`] on navigation
    /// failure.
    async fn navigate(&self, url: &str) -> Result<(), SessionError>;

    /// Configure the driver-level polling budget used by the next
    /// [`Self::locate`] call.
    async fn set_implicit_wait(&self, timeout: Duration) -> Result<(), SessionError>;

    /// Find one element, failing with [`SessionError::NotFound`] when no
    /// matching node exists within the configured implicit wait.
    async fn locate(&self, locator: &Locator) -> Result<Self::Element, SessionError>;

    async fn current_url(&self) -> Result<String, SessionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_wire_values() {
        let s: Strategy = serde_json::from_value(serde_json::json!("xpath")).unwrap();
        assert_eq!(s, Strategy::XPath);
        let s: Strategy = serde_json::from_value(serde_json::json!("css_selector")).unwrap();
        assert_eq!(s, Strategy::Css);
        let s: Strategy = serde_json::from_value(serde_json::json!("class_name")).unwrap();
        assert_eq!(s, Strategy::ClassName);

        let v = serde_json::to_value(Strategy::XPath).unwrap();
        assert_eq!(v, serde_json::json!("xpath"));
    }

    #[test]
    fn test_locator_display() {
        let locator = Locator::xpath("//input[@name='q']");
        assert_eq!(locator.to_string(), "xpath=//input[@name='q']");
    }
}
