//! Default [`RemoteSession`] backend over a `thirtyfour` WebDriver client.
//!
//! The caller connects the driver (capabilities, server URL, profile) and
//! hands it over; this adapter only translates the session contract onto the
//! wire protocol.

use async_trait::async_trait;
use std::time::Duration;
use thirtyfour::error::WebDriverError;
use thirtyfour::{By, WebDriver, WebElement};

use super::{Locator, RemoteElement, RemoteSession, SessionError, Strategy};

fn map_err(e: WebDriverError) -> SessionError {
    if matches!(e, WebDriverError::NoSuchElement(_)) {
        SessionError::NotFound(e.to_string())
    } else {
        SessionError::Transport(e.to_string())
    }
}

fn to_by(locator: &Locator) -> By {
    let value = locator.value.as_str();
    match locator.strategy {
        Strategy::Id => By::Id(value),
        Strategy::Name => By::Name(value),
        Strategy::XPath => By::XPath(value),
        Strategy::Css => By::Css(value),
        Strategy::ClassName => By::ClassName(value),
        Strategy::Tag => By::Tag(value),
        Strategy::LinkText => By::LinkText(value),
        // thirtyfour exposes no partial-link-text constructor; match anchors
        // whose text contains the value via XPath instead.
        Strategy::PartialLinkText => By::XPath(partial_link_text_xpath(value).as_str()),
    }
}

fn partial_link_text_xpath(value: &str) -> String {
    format!("//a[contains(., {})]", xpath_string_literal(value))
}

/// Quote an arbitrary string as an XPath 1.0 literal. XPath has no escape
/// sequences, so strings holding both quote kinds need the concat() form.
fn xpath_string_literal(value: &str) -> String {
    if !value.contains('\'') {
        format!("'{value}'")
    } else if !value.contains('"') {
        format!("\"{value}\"")
    } else {
        let parts: Vec<String> = value.split('\'').map(|p| format!("'{p}'")).collect();
        format!("concat({})", parts.join(", \"'\", "))
    }
}

/// A connected WebDriver session.
pub struct WebDriverSession {
    driver: WebDriver,
}

impl WebDriverSession {
    pub fn new(driver: WebDriver) -> Self {
        Self { driver }
    }

    /// Access the wrapped driver, e.g. for capabilities the core does not
    /// model.
    pub fn driver(&self) -> &WebDriver {
        &self.driver
    }

    /// End the session and close every associated window.
    pub async fn quit(self) -> Result<(), SessionError> {
        self.driver.quit().await.map_err(map_err)
    }
}

#[async_trait]
impl RemoteSession for WebDriverSession {
    type Element = WebDriverElement;

    async fn navigate(&self, url: &str) -> Result<(), SessionError> {
        self.driver.goto(url).await.map_err(map_err)
    }

    async fn set_implicit_wait(&self, timeout: Duration) -> Result<(), SessionError> {
        self.driver
            .set_implicit_wait_timeout(timeout)
            .await
            .map_err(map_err)
    }

    async fn locate(&self, locator: &Locator) -> Result<Self::Element, SessionError> {
        let inner = self.driver.find(to_by(locator)).await.map_err(map_err)?;
        Ok(WebDriverElement { inner })
    }

    async fn current_url(&self) -> Result<String, SessionError> {
        self.driver
            .current_url()
            .await
            .map(|u| u.to_string())
            .map_err(map_err)
    }
}

/// One located element within a [`WebDriverSession`].
pub struct WebDriverElement {
    inner: WebElement,
}

#[async_trait]
impl RemoteElement for WebDriverElement {
    async fn is_ready(&self) -> Result<bool, SessionError> {
        self.inner.is_enabled().await.map_err(map_err)
    }

    async fn click(&self) -> Result<(), SessionError> {
        self.inner.click().await.map_err(map_err)
    }

    async fn submit(&self) -> Result<(), SessionError> {
        // The W3C protocol has no element-submit endpoint; submit the
        // enclosing form via script instead.
        let elem = self.inner.to_json().map_err(map_err)?;
        self.inner
            .handle
            .execute("arguments[0].closest('form').submit();", vec![elem])
            .await
            .map_err(map_err)?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionError> {
        self.inner.clear().await.map_err(map_err)
    }

    async fn type_text(&self, text: &str) -> Result<(), SessionError> {
        self.inner.send_keys(text).await.map_err(map_err)
    }

    async fn serialized_markup(&self) -> Result<String, SessionError> {
        let markup = self.inner.attr("outerHTML").await.map_err(map_err)?;
        Ok(markup.unwrap_or_default())
    }
}
