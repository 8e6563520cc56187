//! Scripted in-memory session for tests.
//!
//! Records every call into an event log and follows two thresholds:
//! `found_after` locate attempts fail with NotFound, and elements returned
//! before attempt `ready_after` report not-ready.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{Locator, RemoteElement, RemoteSession, SessionError};

pub(crate) const NEVER: u32 = u32::MAX;

pub(crate) struct MockSession {
    found_after: u32,
    ready_after: u32,
    fail_implicit_wait: bool,
    current_url: String,
    attempts: AtomicU32,
    events: Arc<Mutex<Vec<String>>>,
}

impl MockSession {
    /// Every locate succeeds immediately with a ready element.
    pub(crate) fn new() -> Self {
        Self {
            found_after: 0,
            ready_after: 0,
            fail_implicit_wait: false,
            current_url: "https://example.com".to_string(),
            attempts: AtomicU32::new(0),
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every `set_implicit_wait` call fails with a transport error.
    pub(crate) fn failing_implicit_wait() -> Self {
        Self {
            fail_implicit_wait: true,
            ..Self::new()
        }
    }

    /// Locate always fails with NotFound.
    pub(crate) fn never_found() -> Self {
        Self {
            found_after: NEVER,
            ..Self::new()
        }
    }

    /// Locate succeeds but the element never reports ready.
    pub(crate) fn never_ready() -> Self {
        Self {
            ready_after: NEVER,
            ..Self::new()
        }
    }

    pub(crate) fn found_after(mut self, attempts: u32) -> Self {
        self.found_after = attempts;
        self
    }

    pub(crate) fn ready_after(mut self, attempts: u32) -> Self {
        self.ready_after = attempts;
        self
    }

    pub(crate) fn with_current_url(mut self, url: &str) -> Self {
        self.current_url = url.to_string();
        self
    }

    pub(crate) fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    pub(crate) fn locate_attempts(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }

    fn log(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl RemoteSession for MockSession {
    type Element = MockElement;

    async fn navigate(&self, url: &str) -> Result<(), SessionError> {
        self.log(format!("navigate {url}"));
        Ok(())
    }

    async fn set_implicit_wait(&self, _timeout: Duration) -> Result<(), SessionError> {
        if self.fail_implicit_wait {
            return Err(SessionError::Transport("implicit wait rejected".to_string()));
        }
        Ok(())
    }

    async fn locate(&self, locator: &Locator) -> Result<Self::Element, SessionError> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        self.log(format!("locate {locator}"));
        if attempt < self.found_after {
            return Err(SessionError::NotFound(locator.to_string()));
        }
        Ok(MockElement {
            ready: attempt >= self.ready_after,
            events: self.events.clone(),
        })
    }

    async fn current_url(&self) -> Result<String, SessionError> {
        Ok(self.current_url.clone())
    }
}

#[derive(Debug)]
pub(crate) struct MockElement {
    ready: bool,
    events: Arc<Mutex<Vec<String>>>,
}

impl MockElement {
    fn log(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl RemoteElement for MockElement {
    async fn is_ready(&self) -> Result<bool, SessionError> {
        Ok(self.ready)
    }

    async fn click(&self) -> Result<(), SessionError> {
        self.log("click".to_string());
        Ok(())
    }

    async fn submit(&self) -> Result<(), SessionError> {
        self.log("submit".to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionError> {
        self.log("clear".to_string());
        Ok(())
    }

    async fn type_text(&self, text: &str) -> Result<(), SessionError> {
        self.log(format!("type {text}"));
        Ok(())
    }

    async fn serialized_markup(&self) -> Result<String, SessionError> {
        Ok("<input id=\"mock\">".to_string())
    }
}
