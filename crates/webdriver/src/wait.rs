//! Fixed-interval polling waits on DOM conditions
//!
//! No backoff and no event subscription: each condition is re-checked
//! on a fixed poll interval until it holds or the deadline passes,
//! which is all a black-box suite against a remote site can rely on.

use std::time::{Duration, Instant};

use tokio::time::sleep;

use crate::error::{Result, WebDriverError};
use crate::protocol::By;
use crate::session::{Element, Session};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_POLL: Duration = Duration::from_millis(300);

/// Poller bound to one session.
pub struct Wait<'a> {
    session: &'a Session,
    timeout: Duration,
    poll: Duration,
}

impl Session {
    /// Start building a wait against this session.
    pub fn wait(&self) -> Wait<'_> {
        Wait::new(self)
    }
}

impl<'a> Wait<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self {
            session,
            timeout: DEFAULT_TIMEOUT,
            poll: DEFAULT_POLL,
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn poll(mut self, poll: Duration) -> Self {
        self.poll = poll;
        self
    }

    /// Wait until the current URL equals `expected` exactly.
    pub async fn url_is(&self, expected: &str) -> Result<()> {
        let start = Instant::now();
        loop {
            let url = self.session.current_url().await?;
            if url == expected {
                return Ok(());
            }
            if start.elapsed() >= self.timeout {
                return Err(self.timed_out(
                    start,
                    format!("url to be \"{}\" (last: {})", expected, url),
                ));
            }
            sleep(self.poll).await;
        }
    }

    /// Wait until the current URL contains `needle`; returns the URL.
    pub async fn url_contains(&self, needle: &str) -> Result<String> {
        let start = Instant::now();
        loop {
            let url = self.session.current_url().await?;
            if url.contains(needle) {
                return Ok(url);
            }
            if start.elapsed() >= self.timeout {
                return Err(self.timed_out(
                    start,
                    format!("url to contain \"{}\" (last: {})", needle, url),
                ));
            }
            sleep(self.poll).await;
        }
    }

    /// Wait until an element matching `by` exists in the DOM.
    pub async fn present(&self, by: &By) -> Result<Element<'a>> {
        let start = Instant::now();
        loop {
            match self.session.find(by).await {
                Ok(elem) => return Ok(elem),
                Err(e) if e.is_retryable() => {}
                Err(e) => return Err(e),
            }
            if start.elapsed() >= self.timeout {
                return Err(self.timed_out(start, format!("element {}", by)));
            }
            sleep(self.poll).await;
        }
    }

    /// Wait until an element matching `by` exists and is displayed.
    pub async fn displayed(&self, by: &By) -> Result<Element<'a>> {
        let start = Instant::now();
        loop {
            match self.session.find(by).await {
                Ok(elem) => match elem.is_displayed().await {
                    Ok(true) => return Ok(elem),
                    Ok(false) => {}
                    Err(e) if e.is_retryable() => {}
                    Err(e) => return Err(e),
                },
                Err(e) if e.is_retryable() => {}
                Err(e) => return Err(e),
            }
            if start.elapsed() >= self.timeout {
                return Err(self.timed_out(start, format!("element {} to be displayed", by)));
            }
            sleep(self.poll).await;
        }
    }

    /// Wait until an element matching `by` is displayed and enabled.
    pub async fn clickable(&self, by: &By) -> Result<Element<'a>> {
        let start = Instant::now();
        loop {
            match self.session.find(by).await {
                Ok(elem) => {
                    let ready = async {
                        Ok::<bool, WebDriverError>(
                            elem.is_displayed().await? && elem.is_enabled().await?,
                        )
                    }
                    .await;
                    match ready {
                        Ok(true) => return Ok(elem),
                        Ok(false) => {}
                        Err(e) if e.is_retryable() => {}
                        Err(e) => return Err(e),
                    }
                }
                Err(e) if e.is_retryable() => {}
                Err(e) => return Err(e),
            }
            if start.elapsed() >= self.timeout {
                return Err(self.timed_out(start, format!("element {} to be clickable", by)));
            }
            sleep(self.poll).await;
        }
    }

    /// Wait until no displayed element matches `by` (absent counts).
    pub async fn gone(&self, by: &By) -> Result<()> {
        let start = Instant::now();
        loop {
            match self.session.find(by).await {
                Ok(elem) => match elem.is_displayed().await {
                    Ok(false) => return Ok(()),
                    Ok(true) => {}
                    Err(e) if e.is_retryable() => return Ok(()),
                    Err(e) => return Err(e),
                },
                Err(e) if e.is_retryable() => return Ok(()),
                Err(e) => return Err(e),
            }
            if start.elapsed() >= self.timeout {
                return Err(self.timed_out(start, format!("element {} to be gone", by)));
            }
            sleep(self.poll).await;
        }
    }

    /// Wait until the element's rendered text equals `expected`.
    pub async fn text_is(&self, by: &By, expected: &str) -> Result<()> {
        let start = Instant::now();
        let mut last: Option<String> = None;
        loop {
            match self.session.find(by).await {
                Ok(elem) => match elem.text().await {
                    Ok(text) if text == expected => return Ok(()),
                    Ok(text) => last = Some(text),
                    Err(e) if e.is_retryable() => {}
                    Err(e) => return Err(e),
                },
                Err(e) if e.is_retryable() => {}
                Err(e) => return Err(e),
            }
            if start.elapsed() >= self.timeout {
                return Err(self.timed_out(
                    start,
                    format!(
                        "element {} text to be \"{}\" (last: {:?})",
                        by, expected, last
                    ),
                ));
            }
            sleep(self.poll).await;
        }
    }

    /// Wait until a select element's current value equals `expected`.
    pub async fn selected_value(&self, by: &By, expected: &str) -> Result<()> {
        let start = Instant::now();
        loop {
            match self.session.find(by).await {
                Ok(elem) => match elem.property("value").await {
                    Ok(Some(value)) if value == expected => return Ok(()),
                    Ok(_) => {}
                    Err(e) if e.is_retryable() => {}
                    Err(e) => return Err(e),
                },
                Err(e) if e.is_retryable() => {}
                Err(e) => return Err(e),
            }
            if start.elapsed() >= self.timeout {
                return Err(self.timed_out(
                    start,
                    format!("select {} value to be \"{}\"", by, expected),
                ));
            }
            sleep(self.poll).await;
        }
    }

    fn timed_out(&self, start: Instant, condition: String) -> WebDriverError {
        WebDriverError::WaitTimeout {
            condition,
            waited_ms: start.elapsed().as_millis() as u64,
        }
    }
}
