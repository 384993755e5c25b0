//! WebDriver session and element handles
//!
//! Every method is a thin wrapper over one wire endpoint. URL assembly
//! and envelope decoding are funneled through the `get`/`post` helpers
//! so protocol errors surface uniformly as [`WebDriverError::Api`].

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::debug;

use crate::error::Result;
use crate::protocol::{self, By, ElementRef, NewSessionValue};

/// An open browser session on a WebDriver endpoint.
pub struct Session {
    http: reqwest::Client,
    endpoint: String,
    session_id: String,
}

impl Session {
    /// Create a session via `POST /session`.
    ///
    /// `capabilities` is the full request body, usually built with
    /// [`protocol::new_session_body`](crate::protocol::new_session_body).
    pub async fn new(endpoint: &str, capabilities: &Value) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;

        let resp = http
            .post(format!("{}/session", endpoint))
            .json(capabilities)
            .send()
            .await?;
        let success = resp.status().is_success();
        let body = resp.text().await?;
        let value: NewSessionValue = protocol::decode_body(success, &body)?;

        debug!(session_id = %value.session_id, endpoint, "WebDriver session created");

        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
            session_id: value.session_id,
        })
    }

    pub fn id(&self) -> &str {
        &self.session_id
    }

    /// End the session via `DELETE /session/{id}`.
    ///
    /// Consumes the handle; a session that is never closed is reaped
    /// when its driver process shuts down.
    pub async fn close(self) -> Result<()> {
        let resp = self
            .http
            .delete(format!("{}/session/{}", self.endpoint, self.session_id))
            .send()
            .await?;
        let success = resp.status().is_success();
        let body = resp.text().await?;
        let _: Value = protocol::decode_body(success, &body)?;
        debug!(session_id = %self.session_id, "WebDriver session closed");
        Ok(())
    }

    pub async fn goto(&self, url: &str) -> Result<()> {
        debug!(url, "navigate");
        let _: Value = self.post("/url", &json!({ "url": url })).await?;
        Ok(())
    }

    pub async fn current_url(&self) -> Result<String> {
        self.get("/url").await
    }

    /// Navigate back in the browser history.
    pub async fn back(&self) -> Result<()> {
        let _: Value = self.post("/back", &json!({})).await?;
        Ok(())
    }

    pub async fn refresh(&self) -> Result<()> {
        let _: Value = self.post("/refresh", &json!({})).await?;
        Ok(())
    }

    pub async fn set_window_size(&self, width: u32, height: u32) -> Result<()> {
        let _: Value = self
            .post("/window/rect", &json!({ "width": width, "height": height }))
            .await?;
        Ok(())
    }

    /// Locate the first element matching `by`.
    pub async fn find(&self, by: &By) -> Result<Element<'_>> {
        let (using, value) = by.strategy();
        let elem: ElementRef = self
            .post("/element", &json!({ "using": using, "value": value }))
            .await?;
        Ok(Element { session: self, id: elem.id })
    }

    /// Locate every element matching `by`. An empty vec is not an error.
    pub async fn find_all(&self, by: &By) -> Result<Vec<Element<'_>>> {
        let (using, value) = by.strategy();
        let refs: Vec<ElementRef> = self
            .post("/elements", &json!({ "using": using, "value": value }))
            .await?;
        Ok(refs
            .into_iter()
            .map(|r| Element { session: self, id: r.id })
            .collect())
    }

    fn url(&self, path: &str) -> String {
        format!("{}/session/{}{}", self.endpoint, self.session_id, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let resp = self.http.get(self.url(path)).send().await?;
        let success = resp.status().is_success();
        let body = resp.text().await?;
        protocol::decode_body(success, &body)
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, body: &Value) -> Result<T> {
        let resp = self.http.post(self.url(path)).json(body).send().await?;
        let success = resp.status().is_success();
        let body = resp.text().await?;
        protocol::decode_body(success, &body)
    }
}

/// A located element, valid while its session lives.
pub struct Element<'a> {
    session: &'a Session,
    id: String,
}

impl<'a> Element<'a> {
    /// Rendered text of the element.
    pub async fn text(&self) -> Result<String> {
        self.session.get(&self.path("/text")).await
    }

    /// HTML attribute value, `None` if the attribute is absent.
    pub async fn attribute(&self, name: &str) -> Result<Option<String>> {
        self.session
            .get(&self.path(&format!("/attribute/{}", name)))
            .await
    }

    /// DOM property value, `None` if unset. Used for live form state
    /// such as a select element's current `value`.
    pub async fn property(&self, name: &str) -> Result<Option<String>> {
        self.session
            .get(&self.path(&format!("/property/{}", name)))
            .await
    }

    /// Computed CSS value, e.g. `background-color` or `font-family`.
    pub async fn css_value(&self, name: &str) -> Result<String> {
        self.session
            .get(&self.path(&format!("/css/{}", name)))
            .await
    }

    pub async fn is_displayed(&self) -> Result<bool> {
        self.session.get(&self.path("/displayed")).await
    }

    pub async fn is_enabled(&self) -> Result<bool> {
        self.session.get(&self.path("/enabled")).await
    }

    pub async fn click(&self) -> Result<()> {
        let _: Value = self.session.post(&self.path("/click"), &json!({})).await?;
        Ok(())
    }

    pub async fn send_keys(&self, text: &str) -> Result<()> {
        let chars: Vec<String> = text.chars().map(|c| c.to_string()).collect();
        let _: Value = self
            .session
            .post(&self.path("/value"), &json!({ "text": text, "value": chars }))
            .await?;
        Ok(())
    }

    pub async fn clear(&self) -> Result<()> {
        let _: Value = self.session.post(&self.path("/clear"), &json!({})).await?;
        Ok(())
    }

    /// Locate a descendant element.
    pub async fn find(&self, by: &By) -> Result<Element<'a>> {
        let (using, value) = by.strategy();
        let elem: ElementRef = self
            .session
            .post(
                &self.path("/element"),
                &json!({ "using": using, "value": value }),
            )
            .await?;
        Ok(Element {
            session: self.session,
            id: elem.id,
        })
    }

    /// Locate all descendant elements matching `by`.
    pub async fn find_all(&self, by: &By) -> Result<Vec<Element<'a>>> {
        let (using, value) = by.strategy();
        let refs: Vec<ElementRef> = self
            .session
            .post(
                &self.path("/elements"),
                &json!({ "using": using, "value": value }),
            )
            .await?;
        Ok(refs
            .into_iter()
            .map(|r| Element {
                session: self.session,
                id: r.id,
            })
            .collect())
    }

    fn path(&self, suffix: &str) -> String {
        format!("/element/{}{}", self.id, suffix)
    }
}
