//! W3C wire protocol pieces: locator strategies, capability
//! construction, and response envelope decoding

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{Result, WebDriverError};

/// The W3C web element identifier key.
pub const ELEMENT_KEY: &str = "element-6066-11e4-a52e-4f735466cecf";

/// Element location strategy.
///
/// `Id` and `ClassName` are sugar over the css strategy, mirroring
/// how Selenium bindings translate them on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum By {
    Css(String),
    Id(String),
    ClassName(String),
    XPath(String),
    Tag(String),
}

impl By {
    pub fn css(selector: impl Into<String>) -> Self {
        By::Css(selector.into())
    }

    pub fn id(id: impl Into<String>) -> Self {
        By::Id(id.into())
    }

    pub fn class_name(name: impl Into<String>) -> Self {
        By::ClassName(name.into())
    }

    pub fn xpath(expr: impl Into<String>) -> Self {
        By::XPath(expr.into())
    }

    pub fn tag(name: impl Into<String>) -> Self {
        By::Tag(name.into())
    }

    /// Wire form: (using, value).
    pub(crate) fn strategy(&self) -> (&'static str, String) {
        match self {
            By::Css(s) => ("css selector", s.clone()),
            By::Id(s) => ("css selector", format!("[id=\"{}\"]", s)),
            By::ClassName(s) => ("css selector", format!(".{}", s)),
            By::XPath(s) => ("xpath", s.clone()),
            By::Tag(s) => ("tag name", s.clone()),
        }
    }
}

impl std::fmt::Display for By {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (using, value) = self.strategy();
        write!(f, "{} \"{}\"", using, value)
    }
}

/// Browser to request in the new-session capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrowserKind {
    #[default]
    Firefox,
    Chrome,
}

impl BrowserKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserKind::Firefox => "firefox",
            BrowserKind::Chrome => "chrome",
        }
    }
}

/// Build the `POST /session` body for a browser/headless combination.
pub fn new_session_body(browser: BrowserKind, headless: bool) -> Value {
    let always_match = match browser {
        BrowserKind::Firefox => {
            let args: Vec<&str> = if headless { vec!["-headless"] } else { vec![] };
            json!({
                "browserName": "firefox",
                "moz:firefoxOptions": { "args": args },
            })
        }
        BrowserKind::Chrome => {
            let args: Vec<&str> = if headless { vec!["--headless=new"] } else { vec![] };
            json!({
                "browserName": "chrome",
                "goog:chromeOptions": { "args": args },
            })
        }
    };

    json!({ "capabilities": { "alwaysMatch": always_match } })
}

#[derive(Debug, Deserialize)]
struct ValueWrapper<T> {
    value: T,
}

#[derive(Debug, Deserialize)]
struct WireError {
    error: String,
    message: String,
}

/// Reference to an element as it appears on the wire.
#[derive(Debug, Deserialize)]
pub(crate) struct ElementRef {
    #[serde(rename = "element-6066-11e4-a52e-4f735466cecf")]
    pub id: String,
}

/// Response payload of `POST /session`.
#[derive(Debug, Deserialize)]
pub(crate) struct NewSessionValue {
    #[serde(rename = "sessionId")]
    pub session_id: String,
}

/// Unwrap the `{"value": ...}` envelope, mapping protocol-level
/// failures to [`WebDriverError::Api`].
pub(crate) fn decode_body<T: DeserializeOwned>(success: bool, body: &str) -> Result<T> {
    if success {
        let wrapped: ValueWrapper<T> = serde_json::from_str(body)?;
        return Ok(wrapped.value);
    }
    match serde_json::from_str::<ValueWrapper<WireError>>(body) {
        Ok(wrapped) => Err(WebDriverError::Api {
            error: wrapped.value.error,
            message: wrapped.value.message,
        }),
        Err(_) => Err(WebDriverError::Api {
            error: "unknown error".to_string(),
            message: body.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(By::css(".cart_item"), "css selector", ".cart_item" ; "css passthrough")]
    #[test_case(By::id("login-button"), "css selector", "[id=\"login-button\"]" ; "id to css")]
    #[test_case(By::class_name("inventory_item"), "css selector", ".inventory_item" ; "class to css")]
    #[test_case(By::xpath("//button[text()='Remove']"), "xpath", "//button[text()='Remove']" ; "xpath passthrough")]
    #[test_case(By::tag("h1"), "tag name", "h1" ; "tag name")]
    fn locator_strategy(by: By, using: &str, value: &str) {
        let (u, v) = by.strategy();
        assert_eq!(u, using);
        assert_eq!(v, value);
    }

    #[test]
    fn firefox_headless_capabilities() {
        let body = new_session_body(BrowserKind::Firefox, true);
        let args = &body["capabilities"]["alwaysMatch"]["moz:firefoxOptions"]["args"];
        assert_eq!(args[0], "-headless");
        assert_eq!(
            body["capabilities"]["alwaysMatch"]["browserName"],
            "firefox"
        );
    }

    #[test]
    fn headed_chrome_has_no_args() {
        let body = new_session_body(BrowserKind::Chrome, false);
        let args = &body["capabilities"]["alwaysMatch"]["goog:chromeOptions"]["args"];
        assert_eq!(args.as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn decode_unwraps_value() {
        let url: String = decode_body(true, r#"{"value": "https://www.saucedemo.com/"}"#)
            .expect("decode should succeed");
        assert_eq!(url, "https://www.saucedemo.com/");
    }

    #[test]
    fn decode_element_reference() {
        let body = format!(r#"{{"value": {{"{}": "abc-123"}}}}"#, ELEMENT_KEY);
        let elem: ElementRef = decode_body(true, &body).expect("decode should succeed");
        assert_eq!(elem.id, "abc-123");
    }

    #[test]
    fn decode_maps_wire_errors() {
        let body = r#"{"value": {"error": "no such element", "message": "Unable to locate element", "stacktrace": ""}}"#;
        let err = decode_body::<String>(false, body).unwrap_err();
        assert!(err.is_retryable());
        assert!(err.to_string().contains("no such element"));
    }

    #[test]
    fn decode_handles_non_json_errors() {
        let err = decode_body::<String>(false, "bad gateway").unwrap_err();
        match err {
            WebDriverError::Api { error, message } => {
                assert_eq!(error, "unknown error");
                assert_eq!(message, "bad gateway");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
