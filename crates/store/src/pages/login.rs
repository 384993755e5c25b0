//! Login page

use swagcheck_webdriver::Result;

use crate::selectors;
use crate::session::StoreSession;

pub struct LoginPage<'a> {
    store: &'a StoreSession,
}

impl<'a> LoginPage<'a> {
    pub(crate) fn new(store: &'a StoreSession) -> Self {
        Self { store }
    }

    /// Text of the red error banner, waiting for it to show.
    pub async fn error_message(&self) -> Result<String> {
        self.store
            .wait()
            .displayed(&selectors::error_banner())
            .await?
            .text()
            .await
    }

    /// Whether the error banner is currently visible, without waiting.
    /// The login button's `value` attribute, i.e. its visible label.
    pub async fn login_button_label(&self) -> Result<Option<String>> {
        self.store
            .wait()
            .present(&selectors::login_button())
            .await?
            .attribute("value")
            .await
    }
}
