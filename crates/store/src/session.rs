//! Browser session bound to the storefront

use std::time::Duration;

use tracing::debug;

use swagcheck_webdriver::{Result, Session, Wait};

use crate::pages::{CartPage, CheckoutPage, InventoryPage, LoginPage, SideMenu};
use crate::persona::Persona;
use crate::selectors;

/// A WebDriver session plus the store's base URL and wait tuning.
/// Page objects borrow this for the DOM work; the login/logout/reset
/// helpers live here because every suite uses them.
pub struct StoreSession {
    driver: Session,
    base_url: String,
    timeout: Duration,
    poll: Duration,
}

impl StoreSession {
    pub fn new(driver: Session, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            driver,
            base_url,
            timeout: swagcheck_webdriver::wait::DEFAULT_TIMEOUT,
            poll: swagcheck_webdriver::wait::DEFAULT_POLL,
        }
    }

    pub fn with_waits(mut self, timeout: Duration, poll: Duration) -> Self {
        self.timeout = timeout;
        self.poll = poll;
        self
    }

    pub fn driver(&self) -> &Session {
        &self.driver
    }

    /// Absolute URL for a path under the store, e.g. `cart.html`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// A poller preconfigured with this session's wait tuning.
    pub fn wait(&self) -> Wait<'_> {
        self.driver.wait().timeout(self.timeout).poll(self.poll)
    }

    pub async fn open_login(&self) -> Result<()> {
        self.driver.goto(&self.base_url).await
    }

    /// Fill the login form and submit, without waiting for the result.
    /// Error cases read the banner afterwards; success cases wait on
    /// the URL themselves.
    pub async fn submit_login(&self, username: &str, password: &str) -> Result<()> {
        self.open_login().await?;

        let user_field = self.wait().present(&selectors::username_field()).await?;
        user_field.clear().await?;
        user_field.send_keys(username).await?;

        let pass_field = self.driver.find(&selectors::password_field()).await?;
        pass_field.clear().await?;
        pass_field.send_keys(password).await?;

        self.driver.find(&selectors::login_button()).await?.click().await
    }

    /// Log a persona in and wait for the inventory page; returns the
    /// landing URL.
    pub async fn login(&self, persona: Persona) -> Result<String> {
        debug!(%persona, "logging in");
        let (username, password) = persona.credentials();
        self.submit_login(username, password).await?;
        self.wait().url_contains("inventory.html").await
    }

    /// Log out through the burger menu and wait for the login URL.
    pub async fn logout(&self) -> Result<()> {
        self.menu().open().await?;
        self.menu().click_logout().await?;
        self.wait().url_is(&self.base_url).await
    }

    /// Clear cart and app state through the burger menu.
    pub async fn reset_app_state(&self) -> Result<()> {
        debug!("resetting app state");
        self.menu().open().await?;
        self.menu().click_reset().await?;
        self.menu().close().await
    }

    pub fn login_page(&self) -> LoginPage<'_> {
        LoginPage::new(self)
    }

    pub fn inventory(&self) -> InventoryPage<'_> {
        InventoryPage::new(self)
    }

    pub fn cart(&self) -> CartPage<'_> {
        CartPage::new(self)
    }

    pub fn checkout(&self) -> CheckoutPage<'_> {
        CheckoutPage::new(self)
    }

    pub fn menu(&self) -> SideMenu<'_> {
        SideMenu::new(self)
    }

    /// End the underlying WebDriver session.
    pub async fn close(self) -> Result<()> {
        self.driver.close().await
    }
}
