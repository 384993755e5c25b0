//! Cart page

use swagcheck_webdriver::Result;

use crate::selectors;
use crate::session::StoreSession;

/// One cart row as rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    pub name: String,
    pub description: String,
    pub price: String,
}

pub struct CartPage<'a> {
    store: &'a StoreSession,
}

impl<'a> CartPage<'a> {
    pub(crate) fn new(store: &'a StoreSession) -> Self {
        Self { store }
    }

    /// Click the cart icon and wait for the cart page.
    pub async fn open(&self) -> Result<()> {
        self.store
            .wait()
            .clickable(&selectors::cart_link())
            .await?
            .click()
            .await?;
        self.store.wait().url_contains("cart.html").await?;
        Ok(())
    }

    pub async fn items(&self) -> Result<Vec<CartItem>> {
        let rows = self.store.driver().find_all(&selectors::cart_items()).await?;
        let mut items = Vec::with_capacity(rows.len());
        for row in &rows {
            items.push(CartItem {
                name: row.find(&selectors::item_name()).await?.text().await?,
                description: row
                    .find(&selectors::item_description())
                    .await?
                    .text()
                    .await?,
                price: row.find(&selectors::item_price()).await?.text().await?,
            });
        }
        Ok(items)
    }

    pub async fn row_count(&self) -> Result<usize> {
        Ok(self
            .store
            .driver()
            .find_all(&selectors::cart_items())
            .await?
            .len())
    }

    /// Whether the cart list container is rendered and visible.
    /// Click every "Remove" button in the cart; returns how many were
    /// clicked.
    pub async fn remove_all(&self) -> Result<usize> {
        let buttons = self
            .store
            .driver()
            .find_all(&selectors::remove_buttons())
            .await?;
        for button in &buttons {
            button.click().await?;
        }
        Ok(buttons.len())
    }

    /// Wait for the header badge to disappear.
    pub async fn badge_gone(&self) -> Result<()> {
        self.store.wait().gone(&selectors::cart_badge()).await
    }

    pub async fn continue_shopping(&self) -> Result<()> {
        self.store
            .wait()
            .clickable(&selectors::continue_shopping_button())
            .await?
            .click()
            .await?;
        self.store.wait().url_contains("inventory.html").await?;
        Ok(())
    }

    /// Click Checkout without waiting for a page change. The empty-cart
    /// cases need to observe whether the URL moves at all.
    pub async fn begin_checkout(&self) -> Result<()> {
        self.store
            .wait()
            .clickable(&selectors::checkout_button())
            .await?
            .click()
            .await
    }
}
