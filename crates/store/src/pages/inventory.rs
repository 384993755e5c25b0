//! Products (inventory) page

use swagcheck_webdriver::{Element, Result};

use crate::selectors;
use crate::session::StoreSession;

pub struct InventoryPage<'a> {
    store: &'a StoreSession,
}

impl<'a> InventoryPage<'a> {
    pub(crate) fn new(store: &'a StoreSession) -> Self {
        Self { store }
    }

    /// Navigate straight to the products page.
    pub async fn open(&self) -> Result<()> {
        self.store
            .driver()
            .goto(&self.store.url("inventory.html"))
            .await
    }

    /// One element per product card.
    pub async fn items(&self) -> Result<Vec<Element<'a>>> {
        self.store
            .driver()
            .find_all(&selectors::inventory_items())
            .await
    }

    /// Name, description and price text of every card, top to bottom.
    pub async fn card_details(&self) -> Result<Vec<(String, String, String)>> {
        let cards = self.items().await?;
        let mut details = Vec::with_capacity(cards.len());
        for card in &cards {
            let name = card.find(&selectors::item_name()).await?.text().await?;
            let description = card
                .find(&selectors::item_description())
                .await?
                .text()
                .await?;
            let price = card.find(&selectors::item_price()).await?.text().await?;
            details.push((name, description, price));
        }
        Ok(details)
    }

    /// Name and image `src` of every card.
    pub async fn image_sources(&self) -> Result<Vec<(String, String)>> {
        let cards = self.items().await?;
        let mut sources = Vec::with_capacity(cards.len());
        for card in &cards {
            let name = card.find(&selectors::item_name()).await?.text().await?;
            let src = card
                .find(&selectors::item_image())
                .await?
                .attribute("src")
                .await?
                .unwrap_or_default();
            sources.push((name, src));
        }
        Ok(sources)
    }

    pub async fn item_names(&self) -> Result<Vec<String>> {
        let elements = self.store.driver().find_all(&selectors::item_name()).await?;
        let mut names = Vec::with_capacity(elements.len());
        for element in &elements {
            names.push(element.text().await?);
        }
        Ok(names)
    }

    pub async fn item_price_texts(&self) -> Result<Vec<String>> {
        let elements = self
            .store
            .driver()
            .find_all(&selectors::item_price())
            .await?;
        let mut prices = Vec::with_capacity(elements.len());
        for element in &elements {
            prices.push(element.text().await?);
        }
        Ok(prices)
    }

    /// Click every "Add to cart" button; returns how many were clicked.
    pub async fn add_all_to_cart(&self) -> Result<usize> {
        let buttons = self
            .store
            .driver()
            .find_all(&selectors::add_to_cart_buttons())
            .await?;
        for button in &buttons {
            button.click().await?;
        }
        Ok(buttons.len())
    }

    /// Click every "Remove" button; returns how many were clicked.
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

    /// Add one product by its `add-to-cart-*` id suffix.
    pub async fn add_item(&self, slug: &str) -> Result<()> {
        self.store
            .wait()
            .clickable(&selectors::add_to_cart_button(slug))
            .await?
            .click()
            .await
    }

    /// Current cart badge text, `None` when the badge is absent.
    pub async fn cart_badge_text(&self) -> Result<Option<String>> {
        match self.store.driver().find(&selectors::cart_badge()).await {
            Ok(badge) => Ok(Some(badge.text().await?)),
            Err(e) if e.is_retryable() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Wait for the badge to show `expected`.
    pub async fn expect_badge(&self, expected: &str) -> Result<()> {
        self.store
            .wait()
            .text_is(&selectors::cart_badge(), expected)
            .await
    }

    /// Wait for the badge to disappear.
    pub async fn expect_badge_gone(&self) -> Result<()> {
        self.store.wait().gone(&selectors::cart_badge()).await
    }

    /// Click the cart icon and wait for the cart page.
    pub async fn open_cart(&self) -> Result<()> {
        self.store
            .wait()
            .clickable(&selectors::cart_link())
            .await?
            .click()
            .await?;
        self.store.wait().url_contains("cart.html").await?;
        Ok(())
    }

    /// Select a sort option (`az`, `za`, `lohi`, `hilo`) and wait for
    /// the select to report it.
    pub async fn sort_by(&self, value: &str) -> Result<()> {
        let select = self
            .store
            .wait()
            .clickable(&selectors::sort_select())
            .await?;
        select.click().await?;
        select
            .find(&selectors::sort_option(value))
            .await?
            .click()
            .await?;
        self.store
            .wait()
            .selected_value(&selectors::sort_select(), value)
            .await
    }

    /// Label the sort widget currently shows, e.g. "Name (A to Z)".
    pub async fn active_sort_label(&self) -> Result<String> {
        self.store
            .wait()
            .present(&selectors::active_sort_label())
            .await?
            .text()
            .await
    }
}
