//! Checkout flow pages (information form, overview, completion)

use swagcheck_webdriver::Result;

use crate::selectors;
use crate::session::StoreSession;

pub struct CheckoutPage<'a> {
    store: &'a StoreSession,
}

impl<'a> CheckoutPage<'a> {
    pub(crate) fn new(store: &'a StoreSession) -> Self {
        Self { store }
    }

    /// Type the buyer information and read the three field values back
    /// so the caller can verify the form actually took them.
    pub async fn fill_information(
        &self,
        first_name: &str,
        last_name: &str,
        postal_code: &str,
    ) -> Result<(String, String, String)> {
        let first_field = self
            .store
            .wait()
            .present(&selectors::first_name_field())
            .await?;
        first_field.send_keys(first_name).await?;

        let last_field = self.store.driver().find(&selectors::last_name_field()).await?;
        last_field.send_keys(last_name).await?;

        let postal_field = self
            .store
            .driver()
            .find(&selectors::postal_code_field())
            .await?;
        postal_field.send_keys(postal_code).await?;

        Ok((
            first_field.attribute("value").await?.unwrap_or_default(),
            last_field.attribute("value").await?.unwrap_or_default(),
            postal_field.attribute("value").await?.unwrap_or_default(),
        ))
    }

    /// Continue from the information form to the overview page.
    pub async fn continue_to_overview(&self) -> Result<()> {
        self.store
            .wait()
            .clickable(&selectors::continue_button())
            .await?
            .click()
            .await?;
        self.store.wait().url_contains("checkout-step-two.html").await?;
        Ok(())
    }

    /// Finish the purchase and wait for the completion page.
    pub async fn finish(&self) -> Result<()> {
        self.store
            .wait()
            .clickable(&selectors::finish_button())
            .await?
            .click()
            .await?;
        self.store.wait().url_contains("checkout-complete.html").await?;
        Ok(())
    }

    /// Rendered price of each line item on the overview page.
    pub async fn overview_price_texts(&self) -> Result<Vec<String>> {
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

    pub async fn subtotal_text(&self) -> Result<String> {
        self.store
            .wait()
            .present(&selectors::summary_subtotal())
            .await?
            .text()
            .await
    }

    pub async fn tax_text(&self) -> Result<String> {
        self.store
            .wait()
            .present(&selectors::summary_tax())
            .await?
            .text()
            .await
    }

    pub async fn total_text(&self) -> Result<String> {
        self.store
            .wait()
            .present(&selectors::summary_total())
            .await?
            .text()
            .await
    }
}
