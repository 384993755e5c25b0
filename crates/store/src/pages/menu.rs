//! Burger menu (the react-burger sidebar)

use swagcheck_webdriver::{By, Result};

use crate::selectors;
use crate::session::StoreSession;

pub struct SideMenu<'a> {
    store: &'a StoreSession,
}

impl<'a> SideMenu<'a> {
    pub(crate) fn new(store: &'a StoreSession) -> Self {
        Self { store }
    }

    /// Click the burger button and wait for the menu panel to slide in.
    pub async fn open(&self) -> Result<()> {
        self.store
            .wait()
            .clickable(&selectors::burger_button())
            .await?
            .click()
            .await?;
        self.store
            .wait()
            .displayed(&selectors::menu_container())
            .await?;
        Ok(())
    }

    /// Close via the cross button and wait for the panel to hide.
    pub async fn close(&self) -> Result<()> {
        self.store
            .wait()
            .clickable(&selectors::menu_close_button())
            .await?
            .click()
            .await?;
        self.store.wait().gone(&selectors::menu_container()).await
    }

    /// Visible text of every link in the open menu, top to bottom.
    pub async fn link_labels(&self) -> Result<Vec<String>> {
        let menu = self
            .store
            .wait()
            .displayed(&selectors::menu_container())
            .await?;
        let links = menu.find_all(&By::tag("a")).await?;
        let mut labels = Vec::with_capacity(links.len());
        for link in &links {
            labels.push(link.text().await?);
        }
        Ok(labels)
    }

    pub async fn click_all_items(&self) -> Result<()> {
        self.click(selectors::all_items_link()).await
    }

    pub async fn click_about(&self) -> Result<()> {
        self.click(selectors::about_link()).await
    }

    pub async fn click_logout(&self) -> Result<()> {
        self.click(selectors::logout_link()).await
    }

    pub async fn click_reset(&self) -> Result<()> {
        self.click(selectors::reset_link()).await
    }

    async fn click(&self, by: By) -> Result<()> {
        self.store.wait().clickable(&by).await?.click().await
    }
}
