//! Cart layout at phone, tablet and desktop window sizes
//!
//! Each case gets a fresh session since resizing leaves the window in
//! an arbitrary state for anything that follows.

use std::time::Duration;

use anyhow::{bail, ensure};
use futures::future::BoxFuture;

use swagcheck_harness::{Case, CaseCtx, Category, SessionScope, Suite};
use swagcheck_store::{selectors, Persona, StoreSession};
use swagcheck_webdriver::{By, WebDriverError};

const PHONE: &[(u32, u32)] = &[(375, 667)];
const TABLET: &[(u32, u32)] = &[(768, 1024)];
const DESKTOPS: &[(u32, u32)] = &[(1024, 768), (1280, 800), (1440, 900), (1920, 1080)];

pub fn suite() -> Suite {
    Suite::new("Responsiveness", Category::Usability, SessionScope::Case)
        .with_tags(&["layout"])
        .case(Case::new(
            "UR_01",
            "cart keeps its controls at phone size",
            phone_layout,
        ))
        .case(Case::new(
            "UR_02",
            "cart keeps its controls at tablet size",
            tablet_layout,
        ))
        .case(Case::new(
            "UR_03",
            "cart keeps its controls at desktop sizes",
            desktop_layouts,
        ))
}

fn phone_layout(ctx: &mut CaseCtx, _persona: Option<Persona>) -> BoxFuture<'_, anyhow::Result<()>> {
    Box::pin(cart_layout_at(ctx, PHONE))
}

fn tablet_layout(ctx: &mut CaseCtx, _persona: Option<Persona>) -> BoxFuture<'_, anyhow::Result<()>> {
    Box::pin(cart_layout_at(ctx, TABLET))
}

fn desktop_layouts(
    ctx: &mut CaseCtx,
    _persona: Option<Persona>,
) -> BoxFuture<'_, anyhow::Result<()>> {
    Box::pin(cart_layout_at(ctx, DESKTOPS))
}

async fn cart_layout_at(ctx: &mut CaseCtx, sizes: &'static [(u32, u32)]) -> anyhow::Result<()> {
    let issues = {
        let store = ctx.store();
        store.login(Persona::StandardUser).await?;
        let clicked = store.inventory().add_all_to_cart().await?;
        ensure!(
            clicked == 6,
            "Expected 6 items on the inventory page, but found {clicked}"
        );
        store.inventory().open_cart().await?;
        let rows = store.cart().row_count().await?;
        ensure!(rows == 6, "Expected 6 items in the cart, but found {rows}.");

        let mut issues = Vec::new();
        for &(width, height) in sizes {
            if !appears(store, &selectors::continue_shopping_button()).await? {
                issues.push(format!(
                    "Continue Shopping button not present at {width}x{height}"
                ));
            }
            if !appears(store, &selectors::checkout_button()).await? {
                issues.push(format!("Checkout button not present at {width}x{height}"));
            }
            store.driver().set_window_size(width, height).await?;
            if !cart_visible(store).await? {
                issues.push(format!("Cart elements not visible at {width}x{height}."));
            }
        }
        issues
    };

    if issues.is_empty() {
        return Ok(());
    }
    ctx.note("Details:");
    for issue in &issues {
        ctx.note(issue.clone());
    }
    bail!("{} layout issue(s) found", issues.len());
}

/// Present within a short wait. Layout checks tolerate slow rendering
/// but not absence.
async fn appears(store: &StoreSession, by: &By) -> anyhow::Result<bool> {
    match store.wait().timeout(Duration::from_secs(5)).present(by).await {
        Ok(_) => Ok(true),
        Err(WebDriverError::WaitTimeout { .. }) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

async fn cart_visible(store: &StoreSession) -> anyhow::Result<bool> {
    match store
        .wait()
        .timeout(Duration::from_secs(5))
        .displayed(&selectors::cart_list())
        .await
    {
        Ok(_) => Ok(true),
        Err(WebDriverError::WaitTimeout { .. }) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_per_case() {
        let suite = suite();
        assert_eq!(suite.scope, SessionScope::Case);
        assert_eq!(suite.cases.len(), 3);
    }

    #[test]
    fn desktop_sweep_covers_the_common_resolutions() {
        assert_eq!(DESKTOPS.len(), 4);
        assert!(DESKTOPS.contains(&(1920, 1080)));
        assert!(PHONE[0].0 < TABLET[0].0);
    }
}
