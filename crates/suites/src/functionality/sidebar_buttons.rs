//! Burger menu actions under a randomly drawn account

use anyhow::ensure;
use futures::future::BoxFuture;
use rand::Rng;
use tracing::debug;

use swagcheck_harness::{Case, CaseCtx, Category, SessionScope, Suite};
use swagcheck_store::{catalog, Persona};

pub fn suite() -> Suite {
    Suite::new("SidebarButtons", Category::Functionality, SessionScope::Suite)
        .case(Case::new(
            "FSB_01",
            "All Items returns to the products page",
            all_items_link,
        ))
        .case(Case::new(
            "FSB_02",
            "About leads to saucelabs.com",
            about_link,
        ))
        .case(Case::new(
            "FSB_03",
            "Logout returns to the login page",
            logout_link,
        ))
        .case(Case::new(
            "FSB_04",
            "Reset App State clears filter and cart",
            reset_link,
        ))
}

/// Which healthy account exercises the menu should not matter; draw
/// one per case.
fn drawn_persona() -> Persona {
    const POOL: &[Persona] = &[
        Persona::StandardUser,
        Persona::ProblemUser,
        Persona::PerformanceGlitchUser,
    ];
    POOL[rand::thread_rng().gen_range(0..POOL.len())]
}

fn all_items_link(
    ctx: &mut CaseCtx,
    _persona: Option<Persona>,
) -> BoxFuture<'_, anyhow::Result<()>> {
    Box::pin(async move {
        let persona = drawn_persona();
        debug!(%persona, "drew account for the menu check");
        let store = ctx.store();
        store.login(persona).await?;
        store.menu().open().await?;
        store.menu().click_all_items().await?;
        store.wait().url_contains("inventory.html").await?;
        Ok(())
    })
}

fn about_link(ctx: &mut CaseCtx, _persona: Option<Persona>) -> BoxFuture<'_, anyhow::Result<()>> {
    Box::pin(async move {
        let persona = drawn_persona();
        debug!(%persona, "drew account for the menu check");
        let store = ctx.store();
        store.login(persona).await?;
        store.menu().open().await?;
        store.menu().click_about().await?;
        store.wait().url_contains("saucelabs.com").await?;
        Ok(())
    })
}

fn logout_link(ctx: &mut CaseCtx, _persona: Option<Persona>) -> BoxFuture<'_, anyhow::Result<()>> {
    Box::pin(async move {
        let persona = drawn_persona();
        debug!(%persona, "drew account for the menu check");
        let store = ctx.store();
        store.login(persona).await?;
        store.logout().await?;
        Ok(())
    })
}

fn reset_link(ctx: &mut CaseCtx, _persona: Option<Persona>) -> BoxFuture<'_, anyhow::Result<()>> {
    Box::pin(async move {
        let persona = drawn_persona();
        debug!(%persona, "drew account for the menu check");
        let store = ctx.store();
        store.login(persona).await?;

        store.inventory().sort_by("za").await?;
        store.inventory().add_item("sauce-labs-backpack").await?;
        store.reset_app_state().await?;
        store.driver().refresh().await?;

        let label = store.inventory().active_sort_label().await?;
        ensure!(label == catalog::DEFAULT_SORT_LABEL, "Filter not reset");
        let badge = store.inventory().cart_badge_text().await?;
        ensure!(badge.is_none(), "Cart not reset");
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drawn_persona_stays_in_the_pool() {
        for _ in 0..50 {
            let persona = drawn_persona();
            assert!(matches!(
                persona,
                Persona::StandardUser | Persona::ProblemUser | Persona::PerformanceGlitchUser
            ));
        }
    }

    #[test]
    fn one_case_per_menu_link() {
        assert_eq!(suite().cases.len(), catalog::SIDEBAR_LINKS.len());
    }
}
