//! Cart fill and empty flows per account
//!
//! The broken-UI accounts (`problem_user`, `error_user`) only get the
//! add buttons that actually work on their rendition of the page; the
//! rest stock the full catalog.

use anyhow::ensure;
use futures::future::BoxFuture;

use swagcheck_harness::{Case, CaseCtx, Category, SessionScope, Suite};
use swagcheck_store::{catalog, Persona, StoreSession};

use crate::bound_persona;

pub fn suite() -> Suite {
    Suite::new("ShoppingCart", Category::Functionality, SessionScope::Suite)
        .case(Case::for_persona(
            "FSC_01",
            "filled cart lists every added item",
            Persona::StandardUser,
            fill_cart,
        ))
        .case(Case::for_persona(
            "FSC_02",
            "filled cart lists every added item",
            Persona::ProblemUser,
            fill_cart,
        ))
        .case(Case::for_persona(
            "FSC_03",
            "filled cart lists every added item",
            Persona::PerformanceGlitchUser,
            fill_cart,
        ))
        .case(Case::for_persona(
            "FSC_04",
            "filled cart lists every added item",
            Persona::ErrorUser,
            fill_cart,
        ))
        .case(Case::for_persona(
            "FSC_05",
            "filled cart lists every added item",
            Persona::VisualUser,
            fill_cart,
        ))
        .case(Case::for_persona(
            "FSC_06",
            "emptied cart drops every item and the badge",
            Persona::StandardUser,
            empty_cart,
        ))
        .case(Case::for_persona(
            "FSC_07",
            "emptied cart drops every item and the badge",
            Persona::ProblemUser,
            empty_cart,
        ))
        .case(Case::for_persona(
            "FSC_08",
            "emptied cart drops every item and the badge",
            Persona::PerformanceGlitchUser,
            empty_cart,
        ))
        .case(Case::for_persona(
            "FSC_09",
            "emptied cart drops every item and the badge",
            Persona::ErrorUser,
            empty_cart,
        ))
        .case(Case::for_persona(
            "FSC_10",
            "emptied cart drops every item and the badge",
            Persona::VisualUser,
            empty_cart,
        ))
}

/// Add items from a fresh inventory render and wait for the badge to
/// agree; returns how many items went in.
async fn stock_cart(store: &StoreSession, persona: Persona) -> anyhow::Result<usize> {
    store.driver().refresh().await?;
    if matches!(persona, Persona::ProblemUser | Persona::ErrorUser) {
        for slug in catalog::RELIABLE_ADD_SLUGS {
            store.inventory().add_item(slug).await?;
        }
        store.inventory().expect_badge("3").await?;
        Ok(catalog::RELIABLE_ADD_SLUGS.len())
    } else {
        let clicked = store.inventory().add_all_to_cart().await?;
        ensure!(
            clicked == catalog::PRODUCTS.len(),
            "expected {} add buttons, found {}",
            catalog::PRODUCTS.len(),
            clicked
        );
        store.inventory().expect_badge("6").await?;
        Ok(clicked)
    }
}

fn fill_cart(ctx: &mut CaseCtx, persona: Option<Persona>) -> BoxFuture<'_, anyhow::Result<()>> {
    Box::pin(async move {
        let persona = bound_persona(persona)?;
        let store = ctx.store();
        store.login(persona).await?;
        store.reset_app_state().await?;
        let expected = stock_cart(store, persona).await?;

        store.cart().open().await?;
        let items = store.cart().items().await?;
        ensure!(
            items.len() == expected,
            "Expected {} items in cart, but found {}.",
            expected,
            items.len()
        );
        for item in &items {
            ensure!(!item.name.is_empty(), "Item name is empty");
            ensure!(!item.description.is_empty(), "Item description is empty");
            ensure!(!item.price.is_empty(), "Item price is empty");
        }
        store.cart().continue_shopping().await?;
        Ok(())
    })
}

fn empty_cart(ctx: &mut CaseCtx, persona: Option<Persona>) -> BoxFuture<'_, anyhow::Result<()>> {
    Box::pin(async move {
        let persona = bound_persona(persona)?;
        let store = ctx.store();
        store.login(persona).await?;
        store.reset_app_state().await?;
        let expected = stock_cart(store, persona).await?;

        store.cart().open().await?;
        let removed = store.cart().remove_all().await?;
        ensure!(
            removed == expected,
            "Expected {} Remove buttons in cart, but found {}.",
            expected,
            removed
        );
        store.cart().badge_gone().await?;
        store.cart().continue_shopping().await?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_fill_and_five_empty_cases() {
        let suite = suite();
        assert_eq!(suite.cases.len(), 10);
        assert!(suite.cases.iter().all(|c| c.persona.is_some()));
    }
}
