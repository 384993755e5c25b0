//! Checkout: the end-to-end purchase and the overview arithmetic

use anyhow::ensure;
use futures::future::BoxFuture;

use swagcheck_harness::{Case, CaseCtx, Category, SessionScope, Suite};
use swagcheck_store::money::{format_cents, parse_price_cents};
use swagcheck_store::{catalog, Persona, StoreSession};

use crate::bound_persona;

pub fn suite() -> Suite {
    Suite::new("CheckoutProcess", Category::Functionality, SessionScope::Suite)
        .case(Case::for_persona(
            "FCP_01",
            "full checkout reaches the confirmation page",
            Persona::StandardUser,
            purchase_flow,
        ))
        .case(Case::for_persona(
            "FCP_02",
            "full checkout reaches the confirmation page",
            Persona::ProblemUser,
            purchase_flow,
        ))
        .case(Case::for_persona(
            "FCP_03",
            "full checkout reaches the confirmation page",
            Persona::PerformanceGlitchUser,
            purchase_flow,
        ))
        .case(Case::for_persona(
            "FCP_04",
            "full checkout reaches the confirmation page",
            Persona::ErrorUser,
            purchase_flow,
        ))
        .case(Case::for_persona(
            "FCP_05",
            "full checkout reaches the confirmation page",
            Persona::VisualUser,
            purchase_flow,
        ))
        .case(Case::for_persona(
            "FCP_06",
            "overview totals add up",
            Persona::StandardUser,
            overview_totals,
        ))
        .case(Case::for_persona(
            "FCP_07",
            "overview totals add up",
            Persona::ProblemUser,
            overview_totals,
        ))
        .case(Case::for_persona(
            "FCP_08",
            "overview totals add up",
            Persona::PerformanceGlitchUser,
            overview_totals,
        ))
        .case(Case::for_persona(
            "FCP_09",
            "overview totals add up",
            Persona::ErrorUser,
            overview_totals,
        ))
        .case(Case::for_persona(
            "FCP_10",
            "overview totals add up",
            Persona::VisualUser,
            overview_totals,
        ))
}

/// Put the two checkout items in the cart from a fresh render.
async fn stage_checkout_items(store: &StoreSession) -> anyhow::Result<()> {
    store.driver().refresh().await?;
    for slug in catalog::CHECKOUT_SLUGS {
        store.inventory().add_item(slug).await?;
    }
    store.inventory().expect_badge("2").await?;
    Ok(())
}

fn purchase_flow(ctx: &mut CaseCtx, persona: Option<Persona>) -> BoxFuture<'_, anyhow::Result<()>> {
    Box::pin(async move {
        let persona = bound_persona(persona)?;
        let store = ctx.store();
        store.login(persona).await?;
        store.reset_app_state().await?;
        stage_checkout_items(store).await?;

        store.cart().open().await?;
        store.cart().begin_checkout().await?;
        let (first, last, postal) = store
            .checkout()
            .fill_information("Eugene", "Torre", "5000")
            .await?;
        ensure!(
            !first.is_empty() && !last.is_empty() && !postal.is_empty(),
            "One or more text fields are empty before clicking continue."
        );
        store.checkout().continue_to_overview().await?;
        store.checkout().finish().await?;
        Ok(())
    })
}

fn overview_totals(ctx: &mut CaseCtx, persona: Option<Persona>) -> BoxFuture<'_, anyhow::Result<()>> {
    Box::pin(async move {
        let persona = bound_persona(persona)?;
        let store = ctx.store();
        store.login(persona).await?;
        store.reset_app_state().await?;
        stage_checkout_items(store).await?;

        store.cart().open().await?;
        store.cart().begin_checkout().await?;
        store
            .checkout()
            .fill_information("Eugene", "Torre", "5009")
            .await?;
        store.checkout().continue_to_overview().await?;

        let price_texts = store.checkout().overview_price_texts().await?;
        ensure!(
            price_texts.len() >= 2,
            "Expected at least 2 line items on the overview, found {}",
            price_texts.len()
        );
        let mut line_total = 0u32;
        for text in &price_texts {
            line_total += parse_price_cents(text)?;
        }
        let subtotal = parse_price_cents(&store.checkout().subtotal_text().await?)?;
        let tax = parse_price_cents(&store.checkout().tax_text().await?)?;
        let total = parse_price_cents(&store.checkout().total_text().await?)?;

        ensure!(
            line_total == subtotal,
            "Item total mismatch: Expected {}, but got {}",
            format_cents(line_total),
            format_cents(subtotal)
        );
        ensure!(
            subtotal + tax == total,
            "Total price mismatch: Expected {}, but got {}",
            format_cents(subtotal + tax),
            format_cents(total)
        );
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_flows_cover_the_active_accounts() {
        let suite = suite();
        assert_eq!(suite.name, "CheckoutProcess");
        assert_eq!(suite.cases.len(), 10);
        assert!(!suite
            .cases
            .iter()
            .any(|c| c.persona == Some(Persona::LockedOutUser)));
    }

    #[test]
    fn checkout_items_price_to_a_known_subtotal() {
        let cents: u32 = catalog::CHECKOUT_SLUGS
            .iter()
            .map(|slug| {
                let product = catalog::PRODUCTS
                    .iter()
                    .find(|p| p.slug == *slug)
                    .expect("checkout slug in catalog");
                parse_price_cents(product.price).expect("price parses")
            })
            .sum();
        assert_eq!(cents, 3998, "backpack plus bike light");
        assert_eq!(format_cents(cents), "$39.98");
    }
}
