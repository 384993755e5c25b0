//! Catalog contents, sort orders, and bulk add/remove on the products
//! page

use anyhow::{bail, ensure, Context};
use futures::future::BoxFuture;
use tracing::debug;

use swagcheck_harness::{Case, CaseCtx, Category, SessionScope, Suite};
use swagcheck_store::money::parse_price_cents;
use swagcheck_store::{catalog, Persona, StoreSession};

use crate::bound_persona;

pub fn suite() -> Suite {
    Suite::new("ProductBrowsing", Category::Functionality, SessionScope::Suite)
        .case(Case::for_persona(
            "FP_01",
            "catalog matches the expected listings",
            Persona::StandardUser,
            catalog_check,
        ))
        .case(Case::for_persona(
            "FP_02",
            "catalog matches the expected listings",
            Persona::ProblemUser,
            catalog_check,
        ))
        .case(Case::for_persona(
            "FP_03",
            "catalog matches the expected listings",
            Persona::PerformanceGlitchUser,
            catalog_check,
        ))
        .case(Case::for_persona(
            "FP_04",
            "catalog matches the expected listings",
            Persona::ErrorUser,
            catalog_check,
        ))
        .case(Case::for_persona(
            "FP_05",
            "catalog matches the expected listings",
            Persona::VisualUser,
            catalog_check,
        ))
        .case(Case::for_persona(
            "FP_06",
            "all four sort orders hold",
            Persona::StandardUser,
            sort_check,
        ))
        .case(Case::for_persona(
            "FP_07",
            "all four sort orders hold",
            Persona::ProblemUser,
            sort_check,
        ))
        .case(Case::for_persona(
            "FP_08",
            "all four sort orders hold",
            Persona::PerformanceGlitchUser,
            sort_check,
        ))
        .case(Case::for_persona(
            "FP_09",
            "all four sort orders hold",
            Persona::ErrorUser,
            sort_check,
        ))
        .case(Case::for_persona(
            "FP_10",
            "all four sort orders hold",
            Persona::VisualUser,
            sort_check,
        ))
        .case(Case::for_persona(
            "FP_11",
            "every product can be added from the listing",
            Persona::StandardUser,
            add_all_check,
        ))
        .case(Case::for_persona(
            "FP_12",
            "every product can be added from the listing",
            Persona::ProblemUser,
            add_all_check,
        ))
        .case(Case::for_persona(
            "FP_13",
            "every product can be added from the listing",
            Persona::PerformanceGlitchUser,
            add_all_check,
        ))
        .case(Case::for_persona(
            "FP_14",
            "every product can be added from the listing",
            Persona::ErrorUser,
            add_all_check,
        ))
        .case(Case::for_persona(
            "FP_15",
            "every product can be added from the listing",
            Persona::VisualUser,
            add_all_check,
        ))
        .case(Case::for_persona(
            "FP_16",
            "every added product can be removed from the listing",
            Persona::StandardUser,
            remove_all_check,
        ))
        .case(Case::for_persona(
            "FP_17",
            "every added product can be removed from the listing",
            Persona::ProblemUser,
            remove_all_check,
        ))
        .case(Case::for_persona(
            "FP_18",
            "every added product can be removed from the listing",
            Persona::PerformanceGlitchUser,
            remove_all_check,
        ))
        .case(Case::for_persona(
            "FP_19",
            "every added product can be removed from the listing",
            Persona::ErrorUser,
            remove_all_check,
        ))
        .case(Case::for_persona(
            "FP_20",
            "every added product can be removed from the listing",
            Persona::VisualUser,
            remove_all_check,
        ))
}

fn catalog_check(ctx: &mut CaseCtx, persona: Option<Persona>) -> BoxFuture<'_, anyhow::Result<()>> {
    Box::pin(async move {
        let persona = bound_persona(persona)?;
        let details = {
            let store = ctx.store();
            store.login(persona).await?;
            store.inventory().card_details().await?
        };

        let mut problems = Vec::new();
        if details.len() != catalog::PRODUCTS.len() {
            problems.push(format!(
                "Number of products does not match expected. Expected: {}, Actual: {}",
                catalog::PRODUCTS.len(),
                details.len()
            ));
        }
        for (name, description, price) in &details {
            match catalog::product_by_name(name) {
                Some(spec) => {
                    if description.trim() != spec.description {
                        problems.push(format!(
                            "Description mismatch for '{}'. Expected: '{}', Actual: '{}'",
                            name, spec.description, description
                        ));
                    }
                    if price.as_str() != spec.price {
                        problems.push(format!(
                            "Price mismatch for '{}'. Expected: '{}', Actual: '{}'",
                            name, spec.price, price
                        ));
                    }
                }
                None => problems.push(format!(
                    "Product name '{}' not found in expected details.",
                    name
                )),
            }
        }

        if problems.is_empty() {
            return Ok(());
        }
        for problem in &problems {
            ctx.note(format!("- {problem}"));
        }
        bail!("{} catalog mismatch(es)", problems.len());
    })
}

fn sort_check(ctx: &mut CaseCtx, persona: Option<Persona>) -> BoxFuture<'_, anyhow::Result<()>> {
    Box::pin(async move {
        let persona = bound_persona(persona)?;
        let store = ctx.store();
        store.login(persona).await?;
        if let Err(e) = verify_sort_orders(store).await {
            debug!("sort verification failed for {persona}: {e:#}");
            bail!("Sorting is broken!");
        }
        Ok(())
    })
}

async fn verify_sort_orders(store: &StoreSession) -> anyhow::Result<()> {
    store.inventory().sort_by("az").await?;
    let names = store.inventory().item_names().await?;
    ensure!(ascending(&names), "Sorting A to Z failed.");

    store.inventory().sort_by("za").await?;
    let names = store.inventory().item_names().await?;
    ensure!(descending(&names), "Sorting Z to A failed.");

    store.inventory().sort_by("lohi").await?;
    let prices = price_cents(store).await?;
    ensure!(ascending(&prices), "Sorting Low to High failed.");

    store.inventory().sort_by("hilo").await?;
    let prices = price_cents(store).await?;
    ensure!(descending(&prices), "Sorting High to Low failed.");
    Ok(())
}

async fn price_cents(store: &StoreSession) -> anyhow::Result<Vec<u32>> {
    let texts = store.inventory().item_price_texts().await?;
    let mut cents = Vec::with_capacity(texts.len());
    for text in &texts {
        cents.push(parse_price_cents(text)?);
    }
    Ok(cents)
}

fn ascending<T: PartialOrd>(values: &[T]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

fn descending<T: PartialOrd>(values: &[T]) -> bool {
    values.windows(2).all(|w| w[0] >= w[1])
}

fn add_all_check(ctx: &mut CaseCtx, persona: Option<Persona>) -> BoxFuture<'_, anyhow::Result<()>> {
    Box::pin(async move {
        let persona = bound_persona(persona)?;
        let store = ctx.store();
        store.login(persona).await?;
        store.reset_app_state().await?;

        match add_everything(store).await {
            Ok(()) => Ok(()),
            Err(e) if matches!(persona, Persona::ProblemUser | Persona::ErrorUser) => {
                debug!("bulk add failed for {persona}: {e:#}");
                bail!("Unable to add other items.");
            }
            Err(e) => Err(e),
        }
    })
}

fn remove_all_check(ctx: &mut CaseCtx, persona: Option<Persona>) -> BoxFuture<'_, anyhow::Result<()>> {
    Box::pin(async move {
        let persona = bound_persona(persona)?;
        let store = ctx.store();
        store.login(persona).await?;
        store.reset_app_state().await?;

        match remove_everything(store).await {
            Ok(()) => Ok(()),
            Err(e) if matches!(persona, Persona::ProblemUser | Persona::ErrorUser) => {
                debug!("bulk remove failed for {persona}: {e:#}");
                bail!("Remove button on added items doesn't work.");
            }
            Err(e) => Err(e),
        }
    })
}

async fn add_everything(store: &StoreSession) -> anyhow::Result<()> {
    store.driver().refresh().await?;
    let clicked = store.inventory().add_all_to_cart().await?;
    ensure!(
        clicked == catalog::PRODUCTS.len(),
        "expected {} add buttons, found {}",
        catalog::PRODUCTS.len(),
        clicked
    );
    store
        .inventory()
        .expect_badge("6")
        .await
        .context("shopping_cart_badge is not equal to 6")?;
    Ok(())
}

async fn remove_everything(store: &StoreSession) -> anyhow::Result<()> {
    add_everything(store).await?;
    let removed = store.inventory().remove_all().await?;
    ensure!(removed > 0, "no Remove buttons rendered");
    store
        .inventory()
        .expect_badge_gone()
        .await
        .context("cart badge still visible after removing every item")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(&["Alpha", "Beta", "Gamma"], true; "ordered names")]
    #[test_case(&["Beta", "Alpha"], false; "swapped names")]
    #[test_case(&["Same", "Same"], true; "equal neighbors")]
    fn ascending_on_names(names: &[&str], expected: bool) {
        assert_eq!(ascending(names), expected);
    }

    #[test]
    fn descending_allows_equal_neighbors() {
        assert!(descending(&[1599, 1599, 999]));
        assert!(!descending(&[999, 1599]));
    }

    #[test]
    fn trivial_lists_count_as_sorted() {
        assert!(ascending::<u32>(&[]));
        assert!(ascending(&[42]));
        assert!(descending(&[42]));
    }

    #[test]
    fn catalog_prices_sort_differently_by_name_and_price() {
        // the fixture the sort cases rely on: name order and price
        // order disagree, so a broken sort cannot pass by accident
        let by_name: Vec<_> = catalog::PRODUCTS.iter().map(|p| p.name).collect();
        let cents: Vec<_> = catalog::PRODUCTS
            .iter()
            .map(|p| parse_price_cents(p.price).expect("price parses"))
            .collect();
        assert!(ascending(&by_name));
        assert!(!ascending(&cents));
    }
}
