//! Timed navigation steps per account
//!
//! Four steps are measured against the configured response budget:
//! login, going to the cart, browser-back to the inventory, and the
//! All Items menu jump. Every step's time lands in the result file
//! whether it passed or not.

use std::time::Instant;

use anyhow::ensure;
use futures::future::BoxFuture;

use swagcheck_harness::{Case, CaseCtx, Category, SessionScope, Suite};
use swagcheck_store::{Persona, StoreSession};

use crate::bound_persona;

pub fn suite() -> Suite {
    Suite::new("UserPerformance", Category::Performance, SessionScope::Suite)
        .with_tags(&["timing"])
        .case(Case::for_persona(
            "PUP_01",
            "navigation stays under the response budget",
            Persona::StandardUser,
            timed_navigation,
        ))
        .case(Case::for_persona(
            "PUP_02",
            "navigation stays under the response budget",
            Persona::ProblemUser,
            timed_navigation,
        ))
        .case(Case::for_persona(
            "PUP_03",
            "navigation stays under the response budget",
            Persona::PerformanceGlitchUser,
            timed_navigation,
        ))
        .case(Case::for_persona(
            "PUP_04",
            "navigation stays under the response budget",
            Persona::ErrorUser,
            timed_navigation,
        ))
        .case(Case::for_persona(
            "PUP_05",
            "navigation stays under the response budget",
            Persona::VisualUser,
            timed_navigation,
        ))
}

fn timed_navigation(
    ctx: &mut CaseCtx,
    persona: Option<Persona>,
) -> BoxFuture<'_, anyhow::Result<()>> {
    Box::pin(async move {
        let persona = bound_persona(persona)?;
        let budget = ctx.config().acceptable_response().as_secs_f64();

        let mut steps: Vec<(&'static str, f64)> = Vec::new();
        let walk = {
            let store = ctx.store();
            walk_steps(store, persona, &mut steps).await
        };

        // record what was measured even when a step blew up mid-walk
        ctx.note(format!("=== {} ===", ctx.case_id()));
        let mut slow = Vec::new();
        for (name, secs) in &steps {
            if *secs < budget {
                ctx.note(format!("{name}: Pass ({secs:.2}s)"));
            } else {
                ctx.note(format!("{name}: Fail ({secs:.2}s)"));
                slow.push(format!("{name} took too long: {secs:.2}s"));
            }
        }
        walk?;
        ensure!(slow.is_empty(), "failed steps: {}", slow.join("; "));
        Ok(())
    })
}

async fn walk_steps(
    store: &StoreSession,
    persona: Persona,
    steps: &mut Vec<(&'static str, f64)>,
) -> anyhow::Result<()> {
    let start = Instant::now();
    store.login(persona).await?;
    steps.push(("Login", start.elapsed().as_secs_f64()));

    let start = Instant::now();
    store.cart().open().await?;
    steps.push(("GoToCart", start.elapsed().as_secs_f64()));

    let start = Instant::now();
    store.driver().back().await?;
    steps.push(("BackToInventory", start.elapsed().as_secs_f64()));

    let start = Instant::now();
    store.menu().open().await?;
    store.menu().click_all_items().await?;
    store.wait().url_contains("inventory.html").await?;
    steps.push(("AllItems", start.elapsed().as_secs_f64()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn times_every_active_account() {
        let suite = suite();
        assert_eq!(suite.cases.len(), Persona::active().len());
        assert!(suite.has_tag("timing"));
        assert_eq!(suite.category, Category::Performance);
    }
}
