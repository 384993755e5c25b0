//! Idle session expiry probe
//!
//! Log in, idle for the configured dwell, then navigate to the cart.
//! A site with server-side expiry bounces the stale session back to
//! the login page; staying on the cart fails the case.

use std::time::Duration;

use anyhow::bail;
use futures::future::BoxFuture;
use tokio::time::sleep;
use tracing::info;

use swagcheck_harness::{Case, CaseCtx, Category, SessionScope, Suite};
use swagcheck_store::{Persona, PASSWORD};

use crate::bound_persona;

pub fn suite() -> Suite {
    Suite::new("SessionTimeout", Category::Security, SessionScope::Case)
        .with_tags(&["slow"])
        .case(Case::for_persona(
            "SSM_01",
            "idle session expires",
            Persona::StandardUser,
            idle_expiry,
        ))
        .case(Case::for_persona(
            "SSM_02",
            "idle session expires",
            Persona::ProblemUser,
            idle_expiry,
        ))
        .case(Case::for_persona(
            "SSM_03",
            "idle session expires",
            Persona::PerformanceGlitchUser,
            idle_expiry,
        ))
        .case(Case::for_persona(
            "SSM_04",
            "idle session expires",
            Persona::ErrorUser,
            idle_expiry,
        ))
        .case(Case::for_persona(
            "SSM_05",
            "idle session expires",
            Persona::VisualUser,
            idle_expiry,
        ))
}

fn idle_expiry(ctx: &mut CaseCtx, persona: Option<Persona>) -> BoxFuture<'_, anyhow::Result<()>> {
    Box::pin(async move {
        let persona = bound_persona(persona)?;
        let dwell = ctx.config().session_dwell();
        let landed = {
            let store = ctx.store();
            store.submit_login(persona.username(), PASSWORD).await?;
            info!("logged in as {persona}; idling {dwell:?} before the expiry probe");
            sleep(dwell).await;

            store.driver().goto(&store.url("cart.html")).await?;
            sleep(Duration::from_secs(2)).await;
            store.driver().current_url().await?
        };

        if landed.contains("saucedemo.com") && !landed.contains("/cart.html") {
            ctx.note(format!("Session expired. Redirected to: {landed}"));
            Ok(())
        } else {
            bail!("Session still active. Current URL: {landed}")
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probes_every_active_account_in_a_fresh_session() {
        let suite = suite();
        assert_eq!(suite.cases.len(), Persona::active().len());
        assert_eq!(suite.scope, SessionScope::Case);
        assert!(suite.has_tag("slow"));
    }
}
