//! Login error banners and the empty-cart checkout guard

use anyhow::ensure;
use futures::future::BoxFuture;
use tokio::time::sleep;

use swagcheck_harness::{Case, CaseCtx, Category, SessionScope, Suite};
use swagcheck_store::{Persona, StoreSession, PASSWORD};

use crate::bound_persona;

pub fn suite() -> Suite {
    Suite::new("ErrorHandling", Category::Functionality, SessionScope::Suite)
        .with_tags(&["smoke"])
        .case(Case::new(
            "FEH_01",
            "blank form reports the missing username",
            missing_username,
        ))
        .case(Case::new(
            "FEH_02",
            "missing password is called out",
            missing_password,
        ))
        .case(Case::new(
            "FEH_03",
            "unknown account is rejected with the mismatch banner",
            unknown_account,
        ))
        .case(Case::new(
            "FEH_04",
            "locked out account explains the lockout",
            lockout_banner,
        ))
        .case(Case::for_persona(
            "FEH_05",
            "checkout with an empty cart goes nowhere",
            Persona::StandardUser,
            empty_cart_checkout,
        ))
        .case(Case::for_persona(
            "FEH_06",
            "checkout with an empty cart goes nowhere",
            Persona::ProblemUser,
            empty_cart_checkout,
        ))
        .case(Case::for_persona(
            "FEH_07",
            "checkout with an empty cart goes nowhere",
            Persona::PerformanceGlitchUser,
            empty_cart_checkout,
        ))
        .case(Case::for_persona(
            "FEH_08",
            "checkout with an empty cart goes nowhere",
            Persona::ErrorUser,
            empty_cart_checkout,
        ))
        .case(Case::for_persona(
            "FEH_09",
            "checkout with an empty cart goes nowhere",
            Persona::VisualUser,
            empty_cart_checkout,
        ))
}

async fn expect_banner(
    store: &StoreSession,
    username: &str,
    password: &str,
    needle: &str,
) -> anyhow::Result<()> {
    store.submit_login(username, password).await?;
    let banner = store.login_page().error_message().await?;
    ensure!(banner.contains(needle), "Unexpected error message: {banner}");
    Ok(())
}

fn missing_username(
    ctx: &mut CaseCtx,
    _persona: Option<Persona>,
) -> BoxFuture<'_, anyhow::Result<()>> {
    Box::pin(async move { expect_banner(ctx.store(), "", "", "Username is required").await })
}

fn missing_password(
    ctx: &mut CaseCtx,
    _persona: Option<Persona>,
) -> BoxFuture<'_, anyhow::Result<()>> {
    Box::pin(async move {
        expect_banner(
            ctx.store(),
            Persona::StandardUser.username(),
            "",
            "Password is required",
        )
        .await
    })
}

fn unknown_account(
    ctx: &mut CaseCtx,
    _persona: Option<Persona>,
) -> BoxFuture<'_, anyhow::Result<()>> {
    Box::pin(async move {
        expect_banner(
            ctx.store(),
            "invalid_user",
            "invalid_password",
            "Username and password do not match any user in this service",
        )
        .await
    })
}

fn lockout_banner(
    ctx: &mut CaseCtx,
    _persona: Option<Persona>,
) -> BoxFuture<'_, anyhow::Result<()>> {
    Box::pin(async move {
        expect_banner(
            ctx.store(),
            Persona::LockedOutUser.username(),
            PASSWORD,
            "Sorry, this user has been locked out",
        )
        .await
    })
}

fn empty_cart_checkout(
    ctx: &mut CaseCtx,
    persona: Option<Persona>,
) -> BoxFuture<'_, anyhow::Result<()>> {
    Box::pin(async move {
        let persona = bound_persona(persona)?;
        let settle = ctx.config().poll_interval();
        let store = ctx.store();
        store.login(persona).await?;
        store.reset_app_state().await?;
        store.driver().refresh().await?;

        store.cart().open().await?;
        let before = store.driver().current_url().await?;
        store.cart().begin_checkout().await?;
        // give the page its chance to route before reading the URL back
        sleep(settle).await;
        let after = store.driver().current_url().await?;
        ensure!(
            after == before,
            "URL changed to {after} after checkout click with empty cart"
        );
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_cases_run_without_a_persona() {
        let suite = suite();
        assert_eq!(suite.cases.len(), 9);
        let banner_cases = suite
            .cases
            .iter()
            .take(4)
            .filter(|c| c.persona.is_none())
            .count();
        assert_eq!(banner_cases, 4);
    }
}
