//! Login and logout across every shipped account
//!
//! The locked-out account is exercised like any other: the case
//! expects a successful login and the lockout surfaces as a recorded
//! failure in the result file.

use std::time::Duration;

use anyhow::{ensure, Context};
use futures::future::BoxFuture;

use swagcheck_harness::{Case, CaseCtx, Category, HarnessConfig, SessionScope, Suite};
use swagcheck_store::{Persona, PASSWORD};

use crate::bound_persona;

pub fn suite() -> Suite {
    Suite::new("LoginLogout", Category::Functionality, SessionScope::Suite)
        .with_tags(&["smoke"])
        .case(Case::new(
            "FL_01",
            "blank credentials raise the required-field banner",
            blank_login,
        ))
        .case(Case::for_persona(
            "FL_02",
            "login lands on the products page",
            Persona::StandardUser,
            account_login,
        ))
        .case(Case::for_persona(
            "FL_03",
            "login lands on the products page",
            Persona::LockedOutUser,
            account_login,
        ))
        .case(Case::for_persona(
            "FL_04",
            "login lands on the products page",
            Persona::ProblemUser,
            account_login,
        ))
        .case(Case::for_persona(
            "FL_05",
            "login lands on the products page",
            Persona::PerformanceGlitchUser,
            account_login,
        ))
        .case(Case::for_persona(
            "FL_06",
            "login lands on the products page",
            Persona::ErrorUser,
            account_login,
        ))
        .case(Case::for_persona(
            "FL_07",
            "login lands on the products page",
            Persona::VisualUser,
            account_login,
        ))
        .case(Case::new(
            "FL_08",
            "unknown credentials raise the mismatch banner",
            invalid_login,
        ))
        .case(Case::for_persona(
            "FLO_01",
            "logout returns to the login page",
            Persona::StandardUser,
            account_logout,
        ))
        .case(Case::for_persona(
            "FLO_02",
            "logout returns to the login page",
            Persona::ProblemUser,
            account_logout,
        ))
        .case(Case::for_persona(
            "FLO_03",
            "logout returns to the login page",
            Persona::PerformanceGlitchUser,
            account_logout,
        ))
        .case(Case::for_persona(
            "FLO_04",
            "logout returns to the login page",
            Persona::ErrorUser,
            account_logout,
        ))
        .case(Case::for_persona(
            "FLO_05",
            "logout returns to the login page",
            Persona::VisualUser,
            account_logout,
        ))
}

/// The glitch account renders its landing page several seconds late;
/// give its URL wait extra room on top of the configured timeout.
fn login_allowance(config: &HarnessConfig, persona: Persona) -> Duration {
    let base = config.element_timeout();
    if persona == Persona::PerformanceGlitchUser {
        base + Duration::from_secs(5)
    } else {
        base
    }
}

fn blank_login(ctx: &mut CaseCtx, _persona: Option<Persona>) -> BoxFuture<'_, anyhow::Result<()>> {
    Box::pin(async move {
        let store = ctx.store();
        store.submit_login("", "").await?;
        let banner = store.login_page().error_message().await?;
        ensure!(
            banner.contains("Username is required") || banner.contains("Password is required"),
            "Login did not produce the expected error message."
        );
        Ok(())
    })
}

fn account_login(ctx: &mut CaseCtx, persona: Option<Persona>) -> BoxFuture<'_, anyhow::Result<()>> {
    Box::pin(async move {
        let persona = bound_persona(persona)?;
        let timeout = login_allowance(ctx.config(), persona);
        let store = ctx.store();
        store.submit_login(persona.username(), PASSWORD).await?;
        let landed = store.wait().timeout(timeout).url_contains("inventory.html").await;
        match persona {
            Persona::LockedOutUser => landed.map(|_| ()).context("Account Failed to Login"),
            _ => landed
                .map(|_| ())
                .with_context(|| format!("Login was unsuccessful for {persona}.")),
        }
    })
}

fn invalid_login(ctx: &mut CaseCtx, _persona: Option<Persona>) -> BoxFuture<'_, anyhow::Result<()>> {
    Box::pin(async move {
        let store = ctx.store();
        store.submit_login("invalid_user", "invalid_password").await?;
        let banner = store.login_page().error_message().await?;
        ensure!(
            banner.contains("Username and password do not match any user in this service"),
            "Login did not produce the expected error message for invalid credentials."
        );
        Ok(())
    })
}

fn account_logout(ctx: &mut CaseCtx, persona: Option<Persona>) -> BoxFuture<'_, anyhow::Result<()>> {
    Box::pin(async move {
        let persona = bound_persona(persona)?;
        let store = ctx.store();
        store
            .login(persona)
            .await
            .with_context(|| format!("login before logout failed for {persona}"))?;
        store
            .logout()
            .await
            .with_context(|| format!("Logout failed for {persona}."))?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_every_account_plus_the_credential_edge_cases() {
        let suite = suite();
        assert_eq!(suite.name, "LoginLogout");
        assert_eq!(suite.scope, SessionScope::Suite);
        assert_eq!(suite.cases.len(), 13);

        let logins = suite.cases.iter().filter(|c| c.id.starts_with("FL_")).count();
        let logouts = suite.cases.iter().filter(|c| c.id.starts_with("FLO_")).count();
        assert_eq!(logins, 8);
        assert_eq!(logouts, 5);
    }

    #[test]
    fn glitch_account_gets_a_longer_login_window() {
        let config = HarnessConfig::default();
        let standard = login_allowance(&config, Persona::StandardUser);
        let glitch = login_allowance(&config, Persona::PerformanceGlitchUser);
        assert_eq!(glitch, standard + Duration::from_secs(5));
    }
}
