//! Repeated failed logins probing for a lockout policy
//!
//! The configured number of wrong passwords is submitted for a real
//! account, then the correct password. If that final login still
//! succeeds, no lockout policy is in place and the case fails.

use std::time::Duration;

use anyhow::bail;
use futures::future::BoxFuture;
use tracing::info;

use swagcheck_harness::{Case, CaseCtx, Category, SessionScope, Suite};
use swagcheck_store::{selectors, Persona, StoreSession, PASSWORD};
use swagcheck_webdriver::WebDriverError;

pub fn suite() -> Suite {
    Suite::new("AccountLockout", Category::Security, SessionScope::Case)
        .with_tags(&["slow"])
        .case(Case::new(
            "SLS_01",
            "repeated failed logins trigger a lockout",
            lockout_probe,
        ))
}

fn lockout_probe(ctx: &mut CaseCtx, _persona: Option<Persona>) -> BoxFuture<'_, anyhow::Result<()>> {
    Box::pin(async move {
        let attempts = ctx.config().security.lockout_attempts;
        let problems = {
            let store = ctx.store();
            probe(store, attempts).await?
        };

        if problems.is_empty() {
            return Ok(());
        }
        ctx.note("Details:");
        for problem in &problems {
            ctx.note(problem.clone());
        }
        bail!("account lockout checks failed");
    })
}

async fn probe(store: &StoreSession, attempts: u32) -> anyhow::Result<Vec<String>> {
    let mut problems = Vec::new();

    store.open_login().await?;
    let username = store.wait().present(&selectors::username_field()).await?;
    username.clear().await?;
    username.send_keys(Persona::StandardUser.username()).await?;

    for attempt in 1..=attempts {
        let password = store.driver().find(&selectors::password_field()).await?;
        password.clear().await?;
        password.send_keys(&format!("wrong_password_{attempt}")).await?;
        store
            .driver()
            .find(&selectors::login_button())
            .await?
            .click()
            .await?;

        if !mismatch_banner(store).await? {
            problems.push(format!(
                "Attempt {attempt}: Login did not fail with incorrect credentials."
            ));
            return Ok(problems);
        }
    }
    info!("{attempts} failed logins submitted, probing with the real password");

    let password = store.driver().find(&selectors::password_field()).await?;
    password.clear().await?;
    password.send_keys(PASSWORD).await?;
    store
        .driver()
        .find(&selectors::login_button())
        .await?
        .click()
        .await?;

    match store
        .wait()
        .timeout(Duration::from_secs(5))
        .url_contains("inventory.html")
        .await
    {
        // the real password still works: nothing ever locked
        Ok(_) => problems.push(format!(
            "Account lockout did not occur after {attempts} failed attempts."
        )),
        Err(WebDriverError::WaitTimeout { .. }) => {
            info!("account lockout was triggered after {attempts} failed attempts");
        }
        Err(e) => return Err(e.into()),
    }
    Ok(problems)
}

/// Whether the credential-mismatch banner is showing for the last
/// submitted attempt.
async fn mismatch_banner(store: &StoreSession) -> anyhow::Result<bool> {
    match store
        .wait()
        .timeout(Duration::from_secs(5))
        .displayed(&selectors::error_banner())
        .await
    {
        Ok(banner) => Ok(banner
            .text()
            .await?
            .contains("Username and password do not match")),
        Err(WebDriverError::WaitTimeout { .. }) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_slow_case_with_its_own_session() {
        let suite = suite();
        assert_eq!(suite.cases.len(), 1);
        assert_eq!(suite.scope, SessionScope::Case);
        assert!(suite.has_tag("slow"));
    }
}
