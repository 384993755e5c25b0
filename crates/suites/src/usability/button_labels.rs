//! Rendered labels on the primary navigation buttons
//!
//! The login button is sampled before signing in, the rest along a
//! cart-to-checkout walk. Comparison is case-insensitive; the site
//! renders most labels uppercased through CSS while the DOM carries
//! the canonical text.

use std::time::Duration;

use anyhow::{ensure, Context};
use futures::future::BoxFuture;

use swagcheck_harness::{Case, CaseCtx, Category, SessionScope, Suite};
use swagcheck_store::{catalog, selectors, Persona, StoreSession, PASSWORD};

use crate::bound_persona;

pub fn suite() -> Suite {
    Suite::new("NavigationButtonLabels", Category::Usability, SessionScope::Suite)
        .case(Case::for_persona(
            "UN_06",
            "navigation buttons carry their expected labels",
            Persona::StandardUser,
            button_labels,
        ))
        .case(Case::for_persona(
            "UN_07",
            "navigation buttons carry their expected labels",
            Persona::ProblemUser,
            button_labels,
        ))
        .case(Case::for_persona(
            "UN_08",
            "navigation buttons carry their expected labels",
            Persona::PerformanceGlitchUser,
            button_labels,
        ))
        .case(Case::for_persona(
            "UN_09",
            "navigation buttons carry their expected labels",
            Persona::ErrorUser,
            button_labels,
        ))
        .case(Case::for_persona(
            "UN_10",
            "navigation buttons carry their expected labels",
            Persona::VisualUser,
            button_labels,
        ))
}

fn button_labels(ctx: &mut CaseCtx, persona: Option<Persona>) -> BoxFuture<'_, anyhow::Result<()>> {
    Box::pin(async move {
        let persona = bound_persona(persona)?;
        let labels = {
            let store = ctx.store();
            collect_labels(store, persona).await?
        };

        let mut mismatches = 0;
        for spec in catalog::BUTTON_LABELS {
            let actual = labels
                .iter()
                .find(|(control, _)| *control == spec.control)
                .map(|(_, label)| label.as_str())
                .unwrap_or("Missing");
            if actual.eq_ignore_ascii_case(spec.expected) {
                ctx.note(format!("{}: ✅ Match - '{}'", spec.control, actual));
            } else {
                mismatches += 1;
                ctx.note(format!(
                    "{}: ❌ Mismatch - Expected: '{}', Got: '{}'",
                    spec.control, spec.expected, actual
                ));
            }
        }
        ensure!(
            mismatches == 0,
            "{mismatches} button label(s) deviate from the expected set"
        );
        Ok(())
    })
}

/// Walk login → products → cart → checkout step one, reading each
/// control's label on the way.
async fn collect_labels(
    store: &StoreSession,
    persona: Persona,
) -> anyhow::Result<Vec<(&'static str, String)>> {
    let mut labels = Vec::new();

    store.open_login().await?;
    let login_label = store
        .login_page()
        .login_button_label()
        .await?
        .unwrap_or_default();
    labels.push(("Login", login_label));

    store.submit_login(persona.username(), PASSWORD).await?;
    store
        .wait()
        .timeout(Duration::from_secs(30))
        .url_contains("inventory.html")
        .await
        .with_context(|| format!("login did not complete for {persona}"))?;

    let add_button = store.wait().present(&selectors::any_add_button()).await?;
    labels.push(("Add to Cart", add_button.text().await?));
    add_button.click().await?;
    let remove_button = store.wait().present(&selectors::any_remove_button()).await?;
    labels.push(("Remove", remove_button.text().await?));

    store.cart().open().await?;
    let checkout = store.wait().present(&selectors::checkout_button()).await?;
    labels.push(("Checkout", checkout.text().await?));
    let continue_shopping = store
        .wait()
        .present(&selectors::continue_shopping_button())
        .await?;
    labels.push(("Continue Shopping", continue_shopping.text().await?));

    store.cart().begin_checkout().await?;
    store.wait().url_contains("checkout-step-one.html").await?;
    let continue_button = store.wait().present(&selectors::continue_button()).await?;
    labels.push((
        "Continue",
        continue_button.attribute("value").await?.unwrap_or_default(),
    ));
    // the cancel control is an anchor with no text of its own; its
    // data-test id carries the label
    let cancel = store.wait().present(&selectors::cancel_button()).await?;
    let cancel_label = cancel
        .attribute("data-test")
        .await?
        .map(|value| capitalized(&value))
        .unwrap_or_default();
    labels.push(("Cancel", cancel_label));

    Ok(labels)
}

/// First letter upper, the rest lower.
fn capitalized(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("cancel", "Cancel")]
    #[test_case("canCEL", "Cancel" ; "mixed_case_cancel_expects")]
    #[test_case("x", "X")]
    #[test_case("", "")]
    fn capitalized_normalizes(input: &str, expected: &str) {
        assert_eq!(capitalized(input), expected);
    }

    #[test]
    fn every_expected_control_is_checked() {
        // the comparison loop walks BUTTON_LABELS; collect_labels must
        // produce an entry for each control name it lists
        let controls = [
            "Login",
            "Add to Cart",
            "Remove",
            "Checkout",
            "Continue Shopping",
            "Continue",
            "Cancel",
        ];
        for spec in catalog::BUTTON_LABELS {
            assert!(controls.contains(&spec.control), "unknown control {}", spec.control);
        }
        assert_eq!(catalog::BUTTON_LABELS.len(), controls.len());
    }
}
