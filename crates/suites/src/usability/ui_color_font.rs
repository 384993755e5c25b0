//! Color and font consistency against the standard_user baseline
//!
//! The standard account runs first and stashes what it saw; every
//! other account is compared against that snapshot. Sampling happens
//! after a full purchase walk, so a broken page anywhere on the path
//! fails the case before styling is even read.

use anyhow::{bail, ensure, Context};
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use tracing::debug;

use swagcheck_harness::{Case, CaseCtx, Category, SessionScope, Suite};
use swagcheck_store::{selectors, Persona, StoreSession};
use swagcheck_webdriver::By;

use crate::bound_persona;

const COLOR_BASELINE: &str = "ui_colors";
const FONT_BASELINE: &str = "ui_fonts";
const WALK_FAILED: &str = "Other parts of the website are not accessible!";

pub fn suite() -> Suite {
    Suite::new("UIColorFont", Category::Usability, SessionScope::Suite)
        .case(Case::for_persona(
            "UUI_01",
            "page colors match the baseline",
            Persona::StandardUser,
            color_consistency,
        ))
        .case(Case::for_persona(
            "UUI_02",
            "page colors match the baseline",
            Persona::ProblemUser,
            color_consistency,
        ))
        .case(Case::for_persona(
            "UUI_03",
            "page colors match the baseline",
            Persona::PerformanceGlitchUser,
            color_consistency,
        ))
        .case(Case::for_persona(
            "UUI_04",
            "page colors match the baseline",
            Persona::ErrorUser,
            color_consistency,
        ))
        .case(Case::for_persona(
            "UUI_05",
            "page colors match the baseline",
            Persona::VisualUser,
            color_consistency,
        ))
        .case(Case::for_persona(
            "UUI_06",
            "fonts match the baseline",
            Persona::StandardUser,
            font_consistency,
        ))
        .case(Case::for_persona(
            "UUI_07",
            "fonts match the baseline",
            Persona::ProblemUser,
            font_consistency,
        ))
        .case(Case::for_persona(
            "UUI_08",
            "fonts match the baseline",
            Persona::PerformanceGlitchUser,
            font_consistency,
        ))
        .case(Case::for_persona(
            "UUI_09",
            "fonts match the baseline",
            Persona::ErrorUser,
            font_consistency,
        ))
        .case(Case::for_persona(
            "UUI_10",
            "fonts match the baseline",
            Persona::VisualUser,
            font_consistency,
        ))
}

/// Computed colors of the page chrome on the confirmation page. The
/// product fields stay `None` there; they exist so a rendition that
/// unexpectedly shows products diverges from the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ColorSnapshot {
    header_bg: Option<String>,
    footer_bg: Option<String>,
    button_bg: Option<String>,
    button_color: Option<String>,
    title_color: Option<String>,
    description_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct FontSample {
    family: String,
    size: String,
}

fn color_consistency(
    ctx: &mut CaseCtx,
    persona: Option<Persona>,
) -> BoxFuture<'_, anyhow::Result<()>> {
    Box::pin(async move {
        let persona = bound_persona(persona)?;
        let snapshot = {
            let store = ctx.store();
            store.login(persona).await?;
            if let Err(e) = walk_to_confirmation(store).await {
                debug!("purchase walk failed for {persona}: {e:#}");
                bail!(WALK_FAILED);
            }
            capture_colors(store).await?
        };

        if persona == Persona::StandardUser {
            ctx.stash_baseline(COLOR_BASELINE, serde_json::to_value(&snapshot)?);
            return Ok(());
        }
        let baseline: ColorSnapshot = fetch_baseline(ctx, COLOR_BASELINE)?;
        ensure!(
            snapshot == baseline,
            "Colors do not match the standard_user baseline"
        );
        Ok(())
    })
}

fn font_consistency(
    ctx: &mut CaseCtx,
    persona: Option<Persona>,
) -> BoxFuture<'_, anyhow::Result<()>> {
    Box::pin(async move {
        let persona = bound_persona(persona)?;
        let samples = {
            let store = ctx.store();
            store.login(persona).await?;
            if let Err(e) = walk_to_confirmation(store).await {
                debug!("purchase walk failed for {persona}: {e:#}");
                bail!(WALK_FAILED);
            }
            match collect_fonts(store).await {
                Ok(samples) => samples,
                Err(e) => {
                    debug!("font sweep failed for {persona}: {e:#}");
                    bail!(WALK_FAILED);
                }
            }
        };

        if persona == Persona::StandardUser {
            ctx.stash_baseline(FONT_BASELINE, serde_json::to_value(&samples)?);
            return Ok(());
        }
        let baseline: Vec<FontSample> = fetch_baseline(ctx, FONT_BASELINE)?;
        let shared = samples.len().min(baseline.len());
        let mismatches = samples[..shared]
            .iter()
            .zip(&baseline[..shared])
            .filter(|(sample, expected)| sample != expected)
            .count();
        ensure!(
            mismatches == 0,
            "{mismatches} font mismatch(es) against the standard_user baseline"
        );
        Ok(())
    })
}

fn fetch_baseline<T: serde::de::DeserializeOwned>(ctx: &CaseCtx, key: &str) -> anyhow::Result<T> {
    let value = ctx
        .baseline(key)
        .with_context(|| format!("no standard_user baseline captured for {key}"))?;
    Ok(serde_json::from_value(value.clone())?)
}

/// Drive one full purchase; ends on the confirmation page with the
/// menu open, which is where the color sampling happens.
async fn walk_to_confirmation(store: &StoreSession) -> anyhow::Result<()> {
    store.cart().open().await?;
    store.cart().begin_checkout().await?;
    store.wait().url_contains("checkout-step-one.html").await?;
    store.checkout().fill_information("John", "Doe", "12345").await?;
    store.checkout().continue_to_overview().await?;
    store.checkout().finish().await?;
    store.menu().open().await?;
    Ok(())
}

async fn capture_colors(store: &StoreSession) -> anyhow::Result<ColorSnapshot> {
    Ok(ColorSnapshot {
        header_bg: first_css(store, &selectors::secondary_header(), "background-color").await?,
        footer_bg: first_css(store, &selectors::footer(), "background-color").await?,
        button_bg: first_css(store, &selectors::primary_buttons(), "background-color").await?,
        button_color: first_css(store, &selectors::primary_buttons(), "color").await?,
        title_color: first_css(store, &selectors::item_name(), "color").await?,
        description_color: first_css(store, &selectors::item_description(), "color").await?,
    })
}

async fn first_css(store: &StoreSession, by: &By, property: &str) -> anyhow::Result<Option<String>> {
    let elements = store.driver().find_all(by).await?;
    match elements.first() {
        Some(element) => Ok(Some(element.css_value(property).await?)),
        None => Ok(None),
    }
}

/// Sample every visible text node at six checkpoints along a second
/// pass over the purchase path, starting from wherever the first walk
/// ended.
async fn collect_fonts(store: &StoreSession) -> anyhow::Result<Vec<FontSample>> {
    let mut samples = page_fonts(store).await?;

    store.cart().open().await?;
    samples.extend(page_fonts(store).await?);

    store.cart().begin_checkout().await?;
    store.wait().url_contains("checkout-step-one.html").await?;
    samples.extend(page_fonts(store).await?);

    store.checkout().fill_information("John", "Doe", "12345").await?;
    store.checkout().continue_to_overview().await?;
    samples.extend(page_fonts(store).await?);

    store.checkout().finish().await?;
    samples.extend(page_fonts(store).await?);

    store.menu().open().await?;
    samples.extend(page_fonts(store).await?);

    Ok(samples)
}

async fn page_fonts(store: &StoreSession) -> anyhow::Result<Vec<FontSample>> {
    let elements = store.driver().find_all(&selectors::text_elements()).await?;
    let mut fonts = Vec::with_capacity(elements.len());
    for element in &elements {
        if element.text().await?.trim().is_empty() {
            continue;
        }
        fonts.push(FontSample {
            family: element.css_value("font-family").await?,
            size: element.css_value("font-size").await?,
        });
    }
    Ok(fonts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_user_seeds_each_baseline_before_the_comparisons() {
        let suite = suite();
        assert_eq!(suite.cases.len(), 10);
        // UUI_01 and UUI_06 stash the baselines the later cases read,
        // so they must come first in their halves
        assert_eq!(suite.cases[0].id, "UUI_01");
        assert_eq!(suite.cases[0].persona, Some(Persona::StandardUser));
        assert_eq!(suite.cases[5].id, "UUI_06");
        assert_eq!(suite.cases[5].persona, Some(Persona::StandardUser));
    }

    #[test]
    fn snapshots_round_trip_through_baseline_json() {
        let snapshot = ColorSnapshot {
            header_bg: Some("rgb(19, 35, 34)".into()),
            footer_bg: Some("rgb(19, 35, 34)".into()),
            button_bg: Some("rgb(61, 220, 145)".into()),
            button_color: Some("rgb(19, 35, 34)".into()),
            title_color: None,
            description_color: None,
        };
        let value = serde_json::to_value(&snapshot).expect("serialize");
        let back: ColorSnapshot = serde_json::from_value(value).expect("deserialize");
        assert_eq!(back, snapshot);
    }

    #[test]
    fn font_mismatch_count_uses_positional_comparison() {
        let a = FontSample { family: "Arial".into(), size: "14px".into() };
        let b = FontSample { family: "Courier".into(), size: "14px".into() };
        let samples = vec![a.clone(), b.clone(), a.clone()];
        let baseline = vec![a.clone(), a.clone()];
        let shared = samples.len().min(baseline.len());
        let mismatches = samples[..shared]
            .iter()
            .zip(&baseline[..shared])
            .filter(|(s, e)| s != e)
            .count();
        assert_eq!(mismatches, 1);
    }
}
