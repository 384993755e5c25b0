//! Product photos against the expected assets

use anyhow::bail;
use futures::future::BoxFuture;

use swagcheck_harness::{Case, CaseCtx, Category, SessionScope, Suite};
use swagcheck_store::{catalog, Persona};

use crate::bound_persona;

pub fn suite() -> Suite {
    Suite::new("UIImages", Category::Usability, SessionScope::Suite)
        .case(Case::for_persona(
            "UUI_16",
            "product photos match the catalog",
            Persona::StandardUser,
            product_images,
        ))
        .case(Case::for_persona(
            "UUI_17",
            "product photos match the catalog",
            Persona::ProblemUser,
            product_images,
        ))
        .case(Case::for_persona(
            "UUI_18",
            "product photos match the catalog",
            Persona::PerformanceGlitchUser,
            product_images,
        ))
        .case(Case::for_persona(
            "UUI_19",
            "product photos match the catalog",
            Persona::ErrorUser,
            product_images,
        ))
        .case(Case::for_persona(
            "UUI_20",
            "product photos match the catalog",
            Persona::VisualUser,
            product_images,
        ))
}

fn product_images(ctx: &mut CaseCtx, persona: Option<Persona>) -> BoxFuture<'_, anyhow::Result<()>> {
    Box::pin(async move {
        let persona = bound_persona(persona)?;
        let sources = {
            let store = ctx.store();
            store.login(persona).await?;
            store.inventory().image_sources().await?
        };

        let mut mismatched = Vec::new();
        for (name, src) in &sources {
            match catalog::product_by_name(name) {
                Some(spec) if src.as_str() == spec.image => {}
                Some(spec) => mismatched.push(format!(
                    "- {}: Actual='{}', Expected='{}'",
                    name, src, spec.image
                )),
                None => mismatched.push(format!(
                    "- {}: Actual='{}', Expected='N/A (Product name not in expected list)'",
                    name, src
                )),
            }
        }

        if mismatched.is_empty() {
            return Ok(());
        }
        for line in &mismatched {
            ctx.note(line.clone());
        }
        bail!(
            "Mismatched product images found for {} product(s)",
            mismatched.len()
        );
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_images_are_absolute_site_assets() {
        // the comparison is exact string equality on the img src, so
        // the expected values must be the full served URLs
        for product in catalog::PRODUCTS {
            assert!(
                product.image.starts_with("https://www.saucedemo.com/static/media/"),
                "{} image is not absolute",
                product.name
            );
        }
    }
}
