//! Sidebar link presence per account
//!
//! Each case writes a per-link checklist to the result file so the
//! report shows what was there, not only that something was missing.

use anyhow::ensure;
use futures::future::BoxFuture;

use swagcheck_harness::{Case, CaseCtx, Category, SessionScope, Suite};
use swagcheck_store::{catalog, Persona};

use crate::bound_persona;

pub fn suite() -> Suite {
    Suite::new("NavigationSidebar", Category::Usability, SessionScope::Suite)
        .case(Case::for_persona(
            "UN_01",
            "burger menu lists the expected links",
            Persona::StandardUser,
            sidebar_links,
        ))
        .case(Case::for_persona(
            "UN_02",
            "burger menu lists the expected links",
            Persona::ProblemUser,
            sidebar_links,
        ))
        .case(Case::for_persona(
            "UN_03",
            "burger menu lists the expected links",
            Persona::PerformanceGlitchUser,
            sidebar_links,
        ))
        .case(Case::for_persona(
            "UN_04",
            "burger menu lists the expected links",
            Persona::ErrorUser,
            sidebar_links,
        ))
        .case(Case::for_persona(
            "UN_05",
            "burger menu lists the expected links",
            Persona::VisualUser,
            sidebar_links,
        ))
}

fn sidebar_links(ctx: &mut CaseCtx, persona: Option<Persona>) -> BoxFuture<'_, anyhow::Result<()>> {
    Box::pin(async move {
        let persona = bound_persona(persona)?;
        let labels = {
            let store = ctx.store();
            store.login(persona).await?;
            store.menu().open().await?;
            store.menu().link_labels().await?
        };

        let mut missing = 0;
        for link in catalog::SIDEBAR_LINKS {
            if labels.iter().any(|label| label.trim() == *link) {
                ctx.note(format!("{link}: ✅ Present"));
            } else {
                missing += 1;
                ctx.note(format!("{link}: ❌ Missing"));
            }
        }
        ensure!(missing == 0, "{missing} sidebar link(s) missing");
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_case_per_active_account() {
        let suite = suite();
        assert_eq!(suite.cases.len(), Persona::active().len());
        assert_eq!(suite.category, Category::Usability);
    }
}
