//! Suite and case model
//!
//! A suite is a named list of cases sharing one result file and one
//! session scope. Case bodies are plain async fns taking the case
//! context; parametrized suites pass the persona through the second
//! argument instead of capturing it, so bodies stay ordinary fn items.

use std::collections::HashMap;

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};

use swagcheck_store::{Persona, StoreSession};

use crate::config::HarnessConfig;

/// Result-file category, also the subdirectory the file lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Functionality,
    Usability,
    Performance,
    Security,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[
            Category::Functionality,
            Category::Usability,
            Category::Performance,
            Category::Security,
        ]
    }

    /// Directory name under the results root.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Functionality => "Functionality",
            Category::Usability => "Usability",
            Category::Performance => "Performance",
            Category::Security => "Security",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Browser session lifetime relative to the suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionScope {
    /// One session shared by every case in the suite.
    Suite,
    /// A fresh session per case, for suites that poison theirs.
    Case,
}

impl std::fmt::Display for SessionScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionScope::Suite => write!(f, "suite"),
            SessionScope::Case => write!(f, "case"),
        }
    }
}

/// Per-suite scratch the UI baseline cases stash snapshots in.
pub type Baselines = HashMap<String, serde_json::Value>;

/// Everything a case body gets to work with.
pub struct CaseCtx {
    store: StoreSession,
    config: HarnessConfig,
    baselines: Baselines,
    notes: Vec<String>,
    case_id: &'static str,
}

impl CaseCtx {
    pub fn new(store: StoreSession, config: HarnessConfig) -> Self {
        Self {
            store,
            config,
            baselines: Baselines::new(),
            notes: Vec::new(),
            case_id: "",
        }
    }

    pub fn store(&self) -> &StoreSession {
        &self.store
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Id of the case currently running, for bodies that label their
    /// own note blocks.
    pub fn case_id(&self) -> &'static str {
        self.case_id
    }

    pub(crate) fn set_case(&mut self, id: &'static str) {
        self.case_id = id;
    }

    /// Append an extra line to the suite's result file under this
    /// case's verdict line.
    pub fn note(&mut self, line: impl Into<String>) {
        self.notes.push(line.into());
    }

    /// Stash a baseline snapshot for later cases in the same suite.
    pub fn stash_baseline(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.baselines.insert(key.into(), value);
    }

    pub fn baseline(&self, key: &str) -> Option<&serde_json::Value> {
        self.baselines.get(key)
    }

    pub(crate) fn take_notes(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notes)
    }

    pub(crate) fn into_store(self) -> StoreSession {
        self.store
    }
}

/// Case body: an async fn over the context and optional persona.
pub type CaseFn =
    for<'a> fn(&'a mut CaseCtx, Option<Persona>) -> BoxFuture<'a, anyhow::Result<()>>;

/// One test case. The id is the stable key result lines carry.
pub struct Case {
    pub id: &'static str,
    pub summary: String,
    pub persona: Option<Persona>,
    body: CaseFn,
}

impl Case {
    pub fn new(id: &'static str, summary: impl Into<String>, body: CaseFn) -> Self {
        Self {
            id,
            summary: summary.into(),
            persona: None,
            body,
        }
    }

    /// A case parametrized by a persona; the summary is suffixed with
    /// the account name the way the result files reference them.
    pub fn for_persona(
        id: &'static str,
        summary: impl Into<String>,
        persona: Persona,
        body: CaseFn,
    ) -> Self {
        Self {
            id,
            summary: format!("{} ({})", summary.into(), persona),
            persona: Some(persona),
            body,
        }
    }

    pub async fn run(&self, ctx: &mut CaseCtx) -> anyhow::Result<()> {
        (self.body)(ctx, self.persona).await
    }
}

impl std::fmt::Debug for Case {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Case")
            .field("id", &self.id)
            .field("summary", &self.summary)
            .field("persona", &self.persona)
            .finish()
    }
}

/// A named group of cases writing to one result file.
#[derive(Debug)]
pub struct Suite {
    pub name: &'static str,
    pub category: Category,
    pub scope: SessionScope,
    pub tags: &'static [&'static str],
    pub cases: Vec<Case>,
}

impl Suite {
    pub fn new(name: &'static str, category: Category, scope: SessionScope) -> Self {
        Self {
            name,
            category,
            scope,
            tags: &[],
            cases: Vec::new(),
        }
    }

    pub fn with_tags(mut self, tags: &'static [&'static str]) -> Self {
        self.tags = tags;
        self
    }

    pub fn case(mut self, case: Case) -> Self {
        debug_assert!(
            !self.cases.iter().any(|c| c.id == case.id),
            "duplicate case id {}",
            case.id
        );
        self.cases.push(case);
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_ctx: &mut CaseCtx, _persona: Option<Persona>) -> BoxFuture<'_, anyhow::Result<()>> {
        Box::pin(async { Ok(()) })
    }

    #[test]
    fn persona_case_carries_the_account_in_its_summary() {
        let case = Case::for_persona("FL_02", "login lands on inventory", Persona::StandardUser, noop);
        assert_eq!(case.persona, Some(Persona::StandardUser));
        assert!(case.summary.contains("standard_user"));
    }

    #[test]
    fn suites_accumulate_cases_and_tags() {
        let suite = Suite::new("LoginLogout", Category::Functionality, SessionScope::Suite)
            .with_tags(&["smoke"])
            .case(Case::new("FL_01", "blank credentials", noop))
            .case(Case::new("FL_08", "invalid credentials", noop));

        assert_eq!(suite.cases.len(), 2);
        assert!(suite.has_tag("SMOKE"));
        assert!(!suite.has_tag("slow"));
    }

    #[test]
    fn category_directories_are_capitalized() {
        assert_eq!(Category::Functionality.as_str(), "Functionality");
        assert_eq!(Category::all().len(), 4);
    }
}
