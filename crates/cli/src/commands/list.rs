//! List Command

use anyhow::{bail, Result};
use clap::Args;
use serde::Serialize;

use swagcheck_suites::all_suites;

use crate::output::{print_list, OutputFormat, TableDisplay};

#[derive(Args)]
pub struct ListArgs {
    /// Show the cases of one suite instead of the suite table
    #[arg(long)]
    pub suite: Option<String>,
}

/// Suite catalog display wrapper
#[derive(Serialize)]
struct SuiteRow {
    suite: String,
    category: String,
    scope: String,
    cases: usize,
    tags: String,
}

impl TableDisplay for SuiteRow {
    fn headers() -> Vec<&'static str> {
        vec!["Suite", "Category", "Scope", "Cases", "Tags"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.suite.clone(),
            self.category.clone(),
            self.scope.clone(),
            self.cases.to_string(),
            self.tags.clone(),
        ]
    }
}

/// Case display wrapper
#[derive(Serialize)]
struct CaseRow {
    id: String,
    summary: String,
    persona: String,
}

impl TableDisplay for CaseRow {
    fn headers() -> Vec<&'static str> {
        vec!["Id", "Summary", "Persona"]
    }

    fn row(&self) -> Vec<String> {
        vec![self.id.clone(), self.summary.clone(), self.persona.clone()]
    }
}

pub fn execute(args: ListArgs, format: OutputFormat) -> Result<()> {
    let suites = all_suites();

    match args.suite {
        Some(name) => {
            let Some(suite) = suites.iter().find(|s| s.name.eq_ignore_ascii_case(&name)) else {
                bail!("no suite named '{}' (try `swagcheck list`)", name);
            };

            let rows: Vec<CaseRow> = suite
                .cases
                .iter()
                .map(|case| CaseRow {
                    id: case.id.to_string(),
                    summary: case.summary.clone(),
                    persona: case
                        .persona
                        .map(|p| p.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                })
                .collect();
            print_list(&rows, format);
        }
        None => {
            let rows: Vec<SuiteRow> = suites
                .iter()
                .map(|suite| SuiteRow {
                    suite: suite.name.to_string(),
                    category: suite.category.to_string(),
                    scope: suite.scope.to_string(),
                    cases: suite.cases.len(),
                    tags: if suite.tags.is_empty() {
                        "-".to_string()
                    } else {
                        suite.tags.join(", ")
                    },
                })
                .collect();
            print_list(&rows, format);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_suite_is_an_error() {
        let args = ListArgs {
            suite: Some("NoSuchSuite".to_string()),
        };
        let err = execute(args, OutputFormat::Plain).unwrap_err();
        assert!(err.to_string().contains("NoSuchSuite"));
    }

    #[test]
    fn suite_lookup_ignores_case() {
        let args = ListArgs {
            suite: Some("loginlogout".to_string()),
        };
        execute(args, OutputFormat::Plain).expect("known suite");
    }
}
