//! Report Command
//!
//! Walks the results directory and folds the verdict lines back into
//! per-suite counts. Note lines and blank separators are skipped by
//! the shared parser.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use walkdir::WalkDir;

use swagcheck_harness::{parse_result_line, HarnessConfig, Verdict};

use crate::output::{print_list, print_warning, OutputFormat, TableDisplay};

#[derive(Default)]
struct Tally {
    passed: usize,
    failed: usize,
    errors: usize,
}

/// Per-suite result-file display wrapper
#[derive(Serialize)]
struct ReportRow {
    category: String,
    suite: String,
    passed: usize,
    failed: usize,
    errors: usize,
    total: usize,
}

impl TableDisplay for ReportRow {
    fn headers() -> Vec<&'static str> {
        vec!["Category", "Suite", "Passed", "Failed", "Errors", "Total"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.category.clone(),
            self.suite.clone(),
            self.passed.to_string(),
            self.failed.to_string(),
            self.errors.to_string(),
            self.total.to_string(),
        ]
    }
}

pub fn execute(config: &HarnessConfig, format: OutputFormat) -> Result<()> {
    let rows = collect_rows(&config.results_dir)?;
    if rows.is_empty() {
        print_warning(&format!(
            "No result files under {}",
            config.results_dir.display()
        ));
        return Ok(());
    }

    print_list(&rows, format);

    // Totals only for the human-readable formats; a trailing line
    // would corrupt JSON consumers.
    if matches!(format, OutputFormat::Table | OutputFormat::Plain) {
        let passed: usize = rows.iter().map(|r| r.passed).sum();
        let failed: usize = rows.iter().map(|r| r.failed).sum();
        let errors: usize = rows.iter().map(|r| r.errors).sum();
        println!();
        println!(
            "{} passed, {} failed, {} errors",
            passed.to_string().green(),
            failed.to_string().red(),
            errors.to_string().yellow(),
        );
    }

    Ok(())
}

/// Fold every `<Category>/<Suite>.txt` under the directory into
/// per-suite verdict counts, sorted by category then suite.
fn collect_rows(results_dir: &Path) -> Result<Vec<ReportRow>> {
    let mut tallies: BTreeMap<(String, String), Tally> = BTreeMap::new();

    for entry in WalkDir::new(results_dir).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("txt") {
            continue;
        }
        let suite = match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem.to_string(),
            None => continue,
        };
        let category = path
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or("")
            .to_string();

        let content = std::fs::read_to_string(path)?;
        let tally = tallies.entry((category, suite)).or_default();
        for line in content.lines() {
            match parse_result_line(line) {
                Some((_, Verdict::Pass)) => tally.passed += 1,
                Some((_, Verdict::Fail(_))) => tally.failed += 1,
                Some((_, Verdict::Error(_))) => tally.errors += 1,
                None => {}
            }
        }
    }

    Ok(tallies
        .into_iter()
        .map(|((category, suite), tally)| ReportRow {
            total: tally.passed + tally.failed + tally.errors,
            category,
            suite,
            passed: tally.passed,
            failed: tally.failed,
            errors: tally.errors,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        fs::write(path, content).expect("write");
    }

    #[test]
    fn counts_verdict_lines_and_skips_notes() {
        let dir = tempfile::tempdir().expect("tempdir");
        write(
            dir.path(),
            "Functionality/LoginLogout.txt",
            "FL_01: Pass\nFL_03: Fail: Account Failed to Login\n",
        );
        write(
            dir.path(),
            "Usability/NavigationSidebar.txt",
            "UN_01: Pass\nAll Items: ✅ Present\n\nUN_02: Error: session gone\n",
        );

        let rows = collect_rows(dir.path()).expect("collect");
        assert_eq!(rows.len(), 2);

        let login = rows.iter().find(|r| r.suite == "LoginLogout").expect("row");
        assert_eq!(login.category, "Functionality");
        assert_eq!((login.passed, login.failed, login.errors), (1, 1, 0));

        let sidebar = rows
            .iter()
            .find(|r| r.suite == "NavigationSidebar")
            .expect("row");
        assert_eq!((sidebar.passed, sidebar.failed, sidebar.errors), (1, 0, 1));
        assert_eq!(sidebar.total, 2);
    }

    #[test]
    fn summary_json_is_not_counted() {
        let dir = tempfile::tempdir().expect("tempdir");
        write(dir.path(), "summary.json", "{}");
        write(dir.path(), "Security/AccountLockout.txt", "SLS_01: Pass\n");

        let rows = collect_rows(dir.path()).expect("collect");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].suite, "AccountLockout");
        assert_eq!(rows[0].category, "Security");
    }

    #[test]
    fn missing_directory_yields_no_rows() {
        let dir = tempfile::tempdir().expect("tempdir");
        let rows = collect_rows(&dir.path().join("absent")).expect("collect");
        assert!(rows.is_empty());
    }

    #[test]
    fn rows_sort_by_category_then_suite() {
        let dir = tempfile::tempdir().expect("tempdir");
        write(dir.path(), "Usability/UIImages.txt", "UUI_16: Pass\n");
        write(dir.path(), "Functionality/ShoppingCart.txt", "FSC_01: Pass\n");
        write(dir.path(), "Functionality/CheckoutProcess.txt", "FCP_01: Pass\n");

        let rows = collect_rows(dir.path()).expect("collect");
        let names: Vec<&str> = rows.iter().map(|r| r.suite.as_str()).collect();
        assert_eq!(names, ["CheckoutProcess", "ShoppingCart", "UIImages"]);
    }
}
