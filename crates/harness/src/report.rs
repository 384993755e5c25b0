//! Result records and the per-suite result files
//!
//! The textual contract is one line per case, appended in execution
//! order:
//!
//! ```text
//! <test_id>: Pass
//! <test_id>: Fail: <message>
//! ```
//!
//! Cases may attach note lines (check-lists, step timings, `Details:`
//! blocks); those follow the verdict line and end with a blank line.
//! `summary.json` carries the same data machine-readably.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::HarnessConfig;
use crate::error::HarnessResult;
use crate::model::Category;

/// Outcome of one case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Pass,
    Fail(String),
    Error(String),
}

impl Verdict {
    /// The part after `<id>: ` on the result line.
    pub fn result_text(&self) -> String {
        match self {
            Verdict::Pass => "Pass".to_string(),
            Verdict::Fail(reason) => format!("Fail: {}", reason),
            Verdict::Error(reason) => format!("Error: {}", reason),
        }
    }
}

/// One executed case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseRecord {
    pub id: String,
    pub summary: String,
    pub verdict: Verdict,
    pub duration_ms: u64,
}

/// Aggregated outcome of one suite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    pub suite: String,
    pub category: Category,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    pub duration_ms: u64,
    pub cases: Vec<CaseRecord>,
}

impl SuiteReport {
    pub fn new(suite: &str, category: Category) -> Self {
        Self {
            suite: suite.to_string(),
            category,
            total: 0,
            passed: 0,
            failed: 0,
            errors: 0,
            duration_ms: 0,
            cases: Vec::new(),
        }
    }

    pub fn record(&mut self, case: CaseRecord) {
        self.total += 1;
        match &case.verdict {
            Verdict::Pass => self.passed += 1,
            Verdict::Fail(_) => self.failed += 1,
            Verdict::Error(_) => self.errors += 1,
        }
        self.cases.push(case);
    }
}

/// Outcome of a whole run, written to `summary.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub run_id: String,
    pub started_at: String,
    pub base_url: String,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    pub duration_ms: u64,
    pub suites: Vec<SuiteReport>,
}

impl RunSummary {
    pub fn new(base_url: &str) -> Self {
        Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            started_at: chrono::Utc::now().to_rfc3339(),
            base_url: base_url.to_string(),
            total: 0,
            passed: 0,
            failed: 0,
            errors: 0,
            duration_ms: 0,
            suites: Vec::new(),
        }
    }

    pub fn record(&mut self, suite: SuiteReport) {
        self.total += suite.total;
        self.passed += suite.passed;
        self.failed += suite.failed;
        self.errors += suite.errors;
        self.suites.push(suite);
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.errors == 0
    }
}

/// Appends result lines to `<results_dir>/<Category>/<Suite>.txt`.
pub struct ResultWriter {
    results_dir: PathBuf,
}

impl ResultWriter {
    pub fn new(results_dir: impl Into<PathBuf>) -> Self {
        Self {
            results_dir: results_dir.into(),
        }
    }

    pub fn from_config(config: &HarnessConfig) -> Self {
        Self::new(&config.results_dir)
    }

    pub fn suite_path(&self, category: Category, suite: &str) -> PathBuf {
        self.results_dir
            .join(category.as_str())
            .join(format!("{}.txt", suite))
    }

    /// Append one case block: the verdict line, then any note lines,
    /// then a blank separator when notes were attached.
    pub fn append_case(
        &self,
        category: Category,
        suite: &str,
        record: &CaseRecord,
        notes: &[String],
    ) -> HarnessResult<()> {
        let path = self.suite_path(category, suite);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut block = format!("{}: {}\n", record.id, record.verdict.result_text());
        for note in notes {
            block.push_str(note);
            block.push('\n');
        }
        if !notes.is_empty() {
            block.push('\n');
        }

        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.write_all(block.as_bytes())?;
        Ok(())
    }

    /// Write the machine-readable run summary.
    pub fn write_summary(&self, summary: &RunSummary) -> HarnessResult<PathBuf> {
        std::fs::create_dir_all(&self.results_dir)?;

        let path = self.results_dir.join("summary.json");
        let json = serde_json::to_string_pretty(summary)?;
        std::fs::write(&path, json)?;

        info!("Summary written to: {}", path.display());
        Ok(path)
    }
}

/// Parse a verdict line back into `(id, verdict)`. Note lines and
/// blank separators return `None`.
pub fn parse_result_line(line: &str) -> Option<(String, Verdict)> {
    let (id, rest) = line.split_once(": ")?;
    if id.is_empty() || id.contains(' ') {
        return None;
    }
    let verdict = if rest == "Pass" {
        Verdict::Pass
    } else if let Some(reason) = rest.strip_prefix("Fail: ") {
        Verdict::Fail(reason.to_string())
    } else if let Some(reason) = rest.strip_prefix("Error: ") {
        Verdict::Error(reason.to_string())
    } else {
        return None;
    };
    Some((id.to_string(), verdict))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn record(id: &str, verdict: Verdict) -> CaseRecord {
        CaseRecord {
            id: id.to_string(),
            summary: String::new(),
            verdict,
            duration_ms: 7,
        }
    }

    #[test]
    fn appends_one_line_per_case() {
        let dir = tempfile::tempdir().expect("tempdir");
        let writer = ResultWriter::new(dir.path());

        writer
            .append_case(Category::Functionality, "LoginLogout", &record("FL_01", Verdict::Pass), &[])
            .expect("append");
        writer
            .append_case(
                Category::Functionality,
                "LoginLogout",
                &record("FL_03", Verdict::Fail("Account Failed to Login".to_string())),
                &[],
            )
            .expect("append");

        let path = writer.suite_path(Category::Functionality, "LoginLogout");
        let content = std::fs::read_to_string(path).expect("read");
        assert_eq!(
            content,
            "FL_01: Pass\nFL_03: Fail: Account Failed to Login\n"
        );
    }

    #[test]
    fn notes_follow_the_verdict_line_with_a_separator() {
        let dir = tempfile::tempdir().expect("tempdir");
        let writer = ResultWriter::new(dir.path());

        let notes = vec!["Details:".to_string(), "step 12 missing banner".to_string()];
        writer
            .append_case(
                Category::Security,
                "AccountLockout",
                &record("SLS_01", Verdict::Fail("no lockout".to_string())),
                &notes,
            )
            .expect("append");

        let content = std::fs::read_to_string(
            writer.suite_path(Category::Security, "AccountLockout"),
        )
        .expect("read");
        assert_eq!(
            content,
            "SLS_01: Fail: no lockout\nDetails:\nstep 12 missing banner\n\n"
        );
    }

    #[test]
    fn summary_counts_add_up() {
        let mut suite = SuiteReport::new("ShoppingCart", Category::Functionality);
        suite.record(record("FSC_01", Verdict::Pass));
        suite.record(record("FSC_02", Verdict::Fail("badge".to_string())));
        suite.record(record("FSC_03", Verdict::Error("session".to_string())));

        let mut summary = RunSummary::new("https://www.saucedemo.com/");
        summary.record(suite);

        assert_eq!(summary.total, 3);
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.errors, 1);
        assert!(!summary.all_passed());
        assert_eq!(summary.total, summary.passed + summary.failed + summary.errors);
    }

    #[test]
    fn summary_json_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let writer = ResultWriter::new(dir.path());

        let mut summary = RunSummary::new("https://www.saucedemo.com/");
        let mut suite = SuiteReport::new("LoginLogout", Category::Functionality);
        suite.record(record("FL_01", Verdict::Pass));
        summary.record(suite);

        let path = writer.write_summary(&summary).expect("write");
        let loaded: RunSummary =
            serde_json::from_str(&std::fs::read_to_string(path).expect("read")).expect("parse");
        assert_eq!(loaded.total, 1);
        assert_eq!(loaded.run_id, summary.run_id);
    }

    #[test_case("FL_01: Pass", Some(("FL_01", Verdict::Pass)) ; "pass line")]
    #[test_case("FL_03: Fail: Account Failed to Login", Some(("FL_03", Verdict::Fail("Account Failed to Login".into()))) ; "fail line")]
    #[test_case("SSM_01: Error: driver gone", Some(("SSM_01", Verdict::Error("driver gone".into()))) ; "error line")]
    #[test_case("UN_01: All Items: present", None ; "note line")]
    #[test_case("", None ; "blank separator")]
    #[test_case("Details:", None ; "details header")]
    fn result_line_parsing(line: &str, expected: Option<(&str, Verdict)>) {
        let parsed = parse_result_line(line);
        assert_eq!(
            parsed,
            expected.map(|(id, verdict)| (id.to_string(), verdict))
        );
    }
}
