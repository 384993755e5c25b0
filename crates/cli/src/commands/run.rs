//! Run Command
//!
//! Executes the selected suites through the harness runner and prints
//! a per-suite table. Exits non-zero when any case failed or errored.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;

use swagcheck_harness::{Category, HarnessConfig, RunOptions, Runner, SuiteReport};
use swagcheck_suites::all_suites;
use swagcheck_webdriver::BrowserKind;

use crate::output::{print_error, print_list, print_success, OutputFormat, TableDisplay};

#[derive(Args, Default)]
pub struct RunArgs {
    /// Only suites in this category
    #[arg(long, value_enum)]
    pub category: Option<CategoryArg>,

    /// Only the suite with this name
    #[arg(long)]
    pub suite: Option<String>,

    /// Only the case with this id
    #[arg(long)]
    pub case: Option<String>,

    /// Only suites carrying this tag
    #[arg(long)]
    pub tag: Option<String>,

    /// Browser to drive
    #[arg(long, value_enum)]
    pub browser: Option<BrowserArg>,

    /// Show the browser window
    #[arg(long)]
    pub headed: bool,

    /// WebDriver binary to spawn
    #[arg(long)]
    pub driver_path: Option<PathBuf>,

    /// Fixed driver port instead of a free one
    #[arg(long)]
    pub driver_port: Option<u16>,

    /// Attach to a running WebDriver endpoint instead of spawning one
    #[arg(long)]
    pub webdriver_url: Option<String>,

    /// Idle dwell for the session-timeout suite, in seconds
    #[arg(long)]
    pub session_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    Functionality,
    Usability,
    Performance,
    Security,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Functionality => Category::Functionality,
            CategoryArg::Usability => Category::Usability,
            CategoryArg::Performance => Category::Performance,
            CategoryArg::Security => Category::Security,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum BrowserArg {
    Firefox,
    Chrome,
}

impl From<BrowserArg> for BrowserKind {
    fn from(arg: BrowserArg) -> Self {
        match arg {
            BrowserArg::Firefox => BrowserKind::Firefox,
            BrowserArg::Chrome => BrowserKind::Chrome,
        }
    }
}

/// Per-suite result display wrapper
#[derive(Serialize)]
struct SuiteRow {
    suite: String,
    category: String,
    passed: usize,
    failed: usize,
    errors: usize,
    duration_ms: u64,
}

impl From<&SuiteReport> for SuiteRow {
    fn from(report: &SuiteReport) -> Self {
        Self {
            suite: report.suite.clone(),
            category: report.category.to_string(),
            passed: report.passed,
            failed: report.failed,
            errors: report.errors,
            duration_ms: report.duration_ms,
        }
    }
}

impl TableDisplay for SuiteRow {
    fn headers() -> Vec<&'static str> {
        vec!["Suite", "Category", "Passed", "Failed", "Errors", "Duration"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.suite.clone(),
            self.category.clone(),
            self.passed.to_string(),
            self.failed.to_string(),
            self.errors.to_string(),
            format!("{}ms", self.duration_ms),
        ]
    }
}

pub async fn execute(args: RunArgs, config: HarnessConfig, format: OutputFormat) -> Result<()> {
    let options = RunOptions {
        category: args.category.map(Category::from),
        suite: args.suite.clone(),
        case: args.case.clone(),
        tag: args.tag.clone(),
    };
    let config = apply_overrides(config, &args);
    let results_dir = config.results_dir.clone();

    // Scope the runner so the driver process is torn down before the
    // exit path below.
    let summary = {
        let mut runner = Runner::new(config);
        runner.run(all_suites(), &options).await?
    };

    let rows: Vec<SuiteRow> = summary
        .suites
        .iter()
        .filter(|s| s.total > 0)
        .map(SuiteRow::from)
        .collect();
    print_list(&rows, format);

    if summary.all_passed() {
        print_success(&format!(
            "{} case(s) passed in {} ms",
            summary.passed, summary.duration_ms
        ));
    } else {
        print_error(&format!(
            "{} of {} case(s) did not pass (results under {})",
            summary.failed + summary.errors,
            summary.total,
            results_dir.display()
        ));
        std::process::exit(1);
    }

    Ok(())
}

/// Fold the command-line driver flags into the loaded configuration.
fn apply_overrides(mut config: HarnessConfig, args: &RunArgs) -> HarnessConfig {
    if let Some(browser) = args.browser {
        config.driver.browser = browser.into();
    }
    if args.headed {
        config.driver.headless = false;
    }
    if let Some(binary) = &args.driver_path {
        config.driver.binary = binary.clone();
    }
    if let Some(port) = args.driver_port {
        config.driver.port = Some(port);
    }
    if let Some(url) = &args.webdriver_url {
        config.driver.webdriver_url = Some(url.clone());
    }
    if let Some(secs) = args.session_timeout_secs {
        config.security.session_timeout_secs = secs;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headed_flag_turns_headless_off() {
        let args = RunArgs {
            headed: true,
            browser: Some(BrowserArg::Chrome),
            ..RunArgs::default()
        };
        let config = apply_overrides(HarnessConfig::default(), &args);
        assert!(!config.driver.headless);
        assert_eq!(config.driver.browser, BrowserKind::Chrome);
    }

    #[test]
    fn defaults_pass_through_untouched() {
        let config = apply_overrides(HarnessConfig::default(), &RunArgs::default());
        let defaults = HarnessConfig::default();
        assert!(config.driver.headless);
        assert_eq!(config.driver.browser, defaults.driver.browser);
        assert_eq!(config.driver.binary, defaults.driver.binary);
        assert_eq!(
            config.security.session_timeout_secs,
            defaults.security.session_timeout_secs
        );
    }

    #[test]
    fn driver_endpoint_and_dwell_overrides_land_in_the_config() {
        let args = RunArgs {
            webdriver_url: Some("http://127.0.0.1:4444".to_string()),
            driver_port: Some(4445),
            session_timeout_secs: Some(60),
            ..RunArgs::default()
        };
        let config = apply_overrides(HarnessConfig::default(), &args);
        assert_eq!(
            config.driver.webdriver_url.as_deref(),
            Some("http://127.0.0.1:4444")
        );
        assert_eq!(config.driver.port, Some(4445));
        assert_eq!(config.security.session_timeout_secs, 60);
    }
}
