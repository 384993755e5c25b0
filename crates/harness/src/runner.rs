//! Suite runner that orchestrates the driver process, browser
//! sessions, and result files
//!
//! Suites run sequentially against one driver process. A suite-scoped
//! suite shares one browser session across its cases; a case-scoped
//! suite opens a fresh session per case so cases that poison theirs
//! (lockout floods, dwell timeouts) cannot leak state forward.

use std::time::{Duration, Instant};

use tracing::{debug, error, info, warn};

use swagcheck_store::StoreSession;
use swagcheck_webdriver::{new_session_body, DriverConfig, DriverProcess, Session};

use crate::config::HarnessConfig;
use crate::error::{HarnessError, HarnessResult};
use crate::model::{Case, CaseCtx, Category, SessionScope, Suite};
use crate::report::{CaseRecord, ResultWriter, RunSummary, SuiteReport, Verdict};

/// Filters selecting which suites and cases a run executes.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Only suites in this category
    pub category: Option<Category>,

    /// Only the suite with this name
    pub suite: Option<String>,

    /// Only the case with this id
    pub case: Option<String>,

    /// Only suites carrying this tag
    pub tag: Option<String>,
}

/// Main suite runner
pub struct Runner {
    config: HarnessConfig,
    writer: ResultWriter,

    /// Spawned driver process (None when attached to an external one)
    driver: Option<DriverProcess>,

    /// WebDriver endpoint once the driver is up
    endpoint: Option<String>,
}

impl Runner {
    pub fn new(config: HarnessConfig) -> Self {
        let writer = ResultWriter::from_config(&config);
        Self {
            config,
            writer,
            driver: None,
            endpoint: None,
        }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// One plain GET against the storefront before any browser work,
    /// so an unreachable site fails the run up front instead of as a
    /// wall of per-case timeouts.
    pub async fn preflight(&self) -> HarnessResult<()> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        let url = &self.config.base_url;
        match client.get(url).send().await {
            Ok(resp) if resp.status().is_success() => {
                info!("Storefront reachable at {}", url);
                Ok(())
            }
            Ok(resp) => Err(HarnessError::Preflight {
                url: url.clone(),
                reason: format!("HTTP {}", resp.status()),
            }),
            Err(e) => Err(HarnessError::Preflight {
                url: url.clone(),
                reason: e.to_string(),
            }),
        }
    }

    /// Spawn the configured driver binary, or attach to an external
    /// endpoint when one is configured. Idempotent.
    pub async fn ensure_driver(&mut self) -> HarnessResult<String> {
        if let Some(endpoint) = &self.endpoint {
            return Ok(endpoint.clone());
        }

        let endpoint = match &self.config.driver.webdriver_url {
            Some(url) => {
                info!("Attaching to WebDriver endpoint at {}", url);
                url.trim_end_matches('/').to_string()
            }
            None => {
                let driver = DriverProcess::spawn(DriverConfig {
                    binary: self.config.driver.binary.clone(),
                    port: self.config.driver.port,
                    startup_timeout: self.config.driver_startup_timeout(),
                })
                .await?;
                let endpoint = driver.endpoint().to_string();
                self.driver = Some(driver);
                endpoint
            }
        };

        self.endpoint = Some(endpoint.clone());
        Ok(endpoint)
    }

    /// Stop the spawned driver process, if any.
    pub fn stop_driver(&mut self) {
        if let Some(mut driver) = self.driver.take() {
            let _ = driver.stop();
        }
        self.endpoint = None;
    }

    /// Run the selected suites and write the result files.
    pub async fn run(&mut self, suites: Vec<Suite>, options: &RunOptions) -> HarnessResult<RunSummary> {
        let start = Instant::now();
        let selected = select_suites(suites, options)?;

        self.preflight().await?;
        let endpoint = self.ensure_driver().await?;

        info!("Running {} suite(s) against {}", selected.len(), self.config.base_url);

        let mut summary = RunSummary::new(&self.config.base_url);
        for suite in &selected {
            let report = self.run_suite(suite, &endpoint, options).await?;
            summary.record(report);
        }
        summary.duration_ms = start.elapsed().as_millis() as u64;

        info!("");
        info!(
            "Results: {} passed, {} failed, {} errors ({} ms)",
            summary.passed, summary.failed, summary.errors, summary.duration_ms
        );

        self.writer.write_summary(&summary)?;
        Ok(summary)
    }

    /// Run one suite under its session scope. Case failures become
    /// Fail verdicts; a session that cannot open becomes Error
    /// verdicts for the cases it strands.
    async fn run_suite(
        &self,
        suite: &Suite,
        endpoint: &str,
        options: &RunOptions,
    ) -> HarnessResult<SuiteReport> {
        let start = Instant::now();
        let mut report = SuiteReport::new(suite.name, suite.category);

        let cases: Vec<&Case> = suite
            .cases
            .iter()
            .filter(|c| case_selected(c, options))
            .collect();
        if cases.is_empty() {
            return Ok(report);
        }

        info!("Suite {}: {} case(s), {} session", suite.name, cases.len(), suite.scope);

        match suite.scope {
            SessionScope::Suite => match self.open_ctx(endpoint).await {
                Ok(mut ctx) => {
                    for case in &cases {
                        let (record, notes) = self.run_case(case, &mut ctx).await;
                        self.writer.append_case(suite.category, suite.name, &record, &notes)?;
                        report.record(record);
                    }
                    self.close_ctx(ctx).await;
                }
                Err(e) => {
                    error!("✗ {} - session open failed: {}", suite.name, e);
                    for case in &cases {
                        let record = error_record(case, &e);
                        self.writer.append_case(suite.category, suite.name, &record, &[])?;
                        report.record(record);
                    }
                }
            },
            SessionScope::Case => {
                for case in &cases {
                    let (record, notes) = match self.open_ctx(endpoint).await {
                        Ok(mut ctx) => {
                            let outcome = self.run_case(case, &mut ctx).await;
                            self.close_ctx(ctx).await;
                            outcome
                        }
                        Err(e) => {
                            error!("✗ {} - session open failed: {}", case.id, e);
                            (error_record(case, &e), Vec::new())
                        }
                    };
                    self.writer.append_case(suite.category, suite.name, &record, &notes)?;
                    report.record(record);
                }
            }
        }

        report.duration_ms = start.elapsed().as_millis() as u64;
        Ok(report)
    }

    /// Run one case body and fold its outcome into a record.
    async fn run_case(&self, case: &Case, ctx: &mut CaseCtx) -> (CaseRecord, Vec<String>) {
        debug!("Running case: {}", case.id);
        ctx.set_case(case.id);
        let start = Instant::now();
        let outcome = case.run(ctx).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        let verdict = match outcome {
            Ok(()) => {
                info!("✓ {} ({} ms)", case.id, duration_ms);
                Verdict::Pass
            }
            Err(e) => {
                error!("✗ {} - {:#}", case.id, e);
                Verdict::Fail(format!("{:#}", e))
            }
        };

        let notes = ctx.take_notes();
        let record = CaseRecord {
            id: case.id.to_string(),
            summary: case.summary.clone(),
            verdict,
            duration_ms,
        };
        (record, notes)
    }

    /// Open a fresh browser session bound to the storefront.
    async fn open_ctx(&self, endpoint: &str) -> HarnessResult<CaseCtx> {
        let capabilities = new_session_body(self.config.driver.browser, self.config.driver.headless);
        let session = Session::new(endpoint, &capabilities).await?;
        let store = StoreSession::new(session, self.config.base_url.clone())
            .with_waits(self.config.element_timeout(), self.config.poll_interval());
        Ok(CaseCtx::new(store, self.config.clone()))
    }

    async fn close_ctx(&self, ctx: CaseCtx) {
        let store = ctx.into_store();
        let session_id = store.driver().id().to_string();
        if let Err(e) = store.close().await {
            warn!("Session {} close failed: {}", session_id, e);
        }
    }
}

impl Drop for Runner {
    fn drop(&mut self) {
        self.stop_driver();
    }
}

fn error_record(case: &Case, err: &HarnessError) -> CaseRecord {
    CaseRecord {
        id: case.id.to_string(),
        summary: case.summary.clone(),
        verdict: Verdict::Error(err.to_string()),
        duration_ms: 0,
    }
}

/// Apply the category/tag/name filters. Naming a suite that matches
/// nothing is an error; the other filters silently narrow.
fn select_suites(suites: Vec<Suite>, options: &RunOptions) -> HarnessResult<Vec<Suite>> {
    let selected: Vec<Suite> = suites
        .into_iter()
        .filter(|s| options.category.map_or(true, |c| s.category == c))
        .filter(|s| options.tag.as_deref().map_or(true, |t| s.has_tag(t)))
        .filter(|s| {
            options
                .suite
                .as_deref()
                .map_or(true, |n| s.name.eq_ignore_ascii_case(n))
        })
        .collect();

    if selected.is_empty() {
        if let Some(name) = &options.suite {
            return Err(HarnessError::UnknownSuite(name.clone()));
        }
    }
    Ok(selected)
}

fn case_selected(case: &Case, options: &RunOptions) -> bool {
    options
        .case
        .as_deref()
        .map_or(true, |id| case.id.eq_ignore_ascii_case(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::future::BoxFuture;
    use swagcheck_store::Persona;

    fn noop(_ctx: &mut CaseCtx, _persona: Option<Persona>) -> BoxFuture<'_, anyhow::Result<()>> {
        Box::pin(async { Ok(()) })
    }

    fn sample_suites() -> Vec<Suite> {
        vec![
            Suite::new("LoginLogout", Category::Functionality, SessionScope::Suite)
                .with_tags(&["smoke"])
                .case(Case::new("FL_01", "blank credentials", noop)),
            Suite::new("PageTiming", Category::Performance, SessionScope::Suite)
                .case(Case::new("PUP_01", "login page timing", noop)),
            Suite::new("AccountLockout", Category::Security, SessionScope::Case)
                .case(Case::new("SLS_01", "lockout probe", noop)),
        ]
    }

    #[test]
    fn category_filter_narrows_the_selection() {
        let options = RunOptions {
            category: Some(Category::Security),
            ..RunOptions::default()
        };
        let selected = select_suites(sample_suites(), &options).expect("select");
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "AccountLockout");
    }

    #[test]
    fn suite_names_match_case_insensitively() {
        let options = RunOptions {
            suite: Some("pagetiming".to_string()),
            ..RunOptions::default()
        };
        let selected = select_suites(sample_suites(), &options).expect("select");
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "PageTiming");
    }

    #[test]
    fn unknown_suite_name_is_an_error() {
        let options = RunOptions {
            suite: Some("NoSuchSuite".to_string()),
            ..RunOptions::default()
        };
        let err = select_suites(sample_suites(), &options).unwrap_err();
        assert!(matches!(err, HarnessError::UnknownSuite(name) if name == "NoSuchSuite"));
    }

    #[test]
    fn tag_filter_selects_tagged_suites_only() {
        let options = RunOptions {
            tag: Some("smoke".to_string()),
            ..RunOptions::default()
        };
        let selected = select_suites(sample_suites(), &options).expect("select");
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "LoginLogout");
    }

    #[test]
    fn case_filter_matches_ids_not_summaries() {
        let case = Case::new("FL_01", "blank credentials", noop);
        let options = RunOptions {
            case: Some("fl_01".to_string()),
            ..RunOptions::default()
        };
        assert!(case_selected(&case, &options));

        let options = RunOptions {
            case: Some("blank".to_string()),
            ..RunOptions::default()
        };
        assert!(!case_selected(&case, &options));
    }
}
