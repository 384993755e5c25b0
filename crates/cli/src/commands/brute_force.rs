//! Brute-Force Command
//!
//! Sweeps every username/password pair from two wordlists against the
//! login form and appends the hits to the BruteForceLogin result file.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{ensure, Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{info, warn};

use swagcheck_harness::HarnessConfig;
use swagcheck_store::StoreSession;
use swagcheck_suites::security::brute_force::{load_wordlist, sweep};
use swagcheck_webdriver::{new_session_body, DriverConfig, DriverProcess, Session};

use crate::output::{print_list, print_success, print_warning, OutputFormat, TableDisplay};

#[derive(Args)]
pub struct BruteForceArgs {
    /// Username list, one entry per line
    #[arg(long)]
    pub userlist: PathBuf,

    /// Password list, one entry per line
    #[arg(long)]
    pub wordlist: PathBuf,

    /// Attach to a running WebDriver endpoint instead of spawning one
    #[arg(long)]
    pub webdriver_url: Option<String>,
}

/// Valid credential display wrapper
#[derive(Serialize)]
struct HitRow {
    username: String,
    password: String,
}

impl TableDisplay for HitRow {
    fn headers() -> Vec<&'static str> {
        vec!["Username", "Password"]
    }

    fn row(&self) -> Vec<String> {
        vec![self.username.clone(), self.password.clone()]
    }
}

pub async fn execute(
    args: BruteForceArgs,
    mut config: HarnessConfig,
    format: OutputFormat,
) -> Result<()> {
    if let Some(url) = args.webdriver_url {
        config.driver.webdriver_url = Some(url);
    }

    let usernames = load_wordlist(&args.userlist)?;
    let passwords = load_wordlist(&args.wordlist)?;
    ensure!(
        !usernames.is_empty(),
        "username list {} is empty",
        args.userlist.display()
    );
    ensure!(
        !passwords.is_empty(),
        "password list {} is empty",
        args.wordlist.display()
    );

    let total = usernames.len() * passwords.len();
    info!("Sweeping {} credential pair(s) against {}", total, config.base_url);

    let mut driver = None;
    let endpoint = match &config.driver.webdriver_url {
        Some(url) => url.trim_end_matches('/').to_string(),
        None => {
            let process = DriverProcess::spawn(DriverConfig {
                binary: config.driver.binary.clone(),
                port: config.driver.port,
                startup_timeout: config.driver_startup_timeout(),
            })
            .await?;
            let endpoint = process.endpoint().to_string();
            driver = Some(process);
            endpoint
        }
    };

    let capabilities = new_session_body(config.driver.browser, config.driver.headless);
    let session = Session::new(&endpoint, &capabilities).await?;
    let store = StoreSession::new(session, config.base_url.clone())
        .with_waits(config.element_timeout(), config.poll_interval());

    let bar = ProgressBar::new(total as u64);
    bar.set_style(ProgressStyle::with_template(
        "{bar:40.cyan/blue} {pos}/{len} {msg}",
    )?);

    let delay = Duration::from_millis(config.security.brute_force_delay_ms);
    let outcome = sweep(&store, &usernames, &passwords, delay, |username, password, hit| {
        bar.inc(1);
        if hit {
            bar.println(format!("[SUCCESS] Username: {username} | Password: {password}"));
        } else {
            bar.set_message(format!("{username}/{password}"));
        }
    })
    .await;
    bar.finish_and_clear();

    // Tear the session down even when the sweep errored.
    if let Err(e) = store.close().await {
        warn!("Session close failed: {e}");
    }
    if let Some(mut process) = driver {
        let _ = process.stop();
    }
    let report = outcome?;

    let path = config.results_dir.join("Security").join("BruteForceLogin.txt");
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening {}", path.display()))?;
    for (username, password) in &report.hits {
        writeln!(file, "[SUCCESS] Username: {username} | Password: {password}")?;
    }

    if report.hits.is_empty() {
        print_warning(&format!(
            "No valid credentials in {} attempt(s)",
            report.attempts
        ));
        return Ok(());
    }

    let rows: Vec<HitRow> = report
        .hits
        .iter()
        .map(|(username, password)| HitRow {
            username: username.clone(),
            password: password.clone(),
        })
        .collect();
    print_list(&rows, format);
    print_success(&format!(
        "{} valid credential(s) appended to {}",
        rows.len(),
        path.display()
    ));

    Ok(())
}
