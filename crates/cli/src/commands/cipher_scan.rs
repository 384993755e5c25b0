//! Cipher-Scan Command
//!
//! Runs nmap's ssl-enum-ciphers script against the storefront host
//! and writes the annotated report to the CipherEnum result file.

use anyhow::Result;
use clap::Args;
use tracing::info;

use swagcheck_harness::HarnessConfig;
use swagcheck_suites::security::cipher_scan::{analyze, render_report, run_scan};

use crate::output::{print_success, print_warning};

#[derive(Args)]
pub struct CipherScanArgs {
    /// Host to scan on port 443
    #[arg(long, default_value = "www.saucedemo.com")]
    pub target: String,
}

pub async fn execute(args: CipherScanArgs, config: &HarnessConfig) -> Result<()> {
    info!("Enumerating TLS ciphers on {}", args.target);

    let scan = run_scan(&args.target).await?;
    let findings = analyze(&scan);
    let report = render_report(&args.target, &scan, &findings);

    let path = config.results_dir.join("Security").join("CipherEnum.txt");
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, &report)?;

    print!("{report}");
    if findings.is_empty() {
        print_success(&format!(
            "No critical vulnerabilities; report written to {}",
            path.display()
        ));
    } else {
        print_warning(&format!(
            "{} finding(s); report written to {}",
            findings.len(),
            path.display()
        ));
    }

    Ok(())
}
