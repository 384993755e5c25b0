//! TLS cipher survey of the storefront host
//!
//! Wraps nmap's `ssl-enum-ciphers` script and grades its transcript
//! against the known-weak configurations. Not a registered suite; the
//! `cipher-scan` CLI command drives it.

use anyhow::{ensure, Context};
use regex::Regex;
use tokio::process::Command;
use tracing::info;

/// Grade a scan transcript against the known-weak configurations.
pub fn analyze(scan_output: &str) -> Vec<&'static str> {
    let mut findings = Vec::new();

    if scan_output.contains("SSLv2") || scan_output.contains("SSLv3") {
        findings.push(
            "**Outdated SSL/TLS Version (SSLv2 or SSLv3)** - Vulnerable to POODLE attack.",
        );
    }
    if scan_output.contains("RC4") {
        findings.push("**RC4 Cipher Detected** - Vulnerable to BEAST attack.");
    }
    if scan_output.contains("3DES") || scan_output.contains("DES-CBC3") {
        findings.push("**3DES Cipher Detected** - Vulnerable to SWEET32 attack.");
    }

    let cbc = Regex::new(r"AES_.*_CBC").unwrap();
    if scan_output.contains("TLSv1.0") && cbc.is_match(scan_output) {
        findings.push("**CBC Cipher with TLS 1.0 Detected** - Vulnerable to BEAST attack.");
    }
    if cbc.is_match(scan_output) {
        findings
            .push("**CBC-mode Cipher Detected** - Potentially Vulnerable to Lucky Thirteen attack.");
    }
    // ECDHE contains DHE, so one substring test covers both suites
    if !scan_output.contains("DHE") && !scan_output.contains("ECDHE") {
        findings.push("**No Perfect Forward Secrecy (PFS)** - Vulnerable to key reuse attacks.");
    }

    findings
}

/// Run nmap's cipher enumeration against `target`, port 443.
pub async fn run_scan(target: &str) -> anyhow::Result<String> {
    info!("running nmap ssl-enum-ciphers against {target}");
    let output = Command::new("nmap")
        .args(["--script", "ssl-enum-ciphers", "-p", "443", target])
        .output()
        .await
        .context("failed to launch nmap (is it installed?)")?;
    ensure!(
        output.status.success(),
        "nmap exited with {}: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr).trim()
    );
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Scan transcript plus the weak-cipher verdict block.
pub fn render_report(target: &str, scan_output: &str, findings: &[&str]) -> String {
    let mut report = format!("SSL cipher scan for {target}\n\n{}\n\n", scan_output.trim_end());
    if findings.is_empty() {
        report.push_str("No critical vulnerabilities detected!\n");
    } else {
        report.push_str("**Vulnerabilities Found:**\n");
        for finding in findings {
            report.push_str(finding);
            report.push('\n');
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEALTHY: &str = "\
443/tcp open  https
| ssl-enum-ciphers:
|   TLSv1.2:
|     ciphers:
|       TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256 (secp256r1) - A
|       TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256 (x25519) - A
|_  least strength: A
";

    #[test]
    fn healthy_scan_yields_no_findings() {
        assert!(analyze(HEALTHY).is_empty());
    }

    #[test]
    fn rc4_and_sslv3_are_flagged() {
        let output = "SSLv3:\n  TLS_RSA_WITH_RC4_128_SHA - C\n  TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256 - A";
        let findings = analyze(output);
        assert!(findings.iter().any(|f| f.contains("POODLE")));
        assert!(findings.iter().any(|f| f.contains("RC4")));
    }

    #[test]
    fn triple_des_is_flagged_for_sweet32() {
        let output = "TLSv1.2:\n  TLS_ECDHE_RSA_WITH_3DES_EDE_CBC_SHA - C";
        let findings = analyze(output);
        assert!(findings.iter().any(|f| f.contains("SWEET32")));
    }

    #[test]
    fn cbc_with_old_tls_gets_both_cbc_findings() {
        let output = "TLSv1.0:\n  TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA - C";
        let findings = analyze(output);
        assert!(findings.iter().any(|f| f.contains("BEAST")));
        assert!(findings.iter().any(|f| f.contains("Lucky Thirteen")));
    }

    #[test]
    fn cbc_on_modern_tls_only_warns_for_lucky_thirteen() {
        let output = "TLSv1.2:\n  TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA384 - A";
        let findings = analyze(output);
        assert!(findings.iter().any(|f| f.contains("Lucky Thirteen")));
        assert!(!findings.iter().any(|f| f.contains("BEAST")));
    }

    #[test]
    fn static_key_exchange_loses_forward_secrecy() {
        let output = "TLSv1.2:\n  TLS_RSA_WITH_AES_128_GCM_SHA256 - A";
        let findings = analyze(output);
        assert!(findings
            .iter()
            .any(|f| f.contains("Perfect Forward Secrecy")));
    }

    #[test]
    fn report_renders_the_clean_verdict() {
        let report = render_report("www.saucedemo.com", HEALTHY, &[]);
        assert!(report.starts_with("SSL cipher scan for www.saucedemo.com"));
        assert!(report.contains("No critical vulnerabilities detected!"));
    }

    #[test]
    fn report_lists_findings_under_the_header() {
        let findings = analyze("SSLv3: TLS_RSA_WITH_RC4_128_SHA");
        let report = render_report("host", "SSLv3: TLS_RSA_WITH_RC4_128_SHA", &findings);
        assert!(report.contains("**Vulnerabilities Found:**"));
        assert!(report.contains("POODLE"));
    }
}
