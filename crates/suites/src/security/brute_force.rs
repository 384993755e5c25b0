//! Credential sweep driven by username and password wordlists
//!
//! Not a registered suite: the `brute-force` CLI command drives this
//! engine directly with whatever lists the caller supplies.

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use tokio::time::sleep;
use tracing::{info, warn};

use swagcheck_store::StoreSession;

/// Outcome of one full wordlist sweep.
#[derive(Debug, Default)]
pub struct SweepReport {
    pub attempts: usize,
    pub hits: Vec<(String, String)>,
}

/// Read one candidate per line. Wordlists in the wild carry odd
/// encodings; undecodable bytes are replaced rather than fatal.
pub fn load_wordlist(path: &Path) -> anyhow::Result<Vec<String>> {
    let bytes =
        std::fs::read(path).with_context(|| format!("reading wordlist {}", path.display()))?;
    Ok(parse_wordlist(&bytes))
}

fn parse_wordlist(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::to_string)
        .collect()
}

/// Try every username/password pair against the login form.
/// `on_attempt` fires after each try so callers can render progress
/// and record hits as they land.
pub async fn sweep(
    store: &StoreSession,
    usernames: &[String],
    passwords: &[String],
    delay: Duration,
    mut on_attempt: impl FnMut(&str, &str, bool),
) -> anyhow::Result<SweepReport> {
    let mut report = SweepReport::default();
    for username in usernames {
        for password in passwords {
            report.attempts += 1;
            match attempt(store, username, password, delay).await {
                Ok(true) => {
                    info!("valid credentials: {username} / {password}");
                    report.hits.push((username.clone(), password.clone()));
                    on_attempt(username, password, true);
                }
                Ok(false) => on_attempt(username, password, false),
                // a flaky attempt should not sink the whole sweep
                Err(e) => warn!("attempt {username}/{password} errored: {e:#}"),
            }
        }
    }
    Ok(report)
}

async fn attempt(
    store: &StoreSession,
    username: &str,
    password: &str,
    delay: Duration,
) -> anyhow::Result<bool> {
    store.submit_login(username, password).await?;
    sleep(delay).await;
    let url = store.driver().current_url().await?;
    if url.contains("inventory.html") {
        // back to the form for the next pair
        store.open_login().await?;
        return Ok(true);
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wordlists_split_on_lines() {
        assert_eq!(parse_wordlist(b"admin\nroot\nsauce"), ["admin", "root", "sauce"]);
        assert_eq!(parse_wordlist(b"single\n"), ["single"]);
        assert!(parse_wordlist(b"").is_empty());
    }

    #[test]
    fn non_utf8_bytes_are_replaced_not_fatal() {
        // 0xE9 is latin-1 e-acute, common in leaked password dumps
        let lines = parse_wordlist(b"caf\xe9\npass");
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains('\u{FFFD}'));
        assert_eq!(lines[1], "pass");
    }

    #[test]
    fn missing_wordlist_reports_the_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent.txt");
        let err = load_wordlist(&path).expect_err("missing file");
        assert!(err.to_string().contains("absent.txt"));
    }

    #[test]
    fn wordlist_round_trips_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("users.txt");
        std::fs::write(&path, "standard_user\nadmin\n").expect("write");
        let lines = load_wordlist(&path).expect("load");
        assert_eq!(lines, ["standard_user", "admin"]);
    }
}
