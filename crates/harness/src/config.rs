//! Harness configuration

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use swagcheck_webdriver::BrowserKind;

/// Harness configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Storefront under test
    pub base_url: String,

    /// Directory for per-suite result files and summary.json
    pub results_dir: PathBuf,

    /// Driver process configuration
    pub driver: DriverSettings,

    /// DOM wait tuning
    pub waits: WaitSettings,

    /// Performance suite thresholds
    pub performance: PerformanceSettings,

    /// Security suite parameters
    pub security: SecuritySettings,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.saucedemo.com/".to_string(),
            results_dir: PathBuf::from("results"),
            driver: DriverSettings::default(),
            waits: WaitSettings::default(),
            performance: PerformanceSettings::default(),
            security: SecuritySettings::default(),
        }
    }
}

/// WebDriver server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverSettings {
    /// Driver binary, resolved on PATH when not absolute
    pub binary: PathBuf,

    /// Browser the driver controls
    pub browser: BrowserKind,

    /// Run the browser headless
    pub headless: bool,

    /// Fixed driver port (None = pick a free one)
    pub port: Option<u16>,

    /// Seconds to wait for the driver to come up
    pub startup_timeout_secs: u64,

    /// Attach to an already-running WebDriver endpoint instead of
    /// spawning one
    pub webdriver_url: Option<String>,
}

impl Default for DriverSettings {
    fn default() -> Self {
        Self {
            binary: PathBuf::from("geckodriver"),
            browser: BrowserKind::Firefox,
            headless: true,
            port: None,
            startup_timeout_secs: 20,
            webdriver_url: None,
        }
    }
}

/// DOM wait tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitSettings {
    pub element_timeout_ms: u64,
    pub poll_interval_ms: u64,
}

impl Default for WaitSettings {
    fn default() -> Self {
        Self {
            element_timeout_ms: 10_000,
            poll_interval_ms: 300,
        }
    }
}

/// Performance suite thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceSettings {
    /// A timed step slower than this fails its case
    pub acceptable_response_ms: u64,
}

impl Default for PerformanceSettings {
    fn default() -> Self {
        Self {
            acceptable_response_ms: 2_000,
        }
    }
}

/// Security suite parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecuritySettings {
    /// Wrong-password submissions before the lockout check
    pub lockout_attempts: u32,

    /// Idle dwell before probing whether the session expired
    pub session_timeout_secs: u64,

    /// Settle delay between brute-force attempts
    pub brute_force_delay_ms: u64,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            lockout_attempts: 30,
            session_timeout_secs: 900,
            brute_force_delay_ms: 100,
        }
    }
}

impl HarnessConfig {
    /// Load configuration from file
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn element_timeout(&self) -> Duration {
        Duration::from_millis(self.waits.element_timeout_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.waits.poll_interval_ms)
    }

    pub fn acceptable_response(&self) -> Duration {
        Duration::from_millis(self.performance.acceptable_response_ms)
    }

    pub fn session_dwell(&self) -> Duration {
        Duration::from_secs(self.security.session_timeout_secs)
    }

    pub fn driver_startup_timeout(&self) -> Duration {
        Duration::from_secs(self.driver.startup_timeout_secs)
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_shipped_constants() {
        let config = HarnessConfig::default();
        assert_eq!(config.base_url, "https://www.saucedemo.com/");
        assert_eq!(config.performance.acceptable_response_ms, 2_000);
        assert_eq!(config.security.lockout_attempts, 30);
        assert_eq!(config.security.session_timeout_secs, 900);
        assert_eq!(config.waits.element_timeout_ms, 10_000);
        assert!(config.driver.headless);
    }

    #[test]
    fn load_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = HarnessConfig::load(&dir.path().join("absent.toml")).expect("load");
        assert_eq!(config.base_url, HarnessConfig::default().base_url);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested/swagcheck.toml");

        let mut config = HarnessConfig::default();
        config.security.session_timeout_secs = 60;
        config.driver.browser = swagcheck_webdriver::BrowserKind::Chrome;
        config.save(&path).expect("save");

        let loaded = HarnessConfig::load(&path).expect("load");
        assert_eq!(loaded.security.session_timeout_secs, 60);
        assert_eq!(loaded.driver.browser, swagcheck_webdriver::BrowserKind::Chrome);
    }
}
