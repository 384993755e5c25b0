//! Driver process management - spawning and status checking the
//! WebDriver server (geckodriver or chromedriver)

use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::time::Duration;

use serde::Deserialize;
use tokio::time::sleep;
use tracing::{info, warn};

use crate::error::{Result, WebDriverError};

#[derive(Debug, Deserialize)]
struct StatusValue {
    ready: bool,
}

#[derive(Debug, Deserialize)]
struct StatusBody {
    value: StatusValue,
}

/// Handle to a running WebDriver server process
pub struct DriverProcess {
    child: Child,
    pub endpoint: String,
    pub port: u16,
}

impl DriverProcess {
    /// Spawn the driver binary and wait until `GET /status` reports ready.
    pub async fn spawn(config: DriverConfig) -> Result<Self> {
        let port = match config.port {
            Some(port) => port,
            None => find_free_port()?,
        };
        let endpoint = format!("http://127.0.0.1:{}", port);

        info!("Spawning {} on port {}", config.binary.display(), port);

        let mut cmd = Command::new(&config.binary);
        // geckodriver and chromedriver both accept the = form
        cmd.arg(format!("--port={}", port));

        // Driver logs are discarded; they are noisy and the wire errors
        // carry everything the harness reports on.
        cmd.stdout(Stdio::null()).stderr(Stdio::null());

        let child = cmd.spawn().map_err(|e| {
            WebDriverError::DriverStartup(format!(
                "Failed to spawn {}: {}",
                config.binary.display(),
                e
            ))
        })?;

        let handle = DriverProcess {
            child,
            endpoint: endpoint.clone(),
            port,
        };

        handle.wait_for_ready(config.startup_timeout).await?;

        info!("Driver is ready at {}", endpoint);
        Ok(handle)
    }

    /// Poll the status endpoint until the driver accepts new sessions.
    async fn wait_for_ready(&self, timeout_duration: Duration) -> Result<()> {
        let status_url = format!("{}/status", self.endpoint);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(2))
            .build()?;

        let start = std::time::Instant::now();
        let mut attempts = 0;

        while start.elapsed() < timeout_duration {
            attempts += 1;

            match client.get(&status_url).send().await {
                Ok(resp) if resp.status().is_success() => {
                    match resp.json::<StatusBody>().await {
                        Ok(body) if body.value.ready => return Ok(()),
                        Ok(_) => warn!("Driver answered but is not ready yet"),
                        Err(e) => warn!("Status decode error: {}", e),
                    }
                }
                Ok(resp) => {
                    warn!("Status check returned {}", resp.status());
                }
                Err(e) => {
                    if attempts == 1 {
                        info!("Waiting for driver to start...");
                    }
                    // Connection refused is expected while the driver is starting
                    if !e.is_connect() {
                        warn!("Status check error: {}", e);
                    }
                }
            }

            sleep(Duration::from_millis(100)).await;
        }

        Err(WebDriverError::DriverStatusCheck(attempts))
    }

    /// Get the HTTP endpoint of this driver
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Stop the driver process
    pub fn stop(&mut self) -> Result<()> {
        info!("Stopping driver (pid: {})", self.child.id());

        // Try graceful shutdown first
        #[cfg(unix)]
        {
            use nix::sys::signal::{kill, Signal};
            use nix::unistd::Pid;

            let pid = Pid::from_raw(self.child.id() as i32);
            if kill(pid, Signal::SIGTERM).is_ok() {
                // Give it a moment to shut down gracefully
                std::thread::sleep(Duration::from_millis(500));
            }
        }

        // Force kill if still running
        let _ = self.child.kill();
        let _ = self.child.wait();

        Ok(())
    }
}

impl Drop for DriverProcess {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}

/// Configuration for spawning a driver process
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Driver binary, resolved on PATH when not absolute
    pub binary: PathBuf,

    /// Port to listen on (None = find free port)
    pub port: Option<u16>,

    /// Timeout for the driver to come up
    pub startup_timeout: Duration,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            binary: PathBuf::from("geckodriver"),
            port: None,
            startup_timeout: Duration::from_secs(20),
        }
    }
}

/// Find a free port to use
fn find_free_port() -> std::io::Result<u16> {
    use std::net::TcpListener;

    let listener = TcpListener::bind("127.0.0.1:0")?;
    Ok(listener.local_addr()?.port())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_free_port() {
        let port1 = find_free_port().expect("bind");
        let port2 = find_free_port().expect("bind");

        // Ports should be in valid range
        assert!(port1 > 1024);
        assert!(port2 > 1024);
    }

    #[test]
    fn default_config_uses_path_lookup() {
        let config = DriverConfig::default();
        assert_eq!(config.binary, PathBuf::from("geckodriver"));
        assert!(config.port.is_none());
    }
}
