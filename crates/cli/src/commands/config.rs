//! Config Command

use std::path::Path;

use anyhow::{bail, Result};
use clap::Subcommand;

use swagcheck_harness::HarnessConfig;

use crate::output::{print_success, OutputFormat};

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn execute(
    cmd: ConfigCommands,
    path: &Path,
    config: HarnessConfig,
    format: OutputFormat,
) -> Result<()> {
    match cmd {
        ConfigCommands::Show => match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
            _ => print!("{}", toml::to_string_pretty(&config)?),
        },
        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                bail!(
                    "{} already exists (pass --force to overwrite)",
                    path.display()
                );
            }
            HarnessConfig::default().save(path)?;
            print_success(&format!(
                "Default configuration written to {}",
                path.display()
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("swagcheck.toml");

        execute(
            ConfigCommands::Init { force: false },
            &path,
            HarnessConfig::default(),
            OutputFormat::Plain,
        )
        .expect("first init");

        let err = execute(
            ConfigCommands::Init { force: false },
            &path,
            HarnessConfig::default(),
            OutputFormat::Plain,
        )
        .unwrap_err();
        assert!(err.to_string().contains("already exists"));

        execute(
            ConfigCommands::Init { force: true },
            &path,
            HarnessConfig::default(),
            OutputFormat::Plain,
        )
        .expect("forced init");
    }

    #[test]
    fn written_file_loads_back_with_the_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("swagcheck.toml");

        execute(
            ConfigCommands::Init { force: false },
            &path,
            HarnessConfig::default(),
            OutputFormat::Plain,
        )
        .expect("init");

        let loaded = HarnessConfig::load(&path).expect("load");
        assert_eq!(loaded.base_url, HarnessConfig::default().base_url);
        assert_eq!(loaded.security.lockout_attempts, 30);
    }
}
