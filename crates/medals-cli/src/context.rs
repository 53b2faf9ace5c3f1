use std::path::{Path, PathBuf};

use anyhow::Result;
use medals_client::RestClient;
use medals_runtime::{Config, resolve_data_dir};

use crate::Cli;
use crate::presentation::ConsoleRenderer;
use crate::types::OutputFormat;

/// Resolved settings shared by every command.
pub struct ExecutionContext {
    pub data_dir: PathBuf,
    pub config: Config,
    pub api_url: Option<String>,
    pub format: OutputFormat,
}

impl ExecutionContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
        let config = Config::load_from(&Config::path_in(&data_dir))?;

        Ok(Self {
            data_dir,
            config,
            api_url: cli.api_url.clone(),
            format: cli.format,
        })
    }

    pub fn config_path(&self) -> PathBuf {
        Config::path_in(&self.data_dir)
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("medals.log")
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn base_url(&self) -> String {
        self.config.resolve_base_url(self.api_url.as_deref())
    }

    pub fn client(&self) -> Result<RestClient> {
        Ok(RestClient::new(
            self.config.client_config(self.api_url.as_deref()),
        )?)
    }

    pub fn renderer(&self) -> ConsoleRenderer {
        ConsoleRenderer::new(self.format)
    }
}
