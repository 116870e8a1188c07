use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Fallback config file picked up from the working directory.
const CWD_CONFIG_FILE: &str = "config.yaml";

/// Upload ceilings are shown to users in whole megabytes.
const BYTES_PER_MB: u64 = 1024 * 1024;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Host to bind
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Disable timeout middleware
    #[arg(long, env = "TIMEOUT_DISABLED")]
    pub timeout_disabled: Option<bool>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub upload: UploadConfig,
    pub resilience: ResilienceConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    /// Hard cap on request bodies; larger than the upload ceiling so oversized
    /// PDFs still get the friendly size error.
    pub body_limit_bytes: usize,
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UploadConfig {
    pub max_file_size_bytes: u64,
    pub progress_increment: u8,
    pub tick_interval_ms: u64,
    pub retention_secs: u64,
}

impl UploadConfig {
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    #[must_use]
    pub fn retention(&self) -> Duration {
        Duration::from_secs(self.retention_secs)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ResilienceConfig {
    pub timeout_disabled: bool,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiConfig {
    /// Where the page loads HTMX from.
    pub htmx_src: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.body_limit_bytes", 64 * 1024 * 1024)?
            .set_default("server.static_dir", "static")?
            .set_default("upload.max_file_size_bytes", 10 * 1024 * 1024)?
            .set_default("upload.progress_increment", 5)?
            .set_default("upload.tick_interval_ms", 100)?
            .set_default("upload.retention_secs", 30 * 60)?
            .set_default("resilience.timeout_disabled", false)?
            .set_default("resilience.request_timeout_secs", 30)?
            .set_default(
                "ui.htmx_src",
                "https://unpkg.com/htmx.org@2.0.8/dist/htmx.min.js",
            )?
            .set_default("logging.format", "pretty")?;

        // Explicit file wins; otherwise ./config.yaml when present.
        if let Some(path) = &cli.config {
            builder = builder.add_source(File::with_name(path));
        } else if Path::new(CWD_CONFIG_FILE).exists() {
            builder = builder.add_source(File::with_name(CWD_CONFIG_FILE));
        }

        // E.g. PDFEXTRACT_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix("PDFEXTRACT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // CLI flags (and the env vars clap binds to them) take priority.
        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", port)?;
        }
        if let Some(td) = cli.timeout_disabled {
            builder = builder.set_override("resilience.timeout_disabled", td)?;
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if !(1..=100).contains(&self.upload.progress_increment) {
            return Err(config::ConfigError::Message(format!(
                "upload.progress_increment must be within 1..=100, got {}",
                self.upload.progress_increment
            )));
        }
        if self.upload.tick_interval_ms == 0 {
            return Err(config::ConfigError::Message(
                "upload.tick_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.upload.max_file_size_bytes == 0
            || self.upload.max_file_size_bytes % BYTES_PER_MB != 0
        {
            return Err(config::ConfigError::Message(format!(
                "upload.max_file_size_bytes must be a positive whole number of megabytes ({BYTES_PER_MB} bytes each), got {}",
                self.upload.max_file_size_bytes
            )));
        }
        if self.upload.retention_secs == 0 {
            return Err(config::ConfigError::Message(
                "upload.retention_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
