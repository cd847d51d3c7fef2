use anyhow::{Context, Result};

use crate::cli::Cli;
use crate::config::Preferences;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 9001;
pub const DEFAULT_MATCHERS: &str = "iPhone USB|iPhone|USB iPhone|iPhone USB 1..6|iPad USB|iPad";
pub const DEFAULT_BYPASS: &str = "localhost|127.0.0.1|*.local|172.20.10.1";

/// Resolved configuration for one run, immutable after startup.
///
/// Precedence for every value: CLI flag, then environment variable, then the
/// preferences file, then the built-in default.
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub service: Option<String>,
    pub matchers: String,
    pub bypass: String,
    pub dry_run: bool,
}

impl Settings {
    pub fn resolve(cli: &Cli, prefs: &Preferences) -> Result<Self> {
        Self::resolve_with(cli, prefs, |name| std::env::var(name).ok())
    }

    fn resolve_with(
        cli: &Cli,
        prefs: &Preferences,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let host = cli
            .host
            .clone()
            .or_else(|| env("SOCKS_HOST"))
            .or_else(|| prefs.host.clone())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match cli.port {
            Some(p) => p,
            None => match env("SOCKS_PORT") {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid SOCKS_PORT value: {}", raw))?,
                None => prefs.port.unwrap_or(DEFAULT_PORT),
            },
        };

        let service = cli
            .service
            .clone()
            .or_else(|| env("IPHONE_SERVICE"))
            .or_else(|| prefs.service.clone());

        let matchers = env("MATCHERS")
            .or_else(|| prefs.matchers.clone())
            .unwrap_or_else(|| DEFAULT_MATCHERS.to_string());

        let bypass = env("BYPASS")
            .or_else(|| prefs.bypass.clone())
            .unwrap_or_else(|| DEFAULT_BYPASS.to_string());

        Ok(Self {
            host,
            port,
            service,
            matchers,
            bypass,
            dry_run: cli.dry_run,
        })
    }
}
