use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "tether-proxy")]
#[command(version)]
#[command(about = "Toggle macOS SOCKS proxy settings on an iPhone/iPad USB tether service", long_about = None)]
pub struct Cli {
    /// What to do with the tether's proxy configuration
    #[arg(value_enum, default_value = "auto")]
    pub action: Action,

    /// Print the networksetup commands instead of running them
    #[arg(long)]
    pub dry_run: bool,

    /// SOCKS proxy host (overrides SOCKS_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// SOCKS proxy port (overrides SOCKS_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Exact network service name, skips detection (overrides IPHONE_SERVICE)
    #[arg(long)]
    pub service: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// Enable the SOCKS proxy and merge the bypass list
    On,
    /// Disable the SOCKS proxy (bypass list untouched)
    Off,
    /// Report the detected service and its current proxy state
    Status,
    /// Enable when the tether is live, disable otherwise
    Auto,
}
