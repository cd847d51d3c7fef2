mod cli;
mod config;
mod net;
mod proxy;

use anyhow::Result;
use clap::Parser;
use cli::{Action, Cli};
use config::{Preferences, Settings};
use net::{Networksetup, NetworkStore};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap exits with 2 on bad arguments; this tool promises 1.
            // Help and version output still exit 0.
            let _ = err.print();
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let prefs = Preferences::load()?;
    let settings = Settings::resolve(&cli, &prefs)?;

    if settings.dry_run {
        info!("Dry run: mutating commands will be printed, not executed");
    }

    let mut store = Networksetup::new(settings.dry_run);
    let service = proxy::detect(&store, &settings)?;

    match cli.action {
        Action::Status => cmd_status(&store, &service),
        Action::On => proxy::turn_on(&mut store, &settings, &service)?,
        Action::Off => proxy::turn_off(&mut store, &service)?,
        Action::Auto => proxy::auto(&mut store, &settings, &service)?,
    }

    Ok(())
}

fn cmd_status(store: &dyn NetworkStore, service: &str) {
    let active = proxy::is_active(store, service);
    let ipv4 = store.ipv4_address(service);
    let socks = store.socks_state(service);
    let bypass = store.bypass_domains(service);
    let device = store.device_for(service);

    println!();
    println!("📊 Tether Proxy Status");
    println!();
    println!("   Service:  {}", service);
    println!(
        "   Device:   {}",
        device.as_deref().unwrap_or("(unknown)")
    );
    println!(
        "   Link:     {}",
        if active {
            format!("✅ Active ({})", ipv4.as_deref().unwrap_or(""))
        } else {
            "❌ Inactive".to_string()
        }
    );
    println!(
        "   SOCKS:    {}",
        if socks.is_enabled() {
            format!("✅ Enabled ({}:{})", socks.server, socks.port)
        } else if socks.server.is_empty() {
            "❌ Disabled".to_string()
        } else {
            format!("❌ Disabled ({}:{})", socks.server, socks.port)
        }
    );
    println!(
        "   Bypass:   {}",
        if bypass.is_empty() {
            "(none)".to_string()
        } else {
            bypass.join(" ")
        }
    );
    println!();
}
