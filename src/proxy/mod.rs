mod detect;
mod reconcile;

pub use detect::{detect, is_active};

use anyhow::Result;
use tracing::info;

use crate::config::Settings;
use crate::net::NetworkStore;

/// The `on` sequence: enable the SOCKS proxy, then merge the bypass list.
pub fn turn_on(store: &mut dyn NetworkStore, settings: &Settings, service: &str) -> Result<()> {
    if reconcile::enable(store, service, &settings.host, settings.port)? {
        info!(
            "SOCKS proxy on {} set to {}:{} and enabled",
            service, settings.host, settings.port
        );
    } else {
        info!(
            "SOCKS proxy on {} already enabled at {}:{}",
            service, settings.host, settings.port
        );
    }

    if reconcile::merge_bypass(store, service, &settings.bypass)? {
        info!("Bypass list on {} updated", service);
    } else {
        info!("Bypass list on {} already up to date", service);
    }
    Ok(())
}

/// The `off` sequence: disable the SOCKS proxy, leaving host/port and the
/// bypass list untouched.
pub fn turn_off(store: &mut dyn NetworkStore, service: &str) -> Result<()> {
    if reconcile::disable(store, service)? {
        info!("SOCKS proxy on {} disabled", service);
    } else {
        info!("SOCKS proxy on {} already disabled", service);
    }
    Ok(())
}

/// The unattended mode: enable while the tether is live, disable once it is
/// gone.
pub fn auto(store: &mut dyn NetworkStore, settings: &Settings, service: &str) -> Result<()> {
    if is_active(store, service) {
        info!("{} is live, applying proxy settings", service);
        turn_on(store, settings, service)
    } else {
        info!("{} has no address, removing proxy settings", service);
        turn_off(store, service)
    }
}
