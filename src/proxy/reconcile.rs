//! Idempotent reconciliation of SOCKS proxy state: current configuration is
//! read first and mutations are issued only when something actually differs.

use anyhow::Result;
use tracing::debug;

use crate::net::NetworkStore;

/// Point the service's SOCKS proxy at host:port and enable it.
///
/// Returns false without touching the OS when the current server, port, and
/// enabled flag already match. Otherwise the host/port mutation runs first
/// and a failure there stops the enable flag from being touched.
pub fn enable(
    store: &mut dyn NetworkStore,
    service: &str,
    host: &str,
    port: u16,
) -> Result<bool> {
    let current = store.socks_state(service);
    if current.server == host && current.port == port.to_string() && current.is_enabled() {
        debug!("SOCKS proxy on {} already set to {}:{}", service, host, port);
        return Ok(false);
    }

    store.set_socks_proxy(service, host, port)?;
    store.set_socks_state(service, true)?;
    Ok(true)
}

/// Turn the service's SOCKS proxy off.
///
/// The configured host/port are left alone so a later enable restores the
/// same endpoint. Returns false when already disabled.
pub fn disable(store: &mut dyn NetworkStore, service: &str) -> Result<bool> {
    if !store.socks_state(service).is_enabled() {
        debug!("SOCKS proxy on {} already disabled", service);
        return Ok(false);
    }

    store.set_socks_state(service, false)?;
    Ok(true)
}

/// Merge the desired pipe-delimited bypass patterns into the service's
/// current list.
///
/// Purely additive: desired patterns are seeded first, the current list
/// follows, blanks are dropped, and duplicates collapse case-insensitively
/// onto their first spelling. One mutation with the full merged list is
/// issued only when the result differs from what is already set.
pub fn merge_bypass(store: &mut dyn NetworkStore, service: &str, desired: &str) -> Result<bool> {
    let current = store.bypass_domains(service);

    let mut merged: Vec<String> = Vec::new();
    let mut seen: Vec<String> = Vec::new();
    for pattern in desired.split('|').chain(current.iter().map(String::as_str)) {
        let pattern = pattern.trim();
        if pattern.is_empty() {
            continue;
        }
        let folded = pattern.to_ascii_lowercase();
        if !seen.contains(&folded) {
            seen.push(folded);
            merged.push(pattern.to_string());
        }
    }

    let current_joined = current
        .iter()
        .map(|d| d.trim())
        .filter(|d| !d.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if merged.join(" ").eq_ignore_ascii_case(&current_joined) {
        debug!("Bypass list on {} already contains the desired patterns", service);
        return Ok(false);
    }

    store.set_bypass_domains(service, &merged)?;
    Ok(true)
}
