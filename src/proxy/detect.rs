use anyhow::{bail, Context, Result};
use regex::RegexBuilder;
use tracing::debug;

use crate::config::Settings;
use crate::net::{parse, NetworkStore};

/// A service is live iff the OS reports a syntactically valid IPv4 address
/// for it. "none", empty, and malformed values all read as inactive.
pub fn is_active(store: &dyn NetworkStore, service: &str) -> bool {
    store
        .ipv4_address(service)
        .is_some_and(|addr| parse::is_ipv4(&addr))
}

/// Find the network service representing the USB tether.
///
/// Priority: explicit override (trusted as-is), then the first enumerated
/// service whose name matches the configured patterns and that is live, then
/// the first live service with an address in the iOS hotspot subnet.
pub fn detect(store: &dyn NetworkStore, settings: &Settings) -> Result<String> {
    if let Some(service) = &settings.service {
        debug!("Using configured service override: {}", service);
        return Ok(service.clone());
    }

    let matcher = RegexBuilder::new(&settings.matchers)
        .case_insensitive(true)
        .build()
        .with_context(|| format!("Invalid MATCHERS pattern: {}", settings.matchers))?;

    let candidates: Vec<String> = store
        .list_services()
        .into_iter()
        .filter(|name| !name.trim().is_empty() && !name.starts_with('*'))
        .collect();

    for name in &candidates {
        if matcher.is_match(name) && is_active(store, name) {
            debug!("Matched active service by name: {}", name);
            return Ok(name.clone());
        }
    }

    // Name matching missed; fall back to the standard iOS hotspot subnet,
    // which catches renamed or localized tether services.
    for name in &candidates {
        if let Some(addr) = store.ipv4_address(name) {
            if parse::is_ipv4(&addr) && parse::in_hotspot_subnet(&addr) {
                debug!("Matched active service by hotspot subnet: {} ({})", name, addr);
                return Ok(name.clone());
            }
        }
    }

    bail!(
        "No iPhone/iPad USB tether service found. \
         Set IPHONE_SERVICE to the exact service name, or widen MATCHERS (currently: {})",
        settings.matchers
    );
}
