//! Parsing of networksetup's textual output.
//!
//! Field presence varies by link state, so every helper tolerates missing
//! keys and malformed lines rather than assuming well-formed output.

/// Look up a `Key: value` field, returning the trimmed value of the first
/// matching line.
pub fn field<'a>(text: &'a str, key: &str) -> Option<&'a str> {
    for line in text.lines() {
        if let Some(rest) = line.trim_start().strip_prefix(key) {
            if let Some(value) = rest.strip_prefix(':') {
                return Some(value.trim());
            }
        }
    }
    None
}

/// Service names from `-listallnetworkservices`, banner line skipped.
///
/// Disabled entries keep their leading `*`; filtering them is the
/// detector's job.
pub fn services(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.contains("denotes that a network service is disabled"))
        .map(|line| line.trim_end().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

/// (service name, device id) pairs from `-listnetworkserviceorder`.
///
/// The listing interleaves `(1) Wi-Fi` entry lines with
/// `(Hardware Port: Wi-Fi, Device: en0)` detail lines; disabled entries use
/// `(*)` in place of the index.
pub fn service_order(text: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    let mut current: Option<String> = None;

    for line in text.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix("(Hardware Port:") {
            if let (Some(name), Some((_, rest))) = (current.take(), rest.split_once("Device:")) {
                let device = rest.trim_end_matches(')').trim();
                if !device.is_empty() {
                    pairs.push((name, device.to_string()));
                }
            }
        } else if let Some((index, name)) = line.strip_prefix('(').and_then(|r| r.split_once(')')) {
            if index == "*" || index.chars().all(|c| c.is_ascii_digit()) {
                current = Some(name.trim().to_string());
            }
        }
    }
    pairs
}

/// Bypass patterns from `-getproxybypassdomains`, one per line.
///
/// An empty list is reported as a sentence ("There aren't any bypass
/// domains…"), not as empty output.
pub fn bypass_domains(text: &str) -> Vec<String> {
    if text.contains("There aren't any") {
        return Vec::new();
    }
    text.lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Syntactic IPv4 check: four dot-separated 1-3 digit groups.
///
/// Deliberately looser than `Ipv4Addr` parsing; octet range is not this
/// tool's concern, only telling an address apart from "none" or garbage.
pub fn is_ipv4(value: &str) -> bool {
    let groups: Vec<&str> = value.split('.').collect();
    groups.len() == 4
        && groups
            .iter()
            .all(|g| (1..=3).contains(&g.len()) && g.chars().all(|c| c.is_ascii_digit()))
}

/// Whether an address sits in 172.20.10.0/24, the iOS Personal Hotspot
/// range.
pub fn in_hotspot_subnet(value: &str) -> bool {
    is_ipv4(value)
        && value
            .strip_prefix("172.20.10.")
            .is_some_and(|host| !host.contains('.'))
}
