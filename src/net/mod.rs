mod exec;
mod networksetup;
pub mod parse;
#[cfg(test)]
pub mod testing;

pub use networksetup::Networksetup;

use anyhow::Result;

/// One service's SOCKS proxy fields, spelled the way networksetup reports
/// them. Missing fields read as empty / "No".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocksState {
    pub server: String,
    pub port: String,
    pub enabled: String,
}

impl Default for SocksState {
    fn default() -> Self {
        Self {
            server: String::new(),
            port: String::new(),
            enabled: "No".to_string(),
        }
    }
}

impl SocksState {
    /// networksetup spells the enabled flag as Yes/No, but On and 1 show up
    /// on some macOS releases.
    pub fn is_enabled(&self) -> bool {
        matches!(self.enabled.trim(), "Yes" | "On" | "1")
    }
}

/// Narrow port over the OS network-configuration store.
///
/// Reads never fail: a failed or unavailable query degrades to an empty or
/// default value, since fields are legitimately absent for inactive
/// services. Writes propagate failure and abort the remaining steps of the
/// running action.
pub trait NetworkStore {
    fn list_services(&self) -> Vec<String>;
    fn device_for(&self, service: &str) -> Option<String>;
    fn ipv4_address(&self, service: &str) -> Option<String>;
    fn socks_state(&self, service: &str) -> SocksState;
    fn bypass_domains(&self, service: &str) -> Vec<String>;

    fn set_socks_proxy(&mut self, service: &str, host: &str, port: u16) -> Result<()>;
    fn set_socks_state(&mut self, service: &str, enabled: bool) -> Result<()>;
    fn set_bypass_domains(&mut self, service: &str, domains: &[String]) -> Result<()>;
}
