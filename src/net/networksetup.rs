use anyhow::Result;
use tracing::debug;

use crate::net::exec::Runner;
use crate::net::parse;
use crate::net::{NetworkStore, SocksState};

/// The real [`NetworkStore`], backed by the `networksetup` tool.
pub struct Networksetup {
    runner: Runner,
}

impl Networksetup {
    pub fn new(dry_run: bool) -> Self {
        Self {
            runner: Runner::new(dry_run),
        }
    }
}

impl NetworkStore for Networksetup {
    fn list_services(&self) -> Vec<String> {
        match self.runner.query(&["-listallnetworkservices"]) {
            Some(output) => parse::services(&output),
            None => Vec::new(),
        }
    }

    fn device_for(&self, service: &str) -> Option<String> {
        let output = self.runner.query(&["-listnetworkserviceorder"])?;
        parse::service_order(&output)
            .into_iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(service))
            .map(|(_, device)| device)
    }

    fn ipv4_address(&self, service: &str) -> Option<String> {
        let output = self.runner.query(&["-getinfo", service])?;
        parse::field(&output, "IP address").map(str::to_string)
    }

    fn socks_state(&self, service: &str) -> SocksState {
        let Some(output) = self.runner.query(&["-getsocksfirewallproxy", service]) else {
            return SocksState::default();
        };
        SocksState {
            server: parse::field(&output, "Server").unwrap_or("").to_string(),
            port: parse::field(&output, "Port").unwrap_or("").to_string(),
            enabled: parse::field(&output, "Enabled").unwrap_or("No").to_string(),
        }
    }

    fn bypass_domains(&self, service: &str) -> Vec<String> {
        match self.runner.query(&["-getproxybypassdomains", service]) {
            Some(output) => parse::bypass_domains(&output),
            None => Vec::new(),
        }
    }

    fn set_socks_proxy(&mut self, service: &str, host: &str, port: u16) -> Result<()> {
        debug!("Setting SOCKS proxy on {} to {}:{}", service, host, port);
        // Trailing "off" keeps the authenticated-proxy mode disabled
        self.runner.mutate(&[
            "-setsocksfirewallproxy",
            service,
            host,
            &port.to_string(),
            "off",
        ])
    }

    fn set_socks_state(&mut self, service: &str, enabled: bool) -> Result<()> {
        let state = if enabled { "on" } else { "off" };
        debug!("Setting SOCKS proxy state on {} to {}", service, state);
        self.runner
            .mutate(&["-setsocksfirewallproxystate", service, state])
    }

    fn set_bypass_domains(&mut self, service: &str, domains: &[String]) -> Result<()> {
        debug!("Setting bypass domains on {}: {}", service, domains.join(" "));
        let mut args = vec!["-setproxybypassdomains", service];
        args.extend(domains.iter().map(String::as_str));
        self.runner.mutate(&args)
    }
}
