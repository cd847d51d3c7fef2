//! In-memory [`NetworkStore`] double for exercising detection and
//! reconciliation without touching the OS.

use anyhow::Result;

use crate::net::{NetworkStore, SocksState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    SetSocksProxy {
        service: String,
        host: String,
        port: u16,
    },
    SetSocksState {
        service: String,
        enabled: bool,
    },
    SetBypassDomains {
        service: String,
        domains: Vec<String>,
    },
}

#[derive(Debug, Clone, Default)]
pub struct FakeService {
    pub name: String,
    pub device: Option<String>,
    pub ipv4: Option<String>,
    pub socks: SocksState,
    pub bypass: Vec<String>,
}

impl FakeService {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_ipv4(mut self, addr: &str) -> Self {
        self.ipv4 = Some(addr.to_string());
        self
    }

    pub fn with_device(mut self, device: &str) -> Self {
        self.device = Some(device.to_string());
        self
    }

    pub fn with_socks(mut self, server: &str, port: &str, enabled: &str) -> Self {
        self.socks = SocksState {
            server: server.to_string(),
            port: port.to_string(),
            enabled: enabled.to_string(),
        };
        self
    }

    pub fn with_bypass(mut self, domains: &[&str]) -> Self {
        self.bypass = domains.iter().map(|d| d.to_string()).collect();
        self
    }
}

/// Fake store: services plus a log of every mutation issued, so idempotence
/// asserts can count calls.
///
/// With `fail_writes` set, every write records the attempt, applies nothing,
/// and fails, the way a non-zero networksetup exit does.
#[derive(Debug, Default)]
pub struct FakeStore {
    pub services: Vec<FakeService>,
    pub log: Vec<Mutation>,
    pub fail_writes: bool,
}

impl FakeStore {
    pub fn new(services: Vec<FakeService>) -> Self {
        Self {
            services,
            log: Vec::new(),
            fail_writes: false,
        }
    }

    fn find(&self, name: &str) -> Option<&FakeService> {
        self.services.iter().find(|s| s.name == name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut FakeService> {
        self.services.iter_mut().find(|s| s.name == name)
    }
}

impl NetworkStore for FakeStore {
    fn list_services(&self) -> Vec<String> {
        self.services.iter().map(|s| s.name.clone()).collect()
    }

    fn device_for(&self, service: &str) -> Option<String> {
        self.services
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(service))
            .and_then(|s| s.device.clone())
    }

    fn ipv4_address(&self, service: &str) -> Option<String> {
        self.find(service).and_then(|s| s.ipv4.clone())
    }

    fn socks_state(&self, service: &str) -> SocksState {
        self.find(service).map(|s| s.socks.clone()).unwrap_or_default()
    }

    fn bypass_domains(&self, service: &str) -> Vec<String> {
        self.find(service).map(|s| s.bypass.clone()).unwrap_or_default()
    }

    fn set_socks_proxy(&mut self, service: &str, host: &str, port: u16) -> Result<()> {
        self.log.push(Mutation::SetSocksProxy {
            service: service.to_string(),
            host: host.to_string(),
            port,
        });
        if self.fail_writes {
            anyhow::bail!("networksetup -setsocksfirewallproxy failed");
        }
        if let Some(svc) = self.find_mut(service) {
            svc.socks.server = host.to_string();
            svc.socks.port = port.to_string();
        }
        Ok(())
    }

    fn set_socks_state(&mut self, service: &str, enabled: bool) -> Result<()> {
        self.log.push(Mutation::SetSocksState {
            service: service.to_string(),
            enabled,
        });
        if self.fail_writes {
            anyhow::bail!("networksetup -setsocksfirewallproxystate failed");
        }
        if let Some(svc) = self.find_mut(service) {
            svc.socks.enabled = if enabled { "Yes" } else { "No" }.to_string();
        }
        Ok(())
    }

    fn set_bypass_domains(&mut self, service: &str, domains: &[String]) -> Result<()> {
        self.log.push(Mutation::SetBypassDomains {
            service: service.to_string(),
            domains: domains.to_vec(),
        });
        if self.fail_writes {
            anyhow::bail!("networksetup -setproxybypassdomains failed");
        }
        if let Some(svc) = self.find_mut(service) {
            svc.bypass = domains.to_vec();
        }
        Ok(())
    }
}
