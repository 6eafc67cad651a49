// midicfg-rs/midicfg/src/transport/mock.rs

use std::collections::{BTreeSet, HashSet};
use std::time::Duration;

use crate::transport::traits::{ClaimOutcome, Transport};
use crate::types::{DeviceId, EndpointAddress, InterfaceDescriptor, InterfaceNumber};
use crate::{Error, Result};

/// Everything the mock observed, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockEvent {
    SelectConfiguration(u8),
    Claim(InterfaceNumber, ClaimOutcome),
    Release(InterfaceNumber),
    Transfer(EndpointAddress, Vec<u8>),
}

/// Mock transport for unit tests. It models a composite device: interfaces
/// listed in `class_owned` refuse claims, every claim is exclusive, and
/// transfers are only accepted on endpoints of a claimed interface.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub device_id: String,
    pub interfaces: Vec<InterfaceDescriptor>,
    pub class_owned: HashSet<InterfaceNumber>,
    pub claimed: BTreeSet<InterfaceNumber>,
    pub configuration: Option<u8>,
    /// Successfully written payloads: (endpoint, data)
    pub sent: Vec<(EndpointAddress, Vec<u8>)>,
    pub events: Vec<MockEvent>,
    /// Testing hook: zero-based index of the transfer attempt that fails
    pub fail_transfer_at: Option<usize>,
    /// Testing hook: report this many bytes written instead of the full length
    pub short_write: Option<usize>,
    /// Testing hook: releases fail and the claim stays held
    pub fail_release: bool,
    /// Testing hook: every call fails as if the device were unplugged
    pub unplugged: bool,
    /// Last timeout handed down by the session
    pub transfer_timeout: Option<Duration>,
    transfer_attempts: usize,
}

impl MockTransport {
    pub fn new(interfaces: Vec<InterfaceDescriptor>) -> Self {
        Self {
            device_id: "mock:0".to_string(),
            interfaces,
            configuration: Some(crate::constants::DEFAULT_CONFIGURATION),
            ..Default::default()
        }
    }

    /// Mark an interface as held by a host class driver.
    pub fn set_class_owned(&mut self, interface: u8) {
        self.class_owned.insert(InterfaceNumber::new(interface));
    }

    /// Start unconfigured so configuration selection can be observed.
    pub fn set_unconfigured(&mut self) {
        self.configuration = None;
    }

    pub fn fail_transfer_at(&mut self, attempt: usize) {
        self.fail_transfer_at = Some(attempt);
    }

    /// Bytes sent, without the endpoint, for compact assertions.
    pub fn sent_payloads(&self) -> Vec<Vec<u8>> {
        self.sent.iter().map(|(_, data)| data.clone()).collect()
    }

    pub fn transfer_attempts(&self) -> usize {
        self.transfer_attempts
    }

    /// Claims in the order they were attempted, with their outcome.
    pub fn claim_log(&self) -> Vec<(InterfaceNumber, ClaimOutcome)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                MockEvent::Claim(n, o) => Some((*n, *o)),
                _ => None,
            })
            .collect()
    }

    pub fn release_log(&self) -> Vec<InterfaceNumber> {
        self.events
            .iter()
            .filter_map(|e| match e {
                MockEvent::Release(n) => Some(*n),
                _ => None,
            })
            .collect()
    }

    fn check_plugged(&self) -> Result<()> {
        if self.unplugged {
            return Err(Error::Backend("no such device (it may have been disconnected)".into()));
        }
        Ok(())
    }
}

impl Transport for MockTransport {
    fn device_id(&self) -> DeviceId {
        DeviceId::new(self.device_id.clone())
    }

    fn active_configuration(&mut self) -> Result<Option<u8>> {
        self.check_plugged()?;
        Ok(self.configuration)
    }

    fn select_configuration(&mut self, configuration: u8) -> Result<()> {
        self.check_plugged()?;
        self.events.push(MockEvent::SelectConfiguration(configuration));
        self.configuration = Some(configuration);
        Ok(())
    }

    fn interfaces(&mut self) -> Result<Vec<InterfaceDescriptor>> {
        self.check_plugged()?;
        if self.configuration.is_none() {
            // Unconfigured devices expose no interfaces.
            return Ok(Vec::new());
        }
        Ok(self.interfaces.clone())
    }

    fn claim_interface(&mut self, interface: InterfaceNumber) -> Result<ClaimOutcome> {
        self.check_plugged()?;
        if !self.interfaces.iter().any(|i| i.number() == interface) {
            return Err(Error::Backend(format!("interface {} not found", interface)));
        }
        // A second claim of a held interface is refused as well, so a leaked
        // claim shows up as AlreadyOwned in the log.
        let outcome = if self.class_owned.contains(&interface) || self.claimed.contains(&interface)
        {
            ClaimOutcome::AlreadyOwned
        } else {
            self.claimed.insert(interface);
            ClaimOutcome::Claimed
        };
        self.events.push(MockEvent::Claim(interface, outcome));
        Ok(outcome)
    }

    fn release_interface(&mut self, interface: InterfaceNumber) -> Result<()> {
        self.check_plugged()?;
        if self.fail_release {
            return Err(Error::Backend(format!("release of interface {} failed", interface)));
        }
        if !self.claimed.remove(&interface) {
            return Err(Error::Backend(format!("interface {} not claimed", interface)));
        }
        self.events.push(MockEvent::Release(interface));
        Ok(())
    }

    fn transfer_out(&mut self, endpoint: EndpointAddress, data: &[u8]) -> Result<usize> {
        let attempt = self.transfer_attempts;
        self.transfer_attempts += 1;
        self.check_plugged()?;

        let owner_claimed = self
            .interfaces
            .iter()
            .any(|i| i.owns_endpoint(endpoint) && self.claimed.contains(&i.number()));
        if !owner_claimed {
            return Err(Error::Backend(format!("endpoint {} not claimed", endpoint)));
        }
        if self.fail_transfer_at == Some(attempt) {
            return Err(Error::Backend("endpoint stalled".into()));
        }

        self.events
            .push(MockEvent::Transfer(endpoint, data.to_vec()));
        self.sent.push((endpoint, data.to_vec()));
        Ok(self.short_write.unwrap_or(data.len()))
    }

    fn set_transfer_timeout(&mut self, timeout: Duration) {
        self.transfer_timeout = Some(timeout);
    }
}
