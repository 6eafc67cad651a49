// midicfg-rs/midicfg/src/device/binding.rs

use log::{debug, warn};

use crate::device::presence::Presence;
use crate::transport::Transport;
use crate::types::{DeviceId, EndpointAddress, EndpointDirection, InterfaceNumber};
use crate::{Error, Result};

/// A claimed interface and the OUT endpoint commands are written to.
///
/// Not `Clone`: the binding stands for the claim, and releasing consumes it.
/// It turns stale when the device is removed; every use checks first.
#[derive(Debug)]
pub struct ResolvedBinding {
    interface: InterfaceNumber,
    endpoint: EndpointAddress,
    presence: Presence,
}

impl ResolvedBinding {
    pub(crate) fn new(
        interface: InterfaceNumber,
        endpoint: EndpointAddress,
        presence: Presence,
    ) -> Result<Self> {
        if endpoint.direction() != EndpointDirection::Out {
            return Err(Error::Backend(format!(
                "endpoint {} is not an OUT endpoint",
                endpoint
            )));
        }
        Ok(Self {
            interface,
            endpoint,
            presence,
        })
    }

    pub fn interface(&self) -> InterfaceNumber {
        self.interface
    }

    pub fn endpoint(&self) -> EndpointAddress {
        self.endpoint
    }

    pub fn device_id(&self) -> &DeviceId {
        self.presence.device_id()
    }

    pub fn is_stale(&self) -> bool {
        !self.presence.is_present()
    }

    /// Fail fast with `DeviceRemoved` instead of touching the transport.
    pub fn ensure_live(&self) -> Result<()> {
        self.presence.ensure_present()
    }

    /// Return the interface claim. A stale binding has nothing to release:
    /// the claim went away with the device.
    pub fn release(self, transport: &mut dyn Transport) -> Result<()> {
        self.release_claim(transport)
    }

    /// Release without giving up the binding, so a failed release leaves
    /// the caller still holding it.
    pub(crate) fn release_claim(&self, transport: &mut dyn Transport) -> Result<()> {
        if self.is_stale() {
            debug!(
                "binding for {} is stale, skipping release of interface {}",
                self.device_id(),
                self.interface
            );
            return Ok(());
        }
        transport.release_interface(self.interface).inspect_err(|e| {
            warn!("release of interface {} failed: {}", self.interface, e);
        })
    }
}
