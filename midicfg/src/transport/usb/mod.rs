// midicfg-rs/midicfg/src/transport/usb/mod.rs

#![cfg(feature = "usb")]

use std::collections::HashMap;
use std::time::Duration;

use log::{debug, info};
use rusb::{Context, Device, DeviceDescriptor, DeviceHandle};

use crate::transport::traits::{ClaimOutcome, Transport};
use crate::types::{DeviceId, EndpointAddress, InterfaceDescriptor, InterfaceNumber, TransferKind};
use crate::{Error, Result};

mod descriptor;
mod hotplug;
mod selector;

pub use descriptor::location_id;
pub use hotplug::RemovalWatcher;
pub use selector::UsbSelector;

/// libusb-backed transport for one opened device.
///
/// Kernel drivers are never detached: the class-owned MIDI interface must
/// stay with the host driver, and a refused claim is how the resolver tells
/// it apart from the vendor interface.
pub struct UsbTransport {
    handle: DeviceHandle<Context>,
    descriptor: DeviceDescriptor,
    device_id: DeviceId,
    serial: Option<String>,
    timeout: Duration,
    // Transfer type per endpoint address, filled by `interfaces()`
    endpoint_kinds: HashMap<u8, TransferKind>,
}

impl UsbTransport {
    /// Open a device found during enumeration.
    pub fn from_device(device: Device<Context>, timeout: Duration) -> Result<Self> {
        let descriptor = device.device_descriptor()?;
        let handle = device.open()?;
        let device_id = descriptor::location_id(&device);
        let serial = handle.read_serial_number_string_ascii(&descriptor).ok();

        info!(
            "opened {:04x}:{:04x} at {} (serial {})",
            descriptor.vendor_id(),
            descriptor.product_id(),
            device_id,
            serial.as_deref().unwrap_or("-")
        );

        Ok(Self {
            handle,
            descriptor,
            device_id,
            serial,
            timeout,
            endpoint_kinds: HashMap::new(),
        })
    }

    pub fn vendor_id(&self) -> u16 {
        self.descriptor.vendor_id()
    }

    pub fn product_id(&self) -> u16 {
        self.descriptor.product_id()
    }

    pub fn serial(&self) -> Option<&str> {
        self.serial.as_deref()
    }
}

impl Transport for UsbTransport {
    fn device_id(&self) -> DeviceId {
        self.device_id.clone()
    }

    fn active_configuration(&mut self) -> Result<Option<u8>> {
        // libusb reports 0 for an unconfigured device
        match self.handle.active_configuration()? {
            0 => Ok(None),
            value => Ok(Some(value)),
        }
    }

    fn select_configuration(&mut self, configuration: u8) -> Result<()> {
        self.handle.set_active_configuration(configuration)?;
        Ok(())
    }

    fn interfaces(&mut self) -> Result<Vec<InterfaceDescriptor>> {
        let config = self.handle.device().active_config_descriptor()?;
        let interfaces = descriptor::interfaces_of(&config);

        self.endpoint_kinds = interfaces
            .iter()
            .flat_map(|i| i.endpoints().iter())
            .map(|ep| (ep.address().as_u8(), ep.kind()))
            .collect();

        Ok(interfaces)
    }

    fn claim_interface(&mut self, interface: InterfaceNumber) -> Result<ClaimOutcome> {
        let outcome = claim_outcome(self.handle.claim_interface(interface.as_u8()))?;
        if outcome == ClaimOutcome::AlreadyOwned {
            debug!("interface {} is held by another driver", interface);
        }
        Ok(outcome)
    }

    fn release_interface(&mut self, interface: InterfaceNumber) -> Result<()> {
        self.handle.release_interface(interface.as_u8())?;
        Ok(())
    }

    fn transfer_out(&mut self, endpoint: EndpointAddress, data: &[u8]) -> Result<usize> {
        let kind = self
            .endpoint_kinds
            .get(&endpoint.as_u8())
            .copied()
            .unwrap_or(TransferKind::Bulk);

        let written = match kind {
            TransferKind::Interrupt => {
                self.handle
                    .write_interrupt(endpoint.as_u8(), data, self.timeout)?
            }
            TransferKind::Bulk => self.handle.write_bulk(endpoint.as_u8(), data, self.timeout)?,
            other => {
                return Err(Error::Backend(format!(
                    "endpoint {} has unsupported transfer type {:?}",
                    endpoint, other
                )));
            }
        };
        Ok(written)
    }

    fn set_transfer_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }
}

/// Map a libusb claim result. A kernel driver holding the interface shows
/// up as `Busy`, or `Access` on some platforms; both mean "owned elsewhere".
fn claim_outcome(result: rusb::Result<()>) -> Result<ClaimOutcome> {
    match result {
        Ok(()) => Ok(ClaimOutcome::Claimed),
        Err(rusb::Error::Busy) | Err(rusb::Error::Access) => Ok(ClaimOutcome::AlreadyOwned),
        Err(e) => Err(e.into()),
    }
}
