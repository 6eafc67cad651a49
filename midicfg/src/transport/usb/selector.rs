// midicfg-rs/midicfg/src/transport/usb/selector.rs

use std::time::Duration;

use log::debug;
use rusb::{Context, UsbContext};

use crate::device::selector::{DeviceSelector, Selection};
use crate::transport::usb::UsbTransport;
use crate::types::DeviceFilter;
use crate::{Error, Result};

const CLASS_HUB: u8 = 0x09;

/// Native stand-in for the host's device-selection prompt: picks the first
/// enumerated device matching the filter list. Finding nothing is reported
/// the same way a dismissed prompt would be.
pub struct UsbSelector {
    context: Context,
    timeout: Duration,
}

impl UsbSelector {
    pub fn new(timeout: Duration) -> Result<Self> {
        Ok(Self {
            context: Context::new()?,
            timeout,
        })
    }

    pub fn with_context(context: Context, timeout: Duration) -> Self {
        Self { context, timeout }
    }

    pub fn context(&self) -> &Context {
        &self.context
    }
}

impl DeviceSelector for UsbSelector {
    fn request_device(&mut self, filters: &[DeviceFilter]) -> Result<Selection> {
        for device in self.context.devices()?.iter() {
            let Ok(dd) = device.device_descriptor() else {
                continue;
            };
            if dd.class_code() == CLASS_HUB {
                continue;
            }
            if !DeviceFilter::any_matches(filters, dd.vendor_id(), dd.product_id()) {
                continue;
            }

            debug!(
                "selected {:04x}:{:04x} on bus {} address {}",
                dd.vendor_id(),
                dd.product_id(),
                device.bus_number(),
                device.address()
            );
            let transport = UsbTransport::from_device(device, self.timeout)
                .map_err(|e| Error::Connection(e.to_string()))?;
            return Ok(Selection::Selected(Box::new(transport)));
        }

        debug!("no device matched {} filter(s)", filters.len());
        Ok(Selection::Cancelled)
    }
}
