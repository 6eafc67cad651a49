#![cfg(feature = "usb")]

//! Shared helpers for tests that need a real controller attached.
//!
//! Set `MIDICFG_VID` / `MIDICFG_PID` (hex) to point at the device. Without
//! them, or without a matching device, helpers return `Ok(None)` so the
//! tests pass on machines with nothing plugged in.

use midicfg::device::{Connection, Session, SessionOptions};
use midicfg::transport::usb::UsbSelector;
use midicfg::types::DeviceFilter;
use midicfg::Result;

pub fn filter_from_env() -> Option<DeviceFilter> {
    let vid = std::env::var("MIDICFG_VID").ok()?;
    let pid = std::env::var("MIDICFG_PID").ok()?;
    let vid = u16::from_str_radix(vid.trim_start_matches("0x"), 16).ok()?;
    let pid = u16::from_str_radix(pid.trim_start_matches("0x"), 16).ok()?;
    Some(DeviceFilter::new(vid, pid))
}

pub fn connect_controller() -> Result<Option<Session>> {
    let Some(filter) = filter_from_env() else {
        return Ok(None);
    };
    let mut selector = UsbSelector::new(SessionOptions::default().transfer_timeout())?;
    match Session::connect(&mut selector, &[filter], SessionOptions::default())? {
        Connection::Connected(session) => Ok(Some(session)),
        Connection::Cancelled => Ok(None),
    }
}
