#![cfg(feature = "usb")]

//! Push settings to a connected controller and commit them.
//!
//! Usage:
//!   cargo run -p midicfg --example save_settings --features usb -- \
//!       <vid> <pid> <esb-channel> <cc-layer> <midi-channel> <button-mode>
//!
//! vid/pid are hex; the four settings accept decimal or 0x-prefixed hex.

use anyhow::{Context, Result, bail};
use midicfg::device::{Connection, RemovalRegistry, SessionBuilder, SessionOptions};
use midicfg::transport::usb::{RemovalWatcher, UsbSelector};
use midicfg::{DeviceFilter, SettingsRecord, utils};

fn parse_id(s: &str) -> Result<u16> {
    u16::from_str_radix(s.trim_start_matches("0x"), 16).with_context(|| format!("bad id '{}'", s))
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 6 {
        bail!("usage: save_settings <vid> <pid> <esb> <layer> <midi> <button>");
    }
    let filter = DeviceFilter::new(parse_id(&args[0])?, parse_id(&args[1])?);

    let mut values = [0u8; 4];
    for (slot, raw) in values.iter_mut().zip(&args[2..]) {
        *slot = utils::parse_byte(raw).map_err(anyhow::Error::msg)?;
    }
    let record = SettingsRecord::new(values[0], values[1], values[2], values[3])
        .context("settings out of range")?;

    let timeout = SessionOptions::default().transfer_timeout();
    let mut selector = UsbSelector::new(timeout).context("failed to open libusb context")?;
    let registry = RemovalRegistry::new();
    // Hotplug is optional; without it removal shows up as a transfer failure.
    let _watcher = match RemovalWatcher::start(selector.context(), registry.clone()) {
        Ok(w) => Some(w),
        Err(e) => {
            println!("removal notifications unavailable: {}", e);
            None
        }
    };

    let connection = SessionBuilder::new()
        .with_registry(registry)
        .connect(&mut selector, &[filter])
        .context("connect failed")?;
    let mut session = match connection {
        Connection::Connected(session) => session,
        Connection::Cancelled => {
            println!("No matching device selected.");
            return Ok(());
        }
    };

    if let Some(binding) = session.binding() {
        println!(
            "Connected to {}: interface {} endpoint {}",
            session.device_id(),
            binding.interface(),
            binding.endpoint()
        );
    }

    match session.save_settings(&record) {
        Ok(ack) => println!("Saved ({} packets); settings committed to flash.", ack.packets),
        Err(e) => println!("Save failed, nothing was committed: {}", e),
    }

    session.disconnect().context("disconnect failed")?;
    Ok(())
}
