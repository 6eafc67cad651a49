#![cfg(feature = "usb")]

#[path = "common.rs"]
mod common;

use anyhow::{Context, Result};
use serial_test::serial;

// These tests need a real controller. They are `#[ignore]` so CI does not
// attempt them. Run manually with:
//
// MIDICFG_VID=1209 MIDICFG_PID=c0de cargo test -p midicfg --test hardware --features usb -- --ignored

#[test]
#[ignore]
#[serial]
fn resolve_vendor_interface() -> Result<()> {
    if let Some(session) = common::connect_controller()? {
        assert!(session.binding().is_some());
        session.disconnect()?;
    }
    Ok(())
}

#[test]
#[ignore]
#[serial]
fn reconnect_after_disconnect() -> Result<()> {
    if let Some(first) = common::connect_controller()? {
        first.disconnect()?;
        let second = common::connect_controller()?.context("controller vanished between connects")?;
        assert!(second.is_connected());
    }
    Ok(())
}
