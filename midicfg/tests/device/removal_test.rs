#[path = "../common/mod.rs"]
mod common;

use midicfg::device::{RemovalRegistry, SessionBuilder};
use midicfg::protocol::Command;
use midicfg::types::{DeviceId, EsbChannel};
use midicfg::Error;

#[test]
fn removal_notification_makes_binding_fail_fast() {
    let inner = common::shared(common::composite_midi_device());
    let registry = RemovalRegistry::new();
    let mut session = SessionBuilder::new()
        .with_transport(Box::new(common::SharedTransport::new(inner.clone())))
        .with_registry(registry.clone())
        .open()
        .unwrap();

    assert_eq!(registry.notify_removed(&DeviceId::new("mock:0")), 1);

    let err = session
        .save_settings(&common::fixtures::sample_record())
        .unwrap_err();
    match err {
        Error::DeviceRemoved(id) => assert_eq!(id.as_str(), "mock:0"),
        other => panic!("expected DeviceRemoved, got: {:?}", other),
    }
    assert!(matches!(
        session.send_command(Command::SetEsbChannel(EsbChannel::new(1))),
        Err(Error::DeviceRemoved(_))
    ));
    assert_eq!(inner.borrow().transfer_attempts(), 0);
}

#[test]
fn removal_of_other_device_leaves_session_usable() {
    let inner = common::shared(common::composite_midi_device());
    let registry = RemovalRegistry::new();
    let mut session = SessionBuilder::new()
        .with_transport(Box::new(common::SharedTransport::new(inner.clone())))
        .with_registry(registry.clone())
        .open()
        .unwrap();

    assert_eq!(registry.notify_removed(&DeviceId::new("usb:9-9")), 0);
    let ack = session
        .save_settings(&common::fixtures::sample_record())
        .unwrap();
    assert_eq!(ack.packets, 5);
}

#[test]
fn transfer_failing_mid_removal_is_a_transfer_failure() {
    // The transfer fails first (device yanked), the notification lands after.
    let inner = common::shared(common::composite_midi_device());
    let mut session = SessionBuilder::new()
        .with_transport(Box::new(common::SharedTransport::new(inner.clone())))
        .open()
        .unwrap();
    let handle = session.removal_handle();

    inner.borrow_mut().unplugged = true;
    let err = session
        .save_settings(&common::fixtures::sample_record())
        .unwrap_err();
    assert!(matches!(err, Error::Transfer { opcode: 0x01, .. }));

    handle.mark_removed();
    assert!(matches!(
        session.save_settings(&common::fixtures::sample_record()),
        Err(Error::DeviceRemoved(_))
    ));
    // the removed session releases nothing on drop
    drop(session);
    assert!(inner.borrow().release_log().is_empty());
}

#[test]
fn reconnect_cycles_do_not_accumulate_registrations() {
    let inner = common::shared(common::composite_midi_device());
    let registry = RemovalRegistry::new();
    for _ in 0..50 {
        let session = SessionBuilder::new()
            .with_transport(Box::new(common::SharedTransport::new(inner.clone())))
            .with_registry(registry.clone())
            .open()
            .unwrap();
        session.disconnect().unwrap();
    }
    assert_eq!(registry.len(), 0);

    // a later unplug reaches only the live session
    let _live = SessionBuilder::new()
        .with_transport(Box::new(common::SharedTransport::new(inner.clone())))
        .with_registry(registry.clone())
        .open()
        .unwrap();
    assert_eq!(registry.notify_removed(&DeviceId::new("mock:0")), 1);
}

#[test]
fn dropped_sessions_leave_the_registry() {
    let inner = common::shared(common::composite_midi_device());
    let registry = RemovalRegistry::new();
    for _ in 0..3 {
        let _session = SessionBuilder::new()
            .with_transport(Box::new(common::SharedTransport::new(inner.clone())))
            .with_registry(registry.clone())
            .open()
            .unwrap();
    }
    assert!(registry.is_empty());
    assert!(inner.borrow().claimed.is_empty());
}
