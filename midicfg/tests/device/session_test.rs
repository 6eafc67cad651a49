#[path = "../common/mod.rs"]
mod common;

use midicfg::device::{Connection, Session, SessionOptions, StaticSelector};
use midicfg::transport::MockEvent;
use midicfg::types::{DeviceFilter, InterfaceNumber};

#[test]
fn connect_save_disconnect() {
    let _ = env_logger::builder().is_test(true).try_init();

    let inner = common::shared(common::composite_midi_device());
    inner.borrow_mut().set_unconfigured();
    let mut selector = StaticSelector::new(Box::new(common::SharedTransport::new(inner.clone())));

    let connection = Session::connect(
        &mut selector,
        &[DeviceFilter::new(0x1209, 0xc0de)],
        SessionOptions::default(),
    )
    .unwrap();
    let mut session = match connection {
        Connection::Connected(s) => s,
        Connection::Cancelled => panic!("selector returned a device"),
    };

    let ack = session
        .save_settings(&common::fixtures::sample_record())
        .unwrap();
    assert_eq!(ack.packets, 5);
    session.disconnect().unwrap();

    let mock = inner.borrow();
    assert_eq!(mock.events[0], MockEvent::SelectConfiguration(1));
    assert_eq!(mock.sent_payloads(), common::fixtures::sample_wire());
    assert_eq!(mock.release_log(), vec![InterfaceNumber::new(2)]);
    assert!(mock.claimed.is_empty());
}

#[test]
fn reconnect_after_disconnect_gets_fresh_binding() {
    let inner = common::shared(common::composite_midi_device());

    let first = Session::open(
        Box::new(common::SharedTransport::new(inner.clone())),
        SessionOptions::default(),
    )
    .unwrap();
    first.disconnect().unwrap();

    let mut second = Session::open(
        Box::new(common::SharedTransport::new(inner.clone())),
        SessionOptions::default(),
    )
    .unwrap();
    assert_eq!(
        second.binding().unwrap().interface(),
        InterfaceNumber::new(2)
    );
    second
        .save_settings(&common::fixtures::sample_record())
        .unwrap();
    assert_eq!(inner.borrow().sent.len(), 5);
}

#[test]
fn no_usable_interface_fails_connect() {
    let mut mock = common::composite_midi_device();
    mock.interfaces.truncate(2);
    let mut selector = StaticSelector::new(Box::new(mock));
    let err = Session::connect(&mut selector, &[], SessionOptions::default()).unwrap_err();
    assert!(matches!(err, midicfg::Error::NoUsableInterface { probed: 2 }));
}
