#[path = "../common/mod.rs"]
mod common;

use midicfg::transport::{ClaimOutcome, MockEvent, Transport};
use midicfg::types::{EndpointAddress, InterfaceNumber};

#[test]
fn composite_device_refuses_class_interfaces() {
    let mut m = common::composite_midi_device();
    assert_eq!(
        m.claim_interface(InterfaceNumber::new(0)).unwrap(),
        ClaimOutcome::AlreadyOwned
    );
    assert_eq!(
        m.claim_interface(InterfaceNumber::new(1)).unwrap(),
        ClaimOutcome::AlreadyOwned
    );
    assert_eq!(
        m.claim_interface(InterfaceNumber::new(2)).unwrap(),
        ClaimOutcome::Claimed
    );
}

#[test]
fn events_are_recorded_in_order() {
    let mut m = common::composite_midi_device();
    m.claim_interface(InterfaceNumber::new(2)).unwrap();
    m.transfer_out(EndpointAddress::out(2), &[0x02, 0x01]).unwrap();
    m.release_interface(InterfaceNumber::new(2)).unwrap();

    assert_eq!(
        m.events,
        vec![
            MockEvent::Claim(InterfaceNumber::new(2), ClaimOutcome::Claimed),
            MockEvent::Transfer(EndpointAddress::out(2), vec![0x02, 0x01]),
            MockEvent::Release(InterfaceNumber::new(2)),
        ]
    );
}

#[test]
fn unplugged_device_fails_every_call() {
    let mut m = common::composite_midi_device();
    m.unplugged = true;
    assert!(m.interfaces().is_err());
    assert!(m.claim_interface(InterfaceNumber::new(2)).is_err());
    assert!(m.transfer_out(EndpointAddress::out(2), &[0xAA, 0x00]).is_err());
}
