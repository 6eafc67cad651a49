//! Test support helpers intended for use by unit and integration tests.
//!
//! These build mock composite devices shaped like the real controller: an
//! audio-control interface and a MIDI streaming interface owned by the host
//! class driver, plus the vendor interface carrying the command endpoint.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::Result;
use crate::device::Presence;
use crate::transport::mock::MockTransport;
use crate::transport::{ClaimOutcome, Transport};
use crate::types::{
    DeviceId, EndpointAddress, EndpointDescriptor, InterfaceDescriptor, InterfaceNumber,
    TransferKind,
};

const CLASS_AUDIO: u8 = 0x01;
const CLASS_VENDOR: u8 = 0xff;

/// Audio control interface: no bulk endpoints, one interrupt IN.
#[doc(hidden)]
pub fn audio_control_interface(number: u8) -> InterfaceDescriptor {
    InterfaceDescriptor::new(
        InterfaceNumber::new(number),
        CLASS_AUDIO,
        vec![EndpointDescriptor::new(
            EndpointAddress::r#in(7),
            TransferKind::Interrupt,
            8,
        )],
    )
}

/// MIDI streaming interface: bulk OUT 1 / IN 1. Has an OUT endpoint, so only
/// the refused claim keeps the resolver off it.
#[doc(hidden)]
pub fn midi_streaming_interface(number: u8) -> InterfaceDescriptor {
    InterfaceDescriptor::new(
        InterfaceNumber::new(number),
        CLASS_AUDIO,
        vec![
            EndpointDescriptor::new(EndpointAddress::out(1), TransferKind::Bulk, 64),
            EndpointDescriptor::new(EndpointAddress::r#in(1), TransferKind::Bulk, 64),
        ],
    )
}

/// Vendor interface with a bulk IN and a bulk OUT on `endpoint`.
#[doc(hidden)]
pub fn vendor_interface(number: u8, endpoint: u8) -> InterfaceDescriptor {
    InterfaceDescriptor::new(
        InterfaceNumber::new(number),
        CLASS_VENDOR,
        vec![
            EndpointDescriptor::new(EndpointAddress::r#in(endpoint), TransferKind::Bulk, 64),
            EndpointDescriptor::new(EndpointAddress::out(endpoint), TransferKind::Bulk, 64),
        ],
    )
}

/// Interfaces 0 (audio control) and 1 (MIDI) owned by the class driver,
/// vendor interface 2 with OUT endpoint 2.
#[doc(hidden)]
pub fn composite_midi_device() -> MockTransport {
    let mut mock = MockTransport::new(vec![
        audio_control_interface(0),
        midi_streaming_interface(1),
        vendor_interface(2, 2),
    ]);
    mock.set_class_owned(0);
    mock.set_class_owned(1);
    mock
}

#[doc(hidden)]
pub fn presence_for(transport: &dyn Transport) -> Presence {
    Presence::new(transport.device_id())
}

#[doc(hidden)]
pub fn shared(mock: MockTransport) -> Rc<RefCell<MockTransport>> {
    Rc::new(RefCell::new(mock))
}

/// Transport wrapper that delegates into `Rc<RefCell<MockTransport>>` so a
/// test can inspect the mock after a Session took ownership.
#[doc(hidden)]
pub struct SharedTransport {
    inner: Rc<RefCell<MockTransport>>,
}

impl SharedTransport {
    pub fn new(inner: Rc<RefCell<MockTransport>>) -> Self {
        Self { inner }
    }
}

impl Transport for SharedTransport {
    fn device_id(&self) -> DeviceId {
        self.inner.borrow().device_id()
    }

    fn active_configuration(&mut self) -> Result<Option<u8>> {
        self.inner.borrow_mut().active_configuration()
    }

    fn select_configuration(&mut self, configuration: u8) -> Result<()> {
        self.inner.borrow_mut().select_configuration(configuration)
    }

    fn interfaces(&mut self) -> Result<Vec<InterfaceDescriptor>> {
        self.inner.borrow_mut().interfaces()
    }

    fn claim_interface(&mut self, interface: InterfaceNumber) -> Result<ClaimOutcome> {
        self.inner.borrow_mut().claim_interface(interface)
    }

    fn release_interface(&mut self, interface: InterfaceNumber) -> Result<()> {
        self.inner.borrow_mut().release_interface(interface)
    }

    fn transfer_out(&mut self, endpoint: EndpointAddress, data: &[u8]) -> Result<usize> {
        self.inner.borrow_mut().transfer_out(endpoint, data)
    }

    fn set_transfer_timeout(&mut self, timeout: Duration) {
        self.inner.borrow_mut().set_transfer_timeout(timeout)
    }
}
