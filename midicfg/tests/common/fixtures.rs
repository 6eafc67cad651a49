// fixtures.rs — commonly used settings and expected wire captures

use midicfg::protocol::SettingsRecord;
use midicfg::transport::mock::MockTransport;
use midicfg::types::InterfaceDescriptor;

use midicfg::test_support::{audio_control_interface, midi_streaming_interface, vendor_interface};

/// esb=3 layer=1 midi=9 button=2
pub fn sample_record() -> SettingsRecord {
    SettingsRecord::new(3, 1, 9, 2).unwrap()
}

/// What `sample_record` must look like on the wire.
pub fn sample_wire() -> Vec<Vec<u8>> {
    vec![
        vec![0x01, 3],
        vec![0x02, 1],
        vec![0x03, 9],
        vec![0x04, 2],
        vec![0xAA, 0x00],
    ]
}

/// Layout of the interface at one position of a generated device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Held by the class driver (claim refused), with an OUT endpoint
    Owned,
    /// Claimable, but IN endpoints only
    InOnly,
    /// Claimable with an OUT endpoint
    Vendor,
}

/// Build a mock where interface `i` follows `slots[i]`.
pub fn device_from_slots(slots: &[Slot]) -> MockTransport {
    let interfaces: Vec<InterfaceDescriptor> = slots
        .iter()
        .enumerate()
        .map(|(i, slot)| match slot {
            Slot::Owned => midi_streaming_interface(i as u8),
            Slot::InOnly => audio_control_interface(i as u8),
            Slot::Vendor => vendor_interface(i as u8, 2),
        })
        .collect();
    let mut mock = MockTransport::new(interfaces);
    for (i, slot) in slots.iter().enumerate() {
        if *slot == Slot::Owned {
            mock.set_class_owned(i as u8);
        }
    }
    mock
}
