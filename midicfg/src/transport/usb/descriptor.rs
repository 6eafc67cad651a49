// midicfg-rs/midicfg/src/transport/usb/descriptor.rs

use rusb::{ConfigDescriptor, Device, TransferType, UsbContext};

use crate::types::{
    DeviceId, EndpointAddress, EndpointDescriptor, InterfaceDescriptor, InterfaceNumber,
    TransferKind,
};

/// Convert the configuration descriptor into interface descriptors, one per
/// interface, using its first (default) alternate setting. The result is
/// sorted by interface number.
pub fn interfaces_of(config: &ConfigDescriptor) -> Vec<InterfaceDescriptor> {
    let mut out = Vec::new();

    for interface in config.interfaces() {
        // rusb cannot query the currently selected alternate setting; nothing
        // here ever changes it, so the default setting is the active one.
        let Some(interface_desc) = interface.descriptors().next() else {
            continue;
        };

        let endpoints = interface_desc
            .endpoint_descriptors()
            .map(|ep| {
                EndpointDescriptor::new(
                    EndpointAddress::from_raw(ep.address()),
                    transfer_kind(ep.transfer_type()),
                    ep.max_packet_size(),
                )
            })
            .collect();

        out.push(InterfaceDescriptor::new(
            InterfaceNumber::new(interface_desc.interface_number()),
            interface_desc.class_code(),
            endpoints,
        ));
    }

    out.sort_by_key(|i| i.number());
    out
}

pub fn transfer_kind(t: TransferType) -> TransferKind {
    match t {
        TransferType::Control => TransferKind::Control,
        TransferType::Isochronous => TransferKind::Isochronous,
        TransferType::Bulk => TransferKind::Bulk,
        TransferType::Interrupt => TransferKind::Interrupt,
    }
}

/// Location id of a device. Readable even after the device has left the
/// bus, which is when removal notifications need it.
pub fn location_id<T: UsbContext>(device: &Device<T>) -> DeviceId {
    let ports = device.port_numbers().unwrap_or_default();
    DeviceId::from_location(device.bus_number(), &ports)
}
