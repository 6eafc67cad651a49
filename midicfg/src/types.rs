// midicfg-rs/midicfg/src/types.rs

use crate::Error;
use derive_more::Display;
use std::convert::TryFrom;

/// Interface number within the active configuration
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display(fmt = "{}", _0)]
pub struct InterfaceNumber(u8);

impl InterfaceNumber {
    pub const fn new(number: u8) -> Self {
        Self(number)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

/// Endpoint direction as seen from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointDirection {
    In,
    Out,
}

/// Endpoint address - Newtype Pattern (bit 7 = direction, bits 0-3 = number)
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[display(fmt = "{:#04x}", _0)]
pub struct EndpointAddress(u8);

impl EndpointAddress {
    const DIRECTION_IN: u8 = 0x80;

    pub const fn from_raw(address: u8) -> Self {
        Self(address)
    }

    /// Build the OUT address for an endpoint number.
    pub const fn out(number: u8) -> Self {
        Self(number & 0x0f)
    }

    /// Build the IN address for an endpoint number.
    pub const fn r#in(number: u8) -> Self {
        Self((number & 0x0f) | Self::DIRECTION_IN)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    pub fn number(&self) -> u8 {
        self.0 & 0x0f
    }

    pub fn direction(&self) -> EndpointDirection {
        if self.0 & Self::DIRECTION_IN != 0 {
            EndpointDirection::In
        } else {
            EndpointDirection::Out
        }
    }
}

/// Transfer type of an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransferKind {
    Control,
    Isochronous,
    Bulk,
    Interrupt,
}

/// Endpoint descriptor (read-only, enumerated from the device)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointDescriptor {
    address: EndpointAddress,
    kind: TransferKind,
    max_packet_size: u16,
}

impl EndpointDescriptor {
    pub fn new(address: EndpointAddress, kind: TransferKind, max_packet_size: u16) -> Self {
        Self {
            address,
            kind,
            max_packet_size,
        }
    }

    pub fn address(&self) -> EndpointAddress {
        self.address
    }

    pub fn direction(&self) -> EndpointDirection {
        self.address.direction()
    }

    pub fn number(&self) -> u8 {
        self.address.number()
    }

    pub fn kind(&self) -> TransferKind {
        self.kind
    }

    pub fn max_packet_size(&self) -> u16 {
        self.max_packet_size
    }
}

/// Interface descriptor of the active alternate setting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDescriptor {
    number: InterfaceNumber,
    class_code: u8,
    endpoints: Vec<EndpointDescriptor>,
}

impl InterfaceDescriptor {
    pub fn new(number: InterfaceNumber, class_code: u8, endpoints: Vec<EndpointDescriptor>) -> Self {
        Self {
            number,
            class_code,
            endpoints,
        }
    }

    pub fn number(&self) -> InterfaceNumber {
        self.number
    }

    pub fn class_code(&self) -> u8 {
        self.class_code
    }

    pub fn endpoints(&self) -> &[EndpointDescriptor] {
        &self.endpoints
    }

    /// First endpoint accepting host-to-device transfers, in descriptor order.
    pub fn first_out_endpoint(&self) -> Option<&EndpointDescriptor> {
        self.endpoints
            .iter()
            .find(|ep| ep.direction() == EndpointDirection::Out)
    }

    pub fn owns_endpoint(&self, address: EndpointAddress) -> bool {
        self.endpoints.iter().any(|ep| ep.address() == address)
    }
}

/// Stable identifier of one physical connection, used to key removal
/// notifications.
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash)]
#[display(fmt = "{}", _0)]
pub struct DeviceId(String);

impl DeviceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Location based id: `usb:<bus>-<port>.<port>...`
    pub fn from_location(bus: u8, ports: &[u8]) -> Self {
        let path = ports
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(".");
        Self(format!("usb:{}-{}", bus, path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// (vendor id, product id) pair used to narrow device selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceFilter {
    pub vendor_id: u16,
    pub product_id: u16,
}

impl DeviceFilter {
    pub const fn new(vendor_id: u16, product_id: u16) -> Self {
        Self {
            vendor_id,
            product_id,
        }
    }

    pub fn matches(&self, vendor_id: u16, product_id: u16) -> bool {
        self.vendor_id == vendor_id && self.product_id == product_id
    }

    /// An empty filter list matches everything.
    pub fn any_matches(filters: &[DeviceFilter], vendor_id: u16, product_id: u16) -> bool {
        filters.is_empty() || filters.iter().any(|f| f.matches(vendor_id, product_id))
    }
}

/// ESB radio channel. Range is defined by the firmware.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
#[display(fmt = "{}", _0)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EsbChannel(u8);

impl EsbChannel {
    pub const fn new(channel: u8) -> Self {
        Self(channel)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

/// CC layer selection
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
#[display(fmt = "{}", _0)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CcLayer(u8);

impl CcLayer {
    pub const fn new(layer: u8) -> Self {
        Self(layer)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

/// MIDI channel (0-15 on the wire)
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
#[display(fmt = "{}", _0)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct MidiChannel(u8);

impl MidiChannel {
    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for MidiChannel {
    type Error = Error;

    fn try_from(channel: u8) -> Result<Self, Self::Error> {
        if channel > crate::constants::MIDI_CHANNEL_MAX {
            return Err(Error::InvalidSetting {
                field: "midi_channel",
                value: channel,
            });
        }
        Ok(Self(channel))
    }
}

impl From<MidiChannel> for u8 {
    fn from(channel: MidiChannel) -> u8 {
        channel.0
    }
}

/// Button behaviour mode
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
#[display(fmt = "{}", _0)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ButtonMode(u8);

impl ButtonMode {
    pub const fn new(mode: u8) -> Self {
        Self(mode)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}
