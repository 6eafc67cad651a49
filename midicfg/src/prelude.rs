// midicfg-rs/midicfg/src/prelude.rs

pub use crate::device::{
    Ack, Connection, DeviceSelector, Presence, RemovalRegistry, ResolvedBinding, Selection,
    Session, SessionBuilder, SessionOptions,
};
pub use crate::protocol::{Command, CommandPacket, Opcode, SettingsRecord};
pub use crate::transport::{ClaimOutcome, Transport};
pub use crate::{
    ButtonMode, CcLayer, DeviceFilter, DeviceId, EndpointAddress, Error, EsbChannel,
    InterfaceNumber, MidiChannel, Result,
};

pub use crate::utils::{bytes_to_hex_spaced, parse_byte};
