// midicfg-rs/midicfg/src/error.rs

use crate::types::DeviceId;
use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("device not found")]
    DeviceNotFound,

    // rusb は `usb` feature でのみ有効
    #[cfg(feature = "usb")]
    #[error("usb error: {0}")]
    Usb(#[from] rusb::Error),

    /// Transport failure reported by a non-libusb backend (mock, bridges).
    #[error("usb backend error: {0}")]
    Backend(String),

    /// Open/configure failure, carrying the transport's own message.
    #[error("connection failed: {0}")]
    Connection(String),

    #[error("no claimable interface with an OUT endpoint ({probed} probed)")]
    NoUsableInterface { probed: usize },

    #[error("transfer of opcode {opcode:#04x} failed: {source}")]
    Transfer {
        opcode: u8,
        #[source]
        source: Box<Error>,
    },

    #[error("short transfer: expected {expected} bytes, wrote {actual}")]
    ShortTransfer { expected: usize, actual: usize },

    #[error("device {0} was removed; reconnect before sending")]
    DeviceRemoved(DeviceId),

    #[error("no interface binding resolved for this session")]
    NotResolved,

    #[error("invalid value {value} for {field}")]
    InvalidSetting { field: &'static str, value: u8 },

    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("unknown opcode {0:#04x}")]
    UnknownOpcode(u8),
}

impl Error {
    /// The opcode whose transfer failed, if this is a transfer failure.
    pub fn failed_opcode(&self) -> Option<u8> {
        match self {
            Error::Transfer { opcode, .. } => Some(*opcode),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
