// midicfg-rs/midicfg/src/protocol/packet.rs

use crate::constants::{COMMAND_PACKET_LEN, COMMIT_SENTINEL};
use crate::protocol::Opcode;
use crate::{Error, Result};

/// Command packet helper.
/// Format: [Opcode(1)] [Operand(1)]
/// No framing, checksum or length prefix; the transfer boundary is the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandPacket {
    opcode: u8,
    operand: u8,
}

impl CommandPacket {
    /// Raw constructor. Opcodes outside the firmware table are allowed so
    /// callers can drive experimental firmware builds.
    pub const fn new(opcode: u8, operand: u8) -> Self {
        Self { opcode, operand }
    }

    pub fn from_opcode(opcode: Opcode, operand: u8) -> Self {
        Self::new(opcode.as_u8(), operand)
    }

    /// The commit packet: `[0xAA, 0x00]`.
    pub fn commit() -> Self {
        Self::from_opcode(Opcode::SaveToFlash, COMMIT_SENTINEL)
    }

    pub fn opcode(&self) -> u8 {
        self.opcode
    }

    pub fn operand(&self) -> u8 {
        self.operand
    }

    pub fn encode(&self) -> [u8; COMMAND_PACKET_LEN] {
        [self.opcode, self.operand]
    }

    /// Decode a captured packet. Used by diagnostics and test doubles that
    /// play the device side.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != COMMAND_PACKET_LEN {
            return Err(Error::InvalidLength {
                expected: COMMAND_PACKET_LEN,
                actual: bytes.len(),
            });
        }
        Ok(Self::new(bytes[0], bytes[1]))
    }
}
