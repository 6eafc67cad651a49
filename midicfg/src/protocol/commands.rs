// midicfg-rs/midicfg/src/protocol/commands.rs

use crate::constants::COMMIT_SENTINEL;
use crate::protocol::{CommandPacket, Opcode};
use crate::types::{ButtonMode, CcLayer, EsbChannel, MidiChannel};

/// High-level Command enum. One variant per opcode in the firmware table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SetEsbChannel(EsbChannel),
    SetCcLayer(CcLayer),
    SetMidiChannel(MidiChannel),
    SetButtonMode(ButtonMode),
    /// Persist the currently applied settings. Must be sent last.
    SaveToFlash,
}

impl Command {
    pub fn opcode(&self) -> Opcode {
        match self {
            Self::SetEsbChannel(_) => Opcode::SetEsbChannel,
            Self::SetCcLayer(_) => Opcode::SetCcLayer,
            Self::SetMidiChannel(_) => Opcode::SetMidiChannel,
            Self::SetButtonMode(_) => Opcode::SetButtonMode,
            Self::SaveToFlash => Opcode::SaveToFlash,
        }
    }

    pub fn operand(&self) -> u8 {
        match self {
            Self::SetEsbChannel(ch) => ch.as_u8(),
            Self::SetCcLayer(layer) => layer.as_u8(),
            Self::SetMidiChannel(ch) => ch.as_u8(),
            Self::SetButtonMode(mode) => mode.as_u8(),
            Self::SaveToFlash => COMMIT_SENTINEL,
        }
    }

    pub fn packet(&self) -> CommandPacket {
        CommandPacket::from_opcode(self.opcode(), self.operand())
    }

    /// Encode the command into its 2-byte wire form.
    pub fn encode(&self) -> [u8; 2] {
        self.packet().encode()
    }
}
