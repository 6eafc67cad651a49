// midicfg-rs/midicfg/src/protocol/opcode.rs

use crate::constants::{
    OP_SAVE_TO_FLASH, OP_SET_BUTTON_MODE, OP_SET_CC_LAYER, OP_SET_ESB_CHANNEL,
    OP_SET_MIDI_CHANNEL,
};
use crate::{Error, Result};

/// First byte of every command packet.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    SetEsbChannel = OP_SET_ESB_CHANNEL,
    SetCcLayer = OP_SET_CC_LAYER,
    SetMidiChannel = OP_SET_MIDI_CHANNEL,
    SetButtonMode = OP_SET_BUTTON_MODE,
    SaveToFlash = OP_SAVE_TO_FLASH,
}

impl Opcode {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// True for the opcode that persists state to non-volatile storage.
    pub fn is_commit(self) -> bool {
        self == Opcode::SaveToFlash
    }

    pub fn name(self) -> &'static str {
        match self {
            Opcode::SetEsbChannel => "set-esb-channel",
            Opcode::SetCcLayer => "set-cc-layer",
            Opcode::SetMidiChannel => "set-midi-channel",
            Opcode::SetButtonMode => "set-button-mode",
            Opcode::SaveToFlash => "save-to-flash",
        }
    }
}

impl TryFrom<u8> for Opcode {
    type Error = Error;

    fn try_from(raw: u8) -> Result<Self> {
        match raw {
            OP_SET_ESB_CHANNEL => Ok(Opcode::SetEsbChannel),
            OP_SET_CC_LAYER => Ok(Opcode::SetCcLayer),
            OP_SET_MIDI_CHANNEL => Ok(Opcode::SetMidiChannel),
            OP_SET_BUTTON_MODE => Ok(Opcode::SetButtonMode),
            OP_SAVE_TO_FLASH => Ok(Opcode::SaveToFlash),
            other => Err(Error::UnknownOpcode(other)),
        }
    }
}
