// midicfg-rs/midicfg/src/protocol/settings.rs

use crate::constants::SAVE_SEQUENCE_LEN;
use crate::protocol::Command;
use crate::types::{ButtonMode, CcLayer, EsbChannel, MidiChannel};
use crate::Result;

/// The four settings pushed by a save. Fields are independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SettingsRecord {
    pub esb_channel: EsbChannel,
    pub cc_layer: CcLayer,
    pub midi_channel: MidiChannel,
    pub button_mode: ButtonMode,
}

impl SettingsRecord {
    /// Build a record from raw values, validating each field on its own.
    pub fn new(esb_channel: u8, cc_layer: u8, midi_channel: u8, button_mode: u8) -> Result<Self> {
        Ok(Self {
            esb_channel: EsbChannel::new(esb_channel),
            cc_layer: CcLayer::new(cc_layer),
            midi_channel: MidiChannel::try_from(midi_channel)?,
            button_mode: ButtonMode::new(button_mode),
        })
    }

    /// The commands a save puts on the wire, in protocol order. The commit
    /// is always last so a partial apply is never persisted.
    pub fn save_sequence(&self) -> [Command; SAVE_SEQUENCE_LEN] {
        [
            Command::SetEsbChannel(self.esb_channel),
            Command::SetCcLayer(self.cc_layer),
            Command::SetMidiChannel(self.midi_channel),
            Command::SetButtonMode(self.button_mode),
            Command::SaveToFlash,
        ]
    }
}
