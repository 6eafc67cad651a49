// midicfg-rs/midicfg/src/constants.rs
//! Wire constants shared by the protocol and device layers

/// Opcode: set the ESB radio channel
pub const OP_SET_ESB_CHANNEL: u8 = 0x01;

/// Opcode: set the CC layer
pub const OP_SET_CC_LAYER: u8 = 0x02;

/// Opcode: set the MIDI channel (operand 0-15)
pub const OP_SET_MIDI_CHANNEL: u8 = 0x03;

/// Opcode: set the button mode
pub const OP_SET_BUTTON_MODE: u8 = 0x04;

/// Opcode: persist the applied settings to flash
pub const OP_SAVE_TO_FLASH: u8 = 0xAA;

/// Operand sent with the commit opcode. The firmware ignores it.
pub const COMMIT_SENTINEL: u8 = 0x00;

/// Every command packet is exactly opcode + operand.
pub const COMMAND_PACKET_LEN: usize = 2;

/// Highest legal MIDI channel (channels are zero based on the wire)
pub const MIDI_CHANNEL_MAX: u8 = 15;

/// Configuration value selected when the device reports none active
pub const DEFAULT_CONFIGURATION: u8 = 1;

/// Number of packets a full settings save puts on the wire
pub const SAVE_SEQUENCE_LEN: usize = 5;
