#[path = "../common/mod.rs"]
mod common;

use midicfg::protocol::{Command, Opcode};
use midicfg::types::{ButtonMode, EsbChannel};

#[test]
fn save_sequence_encodes_to_expected_wire() {
    let record = common::fixtures::sample_record();
    let wire: Vec<Vec<u8>> = record
        .save_sequence()
        .iter()
        .map(|c| c.encode().to_vec())
        .collect();
    assert_eq!(wire, common::fixtures::sample_wire());
}

#[test]
fn single_commands_carry_their_opcode() {
    let esb = Command::SetEsbChannel(EsbChannel::new(76));
    assert_eq!(esb.opcode(), Opcode::SetEsbChannel);
    assert_eq!(esb.encode(), [0x01, 76]);

    let mode = Command::SetButtonMode(ButtonMode::new(0));
    assert_eq!(mode.packet().opcode(), 0x04);
    assert_eq!(Command::SaveToFlash.operand(), 0x00);
}
