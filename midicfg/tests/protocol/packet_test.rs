use midicfg::Error;
use midicfg::protocol::{CommandPacket, Opcode};

#[test]
fn decode_captured_commit() {
    let p = CommandPacket::decode(&[0xAA, 0x00]).unwrap();
    assert_eq!(Opcode::try_from(p.opcode()).unwrap(), Opcode::SaveToFlash);
    assert_eq!(p, CommandPacket::commit());
}

#[test]
fn decode_rejects_framed_input() {
    assert!(matches!(
        CommandPacket::decode(&[0x00, 0xAA, 0x00]),
        Err(Error::InvalidLength {
            expected: 2,
            actual: 3
        })
    ));
}
