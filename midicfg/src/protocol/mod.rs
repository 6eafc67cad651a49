// midicfg-rs/midicfg/src/protocol/mod.rs

pub mod commands;
pub mod opcode;
pub mod packet;
pub mod settings;

pub use commands::Command;
pub use opcode::Opcode;
pub use packet::CommandPacket;
pub use settings::SettingsRecord;
