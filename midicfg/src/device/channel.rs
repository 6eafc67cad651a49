// midicfg-rs/midicfg/src/device/channel.rs

//! Command channel: 2-byte packets written to the resolved OUT endpoint.
//!
//! Fire-and-forget: nothing is read back. Success means the transport
//! accepted the transfer.

use log::{debug, info, warn};

use crate::constants::COMMAND_PACKET_LEN;
use crate::device::binding::ResolvedBinding;
use crate::protocol::{Command, CommandPacket, SettingsRecord};
use crate::transport::Transport;
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Send one `[opcode, operand]` packet. No retries.
pub fn send_command(
    transport: &mut dyn Transport,
    binding: &ResolvedBinding,
    opcode: u8,
    operand: u8,
) -> Result<()> {
    send_packet(transport, binding, CommandPacket::new(opcode, operand))
}

/// Typed variant of [`send_command`].
pub fn send(transport: &mut dyn Transport, binding: &ResolvedBinding, cmd: Command) -> Result<()> {
    send_packet(transport, binding, cmd.packet())
}

fn send_packet(
    transport: &mut dyn Transport,
    binding: &ResolvedBinding,
    packet: CommandPacket,
) -> Result<()> {
    // A removed device must not see a transfer attempt at all.
    binding.ensure_live()?;

    let bytes = packet.encode();
    debug!(
        "-> if{} ep{} [{}]",
        binding.interface(),
        binding.endpoint(),
        bytes_to_hex_spaced(&bytes)
    );

    let written = transport
        .transfer_out(binding.endpoint(), &bytes)
        .map_err(|e| Error::Transfer {
            opcode: packet.opcode(),
            source: Box::new(e),
        })?;

    if written != COMMAND_PACKET_LEN {
        return Err(Error::Transfer {
            opcode: packet.opcode(),
            source: Box::new(Error::ShortTransfer {
                expected: COMMAND_PACKET_LEN,
                actual: written,
            }),
        });
    }
    Ok(())
}

/// Push all four settings, then commit. Returns the number of packets sent.
///
/// Each step completes before the next starts. The first failure aborts the
/// sequence, so the commit is only sent after all four settings went out.
pub fn save_settings(
    transport: &mut dyn Transport,
    binding: &ResolvedBinding,
    record: &SettingsRecord,
) -> Result<usize> {
    let sequence = record.save_sequence();

    for (step, cmd) in sequence.iter().enumerate() {
        if let Err(e) = send(transport, binding, *cmd) {
            if !cmd.opcode().is_commit() {
                warn!(
                    "save aborted at step {} ({}), commit withheld: {}",
                    step + 1,
                    cmd.opcode().name(),
                    e
                );
            }
            return Err(e);
        }
    }

    info!(
        "settings committed on {} (esb={} layer={} midi={} button={})",
        binding.device_id(),
        record.esb_channel,
        record.cc_layer,
        record.midi_channel,
        record.button_mode
    );
    Ok(sequence.len())
}
