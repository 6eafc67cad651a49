// midicfg-rs/midicfg/src/transport/traits.rs

use std::time::Duration;

use crate::Result;
use crate::types::{DeviceId, EndpointAddress, InterfaceDescriptor, InterfaceNumber};

/// Outcome of an interface claim attempt.
///
/// An interface held by a host class driver (e.g. MIDI) is a routine branch
/// during probing, not an error, so it is reported as a value. Hard transport
/// failures (device gone, I/O error) are still `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimOutcome {
    Claimed,
    AlreadyOwned,
}

/// Transport trait abstracts the host USB subsystem away from the resolver
/// and command channel.
pub trait Transport {
    /// Stable identifier of the underlying physical connection
    fn device_id(&self) -> DeviceId;

    /// Active configuration value, or `None` if the device is unconfigured
    fn active_configuration(&mut self) -> Result<Option<u8>>;

    /// Select a configuration by its value
    fn select_configuration(&mut self, configuration: u8) -> Result<()>;

    /// Interface descriptors of the active configuration (active alternate
    /// setting only)
    fn interfaces(&mut self) -> Result<Vec<InterfaceDescriptor>>;

    /// Try to take exclusive ownership of an interface
    fn claim_interface(&mut self, interface: InterfaceNumber) -> Result<ClaimOutcome>;

    /// Return a previously claimed interface
    fn release_interface(&mut self, interface: InterfaceNumber) -> Result<()>;

    /// Single blocking host-to-device transfer. Returns bytes written.
    /// Implementations must not retry.
    fn transfer_out(&mut self, endpoint: EndpointAddress, data: &[u8]) -> Result<usize>;

    /// Override the transfer timeout. Transports without one ignore it.
    fn set_transfer_timeout(&mut self, _timeout: Duration) {}
}
