// midicfg-rs/midicfg/src/device/builder.rs

use std::time::Duration;

use crate::constants::DEFAULT_CONFIGURATION;
use crate::device::presence::RemovalRegistry;
use crate::device::resolver::{FixedBinding, ResolverOptions};
use crate::device::selector::DeviceSelector;
use crate::device::session::{Connection, Session};
use crate::transport::Transport;
use crate::types::DeviceFilter;
use crate::{Error, Result};

/// Transfer timeout used unless the caller sets one. The protocol defines
/// none of its own.
pub const DEFAULT_TRANSFER_TIMEOUT_MS: u64 = 1000;

/// Runtime knobs for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionOptions {
    /// Configuration selected when the device has none active
    pub configuration: u8,
    pub transfer_timeout_ms: u64,
    pub resolver: ResolverOptions,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            configuration: DEFAULT_CONFIGURATION,
            transfer_timeout_ms: DEFAULT_TRANSFER_TIMEOUT_MS,
            resolver: ResolverOptions::default(),
        }
    }
}

impl SessionOptions {
    pub fn transfer_timeout(&self) -> Duration {
        Duration::from_millis(self.transfer_timeout_ms)
    }
}

/// Helper to construct a Session with optional configuration.
#[derive(Default)]
pub struct SessionBuilder {
    transport: Option<Box<dyn Transport>>,
    options: SessionOptions,
    registry: Option<RemovalRegistry>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-opened transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_options(mut self, options: SessionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn configuration(mut self, configuration: u8) -> Self {
        self.options.configuration = configuration;
        self
    }

    pub fn transfer_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.options.transfer_timeout_ms = timeout_ms;
        self
    }

    /// Enable the degraded fixed interface/endpoint fallback.
    pub fn fallback(mut self, interface: u8, endpoint: u8) -> Self {
        self.options.resolver.fallback = Some(FixedBinding {
            interface,
            endpoint,
        });
        self
    }

    /// Register the session with a removal registry once connected.
    pub fn with_registry(mut self, registry: RemovalRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Open the provided transport. Requires `with_transport`; otherwise
    /// returns DeviceNotFound.
    pub fn open(self) -> Result<Session> {
        let transport = self.transport.ok_or(Error::DeviceNotFound)?;
        let session = Session::open(transport, self.options)?;
        if let Some(registry) = &self.registry {
            registry.register(session.removal_handle());
        }
        Ok(session)
    }

    /// Run the full connect flow through a selector.
    pub fn connect(
        self,
        selector: &mut dyn DeviceSelector,
        filters: &[DeviceFilter],
    ) -> Result<Connection> {
        let connection = Session::connect(selector, filters, self.options)?;
        if let (Some(registry), Connection::Connected(session)) = (&self.registry, &connection) {
            registry.register(session.removal_handle());
        }
        Ok(connection)
    }
}
