// midicfg-rs/midicfg/src/device/session.rs

use std::fmt;

use log::{debug, info};

use crate::device::binding::ResolvedBinding;
use crate::device::builder::SessionOptions;
use crate::device::channel;
use crate::device::presence::Presence;
use crate::device::resolver::{ensure_configuration, resolve};
use crate::device::selector::{DeviceSelector, Selection};
use crate::protocol::{Command, SettingsRecord};
use crate::transport::Transport;
use crate::types::{DeviceFilter, DeviceId};
use crate::{Error, Result};

/// Outcome of [`Session::connect`].
#[derive(Debug)]
pub enum Connection {
    Connected(Session),
    /// The user dismissed the selection prompt.
    Cancelled,
}

impl Connection {
    pub fn into_session(self) -> Option<Session> {
        match self {
            Connection::Connected(s) => Some(s),
            Connection::Cancelled => None,
        }
    }
}

/// Acknowledgement of a completed save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ack {
    pub device_id: DeviceId,
    pub packets: usize,
}

/// One controlling session: the open device, its presence flag and the
/// current binding. Owned by the caller and passed to every operation;
/// operations are serialized by `&mut self`.
pub struct Session {
    transport: Box<dyn Transport>,
    presence: Presence,
    binding: Option<ResolvedBinding>,
    options: SessionOptions,
}

impl Session {
    /// Ask the selector for a device, then open and resolve it.
    pub fn connect(
        selector: &mut dyn DeviceSelector,
        filters: &[DeviceFilter],
        options: SessionOptions,
    ) -> Result<Connection> {
        match selector.request_device(filters)? {
            Selection::Selected(transport) => Self::open(transport, options).map(Connection::Connected),
            Selection::Cancelled => {
                info!("device selection cancelled");
                Ok(Connection::Cancelled)
            }
        }
    }

    /// Configure an already opened transport and resolve its vendor
    /// interface.
    pub fn open(mut transport: Box<dyn Transport>, options: SessionOptions) -> Result<Self> {
        transport.set_transfer_timeout(options.transfer_timeout());

        let configuration = ensure_configuration(&mut *transport, options.configuration)
            .map_err(|e| Error::Connection(e.to_string()))?;
        debug!("using configuration {}", configuration);

        let presence = Presence::new(transport.device_id());
        let binding = resolve(&mut *transport, &presence, &options.resolver)?;

        info!(
            "session on {} bound to interface {} endpoint {}",
            presence.device_id(),
            binding.interface(),
            binding.endpoint()
        );

        Ok(Self {
            transport,
            presence,
            binding: Some(binding),
            options,
        })
    }

    pub fn device_id(&self) -> &DeviceId {
        self.presence.device_id()
    }

    pub fn binding(&self) -> Option<&ResolvedBinding> {
        self.binding.as_ref()
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Handle for the device-removal event source. Notifying it with this
    /// session's device id makes the binding permanently stale. The handle
    /// is closed, and ignores notifications, once the session ends.
    pub fn removal_handle(&self) -> Presence {
        self.presence.clone()
    }

    /// Device present and a binding held
    pub fn is_connected(&self) -> bool {
        self.presence.is_present() && self.binding.is_some()
    }

    /// Push the four settings and commit them.
    pub fn save_settings(&mut self, record: &SettingsRecord) -> Result<Ack> {
        let binding = self.binding.as_ref().ok_or(Error::NotResolved)?;
        let packets = channel::save_settings(&mut *self.transport, binding, record)?;
        Ok(Ack {
            device_id: self.presence.device_id().clone(),
            packets,
        })
    }

    /// Send a single command outside the save sequence.
    pub fn send_command(&mut self, cmd: Command) -> Result<()> {
        let binding = self.binding.as_ref().ok_or(Error::NotResolved)?;
        channel::send(&mut *self.transport, binding, cmd)
    }

    /// Release the current claim and probe again. Only valid while the
    /// device is still present; after removal, connect again instead.
    pub fn resolve_again(&mut self) -> Result<()> {
        self.presence.ensure_present()?;
        // The old binding stays in place until its claim is actually gone.
        if let Some(old) = &self.binding {
            old.release_claim(&mut *self.transport)?;
        }
        self.binding = None;
        let binding = resolve(&mut *self.transport, &self.presence, &self.options.resolver)?;
        self.binding = Some(binding);
        Ok(())
    }

    /// Release the claim and close the session.
    pub fn disconnect(mut self) -> Result<()> {
        info!("disconnecting {}", self.presence.device_id());
        self.presence.close();
        match self.binding.take() {
            Some(binding) => binding.release(&mut *self.transport),
            None => Ok(()),
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.presence.close();
        if let Some(binding) = self.binding.take() {
            debug!("releasing claim held by dropped session");
            if let Err(e) = binding.release(&mut *self.transport) {
                debug!("release on drop failed: {}", e);
            }
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("device_id", self.presence.device_id())
            .field("present", &self.presence.is_present())
            .field("binding", &self.binding)
            .finish()
    }
}
