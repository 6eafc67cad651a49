// midicfg-rs/midicfg/src/device/presence.rs

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use log::debug;

use crate::types::DeviceId;
use crate::{Error, Result};

/// Shared "device still attached" flag for one physical connection.
///
/// Clones share the flag: the session, its binding and any removal handle
/// handed to an event source all observe the same state. Once removed, a
/// presence never becomes present again; a new connection gets a new one.
///
/// A presence is also closed when its session ends. A closed presence
/// ignores removal notifications and drops out of any registry.
#[derive(Debug, Clone)]
pub struct Presence {
    device_id: DeviceId,
    present: Arc<AtomicBool>,
    closed: Arc<AtomicBool>,
}

impl Presence {
    pub fn new(device_id: DeviceId) -> Self {
        Self {
            device_id,
            present: Arc::new(AtomicBool::new(true)),
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn device_id(&self) -> &DeviceId {
        &self.device_id
    }

    pub fn is_present(&self) -> bool {
        self.present.load(Ordering::Acquire)
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Present and still owned by an open session
    pub fn is_live(&self) -> bool {
        self.is_present() && !self.is_closed()
    }

    /// Retire this presence when its session ends.
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::AcqRel) {
            debug!("presence for {} closed", self.device_id);
        }
    }

    /// Fail fast with `DeviceRemoved` once the device has gone.
    pub fn ensure_present(&self) -> Result<()> {
        if self.is_present() {
            Ok(())
        } else {
            Err(Error::DeviceRemoved(self.device_id.clone()))
        }
    }

    /// Handle a removal notification. Returns true if it was for this
    /// device and flipped the flag.
    pub fn notify_removed(&self, removed: &DeviceId) -> bool {
        if removed != &self.device_id || self.is_closed() {
            return false;
        }
        self.mark_removed()
    }

    /// Returns true if this call performed the transition.
    pub fn mark_removed(&self) -> bool {
        let was_present = self.present.swap(false, Ordering::AcqRel);
        if was_present {
            debug!("device {} marked removed", self.device_id);
        }
        was_present
    }
}

/// Fans removal notifications out to every registered presence.
///
/// Removed and closed presences are pruned on every access.
#[derive(Debug, Clone, Default)]
pub struct RemovalRegistry {
    entries: Arc<Mutex<Vec<Presence>>>,
}

impl RemovalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, presence: Presence) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.retain(Presence::is_live);
        entries.push(presence);
    }

    /// Invalidate every presence keyed by `device_id`. Returns how many
    /// were invalidated.
    pub fn notify_removed(&self, device_id: &DeviceId) -> usize {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let count = entries
            .iter()
            .filter(|p| p.notify_removed(device_id))
            .count();
        entries.retain(Presence::is_live);
        count
    }

    pub fn len(&self) -> usize {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.retain(Presence::is_live);
        entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
