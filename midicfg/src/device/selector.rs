// midicfg-rs/midicfg/src/device/selector.rs

use std::fmt;

use crate::Result;
use crate::transport::Transport;
use crate::types::DeviceFilter;

/// Result of asking the host for a device. Dismissing the prompt is a
/// normal outcome, not an error.
pub enum Selection {
    Selected(Box<dyn Transport>),
    Cancelled,
}

impl fmt::Debug for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Selected(t) => f.debug_tuple("Selected").field(&t.device_id()).finish(),
            Selection::Cancelled => f.write_str("Cancelled"),
        }
    }
}

/// User-mediated device selection (permission prompt, picker, ...).
///
/// The returned transport is already open. An empty filter list means
/// unfiltered.
pub trait DeviceSelector {
    fn request_device(&mut self, filters: &[DeviceFilter]) -> Result<Selection>;
}

/// Hands out one pre-opened transport, then reports `Cancelled`.
#[derive(Default)]
pub struct StaticSelector {
    transport: Option<Box<dyn Transport>>,
}

impl StaticSelector {
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self {
            transport: Some(transport),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

impl DeviceSelector for StaticSelector {
    fn request_device(&mut self, _filters: &[DeviceFilter]) -> Result<Selection> {
        Ok(match self.transport.take() {
            Some(t) => Selection::Selected(t),
            None => Selection::Cancelled,
        })
    }
}
