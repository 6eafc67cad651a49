// midicfg-rs/midicfg/src/transport/usb/hotplug.rs

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;
use std::time::Duration;

use log::{debug, info, warn};
use rusb::{Context, Device, Hotplug, HotplugBuilder, Registration, UsbContext};

use crate::device::presence::RemovalRegistry;
use crate::transport::usb::descriptor::location_id;
use crate::{Error, Result};

const EVENT_POLL: Duration = Duration::from_millis(250);

struct RemovalForwarder {
    registry: RemovalRegistry,
}

impl Hotplug<Context> for RemovalForwarder {
    fn device_arrived(&mut self, device: Device<Context>) {
        debug!("device arrived at {}", location_id(&device));
    }

    fn device_left(&mut self, device: Device<Context>) {
        let id = location_id(&device);
        let invalidated = self.registry.notify_removed(&id);
        info!("device {} left the bus ({} session(s) invalidated)", id, invalidated);
    }
}

/// Forwards libusb hotplug departures into a [`RemovalRegistry`]. Events are
/// pumped on a background thread until the watcher is dropped.
pub struct RemovalWatcher {
    _registration: Registration<Context>,
    stopping: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl RemovalWatcher {
    pub fn start(context: &Context, registry: RemovalRegistry) -> Result<Self> {
        if !rusb::has_hotplug() {
            return Err(Error::Backend("libusb built without hotplug support".into()));
        }

        let callback: Box<dyn Hotplug<Context>> = Box::new(RemovalForwarder { registry });
        let registration = HotplugBuilder::new()
            .enumerate(false)
            .register(context.clone(), callback)?;

        let stopping = Arc::new(AtomicBool::new(false));
        let ctx = context.clone();
        let flag = stopping.clone();
        let thread = std::thread::spawn(move || {
            while !flag.load(Ordering::Relaxed) {
                if let Err(e) = ctx.handle_events(Some(EVENT_POLL)) {
                    warn!("hotplug event loop stopped: {}", e);
                    break;
                }
            }
        });

        Ok(Self {
            _registration: registration,
            stopping,
            thread: Some(thread),
        })
    }
}

impl Drop for RemovalWatcher {
    fn drop(&mut self) {
        self.stopping.store(true, Ordering::Relaxed);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}
