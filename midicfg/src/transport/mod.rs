// midicfg-rs/midicfg/src/transport/mod.rs

pub mod mock;
pub mod traits;
#[cfg(feature = "usb")]
pub mod usb;

pub use mock::{MockEvent, MockTransport};
pub use traits::{ClaimOutcome, Transport};
#[cfg(feature = "usb")]
pub use usb::{RemovalWatcher, UsbSelector, UsbTransport};
