// midicfg-rs/midicfg/src/device/mod.rs

pub mod binding;
pub mod builder;
pub mod channel;
pub mod presence;
pub mod resolver;
pub mod selector;
pub mod session;

pub use binding::ResolvedBinding;
pub use builder::{DEFAULT_TRANSFER_TIMEOUT_MS, SessionBuilder, SessionOptions};
pub use presence::{Presence, RemovalRegistry};
pub use resolver::{FixedBinding, ResolverOptions, ensure_configuration, resolve};
pub use selector::{DeviceSelector, Selection, StaticSelector};
pub use session::{Ack, Connection, Session};
