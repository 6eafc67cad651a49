// midicfg-rs/midicfg/src/device/resolver.rs

//! Interface discovery.
//!
//! Nothing in the descriptors reliably marks the vendor interface: its number
//! and endpoint move between firmware builds, and the MIDI interface also
//! has an OUT endpoint. The only distinguishing signal is whether a claim
//! succeeds, so discovery is a linear probe: claim, inspect, release.

use log::{debug, info, warn};

use crate::device::binding::ResolvedBinding;
use crate::device::presence::Presence;
use crate::transport::{ClaimOutcome, Transport};
use crate::types::{EndpointAddress, InterfaceDescriptor, InterfaceNumber};
use crate::{Error, Result};

/// Hard-coded interface/endpoint pair used only when probing finds nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedBinding {
    pub interface: u8,
    pub endpoint: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolverOptions {
    /// Degraded fallback for firmware whose descriptors cannot be probed.
    /// Off by default.
    pub fallback: Option<FixedBinding>,
}

/// Make sure a configuration is active, selecting `configuration` if the
/// device reports none. Returns the active configuration value.
pub fn ensure_configuration(transport: &mut dyn Transport, configuration: u8) -> Result<u8> {
    match transport.active_configuration()? {
        Some(active) => {
            debug!("configuration {} already active", active);
            Ok(active)
        }
        None => {
            debug!("no active configuration, selecting {}", configuration);
            transport.select_configuration(configuration)?;
            Ok(configuration)
        }
    }
}

/// Find the claimable interface with an OUT endpoint.
///
/// Interfaces are probed in ascending number order. A refused claim is
/// skipped; a claimed interface without an OUT endpoint is released before
/// moving on, so on failure nothing is left claimed.
pub fn resolve(
    transport: &mut dyn Transport,
    presence: &Presence,
    options: &ResolverOptions,
) -> Result<ResolvedBinding> {
    presence.ensure_present()?;

    let mut interfaces = transport.interfaces()?;
    interfaces.sort_by_key(|i| i.number());
    debug!(
        "probing {} interface(s) on {}",
        interfaces.len(),
        presence.device_id()
    );

    for iface in &interfaces {
        let number = iface.number();
        match transport.claim_interface(number)? {
            ClaimOutcome::AlreadyOwned => {
                debug!("interface {} owned by another driver, skipping", number);
                continue;
            }
            ClaimOutcome::Claimed => {}
        }

        match iface.first_out_endpoint() {
            Some(ep) => {
                info!(
                    "resolved interface {} endpoint {} (class {:#04x})",
                    number,
                    ep.address(),
                    iface.class_code()
                );
                return ResolvedBinding::new(number, ep.address(), presence.clone());
            }
            None => {
                debug!("interface {} has no OUT endpoint, releasing", number);
                transport.release_interface(number)?;
            }
        }
    }

    if let Some(fixed) = options.fallback {
        if let Some(binding) = try_fallback(transport, presence, &interfaces, fixed)? {
            return Ok(binding);
        }
    }

    Err(Error::NoUsableInterface {
        probed: interfaces.len(),
    })
}

/// Claim the fixed pair. Any failure here yields `None` so the caller still
/// reports the probe's `NoUsableInterface`.
fn try_fallback(
    transport: &mut dyn Transport,
    presence: &Presence,
    interfaces: &[InterfaceDescriptor],
    fixed: FixedBinding,
) -> Result<Option<ResolvedBinding>> {
    let interface = InterfaceNumber::new(fixed.interface);
    let endpoint = EndpointAddress::out(fixed.endpoint);
    warn!(
        "probing found no usable interface, falling back to fixed interface {} endpoint {}",
        interface, endpoint
    );

    if !interfaces.iter().any(|i| i.number() == interface) {
        warn!("fallback interface {} is not exposed by the device", interface);
        return Ok(None);
    }

    let outcome = match transport.claim_interface(interface) {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!("fallback claim of interface {} failed: {}", interface, e);
            return Ok(None);
        }
    };
    match outcome {
        ClaimOutcome::Claimed => ResolvedBinding::new(interface, endpoint, presence.clone()).map(Some),
        ClaimOutcome::AlreadyOwned => {
            warn!("fallback interface {} is owned by another driver", interface);
            Ok(None)
        }
    }
}
