#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{Slot, device_from_slots};
use midicfg::Error;
use midicfg::device::{Presence, ResolverOptions, resolve};
use midicfg::transport::{ClaimOutcome, Transport};
use midicfg::types::InterfaceNumber;
use proptest::prelude::*;

fn slot_strategy() -> impl Strategy<Value = Slot> {
    prop_oneof![Just(Slot::Owned), Just(Slot::InOnly)]
}

proptest! {
    // Exactly one usable interface at position k: it is found wherever it
    // sits, and every interface claimed before it was released again.
    #[test]
    fn finds_the_single_usable_interface(
        before in prop::collection::vec(slot_strategy(), 0..6),
        after in prop::collection::vec(slot_strategy(), 0..6),
    ) {
        let mut slots = before.clone();
        slots.push(Slot::Vendor);
        slots.extend(after);
        let k = before.len();

        let mut mock = device_from_slots(&slots);
        let presence = Presence::new(mock.device_id());
        let binding = resolve(&mut mock, &presence, &ResolverOptions::default()).unwrap();

        prop_assert_eq!(binding.interface(), InterfaceNumber::new(k as u8));
        prop_assert_eq!(mock.claimed.iter().copied().collect::<Vec<_>>(), vec![InterfaceNumber::new(k as u8)]);

        let claimed_before: Vec<InterfaceNumber> = mock
            .claim_log()
            .into_iter()
            .filter(|(n, o)| *o == ClaimOutcome::Claimed && n.as_u8() < k as u8)
            .map(|(n, _)| n)
            .collect();
        prop_assert_eq!(mock.release_log(), claimed_before);

        // nothing past k was touched
        prop_assert!(mock.claim_log().iter().all(|(n, _)| n.as_u8() <= k as u8));
    }

    #[test]
    fn no_usable_interface_leaves_nothing_claimed(
        slots in prop::collection::vec(slot_strategy(), 0..8),
    ) {
        let mut mock = device_from_slots(&slots);
        let presence = Presence::new(mock.device_id());
        let result = resolve(&mut mock, &presence, &ResolverOptions::default());

        prop_assert!(
            matches!(result, Err(Error::NoUsableInterface { probed }) if probed == slots.len()),
            "unexpected result: {:?}",
            result
        );
        prop_assert!(mock.claimed.is_empty());
    }
}

#[test]
fn first_usable_interface_wins() {
    let mut mock = device_from_slots(&[Slot::Owned, Slot::Vendor, Slot::Vendor]);
    let presence = Presence::new(mock.device_id());
    let binding = resolve(&mut mock, &presence, &ResolverOptions::default()).unwrap();
    assert_eq!(binding.interface(), InterfaceNumber::new(1));
    assert_eq!(mock.claim_log().len(), 2);
}

#[test]
fn resolve_after_release_produces_fresh_binding() {
    let mut mock = common::composite_midi_device();
    let presence = Presence::new(mock.device_id());

    let first = resolve(&mut mock, &presence, &ResolverOptions::default()).unwrap();
    first.release(&mut mock).unwrap();

    let second = resolve(&mut mock, &presence, &ResolverOptions::default()).unwrap();
    assert_eq!(second.interface(), InterfaceNumber::new(2));
    assert!(second.ensure_live().is_ok());
    assert_eq!(mock.claimed.len(), 1);
}
