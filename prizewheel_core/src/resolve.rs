//! Presenting-side half of a spin.
//!
//! The selecting side reports a slot id plus the index it computed. The
//! presenter never trusts that index: it orders its own copy of the slots with
//! [`compare_slots`](crate::ordering::compare_slots) and looks the id up. Only
//! when the id is missing does it fall back to the reported index, and it says
//! so loudly.

use prizewheel_shared::SpinMessage;
use tracing::warn;

use crate::{
    error::SpinError,
    ordering::order_slots,
    slot::{validate_slots, Slot},
};

/// Display index plus whether it came from the degraded fallback path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub index: usize,
    pub degraded: bool,
}

/// Linear search for `slot_id` in an already ordered view.
pub fn resolve_index(ordered: &[Slot], slot_id: &str) -> Option<usize> {
    ordered.iter().position(|s| s.id == slot_id)
}

#[derive(Debug, Clone)]
pub struct Presenter {
    ordered: Vec<Slot>,
}

impl Presenter {
    /// Rejects the same malformed views the selector rejects: empty, blank
    /// or duplicate ids, bad weights.
    pub fn new(slots: &[Slot]) -> Result<Self, SpinError> {
        validate_slots(slots)?;
        Ok(Self {
            ordered: order_slots(slots),
        })
    }

    pub fn ordered(&self) -> &[Slot] {
        &self.ordered
    }

    pub fn resolve(&self, message: &SpinMessage) -> Result<usize, SpinError> {
        resolve_index(&self.ordered, &message.slot_id).ok_or_else(|| SpinError::SlotNotFound {
            slot_id: message.slot_id.clone(),
            reported_index: message.index,
        })
    }

    /// Like [`resolve`](Self::resolve), but uses the reported index when the id
    /// is unknown here. Still fails if that index does not exist in this view.
    pub fn resolve_or_fallback(&self, message: &SpinMessage) -> Result<Resolution, SpinError> {
        match self.resolve(message) {
            Ok(index) => {
                if index != message.index {
                    warn!(
                        target: "prizewheel::alignment",
                        slot_id = %message.slot_id,
                        reported = message.index,
                        resolved = index,
                        "reported index disagrees with local ordering; using local"
                    );
                }
                Ok(Resolution {
                    index,
                    degraded: false,
                })
            }
            Err(_) if message.index < self.ordered.len() => {
                warn!(
                    target: "prizewheel::alignment",
                    slot_id = %message.slot_id,
                    reported = message.index,
                    "slot id missing from presenting view; falling back to reported index"
                );
                Ok(Resolution {
                    index: message.index,
                    degraded: true,
                })
            }
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(id: &str, index: usize) -> SpinMessage {
        SpinMessage {
            slot_id: id.into(),
            index,
            label: String::new(),
        }
    }

    fn slots() -> Vec<Slot> {
        vec![
            Slot::new("c", 25.0, 1),
            Slot::new("b", 25.0, 0),
            Slot::new("a", 25.0, 0),
            Slot::new("d", 25.0, 2),
        ]
    }

    #[test]
    fn resolves_by_id_not_by_hint() {
        let presenter = Presenter::new(&slots()).unwrap();
        // ordered view is a, b, c, d
        assert_eq!(presenter.resolve(&msg("c", 0)), Ok(2));
        let r = presenter.resolve_or_fallback(&msg("b", 3)).unwrap();
        assert_eq!(r, Resolution { index: 1, degraded: false });
    }

    #[test]
    fn unknown_id_is_slot_not_found() {
        let presenter = Presenter::new(&slots()).unwrap();
        assert_eq!(
            presenter.resolve(&msg("zzz", 1)),
            Err(SpinError::SlotNotFound {
                slot_id: "zzz".into(),
                reported_index: 1
            })
        );
    }

    #[test]
    fn fallback_uses_reported_index_and_flags_it() {
        let presenter = Presenter::new(&slots()).unwrap();
        let r = presenter.resolve_or_fallback(&msg("zzz", 1)).unwrap();
        assert_eq!(r, Resolution { index: 1, degraded: true });
    }

    #[test]
    fn fallback_out_of_range_still_fails() {
        let presenter = Presenter::new(&slots()).unwrap();
        assert!(matches!(
            presenter.resolve_or_fallback(&msg("zzz", 9)),
            Err(SpinError::SlotNotFound { .. })
        ));
    }

    #[test]
    fn duplicate_ids_rejected_before_resolving() {
        let dup = vec![
            Slot::new("b", 30.0, 0),
            Slot::new("a", 40.0, 1),
            Slot::new("b", 30.0, 2),
        ];
        assert_eq!(
            Presenter::new(&dup).unwrap_err(),
            SpinError::DuplicateSlotId("b".into())
        );
    }

    #[test]
    fn empty_or_blank_views_rejected() {
        assert_eq!(Presenter::new(&[]).unwrap_err(), SpinError::EmptySlotSet);
        let blank = vec![Slot::new("a", 50.0, 0), Slot::new("", 50.0, 1)];
        assert_eq!(
            Presenter::new(&blank).unwrap_err(),
            SpinError::MalformedSlotId { index: 1 }
        );
    }

    #[test]
    fn input_order_does_not_matter() {
        let mut reversed = slots();
        reversed.reverse();
        let a = Presenter::new(&slots()).unwrap();
        let b = Presenter::new(&reversed).unwrap();
        assert_eq!(a.ordered(), b.ordered());
    }
}
