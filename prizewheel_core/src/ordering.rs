use std::cmp::Ordering;

use crate::slot::Slot;

/// Display order: `position` ascending, then `id` ascending by bytes.
///
/// Positions repeat in real data, so `id` is what makes this a strict total
/// order. Both the selecting and the presenting side must use exactly this
/// comparator.
pub fn compare_slots(a: &Slot, b: &Slot) -> Ordering {
    a.position
        .cmp(&b.position)
        .then_with(|| a.id.as_bytes().cmp(b.id.as_bytes()))
}

/// Returns a new, ordered copy. The input is left untouched.
pub fn order_slots(slots: &[Slot]) -> Vec<Slot> {
    let mut ordered = slots.to_vec();
    ordered.sort_by(compare_slots);
    ordered
}
