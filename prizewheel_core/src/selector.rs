use prizewheel_shared::SpinMessage;
use tracing::debug;

use crate::{
    error::SpinError,
    ordering::order_slots,
    rng::RandomSource,
    slot::{validate_slots, Slot, Wheel, WheelMode},
};

/// Weights are percentages; a RANDOM_WIN population must hit this exactly.
pub const TOTAL_WEIGHT: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub slot: Slot,
    pub index: usize, // into the ordered sequence the caller passed in
    pub draw: f64,    // r in [0,100)
}

impl Selection {
    pub fn to_message(&self) -> SpinMessage {
        SpinMessage {
            slot_id: self.slot.id.clone(),
            index: self.index,
            label: self.slot.label.clone(),
        }
    }
}

pub fn weight_sum(slots: &[Slot]) -> f64 {
    slots.iter().map(|s| s.weight).sum()
}

/// Exact comparison, no epsilon.
pub fn validate_weight_sum(slots: &[Slot]) -> Result<(), SpinError> {
    let sum = weight_sum(slots);
    if sum != TOTAL_WEIGHT {
        return Err(SpinError::InvalidConfiguration { sum });
    }
    Ok(())
}

/// `C[i] = weight[0] + .. + weight[i]`, in the order given.
pub fn cumulative_weights(slots: &[Slot]) -> Vec<f64> {
    slots
        .iter()
        .scan(0.0, |acc, s| {
            *acc += s.weight;
            Some(*acc)
        })
        .collect()
}

/// Smallest `i` with `r <= C[i]`. A draw past the last boundary (only
/// possible when it is supplied directly, or after renormalization rounding)
/// resolves to the last bucket with non-zero weight.
pub fn locate_bucket(cumulative: &[f64], r: f64) -> usize {
    let i = cumulative.partition_point(|&c| c < r);
    if i < cumulative.len() {
        return i;
    }
    // first index at the top boundary; trailing zero-weight slots sit after it
    let top = cumulative.last().copied().unwrap_or(0.0);
    cumulative.partition_point(|&c| c < top)
}

fn pick(population: &[Slot], r: f64) -> usize {
    let cumulative = cumulative_weights(population);
    locate_bucket(&cumulative, r)
}

/// RANDOM_WIN selection with an explicit draw `r` (nominally in `[0,100)`).
pub fn select_with_draw(ordered: &[Slot], r: f64) -> Result<Selection, SpinError> {
    validate_slots(ordered)?;
    validate_weight_sum(ordered)?;
    let index = pick(ordered, r);
    let slot = ordered[index].clone();
    debug!(draw = r, index, slot_id = %slot.id, "slot selected");
    Ok(Selection {
        slot,
        index,
        draw: r,
    })
}

/// RANDOM_WIN selection over an already ordered sequence.
pub fn select(ordered: &[Slot], source: &dyn RandomSource) -> Result<Selection, SpinError> {
    select_with_draw(ordered, source.next_unit() * TOTAL_WEIGHT)
}

/// ALL_WIN selection with an explicit draw. Only winning slots take part,
/// their weights rescaled to sum to 100; the returned index still refers to
/// `ordered`.
pub fn select_winning_with_draw(ordered: &[Slot], r: f64) -> Result<Selection, SpinError> {
    validate_slots(ordered)?;
    let winners: Vec<&Slot> = ordered.iter().filter(|s| s.is_winning).collect();
    if winners.is_empty() {
        return Err(SpinError::NoWinningSlots);
    }
    let winning_sum: f64 = winners.iter().map(|s| s.weight).sum();
    if winning_sum <= 0.0 {
        return Err(SpinError::InvalidConfiguration { sum: winning_sum });
    }

    let population: Vec<Slot> = winners
        .iter()
        .map(|s| Slot {
            weight: s.weight / winning_sum * TOTAL_WEIGHT,
            ..(*s).clone()
        })
        .collect();
    let local = pick(&population, r);
    let chosen_id = &population[local].id;

    let index = ordered
        .iter()
        .position(|s| &s.id == chosen_id)
        .ok_or_else(|| SpinError::SlotNotFound {
            slot_id: chosen_id.clone(),
            reported_index: local,
        })?;
    let slot = ordered[index].clone();
    debug!(draw = r, local, index, slot_id = %slot.id, "winning slot selected");
    Ok(Selection {
        slot,
        index,
        draw: r,
    })
}

pub fn select_winning(
    ordered: &[Slot],
    source: &dyn RandomSource,
) -> Result<Selection, SpinError> {
    select_winning_with_draw(ordered, source.next_unit() * TOTAL_WEIGHT)
}

/// Orders the wheel's slots and runs the selector its mode calls for.
/// `Selection::index` refers to the ordered view.
pub fn spin(wheel: &Wheel, source: &dyn RandomSource) -> Result<Selection, SpinError> {
    let ordered = order_slots(&wheel.slots);
    match wheel.mode {
        WheelMode::RandomWin => select(&ordered, source),
        WheelMode::AllWin => select_winning(&ordered, source),
    }
}

/// Replays a spin with a deterministic source and checks the reported slot.
pub fn verify_seeded_spin(
    wheel: &Wheel,
    source: &dyn RandomSource,
    message: &SpinMessage,
) -> Result<bool, SpinError> {
    let selection = spin(wheel, source)?;
    Ok(selection.slot.id == message.slot_id)
}
