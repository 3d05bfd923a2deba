use std::collections::HashSet;

use prizewheel_shared::{SlotRecord, WheelDocument, WheelModeRecord};

use crate::error::SpinError;

#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    pub id: String,
    pub label: String,
    pub weight: f64,
    pub is_winning: bool,
    pub position: i64,
}

impl Slot {
    pub fn new(id: impl Into<String>, weight: f64, position: i64) -> Self {
        Self {
            id: id.into(),
            label: String::new(),
            weight,
            is_winning: false,
            position,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn winning(mut self, is_winning: bool) -> Self {
        self.is_winning = is_winning;
        self
    }
}

impl From<&SlotRecord> for Slot {
    fn from(r: &SlotRecord) -> Self {
        Self {
            id: r.id.clone(),
            label: r.label.clone(),
            weight: r.weight,
            is_winning: r.is_winning,
            position: r.position,
        }
    }
}

impl From<SlotRecord> for Slot {
    fn from(r: SlotRecord) -> Self {
        Self {
            id: r.id,
            label: r.label,
            weight: r.weight,
            is_winning: r.is_winning,
            position: r.position,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WheelMode {
    #[default]
    RandomWin,
    AllWin,
}

impl From<WheelModeRecord> for WheelMode {
    fn from(m: WheelModeRecord) -> Self {
        match m {
            WheelModeRecord::RandomWin => WheelMode::RandomWin,
            WheelModeRecord::AllWin => WheelMode::AllWin,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Wheel {
    pub mode: WheelMode,
    pub slots: Vec<Slot>, // any order; the selector orders them itself
}

impl Wheel {
    pub fn new(mode: WheelMode, slots: Vec<Slot>) -> Self {
        Self { mode, slots }
    }

    pub fn demo() -> Self {
        Self {
            mode: WheelMode::RandomWin,
            slots: vec![
                Slot::new("coffee", 30.0, 0)
                    .with_label("Free coffee")
                    .winning(true),
                Slot::new("tote", 20.0, 1).with_label("Tote bag").winning(true),
                Slot::new("retry", 25.0, 2).with_label("Try again"),
                Slot::new("nothing", 25.0, 3).with_label("Better luck next time"),
            ],
        }
    }
}

impl From<WheelDocument> for Wheel {
    fn from(doc: WheelDocument) -> Self {
        Self {
            mode: doc.mode.into(),
            slots: doc.slots.into_iter().map(Slot::from).collect(),
        }
    }
}

/// Checks the shape every call relies on: at least one slot, non-empty unique
/// ids, finite non-negative weights.
pub fn validate_slots(slots: &[Slot]) -> Result<(), SpinError> {
    if slots.is_empty() {
        return Err(SpinError::EmptySlotSet);
    }
    let mut seen = HashSet::with_capacity(slots.len());
    for (index, slot) in slots.iter().enumerate() {
        if slot.id.trim().is_empty() {
            return Err(SpinError::MalformedSlotId { index });
        }
        if !seen.insert(slot.id.as_str()) {
            return Err(SpinError::DuplicateSlotId(slot.id.clone()));
        }
        if !slot.weight.is_finite() || slot.weight < 0.0 {
            return Err(SpinError::InvalidWeight {
                slot_id: slot.id.clone(),
                weight: slot.weight,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_wheel_is_valid() {
        let wheel = Wheel::demo();
        assert!(validate_slots(&wheel.slots).is_ok());
        let sum: f64 = wheel.slots.iter().map(|s| s.weight).sum();
        assert_eq!(sum, 100.0);
    }

    #[test]
    fn rejects_blank_and_duplicate_ids() {
        let blank = vec![Slot::new("a", 50.0, 0), Slot::new("  ", 50.0, 1)];
        assert_eq!(
            validate_slots(&blank),
            Err(SpinError::MalformedSlotId { index: 1 })
        );

        let dup = vec![Slot::new("a", 50.0, 0), Slot::new("a", 50.0, 1)];
        assert_eq!(
            validate_slots(&dup),
            Err(SpinError::DuplicateSlotId("a".into()))
        );
    }

    #[test]
    fn rejects_negative_weight() {
        let slots = vec![Slot::new("a", -10.0, 0), Slot::new("b", 110.0, 1)];
        assert!(matches!(
            validate_slots(&slots),
            Err(SpinError::InvalidWeight { slot_id, .. }) if slot_id == "a"
        ));
    }

    #[test]
    fn converts_wheel_document() {
        let doc = WheelDocument {
            mode: WheelModeRecord::AllWin,
            slots: vec![SlotRecord {
                id: "x".into(),
                label: "X".into(),
                weight: 100.0,
                is_winning: true,
                position: 4,
            }],
        };
        let wheel = Wheel::from(doc);
        assert_eq!(wheel.mode, WheelMode::AllWin);
        assert_eq!(wheel.slots[0].position, 4);
        assert!(wheel.slots[0].is_winning);
    }
}
