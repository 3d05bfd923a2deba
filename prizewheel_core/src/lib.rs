pub mod error;
pub mod ordering;
pub mod resolve;
pub mod rng;
pub mod selector;
pub mod slot;

pub use crate::error::SpinError;
pub use crate::ordering::{compare_slots, order_slots};
pub use crate::resolve::{resolve_index, Presenter, Resolution};
pub use crate::rng::{
    derive_hash_hex, unit_from_bytes, FixedDraw, ProvablyFairDraw, RandomSource, SeededDraw,
    ThreadRandom,
};
pub use crate::selector::{
    cumulative_weights, locate_bucket, select, select_winning, select_winning_with_draw,
    select_with_draw, spin, verify_seeded_spin, Selection, TOTAL_WEIGHT,
};
pub use crate::slot::{validate_slots, Slot, Wheel, WheelMode};
