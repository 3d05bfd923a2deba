use prizewheel_shared::ApiError;

/// Every failure here is caused by the caller's input; retrying the same
/// input yields the same error.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SpinError {
    #[error("wheel has no slots")]
    EmptySlotSet,
    #[error("slot weights must sum to exactly 100, got {sum}")]
    InvalidConfiguration { sum: f64 },
    #[error("ALL_WIN wheel has no winning slots")]
    NoWinningSlots,
    #[error("slot `{slot_id}` not found in the presenting view (reported index {reported_index})")]
    SlotNotFound {
        slot_id: String,
        reported_index: usize,
    },
    #[error("slot at input index {index} has an empty id")]
    MalformedSlotId { index: usize },
    #[error("slot id `{0}` appears more than once")]
    DuplicateSlotId(String),
    #[error("slot `{slot_id}` has invalid weight {weight}")]
    InvalidWeight { slot_id: String, weight: f64 },
}

impl From<SpinError> for ApiError {
    fn from(err: SpinError) -> Self {
        ApiError::Invalid(err.to_string())
    }
}
