use serde::{Deserialize, Serialize};

/// One slot as supplied by the persistence layer.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SlotRecord {
    pub id: String,
    #[serde(default)]
    pub label: String,
    pub weight: f64, // percentage, not a fraction
    #[serde(default)]
    pub is_winning: bool,
    #[serde(default)]
    pub position: i64, // display hint, may repeat
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WheelModeRecord {
    #[default]
    RandomWin,
    AllWin,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WheelDocument {
    #[serde(default)]
    pub mode: WheelModeRecord,
    pub slots: Vec<SlotRecord>,
}

/// What the selecting side hands to the presenting side after a spin.
///
/// `index` is advisory: a consumer in another process must re-derive it from
/// `slot_id` against its own ordered view.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SpinMessage {
    pub slot_id: String,
    pub index: usize,
    pub label: String,
}

/// Presenting side's answer: where to stop, and whether that index is only
/// the selecting side's hint because the slot id was missing locally.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DisplayIndex {
    pub index: usize,
    pub degraded: bool,
}

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("invalid request: {0}")]
    Invalid(String),
    #[error("internal server error")]
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_record_reads_camel_case_and_defaults() {
        let json = r#"{"id":"s1","weight":25,"isWinning":true}"#;
        let slot: SlotRecord = serde_json::from_str(json).unwrap();
        assert_eq!(slot.id, "s1");
        assert_eq!(slot.weight, 25.0);
        assert!(slot.is_winning);
        assert_eq!(slot.position, 0);
        assert!(slot.label.is_empty());
    }

    #[test]
    fn wheel_mode_uses_upper_snake_case() {
        let doc: WheelDocument =
            serde_json::from_str(r#"{"mode":"ALL_WIN","slots":[]}"#).unwrap();
        assert_eq!(doc.mode, WheelModeRecord::AllWin);
        let doc: WheelDocument = serde_json::from_str(r#"{"slots":[]}"#).unwrap();
        assert_eq!(doc.mode, WheelModeRecord::RandomWin);
    }

    #[test]
    fn spin_message_serializes_slot_id() {
        let msg = SpinMessage {
            slot_id: "a".into(),
            index: 2,
            label: "Free coffee".into(),
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(json, r#"{"slotId":"a","index":2,"label":"Free coffee"}"#);
    }

    #[test]
    fn display_index_carries_degraded_flag() {
        let d = DisplayIndex {
            index: 1,
            degraded: true,
        };
        assert_eq!(
            serde_json::to_string(&d).unwrap(),
            r#"{"index":1,"degraded":true}"#
        );
    }
}
