use prizewheel_core::{Presenter, Slot};
use prizewheel_shared::{DisplayIndex, SlotRecord, SpinMessage};
use wasm_bindgen::prelude::*;

// The browser fetches the slot list itself and receives only the spin message.
// It must order with the same comparator as the server, so both entry points
// go through prizewheel_core.

fn parse_slots(slots_json: &str) -> Result<Vec<Slot>, String> {
    let records: Vec<SlotRecord> =
        serde_json::from_str(slots_json).map_err(|e| format!("invalid slots: {e}"))?;
    Ok(records.into_iter().map(Slot::from).collect())
}

fn presenter(slots_json: &str) -> Result<Presenter, String> {
    let slots = parse_slots(slots_json)?;
    Presenter::new(&slots).map_err(|e| e.to_string())
}

fn ordered_ids(slots_json: &str) -> Result<String, String> {
    let presenter = presenter(slots_json)?;
    let ids: Vec<&str> = presenter
        .ordered()
        .iter()
        .map(|s| s.id.as_str())
        .collect();
    serde_json::to_string(&ids).map_err(|e| e.to_string())
}

fn display_index(slots_json: &str, message_json: &str) -> Result<DisplayIndex, String> {
    let presenter = presenter(slots_json)?;
    let message: SpinMessage =
        serde_json::from_str(message_json).map_err(|e| format!("invalid message: {e}"))?;
    let resolution = presenter
        .resolve_or_fallback(&message)
        .map_err(|e| e.to_string())?;
    Ok(DisplayIndex {
        index: resolution.index,
        degraded: resolution.degraded,
    })
}

/// JSON array of slot ids in display order.
#[wasm_bindgen]
pub fn order_slot_ids(slots_json: &str) -> Result<String, JsValue> {
    ordered_ids(slots_json).map_err(|e| JsValue::from_str(&e))
}

/// `{"index": n, "degraded": bool}` for the wheel animation. `degraded` is
/// true when the slot id was unknown here and `index` is the server's hint;
/// the caller decides whether to show it or reject the spin.
#[wasm_bindgen]
pub fn resolve_display_index(slots_json: &str, message_json: &str) -> Result<String, JsValue> {
    display_index(slots_json, message_json)
        .and_then(|d| serde_json::to_string(&d).map_err(|e| e.to_string()))
        .map_err(|e| JsValue::from_str(&e))
}
