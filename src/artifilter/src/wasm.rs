//! WebAssembly bindings for artifilter
//!
//! JSON in, JSON out, so the display layer can hand over its build store as-is.

use crate::builds::{BuildGroup, ComputeOptions};
use crate::filters::compute_artifact_filters as rust_compute;
use crate::probability::{slot_match_probability as rust_probability, slot_odds as rust_odds};
use crate::reference::SlotKey;
use crate::requirement::SlotRequirement;
use wasm_bindgen::prelude::*;

fn parse_slot(slot: &str) -> Result<SlotKey, JsValue> {
    slot.parse::<SlotKey>().map_err(|e| JsValue::from_str(&e))
}

fn parse_requirement(json: &str) -> Result<SlotRequirement, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid requirement: {}", e)))
}

/// Compute filter configurations for every set
///
/// # Arguments
/// * `build_groups_json` - `[{ characterId, builds }]`
/// * `options_json` - `ComputeOptions`; missing fields take their defaults
///
/// # Returns
/// `EquipmentSetFilterResult[]` as JSON
#[wasm_bindgen(js_name = computeArtifactFilters)]
pub fn compute_artifact_filters(build_groups_json: &str, options_json: &str) -> Result<String, JsValue> {
    let groups: Vec<BuildGroup> = serde_json::from_str(build_groups_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid builds: {}", e)))?;
    let options: ComputeOptions = if options_json.trim().is_empty() {
        ComputeOptions::default()
    } else {
        serde_json::from_str(options_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid options: {}", e)))?
    };

    serde_json::to_string(&rust_compute(&groups, &options))
        .map_err(|e| JsValue::from_str(&format!("Serialize failed: {}", e)))
}

/// Probability (0-1) that a fresh piece for `slot` matches the requirement
#[wasm_bindgen(js_name = slotMatchProbability)]
pub fn slot_match_probability(slot: &str, requirement_json: &str) -> Result<f64, JsValue> {
    Ok(rust_probability(parse_slot(slot)?, &parse_requirement(requirement_json)?))
}

/// Base and tightened odds as JSON `{ base, tightened? }`
#[wasm_bindgen(js_name = slotOdds)]
pub fn slot_odds(slot: &str, requirement_json: &str) -> Result<String, JsValue> {
    let odds = rust_odds(parse_slot(slot)?, &parse_requirement(requirement_json)?);
    serde_json::to_string(&odds).map_err(|e| JsValue::from_str(&format!("Serialize failed: {}", e)))
}
