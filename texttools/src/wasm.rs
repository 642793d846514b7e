use crate::{base64, json};
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn to_json<T: Serialize>(result: &T) -> String {
    serde_json::to_string(result).unwrap_or_else(|e| {
        format!(
            r#"{{"value":null,"error":"Serialization failed: {}"}}"#,
            e.to_string().replace('"', "\\\"")
        )
    })
}

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
}

/// Returns `{"is_valid":..,"pretty_text":..,"error":..}`
#[wasm_bindgen(js_name = parseJson)]
pub fn parse_json(json_text: &str) -> String {
    to_json(&json::validate(json_text))
}

/// Returns `{"value":..,"error":..}`
#[wasm_bindgen(js_name = encodeBase64)]
pub fn encode_base64(text: &str) -> String {
    to_json(&base64::encode(text))
}

/// Returns `{"value":..,"error":..}`
#[wasm_bindgen(js_name = decodeBase64)]
pub fn decode_base64(base64_text: &str) -> String {
    to_json(&base64::decode(base64_text))
}
