#![cfg(target_arch = "wasm32")]

use replicator_engine::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn run_returns_result_object() {
    let lab = ReplicatorLab::new(0.0, 10.0, 0.0, 0.0);
    let value = lab.run().expect("valid sliders");
    let res: serde_json::Value = serde_wasm_bindgen::from_value(value).expect("plain object");
    assert_eq!(res["outcome"], "cooperation");
    assert_eq!(res["cooperators"].as_array().map(|a| a.len()), Some(51));
}

#[wasm_bindgen_test]
fn simulate_request_accepts_partial_object() {
    let req = SimulationRequest {
        payoffs: PayoffMatrix::new(5.0, 3.0, 1.0, 0.0),
        config: SimulationConfig::with_initial_fraction(0.0),
    };
    let js = serde_wasm_bindgen::to_value(&req).expect("serializable");
    let out = simulate_request(js).expect("valid request");
    let res: serde_json::Value = serde_wasm_bindgen::from_value(out).expect("plain object");
    assert_eq!(res["final_fraction"], 0.0);
    assert_eq!(res["outcome"], "defection");
}

#[wasm_bindgen_test]
fn simulate_request_rejects_garbage() {
    assert!(simulate_request(JsValue::from_str("not a request")).is_err());
}
