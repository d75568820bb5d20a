#![cfg(target_arch = "wasm32")]

//! Checks that real JS values coming over the bridge deserialize the way
//! the popup expects. Run with `wasm-pack test --headless --chrome`.

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use wut_link_popup::link_data::{LinkResponse, TabDescriptor};
use wut_link_popup::messages::flatten_errors;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn tab_query_result_deserializes() {
    let tab = Object::new();
    Reflect::set(&tab, &"id".into(), &JsValue::from_f64(7.0)).unwrap();
    Reflect::set(&tab, &"url".into(), &"https://example.com/".into()).unwrap();
    Reflect::set(&tab, &"pinned".into(), &JsValue::FALSE).unwrap();
    let tabs = Array::of1(&tab);

    let tabs: Vec<TabDescriptor> = serde_wasm_bindgen::from_value(tabs.into()).unwrap();

    assert_eq!(tabs.len(), 1);
    assert_eq!(tabs[0].url, "https://example.com/");
}

#[wasm_bindgen_test]
fn success_response_deserializes() {
    let response = Object::new();
    Reflect::set(&response, &"proxyUrl".into(), &"https://wut.link/abc".into()).unwrap();

    let response: LinkResponse = serde_wasm_bindgen::from_value(response.into()).unwrap();

    assert_eq!(response.proxy_url.as_deref(), Some("https://wut.link/abc"));
    assert!(response.failure().is_none());
}

#[wasm_bindgen_test]
fn error_response_keeps_presented_field_order() {
    let errors = Object::new();
    Reflect::set(&errors, &"url".into(), &Array::of1(&"too long".into())).unwrap();
    Reflect::set(&errors, &"date".into(), &Array::of1(&"invalid".into())).unwrap();
    let response = Object::new();
    Reflect::set(&response, &"errors".into(), &errors).unwrap();

    let response: LinkResponse = serde_wasm_bindgen::from_value(response.into()).unwrap();

    let flattened = flatten_errors(response.failure().unwrap());
    assert_eq!(flattened, vec!["too long", "invalid"]);
}
