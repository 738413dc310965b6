//! JavaScript bindings for the build record.
//!
//! Instantiating the module runs the start-up initializer, so
//! `getSystemBuildInfo()` always sees the stamped record:
//!
//! ```js
//! import init, { getSystemBuildInfo, HelloClass } from "./buildstamp_wasm.js";
//! await init();
//! console.log(getSystemBuildInfo().revision);
//! new HelloClass("hi").sayHello();
//! ```

use buildstamp_types::{BuildRecord, FieldValue};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsError> {
    buildstamp_registry::init()
        .map(|_| ())
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Copies the build record into a plain object keyed by field name.
#[wasm_bindgen(js_name = getSystemBuildInfo)]
pub fn get_system_build_info() -> Result<js_sys::Object, JsValue> {
    let obj = js_sys::Object::new();
    for (key, value) in host_entries(buildstamp_registry::system_build_info()) {
        js_sys::Reflect::set(&obj, &JsValue::from_str(key), &to_js(value))?;
    }
    Ok(obj)
}

/// Key/value pairs mirrored into the host object, in record order.
pub fn host_entries(record: &BuildRecord) -> impl Iterator<Item = (&'static str, FieldValue<'_>)> {
    record.entries().map(|(field, value)| (field.as_str(), value))
}

fn to_js(value: FieldValue<'_>) -> JsValue {
    match value {
        FieldValue::Int(v) => JsValue::from(v),
        FieldValue::Text(s) => JsValue::from_str(s),
    }
}

/// Demo class: remembers a message and prints it on request.
#[wasm_bindgen]
pub struct HelloClass {
    message: String,
}

#[wasm_bindgen]
impl HelloClass {
    #[wasm_bindgen(constructor)]
    pub fn new(message: String) -> HelloClass {
        HelloClass { message }
    }

    #[wasm_bindgen(js_name = sayHello)]
    pub fn say_hello(&self) {
        web_sys::console::log_1(&JsValue::from_str(&self.greeting()));
    }
}

impl HelloClass {
    pub fn greeting(&self) -> String {
        format!("HelloClass says: {}", self.message)
    }
}
