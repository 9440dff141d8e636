//! JS-backed implementations of the reveal engine's host traits.

use js_sys::{Array, Function, Reflect};
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use vitrine_reveal::{ElementHost, Rect, StyleChange, StyleSink};

fn optional_fn(obj: &JsValue, name: &str) -> Result<Option<Function>, JsError> {
    let v = Reflect::get(obj, &JsValue::from_str(name))
        .map_err(|e| JsError::new(&format!("host.{name} lookup failed: {e:?}")))?;
    if v.is_undefined() || v.is_null() {
        return Ok(None);
    }
    v.dyn_into::<Function>()
        .map(Some)
        .map_err(|_| JsError::new(&format!("host.{name} must be a function")))
}

/// Element queries answered by JS callbacks:
/// `{ rect(key) -> {top, left?, width?, height} | null, data?(key, attr) -> string | null,
///    children?(key, selector) -> string[] }`.
pub struct JsHost {
    rect: Function,
    data: Option<Function>,
    children: Option<Function>,
}

impl JsHost {
    pub fn from_js(host: &JsValue) -> Result<Self, JsError> {
        if host.is_undefined() || host.is_null() {
            return Err(JsError::new("host is null/undefined"));
        }
        let rect = optional_fn(host, "rect")?.ok_or_else(|| JsError::new("host.rect is required"))?;
        Ok(Self {
            rect,
            data: optional_fn(host, "data")?,
            children: optional_fn(host, "children")?,
        })
    }
}

impl ElementHost for JsHost {
    fn rect(&self, key: &str) -> Option<Rect> {
        let val = self.rect.call1(&JsValue::UNDEFINED, &JsValue::from_str(key)).ok()?;
        if val.is_undefined() || val.is_null() {
            return None;
        }
        swb::from_value(val).ok()
    }

    fn data(&self, key: &str, attr: &str) -> Option<String> {
        let f = self.data.as_ref()?;
        let val = f
            .call2(&JsValue::UNDEFINED, &JsValue::from_str(key), &JsValue::from_str(attr))
            .ok()?;
        val.as_string()
    }

    fn children(&self, key: &str, selector: &str) -> Vec<String> {
        let Some(f) = self.children.as_ref() else {
            return Vec::new();
        };
        match f.call2(
            &JsValue::UNDEFINED,
            &JsValue::from_str(key),
            &JsValue::from_str(selector),
        ) {
            Ok(val) if Array::is_array(&val) => Array::from(&val)
                .iter()
                .filter_map(|v| v.as_string())
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Forwards each style change to `sink(change, css)`, where `css` is the
/// value with its unit (`"25px"`, `"85%"`).
pub struct JsSink {
    f: Function,
    pub errors: usize,
}

impl JsSink {
    pub fn new(f: Function) -> Self {
        Self { f, errors: 0 }
    }
}

impl StyleSink for JsSink {
    fn apply(&mut self, change: &StyleChange) {
        let ok = swb::to_value(change)
            .ok()
            .map(|v| {
                let css = JsValue::from_str(&change.css_value());
                self.f.call2(&JsValue::UNDEFINED, &v, &css).is_ok()
            })
            .unwrap_or(false);
        if !ok {
            self.errors += 1;
        }
    }
}
