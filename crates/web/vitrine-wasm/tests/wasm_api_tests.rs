#![cfg(target_arch = "wasm32")]
use js_sys::{Array, Function, Object, Reflect};
use serde::Serialize;
use serde_json::{json, Value};
use serde_wasm_bindgen as swb;
use vitrine_wasm::{
    abi_version, form_fields, nav_items, VitrineCursor, VitrineForm, VitrineNavMenu, VitrineReveal,
};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn js(v: Value) -> JsValue {
    v.serialize(&swb::Serializer::json_compatible()).unwrap()
}

fn host_with_box(top: f64) -> JsValue {
    let host = Object::new();
    let rect = Function::new_with_args(
        "key",
        &format!(
            "return key === 'box' ? {{ top: {top}, left: 0, width: 100, height: 100 }} : null;"
        ),
    );
    Reflect::set(&host, &"rect".into(), &rect).unwrap();
    host.into()
}

fn viewport(scroll: f64) -> JsValue {
    js(json!({
        "scroll_y": scroll,
        "width": 1280.0,
        "height": 800.0,
        "document_height": 6000.0
    }))
}

fn fade_spec() -> JsValue {
    js(json!({
        "target": "box",
        "start": "top bottom-=100",
        "mode": "reversible",
        "from": { "opacity": 0.0 },
        "to": { "opacity": 1.0 },
        "tween": { "duration": 0.5, "ease": "none" }
    }))
}

fn to_json(v: JsValue) -> Value {
    swb::from_value(v).unwrap()
}

#[wasm_bindgen_test]
fn abi_is_1() {
    assert_eq!(abi_version(), 1);
}

#[wasm_bindgen_test]
fn construct_with_defaults() {
    assert!(VitrineReveal::new(JsValue::UNDEFINED).is_ok());
    assert!(VitrineForm::new(JsValue::NULL).is_ok());
}

#[wasm_bindgen_test]
fn register_update_and_unregister() {
    let mut reveal = VitrineReveal::new(JsValue::NULL).unwrap();
    let id = reveal
        .register(fade_spec(), host_with_box(1500.0))
        .unwrap()
        .expect("box resolves");
    assert_eq!(reveal.len(), 1);

    let out = to_json(reveal.update(viewport(900.0), 1.0).unwrap());
    let changes = out["changes"].as_array().unwrap();
    assert!(changes
        .iter()
        .any(|c| c["target"] == "box" && c["property"] == "opacity"));
    assert_eq!(out["page"]["nav_scrolled"], true);

    assert!(reveal.unregister(id));
    assert!(!reveal.unregister(id));
    assert!(reveal.is_empty());
}

#[wasm_bindgen_test]
fn missing_element_returns_undefined_id() {
    let mut reveal = VitrineReveal::new(JsValue::NULL).unwrap();
    let spec = js(json!({
        "target": "ghost",
        "start": "top bottom",
        "mode": "once_forward"
    }));
    assert_eq!(reveal.register(spec, host_with_box(0.0)).unwrap(), None);
}

#[wasm_bindgen_test]
fn deferred_frame_is_dropped_after_unregister() {
    let mut reveal = VitrineReveal::new(JsValue::NULL).unwrap();
    let id = reveal
        .register(fade_spec(), host_with_box(1500.0))
        .unwrap()
        .unwrap();
    reveal.update_deferred(viewport(900.0), 0.25).unwrap();
    reveal.unregister(id);

    let seen = Array::new();
    let sink = Function::new_with_args("change", "this.push(change);")
        .bind(&seen);
    assert_eq!(reveal.flush(sink), 0);
    assert_eq!(seen.length(), 0);
}

#[wasm_bindgen_test]
fn flush_hands_sink_the_css_value() {
    let mut reveal = VitrineReveal::new(JsValue::NULL).unwrap();
    let spec = js(json!({
        "target": "box",
        "start": "top bottom-=100",
        "mode": "reversible",
        "from": { "y": 50.0 },
        "to": { "y": 0.0 },
        "tween": { "duration": 0.5, "ease": "none" }
    }));
    reveal.register(spec, host_with_box(1500.0)).unwrap().unwrap();
    reveal.update_deferred(viewport(900.0), 0.0).unwrap();

    let seen = Array::new();
    let sink = Function::new_with_args("change, css", "this.push(css);").bind(&seen);
    assert_eq!(reveal.flush(sink), 1);
    assert!(seen.iter().any(|v| v.as_string().as_deref() == Some("50px")));
}

#[wasm_bindgen_test]
fn mount_page_summary_is_a_plain_object() {
    let mut reveal = VitrineReveal::new(JsValue::NULL).unwrap();
    let summary = reveal.mount_page(host_with_box(0.0)).unwrap();
    let field = |k: &str| Reflect::get(&summary, &k.into()).unwrap().as_f64();
    assert_eq!(field("registered"), Some(0.0));
    assert!(field("skipped").unwrap() > 0.0);
}

#[wasm_bindgen_test]
fn form_round_trip_with_simulated_transport() {
    let mut form = VitrineForm::new(JsValue::UNDEFINED).unwrap();
    form.edit("name", "Jean Dupont".into()).unwrap();
    form.edit("email", "jean@example.com".into()).unwrap();
    form.edit("subject", "Test".into()).unwrap();
    form.edit("message", "Hello".into()).unwrap();
    assert!(form.edit("phone", "x".into()).is_err());

    form.submit(JsValue::UNDEFINED).unwrap();
    assert!(form.submit_disabled());
    assert_eq!(form.label(), "Envoi...");

    let entered = to_json(form.advance(1500).unwrap());
    assert_eq!(entered, json!(["success"]));
    assert!(form.reset_pending());
    assert_eq!(to_json(form.values().unwrap())["name"], "");
    let entered = to_json(form.advance(3000).unwrap());
    assert_eq!(entered, json!(["idle"]));
}

#[wasm_bindgen_test]
fn form_with_pending_js_transport() {
    let mut form = VitrineForm::new(JsValue::NULL).unwrap();
    for field in ["name", "email", "subject", "message"] {
        form.edit(field, "x".into()).unwrap();
    }
    let send = Function::new_with_args("values, ticket", "return undefined;");
    let ticket = form.submit(send.into()).unwrap();
    assert!(to_json(form.advance(10_000).unwrap()).as_array().unwrap().is_empty());
    assert!(form.complete(ticket, false, Some("offline".into())));
    assert_eq!(form.label(), "Erreur d'envoi");
    assert_eq!(to_json(form.tone().unwrap()), json!("error"));
}

#[wasm_bindgen_test]
fn cursor_and_nav_items() {
    let mut cursor = VitrineCursor::new(false);
    cursor.pointer_move(100.0, 50.0);
    cursor.enter("a.cta");
    assert!(cursor.is_hovering());
    cursor.leave("a.cta");
    assert!(!cursor.is_hovering());
    let changes = to_json(cursor.advance(0.5).unwrap());
    assert!(!changes.as_array().unwrap().is_empty());

    let items = to_json(nav_items().unwrap());
    assert_eq!(items[0]["name"], "Accueil");
    assert_eq!(items.as_array().unwrap().len(), 5);
}

#[wasm_bindgen_test]
fn nav_menu_closes_on_link_click() {
    let mut menu = VitrineNavMenu::new();
    assert!(!menu.is_open());
    assert!(menu.toggle());
    menu.link_click();
    assert!(!menu.is_open());
}

#[wasm_bindgen_test]
fn form_fields_carry_labels_and_placeholders() {
    let fields = to_json(form_fields().unwrap());
    assert_eq!(fields.as_array().unwrap().len(), 4);
    assert_eq!(fields[0]["name"], "name");
    assert_eq!(fields[0]["label"], "Nom complet");
    assert_eq!(fields[0]["placeholder"], "Jean Dupont");
}
