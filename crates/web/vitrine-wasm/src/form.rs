//! `VitrineForm`: the contact form state machine exposed to JS.

use js_sys::{Array, Function};
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use vitrine_form::{
    ContactForm, Dispatch, DispatchOutcome, Field, FormConfig, FormValues, SimulatedTransport,
    SubmissionTransport, SubmitTicket,
};

use crate::{js_object, jsvalue_is_undefined_or_null};

/// Transport backed by a JS function `send(values, ticket)`.
///
/// A numeric return value is a delivery delay in ms; anything else leaves the
/// submission pending until JS calls `complete(ticket, ok, reason)`. A throw
/// fails the submission immediately.
struct JsTransport {
    f: Function,
}

impl SubmissionTransport for JsTransport {
    fn dispatch(&mut self, values: &FormValues, ticket: SubmitTicket) -> Dispatch {
        let payload = match swb::to_value(values) {
            Ok(v) => v,
            Err(e) => {
                return Dispatch::Deferred {
                    delay_ms: 0,
                    outcome: DispatchOutcome::failed(format!("values encode error: {e}")),
                }
            }
        };
        match self
            .f
            .call2(&JsValue::UNDEFINED, &payload, &JsValue::from(ticket.id()))
        {
            Ok(ret) => match ret.as_f64() {
                Some(ms) if ms >= 0.0 => Dispatch::Deferred {
                    delay_ms: ms.min(u32::MAX as f64) as u32,
                    outcome: DispatchOutcome::Delivered,
                },
                _ => Dispatch::Pending,
            },
            Err(e) => Dispatch::Deferred {
                delay_ms: 0,
                outcome: DispatchOutcome::failed(
                    e.as_string().unwrap_or_else(|| format!("{e:?}")),
                ),
            },
        }
    }
}

#[wasm_bindgen]
pub struct VitrineForm {
    core: ContactForm,
}

#[wasm_bindgen]
impl VitrineForm {
    /// Create a form. Pass a JSON config object or undefined/null for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<VitrineForm, JsError> {
        console_error_panic_hook::set_once();
        let cfg: FormConfig = if jsvalue_is_undefined_or_null(&config) {
            FormConfig::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        Ok(VitrineForm {
            core: ContactForm::new(cfg),
        })
    }

    /// Set `field` (`name`, `email`, `subject` or `message`).
    #[wasm_bindgen]
    pub fn edit(&mut self, field: &str, value: String) -> Result<(), JsError> {
        let field: Field = field
            .parse()
            .map_err(|e| JsError::new(&format!("edit error: {e}")))?;
        self.core
            .edit(field, value)
            .map_err(|e| JsError::new(&format!("edit error: {e}")))
    }

    /// Submit through `send` (see `JsTransport`), or through the simulated
    /// fixed-delay transport when `send` is undefined/null. Returns the ticket.
    #[wasm_bindgen]
    pub fn submit(&mut self, send: JsValue) -> Result<u32, JsError> {
        let result = if jsvalue_is_undefined_or_null(&send) {
            let mut simulated = SimulatedTransport::new(self.core.config().dispatch_delay_ms);
            self.core.submit(&mut simulated)
        } else {
            let f: Function = send
                .dyn_into()
                .map_err(|_| JsError::new("submit: send must be a function"))?;
            self.core.submit(&mut JsTransport { f })
        };
        result
            .map(SubmitTicket::id)
            .map_err(|e| JsError::new(&format!("submit error: {e}")))
    }

    /// Advance form time (ms). Returns the statuses entered, in order.
    #[wasm_bindgen]
    pub fn advance(&mut self, dt_ms: u32) -> Result<JsValue, JsError> {
        let entered = self.core.advance(dt_ms);
        swb::to_value(&entered).map_err(|e| JsError::new(&format!("advance error: {e}")))
    }

    /// Report the result of a pending JS submission.
    #[wasm_bindgen]
    pub fn complete(&mut self, ticket: u32, ok: bool, reason: Option<String>) -> bool {
        let outcome = if ok {
            DispatchOutcome::Delivered
        } else {
            DispatchOutcome::failed(reason.unwrap_or_default())
        };
        self.core.complete(SubmitTicket(ticket), outcome)
    }

    #[wasm_bindgen]
    pub fn status(&self) -> Result<JsValue, JsError> {
        swb::to_value(&self.core.status()).map_err(|e| JsError::new(&format!("status error: {e}")))
    }

    #[wasm_bindgen]
    pub fn label(&self) -> String {
        self.core.label().to_string()
    }

    #[wasm_bindgen]
    pub fn tone(&self) -> Result<JsValue, JsError> {
        swb::to_value(&self.core.tone()).map_err(|e| JsError::new(&format!("tone error: {e}")))
    }

    #[wasm_bindgen(js_name = reset_pending)]
    pub fn reset_pending(&self) -> bool {
        self.core.reset_pending()
    }

    #[wasm_bindgen(js_name = submit_disabled)]
    pub fn submit_disabled(&self) -> bool {
        self.core.submit_disabled()
    }

    #[wasm_bindgen]
    pub fn values(&self) -> Result<JsValue, JsError> {
        swb::to_value(self.core.values()).map_err(|e| JsError::new(&format!("values error: {e}")))
    }

    /// Cancel all timers; later calls are ignored.
    #[wasm_bindgen]
    pub fn teardown(&mut self) {
        self.core.teardown();
    }
}

/// Form fields in display order as `[{ name, label, placeholder }]`.
#[wasm_bindgen(js_name = form_fields)]
pub fn form_fields() -> Result<JsValue, JsError> {
    let fields = Array::new();
    for field in Field::ALL {
        fields.push(&js_object(&[
            ("name", JsValue::from_str(field.as_str())),
            ("label", JsValue::from_str(field.label())),
            ("placeholder", JsValue::from_str(field.placeholder())),
        ])?);
    }
    Ok(fields.into())
}
