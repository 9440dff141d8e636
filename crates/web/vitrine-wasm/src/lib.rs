use hashbrown::HashMap;
use js_sys::{Function, Object, Reflect};
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use vitrine_reveal::{
    mount_page, CustomCursor, Hoverable, MountedPage, NavMenu, Outputs, PendingFrame,
    PointerKind, RevealConfig, RevealRegistry, ScrollTriggerSpec, SmoothScroll, TriggerHandle,
    Viewport, NAV_ITEMS,
};

mod form;
mod host;

pub use form::{form_fields, VitrineForm};
use host::{JsHost, JsSink};

pub(crate) fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

/// Plain JS object from key/value pairs.
pub(crate) fn js_object(entries: &[(&str, JsValue)]) -> Result<JsValue, JsError> {
    let obj = Object::new();
    for (key, value) in entries {
        Reflect::set(&obj, &JsValue::from_str(key), value)
            .map_err(|e| JsError::new(&format!("object field '{key}' error: {e:?}")))?;
    }
    Ok(obj.into())
}

fn parse_config(config: JsValue) -> Result<RevealConfig, JsError> {
    if jsvalue_is_undefined_or_null(&config) {
        Ok(RevealConfig::default())
    } else {
        swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))
    }
}

fn parse_viewport(viewport: JsValue) -> Result<Viewport, JsError> {
    swb::from_value(viewport).map_err(|e| JsError::new(&format!("viewport error: {e}")))
}

/// The reveal registry for one page, plus its mounted sections.
#[wasm_bindgen]
pub struct VitrineReveal {
    core: RevealRegistry,
    handles: HashMap<u32, TriggerHandle>,
    page: Option<MountedPage>,
    pending: PendingFrame,
    scroll: SmoothScroll,
}

#[wasm_bindgen]
impl VitrineReveal {
    /// Create and initialise a registry. Pass a JSON config object or
    /// undefined/null for defaults.
    ///   new VitrineReveal({ reduced_motion: true })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<VitrineReveal, JsError> {
        console_error_panic_hook::set_once();
        let cfg = parse_config(config)?;
        let delay = cfg.smooth_scroll_delay_ms;
        Ok(VitrineReveal {
            core: RevealRegistry::new(cfg),
            handles: HashMap::new(),
            page: None,
            pending: PendingFrame::default(),
            scroll: SmoothScroll::new(delay),
        })
    }

    /// Re-initialise after `dispose_all` (or reset a live registry).
    #[wasm_bindgen]
    pub fn init(&mut self, config: JsValue) -> Result<(), JsError> {
        let cfg = parse_config(config)?;
        self.scroll = SmoothScroll::new(cfg.smooth_scroll_delay_ms);
        self.core.init(cfg);
        self.handles.clear();
        self.page = None;
        self.pending = PendingFrame::default();
        Ok(())
    }

    /// Register one scroll trigger. `host` provides `rect`, and optionally
    /// `data` and `children`, callbacks. Returns the trigger id, or
    /// undefined when the elements could not be resolved.
    #[wasm_bindgen]
    pub fn register(&mut self, spec: JsValue, host: JsValue) -> Result<Option<u32>, JsError> {
        let spec: ScrollTriggerSpec =
            swb::from_value(spec).map_err(|e| JsError::new(&format!("spec error: {e}")))?;
        let host = JsHost::from_js(&host)?;
        Ok(self.core.register(spec, &host).map(|h| {
            let id = h.id().0;
            self.handles.insert(id, h);
            id
        }))
    }

    #[wasm_bindgen]
    pub fn unregister(&mut self, id: u32) -> bool {
        match self.handles.remove(&id) {
            Some(handle) => self.core.unregister(&handle),
            None => false,
        }
    }

    /// Register every trigger of the portfolio page and start its intro.
    /// Returns `{ registered, skipped }`.
    #[wasm_bindgen(js_name = mount_page)]
    pub fn mount_page(&mut self, host: JsValue) -> Result<JsValue, JsError> {
        let host = JsHost::from_js(&host)?;
        if let Some(previous) = self.page.take() {
            previous.unmount(&mut self.core);
        }
        let page = mount_page(&mut self.core, &host)
            .map_err(|e| JsError::new(&format!("mount_page error: {e}")))?;
        let summary = js_object(&[
            ("registered", JsValue::from(page.handles().len() as u32)),
            ("skipped", JsValue::from(page.skipped() as u32)),
        ])?;
        self.page = Some(page);
        Ok(summary)
    }

    #[wasm_bindgen(js_name = unmount_page)]
    pub fn unmount_page(&mut self) {
        if let Some(page) = self.page.take() {
            page.unmount(&mut self.core);
        }
    }

    /// Sample the viewport and advance tweens by `dt` seconds. Returns the
    /// Outputs JSON (`changes`, `events`, `page`).
    #[wasm_bindgen]
    pub fn update(&mut self, viewport: JsValue, dt: f32) -> Result<JsValue, JsError> {
        let vp = parse_viewport(viewport)?;
        let out: &Outputs = self.core.update(vp, dt);
        swb::to_value(out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    /// Like `update`, but holds the changes until `flush` so a host can apply
    /// them on the next animation frame. Returns the page state.
    #[wasm_bindgen(js_name = update_deferred)]
    pub fn update_deferred(&mut self, viewport: JsValue, dt: f32) -> Result<JsValue, JsError> {
        let vp = parse_viewport(viewport)?;
        let page = self.core.update(vp, dt).page;
        self.pending = self.core.pending_frame();
        swb::to_value(&page).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    /// Apply held changes through `sink(change, css)`. Changes of triggers
    /// unregistered since `update_deferred` are dropped. Returns the number of
    /// batches applied.
    #[wasm_bindgen]
    pub fn flush(&mut self, sink: Function) -> u32 {
        let mut sink = JsSink::new(sink);
        let fired = std::mem::take(&mut self.pending).fire(&mut sink);
        if sink.errors > 0 {
            log::warn!("{} style change(s) rejected by sink", sink.errors);
        }
        fired as u32
    }

    /// Advance the page intro and transition timelines by `dt` seconds.
    #[wasm_bindgen(js_name = advance_page)]
    pub fn advance_page(&mut self, dt: f32) -> Result<JsValue, JsError> {
        let changes = self
            .page
            .as_mut()
            .map(|p| p.advance(dt))
            .unwrap_or_default();
        swb::to_value(&changes).map_err(|e| JsError::new(&format!("advance_page error: {e}")))
    }

    /// Recompute cached element positions after a layout change.
    #[wasm_bindgen]
    pub fn resize(&mut self, viewport: JsValue, host: JsValue) -> Result<(), JsError> {
        let vp = parse_viewport(viewport)?;
        let host = JsHost::from_js(&host)?;
        self.core.resize(vp, &host);
        Ok(())
    }

    /// Anchor click. Returns true when a scroll was scheduled.
    #[wasm_bindgen(js_name = link_click)]
    pub fn link_click(&mut self, href: &str, host: JsValue) -> Result<bool, JsError> {
        let host = JsHost::from_js(&host)?;
        Ok(self.scroll.on_link_click(href, &host))
    }

    /// Advance the smooth-scroll delay (ms). Returns `{ top }` when the host
    /// should scroll now.
    #[wasm_bindgen(js_name = advance_scroll)]
    pub fn advance_scroll(&mut self, dt_ms: f32) -> Result<JsValue, JsError> {
        match self.scroll.advance(dt_ms) {
            Some(req) => {
                swb::to_value(&req).map_err(|e| JsError::new(&format!("scroll error: {e}")))
            }
            None => Ok(JsValue::UNDEFINED),
        }
    }

    #[wasm_bindgen]
    pub fn len(&self) -> usize {
        self.core.len()
    }

    #[wasm_bindgen(js_name = is_empty)]
    pub fn is_empty(&self) -> bool {
        self.core.is_empty()
    }

    /// Tear down every registration. Calls other than `init` become no-ops.
    #[wasm_bindgen(js_name = dispose_all)]
    pub fn dispose_all(&mut self) {
        if let Some(page) = self.page.take() {
            page.unmount(&mut self.core);
        }
        self.core.dispose_all();
        self.handles.clear();
        self.scroll.detach();
    }
}

/// Custom cursor followers. Inert on coarse pointers.
#[wasm_bindgen]
pub struct VitrineCursor {
    core: CustomCursor,
}

#[wasm_bindgen]
impl VitrineCursor {
    #[wasm_bindgen(constructor)]
    pub fn new(coarse_pointer: bool) -> VitrineCursor {
        let pointer = if coarse_pointer {
            PointerKind::Coarse
        } else {
            PointerKind::Fine
        };
        VitrineCursor {
            core: CustomCursor::new(pointer),
        }
    }

    #[wasm_bindgen(js_name = pointer_move)]
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.core.pointer_move(x, y);
    }

    #[wasm_bindgen]
    pub fn enter(&mut self, element: &str) {
        self.core.on_enter(element);
    }

    #[wasm_bindgen]
    pub fn leave(&mut self, element: &str) {
        self.core.on_leave(element);
    }

    #[wasm_bindgen(js_name = is_hovering)]
    pub fn is_hovering(&self) -> bool {
        self.core.is_hovering()
    }

    #[wasm_bindgen]
    pub fn advance(&mut self, dt: f32) -> Result<JsValue, JsError> {
        swb::to_value(&self.core.advance(dt))
            .map_err(|e| JsError::new(&format!("cursor error: {e}")))
    }

    #[wasm_bindgen]
    pub fn detach(&mut self) {
        self.core.detach();
    }
}

/// Mobile navigation menu state; any link click closes it.
#[wasm_bindgen]
#[derive(Default)]
pub struct VitrineNavMenu {
    core: NavMenu,
}

#[wasm_bindgen]
impl VitrineNavMenu {
    #[wasm_bindgen(constructor)]
    pub fn new() -> VitrineNavMenu {
        VitrineNavMenu::default()
    }

    #[wasm_bindgen]
    pub fn toggle(&mut self) -> bool {
        self.core.toggle();
        self.core.is_open()
    }

    #[wasm_bindgen(js_name = link_click)]
    pub fn link_click(&mut self) {
        self.core.on_link_click();
    }

    #[wasm_bindgen(js_name = is_open)]
    pub fn is_open(&self) -> bool {
        self.core.is_open()
    }
}

/// Navigation entries as `[{ name, href }]`.
#[wasm_bindgen(js_name = nav_items)]
pub fn nav_items() -> Result<JsValue, JsError> {
    swb::to_value(&NAV_ITEMS).map_err(|e| JsError::new(&format!("nav_items error: {e}")))
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
