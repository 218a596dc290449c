//! Browser binding over `web-sys`.
//!
//! [`WebDom`] implements [`Dom`] against the global `window`/`document`, and [`mount`] wires a
//! [`StickyHeader`] to a window `scroll` listener plus a `setInterval` timer. Both are released by
//! [`WebStickyHeader::dispose`], which also runs on drop.
use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Function, Object, Reflect};
use sticky_header::{
    Dom, EngineState, EventKind, Position, StickyHeader, StickyHeaderEvent, StickyHeaderOptions,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CustomEvent, CustomEventInit, Document, Element, HtmlElement, Window};

#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error(transparent)]
    Engine(#[from] sticky_header::Error),
    #[error("no global `window`")]
    NoWindow,
    #[error("`window` has no `document`")]
    NoDocument,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

fn report(result: Result<(), JsValue>, what: &'static str) {
    #[cfg(feature = "tracing")]
    {
        if let Err(err) = result {
            tracing::warn!(target: "sticky_header", error = ?err, what, "DOM call failed");
        }
    }
    #[cfg(not(feature = "tracing"))]
    let _ = (result, what);
}

fn px(value: i32) -> u64 {
    value.max(0) as u64
}

/// [`Dom`] over the live browser document.
#[derive(Clone, Debug)]
pub struct WebDom {
    window: Window,
    document: Document,
}

impl WebDom {
    pub fn new() -> Result<Self, WebError> {
        let window = web_sys::window().ok_or(WebError::NoWindow)?;
        let document = window.document().ok_or(WebError::NoDocument)?;
        Ok(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Dom for WebDom {
    type Element = Element;

    fn query_selector(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn scroll_top(&self) -> u64 {
        let body = self.document.body().map_or(0, |b| b.scroll_top());
        if body != 0 {
            return px(body);
        }
        self.document
            .document_element()
            .map_or(0, |e| px(e.scroll_top()))
    }

    fn offset_height(&self, element: &Element) -> u32 {
        element
            .dyn_ref::<HtmlElement>()
            .map_or(0, |e| e.offset_height().max(0) as u32)
    }

    fn page_top(&self, element: &Element) -> i64 {
        let body_top = self
            .document
            .body()
            .map_or(0.0, |b| b.get_bounding_client_rect().top());
        (element.get_bounding_client_rect().top() - body_top).round() as i64
    }

    fn viewport_height(&self) -> u64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .map_or(0, |h| h.max(0.0) as u64)
    }

    fn content_height(&self) -> u64 {
        self.document.body().map_or(0, |b| px(b.client_height()))
    }

    fn add_class(&mut self, element: &Element, class: &str) {
        report(element.class_list().add_1(class), "classList.add");
    }

    fn remove_class(&mut self, element: &Element, class: &str) {
        report(element.class_list().remove_1(class), "classList.remove");
    }

    fn set_position(&mut self, element: &Element, position: Position) {
        if let Some(element) = element.dyn_ref::<HtmlElement>() {
            report(
                element.style().set_property("position", position.as_css()),
                "style.position",
            );
        }
    }

    fn set_body_padding_top(&mut self, padding: u32) {
        if let Some(body) = self.document.body() {
            report(
                body.style()
                    .set_property("padding-top", &format!("{padding}px")),
                "body.style.paddingTop",
            );
        }
    }

    fn dispatch_event(&mut self, event: StickyHeaderEvent<'_, Element>) {
        let detail = Object::new();
        let set = |key: &str, value: &JsValue| {
            report(
                Reflect::set(&detail, &JsValue::from_str(key), value).map(|_| ()),
                "event detail",
            );
        };
        let header: &JsValue = event.header.as_ref();
        set("header", header);
        match &event.kind {
            EventKind::Over { element } => {
                let element = element.as_deref().map_or(JsValue::NULL, JsValue::from_str);
                set("element", &element);
            }
            EventKind::OffsetY { y, axis } => {
                set("y", &JsValue::from_f64(*y as f64));
                set("axis", &JsValue::from_str(axis.as_str()));
            }
            EventKind::Start | EventKind::End => {}
        }

        let init = CustomEventInit::new();
        init.set_detail(&detail);
        let dispatched = CustomEvent::new_with_event_init_dict(event.name(), &init)
            .and_then(|custom| self.document.dispatch_event(&custom).map(|_| ()));
        report(dispatched, "dispatchEvent");
    }
}

/// A mounted sticky header: the engine plus its scroll listener and polling timer.
pub struct WebStickyHeader {
    engine: Rc<RefCell<StickyHeader<WebDom>>>,
    window: Window,
    on_scroll: Option<Closure<dyn FnMut()>>,
    on_interval: Option<Closure<dyn FnMut()>>,
    interval_id: Option<i32>,
}

/// Creates a sticky header on the current page and starts listening.
pub fn mount(options: StickyHeaderOptions) -> Result<WebStickyHeader, WebError> {
    let dom = WebDom::new()?;
    let window = dom.window().clone();
    let period_ms = i32::try_from(options.poll_interval_ms).unwrap_or(i32::MAX);
    let engine = Rc::new(RefCell::new(StickyHeader::new(dom, options)?));

    let mut mounted = WebStickyHeader {
        engine: Rc::clone(&engine),
        window,
        on_scroll: None,
        on_interval: None,
        interval_id: None,
    };

    let on_scroll = Closure::<dyn FnMut()>::new({
        let engine = Rc::clone(&engine);
        move || match engine.try_borrow_mut() {
            Ok(mut engine) => engine.on_scroll_tick(),
            Err(_) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(target: "sticky_header", "engine busy; scroll tick skipped");
            }
        }
    });
    mounted
        .window
        .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    mounted.on_scroll = Some(on_scroll);

    let on_interval = Closure::<dyn FnMut()>::new(move || {
        if let Ok(mut engine) = engine.try_borrow_mut() {
            engine.poll();
        }
    });
    let interval_id = mounted
        .window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            on_interval.as_ref().unchecked_ref::<Function>(),
            period_ms,
        )?;
    mounted.on_interval = Some(on_interval);
    mounted.interval_id = Some(interval_id);

    #[cfg(feature = "tracing")]
    tracing::debug!(target: "sticky_header", period_ms, "mounted");
    Ok(mounted)
}

impl WebStickyHeader {
    /// Snapshot of the engine state; `None` while the engine is running a handler.
    pub fn state(&self) -> Option<EngineState> {
        self.engine.try_borrow().ok().map(|e| e.state().clone())
    }

    pub fn is_disposed(&self) -> bool {
        self.on_scroll.is_none() && self.interval_id.is_none()
    }

    /// Removes the scroll listener and clears the polling timer.
    pub fn dispose(&mut self) {
        if let Some(on_scroll) = self.on_scroll.take() {
            report(
                self.window
                    .remove_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref()),
                "removeEventListener",
            );
        }
        if let Some(id) = self.interval_id.take() {
            self.window.clear_interval_with_handle(id);
        }
        self.on_interval = None;
    }
}

impl Drop for WebStickyHeader {
    fn drop(&mut self) {
        self.dispose();
    }
}
