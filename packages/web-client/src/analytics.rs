//! Click-time analytics and the global error hook.
//!
//! The collector is an injected capability: when the page carries no `gtag`
//! a no-op sink stands in, so call sites never branch on its presence.

use std::rc::Rc;

use serde_json::json;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, ErrorEvent};

pub trait AnalyticsSink {
    fn emit(&self, event: &str, params: serde_json::Value);
}

/// Forwards events to the page's `gtag` function.
struct GtagSink {
    gtag: js_sys::Function,
}

impl AnalyticsSink for GtagSink {
    fn emit(&self, event: &str, params: serde_json::Value) {
        let params = js_sys::JSON::parse(&params.to_string()).unwrap_or(JsValue::NULL);
        let _ = self
            .gtag
            .call3(&JsValue::NULL, &"event".into(), &event.into(), &params);
    }
}

struct NoopSink;

impl AnalyticsSink for NoopSink {
    fn emit(&self, _event: &str, _params: serde_json::Value) {}
}

/// Probe `window.gtag` once at startup.
pub fn collector() -> Rc<dyn AnalyticsSink> {
    if let Some(window) = web_sys::window() {
        if let Ok(value) = js_sys::Reflect::get(&window, &"gtag".into()) {
            if let Some(gtag) = value.dyn_ref::<js_sys::Function>() {
                return Rc::new(GtagSink { gtag: gtag.clone() });
            }
        }
    }
    Rc::new(NoopSink)
}

/// Emit events for phone, email, and external link clicks.
pub fn init_link_tracking(document: &Document, collector: Rc<dyn AnalyticsSink>) {
    let _ = track_clicks(
        document,
        r#"a[href^="tel:"]"#,
        collector.clone(),
        "phone_click",
        phone_params,
    );
    let _ = track_clicks(
        document,
        r#"a[href^="mailto:"]"#,
        collector.clone(),
        "email_click",
        email_params,
    );
    let _ = track_clicks(
        document,
        r#"a[target="_blank"]"#,
        collector,
        "external_link_click",
        external_params,
    );
}

fn track_clicks(
    document: &Document,
    selector: &str,
    collector: Rc<dyn AnalyticsSink>,
    event_name: &'static str,
    params_for: fn(&Element) -> serde_json::Value,
) -> Option<()> {
    let links = document.query_selector_all(selector).ok()?;
    for link in crate::elements(&links) {
        let collector = collector.clone();
        let element = link.clone();
        let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event| {
            collector.emit(event_name, params_for(&element));
        });
        link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .ok()?;
        on_click.forget();
    }
    Some(())
}

fn phone_params(link: &Element) -> serde_json::Value {
    let href = link.get_attribute("href").unwrap_or_default();
    let location = link
        .closest(".location-item")
        .ok()
        .flatten()
        .and_then(|item| item.query_selector(".location-item-title").ok().flatten())
        .and_then(|title| title.text_content())
        .unwrap_or_else(|| "Unknown".to_string());
    json!({
        "phone_number": href.trim_start_matches("tel:"),
        "location": location,
    })
}

fn email_params(link: &Element) -> serde_json::Value {
    let href = link.get_attribute("href").unwrap_or_default();
    json!({
        "email_address": href.trim_start_matches("mailto:"),
        "link_text": link.text_content().unwrap_or_default(),
    })
}

fn external_params(link: &Element) -> serde_json::Value {
    json!({
        "link_url": link.get_attribute("href").unwrap_or_default(),
        "link_text": link.text_content().unwrap_or_default(),
    })
}

/// Forward uncaught script errors to the collector as non-fatal exceptions.
pub fn init_error_hook(collector: Rc<dyn AnalyticsSink>) -> Option<()> {
    let window = web_sys::window()?;
    let on_error = Closure::<dyn FnMut(ErrorEvent)>::new(move |event: ErrorEvent| {
        web_sys::console::error_2(&"JavaScript error:".into(), &event.error());
        collector.emit(
            "exception",
            json!({
                "description": event.message(),
                "fatal": false,
            }),
        );
    });
    window
        .add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())
        .ok()?;
    on_error.forget();
    Some(())
}
