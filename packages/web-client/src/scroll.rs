//! Smooth in-page scrolling and the header scroll effect.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions};

/// Extra gap kept between the fixed header and the scroll target.
const SCROLL_MARGIN_PX: f64 = 20.0;

/// Scroll position past which the header turns opaque and shadowed.
const HEADER_THRESHOLD_PX: f64 = 100.0;

/// Intercept `a[href^="#"]` clicks and scroll to the target, offset by the
/// fixed header's height plus a margin.
pub fn init_smooth_scrolling(document: &Document) -> Option<()> {
    let anchors = document.query_selector_all(r##"a[href^="#"]"##).ok()?;

    for anchor in crate::elements(&anchors) {
        let document = document.clone();
        let link = anchor.clone();
        let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            event.prevent_default();

            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Ok(Some(target)) = document.query_selector(&href) else {
                return;
            };
            let Some(target) = target.dyn_ref::<HtmlElement>().cloned() else {
                return;
            };
            let Some(window) = web_sys::window() else {
                return;
            };

            let header_height = document
                .query_selector(".header")
                .ok()
                .flatten()
                .and_then(|header| header.dyn_into::<HtmlElement>().ok())
                .map(|header| f64::from(header.offset_height()))
                .unwrap_or_default();
            let top = f64::from(target.offset_top()) - header_height - SCROLL_MARGIN_PX;

            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        });
        anchor
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .ok()?;
        on_click.forget();
    }

    Some(())
}

/// Swap the header's background and shadow as the page scrolls past the
/// threshold.
pub fn init_header_scroll(document: &Document) -> Option<()> {
    let window = web_sys::window()?;
    let header = document
        .query_selector(".header")
        .ok()??
        .dyn_into::<HtmlElement>()
        .ok()?;

    let window_handle = window.clone();
    let on_scroll = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event| {
        let scroll_top = window_handle.scroll_y().unwrap_or(0.0);
        let style = header.style();
        if scroll_top > HEADER_THRESHOLD_PX {
            let _ = style.set_property("background", "rgba(255, 255, 255, 0.98)");
            let _ = style.set_property("box-shadow", "0 2px 20px rgba(0, 0, 0, 0.1)");
        } else {
            let _ = style.set_property("background", "rgba(255, 255, 255, 0.95)");
            let _ = style.set_property("box-shadow", "none");
        }
    });
    window
        .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
        .ok()?;
    on_scroll.forget();

    Some(())
}
