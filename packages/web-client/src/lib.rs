// WME Agency site - browser UI controller
//
// Compiled to WASM with wasm-pack and loaded by the contact page. Each
// concern initializes independently and is a no-op when its elements are
// absent, so the module is safe to load on any page.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, NodeList};

pub mod analytics;
pub mod form;
pub mod nav;
pub mod observe;
pub mod scroll;

#[wasm_bindgen(start)]
pub fn start() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let collector = analytics::collector();

    let _ = nav::init_mobile_nav(&document);
    let _ = scroll::init_smooth_scrolling(&document);
    let _ = scroll::init_header_scroll(&document);
    let _ = observe::init_reveal_animations(&document);
    let _ = observe::init_lazy_images(&document);
    let _ = form::init_contact_form(&document);
    analytics::init_link_tracking(&document, collector.clone());
    let _ = analytics::init_error_hook(collector);

    web_sys::console::log_1(&"WME Agency site initialized".into());
}

/// Iterate a `NodeList` as elements, skipping anything that is not one.
pub(crate) fn elements(list: &NodeList) -> impl Iterator<Item = Element> + '_ {
    (0..list.length()).filter_map(|index| {
        list.item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
    })
}
