//! Mobile navigation: toggle the collapse panel, animate the toggler bars
//! into a cross, and close on outside click.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Node};

const BAR_TRANSFORMS: [&str; 2] = [
    "rotate(45deg) translate(5px, 5px)",
    "rotate(-45deg) translate(7px, -6px)",
];

pub fn init_mobile_nav(document: &Document) -> Option<()> {
    let toggler = document.query_selector(".navbar-toggler").ok()??;
    let panel = document.query_selector(".navbar-collapse").ok()??;

    {
        let toggler_handle = toggler.clone();
        let panel_handle = panel.clone();
        let on_toggle = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event| {
            let shown = panel_handle.class_list().toggle("show").unwrap_or(false);
            set_bar_transforms(&toggler_handle, shown);
        });
        toggler
            .add_event_listener_with_callback("click", on_toggle.as_ref().unchecked_ref())
            .ok()?;
        on_toggle.forget();
    }

    {
        let toggler = toggler.clone();
        let on_outside_click =
            Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
                let Some(target) = event
                    .target()
                    .and_then(|target| target.dyn_into::<Node>().ok())
                else {
                    return;
                };
                if toggler.contains(Some(&target)) || panel.contains(Some(&target)) {
                    return;
                }
                let _ = panel.class_list().remove_1("show");
                set_bar_transforms(&toggler, false);
            });
        document
            .add_event_listener_with_callback("click", on_outside_click.as_ref().unchecked_ref())
            .ok()?;
        on_outside_click.forget();
    }

    Some(())
}

fn set_bar_transforms(toggler: &Element, open: bool) {
    let Ok(bars) = toggler.query_selector_all(".navbar-toggler-bar") else {
        return;
    };
    for (index, bar) in crate::elements(&bars).enumerate() {
        if let Some(bar) = bar.dyn_ref::<HtmlElement>() {
            let transform = if open {
                BAR_TRANSFORMS.get(index).copied().unwrap_or("")
            } else {
                ""
            };
            let _ = bar.style().set_property("transform", transform);
        }
    }
}
