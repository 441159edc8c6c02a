//! IntersectionObserver-driven behavior: location reveal transitions and
//! lazy image loading.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, HtmlElement, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

/// Fade/slide `.location-item` elements in as they scroll into view.
///
/// Each item starts hidden with a transition delay staggered by index; once
/// an item intersects it stays revealed.
pub fn init_reveal_animations(document: &Document) -> Option<()> {
    let items = document.query_selector_all(".location-item").ok()?;
    if items.length() == 0 {
        return Some(());
    }

    let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                if let Some(element) = entry.target().dyn_ref::<HtmlElement>() {
                    let _ = element.style().set_property("opacity", "1");
                    let _ = element.style().set_property("transform", "translateY(0)");
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    options.set_root_margin("0px 0px -50px 0px");
    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
            .ok()?;
    on_intersect.forget();

    for (index, item) in crate::elements(&items).enumerate() {
        if let Some(element) = item.dyn_ref::<HtmlElement>() {
            let style = element.style();
            let _ = style.set_property("opacity", "0");
            let _ = style.set_property("transform", "translateY(30px)");
            let delay = index as f64 * 0.1;
            let _ = style.set_property(
                "transition",
                &format!("opacity 0.6s ease {delay}s, transform 0.6s ease {delay}s"),
            );
        }
        observer.observe(&item);
    }

    Some(())
}

/// Swap `data-src` into `src` when an image nears the viewport, then stop
/// observing it.
pub fn init_lazy_images(document: &Document) -> Option<()> {
    let images = document.query_selector_all("img[data-src]").ok()?;
    if images.length() == 0 {
        return Some(());
    }

    let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(src) = target.get_attribute("data-src") {
                    if let Some(image) = target.dyn_ref::<HtmlImageElement>() {
                        image.set_src(&src);
                    }
                }
                let _ = target.class_list().remove_1("lazy");
                observer.unobserve(&target);
            }
        },
    );

    let observer = IntersectionObserver::new(on_intersect.as_ref().unchecked_ref()).ok()?;
    on_intersect.forget();

    for image in crate::elements(&images) {
        observer.observe(&image);
    }

    Some(())
}
