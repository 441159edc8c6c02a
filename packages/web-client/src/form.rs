//! Contact form submission: POST the fields as JSON and show a transient
//! success/error banner.

use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, FormData, HtmlElement, HtmlFormElement};

const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";
const BANNER_VISIBLE_MS: u32 = 5_000;
const BANNER_FADE_MS: u32 = 300;

/// Fields posted to the contact endpoint, mirroring the form inputs.
#[derive(Debug, Serialize)]
pub struct SubmissionPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl SubmissionPayload {
    fn from_form_data(data: &FormData) -> Self {
        Self {
            name: field(data, "name"),
            email: field(data, "email"),
            subject: field(data, "subject"),
            message: field(data, "message"),
        }
    }
}

fn field(data: &FormData, name: &str) -> String {
    data.get(name).as_string().unwrap_or_default()
}

pub fn init_contact_form(document: &Document) -> Option<()> {
    let form = document
        .get_element_by_id("contact-form")?
        .dyn_into::<HtmlFormElement>()
        .ok()?;

    let document = document.clone();
    let form_handle = form.clone();
    let on_submit = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        event.prevent_default();

        let Ok(data) = FormData::new_with_form(&form_handle) else {
            return;
        };
        let payload = SubmissionPayload::from_form_data(&data);

        let document = document.clone();
        let form = form_handle.clone();
        spawn_local(async move {
            match submit(&payload).await {
                Ok(message) => {
                    show_banner(&document, &message, BannerKind::Success);
                    form.reset();
                }
                Err(message) => show_banner(&document, &message, BannerKind::Error),
            }
        });
    });
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
        .ok()?;
    on_submit.forget();

    Some(())
}

/// POST the submission. Ok carries the acknowledgment text, Err the banner
/// text; a network failure maps to the generic message.
async fn submit(payload: &SubmissionPayload) -> Result<String, String> {
    let response = Request::post("/api/contact")
        .json(payload)
        .map_err(|_| GENERIC_FAILURE.to_string())?
        .send()
        .await
        .map_err(|_| GENERIC_FAILURE.to_string())?;

    let body: serde_json::Value = response
        .json()
        .await
        .map_err(|_| GENERIC_FAILURE.to_string())?;

    if body["success"] == true {
        Ok(body["message"]
            .as_str()
            .unwrap_or("Thank you for your message. We will get back to you soon.")
            .to_string())
    } else {
        Err(body["error"].as_str().unwrap_or(GENERIC_FAILURE).to_string())
    }
}

#[derive(Clone, Copy)]
pub enum BannerKind {
    Success,
    Error,
}

/// Fixed-position banner, auto-removed after five seconds with a short fade.
pub fn show_banner(document: &Document, message: &str, kind: BannerKind) {
    let Ok(banner) = document.create_element("div") else {
        return;
    };
    let (class, palette) = match kind {
        BannerKind::Success => (
            "alert alert-success",
            "background: #d4edda; color: #155724; border: 1px solid #c3e6cb;",
        ),
        BannerKind::Error => (
            "alert alert-error",
            "background: #f8d7da; color: #721c24; border: 1px solid #f5c6cb;",
        ),
    };
    banner.set_class_name(class);
    banner.set_text_content(Some(message));

    if let Some(element) = banner.dyn_ref::<HtmlElement>() {
        element.style().set_css_text(&format!(
            "position: fixed; top: 100px; right: 20px; padding: 1rem 1.5rem; \
             border-radius: 4px; z-index: 9999; transition: all 0.3s ease; {palette}"
        ));
    }

    let Some(body) = document.body() else {
        return;
    };
    if body.append_child(&banner).is_err() {
        return;
    }

    let fading = banner.clone();
    Timeout::new(BANNER_VISIBLE_MS, move || {
        if let Some(element) = fading.dyn_ref::<HtmlElement>() {
            let _ = element.style().set_property("opacity", "0");
            let _ = element.style().set_property("transform", "translateX(100%)");
        }
        Timeout::new(BANNER_FADE_MS, move || fading.remove()).forget();
    })
    .forget();
}
