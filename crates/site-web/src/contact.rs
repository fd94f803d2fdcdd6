//! Contact form send and the QR deep link. The send is one shot: success
//! and failure both land in an inline status view, and failure's only
//! retry affordance is re-showing the form.

use std::cell::RefCell;
use std::rc::Rc;

use site_core::{qr_code_url, Cue, EmailPayload, SendStatus, TemplateParams, EMAIL_ENDPOINT};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

use crate::audio::SharedPlayer;
use crate::dom;
use crate::feedback;
use crate::listeners::Listener;

pub struct ContactView {
    _listeners: Vec<Listener>,
}

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{e:?}")
}

async fn send_email(body: String) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

    let headers = web::Headers::new().map_err(js_err)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(js_err)?;

    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&body));

    let request = web::Request::new_with_str_and_init(EMAIL_ENDPOINT, &init).map_err(js_err)?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let response: web::Response = response.dyn_into().map_err(js_err)?;
    if response.ok() {
        Ok(())
    } else {
        Err(anyhow::anyhow!("send rejected: HTTP {}", response.status()))
    }
}

fn render_status(document: &web::Document, status: SendStatus) {
    match status {
        SendStatus::Idle => {
            dom::show(document, "contact-form");
            dom::hide(document, "contact-status");
        }
        SendStatus::Sending => {
            dom::show(document, "contact-form");
            dom::show(document, "contact-status");
            dom::set_text(document, "contact-status", "Sending...");
        }
        SendStatus::Sent => {
            dom::hide(document, "contact-form");
            dom::show(document, "contact-status");
            dom::set_text(
                document,
                "contact-status",
                "Message sent! I'll get back to you soon.",
            );
        }
        SendStatus::Failed => {
            dom::hide(document, "contact-form");
            dom::show(document, "contact-status");
            dom::set_text(
                document,
                "contact-status",
                "Something went wrong. Tap retry to try again.",
            );
        }
    }
}

fn field_value(document: &web::Document, id: &str) -> String {
    if let Some(input) = dom::input_element(document, id) {
        return input.value();
    }
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlTextAreaElement>().ok())
        .map(|area| area.value())
        .unwrap_or_default()
}

fn clear_fields(document: &web::Document) {
    for id in ["contact-name", "contact-email", "contact-subject"] {
        if let Some(input) = dom::input_element(document, id) {
            input.set_value("");
        }
    }
    if let Some(area) = document
        .get_element_by_id("contact-message")
        .and_then(|el| el.dyn_into::<web::HtmlTextAreaElement>().ok())
    {
        area.set_value("");
    }
}

fn wire_qr(document: &web::Document) {
    let Some(img) = document
        .get_element_by_id("qr-code")
        .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok())
    else {
        return;
    };
    let Some(target) = img.get_attribute("data-target") else {
        return;
    };
    let encoded = String::from(js_sys::encode_uri_component(&target));
    img.set_src(&qr_code_url(&encoded));
}

pub fn mount(document: &web::Document, player: SharedPlayer) -> Option<ContactView> {
    wire_qr(document);

    let form = dom::element(document, "contact-form")?;
    let status = Rc::new(RefCell::new(SendStatus::default()));
    render_status(document, *status.borrow());

    let mut listeners = Vec::new();

    {
        let status = status.clone();
        let player = player.clone();
        let document = document.clone();
        listeners.push(Listener::new(form.as_ref(), "submit", move |ev| {
            ev.prevent_default();
            if !status.borrow_mut().begin() {
                return;
            }
            let payload = EmailPayload::new(TemplateParams {
                name: field_value(&document, "contact-name"),
                email: field_value(&document, "contact-email"),
                subject: field_value(&document, "contact-subject"),
                message: field_value(&document, "contact-message"),
            });
            let Ok(body) = serde_json::to_string(&payload) else {
                status.borrow_mut().finish(false);
                render_status(&document, *status.borrow());
                return;
            };
            render_status(&document, *status.borrow());

            let status = status.clone();
            let player = player.clone();
            let document = document.clone();
            spawn_local(async move {
                let sent = send_email(body).await;
                if let Err(e) = &sent {
                    log::warn!("[contact] send failed: {e}");
                }
                status.borrow_mut().finish(sent.is_ok());
                if sent.is_ok() {
                    player.borrow().play(Cue::Success);
                    feedback::vibrate_pattern(&[50, 100, 50]);
                    clear_fields(&document);
                } else {
                    player.borrow().play(Cue::Error);
                    feedback::vibrate(100);
                }
                render_status(&document, *status.borrow());
            });
        }));
    }

    if let Some(retry) = dom::element(document, "contact-retry") {
        let status = status.clone();
        let document = document.clone();
        listeners.push(Listener::new(retry.as_ref(), "click", move |_ev| {
            status.borrow_mut().reset();
            render_status(&document, *status.borrow());
        }));
    }

    Some(ContactView {
        _listeners: listeners,
    })
}
