//! Cross-cutting interaction feedback: every interactive surface routes
//! through here so a cue and its vibration pulse always travel together.

use site_core::{Cue, Feedback, FEEDBACK_HOVER};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::audio::SharedPlayer;
use crate::listeners::Listener;

pub fn vibrate(ms: u32) {
    if let Some(window) = web::window() {
        let _ = window.navigator().vibrate_with_duration(ms);
    }
}

pub fn vibrate_pattern(pattern: &[u32]) {
    if let Some(window) = web::window() {
        let steps = js_sys::Array::new();
        for ms in pattern {
            steps.push(&JsValue::from_f64(f64::from(*ms)));
        }
        let _ = window.navigator().vibrate_with_pattern(&steps.into());
    }
}

pub fn run(player: &SharedPlayer, feedback: Feedback) {
    player.borrow().play(feedback.cue);
    if let Some(ms) = feedback.vibrate_ms {
        vibrate(ms);
    }
}

/// Wires hover and click cues onto every element carrying a `data-cue`
/// attribute. The attribute names the click cue; hover feedback is implied.
pub fn wire_annotated(document: &web::Document, player: &SharedPlayer) -> Vec<Listener> {
    let mut listeners = Vec::new();
    let Ok(nodes) = document.query_selector_all("[data-cue]") else {
        return listeners;
    };
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let cue = el
            .get_attribute("data-cue")
            .and_then(|name| Cue::from_name(&name))
            .unwrap_or(Cue::Click);

        let hover_player = player.clone();
        listeners.push(Listener::new(el.as_ref(), "mouseenter", move |_ev| {
            run(&hover_player, FEEDBACK_HOVER);
        }));

        let click_player = player.clone();
        listeners.push(Listener::new(el.as_ref(), "click", move |_ev| {
            run(
                &click_player,
                Feedback {
                    cue,
                    vibrate_ms: Some(15),
                },
            );
        }));
    }
    listeners
}
