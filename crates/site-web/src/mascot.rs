//! DOM wiring for the mascot agent: greeting timer, scroll minimization,
//! pointer-driven dragging, and the click message loop. All state lives in
//! `site_core::Mascot`; this module replays its effects and renders.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use rand::rngs::StdRng;
use site_core::{Effect, Effects, Mascot, GREETING_DELAY_MS};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::audio::SharedPlayer;
use crate::dom;
use crate::feedback;
use crate::listeners::{Listener, Timeout};

pub struct MascotView {
    _listeners: Vec<Listener>,
    // Pending greeting; dropped (cancelled) with the view.
    _greeting: Option<Timeout>,
    _speech_timer: Rc<RefCell<Option<Timeout>>>,
}

#[derive(Clone)]
struct Ctx {
    state: Rc<RefCell<Mascot>>,
    player: SharedPlayer,
    el: web::HtmlElement,
    document: web::Document,
    speech_timer: Rc<RefCell<Option<Timeout>>>,
}

fn render_parts(el: &web::HtmlElement, document: &web::Document, state: &Mascot) {
    let mut classes = format!("mascot {}", state.mood().class());
    if state.is_minimized() {
        classes.push_str(" minimized");
    }
    if state.is_dragging() {
        classes.push_str(" dragging");
    }
    if state.is_speaking() {
        classes.push_str(" speaking");
    }
    el.set_class_name(&classes);

    let pos = state.position();
    let style = el.style();
    let _ = style.set_property("left", &format!("{}px", pos.x));
    let _ = style.set_property("top", &format!("{}px", pos.y));

    match state.message() {
        Some(text) => {
            dom::set_text(document, "mascot-speech", text);
            dom::show(document, "mascot-speech");
        }
        None => {
            dom::hide(document, "mascot-speech");
        }
    }
}

fn render(ctx: &Ctx) {
    render_parts(&ctx.el, &ctx.document, &ctx.state.borrow());
}

fn run_effects(ctx: &Ctx, effects: Effects) {
    for effect in effects {
        match effect {
            Effect::Play(cue) => ctx.player.borrow().play(cue),
            Effect::Vibrate(ms) => feedback::vibrate(ms),
            Effect::ScheduleSpeechEnd { seq, after_ms } => {
                // The closure must not capture the speech-timer slot, or
                // the guard stored in it could never drop.
                let state = ctx.state.clone();
                let el = ctx.el.clone();
                let document = ctx.document.clone();
                let timer = Timeout::new(after_ms, move || {
                    // Stale timers for superseded speeches are ignored.
                    let cleared = state.borrow_mut().speech_timer_fired(seq);
                    if cleared {
                        render_parts(&el, &document, &state.borrow());
                    }
                });
                // Replacing the slot cancels any superseded timer.
                *ctx.speech_timer.borrow_mut() = timer;
            }
        }
    }
}

fn pointer_pos(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

pub fn mount(
    document: &web::Document,
    player: SharedPlayer,
    rng: Rc<RefCell<StdRng>>,
) -> Option<MascotView> {
    let el = dom::html_element(document, "mascot")?;
    let window = web::window()?;

    let ctx = Ctx {
        state: Rc::new(RefCell::new(Mascot::default())),
        player,
        el: el.clone(),
        document: document.clone(),
        speech_timer: Rc::new(RefCell::new(None)),
    };
    render(&ctx);

    let greeting = {
        let ctx = ctx.clone();
        Timeout::new(GREETING_DELAY_MS, move || {
            let hour = js_sys::Date::new_0().get_hours();
            let effects = ctx.state.borrow_mut().greet(hour);
            run_effects(&ctx, effects);
            render(&ctx);
        })
    };

    let mut listeners = Vec::new();

    // Scroll past the threshold tucks the mascot away.
    {
        let ctx = ctx.clone();
        let window_scroll = window.clone();
        listeners.push(Listener::new(window.as_ref(), "scroll", move |_ev| {
            let y = window_scroll.scroll_y().unwrap_or(0.0);
            if ctx.state.borrow_mut().scrolled(y) {
                render(&ctx);
            }
        }));
    }

    // pointerdown on the avatar begins a drag.
    {
        let ctx = ctx.clone();
        let el_capture = el.clone();
        listeners.push(Listener::new(el.as_ref(), "pointerdown", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
                return;
            };
            let rect = el_capture.get_bounding_client_rect();
            let origin = Vec2::new(rect.left() as f32, rect.top() as f32);
            let effects = ctx
                .state
                .borrow_mut()
                .pointer_down(pointer_pos(ev), origin);
            log::debug!("[mascot] begin drag");
            let _ = el_capture.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
            run_effects(&ctx, effects);
            render(&ctx);
        }));
    }

    // pointermove/pointerup live on the window so a fast drag that leaves
    // the avatar keeps tracking.
    {
        let ctx = ctx.clone();
        let window_move = window.clone();
        listeners.push(Listener::new(window.as_ref(), "pointermove", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
                return;
            };
            let viewport = dom::viewport_size(&window_move);
            if ctx
                .state
                .borrow_mut()
                .pointer_move(pointer_pos(ev), viewport)
            {
                render(&ctx);
            }
        }));
    }
    {
        let ctx = ctx.clone();
        listeners.push(Listener::new(window.as_ref(), "pointerup", move |_ev| {
            let effects = ctx.state.borrow_mut().pointer_up();
            if !effects.is_empty() {
                run_effects(&ctx, effects);
                render(&ctx);
            }
        }));
    }

    // Click rotates through the scripted messages or dismisses the current
    // one.
    {
        let ctx = ctx.clone();
        let rng = rng.clone();
        listeners.push(Listener::new(el.as_ref(), "click", move |_ev| {
            let effects = ctx.state.borrow_mut().clicked(&mut *rng.borrow_mut());
            run_effects(&ctx, effects);
            render(&ctx);
        }));
    }

    Some(MascotView {
        _listeners: listeners,
        _greeting: greeting,
        _speech_timer: ctx.speech_timer,
    })
}
