//! Presence/comment widget wiring: the drifting online counter and the
//! persisted visitor comment thread.

use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use site_core::{format_relative, guest_name, CommentThread, PresenceSim, PRESENCE_TICK_MS};
use web_sys as web;

use crate::dom;
use crate::feedback;
use crate::listeners::{Interval, Listener};
use crate::store::PrefStore;

pub struct PresenceView {
    _listeners: Vec<Listener>,
    _tick: Option<Interval>,
}

fn render_count(document: &web::Document, online: u32) {
    dom::set_text(document, "online-count", &format!("{online} online"));
}

fn render_comments(document: &web::Document, thread: &CommentThread) {
    let now_ms = js_sys::Date::now();
    let html = if thread.is_empty() {
        "<p class=\"no-comments\">Be the first to comment!</p>".to_owned()
    } else {
        let mut html = String::new();
        for comment in thread.comments() {
            html.push_str(&format!(
                concat!(
                    "<div class=\"comment\">",
                    "<div class=\"comment-header\">",
                    "<span class=\"comment-name\">{}</span>",
                    "<span class=\"comment-time\">{}</span>",
                    "</div>",
                    "<p class=\"comment-text\">{}</p>",
                    "</div>",
                ),
                dom::escape_html(&comment.name),
                format_relative(now_ms, comment.timestamp),
                dom::escape_html(&comment.text),
            ));
        }
        html
    };
    dom::set_inner_html(document, "comment-list", &html);
    dom::set_text(document, "comment-count", &thread.len().to_string());
}

pub fn mount(
    document: &web::Document,
    store: Rc<PrefStore>,
    rng: Rc<RefCell<StdRng>>,
) -> Option<PresenceView> {
    dom::element(document, "online-count")?;

    let name = match store.username() {
        Some(name) => name,
        None => {
            let name = guest_name(&mut *rng.borrow_mut());
            store.set_username(&name);
            name
        }
    };
    log::info!("[presence] visiting as {name}");

    let now_ms = js_sys::Date::now();
    let stored = store.comments();
    let seeded = stored.is_none();
    let thread = Rc::new(RefCell::new(CommentThread::from_stored(stored, now_ms)));
    if seeded {
        store.set_comments(thread.borrow().comments());
    }

    let sim = Rc::new(RefCell::new(PresenceSim::new(&mut *rng.borrow_mut())));
    render_count(document, sim.borrow().online());
    render_comments(document, &thread.borrow());

    let tick = {
        let sim = sim.clone();
        let rng = rng.clone();
        let document = document.clone();
        Interval::new(PRESENCE_TICK_MS, move || {
            let online = sim.borrow_mut().tick(&mut *rng.borrow_mut());
            render_count(&document, online);
        })
    };

    let mut listeners = Vec::new();
    if let Some(form) = dom::element(document, "comment-form") {
        let thread = thread.clone();
        let document = document.clone();
        listeners.push(Listener::new(form.as_ref(), "submit", move |ev| {
            ev.prevent_default();
            let Some(input) = dom::input_element(&document, "comment-input") else {
                return;
            };
            let text = input.value();
            let added = thread
                .borrow_mut()
                .add(&name, &text, js_sys::Date::now())
                .is_some();
            if !added {
                return;
            }
            store.set_comments(thread.borrow().comments());
            input.set_value("");
            feedback::vibrate(20);
            render_comments(&document, &thread.borrow());
        }));
    }

    Some(PresenceView {
        _listeners: listeners,
        _tick: tick,
    })
}
