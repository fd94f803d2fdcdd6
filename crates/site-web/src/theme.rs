//! Theme application and reactivity: writes the resolved `theme-*` class
//! onto the document root, persists changes, and keeps listening to the OS
//! color-scheme plus an hourly clock re-check for as long as the user has
//! not made an explicit choice this session.

use std::cell::RefCell;
use std::rc::Rc;

use site_core::{Theme, ThemeController, FEEDBACK_TAP, THEME_RECHECK_MS};
use web_sys as web;

use crate::audio::SharedPlayer;
use crate::feedback;
use crate::listeners::{Interval, Listener};
use crate::store::PrefStore;

pub struct ThemeView {
    _listeners: Vec<Listener>,
    _recheck: Option<Interval>,
    // Keeps the media query alive alongside its change listener.
    _media: Option<web::MediaQueryList>,
}

fn current_hour() -> u32 {
    js_sys::Date::new_0().get_hours()
}

fn apply(document: &web::Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        let classes = root.class_list();
        let _ = classes.remove_1(Theme::Light.root_class());
        let _ = classes.remove_1(Theme::Dark.root_class());
        let _ = classes.add_1(theme.root_class());
    }
}

pub fn mount(
    window: &web::Window,
    document: &web::Document,
    store: Rc<PrefStore>,
    player: SharedPlayer,
) -> ThemeView {
    let media = window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten();
    let os_dark = media.as_ref().map(|m| m.matches()).unwrap_or(false);

    // With neither storage nor media queries to consult, fall back to dark.
    let stored = store
        .theme()
        .or_else(|| (!store.is_available() && media.is_none()).then_some(Theme::Dark));

    let controller = Rc::new(RefCell::new(ThemeController::new(
        stored,
        os_dark,
        current_hour(),
    )));
    apply(document, controller.borrow().current());
    log::info!("[theme] initial {}", controller.borrow().current().as_str());

    let mut listeners = Vec::new();

    if let Some(toggle) = crate::dom::element(document, "theme-toggle") {
        let controller = controller.clone();
        let store = store.clone();
        let document = document.clone();
        let player = player.clone();
        listeners.push(Listener::new(toggle.as_ref(), "click", move |_ev| {
            let theme = controller.borrow_mut().toggle();
            apply(&document, theme);
            store.set_theme(theme);
            feedback::run(&player, FEEDBACK_TAP);
        }));
    }

    if let Some(media_list) = &media {
        let controller = controller.clone();
        let store = store.clone();
        let document = document.clone();
        let media_list_reread = media_list.clone();
        listeners.push(Listener::new(media_list.as_ref(), "change", move |_ev| {
            let os_dark = media_list_reread.matches();
            if let Some(theme) = controller
                .borrow_mut()
                .auto_reevaluate(os_dark, current_hour())
            {
                apply(&document, theme);
                store.set_theme(theme);
            }
        }));
    }

    let recheck = {
        let controller = controller.clone();
        let document = document.clone();
        let media = media.clone();
        Interval::new(THEME_RECHECK_MS, move || {
            let os_dark = media.as_ref().map(|m| m.matches()).unwrap_or(false);
            if let Some(theme) = controller
                .borrow_mut()
                .auto_reevaluate(os_dark, current_hour())
            {
                apply(&document, theme);
                store.set_theme(theme);
            }
        })
    };

    ThemeView {
        _listeners: listeners,
        _recheck: recheck,
        _media: media,
    }
}
