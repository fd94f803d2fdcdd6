#![cfg(target_arch = "wasm32")]
//! Wires the portfolio interaction layer onto the host page. Components
//! mount against elements the page provides by id; anything missing simply
//! does not mount. All listeners and timers are owned by the `App` root, so
//! tearing it down releases everything.

use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod audio;
mod contact;
mod dom;
mod feedback;
mod gallery;
mod listeners;
mod mascot;
mod presence;
mod store;
mod theme;

struct App {
    _theme: theme::ThemeView,
    _audio_controls: Option<audio::AudioControls>,
    _mascot: Option<mascot::MascotView>,
    _gallery: Option<gallery::GalleryView>,
    _presence: Option<presence::PresenceView>,
    _contact: Option<contact::ContactView>,
    _feedback: Vec<listeners::Listener>,
}

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Drops the application root, detaching every listener and timer it owns.
#[wasm_bindgen]
pub fn shutdown() {
    APP.with(|slot| slot.borrow_mut().take());
    log::info!("site-web stopped");
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let store = Rc::new(store::PrefStore::new(&window));
    let rng = Rc::new(RefCell::new(StdRng::from_entropy()));

    let player: audio::SharedPlayer = Rc::new(RefCell::new(audio::SoundPlayer::new(
        store.muted(),
        store.volume().unwrap_or(0.5),
    )?));

    let app = App {
        _theme: theme::mount(&window, &document, store.clone(), player.clone()),
        _audio_controls: audio::wire_controls(&document, player.clone(), store.clone()),
        _mascot: mascot::mount(&document, player.clone(), rng.clone()),
        _gallery: gallery::mount(&document, player.clone()),
        _presence: presence::mount(&document, store.clone(), rng.clone()),
        _contact: contact::mount(&document, player.clone()),
        _feedback: feedback::wire_annotated(&document, &player),
    };

    register_service_worker(&window);

    APP.with(|slot| *slot.borrow_mut() = Some(app));
    Ok(())
}

// Trivial install hook; no caching strategy beyond what the worker does.
fn register_service_worker(window: &web::Window) {
    let promise = window.navigator().service_worker().register("/service-worker.js");
    spawn_local(async move {
        if JsFuture::from(promise).await.is_err() {
            log::warn!("[sw] registration rejected");
        }
    });
}
