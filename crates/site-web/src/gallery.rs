//! Project-detail gallery: renders the image strip for the project named by
//! the mount point's `data-project-id`, then drives it with the prev/next
//! buttons, the indicator dots, and touch swipes. An unknown id swaps the
//! detail view for the not-found view.

use std::cell::RefCell;
use std::rc::Rc;

use site_core::{
    Catalog, GalleryNav, Project, SwipeTracker, FEEDBACK_SELECT, FEEDBACK_SWIPE, FEEDBACK_TAP,
};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::audio::SharedPlayer;
use crate::dom;
use crate::feedback;
use crate::listeners::Listener;

pub struct GalleryView {
    _listeners: Vec<Listener>,
}

fn render_images(document: &web::Document, project: &Project, active: usize) {
    let mut html = String::new();
    for (i, src) in project.images.iter().enumerate() {
        let class = if i == active {
            "gallery-image active"
        } else {
            "gallery-image"
        };
        html.push_str(&format!(
            "<img class=\"{class}\" src=\"{src}\" alt=\"{} image {}\" loading=\"lazy\">",
            dom::escape_html(project.title),
            i + 1,
        ));
    }
    dom::set_inner_html(document, "gallery-view", &html);

    let mut dots = String::new();
    for i in 0..project.images.len() {
        let class = if i == active {
            "indicator active"
        } else {
            "indicator"
        };
        dots.push_str(&format!(
            "<button class=\"{class}\" data-index=\"{i}\" aria-label=\"Go to image {}\"></button>",
            i + 1,
        ));
    }
    dom::set_inner_html(document, "gallery-indicators", &dots);
}

fn render_active(document: &web::Document, active: usize) {
    for (selector, base, current) in [
        ("#gallery-view img", "gallery-image", "gallery-image active"),
        ("#gallery-indicators button", "indicator", "indicator active"),
    ] {
        let Ok(nodes) = document.query_selector_all(selector) else {
            continue;
        };
        for i in 0..nodes.length() {
            if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                el.set_class_name(if i as usize == active { current } else { base });
            }
        }
    }
}

pub fn mount(document: &web::Document, player: SharedPlayer) -> Option<GalleryView> {
    let root = dom::element(document, "project-gallery")?;
    let project_id = root.get_attribute("data-project-id")?;

    let catalog = Catalog::new();
    let Some(project) = catalog.find(&project_id) else {
        dom::hide(document, "project-gallery");
        dom::show(document, "project-not-found");
        return None;
    };

    let nav = Rc::new(RefCell::new(GalleryNav::new(project.images.len())));
    let swipe = Rc::new(RefCell::new(SwipeTracker::default()));
    render_images(document, project, 0);

    let mut listeners = Vec::new();

    for (button_id, forward) in [("gallery-next", true), ("gallery-prev", false)] {
        if let Some(button) = dom::element(document, button_id) {
            let nav = nav.clone();
            let player = player.clone();
            let document = document.clone();
            listeners.push(Listener::new(button.as_ref(), "click", move |_ev| {
                let index = if forward {
                    nav.borrow_mut().next()
                } else {
                    nav.borrow_mut().previous()
                };
                feedback::run(&player, FEEDBACK_TAP);
                render_active(&document, index);
            }));
        }
    }

    // One delegated listener covers all indicator dots.
    if let Some(indicators) = dom::element(document, "gallery-indicators") {
        let nav = nav.clone();
        let player = player.clone();
        let document = document.clone();
        listeners.push(Listener::new(indicators.as_ref(), "click", move |ev| {
            let Some(index) = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Element>().ok())
                .and_then(|el| el.get_attribute("data-index"))
                .and_then(|raw| raw.parse::<usize>().ok())
            else {
                return;
            };
            if nav.borrow_mut().select(index) {
                feedback::run(&player, FEEDBACK_SELECT);
                render_active(&document, index);
            }
        }));
    }

    if let Some(view) = dom::element(document, "gallery-view") {
        let first_touch_x = |ev: &web::Event| -> Option<f32> {
            let touch = ev.dyn_ref::<web::TouchEvent>()?.touches().get(0)?;
            Some(touch.client_x() as f32)
        };

        {
            let swipe = swipe.clone();
            listeners.push(Listener::new(view.as_ref(), "touchstart", move |ev| {
                if let Some(x) = first_touch_x(&ev) {
                    swipe.borrow_mut().touch_start(x);
                }
            }));
        }
        {
            let swipe = swipe.clone();
            listeners.push(Listener::new(view.as_ref(), "touchmove", move |ev| {
                if let Some(x) = first_touch_x(&ev) {
                    swipe.borrow_mut().touch_move(x);
                }
            }));
        }
        {
            let swipe = swipe.clone();
            let nav = nav.clone();
            let player = player.clone();
            let document = document.clone();
            listeners.push(Listener::new(view.as_ref(), "touchend", move |_ev| {
                if let Some(dir) = swipe.borrow_mut().touch_end() {
                    let index = nav.borrow_mut().swipe(dir);
                    feedback::run(&player, FEEDBACK_SWIPE);
                    render_active(&document, index);
                }
            }));
        }
    }

    Some(GalleryView {
        _listeners: listeners,
    })
}
