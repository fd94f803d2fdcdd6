//! Thin wrapper over `window.localStorage`. Storage being unavailable
//! (private browsing, sandboxed frames) degrades silently: reads miss and
//! writes vanish. Values are plain strings; the comment list is the only
//! JSON-encoded entry, and a corrupt stored list reads as no data at all.

use site_core::{Comment, Theme, KEY_COMMENTS, KEY_MUTED, KEY_THEME, KEY_USERNAME, KEY_VOLUME};
use web_sys as web;

pub struct PrefStore {
    storage: Option<web::Storage>,
}

impl PrefStore {
    pub fn new(window: &web::Window) -> Self {
        Self {
            storage: window.local_storage().ok().flatten(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.storage.is_some()
    }

    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            let _ = storage.set_item(key, value);
        }
    }

    pub fn theme(&self) -> Option<Theme> {
        self.get(KEY_THEME)?.parse().ok()
    }

    pub fn set_theme(&self, theme: Theme) {
        self.set(KEY_THEME, theme.as_str());
    }

    pub fn muted(&self) -> bool {
        self.get(KEY_MUTED).as_deref() == Some("true")
    }

    pub fn set_muted(&self, muted: bool) {
        self.set(KEY_MUTED, if muted { "true" } else { "false" });
    }

    pub fn volume(&self) -> Option<f32> {
        self.get(KEY_VOLUME)?.parse().ok()
    }

    pub fn set_volume(&self, volume: f32) {
        self.set(KEY_VOLUME, &volume.to_string());
    }

    pub fn username(&self) -> Option<String> {
        self.get(KEY_USERNAME)
    }

    pub fn set_username(&self, name: &str) {
        self.set(KEY_USERNAME, name);
    }

    pub fn comments(&self) -> Option<Vec<Comment>> {
        let raw = self.get(KEY_COMMENTS)?;
        match serde_json::from_str(&raw) {
            Ok(comments) => Some(comments),
            Err(e) => {
                log::warn!("[store] discarding corrupt comment list: {e}");
                None
            }
        }
    }

    pub fn set_comments(&self, comments: &[Comment]) {
        if let Ok(json) = serde_json::to_string(comments) {
            self.set(KEY_COMMENTS, &json);
        }
    }
}
