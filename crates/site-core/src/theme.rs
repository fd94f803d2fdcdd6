//! Light/dark theme resolution.
//!
//! Initialization precedence is stored preference > OS dark signal >
//! time-of-day heuristic (dark between 20:00 and 06:00). An OS *light*
//! signal does not override the night heuristic. Once the user toggles
//! explicitly, automatic re-evaluation stands down for the rest of the
//! session.

use std::str::FromStr;

use crate::constants::{NIGHT_END_HOUR, NIGHT_START_HOUR};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

#[derive(Debug, thiserror::Error)]
#[error("unrecognized theme `{0}`")]
pub struct ParseThemeError(pub String);

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Class written onto the document root element.
    pub fn root_class(self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }

    pub fn flipped(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseThemeError(other.to_owned())),
        }
    }
}

#[inline]
pub fn is_night(hour: u32) -> bool {
    hour >= NIGHT_START_HOUR || hour < NIGHT_END_HOUR
}

/// Resolve the theme at startup. With neither a stored preference nor an OS
/// dark signal, the local clock decides.
pub fn resolve_initial(stored: Option<Theme>, os_prefers_dark: bool, hour: u32) -> Theme {
    if let Some(theme) = stored {
        return theme;
    }
    if os_prefers_dark || is_night(hour) {
        Theme::Dark
    } else {
        Theme::Light
    }
}

/// Session-scoped theme state. `toggle` marks the choice explicit, after
/// which `auto_reevaluate` (OS change events, hourly re-check) is inert
/// until the next page load.
#[derive(Clone, Copy, Debug)]
pub struct ThemeController {
    current: Theme,
    explicit: bool,
}

impl ThemeController {
    pub fn new(stored: Option<Theme>, os_prefers_dark: bool, hour: u32) -> Self {
        Self {
            current: resolve_initial(stored, os_prefers_dark, hour),
            explicit: false,
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn toggle(&mut self) -> Theme {
        self.explicit = true;
        self.current = self.current.flipped();
        self.current
    }

    /// Returns the new theme when an automatic re-check changes it.
    pub fn auto_reevaluate(&mut self, os_prefers_dark: bool, hour: u32) -> Option<Theme> {
        if self.explicit {
            return None;
        }
        let next = resolve_initial(None, os_prefers_dark, hour);
        if next == self.current {
            return None;
        }
        self.current = next;
        Some(next)
    }
}
