//! Simulated social presence: a locally-animated "N users online" counter
//! and a persisted visitor comment thread. Nothing here is networked; the
//! counter is decoration and the comments never leave the browser.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{
    COMMENT_MAX_CHARS, PRESENCE_INITIAL_MAX, PRESENCE_INITIAL_MIN, PRESENCE_MAX, PRESENCE_MIN,
};

/// Field names match the persisted JSON produced since the first release.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub name: String,
    pub text: String,
    pub timestamp: f64,
}

pub fn guest_name(rng: &mut impl Rng) -> String {
    format!("Guest{}", rng.gen_range(0..10_000))
}

/// Seed thread shown before any visitor has commented.
pub fn seed_comments(now_ms: f64) -> Vec<Comment> {
    vec![
        Comment {
            name: "Visitor123".to_owned(),
            text: "Great portfolio design!".to_owned(),
            timestamp: now_ms - 3_600_000.0,
        },
        Comment {
            name: "Designer22".to_owned(),
            text: "Love the interaction features".to_owned(),
            timestamp: now_ms - 7_200_000.0,
        },
    ]
}

/// Newest-first comment list. Comments are never deleted or edited; every
/// mutation persists the whole snapshot (handled by the caller).
#[derive(Clone, Debug)]
pub struct CommentThread {
    comments: Vec<Comment>,
}

impl CommentThread {
    pub fn from_stored(stored: Option<Vec<Comment>>, now_ms: f64) -> Self {
        Self {
            comments: stored.unwrap_or_else(|| seed_comments(now_ms)),
        }
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Prepends a trimmed comment; whitespace-only input is a no-op.
    /// Returns the stored comment on success.
    pub fn add(&mut self, name: &str, text: &str, now_ms: f64) -> Option<&Comment> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        let capped: String = trimmed.chars().take(COMMENT_MAX_CHARS).collect();
        self.comments.insert(
            0,
            Comment {
                name: name.to_owned(),
                text: capped,
                timestamp: now_ms,
            },
        );
        self.comments.first()
    }
}

/// The fake online-user counter. Starts in [2,6], then drifts by one step
/// per tick, clamped to [1,8].
#[derive(Clone, Copy, Debug)]
pub struct PresenceSim {
    online: u32,
}

impl PresenceSim {
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            online: rng.gen_range(PRESENCE_INITIAL_MIN..=PRESENCE_INITIAL_MAX),
        }
    }

    pub fn online(&self) -> u32 {
        self.online
    }

    pub fn tick(&mut self, rng: &mut impl Rng) -> u32 {
        let next = if rng.gen_bool(0.5) {
            self.online + 1
        } else {
            self.online.saturating_sub(1)
        };
        self.online = next.clamp(PRESENCE_MIN, PRESENCE_MAX);
        self.online
    }
}

/// Relative-time presentation for comment timestamps.
pub fn format_relative(now_ms: f64, then_ms: f64) -> String {
    let diff = now_ms - then_ms;
    if diff < 60_000.0 {
        "just now".to_owned()
    } else if diff < 3_600_000.0 {
        format!("{} min ago", (diff / 60_000.0) as u64)
    } else if diff < 86_400_000.0 {
        format!("{} h ago", (diff / 3_600_000.0) as u64)
    } else {
        format!("{} d ago", (diff / 86_400_000.0) as u64)
    }
}
