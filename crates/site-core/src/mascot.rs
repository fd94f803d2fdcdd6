//! The mascot agent: a floating draggable avatar with a mood state machine,
//! a time-of-day greeting, and a scripted click message pool.
//!
//! Transitions are total functions of the current state and the incoming
//! event. They return the side effects the frontend should replay (cues,
//! vibration, the speech auto-clear timer) instead of performing them, so
//! the whole machine runs under plain `cargo test` with a seeded RNG.

use glam::Vec2;
use rand::Rng;
use smallvec::{smallvec, SmallVec};

use crate::constants::{AVATAR_HOME_PX, AVATAR_SIZE_PX, SCROLL_MINIMIZE_THRESHOLD_PX, SPEECH_DURATION_MS};
use crate::cues::Cue;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mood {
    Happy,
    Curious,
    Surprised,
    Thinking,
}

impl Mood {
    /// CSS class on the avatar element.
    pub fn class(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Curious => "curious",
            Mood::Surprised => "surprised",
            Mood::Thinking => "thinking",
        }
    }
}

/// Side effects requested by a transition; the frontend replays them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Play(Cue),
    Vibrate(u32),
    /// Clear the active speech once `after_ms` elapse, unless a newer
    /// speech has superseded sequence `seq` in the meantime.
    ScheduleSpeechEnd { seq: u64, after_ms: u32 },
}

pub type Effects = SmallVec<[Effect; 4]>;

pub const GREETING_MORNING: &str = "Good morning! Welcome to my portfolio.";
pub const GREETING_AFTERNOON: &str = "Good afternoon! Thanks for stopping by.";
pub const GREETING_EVENING: &str = "Good evening! Explore my work at your leisure.";
pub const DRAG_HINT: &str = "You can drag me around!";

pub const CLICK_MESSAGES: [&str; 5] = [
    "Need help navigating? Just ask!",
    "Check out my projects section to see my best work.",
    "I've integrated multiple interaction modalities in this portfolio.",
    "Try using different gestures to interact with the content.",
    "The design adapts based on time of day and your device.",
];

#[derive(Clone, Debug)]
struct Speech {
    text: String,
    seq: u64,
}

#[derive(Clone, Debug)]
pub struct Mascot {
    mood: Mood,
    position: Vec2,
    minimized: bool,
    speech: Option<Speech>,
    drag_offset: Option<Vec2>,
    speech_seq: u64,
    drag_hint_shown: bool,
}

impl Default for Mascot {
    fn default() -> Self {
        Self {
            mood: Mood::Happy,
            position: Vec2::from_array(AVATAR_HOME_PX),
            minimized: false,
            speech: None,
            drag_offset: None,
            speech_seq: 0,
            drag_hint_shown: false,
        }
    }
}

impl Mascot {
    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_offset.is_some()
    }

    pub fn is_speaking(&self) -> bool {
        self.speech.is_some()
    }

    pub fn message(&self) -> Option<&str> {
        self.speech.as_ref().map(|s| s.text.as_str())
    }

    pub fn greeting_for_hour(hour: u32) -> (&'static str, Mood) {
        if hour < 12 {
            (GREETING_MORNING, Mood::Happy)
        } else if hour < 18 {
            (GREETING_AFTERNOON, Mood::Happy)
        } else {
            (GREETING_EVENING, Mood::Curious)
        }
    }

    /// Scripted greeting fired shortly after mount.
    pub fn greet(&mut self, hour: u32) -> Effects {
        let (text, mood) = Self::greeting_for_hour(hour);
        self.mood = mood;
        self.speak(text)
    }

    fn speak(&mut self, text: &str) -> Effects {
        self.speech_seq += 1;
        self.speech = Some(Speech {
            text: text.to_owned(),
            seq: self.speech_seq,
        });
        smallvec![
            Effect::Play(Cue::Message),
            Effect::ScheduleSpeechEnd {
                seq: self.speech_seq,
                after_ms: SPEECH_DURATION_MS,
            },
        ]
    }

    /// Auto-clear timer callback. Stale timers from superseded speeches are
    /// ignored; returns whether the speech was actually cleared.
    pub fn speech_timer_fired(&mut self, seq: u64) -> bool {
        match &self.speech {
            Some(s) if s.seq == seq => {
                self.speech = None;
                true
            }
            _ => false,
        }
    }

    /// Scroll position update; returns whether minimization flipped.
    pub fn scrolled(&mut self, scroll_y: f64) -> bool {
        if scroll_y > SCROLL_MINIMIZE_THRESHOLD_PX && !self.minimized {
            self.minimized = true;
            self.mood = Mood::Curious;
            true
        } else if scroll_y <= SCROLL_MINIMIZE_THRESHOLD_PX && self.minimized {
            self.minimized = false;
            self.mood = Mood::Happy;
            true
        } else {
            false
        }
    }

    /// Pointer pressed inside the avatar box at `pointer` (viewport
    /// coordinates); `box_origin` is the box's top-left corner.
    pub fn pointer_down(&mut self, pointer: Vec2, box_origin: Vec2) -> Effects {
        self.drag_offset = Some(pointer - box_origin);
        self.mood = Mood::Surprised;
        let mut effects: Effects = smallvec![Effect::Play(Cue::Pop)];
        if !self.drag_hint_shown {
            self.drag_hint_shown = true;
            effects.extend(self.speak(DRAG_HINT));
        }
        effects
    }

    /// Reposition while dragging, clamped so the whole avatar stays inside
    /// the viewport. Returns whether the position changed.
    pub fn pointer_move(&mut self, pointer: Vec2, viewport: Vec2) -> bool {
        let Some(offset) = self.drag_offset else {
            return false;
        };
        let max = (viewport - Vec2::splat(AVATAR_SIZE_PX)).max(Vec2::ZERO);
        let next = (pointer - offset).clamp(Vec2::ZERO, max);
        if next == self.position {
            return false;
        }
        self.position = next;
        true
    }

    pub fn pointer_up(&mut self) -> Effects {
        if self.drag_offset.take().is_some() {
            self.mood = Mood::Happy;
            smallvec![Effect::Play(Cue::Drop)]
        } else {
            Effects::new()
        }
    }

    /// Click toggles between picking a scripted message and dismissing the
    /// one currently on screen.
    pub fn clicked(&mut self, rng: &mut impl Rng) -> Effects {
        if self.speech.is_some() {
            self.speech = None;
            self.mood = Mood::Happy;
            return Effects::new();
        }
        let text = CLICK_MESSAGES[rng.gen_range(0..CLICK_MESSAGES.len())];
        self.mood = Mood::Thinking;
        let mut effects = self.speak(text);
        effects.push(Effect::Play(Cue::Click));
        effects.push(Effect::Vibrate(30));
        effects
    }
}
