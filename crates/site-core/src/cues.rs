//! Symbolic sound cues and the synthesis parameters behind them.
//!
//! Each cue is rendered as a short oscillator one-shot, so the catalog maps
//! cue names to waveform/frequency/envelope parameters rather than asset
//! URLs. Overlapping playback falls out of building fresh nodes per call.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    Hover,
    Click,
    Pop,
    Swoosh,
    Success,
    Error,
    Message,
    Drop,
    Ambience,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Saw,
    Triangle,
}

#[derive(Clone, Copy, Debug)]
pub struct CueSpec {
    pub waveform: Waveform,
    pub frequency_hz: f32,
    pub duration_sec: f64,
    pub peak_gain: f32,
}

impl Cue {
    pub const ALL: [Cue; 9] = [
        Cue::Hover,
        Cue::Click,
        Cue::Pop,
        Cue::Swoosh,
        Cue::Success,
        Cue::Error,
        Cue::Message,
        Cue::Drop,
        Cue::Ambience,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Cue::Hover => "hover",
            Cue::Click => "click",
            Cue::Pop => "pop",
            Cue::Swoosh => "swoosh",
            Cue::Success => "success",
            Cue::Error => "error",
            Cue::Message => "message",
            Cue::Drop => "drop",
            Cue::Ambience => "ambience",
        }
    }

    pub fn from_name(name: &str) -> Option<Cue> {
        Cue::ALL.iter().copied().find(|c| c.name() == name)
    }

    pub fn spec(self) -> CueSpec {
        match self {
            Cue::Hover => CueSpec {
                waveform: Waveform::Sine,
                frequency_hz: 880.0,
                duration_sec: 0.06,
                peak_gain: 0.12,
            },
            Cue::Click => CueSpec {
                waveform: Waveform::Square,
                frequency_hz: 1200.0,
                duration_sec: 0.05,
                peak_gain: 0.18,
            },
            Cue::Pop => CueSpec {
                waveform: Waveform::Triangle,
                frequency_hz: 520.0,
                duration_sec: 0.09,
                peak_gain: 0.25,
            },
            Cue::Swoosh => CueSpec {
                waveform: Waveform::Saw,
                frequency_hz: 180.0,
                duration_sec: 0.25,
                peak_gain: 0.1,
            },
            Cue::Success => CueSpec {
                waveform: Waveform::Sine,
                frequency_hz: 660.0,
                duration_sec: 0.35,
                peak_gain: 0.22,
            },
            Cue::Error => CueSpec {
                waveform: Waveform::Square,
                frequency_hz: 160.0,
                duration_sec: 0.3,
                peak_gain: 0.2,
            },
            Cue::Message => CueSpec {
                waveform: Waveform::Sine,
                frequency_hz: 740.0,
                duration_sec: 0.18,
                peak_gain: 0.2,
            },
            Cue::Drop => CueSpec {
                waveform: Waveform::Triangle,
                frequency_hz: 300.0,
                duration_sec: 0.12,
                peak_gain: 0.22,
            },
            // The looping bed; duration is ignored, the gain is the bed level.
            Cue::Ambience => CueSpec {
                waveform: Waveform::Sine,
                frequency_hz: 110.0,
                duration_sec: 0.0,
                peak_gain: 0.05,
            },
        }
    }
}

/// Cue plus optional vibration pulse, the cross-cutting feedback pairing
/// every interactive surface goes through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub cue: Cue,
    pub vibrate_ms: Option<u32>,
}

pub const FEEDBACK_HOVER: Feedback = Feedback {
    cue: Cue::Hover,
    vibrate_ms: None,
};
pub const FEEDBACK_TAP: Feedback = Feedback {
    cue: Cue::Click,
    vibrate_ms: Some(15),
};
pub const FEEDBACK_SELECT: Feedback = Feedback {
    cue: Cue::Pop,
    vibrate_ms: Some(15),
};
pub const FEEDBACK_SWIPE: Feedback = Feedback {
    cue: Cue::Swoosh,
    vibrate_ms: Some(20),
};
