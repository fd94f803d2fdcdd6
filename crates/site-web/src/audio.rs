//! Web Audio cue playback. Every cue is a fresh oscillator one-shot routed
//! through a shared master gain, so concurrent calls overlap instead of
//! cutting each other off. A quiet detuned-sine drone behind its own gain
//! node is the looping ambience bed; muting zeroes that gain immediately.
//!
//! Playback is decorative: every failure path logs and returns.

use std::cell::RefCell;
use std::rc::Rc;

use site_core::{Cue, Waveform};
use web_sys as web;

use crate::listeners::Listener;
use crate::store::PrefStore;

pub type SharedPlayer = Rc<RefCell<SoundPlayer>>;

fn create_gain(ctx: &web::AudioContext, value: f32, label: &str) -> anyhow::Result<web::GainNode> {
    match web::GainNode::new(ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            Err(anyhow::anyhow!("GainNode creation failed"))
        }
    }
}

fn oscillator_type(waveform: Waveform) -> web::OscillatorType {
    match waveform {
        Waveform::Sine => web::OscillatorType::Sine,
        Waveform::Square => web::OscillatorType::Square,
        Waveform::Saw => web::OscillatorType::Sawtooth,
        Waveform::Triangle => web::OscillatorType::Triangle,
    }
}

pub struct SoundPlayer {
    ctx: web::AudioContext,
    master: web::GainNode,
    ambience_gain: web::GainNode,
    muted: bool,
    volume: f32,
}

impl SoundPlayer {
    pub fn new(muted: bool, volume: f32) -> anyhow::Result<Self> {
        let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        // Resume eagerly; autoplay policy may reject until a user gesture.
        let _ = ctx.resume();

        let master = create_gain(&ctx, volume, "master")?;
        let _ = master.connect_with_audio_node(&ctx.destination());

        let bed = Cue::Ambience.spec();
        let ambience_gain = create_gain(&ctx, if muted { 0.0 } else { bed.peak_gain }, "ambience")?;
        let _ = ambience_gain.connect_with_audio_node(&master);
        // Two slightly detuned sines beat against each other for a slow,
        // unobtrusive bed.
        for detune in [1.0_f32, 1.007] {
            if let Ok(osc) = web::OscillatorNode::new(&ctx) {
                osc.set_type(oscillator_type(bed.waveform));
                osc.frequency().set_value(bed.frequency_hz * detune);
                let _ = osc.connect_with_audio_node(&ambience_gain);
                let _ = osc.start();
            }
        }

        Ok(Self {
            ctx,
            master,
            ambience_gain,
            muted,
            volume,
        })
    }

    /// Fire-and-forget one-shot. Prior instances keep ringing out.
    pub fn play(&self, cue: Cue) {
        if self.muted || cue == Cue::Ambience {
            return;
        }
        let spec = cue.spec();
        let Ok(src) = web::OscillatorNode::new(&self.ctx) else {
            return;
        };
        src.set_type(oscillator_type(spec.waveform));
        src.frequency().set_value(spec.frequency_hz);
        if let Ok(envelope) = web::GainNode::new(&self.ctx) {
            envelope.gain().set_value(0.0);
            let t0 = self.ctx.current_time() + 0.005;
            let _ = envelope
                .gain()
                .linear_ramp_to_value_at_time(spec.peak_gain, t0 + 0.02);
            let _ = envelope
                .gain()
                .linear_ramp_to_value_at_time(0.0, t0 + spec.duration_sec);
            let _ = src.connect_with_audio_node(&envelope);
            let _ = envelope.connect_with_audio_node(&self.master);
            let _ = src.start_with_when(t0);
            let _ = src.stop_with_when(t0 + spec.duration_sec + 0.05);
        }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        self.master.gain().set_value(volume);
    }

    /// Muting halts the ambience bed immediately; un-muting restores it and
    /// pokes the context awake, tolerating autoplay rejection.
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        let bed_gain = if muted { 0.0 } else { Cue::Ambience.spec().peak_gain };
        self.ambience_gain.gain().set_value(bed_gain);
        if !muted {
            let _ = self.ctx.resume();
        }
    }
}

/// The mute button and volume slider surface.
pub struct AudioControls {
    _listeners: Vec<Listener>,
}

pub fn wire_controls(
    document: &web::Document,
    player: SharedPlayer,
    store: Rc<PrefStore>,
) -> Option<AudioControls> {
    let toggle = crate::dom::element(document, "audio-toggle")?;
    let mut listeners = Vec::new();

    render_mute(&toggle, player.borrow().is_muted());

    {
        let player = player.clone();
        let store = store.clone();
        let toggle_el = toggle.clone();
        listeners.push(Listener::new(
            toggle.as_ref(),
            "click",
            move |_ev: web::Event| {
                let muted = !player.borrow().is_muted();
                player.borrow_mut().set_muted(muted);
                store.set_muted(muted);
                render_mute(&toggle_el, muted);
            },
        ));
    }

    if let Some(slider) = crate::dom::input_element(document, "volume-slider") {
        slider.set_value(&player.borrow().volume().to_string());
        let player = player.clone();
        let slider_el = slider.clone();
        listeners.push(Listener::new(
            slider.as_ref(),
            "input",
            move |_ev: web::Event| {
                // The store takes whatever it is given; the range check is
                // the input control's job.
                if let Ok(raw) = slider_el.value().parse::<f32>() {
                    let volume = raw.clamp(0.0, 1.0);
                    player.borrow_mut().set_volume(volume);
                    store.set_volume(volume);
                }
            },
        ));
    }

    Some(AudioControls {
        _listeners: listeners,
    })
}

fn render_mute(toggle: &web::Element, muted: bool) {
    let classes = toggle.class_list();
    if muted {
        let _ = classes.add_1("muted");
    } else {
        let _ = classes.remove_1("muted");
    }
    let _ = toggle.set_attribute("aria-label", if muted { "Unmute audio" } else { "Mute audio" });
}
