use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use site_core::constants::{AVATAR_SIZE_PX, SPEECH_DURATION_MS};
use site_core::cues::Cue;
use site_core::mascot::{
    Effect, Mascot, Mood, CLICK_MESSAGES, GREETING_AFTERNOON, GREETING_EVENING, GREETING_MORNING,
};

fn has_cue(effects: &[Effect], cue: Cue) -> bool {
    effects.iter().any(|e| *e == Effect::Play(cue))
}

#[test]
fn starts_happy_idle_and_silent() {
    let mascot = Mascot::default();
    assert_eq!(mascot.mood(), Mood::Happy);
    assert!(!mascot.is_speaking());
    assert!(!mascot.is_dragging());
    assert!(!mascot.is_minimized());
    assert_eq!(mascot.position(), Vec2::new(20.0, 20.0));
}

#[test]
fn greeting_follows_the_clock() {
    assert_eq!(Mascot::greeting_for_hour(9), (GREETING_MORNING, Mood::Happy));
    assert_eq!(
        Mascot::greeting_for_hour(14),
        (GREETING_AFTERNOON, Mood::Happy)
    );
    assert_eq!(
        Mascot::greeting_for_hour(20),
        (GREETING_EVENING, Mood::Curious)
    );
}

#[test]
fn greet_speaks_and_schedules_the_auto_clear() {
    let mut mascot = Mascot::default();
    let effects = mascot.greet(21);

    assert_eq!(mascot.mood(), Mood::Curious);
    assert_eq!(mascot.message(), Some(GREETING_EVENING));
    assert!(has_cue(&effects, Cue::Message));
    assert!(effects.iter().any(|e| matches!(
        e,
        Effect::ScheduleSpeechEnd { after_ms, .. } if *after_ms == SPEECH_DURATION_MS
    )));
}

#[test]
fn drag_clamps_to_viewport_for_any_pointer_position() {
    let viewport = Vec2::new(800.0, 600.0);
    let mut mascot = Mascot::default();
    mascot.pointer_down(Vec2::new(30.0, 30.0), Vec2::new(20.0, 20.0));

    for x in [-500.0_f32, -1.0, 0.0, 123.0, 799.0, 4000.0] {
        for y in [-500.0_f32, -1.0, 0.0, 321.0, 599.0, 4000.0] {
            mascot.pointer_move(Vec2::new(x, y), viewport);
            let pos = mascot.position();
            assert!(pos.x >= 0.0 && pos.x <= viewport.x - AVATAR_SIZE_PX, "x={}", pos.x);
            assert!(pos.y >= 0.0 && pos.y <= viewport.y - AVATAR_SIZE_PX, "y={}", pos.y);
        }
    }
}

#[test]
fn tiny_viewport_pins_the_avatar_to_the_origin() {
    let mut mascot = Mascot::default();
    mascot.pointer_down(Vec2::new(20.0, 20.0), Vec2::new(20.0, 20.0));
    mascot.pointer_move(Vec2::new(50.0, 50.0), Vec2::new(60.0, 60.0));
    assert_eq!(mascot.position(), Vec2::ZERO);
}

#[test]
fn pointer_move_without_a_drag_is_inert() {
    let mut mascot = Mascot::default();
    let before = mascot.position();
    assert!(!mascot.pointer_move(Vec2::new(500.0, 500.0), Vec2::new(800.0, 600.0)));
    assert_eq!(mascot.position(), before);
}

#[test]
fn drag_lifecycle_moods_and_cues() {
    let mut mascot = Mascot::default();

    let down = mascot.pointer_down(Vec2::new(25.0, 25.0), Vec2::new(20.0, 20.0));
    assert_eq!(mascot.mood(), Mood::Surprised);
    assert!(mascot.is_dragging());
    assert!(has_cue(&down, Cue::Pop));
    // First grab also shows the drag hint.
    assert!(has_cue(&down, Cue::Message));

    let up = mascot.pointer_up();
    assert_eq!(mascot.mood(), Mood::Happy);
    assert!(!mascot.is_dragging());
    assert!(has_cue(&up, Cue::Drop));

    // A second release with no drag in progress is a no-op.
    assert!(mascot.pointer_up().is_empty());
}

#[test]
fn drag_hint_appears_only_once() {
    let mut mascot = Mascot::default();
    let first = mascot.pointer_down(Vec2::new(25.0, 25.0), Vec2::new(20.0, 20.0));
    assert!(has_cue(&first, Cue::Message));
    mascot.pointer_up();
    // Let the hint expire before grabbing again.
    assert!(mascot.speech_timer_fired(1));
    assert!(!mascot.is_speaking());

    let second = mascot.pointer_down(Vec2::new(25.0, 25.0), Vec2::new(20.0, 20.0));
    assert!(has_cue(&second, Cue::Pop));
    assert!(!has_cue(&second, Cue::Message));
}

#[test]
fn click_speaks_from_the_pool_with_thinking_mood() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut mascot = Mascot::default();

    let effects = mascot.clicked(&mut rng);
    assert_eq!(mascot.mood(), Mood::Thinking);
    assert!(mascot.is_speaking());
    assert!(CLICK_MESSAGES.contains(&mascot.message().unwrap()));
    assert!(has_cue(&effects, Cue::Click));
    assert!(has_cue(&effects, Cue::Message));
    assert!(effects.contains(&Effect::Vibrate(30)));
}

#[test]
fn click_while_speaking_dismisses_immediately() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut mascot = Mascot::default();
    mascot.clicked(&mut rng);
    assert!(mascot.is_speaking());

    let effects = mascot.clicked(&mut rng);
    assert!(effects.is_empty());
    assert!(!mascot.is_speaking());
    assert_eq!(mascot.mood(), Mood::Happy);
}

#[test]
fn stale_speech_timers_are_ignored() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut mascot = Mascot::default();

    mascot.greet(9); // seq 1
    mascot.clicked(&mut rng); // dismisses the greeting
    mascot.clicked(&mut rng); // seq 2

    assert!(!mascot.speech_timer_fired(1));
    assert!(mascot.is_speaking());
    assert!(mascot.speech_timer_fired(2));
    assert!(!mascot.is_speaking());
    // Firing twice is harmless.
    assert!(!mascot.speech_timer_fired(2));
}

#[test]
fn scroll_threshold_minimizes_and_restores() {
    let mut mascot = Mascot::default();

    assert!(!mascot.scrolled(100.0));
    assert!(!mascot.is_minimized());

    assert!(mascot.scrolled(400.0));
    assert!(mascot.is_minimized());
    assert_eq!(mascot.mood(), Mood::Curious);

    // Already minimized, deeper scrolling changes nothing.
    assert!(!mascot.scrolled(900.0));

    assert!(mascot.scrolled(120.0));
    assert!(!mascot.is_minimized());
    assert_eq!(mascot.mood(), Mood::Happy);
}
