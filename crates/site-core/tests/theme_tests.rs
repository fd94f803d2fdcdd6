use site_core::theme::{is_night, resolve_initial, Theme, ThemeController};

#[test]
fn stored_preference_wins_over_everything() {
    for os_dark in [false, true] {
        for hour in 0..24 {
            assert_eq!(
                resolve_initial(Some(Theme::Light), os_dark, hour),
                Theme::Light
            );
            assert_eq!(
                resolve_initial(Some(Theme::Dark), os_dark, hour),
                Theme::Dark
            );
        }
    }
}

#[test]
fn os_dark_wins_at_any_hour_without_stored_preference() {
    for hour in 0..24 {
        assert_eq!(resolve_initial(None, true, hour), Theme::Dark);
    }
}

#[test]
fn night_branch_overrides_an_os_light_report() {
    // No stored preference, OS reports light, 22:00 local: still dark.
    assert_eq!(resolve_initial(None, false, 22), Theme::Dark);
}

#[test]
fn daytime_without_signals_resolves_light() {
    for hour in 6..20 {
        assert_eq!(resolve_initial(None, false, hour), Theme::Light);
    }
}

#[test]
fn night_window_boundaries() {
    assert!(!is_night(19));
    assert!(is_night(20));
    assert!(is_night(23));
    assert!(is_night(0));
    assert!(is_night(5));
    assert!(!is_night(6));
}

#[test]
fn toggle_flips_and_silences_auto_reevaluation() {
    let mut controller = ThemeController::new(None, false, 12);
    assert_eq!(controller.current(), Theme::Light);

    assert_eq!(controller.toggle(), Theme::Dark);
    // The explicit choice holds against both auto paths for the session.
    assert_eq!(controller.auto_reevaluate(false, 12), None);
    assert_eq!(controller.auto_reevaluate(true, 23), None);
    assert_eq!(controller.current(), Theme::Dark);
}

#[test]
fn auto_reevaluation_follows_the_clock_until_toggled() {
    let mut controller = ThemeController::new(None, false, 12);
    assert_eq!(controller.current(), Theme::Light);

    assert_eq!(controller.auto_reevaluate(false, 22), Some(Theme::Dark));
    // Unchanged conditions report no change.
    assert_eq!(controller.auto_reevaluate(false, 22), None);
    assert_eq!(controller.auto_reevaluate(false, 9), Some(Theme::Light));
}

#[test]
fn auto_reevaluation_may_override_a_stored_preference() {
    // A preference stored in an earlier session is not an explicit choice
    // in this one.
    let mut controller = ThemeController::new(Some(Theme::Light), false, 22);
    assert_eq!(controller.current(), Theme::Light);
    assert_eq!(controller.auto_reevaluate(false, 22), Some(Theme::Dark));
}

#[test]
fn parse_and_render_round_trip() {
    assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
    assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.root_class(), "theme-dark");
    assert!("solarized".parse::<Theme>().is_err());
}
