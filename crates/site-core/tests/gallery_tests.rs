use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use site_core::catalog::{Catalog, PROJECTS};
use site_core::gallery::{classify_swipe, GalleryNav, SwipeDir, SwipeTracker};

#[test]
fn wraps_at_both_ends() {
    let mut nav = GalleryNav::new(3);
    assert_eq!(nav.index(), 0);
    assert_eq!(nav.previous(), 2);
    assert_eq!(nav.next(), 0);
    assert_eq!(nav.next(), 1);
    assert_eq!(nav.next(), 2);
    assert_eq!(nav.next(), 0);
}

#[test]
fn index_stays_in_range_for_any_navigation_sequence() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut nav = GalleryNav::new(4);
    for _ in 0..2_000 {
        match rng.gen_range(0..3) {
            0 => {
                nav.next();
            }
            1 => {
                nav.previous();
            }
            _ => {
                nav.select(rng.gen_range(0..10));
            }
        }
        assert!(nav.index() < nav.len());
    }
}

#[test]
fn out_of_range_selection_is_ignored() {
    let mut nav = GalleryNav::new(3);
    nav.next();
    assert!(!nav.select(3));
    assert!(!nav.select(usize::MAX));
    assert_eq!(nav.index(), 1);
    assert!(nav.select(2));
    assert_eq!(nav.index(), 2);
}

#[test]
fn empty_gallery_never_moves() {
    let mut nav = GalleryNav::new(0);
    assert!(nav.is_empty());
    assert_eq!(nav.next(), 0);
    assert_eq!(nav.previous(), 0);
    assert!(!nav.select(0));
}

#[test]
fn swipe_classification_threshold() {
    assert_eq!(classify_swipe(250.0, 100.0), Some(SwipeDir::Next));
    assert_eq!(classify_swipe(100.0, 250.0), Some(SwipeDir::Previous));
    // |delta| <= 100 is not a swipe, at the boundary included.
    assert_eq!(classify_swipe(200.0, 100.0), None);
    assert_eq!(classify_swipe(100.0, 200.0), None);
    for delta in -100..=100 {
        assert_eq!(classify_swipe(300.0, 300.0 - delta as f32), None);
    }
}

#[test]
fn tracker_requires_movement_between_start_and_end() {
    let mut tracker = SwipeTracker::default();
    tracker.touch_start(320.0);
    assert_eq!(tracker.touch_end(), None);

    tracker.touch_start(320.0);
    tracker.touch_move(180.0);
    assert_eq!(tracker.touch_end(), Some(SwipeDir::Next));

    // touch-end consumed the gesture.
    assert_eq!(tracker.touch_end(), None);
}

#[test]
fn tracker_uses_the_final_move_position() {
    let mut tracker = SwipeTracker::default();
    tracker.touch_start(100.0);
    tracker.touch_move(400.0);
    tracker.touch_move(150.0);
    // Net delta is -50: below threshold, no swipe.
    assert_eq!(tracker.touch_end(), None);
}

#[test]
fn swipe_drives_navigation() {
    let mut nav = GalleryNav::new(2);
    assert_eq!(nav.swipe(SwipeDir::Next), 1);
    assert_eq!(nav.swipe(SwipeDir::Next), 0);
    assert_eq!(nav.swipe(SwipeDir::Previous), 1);
}

#[test]
fn catalog_lookup_backs_the_gallery() {
    let catalog = Catalog::new();
    let project = catalog.find("ar-interface").expect("known project");
    assert_eq!(project.title, "Augmented Reality Interface");
    assert!(!project.images.is_empty());

    let nav = GalleryNav::new(project.images.len());
    assert_eq!(nav.len(), project.images.len());

    assert!(catalog.find("definitely-not-a-project").is_none());
    assert_eq!(catalog.all().len(), PROJECTS.len());
}
