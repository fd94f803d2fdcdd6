use rand::rngs::StdRng;
use rand::SeedableRng;
use site_core::constants::{
    COMMENT_MAX_CHARS, PRESENCE_INITIAL_MAX, PRESENCE_INITIAL_MIN, PRESENCE_MAX, PRESENCE_MIN,
};
use site_core::presence::{
    format_relative, guest_name, seed_comments, Comment, CommentThread, PresenceSim,
};

#[test]
fn initial_count_lands_in_the_starting_band() {
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let sim = PresenceSim::new(&mut rng);
        assert!((PRESENCE_INITIAL_MIN..=PRESENCE_INITIAL_MAX).contains(&sim.online()));
    }
}

#[test]
fn count_stays_clamped_over_many_ticks() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut sim = PresenceSim::new(&mut rng);
    for _ in 0..5_000 {
        let online = sim.tick(&mut rng);
        assert!((PRESENCE_MIN..=PRESENCE_MAX).contains(&online));
    }
}

#[test]
fn guest_names_are_guest_plus_short_number() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..50 {
        let name = guest_name(&mut rng);
        let suffix = name.strip_prefix("Guest").expect("Guest prefix");
        assert!(suffix.parse::<u32>().unwrap() < 10_000);
    }
}

#[test]
fn seeds_fill_an_empty_thread_newest_first() {
    let now = 10_000_000_000.0;
    let thread = CommentThread::from_stored(None, now);
    assert_eq!(thread.len(), 2);
    assert_eq!(thread.comments()[0].name, "Visitor123");
    assert!(thread.comments()[0].timestamp > thread.comments()[1].timestamp);
}

#[test]
fn stored_comments_bypass_the_seeds() {
    let stored = vec![Comment {
        name: "Guest4821".to_owned(),
        text: "hello".to_owned(),
        timestamp: 123.0,
    }];
    let thread = CommentThread::from_stored(Some(stored), 456.0);
    assert_eq!(thread.len(), 1);
    assert_eq!(thread.comments()[0].name, "Guest4821");
}

#[test]
fn whitespace_only_comments_are_rejected() {
    let mut thread = CommentThread::from_stored(None, 0.0);
    let before = thread.len();
    assert!(thread.add("Guest1", "", 1.0).is_none());
    assert!(thread.add("Guest1", "   \t  \n", 1.0).is_none());
    assert_eq!(thread.len(), before);
}

#[test]
fn added_comments_are_trimmed_and_prepended() {
    let now = 1_700_000_000_000.0;
    let mut thread = CommentThread::from_stored(None, now);
    let added = thread.add("Guest4821", "  Nice site!  ", now).unwrap();
    assert_eq!(added.name, "Guest4821");
    assert_eq!(added.text, "Nice site!");
    assert_eq!(added.timestamp, now);
    assert_eq!(thread.comments()[0].text, "Nice site!");
    assert_eq!(thread.len(), 3);
}

#[test]
fn overlong_comments_are_capped() {
    let mut thread = CommentThread::from_stored(Some(Vec::new()), 0.0);
    let long = "x".repeat(COMMENT_MAX_CHARS * 2);
    let added = thread.add("Guest1", &long, 1.0).unwrap();
    assert_eq!(added.text.chars().count(), COMMENT_MAX_CHARS);
}

#[test]
fn relative_time_brackets() {
    let now = 2_000_000_000_000.0;
    assert_eq!(format_relative(now, now - 30_000.0), "just now");
    assert_eq!(format_relative(now, now - 5.0 * 60_000.0), "5 min ago");
    assert_eq!(format_relative(now, now - 3.0 * 3_600_000.0), "3 h ago");
    assert_eq!(format_relative(now, now - 2.0 * 86_400_000.0), "2 d ago");
}

#[test]
fn persisted_list_round_trips_through_json() {
    let comments = seed_comments(1_000_000.0);
    let json = serde_json::to_string(&comments).unwrap();
    let back: Vec<Comment> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, comments);
}

#[test]
fn corrupt_persisted_json_fails_to_parse() {
    assert!(serde_json::from_str::<Vec<Comment>>("{not json").is_err());
    assert!(serde_json::from_str::<Vec<Comment>>("[{\"name\":1}]").is_err());
}
