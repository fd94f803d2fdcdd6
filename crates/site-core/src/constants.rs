// Shared interaction tuning constants used by the core state machines and
// the web frontend.

// Mascot
pub const AVATAR_SIZE_PX: f32 = 100.0; // square bounding box used for viewport clamping
pub const AVATAR_HOME_PX: [f32; 2] = [20.0, 20.0]; // resting position on mount
pub const SCROLL_MINIMIZE_THRESHOLD_PX: f64 = 300.0; // past this the avatar shrinks out of the way
pub const GREETING_DELAY_MS: u32 = 2_000;
pub const SPEECH_DURATION_MS: u32 = 4_000; // how long a message stays on screen

// Gallery
pub const SWIPE_THRESHOLD_PX: f32 = 100.0; // smaller horizontal deltas are not swipes

// Presence simulation
pub const PRESENCE_TICK_MS: u32 = 30_000;
pub const PRESENCE_MIN: u32 = 1;
pub const PRESENCE_MAX: u32 = 8;
pub const PRESENCE_INITIAL_MIN: u32 = 2;
pub const PRESENCE_INITIAL_MAX: u32 = 6;
pub const COMMENT_MAX_CHARS: usize = 100;

// Theme
pub const NIGHT_START_HOUR: u32 = 20;
pub const NIGHT_END_HOUR: u32 = 6;
pub const THEME_RECHECK_MS: u32 = 3_600_000; // hourly re-evaluation while unforced

// Persistent store keys (single global namespace, string keyed)
pub const KEY_THEME: &str = "portfolioTheme";
pub const KEY_MUTED: &str = "portfolioMuted";
pub const KEY_VOLUME: &str = "portfolioVolume";
pub const KEY_USERNAME: &str = "portfolioUsername";
pub const KEY_COMMENTS: &str = "portfolioComments";
