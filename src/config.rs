/// Quiet period after the last keystroke before the search overlay filters.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;
/// Queries shorter than this never trigger a lookup.
pub const MIN_QUERY_CHARS: usize = 3;

/// Simulated account creation time.
pub const SIGNUP_DELAY_MS: u32 = 2_000;
pub const MIN_PASSWORD_CHARS: usize = 8;

// Delays before the landing page navigates away, so the toast is visible.
pub const SEARCH_NAVIGATION_DELAY_MS: u32 = 1_000;
pub const COURSE_NAVIGATION_DELAY_MS: u32 = 500;

pub const TOAST_LIFETIME_MS: u32 = 4_000;
pub const TOAST_CAPACITY: usize = 3;

pub const TYPEWRITER_TYPE_MS: u32 = 150;
pub const TYPEWRITER_DELETE_MS: u32 = 50;
pub const TYPEWRITER_HOLD_MS: u32 = 2_000;

pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}
