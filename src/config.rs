use log::Level;

use crate::theme::ColorMode;

/// localStorage key holding the persisted color mode.
pub const THEME_STORAGE_KEY: &str = "theme-preference";

/// Mode used when neither storage nor the platform has an opinion.
pub const DEFAULT_MODE: ColorMode = ColorMode::Dark;

pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Scroll offset (px) past which the scroll-to-top button shows.
pub const SCROLL_TOP_THRESHOLD: f64 = 100.0;

/// A block is revealed once its top edge is at or above this fraction of the viewport height.
pub const REVEAL_VIEWPORT_RATIO: f64 = 0.75;

pub const REVEAL_CLASS: &str = "scroll-animate";
pub const REVEALED_CLASS: &str = "animate";

/// Height of the sticky app bar; section jumps land just below it.
pub const NAV_HEIGHT: f64 = 64.0;

/// Below this viewport width the nav collapses into the drawer.
pub const MOBILE_BREAKPOINT: f64 = 900.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Tunables for the scroll-driven state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollConfig {
    pub top_threshold: f64,
    pub reveal_ratio: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            top_threshold: SCROLL_TOP_THRESHOLD,
            reveal_ratio: REVEAL_VIEWPORT_RATIO,
        }
    }
}
