//! macOS platform scaffolding.
//!
//! This crate provides compile-safe placeholders for the Quartz event-tap
//! integration that real trackpad-scroll detection needs. Scroll events on
//! macOS carry a momentum/gesture phase that distinguishes trackpads from
//! mouse wheels; reading it requires a CGEvent tap and the Accessibility
//! permission.

use scrollkind_common::error::{ScrollkindError, ScrollkindResult};
use serde::Serialize;

/// Placeholder for Quartz event-tap capability details.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct EventTapSupport {
    /// Whether an event tap can be installed at all.
    pub available: bool,
    /// Whether the Accessibility permission has been granted.
    pub accessibility_granted: bool,
}

/// Probe whether a CGEvent tap for scroll events is available.
///
/// TODO(platform/macos): implement runtime capability detection via
/// CGPreflightListenEventAccess.
pub fn probe_event_tap_support() -> EventTapSupport {
    EventTapSupport {
        available: false,
        accessibility_granted: false,
    }
}

/// Install a scroll-event tap.
///
/// TODO(platform/macos): replace with a CGEventTapCreate wrapper.
pub fn install_scroll_event_tap() -> ScrollkindResult<()> {
    Err(ScrollkindError::platform(
        "macOS scroll event tap is not implemented yet",
    ))
}
