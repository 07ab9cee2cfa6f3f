//! Scrollkind Monitor
//!
//! Detects whether scroll input originates from a trackpad gesture rather
//! than a mouse wheel. The capability is platform-bound: only macOS exposes
//! the event stream needed to tell the two apart, so the monitor is modeled
//! as a small closed provider interface selected at startup:
//!
//! - **Stub:** default/fallback variant for platforms without detection
//!   support; every query answers "no"
//! - **Quartz (planned):** CGEvent-tap based detection on macOS
//!
//! Hosts hold a `Box<dyn ScrollMonitor>` and never branch on platform; the
//! four operations have identical signatures across every provider.

pub mod providers;

use serde::{Deserialize, Serialize};

pub use providers::{detect_monitor, StubMonitor};

/// Trait for scroll monitoring providers.
///
/// All four operations are infallible and may be called any number of times,
/// in any order. A provider that cannot observe scroll hardware answers the
/// queries with `false` rather than failing.
pub trait ScrollMonitor: Send {
    /// Begin observing scroll events. Returns whether monitoring actually
    /// started; a provider without platform support returns `false`.
    fn start_monitoring(&mut self) -> bool;

    /// Stop observing scroll events. Safe to call without a prior start.
    fn stop_monitoring(&mut self);

    /// Whether the most recent scroll event came from a trackpad gesture.
    fn is_trackpad_scroll(&self) -> bool;

    /// Whether the provider is currently monitoring.
    fn is_monitoring(&self) -> bool;

    /// Provider name for logging.
    fn name(&self) -> &str;

    /// Whether this provider can do real detection on this system.
    fn is_supported(&self) -> bool;
}

/// Origin of a scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScrollSource {
    /// Continuous scroll from a trackpad gesture.
    Trackpad,
    /// Discrete scroll from a mouse wheel.
    MouseWheel,
    /// The provider cannot attribute the scroll to a device.
    #[default]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_source_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ScrollSource::Trackpad).unwrap(),
            "\"trackpad\""
        );
        assert_eq!(
            serde_json::to_string(&ScrollSource::MouseWheel).unwrap(),
            "\"mouse_wheel\""
        );
        assert_eq!(
            serde_json::from_str::<ScrollSource>("\"unknown\"").unwrap(),
            ScrollSource::Unknown
        );
    }

    #[test]
    fn scroll_source_defaults_to_unknown() {
        assert_eq!(ScrollSource::default(), ScrollSource::Unknown);
    }
}
