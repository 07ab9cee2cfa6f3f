//! Scroll monitoring provider implementations.
//!
//! Each provider answers the same four operations; `detect_monitor` picks the
//! best one available on the running system.

use crate::ScrollMonitor;

/// Fallback provider for platforms without trackpad-event detection.
///
/// Every operation is a pure constant: starting never succeeds, stopping is a
/// no-op, and both queries always answer `false`. Hosts treat an unsupported
/// platform exactly like a supported one where no trackpad scroll happened.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubMonitor;

impl StubMonitor {
    /// Create a stub monitor.
    pub fn new() -> Self {
        Self
    }
}

impl ScrollMonitor for StubMonitor {
    fn start_monitoring(&mut self) -> bool {
        false
    }

    fn stop_monitoring(&mut self) {}

    fn is_trackpad_scroll(&self) -> bool {
        false
    }

    fn is_monitoring(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "stub"
    }

    fn is_supported(&self) -> bool {
        // The stub is always usable; doing nothing is its supported behavior.
        true
    }
}

/// Detect the best available scroll monitoring provider for this system.
///
/// Never fails. Falls back to [`StubMonitor`] when no real provider exists,
/// logging why so a missing capability is diagnosable from the logs.
pub fn detect_monitor() -> Box<dyn ScrollMonitor> {
    #[cfg(target_os = "macos")]
    {
        let support = scrollkind_platform_macos::probe_event_tap_support();
        if support.available {
            // TODO(providers/quartz): return the CGEvent-tap provider once
            // scrollkind-platform-macos grows past capability probing.
            tracing::warn!("Quartz provider not wired up yet; using stub monitor");
        } else {
            tracing::warn!(
                "Event tap support unavailable on this macOS system; using stub monitor"
            );
        }
        Box::new(StubMonitor::new())
    }

    #[cfg(not(target_os = "macos"))]
    {
        tracing::warn!(
            "Trackpad scroll detection is not supported on this platform; using stub monitor"
        );
        Box::new(StubMonitor::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_start_returns_false_and_leaves_monitoring_off() {
        let mut monitor = StubMonitor::new();
        assert!(!monitor.start_monitoring());
        assert!(!monitor.is_monitoring());
    }

    #[test]
    fn stub_stop_without_start_is_a_no_op() {
        let mut monitor = StubMonitor::new();
        monitor.stop_monitoring();
        assert!(!monitor.is_monitoring());
    }

    #[test]
    fn stub_never_reports_trackpad_scroll() {
        let mut monitor = StubMonitor::new();
        assert!(!monitor.is_trackpad_scroll());
        monitor.start_monitoring();
        assert!(!monitor.is_trackpad_scroll());
        monitor.stop_monitoring();
        assert!(!monitor.is_trackpad_scroll());
    }

    #[test]
    fn detected_monitor_answers_queries_without_platform_branching() {
        let mut monitor = detect_monitor();
        assert!(!monitor.start_monitoring());
        assert!(!monitor.is_monitoring());
        assert!(!monitor.is_trackpad_scroll());
        monitor.stop_monitoring();
    }

    #[test]
    fn stub_reports_provider_metadata() {
        let monitor = StubMonitor::new();
        assert_eq!(monitor.name(), "stub");
        assert!(monitor.is_supported());
    }
}
