//! Start monitoring and report scroll attribution.

use scrollkind_monitor::{detect_monitor, ScrollMonitor};

pub fn run() -> anyhow::Result<()> {
    let mut monitor = detect_monitor();
    tracing::info!(provider = %monitor.name(), "Starting scroll monitoring");

    let started = monitor.start_monitoring();
    if !started {
        println!(
            "Monitoring did not start (provider: {}). Scroll attribution is unavailable here; \
             is_trackpad_scroll() will answer false.",
            monitor.name()
        );
        monitor.stop_monitoring();
        return Ok(());
    }

    println!("Monitoring started. Press Ctrl+C to stop.");
    loop {
        std::thread::sleep(std::time::Duration::from_millis(250));
        if monitor.is_trackpad_scroll() {
            println!("trackpad scroll observed");
        }
        if !monitor.is_monitoring() {
            break;
        }
    }

    monitor.stop_monitoring();
    tracing::info!("Scroll monitoring stopped");
    Ok(())
}
