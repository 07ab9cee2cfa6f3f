//! Check provider selection and platform capabilities.

use scrollkind_monitor::{detect_monitor, ScrollMonitor};

pub fn run() -> anyhow::Result<()> {
    println!("Scrollkind System Check");
    println!("{}", "=".repeat(50));

    let monitor = detect_monitor();
    println!("[OK] Provider selected: {}", monitor.name());

    if monitor.is_supported() {
        println!("[OK] Provider is usable on this system");
    } else {
        println!("[WARN] Provider reports no support on this system");
    }

    #[cfg(target_os = "macos")]
    {
        let support = scrollkind_platform_macos::probe_event_tap_support();
        if support.available {
            println!("[OK] Quartz event tap: available");
        } else {
            println!("[WARN] Quartz event tap: unavailable");
        }
        if support.accessibility_granted {
            println!("[OK] Accessibility permission: granted");
        } else {
            println!("[WARN] Accessibility permission: not granted");
        }
    }

    #[cfg(not(target_os = "macos"))]
    println!("[WARN] Trackpad scroll detection: not supported on this platform");

    println!();
    if monitor.name() == "stub" {
        println!("Running with the stub provider. Scroll queries always answer false.");
    } else {
        println!("Real scroll monitoring is available.");
    }

    Ok(())
}
