//! Best-effort display of the input and the result.
//!
//! Nothing in here can fail the run: by the time a preview is shown the output is already on disk.

use std::io::BufRead;
use std::path::Path;

use log::{info, warn};

/// Opens both images in the system viewer and waits for the user to press Enter.
///
/// Returns whether the viewer could be launched at all.
pub fn show(original: &Path, sharpened: &Path) -> bool {
    if !display_available() {
        info!("no display available, skipping preview");
        return false;
    }

    for path in [original, sharpened] {
        if let Err(e) = open::that_detached(path) {
            warn!("could not open {} for preview: {e}", path.display());
            return false;
        }
    }

    eprintln!("Press Enter to exit the preview.");
    let mut line = String::new();
    if let Err(e) = std::io::stdin().lock().read_line(&mut line) {
        warn!("could not wait for a key press: {e}");
    }
    true
}

#[cfg(all(unix, not(target_os = "macos")))]
fn display_available() -> bool {
    display_available_in(|var| std::env::var_os(var))
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn display_available() -> bool {
    true
}

/// X11 and Wayland both advertise themselves through the environment
#[cfg_attr(not(all(unix, not(target_os = "macos"))), allow(dead_code))]
fn display_available_in(lookup: impl Fn(&str) -> Option<std::ffi::OsString>) -> bool {
    ["DISPLAY", "WAYLAND_DISPLAY"]
        .into_iter()
        .any(|var| lookup(var).is_some_and(|value| !value.is_empty()))
}
