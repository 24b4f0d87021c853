//! Browser launching for `--gui` mode.

use std::process::Command;

/// Open `url` in the default browser.
///
/// Spawn failures are logged and swallowed; a missing opener must never take
/// the server down.
pub fn open(url: &str) {
    let result = spawn_opener(url);
    match result {
        Ok(_) => tracing::info!(url, "Opened browser"),
        Err(e) => tracing::warn!(url, error = %e, "Failed to open browser"),
    }
}

#[cfg(target_os = "macos")]
fn spawn_opener(url: &str) -> std::io::Result<std::process::Child> {
    Command::new("open").arg(url).spawn()
}

#[cfg(target_os = "linux")]
fn spawn_opener(url: &str) -> std::io::Result<std::process::Child> {
    Command::new("xdg-open").arg(url).spawn()
}

#[cfg(target_os = "windows")]
fn spawn_opener(url: &str) -> std::io::Result<std::process::Child> {
    Command::new("cmd").args(["/C", "start", url]).spawn()
}

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
fn spawn_opener(_url: &str) -> std::io::Result<std::process::Child> {
    Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "no known browser opener for this platform",
    ))
}
