//! Clipboard integration for copying the base color's hex value.

use std::io::Write;
use std::process::{Command, Stdio};
use thiserror::Error;
use wl_clipboard_rs::copy::{MimeType, Options, ServeRequests, Source};

/// Errors raised while placing text on the Wayland clipboard.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("failed to spawn wl-copy (is it installed?): {0}")]
    Spawn(#[source] std::io::Error),

    #[error("wl-copy I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("wl-copy exited with an error: {0}")]
    CommandFailed(String),

    #[error("wl-clipboard-rs error: {0}")]
    Library(String),

    #[error("wl-copy failed: {command}; wl-clipboard-rs failed: {library}")]
    Unavailable {
        command: Box<ClipboardError>,
        library: Box<ClipboardError>,
    },
}

/// Copy `text` to the Wayland clipboard.
///
/// Tries the wl-copy command first and falls back to the wl-clipboard-rs
/// library when the command is missing or fails.
pub fn copy_text(text: &str) -> Result<(), ClipboardError> {
    log::debug!("Attempting to copy '{}' to clipboard", text);

    match copy_via_command(text) {
        Ok(()) => {
            log::info!("Copied {} to clipboard via wl-copy", text);
            Ok(())
        }
        Err(cmd_err) => {
            log::warn!(
                "wl-copy command path failed ({}). Falling back to wl-clipboard-rs",
                cmd_err
            );
            match copy_via_library(text) {
                Ok(()) => {
                    log::info!("Copied {} to clipboard via wl-clipboard-rs fallback", text);
                    Ok(())
                }
                Err(lib_err) => Err(ClipboardError::Unavailable {
                    command: Box::new(cmd_err),
                    library: Box::new(lib_err),
                }),
            }
        }
    }
}

fn copy_via_library(text: &str) -> Result<(), ClipboardError> {
    let mut opts = Options::new();
    // Serve one paste, then let the background server exit
    opts.serve_requests(ServeRequests::Only(1));

    opts.copy(
        Source::Bytes(text.as_bytes().to_vec().into_boxed_slice()),
        MimeType::Text,
    )
    .map_err(|e| ClipboardError::Library(e.to_string()))
}

fn copy_via_command(text: &str) -> Result<(), ClipboardError> {
    let mut child = Command::new("wl-copy")
        .arg("--type")
        .arg("text/plain")
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(ClipboardError::Spawn)?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }

    let output = child.wait_with_output()?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ClipboardError::CommandFailed(stderr.trim().to_string()));
    }

    log::debug!("wl-copy command completed successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_error_lists_both_failures() {
        let err = ClipboardError::Unavailable {
            command: Box::new(ClipboardError::CommandFailed("no display".into())),
            library: Box::new(ClipboardError::Library("no seat".into())),
        };
        let message = err.to_string();
        assert!(message.contains("no display"));
        assert!(message.contains("no seat"));
    }
}
