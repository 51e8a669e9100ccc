//! Platform-specific key bindings

use crossterm::event::KeyModifiers;

/// Modifier for the submit shortcut.
/// Ctrl on every platform; most macOS terminals swallow Cmd+S.
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for help text
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Newline hint for the multiline message field
/// - macOS: "Return"
/// - Linux/Windows: "Enter"
#[cfg(target_os = "macos")]
pub const NEWLINE_KEY: &str = "Return";

#[cfg(not(target_os = "macos"))]
pub const NEWLINE_KEY: &str = "Enter";
