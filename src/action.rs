//! The command vocabulary for key and mouse bindings.
//!
//! This module defines the vocabulary the declarative sections share:
//! [`Action`] names every operation a binding can ask the window manager
//! to perform, and [`Direction`] supports the directional ones.
//!
//! External programs are only *named* here (browser, launcher, volume
//! control, …) — the configuration never spawns anything itself; spawning
//! is the runtime's job.

use serde::Serialize;
use std::ffi::OsStr;
use std::fmt;

/// Web browser, bound to mod+b.
pub const BROWSER: &str = "firefox";

/// Application launcher, bound to mod+shift+Return.
pub const LAUNCHER: &str = "rofi -show drun -show-icons";

/// Window picker, bound to mod+shift+t.
pub const WINDOW_PICKER: &str = "rofi -show window";

/// Screenshot tool, bound to Print.
pub const SCREENSHOT: &str = "flameshot launcher";

/// Volume control via the XF86 audio keys.
pub const VOLUME_RAISE: &str = "pactl -- set-sink-volume 0 +1%";
pub const VOLUME_LOWER: &str = "pactl -- set-sink-volume 0 -1%";
pub const VOLUME_MUTE: &str = "pactl set-sink-mute 0 toggle";

/// Cardinal direction for focus, shuffle, and grow actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// Every operation a binding can invoke.
///
/// Actions are declarative: the runtime interprets them against its focus
/// model and layout engine.  They serialize internally tagged so the
/// emitted configuration stays self-describing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Move focus one window in the given direction.
    Focus { direction: Direction },

    /// Move focus to the next window in the stack.
    FocusNext,

    /// Swap the focused window one position in the given direction.
    Shuffle { direction: Direction },

    /// Grow the focused window toward the given direction.  Growing into
    /// a screen edge shrinks the window instead.
    Grow { direction: Direction },

    /// Reset all window sizes in the current layout.
    Normalize,

    /// Cycle to the next layout in [`default_layouts`](crate::layout::default_layouts) order.
    NextLayout,

    /// Close the focused window.
    KillWindow,

    /// Toggle fullscreen on the focused window.
    ToggleFullscreen,

    /// Toggle floating on the focused window.
    ToggleFloating,

    /// Re-evaluate this configuration without restarting the WM.
    ReloadConfig,

    /// Shut the window manager down.
    Shutdown,

    /// Open the command prompt widget in the bar.
    CommandPrompt,

    /// Run an external program.
    Spawn { command: String },

    /// Bring the named group to the current screen.
    SwitchToGroup { group: String },

    /// Send the focused window to the named group without following it.
    MoveToGroup { group: String },

    /// Switch to virtual terminal `vt` (Wayland backend only).
    ChangeVt { vt: u8 },
}

impl Action {
    /// Shorthand for [`Action::Spawn`].
    pub fn spawn(command: impl Into<String>) -> Self {
        Action::Spawn {
            command: command.into(),
        }
    }
}

/// Terminal emulators probed by [`guess_terminal`], in order of preference.
const TERMINALS: &[&str] = &[
    "alacritty", "kitty", "wezterm", "foot", "st", "urxvt", "rxvt", "xterm",
];

/// Find the first known terminal emulator present on `$PATH`.
///
/// Returns `None` when `$PATH` is unset or none of the candidates exist;
/// the caller decides on a fallback.
pub fn guess_terminal() -> Option<String> {
    let path = std::env::var_os("PATH")?;
    first_terminal_on(&path)
}

fn first_terminal_on(path: &OsStr) -> Option<String> {
    for candidate in TERMINALS {
        for dir in std::env::split_paths(path) {
            if dir.join(candidate).is_file() {
                return Some((*candidate).to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_display() {
        assert_eq!(Direction::Left.to_string(), "left");
        assert_eq!(Direction::Right.to_string(), "right");
        assert_eq!(Direction::Up.to_string(), "up");
        assert_eq!(Direction::Down.to_string(), "down");
    }

    #[test]
    fn spawn_shorthand() {
        assert_eq!(
            Action::spawn("firefox"),
            Action::Spawn {
                command: "firefox".into()
            }
        );
    }

    #[test]
    fn actions_serialize_tagged() {
        let value = serde_json::to_value(Action::spawn(BROWSER)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "action": "spawn", "command": "firefox" })
        );

        let value = serde_json::to_value(Action::Focus {
            direction: Direction::Left,
        })
        .unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "action": "focus", "direction": "left" })
        );

        let value = serde_json::to_value(Action::NextLayout).unwrap();
        assert_eq!(value, serde_json::json!({ "action": "next_layout" }));
    }

    #[test]
    fn finds_terminal_in_search_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("foot"), b"").unwrap();
        let found = first_terminal_on(dir.path().as_os_str());
        assert_eq!(found.as_deref(), Some("foot"));
    }

    #[test]
    fn prefers_earlier_candidate() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("xterm"), b"").unwrap();
        std::fs::write(dir.path().join("kitty"), b"").unwrap();
        let found = first_terminal_on(dir.path().as_os_str());
        assert_eq!(found.as_deref(), Some("kitty"));
    }

    #[test]
    fn empty_search_path_finds_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(first_terminal_on(dir.path().as_os_str()).is_none());
    }
}
