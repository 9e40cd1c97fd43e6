//! Key and mouse bindings.
//!
//! [`default_bindings`] produces the complete binding table: vi-style
//! focus movement on hjkl, window shuffling and resizing on the same keys
//! with shift/control, program launchers, media keys, VT switching for
//! the Wayland backend, and two bindings per workspace group (switch to
//! it, send the focused window to it).

use crate::action::{self, Action, Direction};
use crate::group::Group;
use serde::Serialize;

/// Modifier keys understood by the window manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    /// The Super / logo key — the main modifier for everything below.
    Super,
    Shift,
    Control,
    Alt,
}

/// One key binding: modifiers + keysym → action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyBinding {
    pub mods: Vec<Modifier>,
    /// X keysym name (`"h"`, `"Return"`, `"XF86AudioRaiseVolume"`, …).
    pub keysym: String,
    pub action: Action,
    /// Human-readable description, shown by binding cheat-sheet tools.
    pub desc: String,
}

impl KeyBinding {
    pub fn new(mods: &[Modifier], keysym: &str, action: Action, desc: &str) -> Self {
        Self {
            mods: mods.to_vec(),
            keysym: keysym.to_string(),
            action,
            desc: desc.to_string(),
        }
    }
}

/// Mouse buttons used by the floating-window bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// What a mouse binding does to the window under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseAction {
    MoveFloating,
    ResizeFloating,
    BringToFront,
}

/// Whether a mouse binding tracks the pointer or fires once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseBindingKind {
    Drag,
    Click,
}

/// One mouse binding: modifiers + button → action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MouseBinding {
    pub mods: Vec<Modifier>,
    pub button: MouseButton,
    pub kind: MouseBindingKind,
    pub action: MouseAction,
}

/// The full key binding table.
///
/// `terminal` is the terminal emulator bound to mod+Return; the caller
/// resolves it (see [`guess_terminal`](crate::action::guess_terminal)) so
/// the table itself stays deterministic.
pub fn default_bindings(groups: &[Group], terminal: &str) -> Vec<KeyBinding> {
    use Modifier::{Alt, Control, Shift, Super};

    let focus = |d| Action::Focus { direction: d };
    let shuffle = |d| Action::Shuffle { direction: d };
    let grow = |d| Action::Grow { direction: d };

    let mut keys = vec![
        // Focus movement.
        KeyBinding::new(&[Super], "h", focus(Direction::Left), "Move focus to left"),
        KeyBinding::new(&[Super], "l", focus(Direction::Right), "Move focus to right"),
        KeyBinding::new(&[Super], "j", focus(Direction::Down), "Move focus down"),
        KeyBinding::new(&[Super], "k", focus(Direction::Up), "Move focus up"),
        KeyBinding::new(
            &[Super],
            "space",
            Action::FocusNext,
            "Move window focus to other window",
        ),
        // Move windows within the layout.  Moving out of range in the
        // columns layout creates a new column.
        KeyBinding::new(
            &[Super, Shift],
            "h",
            shuffle(Direction::Left),
            "Move window to the left",
        ),
        KeyBinding::new(
            &[Super, Shift],
            "l",
            shuffle(Direction::Right),
            "Move window to the right",
        ),
        KeyBinding::new(&[Super, Shift], "j", shuffle(Direction::Down), "Move window down"),
        KeyBinding::new(&[Super, Shift], "k", shuffle(Direction::Up), "Move window up"),
        // Resize.  Growing toward a screen edge shrinks instead.
        KeyBinding::new(
            &[Super, Control],
            "h",
            grow(Direction::Left),
            "Grow window to the left",
        ),
        KeyBinding::new(
            &[Super, Control],
            "l",
            grow(Direction::Right),
            "Grow window to the right",
        ),
        KeyBinding::new(&[Super, Control], "j", grow(Direction::Down), "Grow window down"),
        KeyBinding::new(&[Super, Control], "k", grow(Direction::Up), "Grow window up"),
        KeyBinding::new(&[Super], "n", Action::Normalize, "Reset all window sizes"),
        // Programs.
        KeyBinding::new(&[Super], "b", Action::spawn(action::BROWSER), "Launch browser"),
        KeyBinding::new(&[Super], "Return", Action::spawn(terminal), "Launch terminal"),
        KeyBinding::new(
            &[Super, Shift],
            "Return",
            Action::spawn(action::LAUNCHER),
            "Spawn launcher",
        ),
        KeyBinding::new(
            &[Super, Shift],
            "t",
            Action::spawn(action::WINDOW_PICKER),
            "Spawn window picker",
        ),
        KeyBinding::new(&[], "Print", Action::spawn(action::SCREENSHOT), "Take a screenshot"),
        // Window and layout management.
        KeyBinding::new(&[Super], "Tab", Action::NextLayout, "Toggle between layouts"),
        KeyBinding::new(&[Super], "w", Action::KillWindow, "Kill focused window"),
        KeyBinding::new(
            &[Super],
            "f",
            Action::ToggleFullscreen,
            "Toggle fullscreen on the focused window",
        ),
        KeyBinding::new(
            &[Super],
            "t",
            Action::ToggleFloating,
            "Toggle floating on the focused window",
        ),
        KeyBinding::new(
            &[Super],
            "r",
            Action::CommandPrompt,
            "Spawn a command using a prompt widget",
        ),
        KeyBinding::new(&[Super, Control], "r", Action::ReloadConfig, "Reload the config"),
        KeyBinding::new(
            &[Super, Control],
            "q",
            Action::Shutdown,
            "Shutdown the window manager",
        ),
        KeyBinding::new(
            &[Super, Shift],
            "g",
            Action::Shutdown,
            "Shutdown the window manager",
        ),
        // Media keys.
        KeyBinding::new(
            &[],
            "XF86AudioRaiseVolume",
            Action::spawn(action::VOLUME_RAISE),
            "Raise volume",
        ),
        KeyBinding::new(
            &[],
            "XF86AudioLowerVolume",
            Action::spawn(action::VOLUME_LOWER),
            "Lower volume",
        ),
        KeyBinding::new(
            &[],
            "XF86AudioPlay",
            Action::spawn(action::VOLUME_MUTE),
            "Toggle mute",
        ),
    ];

    // VT switching for the Wayland backend.
    for vt in 1..=7 {
        keys.push(KeyBinding::new(
            &[Control, Alt],
            &format!("f{vt}"),
            Action::ChangeVt { vt },
            &format!("Switch to VT{vt}"),
        ));
    }

    for group in groups {
        keys.push(KeyBinding::new(
            &[Super],
            &group.name,
            Action::SwitchToGroup {
                group: group.name.clone(),
            },
            &format!("Switch to group {}", group.name),
        ));
        keys.push(KeyBinding::new(
            &[Super, Shift],
            &group.name,
            Action::MoveToGroup {
                group: group.name.clone(),
            },
            &format!("Move focused window to group {}", group.name),
        ));
    }

    keys
}

/// Floating-window mouse bindings: drag to move, drag to resize, click to
/// raise.
pub fn default_mouse_bindings() -> Vec<MouseBinding> {
    use Modifier::Super;

    vec![
        MouseBinding {
            mods: vec![Super],
            button: MouseButton::Left,
            kind: MouseBindingKind::Drag,
            action: MouseAction::MoveFloating,
        },
        MouseBinding {
            mods: vec![Super],
            button: MouseButton::Right,
            kind: MouseBindingKind::Drag,
            action: MouseAction::ResizeFloating,
        },
        MouseBinding {
            mods: vec![Super],
            button: MouseButton::Middle,
            kind: MouseBindingKind::Click,
            action: MouseAction::BringToFront,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::default_groups;
    use std::collections::HashSet;

    fn bindings() -> Vec<KeyBinding> {
        default_bindings(&default_groups(), "xterm")
    }

    #[test]
    fn no_two_bindings_share_a_chord() {
        let keys = bindings();
        let mut seen = HashSet::new();
        for key in &keys {
            let mut mods = key.mods.clone();
            mods.sort_by_key(|m| format!("{m:?}"));
            assert!(
                seen.insert((mods, key.keysym.clone())),
                "duplicate chord: {:?}+{}",
                key.mods,
                key.keysym
            );
        }
    }

    #[test]
    fn every_group_gets_switch_and_move() {
        let groups = default_groups();
        let keys = bindings();
        for group in &groups {
            let switch = keys.iter().any(|k| {
                k.action
                    == Action::SwitchToGroup {
                        group: group.name.clone(),
                    }
            });
            let mv = keys.iter().any(|k| {
                k.action
                    == Action::MoveToGroup {
                        group: group.name.clone(),
                    }
            });
            assert!(switch && mv, "group {} is missing a binding", group.name);
        }
    }

    #[test]
    fn terminal_is_bound_to_mod_return() {
        let keys = default_bindings(&default_groups(), "alacritty");
        let binding = keys
            .iter()
            .find(|k| k.keysym == "Return" && k.mods == vec![Modifier::Super])
            .unwrap();
        assert_eq!(binding.action, Action::spawn("alacritty"));
    }

    #[test]
    fn seven_vt_switch_bindings() {
        let vts: Vec<u8> = bindings()
            .iter()
            .filter_map(|k| match k.action {
                Action::ChangeVt { vt } => Some(vt),
                _ => None,
            })
            .collect();
        assert_eq!(vts, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn media_keys_are_unmodified() {
        for key in bindings() {
            if key.keysym.starts_with("XF86Audio") {
                assert!(key.mods.is_empty());
            }
        }
    }

    #[test]
    fn three_mouse_bindings_on_super() {
        let mouse = default_mouse_bindings();
        assert_eq!(mouse.len(), 3);
        for binding in &mouse {
            assert_eq!(binding.mods, vec![Modifier::Super]);
        }
    }
}
