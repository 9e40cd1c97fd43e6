//! Top-level configuration assembly.
//!
//! [`Config::new`] builds every declarative section from a loaded
//! [`ColorScheme`] in one explicit pass.  Nothing here touches disk or
//! global state; the palette read happens before, in
//! [`theme::load`](crate::theme::load), and the caller wires the two
//! together.

use crate::action::guess_terminal;
use crate::bar::{Bar, WidgetDefaults};
use crate::group::{default_groups, Group};
use crate::keys::{default_bindings, default_mouse_bindings, KeyBinding, MouseBinding};
use crate::layout::{default_float_rules, default_layouts, FloatRule, Layout};
use crate::theme::ColorScheme;
use serde::Serialize;
use std::path::PathBuf;

/// Fallback when none of the known terminal emulators is on `$PATH`.
const FALLBACK_TERMINAL: &str = "xterm";

/// A screen and the bar attached to its top edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Screen {
    pub top: Bar,
}

/// Scalar window-manager behaviour switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub follow_mouse_focus: bool,
    pub bring_front_click: bool,
    pub floats_kept_above: bool,
    pub cursor_warp: bool,
    pub auto_fullscreen: bool,
    pub focus_on_window_activation: String,
    pub reconfigure_screens: bool,
    /// Whether windows may minimize themselves on focus loss.
    pub auto_minimize: bool,
    /// Advertised WM name.  Some Java toolkits only cooperate with names
    /// on their whitelist; `LG3D` is the customary lie.
    pub wmname: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            follow_mouse_focus: true,
            bring_front_click: false,
            floats_kept_above: true,
            cursor_warp: false,
            auto_fullscreen: true,
            focus_on_window_activation: "smart".into(),
            reconfigure_screens: true,
            auto_minimize: true,
            wmname: "LG3D".into(),
        }
    }
}

/// The whole evaluated configuration, ready to serialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    pub groups: Vec<Group>,
    pub keys: Vec<KeyBinding>,
    pub mouse: Vec<MouseBinding>,
    pub layouts: Vec<Layout>,
    pub float_rules: Vec<FloatRule>,
    pub widget_defaults: WidgetDefaults,
    pub screens: Vec<Screen>,
    /// Script spawned once when the WM starts.
    pub autostart: PathBuf,
    pub settings: Settings,
}

impl Config {
    /// Assemble the full configuration from a loaded color scheme.
    ///
    /// The terminal bound to mod+Return is guessed from `$PATH`.
    pub fn new(scheme: &ColorScheme) -> Self {
        let terminal = guess_terminal().unwrap_or_else(|| FALLBACK_TERMINAL.to_string());
        Self::with_terminal(scheme, &terminal)
    }

    /// Like [`Config::new`] but with an explicit terminal, so construction
    /// is deterministic regardless of the environment.
    pub fn with_terminal(scheme: &ColorScheme, terminal: &str) -> Self {
        let groups = default_groups();
        let keys = default_bindings(&groups, terminal);
        Self {
            keys,
            mouse: default_mouse_bindings(),
            layouts: default_layouts(scheme),
            float_rules: default_float_rules(),
            widget_defaults: WidgetDefaults::default(),
            screens: vec![Screen {
                top: Bar::primary(scheme),
            }],
            autostart: autostart_path(),
            settings: Settings::default(),
            groups,
        }
    }
}

/// Startup script location: `~/.config/tilerc/autostart.sh`.
pub fn autostart_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
    PathBuf::from(home)
        .join(".config")
        .join("tilerc")
        .join("autostart.sh")
}
