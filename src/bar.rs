//! Status bar widget layout.
//!
//! One bar per screen, 32 px tall, floating with an 8 px margin.  Widgets
//! are declared left to right; most segments get a powerline separator and
//! a background drawn from the color scheme, with dark text on top.
//!
//! [`Bar::primary`] is the full layout; [`Bar::secondary`] is the same
//! minus the system tray and the exit button, since a tray can only live
//! on one screen.

use crate::theme::{ColorPair, ColorScheme};
use serde::Serialize;

/// Foreground used on colored bar segments.
pub const SEGMENT_TEXT: &str = "000000";

/// Longest window title shown before truncation.
pub const MAX_TITLE_LEN: usize = 28;

/// Shorten a window title to at most [`MAX_TITLE_LEN`] characters,
/// replacing the tail with `...` when it is cut.
pub fn truncate_title(title: &str) -> String {
    if title.chars().count() > MAX_TITLE_LEN {
        let cut: String = title.chars().take(MAX_TITLE_LEN - 2).collect();
        format!("{cut}...")
    } else {
        title.to_string()
    }
}

/// Font settings every widget inherits unless it overrides them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetDefaults {
    pub font: String,
    pub fontsize: u32,
    pub padding: u32,
}

impl Default for WidgetDefaults {
    fn default() -> Self {
        Self {
            font: "BlexMono Nerd Font Mono:style=Semibold Italic".into(),
            fontsize: 17,
            padding: 10,
        }
    }
}

/// One widget declaration.
///
/// Variants carry exactly the settings the layout overrides; everything
/// else falls back to [`WidgetDefaults`].  Formats use the runtime's
/// placeholder syntax and are opaque strings here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "widget", rename_all = "snake_case")]
pub enum Widget {
    /// Per-group buttons at the left edge.
    GroupBox {
        fontsize: u32,
        margin_y: u32,
        margin_x: u32,
        padding_y: u32,
        padding_x: u32,
        active: ColorPair,
        inactive: ColorPair,
        rounded: bool,
        highlight_color: ColorPair,
        highlight_method: String,
        this_current_screen_border: ColorPair,
        this_screen_border: ColorPair,
        other_current_screen_border: ColorPair,
        other_screen_border: ColorPair,
        background: ColorPair,
        powerline: bool,
    },

    /// Command prompt opened by mod+r.
    Prompt { powerline: bool },

    /// Focused window title, centered, truncated via [`truncate_title`].
    WindowName {
        center_aligned: bool,
        padding_x: u32,
        foreground: ColorPair,
        max_chars: usize,
        powerline: bool,
    },

    Clock {
        format: String,
        foreground: String,
        background: ColorPair,
        powerline: bool,
    },

    Pomodoro {
        foreground: String,
        color_active: String,
        color_break: String,
        color_inactive: String,
        background: ColorPair,
        powerline: bool,
    },

    Net {
        format: String,
        interface: String,
        foreground: String,
        background: ColorPair,
        update_interval: u32,
        powerline: bool,
    },

    PulseVolume {
        fmt: String,
        foreground: String,
        background: ColorPair,
        powerline: bool,
    },

    Cpu {
        format: String,
        foreground: String,
        background: ColorPair,
        update_interval: u32,
        powerline: bool,
    },

    Memory {
        format: String,
        fmt: String,
        foreground: String,
        background: ColorPair,
        update_interval: u32,
        powerline: bool,
    },

    KeyboardLayout {
        configured_keyboards: Vec<String>,
        fmt: String,
        foreground: String,
        background: ColorPair,
        powerline: bool,
    },

    Spacer { length: u32 },

    Systray { background: ColorPair, powerline: bool },

    /// Logout button with a confirmation countdown.
    QuickExit {
        foreground: String,
        default_text: String,
        countdown_format: String,
        background: ColorPair,
    },
}

/// The full widget list, left to right.
fn widgets(scheme: &ColorScheme) -> Vec<Widget> {
    vec![
        Widget::GroupBox {
            fontsize: 18,
            margin_y: 5,
            margin_x: 6,
            padding_y: 0,
            padding_x: 5,
            active: scheme[0].clone(),
            inactive: scheme[1].clone(),
            rounded: false,
            highlight_color: scheme[7].clone(),
            highlight_method: "line".into(),
            this_current_screen_border: scheme[0].clone(),
            this_screen_border: scheme[7].clone(),
            other_current_screen_border: scheme[0].clone(),
            other_screen_border: scheme[1].clone(),
            background: scheme[7].clone(),
            powerline: true,
        },
        Widget::Prompt { powerline: true },
        Widget::WindowName {
            center_aligned: true,
            padding_x: 10,
            foreground: scheme[0].clone(),
            max_chars: MAX_TITLE_LEN,
            powerline: true,
        },
        Widget::Clock {
            format: "\u{f0954}  :\t%A %d-%B-%Y %H:%M".into(),
            foreground: SEGMENT_TEXT.into(),
            background: scheme[1].clone(),
            powerline: true,
        },
        Widget::Pomodoro {
            foreground: SEGMENT_TEXT.into(),
            color_active: SEGMENT_TEXT.into(),
            color_break: SEGMENT_TEXT.into(),
            color_inactive: SEGMENT_TEXT.into(),
            background: scheme[3].clone(),
            powerline: true,
        },
        Widget::Net {
            format: "\u{ef09}   :\t{down:3.2f}{down_suffix:<2}\u{2193}\u{2191}{up:3.2f}{up_suffix:<2}".into(),
            interface: "wlp5s0".into(),
            foreground: SEGMENT_TEXT.into(),
            background: scheme[4].clone(),
            update_interval: 5,
            powerline: true,
        },
        Widget::PulseVolume {
            fmt: "\u{f057e} :\t{}".into(),
            foreground: SEGMENT_TEXT.into(),
            background: scheme[5].clone(),
            powerline: true,
        },
        Widget::Cpu {
            format: "\u{f0ee0} :\t{load_percent}%".into(),
            foreground: SEGMENT_TEXT.into(),
            background: scheme[6].clone(),
            update_interval: 5,
            powerline: true,
        },
        Widget::Memory {
            format: "{MemUsed:.0f}{mm}".into(),
            fmt: "\u{f05da}  :\t{}".into(),
            foreground: SEGMENT_TEXT.into(),
            background: scheme[2].clone(),
            update_interval: 5,
            powerline: true,
        },
        Widget::KeyboardLayout {
            configured_keyboards: vec!["latam".into()],
            fmt: "\u{f09fa} :\t{}".into(),
            foreground: SEGMENT_TEXT.into(),
            background: scheme[5].clone(),
            powerline: true,
        },
        Widget::Spacer { length: 8 },
        Widget::Systray {
            background: scheme[7].clone(),
            powerline: true,
        },
        Widget::QuickExit {
            foreground: SEGMENT_TEXT.into(),
            default_text: "\u{23fb}   ".into(),
            countdown_format: "\u{23fb}  {} ".into(),
            background: scheme[7].clone(),
        },
    ]
}

/// A bar attached to one screen edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bar {
    pub widgets: Vec<Widget>,
    /// Height in pixels.
    pub size: u32,
    /// Outer margin, `[top, right, bottom, left]`.
    pub margin: [u32; 4],
    pub background: ColorPair,
}

impl Bar {
    /// The full bar shown on the primary screen.
    pub fn primary(scheme: &ColorScheme) -> Self {
        Self {
            widgets: widgets(scheme),
            size: 32,
            margin: [8; 4],
            background: scheme[7].clone(),
        }
    }

    /// Secondary screens drop the trailing system tray and exit button.
    pub fn secondary(scheme: &ColorScheme) -> Self {
        let mut bar = Self::primary(scheme);
        let keep = bar.widgets.len().saturating_sub(2);
        bar.widgets.truncate(keep);
        bar
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{ColorPair, ColorScheme};

    fn test_scheme() -> ColorScheme {
        ColorScheme::from_pairs(std::array::from_fn(|i| ColorPair {
            base: format!("#b{i:02}"),
            bright: format!("#f{i:02}"),
        }))
    }

    #[test]
    fn short_titles_pass_through() {
        assert_eq!(truncate_title("Terminal"), "Terminal");
        let exact = "a".repeat(MAX_TITLE_LEN);
        assert_eq!(truncate_title(&exact), exact);
    }

    #[test]
    fn long_titles_get_cut_with_ellipsis() {
        let long = "a".repeat(MAX_TITLE_LEN + 12);
        let cut = truncate_title(&long);
        assert_eq!(cut, format!("{}...", "a".repeat(MAX_TITLE_LEN - 2)));
        assert_eq!(cut.chars().count(), MAX_TITLE_LEN + 1);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let long = "\u{e9}".repeat(MAX_TITLE_LEN + 5);
        let cut = truncate_title(&long);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), MAX_TITLE_LEN + 1);
    }

    #[test]
    fn primary_bar_starts_with_the_group_box() {
        let bar = Bar::primary(&test_scheme());
        assert!(matches!(bar.widgets.first(), Some(Widget::GroupBox { .. })));
        assert!(matches!(bar.widgets.last(), Some(Widget::QuickExit { .. })));
    }

    #[test]
    fn bar_chrome_uses_slot_seven() {
        let scheme = test_scheme();
        let bar = Bar::primary(&scheme);
        assert_eq!(bar.background, scheme[7]);
        assert_eq!(bar.size, 32);
        assert_eq!(bar.margin, [8, 8, 8, 8]);
    }

    #[test]
    fn secondary_bar_has_no_tray_or_exit() {
        let scheme = test_scheme();
        let primary = Bar::primary(&scheme);
        let secondary = Bar::secondary(&scheme);
        assert_eq!(secondary.widgets.len(), primary.widgets.len() - 2);
        assert!(!secondary
            .widgets
            .iter()
            .any(|w| matches!(w, Widget::Systray { .. } | Widget::QuickExit { .. })));
        assert_eq!(secondary.widgets, primary.widgets[..secondary.widgets.len()]);
    }

    #[test]
    fn net_widget_glyph_and_interface() {
        let bar = Bar::primary(&test_scheme());
        let (format, interface) = bar
            .widgets
            .iter()
            .find_map(|w| match w {
                Widget::Net {
                    format, interface, ..
                } => Some((format, interface)),
                _ => None,
            })
            .unwrap();
        assert!(format.starts_with('\u{ef09}'));
        assert_eq!(interface, "wlp5s0");
    }

    #[test]
    fn widgets_serialize_tagged() {
        let value = serde_json::to_value(Widget::Spacer { length: 8 }).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "widget": "spacer", "length": 8 })
        );
    }
}
