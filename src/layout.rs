//! Window layouts and floating rules.

use crate::theme::{ColorPair, ColorScheme};
use serde::Serialize;

/// Visual parameters shared by every tiling layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutTheme {
    /// Border width in pixels.
    pub border_width: u32,
    /// Gap around windows in pixels.
    pub margin: u32,
    pub border_focus: ColorPair,
    pub border_normal: ColorPair,
}

impl LayoutTheme {
    /// Borders come from scheme slots 1 (focused) and 7 (unfocused).
    pub fn from_scheme(scheme: &ColorScheme) -> Self {
        Self {
            border_width: 2,
            margin: 6,
            border_focus: scheme[1].clone(),
            border_normal: scheme[7].clone(),
        }
    }
}

/// The tiling layouts cycled by mod+Tab, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum Layout {
    Columns { theme: LayoutTheme },
    Max { theme: LayoutTheme },
    Spiral { theme: LayoutTheme },
}

pub fn default_layouts(scheme: &ColorScheme) -> Vec<Layout> {
    let theme = LayoutTheme::from_scheme(scheme);
    vec![
        Layout::Columns {
            theme: theme.clone(),
        },
        Layout::Max {
            theme: theme.clone(),
        },
        Layout::Spiral { theme },
    ]
}

/// Match rule that forces a window to float.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FloatRule {
    WmClass(String),
    Title(String),
}

/// Dialogs that should never be tiled.
pub fn default_float_rules() -> Vec<FloatRule> {
    vec![
        FloatRule::WmClass("confirmreset".into()), // gitk
        FloatRule::WmClass("makebranch".into()),   // gitk
        FloatRule::WmClass("maketag".into()),      // gitk
        FloatRule::WmClass("ssh-askpass".into()),
        FloatRule::Title("branchdialog".into()), // gitk
        FloatRule::Title("pinentry".into()),     // GPG key password entry
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{ColorPair, ColorScheme, SCHEME_PAIRS};

    fn test_scheme() -> ColorScheme {
        ColorScheme::from_pairs(std::array::from_fn(|i| ColorPair {
            base: format!("#b{i:02}"),
            bright: format!("#f{i:02}"),
        }))
    }

    #[test]
    fn borders_use_slots_one_and_seven() {
        let scheme = test_scheme();
        let theme = LayoutTheme::from_scheme(&scheme);
        assert_eq!(theme.border_focus, scheme[1]);
        assert_eq!(theme.border_normal, scheme[SCHEME_PAIRS - 1]);
    }

    #[test]
    fn all_layouts_share_one_theme() {
        let scheme = test_scheme();
        let expected = LayoutTheme::from_scheme(&scheme);
        for layout in default_layouts(&scheme) {
            let theme = match layout {
                Layout::Columns { theme } | Layout::Max { theme } | Layout::Spiral { theme } => {
                    theme
                }
            };
            assert_eq!(theme, expected);
        }
    }

    #[test]
    fn columns_is_the_initial_layout() {
        let layouts = default_layouts(&test_scheme());
        assert_eq!(layouts.len(), 3);
        assert!(matches!(layouts[0], Layout::Columns { .. }));
    }

    #[test]
    fn float_rules_cover_the_usual_dialogs() {
        let rules = default_float_rules();
        assert_eq!(rules.len(), 6);
        assert!(rules.contains(&FloatRule::Title("pinentry".into())));
        assert!(rules.contains(&FloatRule::WmClass("ssh-askpass".into())));
    }
}
