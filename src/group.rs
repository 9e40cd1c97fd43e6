//! Workspace groups.
//!
//! Nine groups keyed `1`..`9`.  The name doubles as the key bound to the
//! group in [`keys::default_bindings`](crate::keys::default_bindings); the
//! label is the glyph the bar's group box renders, one per group's role
//! (web, dev, terminal, and so on).

use serde::Serialize;

/// A named workspace group with its bar label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    /// Name the window manager identifies the group by.
    pub name: String,
    /// Glyph shown in the bar's group box.
    pub label: String,
}

impl Group {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
        }
    }
}

/// Bar glyphs for the nine groups, in group order.
const GROUP_LABELS: [&str; 9] = [
    "\u{f0ac}", // globe
    "\u{f1cb}",
    "\u{f1fb}",
    "\u{f0c3}", // flask
    "\u{f03e}", // picture
    "\u{f03d}", // video
    "\u{f109}", // laptop
    "\u{f07c}", // open folder
    "\u{f2c6}",
];

/// The nine groups with their glyph labels.
pub fn default_groups() -> Vec<Group> {
    GROUP_LABELS
        .iter()
        .enumerate()
        .map(|(i, label)| Group::new((i + 1).to_string(), *label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn nine_groups_keyed_one_to_nine() {
        let groups = default_groups();
        assert_eq!(groups.len(), 9);
        for (i, group) in groups.iter().enumerate() {
            assert_eq!(group.name, (i + 1).to_string());
        }
    }

    #[test]
    fn every_group_has_a_label() {
        for group in default_groups() {
            assert!(!group.label.is_empty());
        }
    }

    #[test]
    fn each_group_has_its_own_glyph() {
        let groups = default_groups();
        let labels: HashSet<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels.len(), groups.len());
        assert_eq!(groups[0].label, "\u{f0ac}");
        assert_eq!(groups[8].label, "\u{f2c6}");
    }
}
