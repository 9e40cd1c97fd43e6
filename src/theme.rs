//! Color scheme loading.
//!
//! The palette lives in a JSON file shared with terminal emulators and other
//! theming consumers (`~/.theming/colors.json` by convention):
//!
//! ```json
//! {
//!   "colors": {
//!     "color0": "#1a1b26",
//!     "color1": "#f7768e",
//!     "color15": "#c0caf5"
//!   }
//! }
//! ```
//!
//! Slots follow the terminal convention of 8 base colors plus 8 bright
//! variants: `colorN` and `colorN+8` are the same hue at two intensities.
//! [`load`] folds the 16 slots into eight [`ColorPair`]s — the shape the
//! rest of the configuration consumes.
//!
//! There is deliberately no fallback palette.  A missing or malformed file
//! aborts evaluation: starting the window manager with a half-initialized
//! theme is far harder to diagnose than a clean failure.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Index;
use std::path::{Path, PathBuf};

/// Number of slots (`color0`..`color15`) a palette file must provide.
pub const PALETTE_SLOTS: usize = 16;

/// Number of (base, bright) pairs derived from a palette.
pub const SCHEME_PAIRS: usize = 8;

/// The raw 16-slot palette as read from disk, before pairing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    slots: [String; PALETTE_SLOTS],
}

impl Palette {
    /// Extract slots `color0`..`color15` from a decoded `colors` mapping.
    ///
    /// Every slot is required; keys beyond the 16 (e.g. `color16`, cursor
    /// or background entries some generators add) are ignored.
    fn from_colors(colors: &BTreeMap<String, String>) -> Result<Self, ThemeError> {
        let mut slots: [String; PALETTE_SLOTS] = std::array::from_fn(|_| String::new());
        for (i, slot) in slots.iter_mut().enumerate() {
            let key = format!("color{i}");
            *slot = colors
                .get(&key)
                .cloned()
                .ok_or_else(|| ThemeError::MissingKey { key })?;
        }
        Ok(Self { slots })
    }

    /// Color value at slot `i` (0..15).
    pub fn slot(&self, i: usize) -> &str {
        &self.slots[i]
    }
}

/// A palette slot at two intensities: the base color and its bright variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorPair {
    pub base: String,
    pub bright: String,
}

/// The ordered scheme derived from a palette: exactly [`SCHEME_PAIRS`]
/// pairs, in ascending base-slot order, immutable once built.
///
/// Pair `i` combines palette slots `i` and `i + 8`.  The bright half is
/// never exposed on its own; consumers index the scheme and pick
/// [`base`](ColorPair::base) or [`bright`](ColorPair::bright) per use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ColorScheme {
    pairs: [ColorPair; SCHEME_PAIRS],
}

impl ColorScheme {
    /// Build a scheme directly from eight pairs.
    pub fn from_pairs(pairs: [ColorPair; SCHEME_PAIRS]) -> Self {
        Self { pairs }
    }

    fn from_palette(palette: &Palette) -> Self {
        let pairs = std::array::from_fn(|i| ColorPair {
            base: palette.slot(i).to_string(),
            bright: palette.slot(i + SCHEME_PAIRS).to_string(),
        });
        Self { pairs }
    }

    /// All eight pairs in order.
    pub fn pairs(&self) -> &[ColorPair] {
        &self.pairs
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColorPair> {
        self.pairs.iter()
    }
}

impl Index<usize> for ColorScheme {
    type Output = ColorPair;

    fn index(&self, i: usize) -> &ColorPair {
        &self.pairs[i]
    }
}

/// On-disk document shape.  Top-level keys other than `colors` are ignored
/// so palette generators can attach extra sections.
#[derive(Debug, Deserialize)]
struct PaletteFile {
    colors: BTreeMap<String, String>,
}

/// Error from loading a palette file.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// The file does not exist or could not be read.
    #[error("palette file {} is not readable: {source}", .path.display())]
    NotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not valid JSON, or lacks the top-level `colors` object.
    #[error("palette file {} is not a valid palette: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A required `colorN` slot is absent from the `colors` object.
    #[error("palette is missing slot `{key}`")]
    MissingKey { key: String },
}

/// Read the palette at `path` and derive its color scheme.
///
/// Performs exactly one file read and retains no handle.  The result is a
/// pure function of slots `color0`..`color15`; extra keys have no effect.
/// Any absent slot fails the whole load — no partial scheme is returned.
pub fn load(path: &Path) -> Result<ColorScheme, ThemeError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ThemeError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let file: PaletteFile =
        serde_json::from_str(&contents).map_err(|source| ThemeError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    let palette = Palette::from_colors(&file.colors)?;
    Ok(ColorScheme::from_palette(&palette))
}

/// Conventional palette location: `~/.theming/colors.json`.
pub fn default_palette_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
    PathBuf::from(home).join(".theming").join("colors.json")
}
