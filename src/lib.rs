//! **tilerc** — a personal tiling window manager configuration.
//!
//! This crate holds no window-management logic of its own: layouts,
//! rendering, input grabbing, and process spawning all belong to the WM
//! runtime.  What lives here is the *data* — key bindings, workspace
//! groups, layout themes, status-bar widgets — plus the one real
//! transformation: [`theme::load`], which turns the 16-slot palette at
//! `~/.theming/colors.json` into the eight [`theme::ColorPair`]s the rest
//! of the configuration is painted with.
//!
//! # Architecture
//!
//! Evaluation is a single explicit pipeline with no global state:
//!
//! 1. [`theme::load`] reads the palette and derives a [`theme::ColorScheme`].
//! 2. [`config::Config::new`] assembles every declarative section from it.
//! 3. The binary serializes the result to stdout for the runtime.
//!
//! A palette error aborts the whole evaluation — there is no fallback
//! theme, by intent.

pub mod action;
pub mod bar;
pub mod config;
pub mod group;
pub mod keys;
pub mod layout;
pub mod theme;
