//! Keymap data for a 7×5 handheld keyboard matrix.
//!
//! This crate holds only the mapping: per-cell USB HID usage IDs,
//! modifier masks and printed legends, in a flat (base) layer and a
//! symbol layer. Scanning the matrix, choosing the active layer and
//! composing HID reports are the firmware's job; it resolves a scanned
//! `(row, col)` through [`layout::LAYOUT`] and gets back a
//! [`keymap::KeyDefinition`].
#![cfg_attr(not(test), no_std)]

pub mod hid;
pub mod keymap;
pub mod layout;
