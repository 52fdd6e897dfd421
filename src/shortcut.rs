// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The `/` keyboard shortcut.
//!
//! Pressing `/` anywhere on the page focuses the search input, unless the
//! reader is already typing into a form control. Only the first search widget
//! on the page is focused, even when the theme renders several.

/// Key that focuses search.
pub const FOCUS_KEY: &str = "/";

/// What kind of element had focus when the key was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyTarget {
    Input,
    TextArea,
    Button,
    Select,
    Other,
}

impl KeyTarget {
    /// Controls that consume keystrokes themselves.
    pub fn is_form_control(self) -> bool {
        !matches!(self, KeyTarget::Other)
    }
}

/// A `keydown` event, reduced to what the shortcut cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub target: KeyTarget,
}

/// Whether this keypress should move focus to the search input.
pub fn should_focus_search(press: &KeyPress) -> bool {
    !press.target.is_form_control() && press.key == FOCUS_KEY && !press.ctrl && !press.meta
}
