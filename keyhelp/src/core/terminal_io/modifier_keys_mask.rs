// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::KeyModifiers;
use serde::{Deserialize, Serialize};

/// The full state of the Shift, Control and Alt keys at the time of a key press, decoded
/// from crossterm's [`KeyModifiers`] bitmask. Other bits (super, hyper, meta) are
/// ignored.
///
/// This is a faithful decode: every modifier that was held shows up as
/// [`KeyState::Pressed`]. Policies that collapse modifiers (like the Control over Shift
/// rule in [`crate::ModifierFlags::from_exclusive()`]) are applied on top of it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModifierKeysMask {
    pub shift_key_state: KeyState,
    pub ctrl_key_state: KeyState,
    pub alt_key_state: KeyState,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyState {
    Pressed,
    #[default]
    NotPressed,
}

impl From<bool> for KeyState {
    fn from(is_pressed: bool) -> Self {
        if is_pressed {
            KeyState::Pressed
        } else {
            KeyState::NotPressed
        }
    }
}

impl ModifierKeysMask {
    #[must_use]
    pub fn new() -> Self {
        ModifierKeysMask {
            shift_key_state: KeyState::NotPressed,
            ctrl_key_state: KeyState::NotPressed,
            alt_key_state: KeyState::NotPressed,
        }
    }

    #[must_use]
    pub fn with_shift(mut self) -> Self {
        self.shift_key_state = KeyState::Pressed;
        self
    }

    #[must_use]
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl_key_state = KeyState::Pressed;
        self
    }

    #[must_use]
    pub fn with_alt(mut self) -> Self {
        self.alt_key_state = KeyState::Pressed;
        self
    }

    #[must_use]
    pub fn is_shift_pressed(&self) -> bool { self.shift_key_state == KeyState::Pressed }

    #[must_use]
    pub fn is_ctrl_pressed(&self) -> bool { self.ctrl_key_state == KeyState::Pressed }

    #[must_use]
    pub fn is_alt_pressed(&self) -> bool { self.alt_key_state == KeyState::Pressed }

    #[must_use]
    pub fn is_empty(&self) -> bool { *self == Self::new() }
}

impl From<KeyModifiers> for ModifierKeysMask {
    /// Difference in meaning between `intersects` and `contains`:
    /// - `intersects` -> means that the given bit shows up in your variable, but it might
    ///   contain other bits.
    /// - `contains` -> means that your variable ONLY contains these bits.
    /// - Docs: <https://docs.rs/bitflags/latest/bitflags/index.html>
    fn from(other: KeyModifiers) -> ModifierKeysMask {
        ModifierKeysMask {
            shift_key_state: other.intersects(KeyModifiers::SHIFT).into(),
            ctrl_key_state: other.intersects(KeyModifiers::CONTROL).into(),
            alt_key_state: other.intersects(KeyModifiers::ALT).into(),
        }
    }
}
