// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{ConsoleKeyName, ModifierKeysMask};

/// The two modifiers that a key capture reports. At most one of them is ever `true`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModifierFlags {
    pub control: bool,
    pub shift: bool,
}

impl ModifierFlags {
    /// Collapse a full [`ModifierKeysMask`] into [`ModifierFlags`]. Control is checked
    /// first. Shift is only reported when Control is not held, so `Ctrl + Shift` reports
    /// `control = true, shift = false`. Alt is ignored.
    ///
    /// ```
    /// use keyhelp::{ModifierFlags, ModifierKeysMask};
    ///
    /// let flags = ModifierFlags::from_exclusive(ModifierKeysMask::new().with_ctrl().with_shift());
    /// assert!(flags.control);
    /// assert!(!flags.shift);
    /// ```
    #[must_use]
    pub fn from_exclusive(mask: ModifierKeysMask) -> Self {
        if mask.is_ctrl_pressed() {
            ModifierFlags {
                control: true,
                shift: false,
            }
        } else if mask.is_shift_pressed() {
            ModifierFlags {
                control: false,
                shift: true,
            }
        } else {
            ModifierFlags::default()
        }
    }
}

/// The result of capturing one key press.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyReading {
    /// First character of [`Self::key_name`], uppercased.
    pub key: char,
    pub key_name: ConsoleKeyName,
    pub modifiers: ModifierFlags,
}

impl KeyReading {
    #[must_use]
    pub fn new(key_name: ConsoleKeyName, modifiers: ModifierFlags) -> Self {
        KeyReading {
            key: key_name.upper_initial(),
            key_name,
            modifiers,
        }
    }
}

impl Display for KeyReading {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.modifiers {
            ModifierFlags { control: true, .. } => "Ctrl+",
            ModifierFlags { shift: true, .. } => "Shift+",
            _ => "",
        };
        write!(f, "{key} ({prefix}{name})", key = self.key, name = self.key_name)
    }
}
