// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # keyhelp
//!
//! Small console helpers for terminal apps that are driven one key press at a time.
//!
//! - [`advance_char()`] returns the character whose code point is one greater than the
//!   given one.
//! - [`read_key_upper()`] prints a prompt, blocks until a single key is pressed (without
//!   echoing it), and returns a [`KeyReading`]: the uppercased first character of the
//!   key's symbolic name ([`ConsoleKeyName`]) and the [`ModifierFlags`] that were held.
//! - [`print_keyboard_help()`] prints the fixed four line keyboard help banner.
//!
//! # Reading a key
//!
//! ```no_run
//! use keyhelp::{InputDevice, OutputDevice, read_key_upper};
//!
//! # fn run() -> miette::Result<()> {
//! let mut input_device = InputDevice::new_crossterm_event_source();
//! let output_device = OutputDevice::new_stdout();
//! let reading = read_key_upper("Press a key", &mut input_device, &output_device)?;
//! if reading.modifiers.control {
//!     println!("Ctrl + {}", reading.key);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Modifier policy
//!
//! Control wins over Shift. If the key press carries Control, only
//! [`ModifierFlags::control`] is set, even when Shift is held as well. Shift is only
//! reported when Control is absent. See [`ModifierFlags::from_exclusive()`].
//!
//! # Testing
//!
//! Everything that touches the terminal goes through [`InputDevice`] and
//! [`OutputDevice`]. The [`test_fixtures`] module provides mock versions of both, so
//! key capture can be exercised without a TTY:
//!
//! ```
//! use crossterm::event::{Event, KeyCode, KeyModifiers};
//! use keyhelp::{InputDevice, InputDeviceExtMock, OutputDevice, OutputDeviceExt,
//!               crossterm_keyevent, read_key_upper};
//! use smallvec::smallvec;
//!
//! let mut input_device = InputDevice::new_mock(smallvec![Ok(Event::Key(
//!     crossterm_keyevent!(code: KeyCode::Char('a'), modifiers: KeyModifiers::NONE)
//! ))]);
//! let (output_device, stdout_mock) = OutputDevice::new_mock();
//! let reading = read_key_upper("Key?", &mut input_device, &output_device).unwrap();
//! assert_eq!(reading.key, 'A');
//! assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "Key?\n");
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod core;
pub mod keys;

// Re-export stable public API for a flat API surface.
pub use crate::core::*;
pub use keys::*;
