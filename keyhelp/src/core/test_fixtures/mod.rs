// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fixtures that let terminal I/O be tested without a TTY. They are part of the public
//! API so integration tests and downstream crates can drive [`crate::read_key_upper()`]
//! and [`crate::print_keyboard_help()`] with mock devices.

// Attach.
pub mod input_device_fixtures;
pub mod key_event_fixtures;
pub mod output_device_fixtures;
pub mod temp_dir;

// Re-export.
pub use input_device_fixtures::*;
pub use output_device_fixtures::*;
pub use temp_dir::*;
