// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod char_advance;
pub mod console_key_name;
pub mod help_banner;
pub mod key_capture;
pub mod key_reading;

// Re-export.
pub use char_advance::*;
pub use console_key_name::*;
pub use help_banner::*;
pub use key_capture::*;
pub use key_reading::*;
