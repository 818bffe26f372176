// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Private modules (hide internal structure).
mod input_device;
mod modifier_keys_mask;
mod output_device;
mod raw_mode;
mod terminal_io_type_aliases;

// Re-exports for flat public API.
pub use input_device::*;
pub use modifier_keys_mask::*;
pub use output_device::*;
pub use raw_mode::*;
pub use terminal_io_type_aliases::*;
