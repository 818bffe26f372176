// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
mod input_device_ext_mock;

// Re-export.
pub use input_device_ext_mock::*;
