// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Logging is built on [`tracing`]. It is **disabled** by default, call
//! [`try_initialize_logging_global()`] (apps) or [`try_initialize_logging_thread_local()`]
//! (tests) with a [`TracingConfig`] whose level is not [`tracing_core::LevelFilter::OFF`]
//! to turn it on.

// Attach sources.
pub mod log_public_api;
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use log_public_api::*;
pub use rolling_file_appender_impl::*;
pub use tracing_config::*;
pub use tracing_init::*;
