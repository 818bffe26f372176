// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use super::{TracingConfig, try_create_layers};
use crate::ok;

/// Global default subscriber, which once set, can't be unset or changed.
/// - This is great for apps.
/// - Docs for [Global default tracing
///   subscriber](https://docs.rs/tracing/latest/tracing/subscriber/fn.set_global_default.html)
///
/// Logging is **DISABLED** by **default**.
///
/// If you don't call this function w/ a value other than
/// [`tracing_core::LevelFilter::OFF`], then logging won't be enabled. It won't matter if
/// you use the [`tracing::info!`], [`tracing::debug!`], etc. macros.
///
/// # Errors
///
/// Returns an error if the layers can't be created or if a global subscriber has already
/// been installed.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF) {
        return ok!();
    }

    let layers = try_create_layers(&it)?;
    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .into_diagnostic()
}

/// Thread local subscriber, which is thread local, and you can assign different ones
/// to different threads.
/// - This is great for tests.
/// - Docs for [Thread local tracing
///   subscriber](https://docs.rs/tracing/latest/tracing/subscriber/fn.set_default.html)
///
/// Logging stays installed for as long as the returned guard is alive. `None` is
/// returned when the level filter is [`tracing_core::LevelFilter::OFF`].
///
/// # Errors
///
/// Returns an error if the layers can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF) {
        return Ok(None);
    }

    let layers = try_create_layers(&it)?;
    let subscriber = tracing_subscriber::registry().with(layers);
    Ok(Some(tracing::subscriber::set_default(subscriber)))
}

#[cfg(test)]
mod tests {
    use serial_test::serial;
    use tracing_core::LevelFilter;

    use super::*;
    use crate::{TracingConfig, WriterConfig, try_create_temp_dir};

    #[test]
    fn test_off_level_installs_nothing() {
        let maybe_guard =
            try_initialize_logging_thread_local(TracingConfig::default()).unwrap();
        assert!(maybe_guard.is_none());

        // Also a no-op for the global subscriber, so it can be called safely in tests.
        try_initialize_logging_global(LevelFilter::OFF).unwrap();
    }

    #[test]
    #[serial]
    fn test_thread_local_file_logging() {
        let dir = try_create_temp_dir().unwrap();
        let file_path = dir.join("thread_local.log");
        let file_path_str = file_path.to_str().unwrap().to_string();

        let guard = try_initialize_logging_thread_local(TracingConfig {
            writer_config: WriterConfig::File(file_path_str),
            level_filter: LevelFilter::DEBUG,
        })
        .unwrap();
        assert!(guard.is_some());

        tracing::debug!(message = "captured key", key = "A");
        tracing::trace!(message = "below the level filter");
        drop(guard);

        let contents = std::fs::read_to_string(&file_path).unwrap();
        assert!(contents.contains("captured key"));
        assert!(!contents.contains("below the level filter"));
    }
}
