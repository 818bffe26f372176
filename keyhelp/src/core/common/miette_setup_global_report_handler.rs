// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Configure how miette renders a [`miette::Report`] when `main() -> miette::Result<_>`
//! errors out.
//!
//! - The global default implementation of the [`miette::ReportHandler`] trait is
//!   [`miette::MietteHandler`], configured via [`MietteHandlerOpts`].
//! - [`miette::set_hook`] registers the handler. The hook is lazy, it only runs when a
//!   report is actually displayed, so the terminal width is measured at that time.

use miette::MietteHandlerOpts;
use tracing::debug;

/// Fallback width when the terminal size can't be queried (eg: output is piped).
pub const DEFAULT_REPORT_WIDTH: u16 = 80;

/// The [`miette::ErrorHook`] is lazily evaluated.
///
/// The terminal width will be calculated just at the time of the global error handler
/// being used. So if an error never occurs, then the terminal width will never be
/// calculated.
pub fn setup_default_miette_global_report_handler(footer: &'static str) {
    miette::set_hook(Box::new(move |_report| {
        let terminal_width = {
            let it = crossterm::terminal::size()
                .map_or(DEFAULT_REPORT_WIDTH, |(columns, _rows)| columns);
            debug!("miette::set_hook -> terminal_width: {it}");
            usize::from(it)
        };
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .unicode(true)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .with_cause_chain()
                .footer(footer.to_string())
                .build(),
        )
    }))
    .ok();
}
