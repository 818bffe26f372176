// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use keyhelp::{CommonResult, DEFAULT_LOG_FILE_NAME, InputDevice, OutputDevice,
              setup_default_miette_global_report_handler, throws,
              try_initialize_logging_global};
use keyhelp_cmdr::{CLIArg, MIETTE_FOOTER, try_run_command};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> CommonResult<()> {
    throws!({
        setup_default_miette_global_report_handler(MIETTE_FOOTER);

        // If no args are passed, the following line will fail, and help will be printed
        // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
        let cli_arg = CLIArg::parse();

        let enable_logging = cli_arg.global_options.enable_logging;
        enable_logging.then(|| {
            try_initialize_logging_global(tracing_core::LevelFilter::DEBUG).ok();
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "Start logging...",
                log_file = DEFAULT_LOG_FILE_NAME,
                cli_arg = ?cli_arg
            );
        });

        let mut input_device = InputDevice::new_crossterm_event_source();
        let output_device = OutputDevice::new_stdout();

        try_run_command(&cli_arg.command, &mut input_device, &output_device)
            .inspect_err(|error| {
                // % is Display, ? is Debug.
                tracing::error!(
                    message = "Could not run keyhelp due to the following problem",
                    error = ?error
                );
            })?;

        enable_logging.then(|| {
            tracing::debug!(message = "Stop logging...");
        });
    })
}
