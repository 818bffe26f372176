// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use keyhelp::{CommonResult, ConsoleKeyName, InputDevice, OutputDevice, advance_char,
              ok, print_keyboard_help, read_key_upper};

use crate::kh::{CLICommand, REPL_PROMPT, format_reading, goodbye_message,
                next_char_message, no_scene_graph_message};

/// Run the given command against the given devices. The binary passes the real terminal,
/// tests pass mocks.
///
/// # Errors
///
/// Returns the error of the underlying [`keyhelp`] operation.
pub fn try_run_command(
    command: &CLICommand,
    input_device: &mut InputDevice,
    output_device: &OutputDevice,
) -> CommonResult<()> {
    match command {
        CLICommand::Read { prompt, json } => {
            let reading = read_key_upper(prompt, input_device, output_device)?;
            output_device.write_line(&format_reading(&reading, *json)?)?;
        }
        CLICommand::Banner => print_keyboard_help(output_device)?,
        CLICommand::Next { character } => {
            let next = advance_char(*character)?;
            output_device.write_line(&next_char_message(*character, next))?;
        }
        CLICommand::Repl => run_repl(input_device, output_device)?,
    }
    ok!()
}

/// Print the help banner, then read keys until Escape or `Ctrl + C` is pressed.
///
/// | Key        | Action                                  |
/// | :--------- | :-------------------------------------- |
/// | `Ctrl + C` | quit                                    |
/// | `H`        | print the help banner again             |
/// | `Escape`   | quit                                    |
/// | `Spacebar` | report that there is no scene graph     |
/// | any other  | print the reading                       |
///
/// # Errors
///
/// Returns an error if the terminal can't be read from or written to.
pub fn run_repl(
    input_device: &mut InputDevice,
    output_device: &OutputDevice,
) -> CommonResult<()> {
    print_keyboard_help(output_device)?;

    loop {
        let reading = read_key_upper(REPL_PROMPT, input_device, output_device)?;
        match (reading.key_name, reading.modifiers.control) {
            // Raw mode swallows SIGINT, so Ctrl + C arrives here as a key press.
            (ConsoleKeyName::C, true) | (ConsoleKeyName::Escape, _) => {
                output_device.write_line(goodbye_message())?;
                break;
            }
            (ConsoleKeyName::H, _) => print_keyboard_help(output_device)?,
            (ConsoleKeyName::Spacebar, _) => {
                output_device.write_line(no_scene_graph_message())?;
            }
            _ => output_device.write_line(&format_reading(&reading, false)?)?,
        }
    }

    ok!()
}
