// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CommonResult, OutputDevice};

/// The keyboard help banner. Leading and trailing spaces are part of each line.
pub const KEYBOARD_HELP_LINES: [&str; 4] = [
    " --- Ajuda / Teclas: ",
    " [H] mostra está ajuda. ",
    " [Escape] sair. ",
    " [Barra de Espaço] imprimir Grafo de Cena. ",
];

/// Write the four [`KEYBOARD_HELP_LINES`] to `output_device`, one per line.
///
/// # Errors
///
/// Returns [`crate::KeyHelpError::TerminalIoUnavailable`] if a write fails.
pub fn print_keyboard_help(output_device: &OutputDevice) -> CommonResult<()> {
    for line in KEYBOARD_HELP_LINES {
        output_device.write_line(line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{KeyHelpError, OutputDeviceExt, StdMutex, assert_eq2};

    /// Every write fails, like stdout after the reading end of a pipe is closed.
    struct BrokenPipeWriter;

    impl std::io::Write for BrokenPipeWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }
    }

    #[test]
    fn test_prints_exactly_four_literal_lines() {
        let (output_device, stdout_mock) = OutputDevice::new_mock();

        print_keyboard_help(&output_device).unwrap();

        let output = stdout_mock.get_copy_of_buffer_as_string();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq2!(lines, KEYBOARD_HELP_LINES.to_vec());
        assert_eq2!(
            output,
            " --- Ajuda / Teclas: \n [H] mostra está ajuda. \n [Escape] sair. \n [Barra de \
             Espaço] imprimir Grafo de Cena. \n"
        );
    }

    #[test]
    fn test_output_has_no_ansi_escapes() {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        print_keyboard_help(&output_device).unwrap();
        assert_eq2!(
            stdout_mock.get_copy_of_buffer_as_string(),
            stdout_mock.get_copy_of_buffer_as_string_strip_ansi()
        );
    }

    #[test]
    fn test_write_failure_is_terminal_io_error() {
        let output_device = OutputDevice {
            resource: Arc::new(StdMutex::new(BrokenPipeWriter)),
            is_mock: true,
        };

        let error = print_keyboard_help(&output_device).unwrap_err();

        let Some(KeyHelpError::TerminalIoUnavailable { source }) =
            error.downcast_ref::<KeyHelpError>()
        else {
            panic!("Expected TerminalIoUnavailable");
        };
        assert_eq2!(source.kind(), std::io::ErrorKind::BrokenPipe);
    }
}
