// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

use crate::{CommonResult, ConsoleKeyName, InputDevice, KeyReading, ModifierFlags,
            ModifierKeysMask, OutputDevice, RawModeGuard, implies_shift};

/// Print `prompt` on its own line, then block until one key is pressed and return it.
///
/// The key is not echoed. When `input_device` is the real terminal, raw mode is enabled
/// for the duration of the read and restored before this function returns, on every
/// path. Events that aren't key presses, and key presses that have no
/// [`ConsoleKeyName`] (eg: `CapsLock` or a bare `Shift`), are skipped. See
/// [`interpret_key_event()`] for how the [`KeyReading`] is built.
///
/// # Errors
///
/// Returns [`crate::KeyHelpError::TerminalIoUnavailable`] when the prompt can't be
/// written, raw mode can't be enabled, or the input device fails or runs out of
/// events.
///
/// # Example
///
/// ```
/// use crossterm::event::{Event, KeyCode, KeyModifiers};
/// use keyhelp::{crossterm_keyevent, read_key_upper, InputDevice, InputDeviceExtMock,
///               OutputDevice, OutputDeviceExt};
/// use smallvec::smallvec;
///
/// let mut input_device = InputDevice::new_mock(smallvec![Ok(Event::Key(
///     crossterm_keyevent!(code: KeyCode::Char('1'), modifiers: KeyModifiers::NONE)
/// ))]);
/// let (output_device, _stdout_mock) = OutputDevice::new_mock();
///
/// let reading = read_key_upper("Press a key", &mut input_device, &output_device).unwrap();
/// assert_eq!(reading.key, 'D');
/// assert_eq!(reading.key_name.to_string(), "D1");
/// ```
pub fn read_key_upper(
    prompt: &str,
    input_device: &mut InputDevice,
    output_device: &OutputDevice,
) -> CommonResult<KeyReading> {
    // The prompt goes out before raw mode, so that its newline is rendered normally.
    output_device.write_line(prompt)?;

    let _raw_mode_guard = if input_device.is_mock {
        None
    } else {
        Some(RawModeGuard::new()?)
    };

    loop {
        match input_device.next()? {
            Event::Key(key_event) => match interpret_key_event(key_event) {
                Some(key_reading) => {
                    tracing::debug!(
                        message = "Key captured",
                        key_reading = %key_reading,
                        ?key_event
                    );
                    return Ok(key_reading);
                }
                None => {
                    tracing::trace!(message = "Skipping key event", ?key_event);
                }
            },
            other_event => {
                tracing::trace!(message = "Skipping non key event", ?other_event);
            }
        }
    }
}

/// Convert a crossterm [`KeyEvent`] into a [`KeyReading`].
///
/// - Only [`KeyEventKind::Press`] counts. Release and repeat events give `None`.
/// - Keys that have no [`ConsoleKeyName`] give `None`.
/// - Characters that need Shift to be typed (see [`implies_shift()`]) count as Shift
///   being held, since terminals rarely report it for them.
/// - The modifiers are collapsed with [`ModifierFlags::from_exclusive()`].
#[must_use]
pub fn interpret_key_event(key_event: KeyEvent) -> Option<KeyReading> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    let key_name = ConsoleKeyName::try_from_key_code(key_event.code)?;
    let mask = ModifierKeysMask::from(key_event.modifiers);
    let mask = match key_event.code {
        KeyCode::Char(character) if implies_shift(character) => mask.with_shift(),
        _ => mask,
    };
    Some(KeyReading::new(key_name, ModifierFlags::from_exclusive(mask)))
}
