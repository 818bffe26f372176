// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CommonResult, KeyHelpError};

/// Returns the character whose code point is one greater than `current`.
///
/// ```
/// use keyhelp::advance_char;
///
/// assert_eq!(advance_char('a').unwrap(), 'b');
/// assert_eq!(advance_char('9').unwrap(), ':');
/// assert!(advance_char(char::MAX).is_err());
/// ```
///
/// There is no wraparound. When `current + 1` is not a valid [`char`] an error is
/// returned instead. That happens in exactly two places:
/// - `current == char::MAX` (`U+10FFFF`).
/// - `current == '\u{D7FF}'`, since `U+D800` starts the surrogate range.
///
/// # Errors
///
/// Returns [`KeyHelpError::CharOutOfRange`] when there is no successor.
pub fn advance_char(current: char) -> CommonResult<char> {
    let code_point = u32::from(current);
    code_point
        .checked_add(1)
        .and_then(char::from_u32)
        .ok_or_else(|| KeyHelpError::CharOutOfRange { code_point }.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_advance_ascii() {
        assert_eq2!(advance_char('A').unwrap(), 'B');
        assert_eq2!(advance_char('z').unwrap(), '{');
        assert_eq2!(advance_char('\0').unwrap(), '\u{1}');
        assert_eq2!(advance_char('\u{7F}').unwrap(), '\u{80}');
    }

    #[test]
    fn test_advance_is_plus_one_for_every_valid_successor() {
        let sample = (0..=0x2_0000_u32)
            .step_by(97)
            .chain([0xD7FE, 0xE000, 0xFFFF, 0x10_FFFE])
            .filter_map(char::from_u32);

        for current in sample {
            match char::from_u32(u32::from(current) + 1) {
                Some(expected) => assert_eq2!(advance_char(current).unwrap(), expected),
                None => assert!(advance_char(current).is_err()),
            }
        }
    }

    #[test]
    fn test_advance_crosses_bmp_boundary() {
        assert_eq2!(advance_char('\u{FFFF}').unwrap(), '\u{10000}');
    }

    #[test]
    fn test_no_successor_is_an_error() {
        for current in [char::MAX, '\u{D7FF}'] {
            let error = advance_char(current).unwrap_err();
            let Some(KeyHelpError::CharOutOfRange { code_point }) =
                error.downcast_ref::<KeyHelpError>()
            else {
                panic!("Expected CharOutOfRange for {current:?}");
            };
            assert_eq2!(*code_point, u32::from(current));
        }
    }
}
