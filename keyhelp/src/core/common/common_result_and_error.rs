// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

/// Type alias to make it easy to work with:
/// 1. [`core::result::Result`]
/// 2. [`miette::Result`] and [`miette::Report`], which are [`std::error::Error`]
///    wrappers.
///
/// - It is basically `miette::Result<T, miette::Report>`.
/// - Works hand in hand w/ [`KeyHelpError`] and any other type of error.
///
/// # Example
///
/// ```
/// use keyhelp::{CommonResult, KeyHelpError};
///
/// fn check_code_point(code_point: u32) -> CommonResult<char> {
///     char::from_u32(code_point)
///         .ok_or_else(|| KeyHelpError::CharOutOfRange { code_point }.into())
/// }
///
/// assert!(check_code_point(0x41).is_ok());
/// assert!(check_code_point(0xD800).is_err());
/// ```
pub type CommonResult<T> = miette::Result<T>;

/// Errors produced by this crate.
///
/// | Variant                   | Cause                                                 |
/// | :------------------------ | :---------------------------------------------------- |
/// | [`TerminalIoUnavailable`] | Any failure to read from or write to the terminal     |
/// | [`CharOutOfRange`]        | A character has no successor that is a valid `char`   |
///
/// All terminal I/O failures (no TTY attached, interrupted read, raw mode could not be
/// enabled, input source exhausted, output write failed) collapse into the single
/// [`TerminalIoUnavailable`] kind. The original [`std::io::Error`] is kept as the
/// source so the full chain still shows up in the miette report.
///
/// [`TerminalIoUnavailable`]: Self::TerminalIoUnavailable
/// [`CharOutOfRange`]: Self::CharOutOfRange
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum KeyHelpError {
    #[error("⌨️ Terminal I/O is unavailable")]
    #[diagnostic(
        code(keyhelp::terminal_io_unavailable),
        help("Run this from an interactive terminal (stdin and stdout attached to a TTY).")
    )]
    TerminalIoUnavailable {
        #[source]
        source: std::io::Error,
    },

    #[error("🔢 Code point {code_point:#X} has no successor character")]
    #[diagnostic(
        code(keyhelp::char_out_of_range),
        help(
            "The successor is either past char::MAX or inside the surrogate range \
             (U+D800..=U+DFFF), neither of which is a valid char."
        )
    )]
    CharOutOfRange { code_point: u32 },
}

impl KeyHelpError {
    /// Wrap any [`std::io::Error`] into the terminal I/O error kind.
    #[must_use]
    pub fn terminal_io(source: std::io::Error) -> Self {
        Self::TerminalIoUnavailable { source }
    }

    /// Returned by an input source that has no more events to give.
    #[must_use]
    pub fn input_exhausted() -> Self {
        Self::terminal_io(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "Failed to get next event from input source.",
        ))
    }
}

impl From<std::io::Error> for KeyHelpError {
    fn from(source: std::io::Error) -> Self { Self::terminal_io(source) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts_to_terminal_io_unavailable() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "no tty");
        let error: KeyHelpError = io_error.into();
        assert!(matches!(error, KeyHelpError::TerminalIoUnavailable { .. }));
    }

    #[test]
    fn test_input_exhausted_is_unexpected_eof() {
        let KeyHelpError::TerminalIoUnavailable { source } =
            KeyHelpError::input_exhausted()
        else {
            panic!("Expected TerminalIoUnavailable");
        };
        assert_eq!(source.kind(), std::io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_report_keeps_diagnostic_code() {
        let report: miette::Report = KeyHelpError::CharOutOfRange {
            code_point: 0x10_FFFF,
        }
        .into();
        let code = report.code().map(|it| it.to_string());
        assert_eq!(code.as_deref(), Some("keyhelp::char_out_of_range"));
        assert!(report.to_string().contains("0x10FFFF"));
    }
}
