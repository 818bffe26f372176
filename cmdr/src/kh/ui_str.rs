// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use keyhelp::{CommonResult, KeyReading};
use miette::IntoDiagnostic;

pub const DEFAULT_PROMPT: &str = "Press a key...";

pub const REPL_PROMPT: &str = "Press a key ([H] help, [Escape] quit):";

pub const MIETTE_FOOTER: &str = "Run `keyhelp --help` for usage.";

pub fn no_scene_graph_message() -> &'static str {
    "There is no scene graph attached to print."
}

pub fn goodbye_message() -> &'static str { "Goodbye! 👋" }

/// Human readable, eg: `A (Shift+A)`. Or one line of JSON when `json` is `true`.
///
/// # Errors
///
/// Returns an error if the reading can't be serialized to JSON.
pub fn format_reading(reading: &KeyReading, json: bool) -> CommonResult<String> {
    if json {
        serde_json::to_string(reading).into_diagnostic()
    } else {
        Ok(reading.to_string())
    }
}

/// Eg: `U+0061 a -> U+0062 b`.
pub fn next_char_message(current: char, next: char) -> String {
    format!(
        "U+{current_code:04X} {current} -> U+{next_code:04X} {next}",
        current_code = u32::from(current),
        next_code = u32::from(next)
    )
}

#[cfg(test)]
mod tests {
    use keyhelp::{ConsoleKeyName, ModifierFlags};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_format_reading_text_and_json() {
        let reading = KeyReading::new(
            ConsoleKeyName::D7,
            ModifierFlags {
                control: false,
                shift: true,
            },
        );
        assert_eq!(format_reading(&reading, false).unwrap(), "D (Shift+D7)");
        assert_eq!(
            format_reading(&reading, true).unwrap(),
            r#"{"key":"D","key_name":"D7","modifiers":{"control":false,"shift":true}}"#
        );
    }

    #[test]
    fn test_next_char_message() {
        assert_eq!(next_char_message('a', 'b'), "U+0061 a -> U+0062 b");
        assert_eq!(
            next_char_message('\u{1F600}', '\u{1F601}'),
            "U+1F600 \u{1F600} -> U+1F601 \u{1F601}"
        );
    }
}
