// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use crossterm::event::{KeyCode, MediaKeyCode};
use serde::{Deserialize, Serialize};
use strum_macros::AsRefStr;

/// The symbolic name of a physical key, as a console reports it. Its [`Display`] output
/// is the name, eg: `A`, `D1`, `Spacebar`, `Escape`, `UpArrow`, `F5`, `OemComma`.
///
/// Names describe the *key*, not the character it types. So the `1` key and `!`
/// (`Shift + 1` on a US layout) are both [`ConsoleKeyName::D1`], and `a` and `A` are both
/// [`ConsoleKeyName::A`]. Use [`ConsoleKeyName::try_from_key_code()`] to convert a
/// crossterm [`KeyCode`].
///
/// A terminal delivers shifted symbols like `!` as `Char('!')`, usually without
/// [`crossterm::event::KeyModifiers::SHIFT`]. [`implies_shift()`] tells which characters
/// can only be typed with Shift held, so that key capture can report it anyway. The full
/// naming table:
///
/// ```text
/// ╔════════════════════════════════╦════════════════════════════╗
/// ║ crossterm KeyCode              ║ ConsoleKeyName             ║
/// ╠════════════════════════════════╬════════════════════════════╣
/// ║ Char('a'..='z' | 'A'..='Z')    ║ A ..= Z                    ║
/// ║ Char('0'..='9')                ║ D0 ..= D9                  ║
/// ║ Char(')' '!' '@' ... '(')      ║ D0 ..= D9 (US layout)      ║
/// ║ Char(' ')                      ║ Spacebar                   ║
/// ║ Char(';' ':') .. Char('\'' '"')║ Oem1 ..= Oem7              ║
/// ║ Char(',' '<') Char('.' '>')    ║ OemComma, OemPeriod        ║
/// ║ Char('-' '_') Char('=' '+')    ║ OemMinus, OemPlus          ║
/// ║ any other Char(c)              ║ Other(c)                   ║
/// ║ Esc Enter Tab/BackTab Backspace║ Escape Enter Tab Backspace ║
/// ║ Left Right Up Down             ║ LeftArrow .. DownArrow     ║
/// ║ F(1..=24)                      ║ F1 ..= F24                 ║
/// ║ Menu KeypadBegin               ║ Applications Clear         ║
/// ║ Null CapsLock Modifier(_) ...  ║ no name                    ║
/// ╚════════════════════════════════╩════════════════════════════╝
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum ConsoleKeyName {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    D0,
    D1,
    D2,
    D3,
    D4,
    D5,
    D6,
    D7,
    D8,
    D9,
    Spacebar,
    Escape,
    Enter,
    Tab,
    Backspace,
    LeftArrow,
    RightArrow,
    UpArrow,
    DownArrow,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    Delete,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    F13,
    F14,
    F15,
    F16,
    F17,
    F18,
    F19,
    F20,
    F21,
    F22,
    F23,
    F24,
    PrintScreen,
    Pause,
    Applications,
    Clear,
    MediaPlay,
    MediaStop,
    MediaNext,
    MediaPrevious,
    VolumeUp,
    VolumeDown,
    VolumeMute,
    /// `;` and `:` on a US layout.
    Oem1,
    /// `/` and `?` on a US layout.
    Oem2,
    /// `` ` `` and `~` on a US layout.
    Oem3,
    /// `[` and `{` on a US layout.
    Oem4,
    /// `\` and `|` on a US layout.
    Oem5,
    /// `]` and `}` on a US layout.
    Oem6,
    /// `'` and `"` on a US layout.
    Oem7,
    OemComma,
    OemPeriod,
    OemMinus,
    OemPlus,
    /// A printable character that has no dedicated key name (eg: `é`, `ß`, `€`). Its
    /// name is the character itself.
    Other(char),
}

impl Display for ConsoleKeyName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConsoleKeyName::Other(character) => write!(f, "{character}"),
            named => f.write_str(named.as_ref()),
        }
    }
}

impl ConsoleKeyName {
    /// The first character of the symbolic name, uppercased. `D1` gives `'D'`,
    /// `Spacebar` gives `'S'`, `Other('é')` gives `'É'`.
    #[must_use]
    pub fn upper_initial(&self) -> char {
        match self {
            ConsoleKeyName::Other(character) => to_upper_char(*character),
            named => named
                .as_ref()
                .chars()
                .next()
                .map_or(char::REPLACEMENT_CHARACTER, to_upper_char),
        }
    }

    /// Returns `None` for keys that have no symbolic name: [`KeyCode::Null`], lock keys,
    /// bare modifier keys, and function or media keys outside the table above.
    #[must_use]
    pub fn try_from_key_code(key_code: KeyCode) -> Option<ConsoleKeyName> {
        // Make the code easier to read below using this alias.
        type KC = KeyCode;
        match key_code {
            KC::Char(character) => Some(from_char(character)),
            KC::Esc => Some(ConsoleKeyName::Escape),
            KC::Enter => Some(ConsoleKeyName::Enter),
            KC::Tab | KC::BackTab => Some(ConsoleKeyName::Tab),
            KC::Backspace => Some(ConsoleKeyName::Backspace),
            KC::Left => Some(ConsoleKeyName::LeftArrow),
            KC::Right => Some(ConsoleKeyName::RightArrow),
            KC::Up => Some(ConsoleKeyName::UpArrow),
            KC::Down => Some(ConsoleKeyName::DownArrow),
            KC::Home => Some(ConsoleKeyName::Home),
            KC::End => Some(ConsoleKeyName::End),
            KC::PageUp => Some(ConsoleKeyName::PageUp),
            KC::PageDown => Some(ConsoleKeyName::PageDown),
            KC::Insert => Some(ConsoleKeyName::Insert),
            KC::Delete => Some(ConsoleKeyName::Delete),
            KC::F(fn_key) => match_fn_key(fn_key),
            KC::PrintScreen => Some(ConsoleKeyName::PrintScreen),
            KC::Pause => Some(ConsoleKeyName::Pause),
            KC::Menu => Some(ConsoleKeyName::Applications),
            KC::KeypadBegin => Some(ConsoleKeyName::Clear),
            KC::Media(media_key) => match_media_key(media_key),
            KC::Null
            | KC::CapsLock
            | KC::ScrollLock
            | KC::NumLock
            | KC::Modifier(_) => None,
        }
    }
}

/// Returns `true` for characters that are typed with Shift held on a US layout: the
/// uppercase letters `A..=Z` and the shifted symbols, eg: `!` on the `1` key or `<` on
/// the `,` key.
///
/// ```
/// use keyhelp::implies_shift;
///
/// assert!(implies_shift('!'));
/// assert!(implies_shift('Q'));
/// assert!(!implies_shift('1'));
/// assert!(!implies_shift('q'));
/// assert!(!implies_shift('é'));
/// ```
#[must_use]
pub fn implies_shift(character: char) -> bool {
    character.is_ascii_uppercase() || SHIFTED_SYMBOLS.contains(character)
}

const SHIFTED_SYMBOLS: &str = r#")!@#$%^&*(:?~{|}"<>_+"#;

fn to_upper_char(character: char) -> char {
    character.to_uppercase().next().unwrap_or(character)
}

fn from_char(character: char) -> ConsoleKeyName {
    // Make the code easier to read below using this alias.
    use ConsoleKeyName as N;
    match character {
        'a' | 'A' => N::A,
        'b' | 'B' => N::B,
        'c' | 'C' => N::C,
        'd' | 'D' => N::D,
        'e' | 'E' => N::E,
        'f' | 'F' => N::F,
        'g' | 'G' => N::G,
        'h' | 'H' => N::H,
        'i' | 'I' => N::I,
        'j' | 'J' => N::J,
        'k' | 'K' => N::K,
        'l' | 'L' => N::L,
        'm' | 'M' => N::M,
        'n' | 'N' => N::N,
        'o' | 'O' => N::O,
        'p' | 'P' => N::P,
        'q' | 'Q' => N::Q,
        'r' | 'R' => N::R,
        's' | 'S' => N::S,
        't' | 'T' => N::T,
        'u' | 'U' => N::U,
        'v' | 'V' => N::V,
        'w' | 'W' => N::W,
        'x' | 'X' => N::X,
        'y' | 'Y' => N::Y,
        'z' | 'Z' => N::Z,
        // Digits and their shifted symbols on a US layout.
        '0' | ')' => N::D0,
        '1' | '!' => N::D1,
        '2' | '@' => N::D2,
        '3' | '#' => N::D3,
        '4' | '$' => N::D4,
        '5' | '%' => N::D5,
        '6' | '^' => N::D6,
        '7' | '&' => N::D7,
        '8' | '*' => N::D8,
        '9' | '(' => N::D9,
        ' ' => N::Spacebar,
        ';' | ':' => N::Oem1,
        '/' | '?' => N::Oem2,
        '`' | '~' => N::Oem3,
        '[' | '{' => N::Oem4,
        '\\' | '|' => N::Oem5,
        ']' | '}' => N::Oem6,
        '\'' | '"' => N::Oem7,
        ',' | '<' => N::OemComma,
        '.' | '>' => N::OemPeriod,
        '-' | '_' => N::OemMinus,
        '=' | '+' => N::OemPlus,
        other => N::Other(other),
    }
}

fn match_fn_key(fn_key: u8) -> Option<ConsoleKeyName> {
    // Make the code easier to read below using this alias.
    use ConsoleKeyName as N;
    match fn_key {
        1 => Some(N::F1),
        2 => Some(N::F2),
        3 => Some(N::F3),
        4 => Some(N::F4),
        5 => Some(N::F5),
        6 => Some(N::F6),
        7 => Some(N::F7),
        8 => Some(N::F8),
        9 => Some(N::F9),
        10 => Some(N::F10),
        11 => Some(N::F11),
        12 => Some(N::F12),
        13 => Some(N::F13),
        14 => Some(N::F14),
        15 => Some(N::F15),
        16 => Some(N::F16),
        17 => Some(N::F17),
        18 => Some(N::F18),
        19 => Some(N::F19),
        20 => Some(N::F20),
        21 => Some(N::F21),
        22 => Some(N::F22),
        23 => Some(N::F23),
        24 => Some(N::F24),
        _ => None,
    }
}

fn match_media_key(media_key: MediaKeyCode) -> Option<ConsoleKeyName> {
    // Make the code easier to read below using this alias.
    type KC = MediaKeyCode;
    match media_key {
        KC::Play | KC::Pause | KC::PlayPause => Some(ConsoleKeyName::MediaPlay),
        KC::Stop => Some(ConsoleKeyName::MediaStop),
        KC::TrackNext => Some(ConsoleKeyName::MediaNext),
        KC::TrackPrevious => Some(ConsoleKeyName::MediaPrevious),
        KC::RaiseVolume => Some(ConsoleKeyName::VolumeUp),
        KC::LowerVolume => Some(ConsoleKeyName::VolumeDown),
        KC::MuteVolume => Some(ConsoleKeyName::VolumeMute),
        KC::Reverse | KC::FastForward | KC::Rewind | KC::Record => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::ModifierKeyCode;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(KeyCode::Char('a'), "A", 'A')]
    #[test_case(KeyCode::Char('A'), "A", 'A')]
    #[test_case(KeyCode::Char('z'), "Z", 'Z')]
    #[test_case(KeyCode::Char('1'), "D1", 'D')]
    #[test_case(KeyCode::Char('0'), "D0", 'D')]
    #[test_case(KeyCode::Char('!'), "D1", 'D')]
    #[test_case(KeyCode::Char(' '), "Spacebar", 'S')]
    #[test_case(KeyCode::Char(','), "OemComma", 'O')]
    #[test_case(KeyCode::Char('?'), "Oem2", 'O')]
    #[test_case(KeyCode::Char('é'), "é", 'É')]
    #[test_case(KeyCode::Esc, "Escape", 'E')]
    #[test_case(KeyCode::Enter, "Enter", 'E')]
    #[test_case(KeyCode::Tab, "Tab", 'T')]
    #[test_case(KeyCode::BackTab, "Tab", 'T')]
    #[test_case(KeyCode::Backspace, "Backspace", 'B')]
    #[test_case(KeyCode::Up, "UpArrow", 'U')]
    #[test_case(KeyCode::Left, "LeftArrow", 'L')]
    #[test_case(KeyCode::PageDown, "PageDown", 'P')]
    #[test_case(KeyCode::Delete, "Delete", 'D')]
    #[test_case(KeyCode::F(5), "F5", 'F')]
    #[test_case(KeyCode::F(24), "F24", 'F')]
    #[test_case(KeyCode::Menu, "Applications", 'A')]
    #[test_case(KeyCode::KeypadBegin, "Clear", 'C')]
    #[test_case(KeyCode::Media(MediaKeyCode::RaiseVolume), "VolumeUp", 'V')]
    #[test_case(KeyCode::Media(MediaKeyCode::TrackNext), "MediaNext", 'M')]
    fn test_naming_table(key_code: KeyCode, expected_name: &str, expected_initial: char) {
        let name = ConsoleKeyName::try_from_key_code(key_code).unwrap();
        assert_eq2!(name.to_string(), expected_name);
        assert_eq2!(name.upper_initial(), expected_initial);
    }

    #[test_case(KeyCode::Null)]
    #[test_case(KeyCode::CapsLock)]
    #[test_case(KeyCode::NumLock)]
    #[test_case(KeyCode::ScrollLock)]
    #[test_case(KeyCode::F(0))]
    #[test_case(KeyCode::F(25))]
    #[test_case(KeyCode::Modifier(ModifierKeyCode::LeftShift))]
    #[test_case(KeyCode::Media(MediaKeyCode::Record))]
    fn test_keys_without_a_name(key_code: KeyCode) {
        assert_eq2!(ConsoleKeyName::try_from_key_code(key_code), None);
    }

    #[test]
    fn test_every_named_key_starts_with_an_uppercase_ascii_letter() {
        for name in ConsoleKeyName::iter().filter(|it| !matches!(it, ConsoleKeyName::Other(_)))
        {
            let initial = name.to_string().chars().next().unwrap();
            assert!(initial.is_ascii_uppercase(), "{name:?} starts with {initial:?}");
            assert_eq2!(name.upper_initial(), initial);
        }
    }

    #[test]
    fn test_shifted_symbols_share_a_key_with_their_base() {
        for (base, shifted) in "0123456789;/`[\\]',.-=".chars().zip(SHIFTED_SYMBOLS.chars()) {
            assert_eq2!(from_char(base), from_char(shifted));
            assert!(!implies_shift(base), "{base:?}");
            assert!(implies_shift(shifted), "{shifted:?}");
        }
    }

    #[test]
    fn test_lower_and_upper_case_letters_share_a_key() {
        for (lower, upper) in ('a'..='z').zip('A'..='Z') {
            assert_eq2!(from_char(lower), from_char(upper));
            assert_eq2!(from_char(lower).upper_initial(), upper);
        }
    }
}
