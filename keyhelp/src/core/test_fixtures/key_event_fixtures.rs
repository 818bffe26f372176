// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Macro to insulate tests from changes in crossterm's [`crossterm::event::KeyEvent`]
/// constructor & fields. The resulting event has `kind` set to
/// [`crossterm::event::KeyEventKind::Press`].
///
/// ```
/// use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};
/// use keyhelp::crossterm_keyevent;
///
/// let key_event =
///     crossterm_keyevent!(code: KeyCode::Char('x'), modifiers: KeyModifiers::CONTROL);
/// assert_eq!(key_event.kind, KeyEventKind::Press);
/// ```
#[macro_export]
macro_rules! crossterm_keyevent {
    (
        code: $arg_key_code: expr,
        modifiers: $arg_key_modifiers: expr
    ) => {
        crossterm::event::KeyEvent::new($arg_key_code, $arg_key_modifiers)
    };
}
