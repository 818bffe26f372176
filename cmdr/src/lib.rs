// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # keyhelp-cmdr
//!
//! The `keyhelp` binary, a small console app built on the [`keyhelp`] crate.
//!
//! | Command                               | Description                                   |
//! | :------------------------------------ | :-------------------------------------------- |
//! | `keyhelp read [--prompt <TEXT>] [--json]` | Wait for one key press and print it       |
//! | `keyhelp banner`                      | Print the keyboard help banner                |
//! | `keyhelp next <CHAR>`                 | Print the character that follows `CHAR`      |
//! | `keyhelp repl`                        | Read keys in a loop until Escape or Ctrl+C     |
//!
//! Pass `--enable-logging` (or `-l`) to any command to write debug logs to
//! `keyhelp_log.txt` in the current folder.
//!
//! ```text
//! cargo run --bin keyhelp -- read --json
//! cargo run --bin keyhelp -- repl -l
//! ```

#![warn(clippy::unwrap_in_result)]
#![warn(rust_2018_idioms)]

// Attach sources.
pub mod kh;

// Re-export.
pub use kh::*;
