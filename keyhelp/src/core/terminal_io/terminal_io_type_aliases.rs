// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::Event;
use smallvec::SmallVec;
use std::{io::Error, sync::Arc};

/// Disambiguate the type of `StdMutex` from other mutex types.
pub type StdMutex<T> = std::sync::Mutex<T>;

/// Type alias for a `Send`-able output device (stdout, stderr, mock, etc).
pub type SendRawTerminal = dyn std::io::Write + Send;
/// Type alias for a `Send`-able raw terminal wrapped in an `Arc<StdMutex>`.
pub type SafeRawTerminal = Arc<StdMutex<SendRawTerminal>>;

/// Type alias for crossterm (blocking) input event result.
pub type CrosstermEventResult = Result<Event, Error>;
/// Type alias for a blocking source of input events. Each call to `next()` blocks until
/// an event is available. `None` means the source is exhausted. `T` is usually
/// [`CrosstermEventResult`].
pub type BlockingInputSource<T> = Box<dyn Iterator<Item = T>>;

/// Stack allocated vec for small collections, like the events fed to a mock input
/// device.
pub type InlineVec<T> = SmallVec<[T; DEFAULT_INLINE_VEC_SIZE]>;
pub const DEFAULT_INLINE_VEC_SIZE: usize = 8;
