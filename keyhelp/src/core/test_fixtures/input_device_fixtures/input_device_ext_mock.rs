// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BlockingInputSource, CrosstermEventResult, InlineVec, InputDevice};

/// Create an input source that yields each item of `generator_vec` once, in order, and
/// then reports that it is exhausted.
pub fn gen_input_source<T>(generator_vec: InlineVec<T>) -> BlockingInputSource<T>
where
    T: 'static,
{
    Box::new(generator_vec.into_iter())
}

pub trait InputDeviceExtMock {
    fn new_mock(generator_vec: InlineVec<CrosstermEventResult>) -> InputDevice;
}

impl InputDeviceExtMock for InputDevice {
    fn new_mock(generator_vec: InlineVec<CrosstermEventResult>) -> InputDevice {
        InputDevice {
            resource: gen_input_source(generator_vec),
            is_mock: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;

    use super::*;

    #[test]
    fn test_gen_input_source() {
        let mut input_source = gen_input_source(smallvec![1, 2, 3]);
        for expected in 1..=3 {
            pretty_assertions::assert_eq!(input_source.next(), Some(expected));
        }
        pretty_assertions::assert_eq!(input_source.next(), None);
    }
}
