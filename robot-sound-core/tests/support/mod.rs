#![allow(dead_code)]

use std::cell::Cell;

use robot_sound_core::common::{Clock, Millis, ToneEmitter};

/// Clock the test moves by hand.
#[derive(Default)]
pub struct ManualClock(Cell<u32>);

impl ManualClock {
    pub fn at(ms: u32) -> Self {
        Self(Cell::new(ms))
    }

    pub fn set(&self, ms: u32) {
        self.0.set(ms);
    }

    pub fn advance(&self, ms: u32) {
        self.0.set(self.0.get().wrapping_add(ms));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Millis {
        Millis(self.0.get())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Tone(u16),
    Silence,
}

/// Emitter that remembers every call together with the time it was made.
pub struct Recorder<'c> {
    clock: &'c ManualClock,
    calls: Vec<(u32, u8, Output)>,
}

impl<'c> Recorder<'c> {
    pub fn new(clock: &'c ManualClock) -> Self {
        Self {
            clock,
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> Vec<(u32, Output)> {
        self.calls.iter().map(|&(t, _, o)| (t, o)).collect()
    }

    pub fn outputs(&self) -> Vec<Output> {
        self.calls.iter().map(|&(_, _, o)| o).collect()
    }

    pub fn channels(&self) -> Vec<u8> {
        self.calls.iter().map(|&(_, c, _)| c).collect()
    }

    pub fn last(&self) -> Option<Output> {
        self.calls.last().map(|&(_, _, o)| o)
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    fn push(&mut self, channel: u8, output: Output) {
        self.calls.push((self.clock.now().as_u32(), channel, output));
    }
}

impl ToneEmitter for Recorder<'_> {
    type Channel = u8;
    type Error = core::convert::Infallible;

    fn start_tone(&mut self, channel: u8, frequency_hz: u16) -> Result<(), Self::Error> {
        self.push(channel, Output::Tone(frequency_hz));
        Ok(())
    }

    fn silence(&mut self, channel: u8) -> Result<(), Self::Error> {
        self.push(channel, Output::Silence);
        Ok(())
    }
}
