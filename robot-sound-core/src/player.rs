//! 非阻塞音序播放器
//!
//! [`SequencePlayer`] walks a borrowed list of [`Step`]s on one output
//! channel. It never waits: the host loop calls [`SequencePlayer::update`]
//! as often as it can and the player moves to the next step once the
//! current one has lasted at least its declared duration.

use robot_sound_common::{Clock, Millis, Step, ToneEmitter, debug, trace, warn};

pub struct SequencePlayer<'a, E: ToneEmitter, C: Clock> {
    emitter: E,
    clock: C,
    channel: E::Channel,
    sequence: Option<&'a [Step]>,
    index: usize,
    deadline: Millis,
}

impl<'a, E: ToneEmitter, C: Clock> SequencePlayer<'a, E, C> {
    /// Binds the player to `channel` and silences it.
    pub fn new(emitter: E, clock: C, channel: E::Channel) -> Self {
        let mut player = Self {
            emitter,
            clock,
            channel,
            sequence: None,
            index: 0,
            deadline: Millis::ZERO,
        };
        player.silence();
        player
    }

    /// Starts `sequence` from its first step, replacing whatever is playing.
    ///
    /// An empty or absent sequence is ignored and leaves the current
    /// playback untouched.
    pub fn play(&mut self, sequence: impl Into<Option<&'a [Step]>>) {
        let Some(steps) = sequence.into() else {
            return;
        };
        let Some(&first) = steps.first() else {
            return;
        };

        debug!("Playing sequence of {} steps", steps.len());
        self.sequence = Some(steps);
        self.index = 0;
        self.execute_step(first);
    }

    /// Advances playback if the current step has run its course.
    pub fn update(&mut self) {
        let Some(steps) = self.sequence else {
            return;
        };
        if !self.clock.now().has_reached(self.deadline) {
            return;
        }

        self.index += 1;
        match steps.get(self.index) {
            Some(&step) => self.execute_step(step),
            None => {
                debug!("Sequence finished");
                self.stop();
            }
        }
    }

    /// Silences the output and forgets the current sequence.
    pub fn stop(&mut self) {
        self.silence();
        self.sequence = None;
        self.index = 0;
        self.deadline = Millis::ZERO;
    }

    pub fn is_playing(&self) -> bool {
        self.sequence.is_some()
    }

    /// Step currently sounding, if any.
    pub fn current_step(&self) -> Option<Step> {
        self.sequence.and_then(|steps| steps.get(self.index).copied())
    }

    /// `(index, len)` of the active playback.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.sequence.map(|steps| (self.index, steps.len()))
    }

    /// Time at which the current step ends.
    pub fn deadline(&self) -> Option<Millis> {
        self.sequence.map(|_| self.deadline)
    }

    pub fn channel(&self) -> E::Channel {
        self.channel
    }

    pub fn emitter(&self) -> &E {
        &self.emitter
    }

    fn execute_step(&mut self, step: Step) {
        if step.is_rest() {
            self.silence();
        } else if self.emitter.start_tone(self.channel, step.frequency).is_err() {
            warn!("Tone emitter failed to start {}Hz", step.frequency);
        }
        self.deadline = self.clock.now() + step.duration_ms as u32;
        trace!(
            "Step {}: {}Hz until {}",
            self.index,
            step.frequency,
            self.deadline.as_u32()
        );
    }

    fn silence(&mut self) {
        if self.emitter.silence(self.channel).is_err() {
            warn!("Tone emitter failed to silence output");
        }
    }
}
