use core::convert::Infallible;

use embassy_time::Instant;
use robot_sound_common::{ToneEmitter, debug, info};

/// Piezo stand-in that prints what a real buzzer would play.
#[derive(Default)]
pub struct SimulatorBuzzer {
    tone: Option<(u16, Instant)>,
    tones_started: u32,
}

impl SimulatorBuzzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tones_started(&self) -> u32 {
        self.tones_started
    }

    fn finish_tone(&mut self, channel: u8) {
        if let Some((frequency, since)) = self.tone.take() {
            debug!(
                "[Simulator Buzzer] GPIO{} {}Hz lasted {}ms",
                channel,
                frequency,
                since.elapsed().as_millis()
            );
        }
    }
}

impl ToneEmitter for SimulatorBuzzer {
    type Channel = u8;
    type Error = Infallible;

    fn start_tone(&mut self, channel: u8, frequency_hz: u16) -> Result<(), Self::Error> {
        if matches!(self.tone, Some((current, _)) if current == frequency_hz) {
            return Ok(());
        }
        self.finish_tone(channel);
        info!("[Simulator Buzzer] GPIO{} playing {}Hz", channel, frequency_hz);
        self.tone = Some((frequency_hz, Instant::now()));
        self.tones_started += 1;
        Ok(())
    }

    fn silence(&mut self, channel: u8) -> Result<(), Self::Error> {
        if self.tone.is_some() {
            self.finish_tone(channel);
            info!("[Simulator Buzzer] GPIO{} silent", channel);
        }
        Ok(())
    }
}
