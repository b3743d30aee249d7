use crate::types::{SoundError, SoundResult, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SoundConfig {
    pub default_style: Style,
    pub enabled: bool,
    pub poll_interval_ms: u16,
}

impl SoundConfig {
    pub const fn new(default_style: Style) -> Self {
        Self {
            default_style,
            enabled: true,
            poll_interval_ms: 1,
        }
    }

    pub fn with_poll_interval(mut self, poll_interval_ms: u16) -> SoundResult<Self> {
        if poll_interval_ms == 0 {
            return Err(SoundError::InvalidPollInterval);
        }
        self.poll_interval_ms = poll_interval_ms;
        Ok(self)
    }
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self::new(Style::DEFAULT)
    }
}
