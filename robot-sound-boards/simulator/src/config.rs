use std::env;

use robot_sound_common::{SoundConfig, SoundResult, Style, warn};

pub const STYLE_VAR: &str = "ROBOT_SOUND_STYLE";
pub const POLL_VAR: &str = "ROBOT_SOUND_POLL_MS";

/// Builds the sound configuration from the environment, keeping the
/// default for anything missing or malformed.
pub fn load() -> SoundConfig {
    let style = env::var(STYLE_VAR).ok();
    let poll = env::var(POLL_VAR).ok();
    from_values(style.as_deref(), poll.as_deref())
}

pub fn from_values(style: Option<&str>, poll_ms: Option<&str>) -> SoundConfig {
    let mut config = SoundConfig::default();

    if let Some(raw) = style {
        match parse_style(raw) {
            Ok(style) => config.default_style = style,
            Err(e) => warn!("Ignoring {}={:?}: {}", STYLE_VAR, raw, e),
        }
    }

    if let Some(raw) = poll_ms {
        match raw.trim().parse::<u16>() {
            Ok(ms) => match config.with_poll_interval(ms) {
                Ok(updated) => config = updated,
                Err(e) => warn!("Ignoring {}={}: {}", POLL_VAR, raw, e),
            },
            Err(e) => warn!("Ignoring {}={:?}: {}", POLL_VAR, raw, e),
        }
    }

    config
}

/// Accepts a style name or its numeric id.
fn parse_style(raw: &str) -> SoundResult<Style> {
    match raw.trim().parse::<u8>() {
        Ok(id) => Style::try_from(id),
        Err(_) => raw.parse(),
    }
}
