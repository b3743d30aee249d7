use robot_sound_common::{Category, Clock, SoundConfig, Step, Style, ToneEmitter, debug, info};

use crate::library::SoundLibrary;
use crate::player::SequencePlayer;

/// 机器人音效服务
///
/// Pairs a [`SequencePlayer`] with a [`SoundLibrary`] and a default style so
/// callers can say `sound.tap()` instead of looking sequences up by hand.
/// Like the player, everything here returns immediately; keep calling
/// [`RobotSound::update`] from the main loop.
pub struct RobotSound<'a, E: ToneEmitter, C: Clock> {
    player: SequencePlayer<'a, E, C>,
    library: SoundLibrary,
    config: SoundConfig,
}

impl<'a, E: ToneEmitter, C: Clock> RobotSound<'a, E, C> {
    pub fn new(emitter: E, clock: C, channel: E::Channel, config: SoundConfig) -> Self {
        Self::with_library(emitter, clock, channel, config, SoundLibrary::builtin())
    }

    pub fn with_library(
        emitter: E,
        clock: C,
        channel: E::Channel,
        config: SoundConfig,
        library: SoundLibrary,
    ) -> Self {
        info!(
            "Robot sound ready, default style {}",
            config.default_style.name()
        );
        Self {
            player: SequencePlayer::new(emitter, clock, channel),
            library,
            config,
        }
    }

    pub fn update(&mut self) {
        self.player.update();
    }

    pub fn stop(&mut self) {
        self.player.stop();
    }

    pub fn is_playing(&self) -> bool {
        self.player.is_playing()
    }

    pub fn player(&self) -> &SequencePlayer<'a, E, C> {
        &self.player
    }

    pub fn library(&self) -> &SoundLibrary {
        &self.library
    }

    pub fn config(&self) -> &SoundConfig {
        &self.config
    }

    pub fn default_style(&self) -> Style {
        self.config.default_style
    }

    pub fn set_default_style(&mut self, style: Style) {
        self.config.default_style = style;
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Muting stops the current sound and ignores later play requests.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
        if !enabled && self.player.is_playing() {
            self.player.stop();
        }
        info!("Sound enabled: {}", enabled);
    }

    pub fn play_category(&mut self, category: Category, style: Style) {
        if !self.config.enabled {
            debug!("Sound disabled, skipping {}", category.name());
            return;
        }
        debug!("Sound {} ({})", category.name(), style.name());
        let steps = self.library.lookup(category, style);
        self.player.play(steps);
    }

    /// Plays a caller-owned sequence. Empty sequences are ignored.
    pub fn play_custom(&mut self, steps: &'a [Step]) {
        if !self.config.enabled {
            return;
        }
        self.player.play(steps);
    }

    pub fn tap(&mut self) {
        self.tap_with(self.config.default_style);
    }

    pub fn long_hold(&mut self) {
        self.long_hold_with(self.config.default_style);
    }

    pub fn release(&mut self) {
        self.release_with(self.config.default_style);
    }

    pub fn hello(&mut self) {
        self.hello_with(self.config.default_style);
    }

    pub fn intro(&mut self) {
        self.intro_with(self.config.default_style);
    }

    pub fn happy(&mut self) {
        self.happy_with(self.config.default_style);
    }

    pub fn angry(&mut self) {
        self.angry_with(self.config.default_style);
    }

    pub fn tired(&mut self) {
        self.tired_with(self.config.default_style);
    }

    pub fn cold(&mut self) {
        self.cold_with(self.config.default_style);
    }

    pub fn tap_with(&mut self, style: Style) {
        self.play_category(Category::Tap, style);
    }

    pub fn long_hold_with(&mut self, style: Style) {
        self.play_category(Category::LongHold, style);
    }

    pub fn release_with(&mut self, style: Style) {
        self.play_category(Category::Release, style);
    }

    pub fn hello_with(&mut self, style: Style) {
        self.play_category(Category::Hello, style);
    }

    pub fn intro_with(&mut self, style: Style) {
        self.play_category(Category::Intro, style);
    }

    pub fn happy_with(&mut self, style: Style) {
        self.play_category(Category::Happy, style);
    }

    pub fn angry_with(&mut self, style: Style) {
        self.play_category(Category::Angry, style);
    }

    pub fn tired_with(&mut self, style: Style) {
        self.play_category(Category::Tired, style);
    }

    pub fn cold_with(&mut self, style: Style) {
        self.play_category(Category::Cold, style);
    }
}
