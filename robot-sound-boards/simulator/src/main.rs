use embassy_executor::Spawner;
use embassy_time::{Duration, Instant, Ticker};
use robot_sound_common::{Category, NoteDuration, Step, Style, info, total_duration_ms};
use robot_sound_core::RobotSound;
use simulated_clock::SimulatedClock;

mod config;
mod drivers;

use drivers::SimulatorBuzzer;

const BUZZER_PIN: u8 = 7;

// 小星星 opening phrase
const BPM: u16 = 240;
const C4: u16 = 262;
const G4: u16 = 392;
const A4: u16 = 440;

static TWINKLE: [Step; 7] = [
    Step::note(C4, NoteDuration::Quarter, BPM),
    Step::note(C4, NoteDuration::Quarter, BPM),
    Step::note(G4, NoteDuration::Quarter, BPM),
    Step::note(G4, NoteDuration::Quarter, BPM),
    Step::note(A4, NoteDuration::Quarter, BPM),
    Step::note(A4, NoteDuration::Quarter, BPM),
    Step::note(G4, NoteDuration::Half, BPM),
];

#[derive(Debug, Clone, Copy)]
enum Action {
    Sound(Category),
    SoundWith(Category, Style),
    Custom,
    SetStyle(Style),
    Enable(bool),
    Stop,
}

/// Wait until the current sound is over, then run `action`.
/// `Some(ms)` fires after `ms` regardless, interrupting whatever plays.
#[derive(Debug, Clone, Copy)]
struct Cue {
    after_ms: Option<u32>,
    action: Action,
}

const fn when_idle(action: Action) -> Cue {
    Cue {
        after_ms: None,
        action,
    }
}

const fn after(ms: u32, action: Action) -> Cue {
    Cue {
        after_ms: Some(ms),
        action,
    }
}

static SCRIPT: [Cue; 16] = [
    when_idle(Action::Sound(Category::Intro)),
    when_idle(Action::Sound(Category::Hello)),
    when_idle(Action::Sound(Category::Tap)),
    when_idle(Action::Sound(Category::LongHold)),
    when_idle(Action::Sound(Category::Release)),
    when_idle(Action::SetStyle(Style::Soft)),
    when_idle(Action::Sound(Category::Happy)),
    when_idle(Action::Sound(Category::Angry)),
    when_idle(Action::SoundWith(Category::Tired, Style::Minimal)),
    when_idle(Action::SoundWith(Category::Cold, Style::SciFi)),
    when_idle(Action::Sound(Category::Hello)),
    after(120, Action::Sound(Category::Tap)),
    when_idle(Action::Custom),
    after(300, Action::Stop),
    when_idle(Action::Enable(false)),
    when_idle(Action::Sound(Category::Tap)),
];

fn apply(sound: &mut RobotSound<'static, SimulatorBuzzer, SimulatedClock>, action: Action) {
    info!("Cue: {:?}", action);
    match action {
        Action::Sound(category) => sound.play_category(category, sound.default_style()),
        Action::SoundWith(category, style) => sound.play_category(category, style),
        Action::Custom => {
            info!("Custom melody, {}ms", total_duration_ms(&TWINKLE));
            sound.play_custom(&TWINKLE);
        }
        Action::SetStyle(style) => sound.set_default_style(style),
        Action::Enable(enabled) => sound.set_enabled(enabled),
        Action::Stop => sound.stop(),
    }
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    env_logger::init();

    let config = config::load();
    info!(
        "Simulator starting: style {}, polling every {}ms",
        config.default_style.name(),
        config.poll_interval_ms
    );

    let mut sound = RobotSound::new(
        SimulatorBuzzer::new(),
        SimulatedClock::new(),
        BUZZER_PIN,
        config,
    );

    let mut ticker = Ticker::every(Duration::from_millis(config.poll_interval_ms as u64));
    let mut cues = SCRIPT.iter();
    let mut next = cues.next();
    let mut cue_started = Instant::now();

    while let Some(cue) = next {
        sound.update();

        let due = match cue.after_ms {
            None => !sound.is_playing(),
            Some(ms) => cue_started.elapsed() >= Duration::from_millis(ms as u64),
        };
        if due {
            apply(&mut sound, cue.action);
            cue_started = Instant::now();
            next = cues.next();
        }

        ticker.next().await;
    }

    while sound.is_playing() {
        sound.update();
        ticker.next().await;
    }

    info!(
        "Simulator finished, {} tones started",
        sound.player().emitter().tones_started()
    );
}
