mod support;

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use robot_sound_core::SequencePlayer;
use robot_sound_core::common::{Clock, Step};
use support::{ManualClock, Output, Recorder};

/// Turns arbitrary pairs into a short sequence with 1..=300 ms steps.
fn sequence(raw: &[(u16, u16)]) -> Vec<Step> {
    raw.iter()
        .take(8)
        .map(|&(f, d)| Step::new(if f % 3 == 0 { 0 } else { f }, d % 300 + 1))
        .collect()
}

/// Plays `steps` while polling every `interval` ms. Returns the time each
/// step started plus the time playback ended.
fn run(steps: &[Step], interval: u32) -> (Vec<u32>, Vec<Output>) {
    let clock = ManualClock::at(1_000);
    let mut player = SequencePlayer::new(Recorder::new(&clock), &clock, 0);
    player.play(steps);

    let mut starts = vec![clock.now().as_u32()];
    let mut last_index = 0;
    while player.is_playing() {
        clock.advance(interval);
        player.update();
        match player.position() {
            Some((index, _)) if index != last_index => {
                starts.push(clock.now().as_u32());
                last_index = index;
            }
            Some(_) => {}
            None => starts.push(clock.now().as_u32()),
        }
    }
    (starts, player.emitter().outputs())
}

#[test]
fn prop_step_duration_is_a_floor() {
    fn property(raw: Vec<(u16, u16)>, interval: u8) -> TestResult {
        let steps = sequence(&raw);
        if steps.is_empty() {
            return TestResult::discard();
        }
        let interval = interval as u32 % 50 + 1;
        let (starts, _) = run(&steps, interval);
        if starts.len() != steps.len() + 1 {
            return TestResult::failed();
        }

        let ok = steps.iter().zip(starts.windows(2)).all(|(step, w)| {
            let lasted = w[1] - w[0];
            let declared = step.duration_ms as u32;
            lasted >= declared && lasted < declared + interval
        });
        TestResult::from_bool(ok)
    }

    let mut qc = quickcheck::QuickCheck::new().tests(200);
    qc.quickcheck(property as fn(Vec<(u16, u16)>, u8) -> TestResult);
}

#[test]
fn prop_every_step_executes_once_in_order() {
    fn property(raw: Vec<(u16, u16)>) -> TestResult {
        let steps = sequence(&raw);
        if steps.is_empty() {
            return TestResult::discard();
        }
        let (_, outputs) = run(&steps, 1);

        let mut expected = vec![Output::Silence];
        expected.extend(steps.iter().map(|s| {
            if s.is_rest() {
                Output::Silence
            } else {
                Output::Tone(s.frequency)
            }
        }));
        expected.push(Output::Silence);
        TestResult::from_bool(outputs == expected)
    }

    let mut qc = quickcheck::QuickCheck::new().tests(200);
    qc.quickcheck(property as fn(Vec<(u16, u16)>) -> TestResult);
}

#[quickcheck]
fn stop_always_silences(raw: Vec<(u16, u16)>, polls: u8) -> bool {
    let steps = sequence(&raw);
    let clock = ManualClock::at(0);
    let mut player = SequencePlayer::new(Recorder::new(&clock), &clock, 0);
    player.play(&steps[..]);
    for _ in 0..polls {
        clock.advance(7);
        player.update();
    }

    player.stop();
    !player.is_playing()
        && player.position().is_none()
        && player.emitter().last() == Some(Output::Silence)
}

#[quickcheck]
fn empty_play_never_disturbs(raw: Vec<(u16, u16)>, polls: u8) -> bool {
    let steps = sequence(&raw);
    let clock = ManualClock::at(0);
    let mut player = SequencePlayer::new(Recorder::new(&clock), &clock, 0);
    player.play(&steps[..]);
    for _ in 0..polls % 16 {
        clock.advance(13);
        player.update();
    }

    let playing = player.is_playing();
    let position = player.position();
    let deadline = player.deadline();
    let calls = player.emitter().len();

    player.play(&[] as &[Step]);
    player.play(None::<&[Step]>);

    player.is_playing() == playing
        && player.position() == position
        && player.deadline() == deadline
        && player.emitter().len() == calls
}
