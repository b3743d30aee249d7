//! 内置音效表

use robot_sound_common::Step;

use super::{PresetTable, StyleSet};

const fn t(frequency: u16, duration_ms: u16) -> Step {
    Step::new(frequency, duration_ms)
}

const fn r(duration_ms: u16) -> Step {
    Step::rest(duration_ms)
}

// 轻触 / 长按 / 松开
static TAP_SOFT: [Step; 3] = [t(880, 35), r(30), t(1175, 55)];
static HOLD_SOFT: [Step; 5] = [t(660, 70), r(90), t(880, 70), r(90), t(1320, 110)];
static RELEASE_SOFT: [Step; 3] = [t(1175, 45), r(40), t(880, 85)];

static TAP_SCIFI: [Step; 5] = [t(1800, 25), r(25), t(1400, 45), r(20), t(2000, 25)];
static HOLD_SCIFI: [Step; 7] = [
    t(1200, 60),
    r(90),
    t(1500, 60),
    r(90),
    t(1800, 70),
    r(110),
    t(2200, 120),
];
static RELEASE_SCIFI: [Step; 5] = [t(2000, 22), r(30), t(1500, 45), r(20), t(1100, 70)];

static TAP_MINIMAL: [Step; 2] = [t(1500, 22), r(18)];
static HOLD_MINIMAL: [Step; 5] = [t(1400, 60), r(80), t(1700, 60), r(90), t(2000, 90)];
static RELEASE_MINIMAL: [Step; 3] = [t(1700, 22), r(25), t(1400, 50)];

// 开机: one note per letter of the robot's name
static INTRO: [Step; 11] = [
    t(784, 120),
    r(40),
    t(659, 120),
    r(40),
    t(784, 120),
    r(40),
    t(587, 140),
    r(40),
    t(659, 120),
    r(40),
    t(988, 200),
];

// 问候
static HELLO_SOFT: [Step; 7] = [
    t(880, 90),
    r(60),
    t(1047, 90),
    r(60),
    t(1319, 110),
    r(70),
    t(988, 140),
];
static HELLO_SCIFI: [Step; 9] = [
    t(1400, 60),
    r(35),
    t(1700, 60),
    r(35),
    t(2100, 65),
    r(45),
    t(2600, 80),
    r(60),
    t(1900, 140),
];
static HELLO_MINIMAL: [Step; 5] = [t(1800, 40), r(40), t(2200, 50), r(50), t(2000, 120)];

// 开心: rising and bright
static HAPPY_SOFT: [Step; 5] = [t(900, 40), r(25), t(1200, 45), r(25), t(1500, 60)];
static HAPPY_SCIFI: [Step; 7] = [
    t(1600, 25),
    r(20),
    t(1900, 25),
    r(20),
    t(2300, 30),
    r(35),
    t(2600, 65),
];
static HAPPY_MINIMAL: [Step; 3] = [t(1800, 22), r(18), t(2200, 35)];

// 生气: harsh and falling
static ANGRY_SOFT: [Step; 5] = [t(600, 55), r(25), t(520, 55), r(25), t(440, 90)];
static ANGRY_SCIFI: [Step; 7] = [
    t(900, 35),
    r(20),
    t(850, 35),
    r(20),
    t(780, 45),
    r(20),
    t(650, 110),
];
static ANGRY_MINIMAL: [Step; 3] = [t(900, 35), r(18), t(700, 70)];

// 疲惫: slow, low, spaced out
static TIRED_SOFT: [Step; 5] = [t(500, 70), r(120), t(420, 70), r(140), t(360, 120)];
static TIRED_SCIFI: [Step; 7] = [
    t(700, 60),
    r(120),
    t(640, 60),
    r(140),
    t(580, 60),
    r(160),
    t(520, 140),
];
static TIRED_MINIMAL: [Step; 3] = [t(700, 55), r(140), t(520, 110)];

// 寒冷: shivering ticks, then a low note
static COLD_SOFT: [Step; 7] = [
    t(1200, 25),
    r(45),
    t(1200, 25),
    r(60),
    t(950, 45),
    r(70),
    t(700, 120),
];
static COLD_SCIFI: [Step; 9] = [
    t(2000, 18),
    r(35),
    t(2000, 18),
    r(45),
    t(1700, 22),
    r(55),
    t(1400, 28),
    r(60),
    t(900, 120),
];
static COLD_MINIMAL: [Step; 5] = [t(1800, 18), r(40), t(1800, 18), r(55), t(900, 90)];

pub static BUILTIN: PresetTable = PresetTable {
    tap: StyleSet::new(&TAP_SOFT, &TAP_SCIFI, &TAP_MINIMAL),
    long_hold: StyleSet::new(&HOLD_SOFT, &HOLD_SCIFI, &HOLD_MINIMAL),
    release: StyleSet::new(&RELEASE_SOFT, &RELEASE_SCIFI, &RELEASE_MINIMAL),
    hello: StyleSet::new(&HELLO_SOFT, &HELLO_SCIFI, &HELLO_MINIMAL),
    intro: StyleSet::uniform(&INTRO),
    happy: StyleSet::new(&HAPPY_SOFT, &HAPPY_SCIFI, &HAPPY_MINIMAL),
    angry: StyleSet::new(&ANGRY_SOFT, &ANGRY_SCIFI, &ANGRY_MINIMAL),
    tired: StyleSet::new(&TIRED_SOFT, &TIRED_SCIFI, &TIRED_MINIMAL),
    cold: StyleSet::new(&COLD_SOFT, &COLD_SCIFI, &COLD_MINIMAL),
};
