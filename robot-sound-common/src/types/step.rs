//! 音符步进定义

/// 一个 (频率, 时长) 步进，频率为 0 表示静音
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Step {
    pub frequency: u16,
    pub duration_ms: u16,
}

impl Step {
    pub const fn new(frequency: u16, duration_ms: u16) -> Self {
        Self {
            frequency,
            duration_ms,
        }
    }

    pub const fn rest(duration_ms: u16) -> Self {
        Self::new(0, duration_ms)
    }

    /// A tone lasting `duration` at the given tempo.
    pub const fn note(frequency: u16, duration: NoteDuration, bpm: u16) -> Self {
        Self::new(frequency, duration.to_ms(bpm))
    }

    pub const fn is_rest(&self) -> bool {
        self.frequency == 0
    }
}

/// Total length of a sequence in milliseconds, ignoring poll overrun.
pub fn total_duration_ms(steps: &[Step]) -> u32 {
    steps.iter().map(|s| s.duration_ms as u32).sum()
}

/// 音符时值
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NoteDuration {
    Whole,     // 全音符 4拍
    Half,      // 二分音符 2拍
    Quarter,   // 四分音符 1拍
    Eighth,    // 八分音符 0.5拍
    Sixteenth, // 十六分音符 0.25拍
}

impl NoteDuration {
    /// Length in quarter beats.
    const fn quarter_beats(&self) -> u32 {
        match self {
            NoteDuration::Whole => 16,
            NoteDuration::Half => 8,
            NoteDuration::Quarter => 4,
            NoteDuration::Eighth => 2,
            NoteDuration::Sixteenth => 1,
        }
    }

    /// Milliseconds at `bpm`, saturating at `u16::MAX`. A tempo of 0 is
    /// treated as 1 bpm.
    pub const fn to_ms(&self, bpm: u16) -> u16 {
        let bpm = if bpm == 0 { 1 } else { bpm as u32 };
        let ms = 15_000 * self.quarter_beats() / bpm;
        if ms > u16::MAX as u32 {
            u16::MAX
        } else {
            ms as u16
        }
    }
}
