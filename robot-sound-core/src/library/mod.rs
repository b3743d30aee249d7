//! 音效库：按 (类别, 风格) 查找预设音序

mod presets;

use robot_sound_common::{Category, Step, Style};

pub use presets::BUILTIN;

/// One sequence per style for a single category.
#[derive(Debug, Clone, Copy)]
pub struct StyleSet {
    pub soft: &'static [Step],
    pub scifi: &'static [Step],
    pub minimal: &'static [Step],
}

impl StyleSet {
    pub const fn new(
        soft: &'static [Step],
        scifi: &'static [Step],
        minimal: &'static [Step],
    ) -> Self {
        Self {
            soft,
            scifi,
            minimal,
        }
    }

    /// Same sequence regardless of style.
    pub const fn uniform(steps: &'static [Step]) -> Self {
        Self::new(steps, steps, steps)
    }

    /// Entry for `style`, or the [`Style::DEFAULT`] entry when that one is empty.
    pub const fn get(&self, style: Style) -> &'static [Step] {
        let steps = self.exact(style);
        if steps.is_empty() {
            self.exact(Style::DEFAULT)
        } else {
            steps
        }
    }

    const fn exact(&self, style: Style) -> &'static [Step] {
        match style {
            Style::Soft => self.soft,
            Style::SciFi => self.scifi,
            Style::Minimal => self.minimal,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PresetTable {
    pub tap: StyleSet,
    pub long_hold: StyleSet,
    pub release: StyleSet,
    pub hello: StyleSet,
    pub intro: StyleSet,
    pub happy: StyleSet,
    pub angry: StyleSet,
    pub tired: StyleSet,
    pub cold: StyleSet,
}

impl PresetTable {
    pub const fn category(&self, category: Category) -> &StyleSet {
        match category {
            Category::Tap => &self.tap,
            Category::LongHold => &self.long_hold,
            Category::Release => &self.release,
            Category::Hello => &self.hello,
            Category::Intro => &self.intro,
            Category::Happy => &self.happy,
            Category::Angry => &self.angry,
            Category::Tired => &self.tired,
            Category::Cold => &self.cold,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SoundLibrary {
    table: &'static PresetTable,
}

impl SoundLibrary {
    pub const fn new(table: &'static PresetTable) -> Self {
        Self { table }
    }

    pub const fn builtin() -> Self {
        Self::new(&BUILTIN)
    }

    pub const fn table(&self) -> &'static PresetTable {
        self.table
    }

    pub const fn lookup(&self, category: Category, style: Style) -> &'static [Step] {
        self.table.category(category).get(style)
    }
}

impl Default for SoundLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}
