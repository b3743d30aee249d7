use core::str::FromStr;

use crate::types::{SoundError, SoundResult};

/// 音效风格
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Style {
    Soft = 1,
    #[default]
    SciFi = 2,
    Minimal = 3,
}

impl Style {
    /// Style every unrecognized or missing choice resolves to.
    pub const DEFAULT: Style = Style::SciFi;

    pub const ALL: [Style; 3] = [Style::Soft, Style::SciFi, Style::Minimal];

    /// Total conversion from a raw id; unknown ids map to [`Style::DEFAULT`].
    pub const fn from_raw(raw: u8) -> Style {
        match raw {
            1 => Style::Soft,
            3 => Style::Minimal,
            _ => Style::DEFAULT,
        }
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Style::Soft => "soft",
            Style::SciFi => "scifi",
            Style::Minimal => "minimal",
        }
    }
}

impl TryFrom<u8> for Style {
    type Error = SoundError;

    fn try_from(raw: u8) -> SoundResult<Self> {
        match raw {
            1 => Ok(Style::Soft),
            2 => Ok(Style::SciFi),
            3 => Ok(Style::Minimal),
            other => Err(SoundError::UnknownStyle(other)),
        }
    }
}

impl FromStr for Style {
    type Err = SoundError;

    fn from_str(s: &str) -> SoundResult<Self> {
        let s = s.trim();
        [
            ("soft", Style::Soft),
            ("scifi", Style::SciFi),
            ("sci-fi", Style::SciFi),
            ("minimal", Style::Minimal),
            ("mini", Style::Minimal),
        ]
        .into_iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(s))
        .map(|(_, style)| style)
        .ok_or(SoundError::UnknownStyleName)
    }
}

/// 音效类别（语义事件）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Category {
    Tap,
    LongHold,
    Release,
    Hello,
    Intro,
    Happy,
    Angry,
    Tired,
    Cold,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Tap,
        Category::LongHold,
        Category::Release,
        Category::Hello,
        Category::Intro,
        Category::Happy,
        Category::Angry,
        Category::Tired,
        Category::Cold,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Category::Tap => "tap",
            Category::LongHold => "long-hold",
            Category::Release => "release",
            Category::Hello => "hello",
            Category::Intro => "intro",
            Category::Happy => "happy",
            Category::Angry => "angry",
            Category::Tired => "tired",
            Category::Cold => "cold",
        }
    }
}

impl FromStr for Category {
    type Err = SoundError;

    fn from_str(s: &str) -> SoundResult<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("hold") || s.eq_ignore_ascii_case("longhold") {
            return Ok(Category::LongHold);
        }
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or(SoundError::UnknownCategoryName)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_ids_fall_back_to_default() {
        assert_eq!(Style::from_raw(1), Style::Soft);
        assert_eq!(Style::from_raw(2), Style::SciFi);
        assert_eq!(Style::from_raw(3), Style::Minimal);
        assert_eq!(Style::from_raw(0), Style::DEFAULT);
        assert_eq!(Style::from_raw(42), Style::DEFAULT);
    }

    #[test]
    fn strict_conversion_rejects_unknown_ids() {
        assert_eq!(Style::try_from(3), Ok(Style::Minimal));
        assert_eq!(Style::try_from(9), Err(SoundError::UnknownStyle(9)));
        for style in Style::ALL {
            assert_eq!(Style::try_from(style.as_raw()), Ok(style));
        }
    }

    #[test]
    fn style_names_parse() {
        assert_eq!("Sci-Fi".parse(), Ok(Style::SciFi));
        assert_eq!(" soft ".parse(), Ok(Style::Soft));
        assert_eq!("MINI".parse(), Ok(Style::Minimal));
        assert_eq!("loud".parse::<Style>(), Err(SoundError::UnknownStyleName));
    }

    #[test]
    fn category_names_parse() {
        for category in Category::ALL {
            assert_eq!(category.name().parse(), Ok(category));
        }
        assert_eq!("HOLD".parse(), Ok(Category::LongHold));
        assert_eq!("sneeze".parse::<Category>(), Err(SoundError::UnknownCategoryName));
    }
}
