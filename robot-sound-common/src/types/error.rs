use thiserror::Error;

pub type SoundResult<T> = core::result::Result<T, SoundError>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SoundError {
    #[error("unknown sound style id: {0}")]
    UnknownStyle(u8),

    #[error("unknown sound style name")]
    UnknownStyleName,

    #[error("unknown sound category name")]
    UnknownCategoryName,

    #[error("poll interval must be at least 1 ms")]
    InvalidPollInterval,
}
