/// 音调输出能力
///
/// Drives one or more physical outputs (a piezo pin, a PWM channel, ...).
/// Both operations must be safe to call redundantly.
pub trait ToneEmitter {
    /// Opaque output handle. The player stores it but never interprets it.
    type Channel: Copy;

    type Error: core::fmt::Debug;

    /// Begin continuous emission at `frequency_hz`, superseding any
    /// frequency already playing on `channel`.
    fn start_tone(&mut self, channel: Self::Channel, frequency_hz: u16) -> Result<(), Self::Error>;

    /// Stop emission on `channel`.
    fn silence(&mut self, channel: Self::Channel) -> Result<(), Self::Error>;
}

impl<T: ToneEmitter + ?Sized> ToneEmitter for &mut T {
    type Channel = T::Channel;
    type Error = T::Error;

    fn start_tone(&mut self, channel: Self::Channel, frequency_hz: u16) -> Result<(), Self::Error> {
        (**self).start_tone(channel, frequency_hz)
    }

    fn silence(&mut self, channel: Self::Channel) -> Result<(), Self::Error> {
        (**self).silence(channel)
    }
}
