use core::ops::Add;

/// 单调毫秒时间戳（32位，允许回绕）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Millis(pub u32);

impl Millis {
    pub const ZERO: Self = Self(0);

    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// True once `self` is at or past `deadline`.
    ///
    /// Compared by wrapping subtraction read as a signed span, so a single
    /// wraparound of the counter between the two points is tolerated as
    /// long as they are less than 2^31 ms apart.
    pub const fn has_reached(self, deadline: Millis) -> bool {
        (self.0.wrapping_sub(deadline.0) as i32) >= 0
    }

    /// Milliseconds from `earlier` to `self`, wrapping.
    pub const fn since(self, earlier: Millis) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }
}

impl Add<u32> for Millis {
    type Output = Millis;

    fn add(self, ms: u32) -> Millis {
        Millis(self.0.wrapping_add(ms))
    }
}

/// 单调时钟
pub trait Clock {
    /// Current time. Never decreases except by wrapping past `u32::MAX`.
    fn now(&self) -> Millis;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Millis {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reached_without_wrap() {
        assert!(!Millis(34).has_reached(Millis(35)));
        assert!(Millis(35).has_reached(Millis(35)));
        assert!(Millis(36).has_reached(Millis(35)));
    }

    #[test]
    fn reached_across_wrap() {
        let deadline = Millis(u32::MAX - 10) + 50;
        assert_eq!(deadline, Millis(39));
        assert!(!Millis(u32::MAX).has_reached(deadline));
        assert!(!Millis(38).has_reached(deadline));
        assert!(Millis(39).has_reached(deadline));
        assert_eq!(Millis(39).since(Millis(u32::MAX - 10)), 50);
    }
}
