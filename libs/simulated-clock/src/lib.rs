use embassy_time::Instant;
use robot_sound_common::{Clock, Millis};

/// [`Clock`] backed by the embassy time driver.
///
/// Readings count from the moment the clock was created and are
/// truncated to 32 bits, so they wrap after roughly 49.7 days just like a
/// microcontroller millisecond counter.
pub struct SimulatedClock {
    boot_instant: Instant,
    offset_ms: u32,
}

impl SimulatedClock {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// Starts the reading at `offset_ms` instead of zero. Handy for checking
    /// behaviour close to the wrap point.
    pub fn starting_at(offset_ms: u32) -> Self {
        log::info!("Simulated clock started at {} ms", offset_ms);
        Self {
            boot_instant: Instant::now(),
            offset_ms,
        }
    }
}

impl Default for SimulatedClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SimulatedClock {
    fn now(&self) -> Millis {
        let elapsed = self.boot_instant.elapsed().as_millis() as u32;
        Millis(self.offset_ms.wrapping_add(elapsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readings_never_go_backwards() {
        let clock = SimulatedClock::new();
        let first = clock.now();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let second = clock.now();
        assert!(second.has_reached(first));
        assert!(second.since(first) >= 5);
    }

    #[test]
    fn offset_wraps() {
        let clock = SimulatedClock::starting_at(u32::MAX);
        std::thread::sleep(std::time::Duration::from_millis(2));
        let now = clock.now();
        assert!(now.as_u32() < 1_000);
        assert!(now.has_reached(Millis(u32::MAX)));
    }
}
