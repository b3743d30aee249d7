pub mod clock;
pub mod tone;

pub use clock::*;
pub use tone::*;
