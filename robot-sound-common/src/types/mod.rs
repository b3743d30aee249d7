pub mod config;
pub mod error;
pub mod step;
pub mod style;

pub use config::*;
pub use error::*;
pub use step::*;
pub use style::*;
