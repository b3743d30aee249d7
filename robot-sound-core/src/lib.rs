#![cfg_attr(not(test), no_std)]

pub mod library;
pub mod player;
pub mod robot_sound;

pub use library::{PresetTable, SoundLibrary, StyleSet};
pub use player::SequencePlayer;
pub use robot_sound::RobotSound;

pub use robot_sound_common as common;
