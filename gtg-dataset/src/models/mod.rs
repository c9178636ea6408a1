//! Data models for the dataset builder

pub mod game;
pub mod labels;
pub mod raw_record;

pub use game::Game;
pub use labels::*;
pub use raw_record::{RawAgeRating, RawRecord};
