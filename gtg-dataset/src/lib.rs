//! gtg-dataset library interface
//!
//! Builds the guessing-game corpus: raw catalog records are admitted,
//! normalized and classified into fixed-schema [`Game`] entries, sampled down
//! to a target size and written as JSON.

pub mod assembler;
pub mod classifiers;
pub mod config;
pub mod models;
pub mod normalize;
pub mod output;
pub mod sampler;
pub mod services;

pub use assembler::{transform_raw_to_games, AdmissionStats, Assembler, Rejection};
pub use config::{resolve_rawg_api_key, BuildSettings, CliOverrides};
pub use models::{Game, RawRecord};
pub use output::{assemble_from_file, load_games_json, write_games_json};
pub use sampler::{sample_games, sample_games_seeded};
pub use services::{RawgClient, RawgError};
