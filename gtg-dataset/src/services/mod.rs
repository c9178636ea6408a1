//! External catalog services

pub mod rawg_client;

pub use rawg_client::{RawgClient, RawgError, RAWG_BASE_URL};
