//! Record assembler
//!
//! Turns raw catalog records into `Game` entries:
//!
//! 1. Admission filters, short-circuiting in order: title, release date,
//!    minimum year, minimum popularity, at least one known platform
//! 2. Every classifier over the extracted lists
//! 3. Sequential id assignment (acceptance order, starting at 1)
//!
//! Rejected records produce no entry and no error; they only show up in the
//! aggregate [`AdmissionStats`].

use crate::classifiers::{
    classify_camera, classify_combat_style, classify_developer_bucket,
    classify_developer_region, classify_difficulty, classify_esrb, classify_mood,
    classify_monetization, classify_multiplayer_mode, classify_perspective,
    classify_replayability, classify_setting, classify_structure_features, classify_theme,
    classify_tone, classify_violence_level, classify_visual_style, classify_world_type,
    detect_franchise, detect_franchise_entry, esrb_to_age, MultiplayerFlags,
};
use crate::models::{Game, Platform, RawRecord};
use crate::normalize::{bucket_score, normalize_platforms};
use gtg_common::config::AdmissionConfig;
use serde_json::Value;
use std::fmt;
use tracing::debug;

/// Fallback `main_genre` for records without genres
pub const UNKNOWN_GENRE: &str = "Unknown";

/// Why a record was not admitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Title absent or blank
    MissingTitle,
    /// Release date absent or its year segment is not an integer
    MissingReleaseYear,
    /// Released before the minimum year
    TooOld,
    /// Ratings count below the popularity threshold
    TooNiche,
    /// No platform maps to a canonical platform
    NoKnownPlatform,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Rejection::MissingTitle => "missing title",
            Rejection::MissingReleaseYear => "missing or unparsable release year",
            Rejection::TooOld => "released before minimum year",
            Rejection::TooNiche => "ratings count below threshold",
            Rejection::NoKnownPlatform => "no recognized platform",
        };
        f.write_str(reason)
    }
}

/// Fields fixed by admission
#[derive(Debug, Clone, PartialEq)]
pub struct Admitted {
    /// Trimmed title
    pub name: String,
    pub year: i32,
    /// Never empty
    pub platforms: Vec<Platform>,
}

/// Aggregate admission counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdmissionStats {
    pub accepted: usize,
    pub missing_title: usize,
    pub missing_release_year: usize,
    pub too_old: usize,
    pub too_niche: usize,
    pub no_known_platform: usize,
}

impl AdmissionStats {
    fn record(&mut self, outcome: Result<(), Rejection>) {
        match outcome {
            Ok(()) => self.accepted += 1,
            Err(Rejection::MissingTitle) => self.missing_title += 1,
            Err(Rejection::MissingReleaseYear) => self.missing_release_year += 1,
            Err(Rejection::TooOld) => self.too_old += 1,
            Err(Rejection::TooNiche) => self.too_niche += 1,
            Err(Rejection::NoKnownPlatform) => self.no_known_platform += 1,
        }
    }

    /// Total records seen
    pub fn total(&self) -> usize {
        self.accepted + self.rejected()
    }

    /// Total records dropped by any filter
    pub fn rejected(&self) -> usize {
        self.missing_title
            + self.missing_release_year
            + self.too_old
            + self.too_niche
            + self.no_known_platform
    }
}

/// Leading `-`-separated segment of a release date as a year
///
/// "2016-03-24" → 2016; "2016" → 2016; "TBA" → None.
pub fn parse_release_year(released: &str) -> Option<i32> {
    released.split('-').next()?.trim().parse().ok()
}

/// Run the admission filters in order, stopping at the first failure
pub fn admit(record: &RawRecord, config: &AdmissionConfig) -> Result<Admitted, Rejection> {
    let name = record
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or(Rejection::MissingTitle)?;

    let year = record
        .released
        .as_deref()
        .and_then(parse_release_year)
        .ok_or(Rejection::MissingReleaseYear)?;

    if year < config.min_year {
        return Err(Rejection::TooOld);
    }

    if record.ratings_count < config.min_ratings_count {
        return Err(Rejection::TooNiche);
    }

    let platforms = normalize_platforms(&record.platform_names);
    if platforms.is_empty() {
        return Err(Rejection::NoKnownPlatform);
    }

    Ok(Admitted {
        name: name.to_string(),
        year,
        platforms,
    })
}

/// Classify an admitted record into a game entry
///
/// Pure: the same inputs always yield the same entry.
pub fn build_game(id: u32, admitted: Admitted, record: &RawRecord) -> Game {
    let genres = &record.genre_names;
    let tags = &record.tag_names;
    let developers = &record.developer_names;

    let flags = MultiplayerFlags::from_tags(tags);
    let esrb = classify_esrb(record.esrb_rating.as_ref(), tags);

    Game {
        id,
        franchise: detect_franchise(&admitted.name),
        franchise_entry: detect_franchise_entry(&admitted.name),
        name: admitted.name,
        year: admitted.year,
        platforms: admitted.platforms,
        genres: genres.clone(),
        main_genre: genres
            .first()
            .cloned()
            .unwrap_or_else(|| UNKNOWN_GENRE.to_string()),

        perspective: classify_perspective(genres, tags),
        world_type: classify_world_type(tags),
        camera: classify_camera(genres, tags),

        theme: classify_theme(genres, tags),
        tone: classify_tone(tags),
        difficulty: classify_difficulty(tags),
        replayability: classify_replayability(tags),

        developer_bucket: classify_developer_bucket(developers),
        developer_region: classify_developer_region(developers),

        esrb,
        age_rating: esrb_to_age(esrb),
        violence_level: classify_violence_level(tags),

        visual_style: classify_visual_style(tags),
        combat_style: classify_combat_style(tags),
        structure_features: classify_structure_features(tags),
        mood: classify_mood(tags),
        setting: classify_setting(genres, tags),
        monetization: classify_monetization(tags),

        multiplayer: flags.multiplayer,
        co_op: flags.co_op,
        online_only: flags.online_only,
        multiplayer_mode: classify_multiplayer_mode(flags, tags),

        score_bucket: bucket_score(record.metacritic),
    }
}

/// Stateful assembler owning the id counter and admission statistics
///
/// One assembler per run; ids are unique within it and follow acceptance
/// order.
#[derive(Debug, Clone)]
pub struct Assembler {
    config: AdmissionConfig,
    next_id: u32,
    stats: AdmissionStats,
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new(AdmissionConfig::default())
    }
}

impl Assembler {
    pub fn new(config: AdmissionConfig) -> Self {
        Self {
            config,
            next_id: 1,
            stats: AdmissionStats::default(),
        }
    }

    /// Admit and classify one raw payload
    ///
    /// Returns `None` for rejected records; the id counter only advances on
    /// acceptance.
    pub fn assemble(&mut self, raw: &Value) -> Option<Game> {
        let record = RawRecord::from_value(raw);

        match admit(&record, &self.config) {
            Ok(admitted) => {
                self.stats.record(Ok(()));
                let id = self.next_id;
                self.next_id += 1;
                Some(build_game(id, admitted, &record))
            }
            Err(reason) => {
                self.stats.record(Err(reason));
                debug!(
                    title = %record.name.as_deref().unwrap_or("<untitled>"),
                    %reason,
                    "Record rejected"
                );
                None
            }
        }
    }

    /// Assemble a batch, keeping accepted entries in input order
    pub fn assemble_all(&mut self, raws: &[Value]) -> Vec<Game> {
        raws.iter().filter_map(|raw| self.assemble(raw)).collect()
    }

    pub fn stats(&self) -> AdmissionStats {
        self.stats
    }
}

/// One-shot convenience: fresh assembler over a batch
pub fn transform_raw_to_games(raws: &[Value], config: AdmissionConfig) -> (Vec<Game>, AdmissionStats) {
    let mut assembler = Assembler::new(config);
    let games = assembler.assemble_all(raws);
    (games, assembler.stats())
}
