//! Canonical game entry
//!
//! One `Game` per accepted catalog record. Field names are the dataset
//! contract: the quiz backend reads `games.json` by these exact keys.

use super::labels::{
    AgeRating, Camera, CombatStyle, DeveloperBucket, DeveloperRegion, Difficulty, Esrb,
    Franchise, Monetization, Mood, MultiplayerMode, Platform, Replayability, ScoreBucket,
    Setting, StructureFeature, Theme, Tone, ViolenceLevel, VisualStyle, WorldType,
};
use serde::{Deserialize, Serialize};

/// Fully classified game entry
///
/// Built once by the assembler and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    /// Sequential id (1-based, acceptance order)
    pub id: u32,
    pub name: String,
    /// Release year
    pub year: i32,
    /// Never empty
    pub platforms: Vec<Platform>,
    pub genres: Vec<String>,
    /// First genre, or "Unknown"
    pub main_genre: String,

    pub perspective: Camera,
    pub world_type: WorldType,
    pub camera: Camera,

    pub theme: Theme,
    pub tone: Vec<Tone>,
    pub difficulty: Difficulty,
    pub replayability: Replayability,

    pub developer_bucket: DeveloperBucket,
    pub developer_region: DeveloperRegion,
    pub franchise: Franchise,
    /// "2", "2042", "VII" or "Unknown"
    pub franchise_entry: String,

    pub esrb: Esrb,
    pub age_rating: AgeRating,
    pub violence_level: ViolenceLevel,

    pub visual_style: Vec<VisualStyle>,
    pub combat_style: Vec<CombatStyle>,
    pub structure_features: Vec<StructureFeature>,
    pub mood: Vec<Mood>,
    pub setting: Vec<Setting>,
    pub monetization: Vec<Monetization>,

    pub multiplayer: bool,
    pub co_op: bool,
    pub online_only: bool,
    pub multiplayer_mode: MultiplayerMode,

    pub score_bucket: ScoreBucket,
}
