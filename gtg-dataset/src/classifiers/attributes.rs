//! Attribute classifiers
//!
//! Thirteen independent keyword classifiers over genre and tag names.
//! Theme, camera/perspective and setting read genres + tags; all others
//! read tags only.

use super::{collect_labels, first_match, Rule};
use crate::models::{
    Camera, CombatStyle, Difficulty, Monetization, Mood, Replayability, Setting,
    StructureFeature, Theme, Tone, ViolenceLevel, VisualStyle, WorldType,
};
use crate::normalize::haystack;

// ============================================================================
// Rule tables
// ============================================================================

pub const THEME_RULES: &[Rule<Theme>] = &[
    Rule::new(&["horror", "zombie", "lovecraftian"], Theme::Horror),
    Rule::new(
        &["post-apocalyptic", "post apocalypse", "nuclear", "wasteland"],
        Theme::PostApocalyptic,
    ),
    Rule::new(
        &["sci-fi", "science fiction", "space", "cyberpunk", "futuristic"],
        Theme::SciFi,
    ),
    Rule::new(&["fantasy", "dragon", "magic", "medieval"], Theme::Fantasy),
    Rule::new(&["ww2", "world war", "historical", "wwii"], Theme::Historical),
];

pub const TONE_RULES: &[Rule<Tone>] = &[
    Rule::new(&["dark", "grim", "gothic"], Tone::Dark),
    Rule::new(&["wholesome", "relaxing", "cozy"], Tone::Wholesome),
    Rule::new(&["comedy", "funny", "humor"], Tone::Comedic),
    Rule::new(&["emotional", "story rich", "narrative"], Tone::Emotional),
    Rule::new(&["cute", "kawaii"], Tone::Cute),
];

pub const WORLD_TYPE_RULES: &[Rule<WorldType>] = &[
    Rule::new(&["open world", "sandbox"], WorldType::OpenWorld),
    Rule::new(&["metroidvania"], WorldType::Metroidvania),
    Rule::new(&["roguelike", "roguelite", "rogue-lite"], WorldType::LevelBased),
    Rule::new(&["hub world", "hub-based"], WorldType::HubBased),
];

/// Third person is checked before first person on purpose
pub const CAMERA_RULES: &[Rule<Camera>] = &[
    Rule::new(&["third-person", "third person", "tps"], Camera::ThirdPerson),
    Rule::new(&["first-person", "first person", "fps"], Camera::FirstPerson),
    Rule::new(&["isometric"], Camera::Isometric),
    Rule::new(&["top-down", "top down"], Camera::TopDown),
    Rule::new(&["side-scroller", "side scroller", "2d platformer"], Camera::Side),
];

pub const DIFFICULTY_RULES: &[Rule<Difficulty>] = &[
    Rule::new(&["souls-like", "soulslike"], Difficulty::SoulsLike),
    Rule::new(&["difficult", "hard", "challenging"], Difficulty::Hard),
    Rule::new(&["casual", "relaxing"], Difficulty::Easy),
];

pub const REPLAYABILITY_RULES: &[Rule<Replayability>] = &[
    Rule::new(
        &[
            "roguelike",
            "roguelite",
            "procedural generation",
            "procedurally generated",
        ],
        Replayability::Roguelike,
    ),
    Rule::new(
        &["replay value", "replayable", "multiple endings", "choices matter"],
        Replayability::High,
    ),
];

pub const VISUAL_STYLE_RULES: &[Rule<VisualStyle>] = &[
    Rule::new(&["pixel graphics", "pixel art"], VisualStyle::PixelArt),
    Rule::new(&["retro"], VisualStyle::Retro),
    Rule::new(&["anime"], VisualStyle::Anime),
    Rule::new(&["realistic"], VisualStyle::Realistic),
    Rule::new(&["cartoon", "cartoony"], VisualStyle::Cartoon),
    Rule::new(&["stylized"], VisualStyle::Stylized),
    Rule::new(&["low poly"], VisualStyle::LowPoly),
    Rule::new(&["minimalist"], VisualStyle::Minimalist),
];

pub const COMBAT_STYLE_RULES: &[Rule<CombatStyle>] = &[
    Rule::new(&["melee", "hand-to-hand", "sword", "swords"], CombatStyle::Melee),
    Rule::new(&["gun", "guns", "shooter", "sniper", "fps"], CombatStyle::Guns),
    Rule::new(&["magic", "spell", "wizard", "mage"], CombatStyle::Magic),
    Rule::new(&["stealth", "sneak"], CombatStyle::Stealth),
    Rule::new(&["strategy", "tactical", "turn-based"], CombatStyle::Tactical),
];

pub const STRUCTURE_FEATURE_RULES: &[Rule<StructureFeature>] = &[
    Rule::new(&["crafting"], StructureFeature::Crafting),
    Rule::new(&["survival"], StructureFeature::Survival),
    Rule::new(&["skill tree", "character progression"], StructureFeature::SkillTree),
    Rule::new(&["loot", "loot-based"], StructureFeature::Loot),
    Rule::new(
        &["base building", "building", "colony sim"],
        StructureFeature::BaseBuilding,
    ),
    Rule::new(
        &["procedural generation", "procedurally generated"],
        StructureFeature::ProceduralGeneration,
    ),
    Rule::new(
        &["choices matter", "multiple endings"],
        StructureFeature::BranchingStory,
    ),
];

pub const MOOD_RULES: &[Rule<Mood>] = &[
    Rule::new(&["atmospheric"], Mood::Atmospheric),
    Rule::new(&["psychological"], Mood::Psychological),
    Rule::new(&["mystery"], Mood::Mysterious),
    Rule::new(&["thriller"], Mood::Thrilling),
    Rule::new(&["story rich", "narrative"], Mood::StoryDriven),
    Rule::new(&["relaxing", "wholesome", "cozy"], Mood::Relaxing),
];

pub const SETTING_RULES: &[Rule<Setting>] = &[
    Rule::new(&["space", "planet"], Setting::Space),
    Rule::new(&["underwater", "ocean", "sea"], Setting::Underwater),
    Rule::new(&["city", "urban", "cyberpunk"], Setting::Urban),
    Rule::new(&["desert", "wasteland"], Setting::DesertWasteland),
    Rule::new(&["island"], Setting::Island),
    Rule::new(&["forest", "jungle", "wilderness"], Setting::Wilderness),
    Rule::new(&["medieval", "castle"], Setting::Medieval),
    Rule::new(&["post-apocalyptic", "post apocalypse"], Setting::PostApocalyptic),
];

pub const VIOLENCE_RULES: &[Rule<ViolenceLevel>] = &[
    Rule::new(&["gore", "gory", "blood", "brutal"], ViolenceLevel::High),
    Rule::new(
        &["violent", "violence", "combat", "shooter"],
        ViolenceLevel::Medium,
    ),
    Rule::new(&["non-violent", "peaceful"], ViolenceLevel::Low),
];

pub const MONETIZATION_RULES: &[Rule<Monetization>] = &[
    Rule::new(&["free to play", "free-to-play"], Monetization::FreeToPlay),
    Rule::new(
        &["in-app purchases", "microtransactions", "in app purchases"],
        Monetization::Microtransactions,
    ),
    Rule::new(&["dlc"], Monetization::DlcHeavy),
    Rule::new(&["season pass", "battle pass"], Monetization::Seasonal),
];

// ============================================================================
// Single-label classifiers
// ============================================================================

pub fn classify_theme(genres: &[String], tags: &[String]) -> Theme {
    first_match(&haystack(&[genres, tags]), THEME_RULES, Theme::ModernOther)
}

pub fn classify_world_type(tags: &[String]) -> WorldType {
    first_match(&haystack(&[tags]), WORLD_TYPE_RULES, WorldType::LinearMixed)
}

/// Camera style; third person wins when both persons are tagged
pub fn classify_camera(genres: &[String], tags: &[String]) -> Camera {
    first_match(&haystack(&[genres, tags]), CAMERA_RULES, Camera::Unknown)
}

/// Perspective mirrors the camera classification
pub fn classify_perspective(genres: &[String], tags: &[String]) -> Camera {
    classify_camera(genres, tags)
}

pub fn classify_difficulty(tags: &[String]) -> Difficulty {
    first_match(&haystack(&[tags]), DIFFICULTY_RULES, Difficulty::NormalUnknown)
}

pub fn classify_replayability(tags: &[String]) -> Replayability {
    first_match(
        &haystack(&[tags]),
        REPLAYABILITY_RULES,
        Replayability::MediumLowUnknown,
    )
}

pub fn classify_violence_level(tags: &[String]) -> ViolenceLevel {
    first_match(&haystack(&[tags]), VIOLENCE_RULES, ViolenceLevel::UnknownVaries)
}

// ============================================================================
// Multi-label classifiers (never empty)
// ============================================================================

pub fn classify_tone(tags: &[String]) -> Vec<Tone> {
    collect_labels(&haystack(&[tags]), TONE_RULES, Tone::Neutral)
}

pub fn classify_visual_style(tags: &[String]) -> Vec<VisualStyle> {
    collect_labels(&haystack(&[tags]), VISUAL_STYLE_RULES, VisualStyle::Unspecified)
}

pub fn classify_combat_style(tags: &[String]) -> Vec<CombatStyle> {
    collect_labels(&haystack(&[tags]), COMBAT_STYLE_RULES, CombatStyle::Unspecified)
}

pub fn classify_structure_features(tags: &[String]) -> Vec<StructureFeature> {
    collect_labels(
        &haystack(&[tags]),
        STRUCTURE_FEATURE_RULES,
        StructureFeature::NoneStandard,
    )
}

pub fn classify_mood(tags: &[String]) -> Vec<Mood> {
    collect_labels(&haystack(&[tags]), MOOD_RULES, Mood::Neutral)
}

pub fn classify_setting(genres: &[String], tags: &[String]) -> Vec<Setting> {
    collect_labels(
        &haystack(&[genres, tags]),
        SETTING_RULES,
        Setting::UnspecifiedMixed,
    )
}

pub fn classify_monetization(tags: &[String]) -> Vec<Monetization> {
    collect_labels(
        &haystack(&[tags]),
        MONETIZATION_RULES,
        Monetization::PaidStandard,
    )
}
