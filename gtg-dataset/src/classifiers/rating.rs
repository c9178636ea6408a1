//! Rating classifiers: ESRB grade, age bracket, multiplayer mode

use super::{first_match, Rule};
use crate::models::{AgeRating, Esrb, MultiplayerMode, RawAgeRating};
use crate::normalize::{contains_any, haystack};

/// Phrases tested against the upper-cased concatenation `name + slug`
///
/// The single-letter forms ("E ", "T ", "M ") are loose and can match
/// unrelated text; they are kept as-is.
pub const ESRB_PHRASE_RULES: &[Rule<Esrb>] = &[
    Rule::new(&["EVERYONE 10", "E10"], Esrb::Everyone10),
    Rule::new(&["EVERYONE", "E "], Esrb::Everyone),
    Rule::new(&["TEEN", "T "], Esrb::Teen),
    Rule::new(&["MATURE", "M "], Esrb::Mature),
];

/// Tag heuristics used when the structured rating is missing or unusable
pub const ESRB_TAG_RULES: &[Rule<Esrb>] = &[
    Rule::new(
        &["gore", "gory", "blood", "brutal", "strong violence"],
        Esrb::Mature,
    ),
    Rule::new(&["horror", "violent", "violence"], Esrb::Teen),
];

const MMO_TAGS: &[&str] = &["massively multiplayer", "mmo", "mmorpg"];
const BATTLE_ROYALE_TAGS: &[&str] = &["battle royale"];
const PVP_TAGS: &[&str] = &["online pvp", "pvp"];
const LOCAL_COOP_TAGS: &[&str] = &["local co-op", "splitscreen", "split screen"];

/// Multiplayer booleans derived from tag presence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MultiplayerFlags {
    pub multiplayer: bool,
    pub co_op: bool,
    pub online_only: bool,
}

impl MultiplayerFlags {
    /// Independent, non-exclusive tag tests
    pub fn from_tags(tags: &[String]) -> Self {
        let joined = haystack(&[tags]);
        Self {
            multiplayer: contains_any(&joined, &["multiplayer", "online co-op", "online pvp"]),
            co_op: contains_any(&joined, &["co-op", "cooperative"]),
            online_only: joined.contains("online only"),
        }
    }
}

/// ESRB grade from the structured rating, falling back to tags
pub fn classify_esrb(raw_esrb: Option<&RawAgeRating>, tags: &[String]) -> Esrb {
    if let Some(rating) = raw_esrb {
        let text = format!(
            "{}{}",
            rating.name.as_deref().unwrap_or(""),
            rating.slug.as_deref().unwrap_or("")
        )
        .to_uppercase();

        if let Some(rule) = ESRB_PHRASE_RULES.iter().find(|rule| rule.matches(&text)) {
            return rule.label;
        }
    }

    first_match(&haystack(&[tags]), ESRB_TAG_RULES, Esrb::Unknown)
}

/// Fixed ESRB → age bracket mapping
pub fn esrb_to_age(esrb: Esrb) -> AgeRating {
    match esrb {
        Esrb::Everyone => AgeRating::ThreePlus,
        Esrb::Everyone10 => AgeRating::SevenPlus,
        Esrb::Teen => AgeRating::TwelvePlus,
        Esrb::Mature => AgeRating::SixteenPlus,
        Esrb::Unknown => AgeRating::Unknown,
    }
}

/// Multiplayer mode from the flags plus tag evidence
///
/// Without multiplayer or co-op the game is single-player and tags are not
/// consulted.
pub fn classify_multiplayer_mode(flags: MultiplayerFlags, tags: &[String]) -> MultiplayerMode {
    if !flags.multiplayer && !flags.co_op {
        return MultiplayerMode::Singleplayer;
    }

    let joined = haystack(&[tags]);

    if contains_any(&joined, MMO_TAGS) {
        return MultiplayerMode::Mmo;
    }
    if contains_any(&joined, BATTLE_ROYALE_TAGS) {
        return MultiplayerMode::BattleRoyale;
    }
    if contains_any(&joined, PVP_TAGS) {
        return MultiplayerMode::CompetitiveOnline;
    }
    if flags.co_op {
        if contains_any(&joined, LOCAL_COOP_TAGS) {
            return MultiplayerMode::LocalCoop;
        }
        return MultiplayerMode::OnlineCoop;
    }
    if flags.multiplayer {
        return MultiplayerMode::MultiplayerMixed;
    }

    MultiplayerMode::Unknown
}
