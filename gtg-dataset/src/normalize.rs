//! Normalization primitives
//!
//! - Haystack construction (lower-case + space-join of string lists)
//! - Platform canonicalization
//! - Critic score bucketing

use crate::models::{Platform, ScoreBucket};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Lower-case and space-join one or more string lists, in argument order
///
/// The result is the search target for every keyword classifier.
pub fn haystack(lists: &[&[String]]) -> String {
    lists
        .iter()
        .flat_map(|list| list.iter())
        .map(|item| item.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// True if `text` contains any of `needles`
pub fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| text.contains(needle))
}

/// Exact catalog platform names
static PLATFORM_MAP: Lazy<HashMap<&'static str, Platform>> = Lazy::new(|| {
    HashMap::from([
        ("PC", Platform::Pc),
        ("Nintendo Switch", Platform::NintendoSwitch),
        ("PlayStation 3", Platform::PlayStation),
        ("PlayStation 4", Platform::PlayStation),
        ("PlayStation 5", Platform::PlayStation),
        ("PlayStation Vita", Platform::PlayStation),
        ("Xbox 360", Platform::Xbox),
        ("Xbox One", Platform::Xbox),
        ("Xbox Series S/X", Platform::Xbox),
        ("Android", Platform::Mobile),
        ("iOS", Platform::Mobile),
    ])
});

/// Keyword fallback for names missing from `PLATFORM_MAP`
///
/// Tested in order against the lower-cased name; first match wins.
const PLATFORM_KEYWORDS: &[(fn(&str) -> bool, Platform)] = &[
    (is_pc, Platform::Pc),
    (is_playstation, Platform::PlayStation),
    (is_xbox, Platform::Xbox),
    (is_switch, Platform::NintendoSwitch),
    (is_mobile, Platform::Mobile),
];

fn is_pc(p: &str) -> bool {
    contains_any(p, &["pc", "windows"])
}

fn is_playstation(p: &str) -> bool {
    contains_any(p, &["playstation", "ps4", "ps5", "ps3", "vita"])
}

fn is_xbox(p: &str) -> bool {
    p.contains("xbox")
}

// Handhelds (DS/3DS) are not Switch
fn is_switch(p: &str) -> bool {
    p.contains("switch") || (p.contains("nintendo") && !p.contains("3ds") && !p.contains("ds"))
}

fn is_mobile(p: &str) -> bool {
    contains_any(p, &["android", "ios", "mobile"])
}

/// Canonicalize a single catalog platform name
pub fn canonical_platform(name: &str) -> Option<Platform> {
    if let Some(platform) = PLATFORM_MAP.get(name) {
        return Some(*platform);
    }

    let lower = name.to_lowercase();
    PLATFORM_KEYWORDS
        .iter()
        .find(|(matches, _)| matches(&lower))
        .map(|(_, platform)| *platform)
}

/// Map catalog platform names to canonical platforms
///
/// Order-preserving and deduplicated. Unrecognized names contribute
/// nothing, so the result may be empty.
pub fn normalize_platforms(raw_platforms: &[String]) -> Vec<Platform> {
    let mut normalized: Vec<Platform> = Vec::new();

    for platform in raw_platforms.iter().filter_map(|p| canonical_platform(p)) {
        if !normalized.contains(&platform) {
            normalized.push(platform);
        }
    }

    normalized
}

/// Place a critic score into its bucket
///
/// Lower bounds are inclusive: 90.0 → "90+", 89.99 → "80-89".
pub fn bucket_score(score: Option<f64>) -> ScoreBucket {
    match score {
        None => ScoreBucket::Unknown,
        Some(s) if s >= 90.0 => ScoreBucket::NinetyPlus,
        Some(s) if s >= 80.0 => ScoreBucket::Eighties,
        Some(s) if s >= 70.0 => ScoreBucket::Seventies,
        Some(s) if s >= 60.0 => ScoreBucket::Sixties,
        Some(_) => ScoreBucket::BelowSixty,
    }
}
