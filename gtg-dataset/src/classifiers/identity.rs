//! Identity classifiers: studio bucket, studio region, franchise, entry
//!
//! Developer rules run against the lower-cased, space-joined developer
//! names; franchise rules against the lower-cased title.

use super::{first_match, Rule};
use crate::models::{DeveloperBucket, DeveloperRegion, Franchise};
use crate::normalize::{contains_any, haystack};
use once_cell::sync::Lazy;
use regex::Regex;

/// Label used when no sequel numeral is found
pub const UNKNOWN_ENTRY: &str = "Unknown";

pub const DEVELOPER_BUCKET_RULES: &[Rule<DeveloperBucket>] = &[
    Rule::new(&["fromsoftware"], DeveloperBucket::FromSoftware),
    Rule::new(&["rockstar"], DeveloperBucket::Rockstar),
    Rule::new(&["ubisoft"], DeveloperBucket::Ubisoft),
    Rule::new(&["electronic arts", "ea ", " ea"], DeveloperBucket::Ea),
    Rule::new(&["nintendo"], DeveloperBucket::Nintendo),
    Rule::new(&["square enix", "squaresoft"], DeveloperBucket::SquareEnix),
    Rule::new(&["capcom"], DeveloperBucket::Capcom),
    Rule::new(&["cd projekt"], DeveloperBucket::CdProjekt),
    Rule::new(&["bethesda"], DeveloperBucket::Bethesda),
];

/// Groups overlap textually; the first declared group is reported
pub const DEVELOPER_REGION_RULES: &[Rule<DeveloperRegion>] = &[
    Rule::new(
        &["fromsoftware", "capcom", "square enix", "nintendo", "bandai namco"],
        DeveloperRegion::Japan,
    ),
    Rule::new(&["ubisoft", "cd projekt", "larian"], DeveloperRegion::Europe),
    Rule::new(
        &["rockstar", "bethesda", "electronic arts", " ea"],
        DeveloperRegion::NorthAmerica,
    ),
];

/// Franchise rule: title contains any phrase, or starts with any prefix
struct FranchiseRule {
    contains: &'static [&'static str],
    starts_with: &'static [&'static str],
    franchise: Franchise,
}

impl FranchiseRule {
    fn matches(&self, title: &str) -> bool {
        contains_any(title, self.contains)
            || self.starts_with.iter().any(|prefix| title.starts_with(prefix))
    }
}

const FRANCHISE_RULES: &[FranchiseRule] = &[
    FranchiseRule {
        contains: &["grand theft auto", "gta "],
        starts_with: &[],
        franchise: Franchise::GrandTheftAuto,
    },
    FranchiseRule {
        contains: &["call of duty"],
        starts_with: &[],
        franchise: Franchise::CallOfDuty,
    },
    FranchiseRule {
        contains: &["assassin's creed", "assassins creed"],
        starts_with: &[],
        franchise: Franchise::AssassinsCreed,
    },
    FranchiseRule {
        contains: &[
            "dark souls",
            "demon's souls",
            "demons souls",
            "bloodborne",
            "elden ring",
            "sekiro",
        ],
        starts_with: &[],
        franchise: Franchise::Soulsborne,
    },
    FranchiseRule {
        contains: &["resident evil"],
        starts_with: &[],
        franchise: Franchise::ResidentEvil,
    },
    FranchiseRule {
        contains: &["battlefield"],
        starts_with: &[],
        franchise: Franchise::Battlefield,
    },
    FranchiseRule {
        contains: &["the legend of zelda"],
        starts_with: &["zelda"],
        franchise: Franchise::Zelda,
    },
    FranchiseRule {
        contains: &["final fantasy"],
        starts_with: &[],
        franchise: Franchise::FinalFantasy,
    },
    FranchiseRule {
        contains: &["far cry"],
        starts_with: &[],
        franchise: Franchise::FarCry,
    },
    FranchiseRule {
        contains: &["halo"],
        starts_with: &[],
        franchise: Franchise::Halo,
    },
    FranchiseRule {
        contains: &["forza"],
        starts_with: &[],
        franchise: Franchise::Forza,
    },
    FranchiseRule {
        contains: &["fifa", "ea sports fc"],
        starts_with: &[],
        franchise: Franchise::FifaEaFc,
    },
];

static TRAILING_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)$").expect("Invalid regex"));

static ROMAN_NUMERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[ivx]+$").expect("Invalid regex"));

pub fn classify_developer_bucket(developers: &[String]) -> DeveloperBucket {
    first_match(
        &haystack(&[developers]),
        DEVELOPER_BUCKET_RULES,
        DeveloperBucket::IndieOther,
    )
}

pub fn classify_developer_region(developers: &[String]) -> DeveloperRegion {
    first_match(
        &haystack(&[developers]),
        DEVELOPER_REGION_RULES,
        DeveloperRegion::UnknownVarious,
    )
}

/// Franchise from title phrases, first match wins
pub fn detect_franchise(name: &str) -> Franchise {
    let title = name.to_lowercase();
    FRANCHISE_RULES
        .iter()
        .find(|rule| rule.matches(&title))
        .map(|rule| rule.franchise)
        .unwrap_or(Franchise::StandaloneOther)
}

/// Sequel numeral from the last word of the title
///
/// Trailing digits ("Battlefield 2042" → "2042") take precedence over an
/// all-`[ivx]` word ("Final Fantasy VII" → "VII"). Syntactic only: any
/// title without such a last word yields "Unknown".
pub fn detect_franchise_entry(name: &str) -> String {
    let Some(last) = name.split_whitespace().last() else {
        return UNKNOWN_ENTRY.to_string();
    };

    if let Some(caps) = TRAILING_NUMBER.captures(last) {
        return caps[1].to_string();
    }

    if ROMAN_NUMERAL.is_match(last) {
        return last.to_uppercase();
    }

    UNKNOWN_ENTRY.to_string()
}
