//! Integration tests for record admission and end-to-end classification

use gtg_common::config::AdmissionConfig;
use gtg_dataset::assembler::{transform_raw_to_games, Assembler};
use gtg_dataset::models::*;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn dark_souls_iii() -> Value {
    json!({
        "name": "Dark Souls III",
        "released": "2016-03-24",
        "ratings_count": 3500,
        "metacritic": 89,
        "platforms": [
            {"platform": {"name": "PC"}},
            {"platform": {"name": "PlayStation 4"}},
            {"platform": {"name": "Xbox One"}}
        ],
        "genres": [{"name": "Action"}, {"name": "RPG"}],
        "tags": [
            {"name": "Dark Fantasy"},
            {"name": "Souls-like"},
            {"name": "Difficult"},
            {"name": "Third Person"},
            {"name": "Atmospheric"},
            {"name": "Online Co-Op"},
            {"name": "Online PvP"},
            {"name": "Gore"}
        ],
        "esrb_rating": {"name": "Mature", "slug": "mature"},
        "developers": [{"name": "FromSoftware"}]
    })
}

fn minimal(name: &str, ratings_count: i64, platforms: &[&str]) -> Value {
    let platforms: Vec<Value> = platforms
        .iter()
        .map(|p| json!({"platform": {"name": p}}))
        .collect();
    json!({
        "name": name,
        "released": "2020-06-01",
        "ratings_count": ratings_count,
        "platforms": platforms
    })
}

#[test]
fn test_dark_souls_iii_end_to_end() {
    let game = Assembler::default()
        .assemble(&dark_souls_iii())
        .expect("Dark Souls III should be admitted");

    assert_eq!(game.id, 1);
    assert_eq!(game.name, "Dark Souls III");
    assert_eq!(game.year, 2016);
    assert_eq!(
        game.platforms,
        vec![Platform::Pc, Platform::PlayStation, Platform::Xbox]
    );
    assert_eq!(game.main_genre, "Action");

    assert_eq!(game.theme, Theme::Fantasy);
    assert_eq!(game.difficulty, Difficulty::SoulsLike);
    assert_eq!(game.camera, Camera::ThirdPerson);
    assert_eq!(game.perspective, game.camera);
    assert_eq!(game.tone, vec![Tone::Dark]);
    assert_eq!(game.mood, vec![Mood::Atmospheric]);

    assert_eq!(game.developer_bucket, DeveloperBucket::FromSoftware);
    assert_eq!(game.developer_region, DeveloperRegion::Japan);
    assert_eq!(game.franchise, Franchise::Soulsborne);
    assert_eq!(game.franchise_entry, "III");

    assert_eq!(game.esrb, Esrb::Mature);
    assert_eq!(game.age_rating, AgeRating::SixteenPlus);
    assert_eq!(game.violence_level, ViolenceLevel::High);

    assert!(game.multiplayer);
    assert!(game.co_op);
    assert!(!game.online_only);
    assert_eq!(game.multiplayer_mode, MultiplayerMode::CompetitiveOnline);

    assert_eq!(game.score_bucket, ScoreBucket::Eighties);
}

#[test]
fn test_dark_souls_iii_minimal_record() {
    let raw = json!({
        "name": "Dark Souls III",
        "released": "2016-03-24",
        "ratings_count": 5000,
        "platforms": [{"platform": {"name": "PC"}}],
        "genres": [{"name": "Action RPG"}],
        "tags": [{"name": "Souls-like"}, {"name": "Dark Fantasy"}],
        "developers": [{"name": "FromSoftware"}],
        "metacritic": 89
    });

    let game = Assembler::default()
        .assemble(&raw)
        .expect("Dark Souls III should be admitted");

    assert_eq!(game.theme, Theme::Fantasy);
    assert_eq!(game.difficulty, Difficulty::SoulsLike);
    assert_eq!(game.developer_bucket, DeveloperBucket::FromSoftware);
    assert_eq!(game.developer_region, DeveloperRegion::Japan);
    assert_eq!(game.franchise, Franchise::Soulsborne);
    assert_eq!(game.franchise_entry, "III");
    assert_eq!(game.score_bucket, ScoreBucket::Eighties);

    assert_eq!(game.platforms, vec![Platform::Pc]);
    assert_eq!(game.main_genre, "Action RPG");
    assert_eq!(game.esrb, Esrb::Unknown);
    assert_eq!(game.multiplayer_mode, MultiplayerMode::Singleplayer);
}

#[test]
fn test_dark_souls_iii_serialized_labels() {
    let game = Assembler::default().assemble(&dark_souls_iii()).unwrap();
    let value = serde_json::to_value(&game).unwrap();

    assert_eq!(value["theme"], "Fantasy");
    assert_eq!(value["difficulty"], "Souls-like");
    assert_eq!(value["platforms"], json!(["PC", "PlayStation", "Xbox"]));
    assert_eq!(value["esrb"], "M");
    assert_eq!(value["age_rating"], "16+");
    assert_eq!(value["score_bucket"], "80-89");
    assert_eq!(value["franchise"], "Soulsborne");
}

#[test]
fn test_popularity_boundary() {
    let (games, stats) = transform_raw_to_games(
        &[minimal("Niche", 499, &["PC"]), minimal("Popular", 500, &["PC"])],
        AdmissionConfig::default(),
    );

    assert_eq!(games.len(), 1);
    assert_eq!(games[0].name, "Popular");
    assert_eq!(games[0].id, 1);
    assert_eq!(stats.too_niche, 1);
    assert_eq!(stats.accepted, 1);
}

#[test]
fn test_unrecognized_platform_only() {
    let (games, stats) = transform_raw_to_games(
        &[minimal("Retro Port", 5000, &["Dreamcast", "Atari 2600"])],
        AdmissionConfig::default(),
    );

    assert!(games.is_empty());
    assert_eq!(stats.no_known_platform, 1);
}

#[test]
fn test_malformed_fields_are_tolerated() {
    let raw = json!({
        "name": "Odd Payload",
        "released": "2019-02-02",
        "ratings_count": "lots",
        "platforms": "PC",
        "genres": null,
        "tags": [42, {"name": null}, {"name": "Pixel Graphics"}],
        "metacritic": "n/a",
        "esrb_rating": "M",
        "developers": {"name": "Someone"}
    });

    // ratings_count unparsable counts as 0
    let config = AdmissionConfig {
        min_ratings_count: 0,
        ..AdmissionConfig::default()
    };
    let (games, stats) = transform_raw_to_games(&[raw], config);

    // platforms is not a list, so nothing maps
    assert!(games.is_empty());
    assert_eq!(stats.no_known_platform, 1);
}

#[test]
fn test_custom_thresholds() {
    let config = AdmissionConfig {
        min_year: 2021,
        min_ratings_count: 10,
    };
    let (games, stats) = transform_raw_to_games(
        &[minimal("Before", 50, &["PC"]), {
            let mut late = minimal("After", 50, &["iOS"]);
            late["released"] = json!("2022-01-01");
            late
        }],
        config,
    );

    assert_eq!(games.len(), 1);
    assert_eq!(games[0].name, "After");
    assert_eq!(games[0].platforms, vec![Platform::Mobile]);
    assert_eq!(stats.too_old, 1);
}

#[test]
fn test_assembly_is_idempotent_except_id() {
    let mut assembler = Assembler::default();
    let first = assembler.assemble(&dark_souls_iii()).unwrap();
    let second = assembler.assemble(&dark_souls_iii()).unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(Game { id: 0, ..first }, Game { id: 0, ..second });
}

#[test]
fn test_multi_label_fields_never_empty() {
    let raws = vec![
        dark_souls_iii(),
        minimal("Bare", 600, &["PC"]),
        json!({
            "name": "Stardew-ish",
            "released": "2016-02-26",
            "ratings_count": 900,
            "platforms": [{"platform": {"name": "Nintendo Switch"}}],
            "tags": [
                {"name": "Relaxing"}, {"name": "Pixel Graphics"},
                {"name": "Crafting"}, {"name": "Cute"}, {"name": "Farming"}
            ]
        }),
    ];
    let (games, _) = transform_raw_to_games(&raws, AdmissionConfig::default());
    assert_eq!(games.len(), 3);

    for game in &games {
        assert!(!game.tone.is_empty(), "{}: tone", game.name);
        assert!(!game.visual_style.is_empty(), "{}: visual_style", game.name);
        assert!(!game.combat_style.is_empty(), "{}: combat_style", game.name);
        assert!(!game.structure_features.is_empty(), "{}: structure", game.name);
        assert!(!game.mood.is_empty(), "{}: mood", game.name);
        assert!(!game.setting.is_empty(), "{}: setting", game.name);
        assert!(!game.monetization.is_empty(), "{}: monetization", game.name);
    }

    let bare = &games[1];
    assert_eq!(bare.tone, vec![Tone::Neutral]);
    assert_eq!(bare.visual_style, vec![VisualStyle::Unspecified]);
    assert_eq!(bare.monetization, vec![Monetization::PaidStandard]);
    assert_eq!(bare.setting, vec![Setting::UnspecifiedMixed]);
    assert_eq!(bare.multiplayer_mode, MultiplayerMode::Singleplayer);
    assert_eq!(bare.score_bucket, ScoreBucket::Unknown);
    assert_eq!(bare.esrb, Esrb::Unknown);
    assert_eq!(bare.franchise, Franchise::StandaloneOther);
    assert_eq!(bare.franchise_entry, "Unknown");

    let cozy = &games[2];
    assert_eq!(cozy.difficulty, Difficulty::Easy);
    assert_eq!(cozy.tone, vec![Tone::Wholesome, Tone::Cute]);
    assert_eq!(cozy.visual_style, vec![VisualStyle::PixelArt]);
    assert_eq!(cozy.structure_features, vec![StructureFeature::Crafting]);
}

#[test]
fn test_single_labels_stay_in_vocabulary() {
    let (games, _) = transform_raw_to_games(
        &[dark_souls_iii(), minimal("Bare", 600, &["PC"])],
        AdmissionConfig::default(),
    );

    for game in &games {
        assert!(Theme::ALL.contains(&game.theme));
        assert!(Camera::ALL.contains(&game.camera));
        assert!(WorldType::ALL.contains(&game.world_type));
        assert!(Difficulty::ALL.contains(&game.difficulty));
        assert!(Replayability::ALL.contains(&game.replayability));
        assert!(DeveloperBucket::ALL.contains(&game.developer_bucket));
        assert!(DeveloperRegion::ALL.contains(&game.developer_region));
        assert!(Esrb::ALL.contains(&game.esrb));
        assert!(AgeRating::ALL.contains(&game.age_rating));
        assert!(ViolenceLevel::ALL.contains(&game.violence_level));
        assert!(MultiplayerMode::ALL.contains(&game.multiplayer_mode));
        assert!(ScoreBucket::ALL.contains(&game.score_bucket));
    }
}
