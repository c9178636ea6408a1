//! Raw catalog record
//!
//! Catalog payloads are loosely typed: any key may be missing, `null`, or
//! carry an unexpected JSON type. `RawRecord::from_value` flattens one
//! payload into plain Rust values, treating every such case as "absent".
//! Nothing here can fail.

use serde_json::Value;

/// Structured age rating as delivered by the catalog (`esrb_rating`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawAgeRating {
    pub name: Option<String>,
    pub slug: Option<String>,
}

/// One catalog record with absent fields normalized away
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    /// Title (`name`), untrimmed
    pub name: Option<String>,
    /// Release date string (`released`), e.g. "2016-03-24"
    pub released: Option<String>,
    /// Popularity (`ratings_count`); 0 when absent or unparsable
    pub ratings_count: i64,
    /// Non-empty platform names (`platforms[].platform.name`)
    pub platform_names: Vec<String>,
    /// Genre names (`genres[].name`)
    pub genre_names: Vec<String>,
    /// Tag names (`tags[].name`)
    pub tag_names: Vec<String>,
    /// Critic score (`metacritic`)
    pub metacritic: Option<f64>,
    /// Structured age rating (`esrb_rating`)
    pub esrb_rating: Option<RawAgeRating>,
    /// Developer names (`developers[].name`)
    pub developer_names: Vec<String>,
}

impl RawRecord {
    /// Flatten a catalog payload
    pub fn from_value(raw: &Value) -> Self {
        let platform_names = list_items(raw, "platforms")
            .filter_map(|p| p.get("platform"))
            .filter_map(|info| scalar_string(info.get("name")))
            .filter(|name| !name.is_empty())
            .collect();

        Self {
            name: scalar_string(raw.get("name")),
            released: scalar_string(raw.get("released")),
            ratings_count: lenient_count(raw.get("ratings_count")),
            platform_names,
            genre_names: names_of(raw, "genres"),
            tag_names: names_of(raw, "tags"),
            metacritic: lenient_score(raw.get("metacritic")),
            esrb_rating: raw.get("esrb_rating").and_then(age_rating),
            developer_names: names_of(raw, "developers"),
        }
    }
}

/// Elements of an array field; a missing or non-array field yields nothing
fn list_items<'a>(raw: &'a Value, key: &str) -> impl Iterator<Item = &'a Value> {
    raw.get(key)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
}

/// `[{ "name": ... }, ...]` → names, skipping entries without a name
fn names_of(raw: &Value, key: &str) -> Vec<String> {
    list_items(raw, key)
        .filter_map(|item| scalar_string(item.get("name")))
        .collect()
}

/// Scalar → string; `null`, arrays and objects count as absent
fn scalar_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Integer count from a number or numeric string, 0 otherwise
fn lenient_count(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// Float score from a number or numeric string
fn lenient_score(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Only a JSON object counts as a structured rating
fn age_rating(value: &Value) -> Option<RawAgeRating> {
    value.as_object().map(|obj| RawAgeRating {
        name: scalar_string(obj.get("name")),
        slug: scalar_string(obj.get("slug")),
    })
}
