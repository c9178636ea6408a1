//! Rule-based classifiers
//!
//! Every classifier is a pure function over already-extracted string lists.
//! Rules are ordered tables of `(keywords → label)` evaluated against a
//! lower-cased haystack with substring containment:
//!
//! - **Single-label**: first matching rule wins, otherwise a named default
//!   ([`first_match`]).
//! - **Multi-label**: every matching rule contributes its label in declared
//!   order; an empty result is replaced by a fallback label
//!   ([`collect_labels`]).
//!
//! Table order is priority. Tests pin each table's ordering quirks.

pub mod attributes;
pub mod identity;
pub mod rating;

pub use attributes::*;
pub use identity::*;
pub use rating::*;

use crate::normalize::contains_any;

/// One keyword rule: fires when the haystack contains any keyword
#[derive(Debug, Clone, Copy)]
pub struct Rule<L> {
    pub keywords: &'static [&'static str],
    pub label: L,
}

impl<L> Rule<L> {
    pub const fn new(keywords: &'static [&'static str], label: L) -> Self {
        Self { keywords, label }
    }

    /// True if any keyword occurs in `haystack`
    pub fn matches(&self, haystack: &str) -> bool {
        contains_any(haystack, self.keywords)
    }
}

/// Label of the first rule matching `haystack`, or `default`
pub fn first_match<L: Copy>(haystack: &str, rules: &[Rule<L>], default: L) -> L {
    rules
        .iter()
        .find(|rule| rule.matches(haystack))
        .map(|rule| rule.label)
        .unwrap_or(default)
}

/// Labels of all rules matching `haystack`, in table order
///
/// Never empty: `[fallback]` when nothing fires.
pub fn collect_labels<L: Copy>(haystack: &str, rules: &[Rule<L>], fallback: L) -> Vec<L> {
    let labels: Vec<L> = rules
        .iter()
        .filter(|rule| rule.matches(haystack))
        .map(|rule| rule.label)
        .collect();

    if labels.is_empty() {
        vec![fallback]
    } else {
        labels
    }
}
