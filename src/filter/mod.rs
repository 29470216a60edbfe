//! Filter engine — pure projection of the secret collection.
//!
//! `project` combines the search query and the type filter into a single
//! pass over the collection. It owns no state and touches no I/O; the
//! store calls it on every query, filter, or reload event.

use std::fmt;

use crate::api::{SecretSummary, SecretType};
use crate::errors::{Result, VaultLinkError};

/// Category filter for the list view. `All` passes every item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(SecretType),
}

impl TypeFilter {
    /// Parse a filter name as typed on the command line.
    pub fn parse(name: &str) -> Result<Self> {
        if name.eq_ignore_ascii_case("all") {
            return Ok(TypeFilter::All);
        }
        SecretType::parse(name)
            .map(TypeFilter::Only)
            .ok_or_else(|| {
                VaultLinkError::Validation(format!(
                    "unknown type '{name}' — supported: all, password, token, note"
                ))
            })
    }

    fn matches(self, kind: SecretType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(only) => only == kind,
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeFilter::All => f.write_str("all"),
            TypeFilter::Only(kind) => f.write_str(kind.as_str()),
        }
    }
}

/// Project the collection through the query and the type filter.
///
/// An item is retained iff its label contains `query` (case-insensitive
/// substring) AND its type passes `filter`. An empty query matches
/// everything. Relative order of the input is preserved; nothing is
/// sorted or deduplicated.
pub fn project(
    collection: &[SecretSummary],
    query: &str,
    filter: TypeFilter,
) -> Vec<SecretSummary> {
    let needle = query.to_lowercase();

    collection
        .iter()
        .filter(|s| filter.matches(s.kind))
        .filter(|s| needle.is_empty() || s.label.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(id: &str, label: &str, kind: SecretType) -> SecretSummary {
        SecretSummary {
            id: id.to_string(),
            label: label.to_string(),
            kind,
            creation_time: 1_700_000_000,
            update_time: 1_700_000_000,
        }
    }

    fn sample() -> Vec<SecretSummary> {
        vec![
            secret("1", "GitHub", SecretType::Password),
            secret("2", "Bank", SecretType::Password),
            secret("3", "API gateway", SecretType::Token),
            secret("4", "Shopping list", SecretType::Note),
        ]
    }

    #[test]
    fn empty_query_and_all_filter_is_identity() {
        let c = sample();
        assert_eq!(project(&c, "", TypeFilter::All), c);
    }

    #[test]
    fn query_narrows_never_adds() {
        let c = sample();
        let unfiltered = project(&c, "", TypeFilter::All);
        for q in ["git", "a", "zzz", "Bank"] {
            let narrowed = project(&c, q, TypeFilter::All);
            assert!(narrowed.iter().all(|s| unfiltered.contains(s)));
            assert!(narrowed.len() <= unfiltered.len());
        }
    }

    #[test]
    fn projection_is_idempotent() {
        let c = sample();
        let once = project(&c, "a", TypeFilter::Only(SecretType::Password));
        let twice = project(&once, "a", TypeFilter::Only(SecretType::Password));
        assert_eq!(once, twice);
    }

    #[test]
    fn query_is_case_insensitive_substring() {
        let c = sample();
        let hits = project(&c, "git", TypeFilter::All);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].label, "GitHub");

        let hits = project(&c, "GATEWAY", TypeFilter::All);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].label, "API gateway");
    }

    #[test]
    fn filter_and_query_are_conjunctive() {
        let c = sample();
        // "a" matches Bank, API gateway, and Shopping list; only one is a token.
        let hits = project(&c, "a", TypeFilter::Only(SecretType::Token));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].label, "API gateway");
    }

    #[test]
    fn type_filter_alone_retains_matching_kinds() {
        let c = sample();
        let hits = project(&c, "", TypeFilter::Only(SecretType::Password));
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|s| s.kind == SecretType::Password));
    }

    #[test]
    fn order_is_preserved() {
        let c = sample();
        let hits = project(&c, "a", TypeFilter::All);
        let labels: Vec<&str> = hits.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["Bank", "API gateway", "Shopping list"]);
    }

    #[test]
    fn parse_accepts_all_and_known_types() {
        assert_eq!(TypeFilter::parse("all").unwrap(), TypeFilter::All);
        assert_eq!(TypeFilter::parse("All").unwrap(), TypeFilter::All);
        assert_eq!(
            TypeFilter::parse("note").unwrap(),
            TypeFilter::Only(SecretType::Note)
        );
    }

    #[test]
    fn parse_rejects_unknown_type() {
        assert!(TypeFilter::parse("ssh-key").is_err());
        assert!(TypeFilter::parse("").is_err());
    }
}
