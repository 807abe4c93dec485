use std::collections::BTreeSet;

use formats::Catalog;

/// Result of a name search over the catalog.
///
/// `NoFilter` and `Matches` with an empty set are different states: the
/// former renders every point normally, the latter dims every point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HighlightSet {
    #[default]
    NoFilter,
    Matches(BTreeSet<String>),
}

impl HighlightSet {
    pub fn is_active(&self) -> bool {
        matches!(self, HighlightSet::Matches(_))
    }

    /// Whether a point named `name` renders at full strength.
    pub fn is_highlighted(&self, name: &str) -> bool {
        match self {
            HighlightSet::NoFilter => true,
            HighlightSet::Matches(names) => names.contains(name),
        }
    }

    pub fn is_dimmed(&self, name: &str) -> bool {
        !self.is_highlighted(name)
    }

    /// Number of matched names, `None` when no filter is active.
    pub fn match_count(&self) -> Option<usize> {
        match self {
            HighlightSet::NoFilter => None,
            HighlightSet::Matches(names) => Some(names.len()),
        }
    }

    pub fn as_option(&self) -> Option<&BTreeSet<String>> {
        match self {
            HighlightSet::NoFilter => None,
            HighlightSet::Matches(names) => Some(names),
        }
    }
}

/// Splits a comma-separated query into upper-cased, non-empty terms.
pub fn parse_terms(query: &str) -> Vec<String> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    query
        .split(',')
        .map(|t| t.trim().to_uppercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Exact-name search: every catalog point whose stored name equals one of
/// the query terms.
pub fn highlight(query: &str, catalog: &Catalog) -> HighlightSet {
    let terms = parse_terms(query);
    if terms.is_empty() {
        return HighlightSet::NoFilter;
    }

    let mut matches = BTreeSet::new();
    for point in catalog {
        if terms.iter().any(|t| *t == point.name) {
            matches.insert(point.name.clone());
        }
    }
    HighlightSet::Matches(matches)
}
