//! Filtering and free-text search over catalogue terms.
//!
//! Every function takes and returns borrowed terms in their incoming order,
//! so results always follow catalogue order and filters compose freely.

use crate::core::catalogue::Catalogue;
use crate::domain::model::{DanglingPolicy, SearchMode, Term};
use crate::domain::ports::ConfigProvider;

pub const DEFAULT_ALL_LABEL: &str = "all";

/// Equality filter over a label field (category or source).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LabelFilter {
    #[default]
    All,
    Only(String),
}

impl LabelFilter {
    /// `all_label` is the sentinel that selects everything; the comparison is exact.
    pub fn parse(value: &str, all_label: &str) -> Self {
        if value == all_label {
            LabelFilter::All
        } else {
            LabelFilter::Only(value.to_string())
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            LabelFilter::All => true,
            LabelFilter::Only(expected) => expected == value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    pub mode: SearchMode,
    pub all_label: String,
    pub dangling: DanglingPolicy,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            mode: SearchMode::default(),
            all_label: DEFAULT_ALL_LABEL.to_string(),
            dangling: DanglingPolicy::default(),
        }
    }
}

impl QueryOptions {
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self {
            mode: config.search_mode(),
            all_label: config.all_label().to_string(),
            dangling: config.dangling_policy(),
        }
    }
}

pub fn filter_by_category<'a>(terms: &[&'a Term], category: &LabelFilter) -> Vec<&'a Term> {
    terms
        .iter()
        .copied()
        .filter(|t| category.matches(&t.category))
        .collect()
}

pub fn filter_by_source<'a>(terms: &[&'a Term], source: &LabelFilter) -> Vec<&'a Term> {
    terms
        .iter()
        .copied()
        .filter(|t| source.matches(&t.source_label))
        .collect()
}

/// Case-insensitive substring search. A blank query keeps every term.
pub fn search<'a>(terms: &[&'a Term], query: &str, mode: SearchMode) -> Vec<&'a Term> {
    if query.trim().is_empty() {
        return terms.to_vec();
    }

    let needle = query.to_lowercase();
    terms
        .iter()
        .copied()
        .filter(|t| matches_query(t, &needle, mode))
        .collect()
}

/// `needle` must already be lowercased.
pub fn matches_query(term: &Term, needle: &str, mode: SearchMode) -> bool {
    let contains = |haystack: &str| haystack.to_lowercase().contains(needle);

    if contains(&term.name) {
        return true;
    }
    match mode {
        SearchMode::Name => false,
        SearchMode::Standard => contains(&term.definition),
        SearchMode::Broad => {
            contains(&term.definition)
                || term.synonyms.iter().any(|s| contains(s))
                || term.related.iter().any(|r| contains(r))
        }
    }
}

pub fn find_by_name<'a>(terms: &[&'a Term], name: &str) -> Option<&'a Term> {
    terms.iter().copied().find(|t| t.name == name)
}

pub fn resolve_related<'a>(terms: &[&'a Term], label: &str) -> Option<&'a Term> {
    find_by_name(terms, label)
}

/// Criteria gathered from the UI: category, then source, then text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermQuery {
    pub category: LabelFilter,
    pub source: LabelFilter,
    pub text: String,
}

impl TermQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: LabelFilter) -> Self {
        self.category = category;
        self
    }

    pub fn source(mut self, source: LabelFilter) -> Self {
        self.source = source;
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn is_unfiltered(&self) -> bool {
        self.category == LabelFilter::All
            && self.source == LabelFilter::All
            && self.text.trim().is_empty()
    }

    pub fn apply<'a>(&self, catalogue: &'a Catalogue, mode: SearchMode) -> Vec<&'a Term> {
        let by_category = filter_by_category(&catalogue.terms(), &self.category);
        let by_source = filter_by_source(&by_category, &self.source);
        search(&by_source, &self.text, mode)
    }
}
