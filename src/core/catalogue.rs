//! Immutable catalogue of glossary terms.
//!
//! Built once from seed data. Construction rejects duplicate names and terms
//! with blank required fields; everything after that is read-only, so a
//! catalogue can be shared between sessions without locking.

use crate::domain::model::Term;
use crate::utils::error::{GlossaryError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone)]
pub struct Catalogue {
    terms: Vec<Term>,
    by_name: HashMap<String, usize>,
}

/// A related label as seen from a detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelatedLink<'a> {
    Resolved(&'a Term),
    Dangling(&'a str),
}

impl<'a> RelatedLink<'a> {
    pub fn label(&self) -> &'a str {
        match *self {
            RelatedLink::Resolved(term) => term.name.as_str(),
            RelatedLink::Dangling(label) => label,
        }
    }

    pub fn is_navigable(&self) -> bool {
        matches!(self, RelatedLink::Resolved(_))
    }
}

/// A related label that names no term in the catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference<'a> {
    pub term: &'a str,
    pub label: &'a str,
}

impl Validate for Term {
    fn validate(&self) -> Result<()> {
        let checks = [
            ("name", self.name.as_str()),
            ("definition", self.definition.as_str()),
            ("category", self.category.as_str()),
            ("source_label", self.source_label.as_str()),
        ];
        for (field, value) in checks {
            validate_non_empty_string(field, value).map_err(|_| GlossaryError::InvalidTerm {
                name: self.name.clone(),
                reason: format!("{} must not be blank", field),
            })?;
        }

        if self.synonyms.iter().any(|s| s.trim().is_empty()) {
            return Err(GlossaryError::InvalidTerm {
                name: self.name.clone(),
                reason: "synonyms must not contain blank entries".to_string(),
            });
        }
        if self.related.iter().any(|r| r.trim().is_empty()) {
            return Err(GlossaryError::InvalidTerm {
                name: self.name.clone(),
                reason: "related must not contain blank entries".to_string(),
            });
        }

        Ok(())
    }
}

impl Catalogue {
    /// Validate the seed terms and index them by name.
    ///
    /// Insertion order is preserved; it is the order every listing follows.
    pub fn from_terms(terms: Vec<Term>) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(terms.len());
        for (position, term) in terms.iter().enumerate() {
            term.validate()?;
            if by_name.insert(term.name.clone(), position).is_some() {
                return Err(GlossaryError::DuplicateTerm {
                    name: term.name.clone(),
                });
            }
        }

        tracing::debug!("Indexed {} terms", terms.len());
        Ok(Self { terms, by_name })
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Every term, in insertion order.
    pub fn list_all(&self) -> &[Term] {
        &self.terms
    }

    /// `list_all` as borrowed references: the input the `query::*`
    /// filters take and return, so filter chains compose without cloning.
    pub fn terms(&self) -> Vec<&Term> {
        self.terms.iter().collect()
    }

    pub fn distinct_categories(&self) -> Vec<String> {
        distinct(self.terms.iter().map(|t| t.category.as_str()))
    }

    pub fn distinct_sources(&self) -> Vec<String> {
        distinct(self.terms.iter().map(|t| t.source_label.as_str()))
    }

    /// Exact, case-sensitive lookup.
    pub fn find_by_name(&self, name: &str) -> Option<&Term> {
        self.by_name.get(name).map(|&position| &self.terms[position])
    }

    /// Resolve a related label; `None` means the label is decorative.
    pub fn resolve_related(&self, label: &str) -> Option<&Term> {
        self.find_by_name(label)
    }

    pub fn related_links<'a>(&'a self, term: &'a Term) -> Vec<RelatedLink<'a>> {
        term.related
            .iter()
            .map(|label| match self.resolve_related(label) {
                Some(target) => RelatedLink::Resolved(target),
                None => RelatedLink::Dangling(label.as_str()),
            })
            .collect()
    }

    pub fn dangling_references(&self) -> Vec<DanglingReference<'_>> {
        self.terms
            .iter()
            .flat_map(|term| {
                term.related
                    .iter()
                    .filter(|label| !self.by_name.contains_key(label.as_str()))
                    .map(move |label| DanglingReference {
                        term: term.name.as_str(),
                        label: label.as_str(),
                    })
            })
            .collect()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
