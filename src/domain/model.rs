use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One glossary entry.
///
/// Seed data may use either these field names or the Portuguese keys of the
/// legacy dictionaries (`termo`, `definicao`, `area`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    #[serde(alias = "termo")]
    pub name: String,
    #[serde(alias = "definicao")]
    pub definition: String,
    #[serde(alias = "area")]
    pub category: String,
    #[serde(alias = "fonte")]
    pub source_label: String,
    #[serde(default, alias = "exemplo", skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, alias = "sinonimos")]
    pub synonyms: Vec<String>,
    #[serde(default, alias = "relacionados")]
    pub related: Vec<String>,
    #[serde(alias = "data")]
    pub last_updated: NaiveDate,
    #[serde(default, alias = "detalhes", skip_serializing_if = "Option::is_none")]
    pub legal_basis: Option<String>,
    #[serde(
        default,
        alias = "jurisprudencia",
        skip_serializing_if = "Option::is_none"
    )]
    pub jurisprudence: Option<String>,
}

impl Term {
    pub fn new(
        name: impl Into<String>,
        definition: impl Into<String>,
        category: impl Into<String>,
        source_label: impl Into<String>,
        last_updated: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            definition: definition.into(),
            category: category.into(),
            source_label: source_label.into(),
            example: None,
            synonyms: Vec::new(),
            related: Vec::new(),
            last_updated,
            legal_basis: None,
            jurisprudence: None,
        }
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    pub fn with_synonyms<I, S>(mut self, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synonyms = synonyms.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_related<I, S>(mut self, related: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.related = related.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_legal_basis(mut self, legal_basis: impl Into<String>) -> Self {
        self.legal_basis = Some(legal_basis.into());
        self
    }

    pub fn with_jurisprudence(mut self, jurisprudence: impl Into<String>) -> Self {
        self.jurisprudence = Some(jurisprudence.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Court {
    #[serde(rename = "STF")]
    Stf,
    #[serde(rename = "STJ")]
    Stj,
    #[serde(rename = "Câmara dos Deputados")]
    Camara,
    #[serde(rename = "Planalto")]
    Planalto,
}

impl Court {
    /// Lookup order on a detail page.
    pub const ALL: [Court; 4] = [Court::Stf, Court::Stj, Court::Camara, Court::Planalto];

    pub fn label(&self) -> &'static str {
        match self {
            Court::Stf => "STF - Supremo Tribunal Federal",
            Court::Stj => "STJ - Superior Tribunal de Justiça",
            Court::Camara => "Câmara dos Deputados",
            Court::Planalto => "Planalto - Legislação Federal",
        }
    }
}

impl fmt::Display for Court {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Jurisprudence blurb returned by a court lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourtRecord {
    pub court: Court,
    pub summary: String,
    pub citation: Option<String>,
    pub source_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub source_label: String,
    pub date: NaiveDate,
    pub summary: String,
    pub url: Option<String>,
}

impl NewsItem {
    /// Placeholder shown when no news source knows the term.
    pub fn placeholder(term_name: &str, today: NaiveDate) -> Self {
        Self {
            title: format!("Notícias sobre {} - Em atualização", term_name),
            source_label: "Glossário Jurídico".to_string(),
            date: today,
            summary: format!(
                "Em breve traremos notícias atualizadas sobre {} dos principais portais jurídicos.",
                term_name
            ),
            url: None,
        }
    }
}

/// Which fields a free-text query is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Name only.
    Name,
    /// Name and definition.
    #[default]
    Standard,
    /// Name, definition, synonyms and related labels.
    Broad,
}

/// How related labels that name no catalogue entry are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum DanglingPolicy {
    /// Shown as plain, non-navigable text.
    #[default]
    Inert,
    /// Left out of detail views.
    Hide,
}
