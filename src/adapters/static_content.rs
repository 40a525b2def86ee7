//! Bundled content: seed terms, court tables and news blurbs.
//!
//! The tables ship as JSON under `data/` and are embedded at compile time.

use crate::core::{CourtProvider, LookupProvider, TermSource};
use crate::domain::model::{Court, CourtRecord, NewsItem, Term};
use crate::utils::error::{GlossaryError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;

const BUILTIN_TERMS: &str = include_str!("../../data/terms.json");
const BUILTIN_COURTS: &str = include_str!("../../data/courts.json");
const BUILTIN_NEWS: &str = include_str!("../../data/news.json");

fn parse_embedded<T: serde::de::DeserializeOwned>(name: &str, content: &str) -> Result<T> {
    serde_json::from_str(content).map_err(|e| GlossaryError::SeedParseError {
        path: format!("builtin:{}", name),
        message: e.to_string(),
    })
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinTerms;

#[async_trait]
impl TermSource for BuiltinTerms {
    fn name(&self) -> &str {
        "builtin"
    }

    async fn load_terms(&self) -> Result<Vec<Term>> {
        parse_embedded("terms.json", BUILTIN_TERMS)
    }
}

#[derive(Debug, Deserialize)]
struct CourtRow {
    term: String,
    #[serde(flatten)]
    record: CourtRecord,
}

/// One court's jurisprudence table.
#[derive(Debug, Clone)]
pub struct StaticCourtProvider {
    court: Court,
    table: HashMap<String, CourtRecord>,
}

impl StaticCourtProvider {
    pub fn new(court: Court, table: HashMap<String, CourtRecord>) -> Self {
        Self { court, table }
    }

    pub fn builtin(court: Court) -> Result<Self> {
        let rows: Vec<CourtRow> = parse_embedded("courts.json", BUILTIN_COURTS)?;
        let table = rows
            .into_iter()
            .filter(|row| row.record.court == court)
            .map(|row| (row.term, row.record))
            .collect();
        Ok(Self::new(court, table))
    }

    /// STF, STJ, Câmara and Planalto, in that order.
    pub fn all_builtin() -> Result<Vec<CourtProvider>> {
        Court::ALL
            .into_iter()
            .map(|court| Self::builtin(court).map(|p| Box::new(p) as CourtProvider))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

#[async_trait]
impl LookupProvider for StaticCourtProvider {
    type Record = CourtRecord;

    fn name(&self) -> &str {
        self.court.label()
    }

    async fn lookup(&self, term_name: &str) -> Result<Option<CourtRecord>> {
        Ok(self.table.get(term_name).cloned())
    }
}

#[derive(Debug, Clone, Default)]
pub struct StaticNewsProvider {
    table: HashMap<String, Vec<NewsItem>>,
}

impl StaticNewsProvider {
    pub fn new(table: HashMap<String, Vec<NewsItem>>) -> Self {
        Self { table }
    }

    pub fn builtin() -> Result<Self> {
        Ok(Self::new(parse_embedded("news.json", BUILTIN_NEWS)?))
    }
}

#[async_trait]
impl LookupProvider for StaticNewsProvider {
    type Record = Vec<NewsItem>;

    fn name(&self) -> &str {
        "news"
    }

    async fn lookup(&self, term_name: &str) -> Result<Option<Vec<NewsItem>>> {
        Ok(self.table.get(term_name).cloned())
    }
}
