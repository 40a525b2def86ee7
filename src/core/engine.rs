use crate::core::catalogue::{Catalogue, RelatedLink};
use crate::core::query::{QueryOptions, TermQuery};
use crate::core::stats::CatalogueStats;
use crate::core::{CourtProvider, NewsProvider, TermSource};
use crate::domain::model::{CourtRecord, DanglingPolicy, NewsItem, Term};
use crate::utils::error::Result;

/// Everything a detail page shows for one term.
#[derive(Debug, Clone)]
pub struct TermDetail<'a> {
    pub term: &'a Term,
    pub related: Vec<RelatedLink<'a>>,
    pub court_records: Vec<CourtRecord>,
    pub news: Vec<NewsItem>,
}

/// Concatenate every source in order and build the catalogue.
///
/// Duplicate names across sources fail the load; dangling related labels are
/// only reported.
pub async fn load_catalogue(sources: &[Box<dyn TermSource>]) -> Result<Catalogue> {
    let mut terms = Vec::new();
    for source in sources {
        tracing::debug!("Loading terms from source: {}", source.name());
        let loaded = source.load_terms().await?;
        tracing::info!("📚 Loaded {} terms from {}", loaded.len(), source.name());
        terms.extend(loaded);
    }

    let catalogue = Catalogue::from_terms(terms)?;

    let dangling = catalogue.dangling_references();
    if !dangling.is_empty() {
        tracing::info!(
            "🔗 {} related labels do not name a catalogue term",
            dangling.len()
        );
        for reference in &dangling {
            tracing::debug!("'{}' -> '{}' is dangling", reference.term, reference.label);
        }
    }

    Ok(catalogue)
}

pub struct GlossaryEngine {
    catalogue: Catalogue,
    options: QueryOptions,
    courts: Vec<CourtProvider>,
    news: Option<NewsProvider>,
}

impl GlossaryEngine {
    pub fn new(catalogue: Catalogue, options: QueryOptions) -> Self {
        Self {
            catalogue,
            options,
            courts: Vec::new(),
            news: None,
        }
    }

    pub fn with_court_provider(mut self, provider: CourtProvider) -> Self {
        self.courts.push(provider);
        self
    }

    pub fn with_news_provider(mut self, provider: NewsProvider) -> Self {
        self.news = Some(provider);
        self
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn options(&self) -> &QueryOptions {
        &self.options
    }

    pub fn query(&self, query: &TermQuery) -> Vec<&Term> {
        let results = query.apply(&self.catalogue, self.options.mode);
        tracing::debug!(
            "Query {:?} matched {} of {} terms",
            query,
            results.len(),
            self.catalogue.len()
        );
        results
    }

    /// Related links after applying the dangling policy.
    pub fn related_links<'a>(&'a self, term: &'a Term) -> Vec<RelatedLink<'a>> {
        let links = self.catalogue.related_links(term);
        match self.options.dangling {
            DanglingPolicy::Inert => links,
            DanglingPolicy::Hide => links.into_iter().filter(|l| l.is_navigable()).collect(),
        }
    }

    pub async fn detail(&self, name: &str) -> Option<TermDetail<'_>> {
        let Some(term) = self.catalogue.find_by_name(name) else {
            tracing::info!("Term not found: {}", name);
            return None;
        };

        Some(TermDetail {
            term,
            related: self.related_links(term),
            court_records: self.court_records(name).await,
            news: self.news(name).await,
        })
    }

    /// Query every court provider; a failing provider only costs its record.
    pub async fn court_records(&self, name: &str) -> Vec<CourtRecord> {
        let mut records = Vec::new();
        for provider in &self.courts {
            match provider.lookup(name).await {
                Ok(Some(record)) => records.push(record),
                Ok(None) => {}
                Err(e) => tracing::warn!("⚠️ {} lookup failed for '{}': {}", provider.name(), name, e),
            }
        }
        records
    }

    /// News for any name, falling back to a single placeholder item.
    pub async fn news(&self, name: &str) -> Vec<NewsItem> {
        let found = match &self.news {
            Some(provider) => match provider.lookup(name).await {
                Ok(items) => items.unwrap_or_default(),
                Err(e) => {
                    tracing::warn!("⚠️ {} lookup failed for '{}': {}", provider.name(), name, e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        if found.is_empty() {
            vec![NewsItem::placeholder(name, chrono::Local::now().date_naive())]
        } else {
            found
        }
    }

    pub fn stats(&self, recent_limit: usize) -> CatalogueStats<'_> {
        CatalogueStats::compute(&self.catalogue, recent_limit)
    }
}
