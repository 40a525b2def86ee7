use crate::domain::model::{CourtRecord, DanglingPolicy, NewsItem, SearchMode, Term};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn include_builtin(&self) -> bool;
    fn seed_files(&self) -> &[String];
    fn search_mode(&self) -> SearchMode;
    fn all_label(&self) -> &str;
    fn dangling_policy(&self) -> DanglingPolicy;
}

/// Supplies the seed terms a catalogue is built from.
#[async_trait]
pub trait TermSource: Send + Sync {
    fn name(&self) -> &str;
    async fn load_terms(&self) -> Result<Vec<Term>>;
}

/// Key-value lookup keyed by term name.
///
/// The bundled implementations read static tables; a network-backed one can
/// take their place without touching the catalogue.
#[async_trait]
pub trait LookupProvider: Send + Sync {
    type Record: Send;

    fn name(&self) -> &str;
    async fn lookup(&self, term_name: &str) -> Result<Option<Self::Record>>;
}

pub type CourtProvider = Box<dyn LookupProvider<Record = CourtRecord>>;
pub type NewsProvider = Box<dyn LookupProvider<Record = Vec<NewsItem>>>;
