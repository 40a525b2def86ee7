use crate::adapters::{
    BuiltinTerms, LocalStorage, SeedFileSource, StaticCourtProvider, StaticNewsProvider,
};
use crate::core::engine::{load_catalogue, GlossaryEngine};
use crate::core::query::QueryOptions;
use crate::core::{ConfigProvider, TermSource};
use crate::utils::error::Result;

/// Seed sources in load order: bundled terms first, then seed files.
pub fn term_sources<C: ConfigProvider + ?Sized>(
    config: &C,
    storage: &LocalStorage,
) -> Result<Vec<Box<dyn TermSource>>> {
    let mut sources: Vec<Box<dyn TermSource>> = Vec::new();
    if config.include_builtin() {
        sources.push(Box::new(BuiltinTerms));
    }
    for path in config.seed_files() {
        sources.push(Box::new(SeedFileSource::new(storage.clone(), path.clone())?));
    }
    Ok(sources)
}

/// Load the catalogue and attach the bundled court and news providers.
pub async fn build_engine<C: ConfigProvider + ?Sized>(config: &C) -> Result<GlossaryEngine> {
    let storage = LocalStorage::new(".".to_string());
    let sources = term_sources(config, &storage)?;
    let catalogue = load_catalogue(&sources).await?;

    let mut engine = GlossaryEngine::new(catalogue, QueryOptions::from_config(config));
    for provider in StaticCourtProvider::all_builtin()? {
        engine = engine.with_court_provider(provider);
    }
    engine = engine.with_news_provider(Box::new(StaticNewsProvider::builtin()?));

    tracing::info!(
        "✅ Glossary ready: {} terms, {} categories",
        engine.catalogue().len(),
        engine.catalogue().distinct_categories().len()
    );
    Ok(engine)
}
