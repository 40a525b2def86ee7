use anyhow::Result;
use legal_glossary::adapters::{LocalStorage, SeedFileSource};
use legal_glossary::app::bootstrap::{build_engine, term_sources};
use legal_glossary::core::engine::load_catalogue;
use legal_glossary::core::{ConfigProvider, TermSource};
use legal_glossary::{GlossaryError, SearchMode, TomlConfig};
use tempfile::TempDir;

const EXTRA_TERMS_JSON: &str = r#"[
  {
    "termo": "Tutela de Urgência",
    "definicao": "Medida concedida quando há probabilidade do direito e perigo de dano.",
    "area": "Direito Processual Civil",
    "fonte": "Base de Dados do Planalto",
    "data": "2024-02-01",
    "sinonimos": ["Tutela Provisória"],
    "relacionados": ["Liminar"]
  }
]"#;

const DUPLICATE_TERMS_TOML: &str = r#"
[[terms]]
name = "Habeas Corpus"
definition = "Duplicado."
category = "Direito Constitucional"
source_label = "STF"
last_updated = "2024-01-01"
"#;

fn storage_for(dir: &TempDir) -> LocalStorage {
    LocalStorage::new(dir.path().to_str().unwrap().to_string())
}

#[tokio::test]
async fn test_json_seed_file_with_portuguese_keys() -> Result<()> {
    let temp_dir = TempDir::new()?;
    tokio::fs::write(temp_dir.path().join("extra.json"), EXTRA_TERMS_JSON).await?;

    let source = SeedFileSource::new(storage_for(&temp_dir), "extra.json")?;
    let terms = source.load_terms().await?;

    assert_eq!(terms.len(), 1);
    assert_eq!(terms[0].name, "Tutela de Urgência");
    assert_eq!(terms[0].synonyms, vec!["Tutela Provisória"]);
    Ok(())
}

#[tokio::test]
async fn test_malformed_seed_file_is_a_parse_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    tokio::fs::write(temp_dir.path().join("broken.json"), "[{\"name\": 1}]").await?;

    let source = SeedFileSource::new(storage_for(&temp_dir), "broken.json")?;
    let result = source.load_terms().await;
    assert!(matches!(result, Err(GlossaryError::SeedParseError { .. })));
    Ok(())
}

#[tokio::test]
async fn test_duplicates_across_sources_fail_the_load() -> Result<()> {
    let temp_dir = TempDir::new()?;
    tokio::fs::write(temp_dir.path().join("dup.toml"), DUPLICATE_TERMS_TOML).await?;

    let config = TomlConfig::from_toml_str(
        r#"
[glossary]
name = "dup-test"

[catalogue]
seed_files = ["dup.toml"]
"#,
    )?;
    let sources = term_sources(&config, &storage_for(&temp_dir))?;
    assert_eq!(sources.len(), 2);

    match load_catalogue(&sources).await {
        Err(GlossaryError::DuplicateTerm { name }) => assert_eq!(name, "Habeas Corpus"),
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("duplicate names must be rejected"),
    }
    Ok(())
}

#[tokio::test]
async fn test_seed_file_only_catalogue() -> Result<()> {
    let temp_dir = TempDir::new()?;
    tokio::fs::write(temp_dir.path().join("extra.json"), EXTRA_TERMS_JSON).await?;

    let config = TomlConfig::from_toml_str(
        r#"
[glossary]
name = "seed-only"

[catalogue]
include_builtin = false
seed_files = ["extra.json"]
"#,
    )?;
    let sources = term_sources(&config, &storage_for(&temp_dir))?;
    let catalogue = load_catalogue(&sources).await?;

    assert_eq!(catalogue.len(), 1);
    // "Liminar" is not in this catalogue.
    assert_eq!(catalogue.dangling_references().len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_build_engine_from_builtin_config() -> Result<()> {
    let config = TomlConfig::from_toml_str(
        r#"
[glossary]
name = "builtin"

[search]
mode = "broad"
"#,
    )?;
    assert_eq!(config.search_mode(), SearchMode::Broad);

    let engine = build_engine(&config).await?;
    assert!(engine.catalogue().len() >= 15);
    assert_eq!(engine.options().mode, SearchMode::Broad);

    let detail = engine.detail("Habeas Corpus").await.expect("bundled term");
    assert!(!detail.court_records.is_empty());
    assert!(!detail.news.is_empty());
    Ok(())
}
