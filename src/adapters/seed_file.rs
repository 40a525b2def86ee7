use crate::core::{Storage, TermSource};
use crate::domain::model::Term;
use crate::utils::error::{GlossaryError, Result};
use crate::utils::validation::validate_file_extensions;
use async_trait::async_trait;
use serde::Deserialize;

pub const SEED_EXTENSIONS: &[&str] = &["json", "toml"];

/// TOML seed files hold a list of `[[terms]]` tables.
#[derive(Debug, Deserialize)]
struct TomlSeed {
    #[serde(default)]
    terms: Vec<Term>,
}

/// Terms read from a `.json` array or a `.toml` file through a [`Storage`].
pub struct SeedFileSource<S: Storage> {
    storage: S,
    path: String,
}

impl<S: Storage> SeedFileSource<S> {
    pub fn new(storage: S, path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        validate_file_extensions("seed_files", std::slice::from_ref(&path), SEED_EXTENSIONS)?;
        Ok(Self { storage, path })
    }

    fn parse(&self, content: &str) -> Result<Vec<Term>> {
        let parse_error = |message: String| GlossaryError::SeedParseError {
            path: self.path.clone(),
            message,
        };

        if self.path.ends_with(".toml") {
            let seed: TomlSeed = toml::from_str(content).map_err(|e| parse_error(e.to_string()))?;
            Ok(seed.terms)
        } else {
            serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))
        }
    }
}

#[async_trait]
impl<S: Storage> TermSource for SeedFileSource<S> {
    fn name(&self) -> &str {
        &self.path
    }

    async fn load_terms(&self) -> Result<Vec<Term>> {
        let bytes = self.storage.read_file(&self.path).await?;
        let content = String::from_utf8(bytes).map_err(|e| GlossaryError::SeedParseError {
            path: self.path.clone(),
            message: format!("not valid UTF-8: {}", e),
        })?;
        self.parse(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::LocalStorage;

    #[test]
    fn test_rejects_unknown_extension() {
        let storage = LocalStorage::new(".".to_string());
        assert!(SeedFileSource::new(storage, "terms.yaml").is_err());
    }

    #[test]
    fn test_parses_toml_terms() {
        let storage = LocalStorage::new(".".to_string());
        let source = SeedFileSource::new(storage, "extra.toml").unwrap();
        let terms = source
            .parse(
                r#"
[[terms]]
name = "Liminar"
definition = "Decisão judicial provisória."
category = "Direito Processual"
source_label = "Câmara dos Deputados"
last_updated = "2023-12-08"
related = ["Tutela de Urgência"]
"#,
            )
            .unwrap();
        assert_eq!(terms.len(), 1);
        assert_eq!(terms[0].related, vec!["Tutela de Urgência"]);
        assert!(terms[0].synonyms.is_empty());
    }
}
