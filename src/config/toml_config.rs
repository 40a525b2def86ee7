use crate::adapters::export::ExportFormat;
use crate::adapters::seed_file::SEED_EXTENSIONS;
use crate::core::query::DEFAULT_ALL_LABEL;
use crate::core::ConfigProvider;
use crate::domain::model::{DanglingPolicy, SearchMode};
use crate::utils::error::{GlossaryError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{
    validate_file_extensions, validate_non_empty_string, validate_path, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub glossary: GlossaryInfo,
    pub catalogue: Option<CatalogueConfig>,
    pub search: Option<SearchConfig>,
    pub related: Option<RelatedConfig>,
    pub export: Option<ExportConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlossaryInfo {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogueConfig {
    pub include_builtin: Option<bool>,
    pub seed_files: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    pub mode: Option<SearchMode>,
    pub all_label: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelatedConfig {
    pub dangling: Option<DanglingPolicy>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub output_path: String,
    pub output_formats: Vec<String>,
    pub filenames: Option<FilenameConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilenameConfig {
    pub csv: Option<String>,
    pub tsv: Option<String>,
    pub json: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: Option<LogFormat>,
    pub verbose: Option<bool>,
}

impl TomlConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GlossaryError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| GlossaryError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GlossaryError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("glossary.name", &self.glossary.name)?;

        let seed_files = ConfigProvider::seed_files(self);
        for file in seed_files {
            validate_path("catalogue.seed_files", file)?;
        }
        validate_file_extensions("catalogue.seed_files", seed_files, SEED_EXTENSIONS)?;

        if !self.include_builtin() && seed_files.is_empty() {
            return Err(GlossaryError::MissingConfigError {
                field: "catalogue.seed_files".to_string(),
            });
        }

        validate_non_empty_string("search.all_label", self.all_label())?;

        if let Some(export) = &self.export {
            validate_path("export.output_path", &export.output_path)?;
            self.export_outputs()?;
        }

        Ok(())
    }

    /// (format, file name) pairs to write, in configured order.
    pub fn export_outputs(&self) -> Result<Vec<(ExportFormat, String)>> {
        let Some(export) = &self.export else {
            return Ok(Vec::new());
        };
        let filenames = export.filenames.clone().unwrap_or_default();

        export
            .output_formats
            .iter()
            .map(|raw| {
                let format: ExportFormat = raw.parse()?;
                let configured = match format {
                    ExportFormat::Csv => filenames.csv.clone(),
                    ExportFormat::Tsv => filenames.tsv.clone(),
                    ExportFormat::Json => filenames.json.clone(),
                };
                let name = configured.unwrap_or_else(|| format!("glossary.{}", format.extension()));
                Ok((format, name))
            })
            .collect()
    }

    pub fn output_path(&self) -> Option<&str> {
        self.export.as_ref().map(|e| e.output_path.as_str())
    }

    pub fn log_format(&self) -> LogFormat {
        self.logging
            .as_ref()
            .and_then(|l| l.format)
            .unwrap_or_default()
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn include_builtin(&self) -> bool {
        self.catalogue
            .as_ref()
            .and_then(|c| c.include_builtin)
            .unwrap_or(true)
    }

    fn seed_files(&self) -> &[String] {
        self.catalogue
            .as_ref()
            .and_then(|c| c.seed_files.as_deref())
            .unwrap_or(&[])
    }

    fn search_mode(&self) -> SearchMode {
        self.search.as_ref().and_then(|s| s.mode).unwrap_or_default()
    }

    fn all_label(&self) -> &str {
        self.search
            .as_ref()
            .and_then(|s| s.all_label.as_deref())
            .unwrap_or(DEFAULT_ALL_LABEL)
    }

    fn dangling_policy(&self) -> DanglingPolicy {
        self.related
            .as_ref()
            .and_then(|r| r.dangling)
            .unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
