use crate::config::toml_config::{
    CatalogueConfig, LoggingConfig, RelatedConfig, SearchConfig, TomlConfig,
};
use crate::core::query::DEFAULT_ALL_LABEL;
use crate::core::ConfigProvider;
use crate::domain::model::{DanglingPolicy, SearchMode};
use crate::utils::error::{GlossaryError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_file_extensions, validate_non_empty_string, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "legal-glossary")]
#[command(about = "Glossário Jurídico: search and browse legal terms")]
pub struct CliConfig {
    /// TOML configuration file; flags below override its values
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Extra seed file (.json or .toml); may be repeated
    #[arg(long = "seed-file", global = true)]
    pub seed_files: Vec<String>,

    /// Do not load the bundled terms
    #[arg(long, global = true)]
    pub no_builtin: bool,

    #[arg(long, value_enum, global = true)]
    pub search_mode: Option<SearchMode>,

    /// Category/source value that disables the filter
    #[arg(long, global = true)]
    pub all_label: Option<String>,

    #[arg(long, value_enum, global = true)]
    pub dangling: Option<DanglingPolicy>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, global = true)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List terms, optionally filtered
    List {
        #[arg(short, long)]
        query: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        source: Option<String>,
    },
    /// Show every category with its term count
    Categories,
    /// Show every source label
    Sources,
    /// Show one term in detail
    Show { name: String },
    /// Show news items for a term name
    News { name: String },
    /// Catalogue metrics and category chart
    Stats {
        #[arg(long, default_value = "4")]
        recent: usize,
    },
    /// Related labels that do not name a term
    Dangling,
    /// Interactive session reading commands from stdin
    Browse,
    /// About the project, with live catalogue counts
    About,
}

impl CliConfig {
    /// Fold CLI flags into a file configuration; seed files are appended.
    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        let catalogue = config.catalogue.get_or_insert_with(CatalogueConfig::default);
        if self.no_builtin {
            catalogue.include_builtin = Some(false);
        }
        if !self.seed_files.is_empty() {
            catalogue
                .seed_files
                .get_or_insert_with(Vec::new)
                .extend(self.seed_files.iter().cloned());
        }

        let search = config.search.get_or_insert_with(SearchConfig::default);
        if let Some(mode) = self.search_mode {
            search.mode = Some(mode);
        }
        if let Some(label) = &self.all_label {
            search.all_label = Some(label.clone());
        }

        if let Some(dangling) = self.dangling {
            config
                .related
                .get_or_insert_with(RelatedConfig::default)
                .dangling = Some(dangling);
        }

        let logging = config.logging.get_or_insert_with(LoggingConfig::default);
        if let Some(format) = self.log_format {
            logging.format = Some(format);
        }
        if self.verbose {
            logging.verbose = Some(true);
        }
    }
}

impl ConfigProvider for CliConfig {
    fn include_builtin(&self) -> bool {
        !self.no_builtin
    }

    fn seed_files(&self) -> &[String] {
        &self.seed_files
    }

    fn search_mode(&self) -> SearchMode {
        self.search_mode.unwrap_or_default()
    }

    fn all_label(&self) -> &str {
        self.all_label.as_deref().unwrap_or(DEFAULT_ALL_LABEL)
    }

    fn dangling_policy(&self) -> DanglingPolicy {
        self.dangling.unwrap_or_default()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_file_extensions(
            "seed_files",
            &self.seed_files,
            crate::adapters::seed_file::SEED_EXTENSIONS,
        )?;
        validate_non_empty_string("all_label", self.all_label())?;
        if self.no_builtin && self.seed_files.is_empty() {
            return Err(GlossaryError::MissingConfigError {
                field: "seed_files".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_with_filters() {
        let cli = CliConfig::parse_from([
            "legal-glossary",
            "--search-mode",
            "broad",
            "list",
            "--query",
            "usuca",
            "--category",
            "Direito Civil",
        ]);
        assert_eq!(cli.search_mode(), SearchMode::Broad);
        match cli.command {
            Command::List { query, category, source } => {
                assert_eq!(query.as_deref(), Some("usuca"));
                assert_eq!(category.as_deref(), Some("Direito Civil"));
                assert!(source.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parses_about_subcommand() {
        let cli = CliConfig::parse_from(["legal-glossary", "about"]);
        assert!(matches!(cli.command, Command::About));
    }

    #[test]
    fn test_no_builtin_requires_seed_file() {
        let cli = CliConfig::parse_from(["legal-glossary", "--no-builtin", "stats"]);
        assert!(cli.validate().is_err());

        let cli = CliConfig::parse_from([
            "legal-glossary",
            "--no-builtin",
            "--seed-file",
            "terms.json",
            "stats",
        ]);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_overrides_take_precedence_over_file() {
        let mut config = TomlConfig::from_toml_str(
            r#"
[glossary]
name = "g"

[catalogue]
seed_files = ["a.json"]

[search]
mode = "name"
"#,
        )
        .unwrap();

        let cli = CliConfig::parse_from([
            "legal-glossary",
            "--seed-file",
            "b.toml",
            "--search-mode",
            "standard",
            "--dangling",
            "hide",
            "categories",
        ]);
        cli.apply_overrides(&mut config);

        assert_eq!(
            ConfigProvider::seed_files(&config),
            ["a.json".to_string(), "b.toml".to_string()]
        );
        assert_eq!(config.search_mode(), SearchMode::Standard);
        assert_eq!(config.dangling_policy(), DanglingPolicy::Hide);
    }
}
