use clap::Parser;
use legal_glossary::adapters::{LocalStorage, TermExporter};
use legal_glossary::app::build_engine;
use legal_glossary::core::ConfigProvider;
use legal_glossary::utils::{logger, validation::Validate};
use legal_glossary::{LabelFilter, TermQuery, TomlConfig};

#[derive(Parser)]
#[command(name = "export-glossary")]
#[command(about = "Export glossary terms to CSV/TSV/JSON using a TOML configuration")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "glossary.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Only export terms matching this text
    #[arg(short, long)]
    query: Option<String>,

    /// Only export terms in this category
    #[arg(long)]
    category: Option<String>,

    /// Dry run - show what would be exported without writing files
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    logger::init_logger(config.log_format(), args.verbose || config.verbose());
    tracing::info!("🚀 Starting glossary export");
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let Some(output_path) = config.output_path() else {
        eprintln!("❌ The configuration has no [export] section");
        eprintln!("💡 Add [export] with output_path and output_formats");
        std::process::exit(1);
    };
    let outputs = config.export_outputs()?;

    display_config_summary(&config, &args);

    let engine = build_engine(&config).await?;
    let mut query = TermQuery::new().text(args.query.clone().unwrap_or_default());
    if let Some(category) = &args.category {
        query = query.category(LabelFilter::parse(category, config.all_label()));
    }
    let terms = engine.query(&query);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be written");
        println!("🔍 Dry Run Analysis:");
        println!("  Terms selected: {} of {}", terms.len(), engine.catalogue().len());
        for (format, filename) in &outputs {
            println!("  Would write {} to {}/{}", format, output_path, filename);
        }
        return Ok(());
    }

    let exporter = TermExporter::new(LocalStorage::new(output_path.to_string()));
    match exporter.export(&terms, &outputs).await {
        Ok(written) => {
            tracing::info!("✅ Exported {} terms", terms.len());
            println!("✅ Exported {} terms", terms.len());
            for filename in written {
                println!("📁 {}/{}", output_path, filename);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Export failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Sugestão: {}", e.recovery_suggestion());

            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!(
        "  Glossary: {} v{}",
        config.glossary.name,
        config.glossary.version.as_deref().unwrap_or("-")
    );
    println!("  Builtin terms: {}", config.include_builtin());
    if !config.seed_files().is_empty() {
        println!("  Seed files: {}", config.seed_files().join(", "));
    }
    println!("  Search mode: {:?}", config.search_mode());
    if let Some(export) = &config.export {
        println!("  Output: {}", export.output_path);
        println!("  Formats: {}", export.output_formats.join(", "));
    }
    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }
    println!();
}
