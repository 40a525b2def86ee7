use clap::Parser;
use legal_glossary::app::render;
use legal_glossary::app::{build_engine, Input, Session, View};
use legal_glossary::core::ConfigProvider;
use legal_glossary::utils::error::GlossaryError;
use legal_glossary::utils::logger;
use legal_glossary::utils::validation::{validate_positive_number, Validate};
use legal_glossary::{CliConfig, Command, GlossaryEngine, LabelFilter, TermQuery, TomlConfig};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

fn fail(e: GlossaryError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Sugestão: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code().max(1));
}

/// File configuration with CLI overrides, or the CLI alone.
fn resolve_settings(cli: &CliConfig) -> Box<dyn ConfigProvider> {
    let Some(path) = &cli.config else {
        logger::init_logger(cli.log_format.unwrap_or_default(), cli.verbose);
        if let Err(e) = cli.validate() {
            fail(e);
        }
        return Box::new(cli.clone());
    };

    let mut config = match TomlConfig::from_file(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", path, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };
    cli.apply_overrides(&mut config);
    logger::init_logger(config.log_format(), config.verbose());
    tracing::info!("📁 Loaded configuration from: {}", path);

    if let Err(e) = config.validate() {
        fail(e);
    }
    Box::new(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();
    let settings = resolve_settings(&cli);
    tracing::debug!("CLI config: {:?}", cli);

    let engine = match build_engine(settings.as_ref()).await {
        Ok(engine) => engine,
        Err(e) => fail(e),
    };

    match cli.command {
        Command::List {
            query,
            category,
            source,
        } => {
            let all_label = engine.options().all_label.as_str();
            let mut term_query = TermQuery::new().text(query.unwrap_or_default());
            if let Some(category) = category {
                term_query = term_query.category(LabelFilter::parse(&category, all_label));
            }
            if let Some(source) = source {
                term_query = term_query.source(LabelFilter::parse(&source, all_label));
            }
            let terms = engine.query(&term_query);
            print!("{}", render::render_listing(&terms, engine.catalogue().len()));
        }
        Command::Categories => {
            let stats = engine.stats(0);
            println!("📊 Áreas do Direito");
            print!("{}", render::render_bar_chart(&stats.per_category));
        }
        Command::Sources => {
            let sources = engine.catalogue().distinct_sources();
            print!("{}", render::render_labels("📚 Fontes", &sources));
        }
        Command::Show { name } => {
            let view = match engine.detail(&name).await {
                Some(detail) => View::Detail(detail),
                None => View::NotFound { name },
            };
            print!("{}", render::render_view(&view));
        }
        Command::News { name } => {
            let items = engine.news(&name).await;
            println!("📰 Notícias sobre {}", name);
            print!("{}", render::render_news_items(&items));
        }
        Command::Stats { recent } => {
            if let Err(e) = validate_positive_number("recent", recent, 1) {
                fail(e);
            }
            print!("{}", render::render_stats(&engine.stats(recent)));
        }
        Command::Dangling => {
            let references = engine.catalogue().dangling_references();
            print!("{}", render::render_dangling(&references));
        }
        Command::Browse => browse(&engine).await?,
        Command::About => print!("{}", render::render_about(&engine.stats(0))),
    }

    Ok(())
}

async fn browse(engine: &GlossaryEngine) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new();
    print!("{}", render::render_help());
    print!("{}", render::render_view(&session.view(engine).await));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        match Input::parse(&line) {
            Input::Event(event) => {
                session.handle(event, engine);
                print!("{}", render::render_view(&session.view(engine).await));
            }
            Input::Help => print!("{}", render::render_help()),
            Input::Quit => break,
            Input::Unknown(text) if text.is_empty() => {}
            Input::Unknown(text) => println!("Comando desconhecido: {} (digite 'help')", text),
        }
    }

    tracing::debug!("Browse session ended");
    Ok(())
}
