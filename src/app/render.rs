//! Plain-text rendering of views for the terminal.

use crate::app::session::View;
use crate::core::catalogue::{DanglingReference, RelatedLink};
use crate::core::engine::TermDetail;
use crate::core::stats::CatalogueStats;
use crate::domain::model::{Court, NewsItem, Term};

const CHART_WIDTH: usize = 30;
const PREVIEW_CHARS: usize = 150;

pub fn render_view(view: &View<'_>) -> String {
    match view {
        View::Listing { terms, total } => render_listing(terms, *total),
        View::Detail(detail) => render_detail(detail),
        View::NotFound { name } => render_not_found(name),
    }
}

pub fn render_listing(terms: &[&Term], total: usize) -> String {
    if terms.is_empty() {
        return "⚠️ Nenhum termo encontrado com os filtros aplicados.\n".to_string();
    }

    let mut out = format!(
        "🎉 {} termo(s) encontrado(s) de {}\n\n",
        terms.len(),
        total
    );
    for term in terms {
        out.push_str(&format!("⚖️ {}\n", term.name));
        out.push_str(&format!(
            "   {} | 📅 {}\n",
            term.category,
            term.last_updated.format("%Y-%m-%d")
        ));
        out.push_str(&format!("   {}\n", term.definition));
        if !term.synonyms.is_empty() {
            out.push_str(&format!("   Sinônimos: {}\n", term.synonyms.join(", ")));
        }
        out.push_str(&format!("   📚 Fonte: {}\n\n", term.source_label));
    }
    out
}

pub fn render_not_found(name: &str) -> String {
    format!("❌ Termo não encontrado: {}\n", name)
}

fn render_related(link: &RelatedLink<'_>) -> String {
    if link.is_navigable() {
        format!("  → {}\n", link.label())
    } else {
        format!("  • {}\n", link.label())
    }
}

pub fn render_detail(detail: &TermDetail<'_>) -> String {
    let term = detail.term;
    let mut out = format!("⚖️ {}\n", term.name);
    out.push_str(&format!(
        "Área: {} | Fonte: {} | Data: {}\n",
        term.category,
        term.source_label,
        term.last_updated.format("%Y-%m-%d")
    ));
    out.push_str("\n📖 Definição\n");
    out.push_str(&format!("{}\n", term.definition));

    if let Some(example) = &term.example {
        out.push_str(&format!("\n💼 Exemplo Prático\n{}\n", example));
    }
    if let Some(legal_basis) = &term.legal_basis {
        out.push_str(&format!("\n📋 Detalhes Legais\n{}\n", legal_basis));
    }
    if let Some(jurisprudence) = &term.jurisprudence {
        out.push_str(&format!("\n⚖️ Jurisprudência\n{}\n", jurisprudence));
    }

    if !detail.court_records.is_empty() {
        out.push_str("\n🔍 Consulta aos Tribunais\n");
        for record in &detail.court_records {
            out.push_str(&format!("  {}: {}\n", record.court, record.summary));
            if let Some(citation) = &record.citation {
                out.push_str(&format!("    {}\n", citation));
            }
        }
    }

    if !term.synonyms.is_empty() {
        out.push_str("\n🏷️ Sinônimos\n");
        for synonym in &term.synonyms {
            out.push_str(&format!("  • {}\n", synonym));
        }
    }

    if !detail.related.is_empty() {
        out.push_str("\nRelacionados\n");
        for link in &detail.related {
            out.push_str(&render_related(link));
        }
    }

    out.push_str("\n📰 Notícias Recentes\n");
    out.push_str(&render_news_items(&detail.news));
    out
}

pub fn render_news_items(items: &[NewsItem]) -> String {
    if items.is_empty() {
        return "Não foram encontradas notícias recentes para este termo.\n".to_string();
    }

    let mut out = String::new();
    for item in items {
        out.push_str(&format!("  {}\n", item.title));
        out.push_str(&format!("  {}\n", item.summary));
        out.push_str(&format!(
            "  Fonte: {} | Data: {}\n",
            item.source_label,
            item.date.format("%Y-%m-%d")
        ));
        if let Some(url) = &item.url {
            out.push_str(&format!("  {}\n", url));
        }
        out.push('\n');
    }
    out
}

/// Horizontal bar chart of `(label, count)` pairs, longest bar = `CHART_WIDTH`.
pub fn render_bar_chart(rows: &[(String, usize)]) -> String {
    let max = rows.iter().map(|(_, count)| *count).max().unwrap_or(0);
    let label_width = rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (label, count) in rows {
        let bar_len = if max == 0 {
            0
        } else {
            (count * CHART_WIDTH).div_ceil(max)
        };
        let padding = label_width - label.chars().count();
        out.push_str(&format!(
            "{}{} {} {}\n",
            label,
            " ".repeat(padding),
            "█".repeat(bar_len),
            count
        ));
    }
    out
}

fn preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_CHARS {
        text.to_string()
    } else {
        let cut: String = text.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", cut)
    }
}

pub fn render_stats(stats: &CatalogueStats<'_>) -> String {
    let mut out = String::from("📈 Estatísticas do Acervo\n");
    out.push_str(&format!("  Total de Termos: {}\n", stats.total_terms));
    out.push_str(&format!("  Áreas do Direito: {}\n", stats.category_count));
    out.push_str(&format!("  Fontes Oficiais: {}\n", stats.source_count));
    let latest = stats
        .latest_update
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "N/A".to_string());
    out.push_str(&format!("  Atualização: {}\n", latest));

    if !stats.per_category.is_empty() {
        out.push_str("\n📊 Distribuição por Área do Direito\n");
        out.push_str(&render_bar_chart(&stats.per_category));
    }

    if !stats.recent.is_empty() {
        out.push_str("\n🔄 Termos Recentes\n");
        for term in &stats.recent {
            out.push_str(&format!("  {} ({})\n", term.name, term.category));
            out.push_str(&format!("    {}\n", preview(&term.definition)));
        }
    }

    if !stats.popular.is_empty() {
        out.push_str("\n🔥 Termos Populares\n");
        for term in &stats.popular {
            out.push_str(&format!("  • {}\n", term.name));
        }
    }
    out
}

pub fn render_labels(title: &str, labels: &[String]) -> String {
    let mut out = format!("{}\n", title);
    for label in labels {
        out.push_str(&format!("  • {}\n", label));
    }
    out
}

pub fn render_dangling(references: &[DanglingReference<'_>]) -> String {
    if references.is_empty() {
        return "Todos os termos relacionados existem no glossário.\n".to_string();
    }

    let mut out = format!(
        "🔗 {} termo(s) relacionado(s) sem verbete\n",
        references.len()
    );
    for reference in references {
        out.push_str(&format!("  {} → {}\n", reference.term, reference.label));
    }
    out
}

/// Project page; the counts come from the loaded catalogue.
pub fn render_about(stats: &CatalogueStats<'_>) -> String {
    let mut out = String::from("ℹ️ Sobre o Projeto\n");
    out.push_str("Glossário Jurídico: Descomplicando o Direito\n\n");
    out.push_str("🎯 Objetivos\n");
    for goal in [
        "Fornecer definições claras de termos jurídicos",
        "Contextualizar conceitos com exemplos práticos",
        "Integrar notícias relacionadas aos termos",
        "Oferecer ferramenta de estudo gratuita",
    ] {
        out.push_str(&format!("  • {}\n", goal));
    }

    out.push_str("\n📞 Fontes Oficiais\n");
    for court in Court::ALL {
        out.push_str(&format!("  • {}\n", court));
    }

    out.push_str("\n📊 Acervo\n");
    out.push_str(&format!("  • {} termos jurídicos\n", stats.total_terms));
    out.push_str(&format!("  • {} áreas do direito\n", stats.category_count));
    out.push_str(&format!("  • {} fontes citadas\n", stats.source_count));
    out
}

pub fn render_help() -> String {
    [
        "Comandos:",
        "  search <texto>     filtra por texto (vazio limpa)",
        "  category <área>    filtra por área",
        "  source <fonte>     filtra por fonte",
        "  open <termo>       abre um termo",
        "  follow <termo>     segue um termo relacionado",
        "  back               volta à listagem",
        "  reset              limpa filtros",
        "  quit               sai",
        "",
    ]
    .join("\n")
}
