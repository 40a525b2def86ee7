use crate::core::catalogue::Catalogue;
use crate::domain::model::Term;
use chrono::NaiveDate;
use std::collections::HashMap;

pub const POPULAR_TERMS: usize = 6;

/// Aggregate figures for the home page metrics and the category chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueStats<'a> {
    pub total_terms: usize,
    pub category_count: usize,
    pub source_count: usize,
    pub latest_update: Option<NaiveDate>,
    /// Descending by count, then by category name.
    pub per_category: Vec<(String, usize)>,
    pub recent: Vec<&'a Term>,
    pub popular: Vec<&'a Term>,
}

impl<'a> CatalogueStats<'a> {
    pub fn compute(catalogue: &'a Catalogue, recent_limit: usize) -> Self {
        let terms = catalogue.list_all();

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for term in terms {
            *counts.entry(term.category.as_str()).or_default() += 1;
        }
        let mut per_category: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(category, count)| (category.to_string(), count))
            .collect();
        per_category.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        // Stable sort keeps catalogue order between terms sharing a date.
        let mut recent: Vec<&Term> = terms.iter().collect();
        recent.sort_by(|a, b| b.last_updated.cmp(&a.last_updated));
        recent.truncate(recent_limit);

        Self {
            total_terms: terms.len(),
            category_count: catalogue.distinct_categories().len(),
            source_count: catalogue.distinct_sources().len(),
            latest_update: terms.iter().map(|t| t.last_updated).max(),
            per_category,
            recent,
            popular: terms.iter().take(POPULAR_TERMS).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(name: &str, category: &str, day: u32) -> Term {
        Term::new(
            name,
            "def",
            category,
            "STJ",
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
        )
    }

    #[test]
    fn test_counts_and_recent_ordering() {
        let catalogue = Catalogue::from_terms(vec![
            term("Coisa Julgada", "Direito Processual Civil", 5),
            term("Usucapião", "Direito Civil", 10),
            term("Ação Rescisória", "Direito Processual Civil", 12),
            term("Recurso", "Direito Processual Civil", 10),
        ])
        .unwrap();

        let stats = CatalogueStats::compute(&catalogue, 3);
        assert_eq!(stats.total_terms, 4);
        assert_eq!(stats.category_count, 2);
        assert_eq!(stats.source_count, 1);
        assert_eq!(stats.latest_update, NaiveDate::from_ymd_opt(2024, 1, 12));
        assert_eq!(
            stats.per_category,
            vec![
                ("Direito Processual Civil".to_string(), 3),
                ("Direito Civil".to_string(), 1)
            ]
        );

        let recent: Vec<_> = stats.recent.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(recent, vec!["Ação Rescisória", "Usucapião", "Recurso"]);
        assert_eq!(stats.popular.len(), 4);
    }

    #[test]
    fn test_empty_catalogue() {
        let catalogue = Catalogue::from_terms(Vec::new()).unwrap();
        let stats = CatalogueStats::compute(&catalogue, 4);
        assert_eq!(stats.total_terms, 0);
        assert!(stats.latest_update.is_none());
        assert!(stats.per_category.is_empty());
    }
}
