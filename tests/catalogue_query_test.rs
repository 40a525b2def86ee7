use chrono::NaiveDate;
use legal_glossary::adapters::BuiltinTerms;
use legal_glossary::core::query::{filter_by_category, find_by_name, resolve_related, search};
use legal_glossary::core::TermSource;
use legal_glossary::{Catalogue, LabelFilter, SearchMode, Term, TermQuery};

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap()
}

async fn builtin_catalogue() -> Catalogue {
    let terms = BuiltinTerms.load_terms().await.unwrap();
    Catalogue::from_terms(terms).unwrap()
}

const MODES: [SearchMode; 3] = [SearchMode::Name, SearchMode::Standard, SearchMode::Broad];
const QUERIES: [&str; 8] = ["usuca", "DIREITO", "ção", "hc", "recurso", "sentença", "zzz", "a"];

fn field_matches(term: &Term, query: &str, mode: SearchMode) -> bool {
    let q = query.to_lowercase();
    let has = |s: &str| s.to_lowercase().contains(&q);
    match mode {
        SearchMode::Name => has(&term.name),
        SearchMode::Standard => has(&term.name) || has(&term.definition),
        SearchMode::Broad => {
            has(&term.name)
                || has(&term.definition)
                || term.synonyms.iter().any(|s| has(s))
                || term.related.iter().any(|r| has(r))
        }
    }
}

#[tokio::test]
async fn test_category_filter_only_returns_that_category() {
    let catalogue = builtin_catalogue().await;
    let all = catalogue.terms();

    for category in catalogue.distinct_categories() {
        let filtered = filter_by_category(&all, &LabelFilter::Only(category.clone()));
        assert!(!filtered.is_empty());
        assert!(filtered.iter().all(|t| t.category == category));
    }

    assert_eq!(filter_by_category(&all, &LabelFilter::All), all);
}

#[tokio::test]
async fn test_search_results_contain_query_in_searchable_fields() {
    let catalogue = builtin_catalogue().await;
    let all = catalogue.terms();

    for mode in MODES {
        assert_eq!(search(&all, "", mode), all);
        for query in QUERIES {
            let results = search(&all, query, mode);
            assert!(results.iter().all(|t| field_matches(t, query, mode)));

            // Nothing left behind either.
            let expected = all.iter().filter(|t| field_matches(t, query, mode)).count();
            assert_eq!(results.len(), expected, "query {:?} mode {:?}", query, mode);
        }
    }
}

#[tokio::test]
async fn test_search_is_idempotent() {
    let catalogue = builtin_catalogue().await;
    let all = catalogue.terms();

    for mode in MODES {
        for query in QUERIES {
            let once = search(&all, query, mode);
            assert_eq!(search(&once, query, mode), once);
        }
    }
}

#[tokio::test]
async fn test_filter_then_search_is_intersection() {
    let catalogue = builtin_catalogue().await;
    let all = catalogue.terms();

    for category in catalogue.distinct_categories() {
        for query in QUERIES {
            let filter = LabelFilter::Only(category.clone());
            let composed = search(&filter_by_category(&all, &filter), query, SearchMode::Standard);
            let expected: Vec<&Term> = all
                .iter()
                .copied()
                .filter(|t| t.category == category && field_matches(t, query, SearchMode::Standard))
                .collect();
            assert_eq!(composed, expected);

            let via_query = TermQuery::new()
                .category(filter)
                .text(query)
                .apply(&catalogue, SearchMode::Standard);
            assert_eq!(via_query, expected);
        }
    }
}

#[tokio::test]
async fn test_find_by_name_is_exact_and_matches_resolve_related() {
    let catalogue = builtin_catalogue().await;
    let all = catalogue.terms();

    assert!(catalogue.find_by_name("habeas corpus").is_none());

    for term in catalogue.list_all() {
        assert_eq!(catalogue.find_by_name(&term.name), Some(term));
        assert_eq!(find_by_name(&all, &term.name), Some(term));

        for label in &term.related {
            assert_eq!(catalogue.resolve_related(label), catalogue.find_by_name(label));
            assert_eq!(resolve_related(&all, label), catalogue.find_by_name(label));
            if let Some(target) = catalogue.resolve_related(label) {
                assert_eq!(&target.name, label);
            }
        }
    }
}

#[tokio::test]
async fn test_dangling_references_are_stable() {
    let first = builtin_catalogue().await;
    let second = builtin_catalogue().await;
    assert_eq!(first.dangling_references(), second.dangling_references());

    for reference in first.dangling_references() {
        assert!(first.resolve_related(reference.label).is_none());
    }
}

#[test]
fn test_scenario_habeas_corpus_category() {
    let catalogue = Catalogue::from_terms(vec![
        Term::new(
            "Habeas Corpus",
            "Remédio constitucional que protege a liberdade de locomoção.",
            "Direito Constitucional",
            "STF",
            date(1, 15),
        ),
        Term::new(
            "Usucapião",
            "Modo de aquisição da propriedade.",
            "Direito Civil",
            "STJ",
            date(1, 10),
        ),
    ])
    .unwrap();

    let result = filter_by_category(
        &catalogue.terms(),
        &LabelFilter::Only("Direito Constitucional".to_string()),
    );
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "Habeas Corpus");
}

#[tokio::test]
async fn test_scenario_partial_lowercase_query() {
    let catalogue = builtin_catalogue().await;
    for mode in MODES {
        let results = search(&catalogue.terms(), "usuca", mode);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Usucapião");
    }
}

#[tokio::test]
async fn test_scenario_missing_name_is_absent() {
    let catalogue = builtin_catalogue().await;
    assert!(catalogue.find_by_name("Does Not Exist").is_none());
    assert!(find_by_name(&catalogue.terms(), "Does Not Exist").is_none());
}

#[test]
fn test_scenario_category_label_in_related_is_dangling() {
    let catalogue = Catalogue::from_terms(vec![Term::new(
        "Prescrição",
        "Perda da pretensão pelo decurso do prazo.",
        "Direito Civil",
        "Planalto",
        date(1, 2),
    )
    .with_related(["Prazo", "Direito Civil"])])
    .unwrap();

    assert!(catalogue.resolve_related("Direito Civil").is_none());
    let term = catalogue.find_by_name("Prescrição").unwrap();
    let links = catalogue.related_links(term);
    assert!(links.iter().all(|link| !link.is_navigable()));
}

#[tokio::test]
async fn test_scenario_all_and_empty_query_is_whole_catalogue() {
    let catalogue = builtin_catalogue().await;
    let query = TermQuery::new()
        .category(LabelFilter::parse("all", "all"))
        .text("");
    assert!(query.is_unfiltered());

    let results = query.apply(&catalogue, SearchMode::Standard);
    let expected: Vec<&Term> = catalogue.list_all().iter().collect();
    assert_eq!(results, expected);
}

#[tokio::test]
async fn test_unmatched_filters_yield_empty_results() {
    let catalogue = builtin_catalogue().await;
    let query = TermQuery::new()
        .category(LabelFilter::Only("Direito Espacial".to_string()))
        .text("habeas");
    assert!(query.apply(&catalogue, SearchMode::Broad).is_empty());

    let empty = Catalogue::from_terms(Vec::new()).unwrap();
    assert!(TermQuery::new().text("x").apply(&empty, SearchMode::Standard).is_empty());
}
