use std::sync::Once;

use jobscout_core::{
    update, AppState, Effect, FacetCount, FilterCatalog, FilterKind, JobSummary, Msg, ToastKind,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(jobscout_logging::initialize_for_tests);
}

fn job(title: &str) -> JobSummary {
    JobSummary {
        title: title.to_string(),
        company: "Acme".to_string(),
        location: "Riga".to_string(),
        category: "Pakalpojumi".to_string(),
        ..JobSummary::default()
    }
}

fn facet(label: &str, count: u64) -> FacetCount {
    FacetCount {
        label: label.to_string(),
        count,
    }
}

fn issued_seq(effects: &[Effect]) -> u64 {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::FetchFacetCounts { seq, .. } => Some(*seq),
            _ => None,
        })
        .expect("facet fetch effect")
}

fn error_toasts(effects: &[Effect]) -> Vec<&str> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::ShowToast {
                kind: ToastKind::Error,
                text,
            } => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

#[test]
fn job_page_success_replaces_page_and_scrolls_to_top() {
    init_logging();
    let state = AppState::new();

    let (mut state, effects) = update(
        state,
        Msg::JobPageLoaded {
            jobs: vec![job("Welder"), job("Cook")],
            total_pages: 12,
        },
    );

    assert_eq!(effects, vec![Effect::ScrollJobListTop]);
    let view = state.view();
    assert_eq!(view.listings.jobs.len(), 2);
    assert_eq!(view.listings.jobs[0].title, "Welder");
    assert_eq!(view.listings.current_page, 1);
    assert_eq!(view.listings.total_pages, 12);
    assert!(state.consume_dirty());
}

#[test]
fn job_page_failure_keeps_previous_page_and_toasts() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(
        state,
        Msg::JobPageLoaded {
            jobs: vec![job("Welder")],
            total_pages: 2,
        },
    );
    let before = state.view();

    let (state, effects) = update(
        state,
        Msg::JobPageFailed {
            message: "connection refused".to_string(),
        },
    );

    assert_eq!(state.view().listings, before.listings);
    let toasts = error_toasts(&effects);
    assert_eq!(toasts.len(), 1);
    assert!(toasts[0].starts_with("Failed to load jobs"));
}

#[test]
fn stale_facet_response_is_dropped() {
    init_logging();
    let state = AppState::new();

    // Two refreshes in flight; the first resolves last.
    let (state, effects) = update(
        state,
        Msg::FilterToggled {
            kind: FilterKind::City,
            value: "Riga".to_string(),
        },
    );
    let old_seq = issued_seq(&effects);
    let (state, effects) = update(state, Msg::PayFromChanged("500".to_string()));
    let new_seq = issued_seq(&effects);
    assert!(new_seq > old_seq);

    let (mut state, _) = update(
        state,
        Msg::FacetCountsLoaded {
            seq: new_seq,
            cities: vec![facet("Riga", 42)],
            categories: Vec::new(),
        },
    );
    assert!(state.consume_dirty());
    let (mut state, _) = update(
        state,
        Msg::FacetCountsLoaded {
            seq: old_seq,
            cities: vec![facet("Riga", 999)],
            categories: vec![facet("Vadība", 7)],
        },
    );

    // The later-issued response wins; the stale one never lands.
    let view = state.view();
    assert_eq!(view.listings.city_facets.len(), 1);
    assert_eq!(view.listings.city_facets[0].count, 42);
    assert!(view.listings.city_facets[0].selected);
    assert!(view.listings.category_facets.is_empty());
    assert!(!state.consume_dirty());
}

#[test]
fn latest_facet_response_applies() {
    init_logging();
    let state = AppState::new();
    let (state, effects) = update(
        state,
        Msg::FilterToggled {
            kind: FilterKind::Category,
            value: "Vadība".to_string(),
        },
    );
    let seq = issued_seq(&effects);

    let (state, effects) = update(
        state,
        Msg::FacetCountsLoaded {
            seq,
            cities: vec![facet("Riga", 10), facet("Liepāja", 3)],
            categories: vec![facet("Vadība", 5)],
        },
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.listings.city_facets.len(), 2);
    assert!(!view.listings.city_facets[0].selected);
    assert!(view.listings.category_facets[0].selected);
}

#[test]
fn stale_facet_failure_is_silent_latest_toasts() {
    init_logging();
    let state = AppState::new();
    let (state, effects) = update(
        state,
        Msg::FilterToggled {
            kind: FilterKind::City,
            value: "Riga".to_string(),
        },
    );
    let old_seq = issued_seq(&effects);
    let (state, effects) = update(state, Msg::PayToChanged("900".to_string()));
    let new_seq = issued_seq(&effects);

    let (state, effects) = update(
        state,
        Msg::FacetCountsFailed {
            seq: old_seq,
            message: "timeout".to_string(),
        },
    );
    assert!(effects.is_empty());

    let (_state, effects) = update(
        state,
        Msg::FacetCountsFailed {
            seq: new_seq,
            message: "timeout".to_string(),
        },
    );
    assert_eq!(error_toasts(&effects).len(), 1);
}

#[test]
fn filter_catalog_is_replaced_on_load() {
    init_logging();
    let state = AppState::new();
    let catalog = FilterCatalog {
        cities: vec!["Riga".to_string(), "Jelgava".to_string()],
        categories: vec!["Vadība".to_string()],
    };

    let (state, effects) = update(
        state,
        Msg::FilterOptionsLoaded {
            catalog: catalog.clone(),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.view().listings.catalog, catalog);
}

#[test]
fn filter_catalog_failure_toasts_and_keeps_state() {
    init_logging();
    let state = AppState::new();
    let before = state.view();

    let (state, effects) = update(
        state,
        Msg::FilterOptionsFailed {
            message: "500 Internal Server Error".to_string(),
        },
    );

    assert_eq!(state.view().listings, before.listings);
    assert_eq!(error_toasts(&effects).len(), 1);
}
