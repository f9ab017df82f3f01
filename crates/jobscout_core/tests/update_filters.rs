use std::sync::Once;

use jobscout_core::{update, AppState, Effect, FilterKind, Msg};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(jobscout_logging::initialize_for_tests);
}

fn toggle(state: AppState, kind: FilterKind, value: &str) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::FilterToggled {
            kind,
            value: value.to_string(),
        },
    )
}

fn param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn job_fetches(effects: &[Effect]) -> Vec<&Vec<(String, String)>> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::FetchJobPage { params } => Some(params),
            _ => None,
        })
        .collect()
}

fn facet_fetches(effects: &[Effect]) -> Vec<(u64, &Vec<(String, String)>)> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::FetchFacetCounts { seq, params } => Some((*seq, params)),
            _ => None,
        })
        .collect()
}

#[test]
fn toggle_refreshes_facets_only() {
    init_logging();
    let state = AppState::new();

    let (state, effects) = toggle(state, FilterKind::City, "Riga");
    assert_eq!(effects.len(), 1);
    assert!(job_fetches(&effects).is_empty());
    let facets = facet_fetches(&effects);
    assert_eq!(facets.len(), 1);
    assert_eq!(param(facets[0].1, "location"), Some("Riga"));

    let mut state = state;
    assert!(state.consume_dirty());
}

#[test]
fn double_toggle_returns_selection_to_empty() {
    init_logging();
    let state = AppState::new();

    let (state, _effects) = toggle(state, FilterKind::Category, "Vadība");
    let (state, effects) = toggle(state, FilterKind::Category, "Vadība");

    let facets = facet_fetches(&effects);
    assert_eq!(facets.len(), 1);
    // Selection is back to empty, so the query omits the parameter entirely.
    assert_eq!(param(facets[0].1, "categories"), None);
    assert!(state
        .view()
        .listings
        .category_facets
        .iter()
        .all(|f| !f.selected));
}

#[test]
fn query_omits_unset_parameters() {
    init_logging();
    let state = AppState::new();

    let (state, _) = toggle(state, FilterKind::City, "Riga");
    let (_state, effects) = update(state, Msg::PayFromChanged("500".to_string()));

    let facets = facet_fetches(&effects);
    assert_eq!(facets.len(), 1);
    let params = facets[0].1;
    assert_eq!(param(params, "location"), Some("Riga"));
    assert_eq!(param(params, "payFrom"), Some("500"));
    assert_eq!(param(params, "categories"), None);
    assert_eq!(param(params, "payTo"), None);
    // Facet queries never carry a page parameter.
    assert_eq!(param(params, "page"), None);
}

#[test]
fn multi_select_values_are_comma_joined_in_insertion_order() {
    init_logging();
    let state = AppState::new();

    let (state, _) = toggle(state, FilterKind::City, "Riga");
    let (state, effects) = toggle(state, FilterKind::City, "Liepāja");

    let facets = facet_fetches(&effects);
    assert_eq!(param(facets[0].1, "location"), Some("Riga,Liepāja"));

    // Removing the first keeps the second.
    let (_state, effects) = toggle(state, FilterKind::City, "Riga");
    let facets = facet_fetches(&effects);
    assert_eq!(param(facets[0].1, "location"), Some("Liepāja"));
}

#[test]
fn pay_change_triggers_exactly_one_facet_refresh_and_no_job_fetch() {
    init_logging();
    let state = AppState::new();

    let (state, effects) = update(state, Msg::PayFromChanged("700".to_string()));
    assert_eq!(facet_fetches(&effects).len(), 1);
    assert_eq!(job_fetches(&effects).len(), 0);

    let (_state, effects) = update(state, Msg::PayToChanged("900".to_string()));
    assert_eq!(facet_fetches(&effects).len(), 1);
    assert_eq!(job_fetches(&effects).len(), 0);
}

#[test]
fn pay_range_is_passed_through_unvalidated() {
    init_logging();
    let state = AppState::new();

    // Inverted bounds are stored and forwarded as-is.
    let (state, _) = update(state, Msg::PayFromChanged("900".to_string()));
    let (_state, effects) = update(state, Msg::PayToChanged("500".to_string()));

    let facets = facet_fetches(&effects);
    let params = facets[0].1;
    assert_eq!(param(params, "payFrom"), Some("900"));
    assert_eq!(param(params, "payTo"), Some("500"));
}

#[test]
fn page_change_triggers_exactly_one_job_fetch_and_no_facet_refresh() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(
        state,
        Msg::JobPageLoaded {
            jobs: Vec::new(),
            total_pages: 5,
        },
    );

    let (_state, effects) = update(state, Msg::PageRequested(2));
    let jobs = job_fetches(&effects);
    assert_eq!(jobs.len(), 1);
    assert_eq!(param(jobs[0], "page"), Some("2"));
    assert_eq!(facet_fetches(&effects).len(), 0);
}

#[test]
fn page_request_is_clamped_to_known_bounds() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(
        state,
        Msg::JobPageLoaded {
            jobs: Vec::new(),
            total_pages: 3,
        },
    );

    let (state, effects) = update(state, Msg::PageRequested(99));
    let jobs = job_fetches(&effects);
    assert_eq!(param(jobs[0], "page"), Some("3"));

    // Requesting the page we are already on is a no-op.
    let (_state, effects) = update(state, Msg::PageRequested(3));
    assert!(effects.is_empty());
}

#[test]
fn apply_always_fetches_page_one() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(
        state,
        Msg::JobPageLoaded {
            jobs: Vec::new(),
            total_pages: 9,
        },
    );
    let (state, _) = update(state, Msg::PageRequested(7));
    let (state, _) = toggle(state, FilterKind::City, "Riga");
    let (state, _) = update(state, Msg::FilterPanelToggled(true));

    let (state, effects) = update(state, Msg::ApplyFiltersClicked);

    let jobs = job_fetches(&effects);
    assert_eq!(jobs.len(), 1);
    // The query reflects the state after the page reset, not a stale capture.
    assert_eq!(param(jobs[0], "page"), Some("1"));
    assert_eq!(param(jobs[0], "location"), Some("Riga"));
    assert_eq!(facet_fetches(&effects).len(), 0);
    assert!(!state.view().listings.panel_open);
}

#[test]
fn clear_resets_selection_and_issues_both_fetch_kinds() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(
        state,
        Msg::JobPageLoaded {
            jobs: Vec::new(),
            total_pages: 4,
        },
    );
    let (state, _) = toggle(state, FilterKind::City, "Riga");
    let (state, _) = toggle(state, FilterKind::Category, "Pakalpojumi");
    let (state, _) = update(state, Msg::PayFromChanged("500".to_string()));
    let (state, _) = update(state, Msg::PayToChanged("900".to_string()));
    let (state, _) = update(state, Msg::PageRequested(4));

    let (state, effects) = update(state, Msg::ClearFiltersClicked);

    let jobs = job_fetches(&effects);
    let facets = facet_fetches(&effects);
    assert_eq!(jobs.len(), 1);
    assert_eq!(facets.len(), 1);
    // Every filter parameter is gone; only the page remains, back at 1.
    assert_eq!(jobs[0], &vec![("page".to_string(), "1".to_string())]);
    assert!(facets[0].1.is_empty());

    let view = state.view();
    assert_eq!(view.listings.pay_from, "");
    assert_eq!(view.listings.pay_to, "");
}

#[test]
fn listings_open_fetches_page_catalog_and_counts() {
    init_logging();
    let state = AppState::new();
    let (_state, effects) = update(state, Msg::ListingsOpened);

    assert_eq!(job_fetches(&effects).len(), 1);
    assert_eq!(facet_fetches(&effects).len(), 1);
    assert!(effects.contains(&Effect::FetchFilterOptions));
}
