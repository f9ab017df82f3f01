use crate::{AppState, Effect, Msg, ToastKind};

/// Pure update function: applies a message to state and returns any effects.
///
/// Refresh policy: any change to the selected cities, categories or pay
/// bounds reissues only the facet-count fetch; a page change reissues only
/// the job-page fetch. A filter change never implies a job-page fetch until
/// the user applies it, except Clear All which does both at once.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SessionRestored { profile, theme } => {
            state.restore_session(profile, theme);
            Vec::new()
        }
        Msg::HomeOpened => match state.profile() {
            Some(profile) => {
                // The feed endpoint expects both parameters even when empty.
                let params = vec![
                    ("categories".to_string(), profile.categories.join(",")),
                    ("location".to_string(), profile.location.clone()),
                ];
                vec![Effect::FetchFeed { params }]
            }
            None => Vec::new(),
        },
        Msg::ListingsOpened => {
            let seq = state.next_facet_seq();
            vec![
                Effect::FetchJobPage {
                    params: state.job_page_params(),
                },
                Effect::FetchFilterOptions,
                Effect::FetchFacetCounts {
                    seq,
                    params: state.facet_params(),
                },
            ]
        }
        Msg::FilterToggled { kind, value } => {
            state.toggle_filter(kind, &value);
            vec![facet_refresh(&mut state)]
        }
        Msg::PayFromChanged(raw) => {
            state.set_pay_from(raw);
            vec![facet_refresh(&mut state)]
        }
        Msg::PayToChanged(raw) => {
            state.set_pay_to(raw);
            vec![facet_refresh(&mut state)]
        }
        Msg::PageRequested(requested) => {
            if state.request_page(requested) {
                vec![Effect::FetchJobPage {
                    params: state.job_page_params(),
                }]
            } else {
                Vec::new()
            }
        }
        Msg::FilterPanelToggled(open) => {
            state.set_panel_open(open);
            Vec::new()
        }
        Msg::ApplyFiltersClicked => {
            // Single transaction: reset the page first, then derive the
            // query from the post-reset state.
            state.reset_page();
            let params = state.job_page_params();
            state.set_panel_open(false);
            vec![Effect::FetchJobPage { params }]
        }
        Msg::ClearFiltersClicked => {
            state.clear_filters();
            let seq = state.next_facet_seq();
            vec![
                Effect::FetchJobPage {
                    params: state.job_page_params(),
                },
                Effect::FetchFacetCounts {
                    seq,
                    params: state.facet_params(),
                },
            ]
        }
        Msg::JobPageLoaded { jobs, total_pages } => {
            state.apply_job_page(jobs, total_pages);
            vec![Effect::ScrollJobListTop]
        }
        Msg::JobPageFailed { message } => {
            vec![error_toast("Failed to load jobs", &message)]
        }
        Msg::FacetCountsLoaded {
            seq,
            cities,
            categories,
        } => {
            // Returns false for a stale in-flight response; drop it.
            state.apply_facet_counts(seq, cities, categories);
            Vec::new()
        }
        Msg::FacetCountsFailed { seq, message } => {
            if state.is_latest_facet_seq(seq) {
                vec![error_toast("Failed to load filter counts", &message)]
            } else {
                Vec::new()
            }
        }
        Msg::FilterOptionsLoaded { catalog } => {
            state.set_catalog(catalog);
            Vec::new()
        }
        Msg::FilterOptionsFailed { message } => {
            vec![error_toast("Failed to load filters", &message)]
        }
        Msg::FeedLoaded { board } => {
            state.apply_feed(board);
            Vec::new()
        }
        Msg::FeedFailed { message } => {
            vec![error_toast("Failed to load job feed", &message)]
        }
        Msg::ChatDraftChanged(text) => {
            state.set_chat_draft(text);
            Vec::new()
        }
        Msg::ChatSubmitted => {
            if state.chat_draft().is_empty() || state.chat_pending() {
                return (state, Vec::new());
            }
            let text = state.begin_chat_request();
            vec![Effect::SendChatMessage { text }]
        }
        Msg::ChatReplyArrived { reply } => {
            state.push_chat_reply(reply);
            Vec::new()
        }
        Msg::ChatFailed { message } => {
            state.push_chat_error(format!("Error: {message}"));
            Vec::new()
        }
        Msg::ProfileUpdated { profile } => {
            state.set_profile(profile.clone());
            vec![
                Effect::PersistProfile { profile },
                Effect::ShowToast {
                    kind: ToastKind::Success,
                    text: "Profile updated!".to_string(),
                },
            ]
        }
        Msg::ThemeToggled => {
            let theme = state.toggle_theme();
            vec![Effect::PersistTheme { theme }]
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Invalidates any in-flight facet request and issues a fresh one derived
/// from the current selection.
fn facet_refresh(state: &mut AppState) -> Effect {
    let seq = state.next_facet_seq();
    Effect::FetchFacetCounts {
        seq,
        params: state.facet_params(),
    }
}

fn error_toast(prefix: &str, message: &str) -> Effect {
    Effect::ShowToast {
        kind: ToastKind::Error,
        text: format!("{prefix}: {message}"),
    }
}
