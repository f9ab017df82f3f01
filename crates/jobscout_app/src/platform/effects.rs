use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use jobscout_api::{ApiCommand, ApiError, ApiEvent, ApiHandle, ClientSettings};
use jobscout_core::{
    ChatReplyView, Effect, FacetCount, FeedBoard, FilterCatalog, JobSummary, Msg, ToastKind,
};
use jobscout_logging::{app_info, app_warn};

use super::app::ShellEvent;
use super::session::SessionStore;

/// Executes core effects: remote fetches go to the api handle, persistence
/// goes to the session store, presentation effects render directly.
pub(crate) struct EffectRunner {
    api: ApiHandle,
    store: SessionStore,
}

impl EffectRunner {
    pub(crate) fn new(
        event_tx: mpsc::Sender<ShellEvent>,
        store: SessionStore,
    ) -> Result<Self, ApiError> {
        let api = ApiHandle::new(ClientSettings::default())?;
        let runner = Self { api, store };
        runner.spawn_event_loop(event_tx);
        Ok(runner)
    }

    pub(crate) fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchJobPage { params } => {
                    app_info!("FetchJobPage params={:?}", params);
                    self.api.submit(ApiCommand::FetchJobPage { params });
                }
                Effect::FetchFacetCounts { seq, params } => {
                    app_info!("FetchFacetCounts seq={} params={:?}", seq, params);
                    self.api.submit(ApiCommand::FetchFacetCounts { seq, params });
                }
                Effect::FetchFilterOptions => {
                    self.api.submit(ApiCommand::FetchFilterOptions);
                }
                Effect::FetchFeed { params } => {
                    app_info!("FetchFeed params={:?}", params);
                    self.api.submit(ApiCommand::FetchFeed { params });
                }
                Effect::SendChatMessage { text } => {
                    self.api.submit(ApiCommand::SendChat { text });
                }
                Effect::ScrollJobListTop => {
                    // Terminal front-end prints pages whole; nothing to scroll.
                }
                Effect::ShowToast { kind, text } => {
                    let label = match kind {
                        ToastKind::Info => "info",
                        ToastKind::Success => "ok",
                        ToastKind::Error => "error",
                    };
                    println!("[{label}] {text}");
                }
                Effect::PersistTheme { theme } => {
                    self.store.save_theme(theme);
                }
                Effect::PersistProfile { profile } => {
                    self.store.save_profile(&profile);
                }
            }
        }
    }

    fn spawn_event_loop(&self, event_tx: mpsc::Sender<ShellEvent>) {
        let api = self.api.clone();
        thread::spawn(move || loop {
            if let Some(event) = api.try_recv() {
                let msg = map_event(event);
                if event_tx.send(ShellEvent::Core(msg)).is_err() {
                    return;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_event(event: ApiEvent) -> Msg {
    match event {
        ApiEvent::JobPage(Ok(page)) => Msg::JobPageLoaded {
            jobs: page.jobs.iter().map(map_job).collect(),
            total_pages: page.pages,
        },
        ApiEvent::JobPage(Err(err)) => {
            app_warn!("job page fetch failed: {}", err);
            Msg::JobPageFailed {
                message: err.to_string(),
            }
        }
        ApiEvent::FacetCounts { seq, result } => match result {
            Ok(counts) => Msg::FacetCountsLoaded {
                seq,
                cities: counts
                    .location_counts
                    .into_iter()
                    .map(|row| FacetCount {
                        label: row.location,
                        count: row.count,
                    })
                    .collect(),
                categories: counts
                    .category_counts
                    .into_iter()
                    .map(|row| FacetCount {
                        label: row.category,
                        count: row.count,
                    })
                    .collect(),
            },
            Err(err) => {
                app_warn!("facet count fetch failed (seq={}): {}", seq, err);
                Msg::FacetCountsFailed {
                    seq,
                    message: err.to_string(),
                }
            }
        },
        ApiEvent::FilterOptions(Ok(options)) => Msg::FilterOptionsLoaded {
            catalog: FilterCatalog {
                cities: options.locations,
                categories: options.categories,
            },
        },
        ApiEvent::FilterOptions(Err(err)) => Msg::FilterOptionsFailed {
            message: err.to_string(),
        },
        ApiEvent::Feed(Ok(bundle)) => Msg::FeedLoaded {
            board: FeedBoard {
                recommended: bundle.recommended.iter().map(map_job).collect(),
                newest: bundle.newest.iter().map(map_job).collect(),
                local: bundle.local.iter().map(map_job).collect(),
            },
        },
        ApiEvent::Feed(Err(err)) => {
            app_warn!("feed fetch failed: {}", err);
            Msg::FeedFailed {
                message: err.to_string(),
            }
        }
        ApiEvent::Chat(Ok(reply)) => Msg::ChatReplyArrived {
            reply: map_chat_reply(reply),
        },
        ApiEvent::Chat(Err(err)) => Msg::ChatFailed {
            message: err.to_string(),
        },
    }
}

fn map_job(job: &jobscout_api::Job) -> JobSummary {
    JobSummary {
        title: job.title.clone(),
        company: job.company.clone(),
        location: job.location.clone(),
        category: job.category.clone(),
        salary_type: job.salary_type.clone(),
        salary_min: job.salary_min.clone(),
        salary_max: job.salary_max.clone(),
        url: job.url.clone(),
        deadline: job.deadline.clone(),
    }
}

/// Assistant replies carry arbitrary SQL result rows. Rows that look like
/// job records become job cards; anything else is shown as raw JSON text.
fn map_chat_reply(reply: jobscout_api::ChatReply) -> ChatReplyView {
    let mut jobs = Vec::new();
    let mut other_rows = Vec::new();
    for row in reply.reply.unwrap_or_default() {
        if row.get("title").is_some() {
            if let Ok(job) = serde_json::from_value::<jobscout_api::Job>(row.clone()) {
                jobs.push(map_job(&job));
                continue;
            }
        }
        other_rows.push(
            serde_json::to_string_pretty(&row).unwrap_or_else(|_| row.to_string()),
        );
    }
    ChatReplyView {
        response_type: reply.response_type,
        sql_query: reply.sql_query,
        jobs,
        graph: reply.graph,
        text: if other_rows.is_empty() {
            None
        } else {
            Some(other_rows.join("\n"))
        },
    }
}
