use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use jobscout_logging::app_debug;

use crate::client::{AssistantApi, ClientSettings, JobsApi, ReqwestAssistantClient, ReqwestJobsClient};
use crate::{ApiError, ChatReply, FacetCounts, FeedBundle, FilterOptions, JobPage};

/// One request against a remote service. Query parameters arrive pre-built;
/// this layer never inspects or reorders them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCommand {
    FetchJobPage { params: Vec<(String, String)> },
    FetchFacetCounts { seq: u64, params: Vec<(String, String)> },
    FetchFilterOptions,
    FetchFeed { params: Vec<(String, String)> },
    SendChat { text: String },
}

/// Completion of an `ApiCommand`. Requests are never cancelled, so events
/// may arrive in any order; `seq` lets the consumer spot stale facet counts.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiEvent {
    JobPage(Result<JobPage, ApiError>),
    FacetCounts {
        seq: u64,
        result: Result<FacetCounts, ApiError>,
    },
    FilterOptions(Result<FilterOptions, ApiError>),
    Feed(Result<FeedBundle, ApiError>),
    Chat(Result<ChatReply, ApiError>),
}

/// Runs requests on a dedicated tokio runtime thread and reports their
/// completions over a channel. Submitting never blocks the caller.
#[derive(Clone)]
pub struct ApiHandle {
    cmd_tx: mpsc::Sender<ApiCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<ApiEvent>>>,
}

impl ApiHandle {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let jobs = Arc::new(ReqwestJobsClient::new(&settings)?);
        let assistant = Arc::new(ReqwestAssistantClient::new(&settings)?);
        let (cmd_tx, cmd_rx) = mpsc::channel::<ApiCommand>();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let jobs = jobs.clone();
                let assistant = assistant.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(jobs.as_ref(), assistant.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        })
    }

    pub fn submit(&self, command: ApiCommand) {
        let _ = self.cmd_tx.send(command);
    }

    pub fn try_recv(&self) -> Option<ApiEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    jobs: &dyn JobsApi,
    assistant: &dyn AssistantApi,
    command: ApiCommand,
    event_tx: mpsc::Sender<ApiEvent>,
) {
    let event = match command {
        ApiCommand::FetchJobPage { params } => {
            app_debug!("fetching job page, {} params", params.len());
            ApiEvent::JobPage(jobs.job_page(&params).await)
        }
        ApiCommand::FetchFacetCounts { seq, params } => {
            app_debug!("fetching facet counts seq={}", seq);
            ApiEvent::FacetCounts {
                seq,
                result: jobs.facet_counts(&params).await,
            }
        }
        ApiCommand::FetchFilterOptions => ApiEvent::FilterOptions(jobs.filter_options().await),
        ApiCommand::FetchFeed { params } => ApiEvent::Feed(jobs.feed(&params).await),
        ApiCommand::SendChat { text } => ApiEvent::Chat(assistant.send_message(&text).await),
    };
    let _ = event_tx.send(event);
}
