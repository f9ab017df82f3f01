//! Jobscout api: HTTP clients for the jobs and assistant services.
mod client;
mod service;
mod types;

pub use client::{
    AssistantApi, ClientSettings, JobsApi, ReqwestAssistantClient, ReqwestJobsClient,
};
pub use service::{ApiCommand, ApiEvent, ApiHandle};
pub use types::{
    ApiError, CategoryCount, ChatReply, FacetCounts, FeedBundle, FilterOptions, Job, JobPage,
    LocationCount,
};
