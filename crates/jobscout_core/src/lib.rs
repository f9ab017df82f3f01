//! Jobscout core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, ToastKind};
pub use msg::Msg;
pub use state::{
    AppState, ChatEntry, ChatReplyView, FacetCount, FeedBoard, FilterCatalog, FilterKind,
    FilterSelection, JobListingPage, JobSummary, Theme, UserProfile,
};
pub use update::update;
pub use view_model::{AppViewModel, ChatView, FacetRowView, FeedView, JobCardView, ListingsView};
