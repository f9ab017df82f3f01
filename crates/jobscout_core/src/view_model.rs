use crate::{ChatEntry, FilterCatalog, Theme, UserProfile};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub theme: Theme,
    pub listings: ListingsView,
    pub feed: FeedView,
    pub chat: ChatView,
    pub profile: Option<UserProfile>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingsView {
    pub jobs: Vec<JobCardView>,
    pub current_page: u32,
    pub total_pages: u32,
    /// Full list of known filter values, independent of the current counts.
    pub catalog: FilterCatalog,
    pub city_facets: Vec<FacetRowView>,
    pub category_facets: Vec<FacetRowView>,
    pub pay_from: String,
    pub pay_to: String,
    pub panel_open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCardView {
    pub title: String,
    pub company: String,
    pub location: String,
    pub category: String,
    pub salary_line: String,
    pub url: Option<String>,
}

/// One row of the filter panel: a filter value, its live job count, and
/// whether it is part of the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetRowView {
    pub label: String,
    pub count: u64,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedView {
    pub recommended: Vec<JobCardView>,
    pub newest: Vec<JobCardView>,
    pub local: Vec<JobCardView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatView {
    pub transcript: Vec<ChatEntry>,
    pub draft: String,
    pub pending: bool,
}
