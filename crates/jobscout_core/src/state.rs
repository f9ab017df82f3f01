use crate::view_model::{
    AppViewModel, ChatView, FacetRowView, FeedView, JobCardView, ListingsView,
};

/// Which multi-select filter dimension a toggle targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    City,
    Category,
}

/// User-chosen constraints for the job listing query.
///
/// Selections keep insertion order and contain no duplicates. Pay bounds are
/// stored as raw input text; an empty string means unset. The raw text is
/// passed through to the server unvalidated, so `pay_from > pay_to` is
/// representable and left for the server to interpret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    pub cities: Vec<String>,
    pub categories: Vec<String>,
    pub pay_from: String,
    pub pay_to: String,
    pub page: u32,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            cities: Vec::new(),
            categories: Vec::new(),
            pay_from: String::new(),
            pay_to: String::new(),
            page: 1,
        }
    }
}

impl FilterSelection {
    pub(crate) fn toggle(&mut self, kind: FilterKind, value: &str) {
        let list = match kind {
            FilterKind::City => &mut self.cities,
            FilterKind::Category => &mut self.categories,
        };
        if let Some(pos) = list.iter().position(|item| item == value) {
            list.remove(pos);
        } else {
            list.push(value.to_string());
        }
    }

    pub(crate) fn clear(&mut self) {
        self.cities.clear();
        self.categories.clear();
        self.pay_from.clear();
        self.pay_to.clear();
        self.page = 1;
    }

    /// Query parameters for the paginated job search. A parameter is omitted
    /// when its backing collection is empty or its scalar is unset.
    pub fn job_page_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("page".to_string(), self.page.to_string())];
        params.extend(self.filter_params());
        params
    }

    /// Query parameters for the facet-count lookup. Same as the job search
    /// minus `page`, since facet counts do not depend on the page number.
    pub fn facet_params(&self) -> Vec<(String, String)> {
        self.filter_params()
    }

    fn filter_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if !self.cities.is_empty() {
            params.push(("location".to_string(), self.cities.join(",")));
        }
        if !self.categories.is_empty() {
            params.push(("categories".to_string(), self.categories.join(",")));
        }
        if !self.pay_from.is_empty() {
            params.push(("payFrom".to_string(), self.pay_from.clone()));
        }
        if !self.pay_to.is_empty() {
            params.push(("payTo".to_string(), self.pay_to.clone()));
        }
        params
    }
}

/// Job count for one value of a single filter dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetCount {
    pub label: String,
    pub count: u64,
}

/// One job record, passed through from the remote service unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobSummary {
    pub title: String,
    pub company: String,
    pub location: String,
    pub category: String,
    pub salary_type: Option<String>,
    pub salary_min: Option<String>,
    pub salary_max: Option<String>,
    pub url: Option<String>,
    pub deadline: Option<String>,
}

/// One page of job search results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobListingPage {
    pub items: Vec<JobSummary>,
    pub current_page: u32,
    pub total_pages: u32,
}

impl Default for JobListingPage {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current_page: 1,
            total_pages: 1,
        }
    }
}

/// Static catalog of filterable values, fetched once per listings mount.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCatalog {
    pub cities: Vec<String>,
    pub categories: Vec<String>,
}

/// Home feed sections.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedBoard {
    pub recommended: Vec<JobSummary>,
    pub newest: Vec<JobSummary>,
    pub local: Vec<JobSummary>,
}

/// Decoded assistant reply, shape depends on `response_type`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatReplyView {
    pub response_type: String,
    pub sql_query: Option<String>,
    pub jobs: Vec<JobSummary>,
    pub graph: Option<String>,
    pub text: Option<String>,
}

/// One entry in the chat transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEntry {
    User { text: String },
    Bot { reply: ChatReplyView },
    /// Request failures render inline in the transcript, not as a toast.
    Error { text: String },
}

/// Color theme flag persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Locally stored user profile, restored from the session store at startup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserProfile {
    pub name: String,
    pub surname: String,
    pub location: String,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct ChatState {
    transcript: Vec<ChatEntry>,
    draft: String,
    pending: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct ListingsState {
    selection: FilterSelection,
    catalog: FilterCatalog,
    city_counts: Vec<FacetCount>,
    category_counts: Vec<FacetCount>,
    page: JobListingPage,
    panel_open: bool,
    /// Latest issued facet-count request sequence number. A facet response
    /// is applied only when it carries this exact value, so a slower older
    /// request can never overwrite the counts of a newer one.
    facet_seq: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    listings: ListingsState,
    feed: FeedBoard,
    chat: ChatState,
    profile: Option<UserProfile>,
    theme: Theme,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            theme: self.theme,
            listings: ListingsView {
                jobs: self.listings.page.items.iter().map(job_card).collect(),
                current_page: self.listings.page.current_page,
                total_pages: self.listings.page.total_pages,
                catalog: self.listings.catalog.clone(),
                city_facets: facet_rows(&self.listings.city_counts, &self.listings.selection.cities),
                category_facets: facet_rows(
                    &self.listings.category_counts,
                    &self.listings.selection.categories,
                ),
                pay_from: self.listings.selection.pay_from.clone(),
                pay_to: self.listings.selection.pay_to.clone(),
                panel_open: self.listings.panel_open,
            },
            feed: FeedView {
                recommended: self.feed.recommended.iter().map(job_card).collect(),
                newest: self.feed.newest.iter().map(job_card).collect(),
                local: self.feed.local.iter().map(job_card).collect(),
            },
            chat: ChatView {
                transcript: self.chat.transcript.clone(),
                draft: self.chat.draft.clone(),
                pending: self.chat.pending,
            },
            profile: self.profile.clone(),
            dirty: self.dirty,
        }
    }

    // --- filter selection ---

    pub(crate) fn toggle_filter(&mut self, kind: FilterKind, value: &str) {
        self.listings.selection.toggle(kind, value);
        self.dirty = true;
    }

    pub(crate) fn set_pay_from(&mut self, raw: String) {
        self.listings.selection.pay_from = raw;
        self.dirty = true;
    }

    pub(crate) fn set_pay_to(&mut self, raw: String) {
        self.listings.selection.pay_to = raw;
        self.dirty = true;
    }

    pub(crate) fn clear_filters(&mut self) {
        self.listings.selection.clear();
        self.dirty = true;
    }

    /// Clamps the requested page to `[1, total_pages]` and applies it.
    /// Returns true when the effective page actually changed.
    pub(crate) fn request_page(&mut self, requested: u32) -> bool {
        let clamped = requested.clamp(1, self.listings.page.total_pages.max(1));
        if clamped == self.listings.selection.page {
            return false;
        }
        self.listings.selection.page = clamped;
        self.dirty = true;
        true
    }

    pub(crate) fn reset_page(&mut self) {
        self.listings.selection.page = 1;
        self.dirty = true;
    }

    pub(crate) fn set_panel_open(&mut self, open: bool) {
        if self.listings.panel_open != open {
            self.listings.panel_open = open;
            self.dirty = true;
        }
    }

    pub(crate) fn job_page_params(&self) -> Vec<(String, String)> {
        self.listings.selection.job_page_params()
    }

    pub(crate) fn facet_params(&self) -> Vec<(String, String)> {
        self.listings.selection.facet_params()
    }

    /// Allocates the sequence number for the next facet-count request,
    /// invalidating any response still in flight.
    pub(crate) fn next_facet_seq(&mut self) -> u64 {
        self.listings.facet_seq += 1;
        self.listings.facet_seq
    }

    pub(crate) fn is_latest_facet_seq(&self, seq: u64) -> bool {
        seq == self.listings.facet_seq
    }

    // --- fetch results ---

    /// Replaces the listing page wholesale. The server reports only the item
    /// list and the total page count; the current page is client state.
    pub(crate) fn apply_job_page(&mut self, items: Vec<JobSummary>, total_pages: u32) {
        self.listings.page = JobListingPage {
            items,
            current_page: self.listings.selection.page,
            total_pages: total_pages.max(1),
        };
        self.dirty = true;
    }

    /// Applies facet counts if `seq` is still the latest issued request.
    /// Returns false for a stale response, which is dropped untouched.
    pub(crate) fn apply_facet_counts(
        &mut self,
        seq: u64,
        cities: Vec<FacetCount>,
        categories: Vec<FacetCount>,
    ) -> bool {
        if !self.is_latest_facet_seq(seq) {
            return false;
        }
        self.listings.city_counts = cities;
        self.listings.category_counts = categories;
        self.dirty = true;
        true
    }

    pub(crate) fn set_catalog(&mut self, catalog: FilterCatalog) {
        self.listings.catalog = catalog;
        self.dirty = true;
    }

    pub(crate) fn apply_feed(&mut self, feed: FeedBoard) {
        self.feed = feed;
        self.dirty = true;
    }

    // --- chat ---

    pub(crate) fn set_chat_draft(&mut self, text: String) {
        self.chat.draft = text;
        self.dirty = true;
    }

    pub(crate) fn chat_draft(&self) -> &str {
        &self.chat.draft
    }

    pub(crate) fn chat_pending(&self) -> bool {
        self.chat.pending
    }

    pub(crate) fn begin_chat_request(&mut self) -> String {
        let text = std::mem::take(&mut self.chat.draft);
        self.chat.transcript.push(ChatEntry::User { text: text.clone() });
        self.chat.pending = true;
        self.dirty = true;
        text
    }

    pub(crate) fn push_chat_reply(&mut self, reply: ChatReplyView) {
        self.chat.transcript.push(ChatEntry::Bot { reply });
        self.chat.pending = false;
        self.dirty = true;
    }

    pub(crate) fn push_chat_error(&mut self, text: String) {
        self.chat.transcript.push(ChatEntry::Error { text });
        self.chat.pending = false;
        self.dirty = true;
    }

    // --- session ---

    pub(crate) fn restore_session(&mut self, profile: Option<UserProfile>, theme: Theme) {
        self.profile = profile;
        self.theme = theme;
        self.dirty = true;
    }

    pub(crate) fn set_profile(&mut self, profile: UserProfile) {
        self.profile = Some(profile);
        self.dirty = true;
    }

    pub(crate) fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub(crate) fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.dirty = true;
        self.theme
    }
}

fn facet_rows(counts: &[FacetCount], selected: &[String]) -> Vec<FacetRowView> {
    counts
        .iter()
        .map(|facet| FacetRowView {
            label: facet.label.clone(),
            count: facet.count,
            selected: selected.iter().any(|item| item == &facet.label),
        })
        .collect()
}

fn job_card(job: &JobSummary) -> JobCardView {
    let salary_line = format!(
        "{}: {} - {}",
        job.salary_type.as_deref().unwrap_or("salary"),
        job.salary_min.as_deref().unwrap_or("?"),
        job.salary_max.as_deref().unwrap_or("?"),
    );
    JobCardView {
        title: job.title.clone(),
        company: job.company.clone(),
        location: job.location.clone(),
        category: job.category.clone(),
        salary_line,
        url: job.url.clone(),
    }
}
