#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Restore profile and theme from the persistent session store.
    SessionRestored {
        profile: Option<crate::UserProfile>,
        theme: crate::Theme,
    },
    /// Home screen came into focus.
    HomeOpened,
    /// Job listings screen came into focus.
    ListingsOpened,
    /// User toggled one city or category in the filter panel.
    FilterToggled {
        kind: crate::FilterKind,
        value: String,
    },
    /// User edited the lower pay bound (raw text, may be empty).
    PayFromChanged(String),
    /// User edited the upper pay bound (raw text, may be empty).
    PayToChanged(String),
    /// User requested a result page (prev/next/jump).
    PageRequested(u32),
    /// User opened or closed the filter panel.
    FilterPanelToggled(bool),
    /// User clicked Apply Filters.
    ApplyFiltersClicked,
    /// User clicked Clear All Filters.
    ClearFiltersClicked,
    /// Job page fetch resolved.
    JobPageLoaded {
        jobs: Vec<crate::JobSummary>,
        total_pages: u32,
    },
    /// Job page fetch failed.
    JobPageFailed { message: String },
    /// Facet-count fetch resolved; `seq` identifies the issuing request.
    FacetCountsLoaded {
        seq: u64,
        cities: Vec<crate::FacetCount>,
        categories: Vec<crate::FacetCount>,
    },
    /// Facet-count fetch failed.
    FacetCountsFailed { seq: u64, message: String },
    /// Filter option catalog fetch resolved.
    FilterOptionsLoaded { catalog: crate::FilterCatalog },
    /// Filter option catalog fetch failed.
    FilterOptionsFailed { message: String },
    /// Home feed fetch resolved.
    FeedLoaded { board: crate::FeedBoard },
    /// Home feed fetch failed.
    FeedFailed { message: String },
    /// User edited the chat input box.
    ChatDraftChanged(String),
    /// User clicked Send.
    ChatSubmitted,
    /// Assistant reply arrived.
    ChatReplyArrived { reply: crate::ChatReplyView },
    /// Assistant request failed or timed out.
    ChatFailed { message: String },
    /// User edited and saved the profile form.
    ProfileUpdated { profile: crate::UserProfile },
    /// User clicked Toggle Theme.
    ThemeToggled,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
