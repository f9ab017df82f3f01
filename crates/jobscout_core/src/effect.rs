/// Side effects requested by `update`, executed by the shell.
///
/// Fetch effects carry already-built query parameters so the request always
/// reflects the state at the moment the effect was emitted, never a value
/// captured earlier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchJobPage {
        params: Vec<(String, String)>,
    },
    FetchFacetCounts {
        seq: u64,
        params: Vec<(String, String)>,
    },
    FetchFilterOptions,
    FetchFeed {
        params: Vec<(String, String)>,
    },
    SendChatMessage {
        text: String,
    },
    /// Presentation concern: scroll the result list back to the top.
    ScrollJobListTop,
    ShowToast {
        kind: ToastKind,
        text: String,
    },
    PersistTheme {
        theme: crate::Theme,
    },
    PersistProfile {
        profile: crate::UserProfile,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}
