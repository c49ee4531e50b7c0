//! Application state module
//!
//! Contains all state types used by the application, organized by feature.
//! State is only ever replaced through the reducer; nothing mutates it in
//! place outside a dispatch.

use chrono::{DateTime, Local};
use gh_user_client::UserProfile;

/// State for the user search feature
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Profiles accumulated across all completed searches, in arrival order.
    /// Append-only: a new search never clears or deduplicates the list.
    pub users: Vec<UserProfile>,
    /// True exactly while a request is outstanding
    pub is_fetching: bool,
    /// Message of the most recent failure; cleared when a new search starts
    pub error: Option<String>,
    /// Timestamp of the last successful fetch
    pub last_updated: Option<DateTime<Local>>,
}

/// State for the search input field
///
/// The field is plain data plus reducer transitions; submission is an
/// explicit action interpreted against the current value, not a method on
/// some widget holding its own text.
#[derive(Debug, Clone, Default)]
pub struct SearchInputState {
    /// Current text of the search box
    pub value: String,
}

/// Application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub search: SearchState,
    pub input: SearchInputState,
}
