//! Read accessors for the application state
//!
//! Pure projections used by the embedding UI to render: the accumulated
//! result list, the loading flag, and the latest error message. Selectors
//! never mutate state; repeated calls on the same state return equal values.

use crate::state::AppState;
use chrono::{DateTime, Local};
use gh_user_client::UserProfile;

/// Profiles accumulated across all completed searches, in arrival order
pub fn users(state: &AppState) -> &[UserProfile] {
    &state.search.users
}

/// Whether a search request is currently outstanding
pub fn is_fetching(state: &AppState) -> bool {
    state.search.is_fetching
}

/// Message of the most recent failure, if any
pub fn error(state: &AppState) -> Option<&str> {
    state.search.error.as_deref()
}

/// Current text of the search box
pub fn input_value(state: &AppState) -> &str {
    &state.input.value
}

/// When the last successful fetch completed, if any
pub fn last_updated(state: &AppState) -> Option<DateTime<Local>> {
    state.search.last_updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{SearchInputState, SearchState};
    use gh_user_client::UserProfile;

    fn sample_state() -> AppState {
        AppState {
            search: SearchState {
                users: vec![UserProfile {
                    id: 1,
                    login: "octocat".to_string(),
                    name: Some("The Octocat".to_string()),
                    avatar_url: "u".to_string(),
                }],
                is_fetching: true,
                error: Some("boom".to_string()),
                last_updated: None,
            },
            input: SearchInputState {
                value: "octo".to_string(),
            },
        }
    }

    #[test]
    fn test_selectors_project_their_fields() {
        let state = sample_state();

        assert_eq!(users(&state).len(), 1);
        assert_eq!(users(&state)[0].login, "octocat");
        assert!(is_fetching(&state));
        assert_eq!(error(&state), Some("boom"));
        assert_eq!(input_value(&state), "octo");
        assert_eq!(last_updated(&state), None);
    }

    #[test]
    fn test_selectors_are_idempotent() {
        let state = sample_state();

        assert_eq!(users(&state), users(&state));
        assert_eq!(is_fetching(&state), is_fetching(&state));
        assert_eq!(error(&state), error(&state));
        assert_eq!(input_value(&state), input_value(&state));

        // Reading never mutates the underlying state
        assert_eq!(state.search.users.len(), 1);
        assert!(state.search.is_fetching);
        assert_eq!(state.search.error.as_deref(), Some("boom"));
    }
}
