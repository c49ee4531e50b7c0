//! Reducers - pure functions that produce new state from current state + action
//!
//! The root reducer delegates to one sub-reducer per feature. Each
//! sub-reducer matches only the actions it owns and leaves its state
//! unchanged for everything else, so an action never has effects outside
//! its feature.

use crate::actions::{Action, SearchAction, SearchInputAction};
use crate::state::{AppState, SearchInputState, SearchState};

/// Root reducer that orchestrates the feature sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    state.search = reduce_search(state.search, action);
    state.input = reduce_input(state.input, action);
    state
}

/// Reducer for the search lifecycle state
fn reduce_search(mut state: SearchState, action: &Action) -> SearchState {
    match action {
        Action::Search(SearchAction::FetchStart(term)) => {
            // Accepting a search flips the loading flag and clears the last
            // error; accumulated results are kept.
            state.is_fetching = true;
            state.error = None;
            log::debug!("Search started for {:?}", term);
        }

        Action::Search(SearchAction::Fetched(payload)) => {
            let count = payload.len();
            state.is_fetching = false;
            state.last_updated = Some(chrono::Local::now());
            state.users.extend(payload.clone().into_profiles());
            log::info!(
                "Search resolved with {} profile(s), {} accumulated",
                count,
                state.users.len()
            );
        }

        Action::Search(SearchAction::FetchError(message)) => {
            state.is_fetching = false;
            state.error = Some(message.clone());
            log::error!("Search failed: {}", message);
        }

        _ => {
            // Unhandled actions - no state change
        }
    }

    state
}

/// Reducer for the search-box input state
fn reduce_input(mut state: SearchInputState, action: &Action) -> SearchInputState {
    match action {
        Action::Input(SearchInputAction::Char(c)) => {
            state.value.push(*c);
        }
        Action::Input(SearchInputAction::Backspace) => {
            state.value.pop();
        }
        Action::Input(SearchInputAction::ClearLine) => {
            state.value.clear();
        }
        Action::Input(SearchInputAction::Submit) => {
            // Submission is interpreted by the search middleware against the
            // current value; the field keeps its text.
        }
        _ => {
            // Unhandled actions - no state change
        }
    }

    state
}
