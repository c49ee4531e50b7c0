//! Actions module
//!
//! All state changes in the application flow through these actions. Actions
//! are tagged by feature: search lifecycle actions on one side, search-box
//! input actions on the other. Views or other embedders construct them and
//! hand them to the store.

use gh_user_client::UserPayload;

/// Root action enum - tagged by feature
#[derive(Debug, Clone)]
pub enum Action {
    /// Search lifecycle actions
    Search(SearchAction),
    /// Search-box input actions
    Input(SearchInputAction),
    /// No-op action
    None,
}

/// Actions for the user search lifecycle
///
/// One search moves through the triple in order: `FetchStart` when it is
/// accepted, then exactly one of `Fetched` or `FetchError` when its request
/// resolves. Concurrent searches each carry their own completion.
#[derive(Debug, Clone)]
pub enum SearchAction {
    /// A search for the given term was accepted and its request is outbound
    FetchStart(String),
    /// The outstanding request resolved with matched profiles
    Fetched(UserPayload),
    /// The outstanding request failed (transport failure message)
    FetchError(String),
}

/// Generic search-box input actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchInputAction {
    /// Character typed into the search field
    Char(char),
    /// Backspace pressed - remove last character
    Backspace,
    /// Clear entire field (Cmd+Backspace or Ctrl+U)
    ClearLine,
    /// Enter pressed - submit the current term
    Submit,
}
