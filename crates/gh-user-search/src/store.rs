//! Store - holds application state and runs the dispatch loop

use crate::actions::Action;
use crate::middleware::{Dispatcher, Middleware};
use crate::reducer::reduce;
use crate::state::AppState;

/// Redux-style Store that holds application state and dispatches actions
///
/// The Store follows the Redux pattern:
/// - Centralized state management
/// - Actions are dispatched to modify state
/// - Pure reducers handle state transitions
/// - State is immutable (replaced on each action)
///
/// The store is an explicit value the embedder constructs and owns; there is
/// no process-wide instance, so tests and embedders can run isolated stores
/// side by side.
///
/// # Middleware Support
///
/// The store supports middleware for handling side effects:
/// ```rust,ignore
/// let mut store = Store::default();
/// store.add_middleware(LoggingMiddleware::new());
/// store.add_middleware(SearchMiddleware::new(client));
///
/// // Async dispatch through middleware
/// store.dispatch_async(action, &dispatcher).await;
/// ```
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
}

impl Store {
    /// Create a new store with initial state
    pub fn new(initial_state: AppState) -> Self {
        Self {
            state: initial_state,
            middleware: Vec::new(),
        }
    }

    /// Add middleware to the store
    ///
    /// Middleware is called in the order it was added.
    /// Add middleware before starting the event loop.
    pub fn add_middleware<M: Middleware + 'static>(&mut self, middleware: M) {
        self.middleware.push(Box::new(middleware));
    }

    /// Get immutable reference to current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Dispatch an action through middleware chain, then reducer
    ///
    /// Actions flow through the middleware chain before reaching the
    /// reducer, allowing side effects to be handled cleanly. The reducer
    /// application completes before this call returns, so state read
    /// afterwards already reflects the action.
    pub async fn dispatch_async(&mut self, action: Action, dispatcher: &Dispatcher) {
        // Run action through middleware chain
        let mut should_continue = true;
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, dispatcher).await {
                should_continue = false;
                break;
            }
        }

        // If not blocked by middleware, apply to reducer
        if should_continue {
            self.state = reduce(self.state.clone(), &action);
        }
    }

    /// Dispatch an action straight to the reducer, bypassing middleware
    ///
    /// Useful in tests or simple embeddings where no side effects are
    /// wired up. Prefer `dispatch_async()` when middleware is configured.
    pub fn dispatch(&mut self, action: Action) {
        self.state = reduce(self.state.clone(), &action);
    }

    /// Replace entire state (useful for initialization or testing)
    pub fn replace_state(&mut self, state: AppState) {
        self.state = state;
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{SearchAction, SearchInputAction};

    #[test]
    fn test_default_store_starts_idle() {
        let store = Store::default();

        assert!(store.state().search.users.is_empty());
        assert!(!store.state().search.is_fetching);
        assert_eq!(store.state().search.error, None);
        assert_eq!(store.state().input.value, "");
    }

    #[test]
    fn test_store_dispatch_fetch_start() {
        let mut store = Store::default();

        store.dispatch(Action::Search(SearchAction::FetchStart("x".to_string())));

        assert!(store.state().search.is_fetching);
    }

    #[test]
    fn test_store_dispatch_input_char() {
        let mut store = Store::default();

        store.dispatch(Action::Input(SearchInputAction::Char('a')));
        store.dispatch(Action::Input(SearchInputAction::Char('b')));

        assert_eq!(store.state().input.value, "ab");
    }

    #[test]
    fn test_replace_state() {
        let mut store = Store::default();
        let mut state = AppState::default();
        state.input.value = "seeded".to_string();

        store.replace_state(state);

        assert_eq!(store.state().input.value, "seeded");
    }
}
