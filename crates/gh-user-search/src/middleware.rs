//! Middleware system for the Redux-style store
//!
//! Middleware sits between action dispatch and reducer execution, allowing
//! side effects, async operations, logging, and other cross-cutting concerns
//! to be handled in a composable way.
//!
//! ## Design
//!
//! ```text
//! Action → Middleware Chain → Reducer → State
//! ```
//!
//! Each middleware can:
//! - Inspect actions and state
//! - Dispatch new actions
//! - Perform side effects (async operations, logging, etc.)
//! - Block actions from reaching the reducer
//!
//! Actions dispatched through the [`Dispatcher`] land on a channel; the
//! embedder's event loop feeds them back into
//! [`Store::dispatch_async`](crate::store::Store::dispatch_async) as they
//! arrive. That loop is what makes completion transitions apply one at a
//! time, in completion order.

use crate::actions::{Action, SearchAction, SearchInputAction};
use crate::state::AppState;
use gh_user_client::UserDirectoryClient;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tokio::sync::mpsc;

/// BoxFuture type alias for async middleware handlers
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Middleware trait - handles actions before they reach the reducer
///
/// Middleware is called in order for each action. Each middleware can:
/// - Inspect the action and current state
/// - Dispatch new actions via the Dispatcher
/// - Perform async operations
/// - Block the action from continuing (return false)
pub trait Middleware: Send + Sync {
    /// Handle an action before it reaches the reducer
    ///
    /// # Parameters
    /// - `action`: The action being dispatched
    /// - `state`: Current application state (read-only)
    /// - `dispatcher`: Can dispatch new actions
    ///
    /// # Returns
    /// - `true`: Continue to next middleware/reducer
    /// - `false`: Block this action from continuing
    fn handle<'a>(
        &'a mut self,
        action: &'a Action,
        state: &'a AppState,
        dispatcher: &'a Dispatcher,
    ) -> BoxFuture<'a, bool>;
}

/// Dispatcher allows middleware to dispatch new actions
///
/// Actions dispatched through the Dispatcher are queued and processed in a
/// later event-loop iteration, preventing recursion.
#[derive(Clone)]
pub struct Dispatcher {
    tx: mpsc::UnboundedSender<Action>,
}

impl Dispatcher {
    /// Create a new dispatcher
    pub fn new(tx: mpsc::UnboundedSender<Action>) -> Self {
        Self { tx }
    }

    /// Dispatch an action
    ///
    /// The action will be queued and processed in the next iteration
    /// of the event loop.
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.tx.send(action) {
            log::error!("Failed to dispatch action: {}", e);
        }
    }
}

/// LoggingMiddleware - logs all actions that pass through the system
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle<'a>(
        &'a mut self,
        action: &'a Action,
        _state: &'a AppState,
        _dispatcher: &'a Dispatcher,
    ) -> BoxFuture<'a, bool> {
        Box::pin(async move {
            // Log the action (skip None to reduce noise)
            if !matches!(action, Action::None) {
                log::debug!("Action: {:?}", action);
            }
            // Always continue to next middleware
            true
        })
    }
}

/// SearchMiddleware - owns the directory client and runs the fetch lifecycle
///
/// On `FetchStart` it spawns the network call and lets the action continue,
/// so the reducer flips the loading flag before any completion can arrive.
/// When the call resolves, the spawned task dispatches `Fetched` or
/// `FetchError` back through the dispatcher.
///
/// On `Submit` it reads the current search-box value, suppresses empty
/// submissions, and otherwise dispatches `FetchStart` for that value.
///
/// A new search does not cancel an in-flight one: each outstanding call
/// dispatches its own completion, completions apply in completion order, and
/// the last one to resolve wins.
pub struct SearchMiddleware<C> {
    client: Arc<C>,
}

impl<C> SearchMiddleware<C>
where
    C: UserDirectoryClient + 'static,
{
    /// Create a new search middleware owning the given client
    pub fn new(client: C) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Spawn the async lookup for a search term
    fn spawn_fetch(&self, search_term: String, dispatcher: &Dispatcher) {
        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();

        tokio::spawn(async move {
            match client.fetch_users(&search_term).await {
                Ok(payload) => {
                    log::info!(
                        "Loaded {} user(s) for {:?}",
                        payload.len(),
                        search_term
                    );
                    dispatcher.dispatch(Action::Search(SearchAction::Fetched(payload)));
                }
                Err(e) => {
                    log::error!("Failed to load users for {:?}: {}", search_term, e);
                    dispatcher.dispatch(Action::Search(SearchAction::FetchError(e.to_string())));
                }
            }
        });
    }
}

impl<C> Middleware for SearchMiddleware<C>
where
    C: UserDirectoryClient + 'static,
{
    fn handle<'a>(
        &'a mut self,
        action: &'a Action,
        state: &'a AppState,
        dispatcher: &'a Dispatcher,
    ) -> BoxFuture<'a, bool> {
        Box::pin(async move {
            match action {
                Action::Search(SearchAction::FetchStart(term)) => {
                    self.spawn_fetch(term.clone(), dispatcher);
                    true // Let action pass through to reducer (to set loading state)
                }

                Action::Input(SearchInputAction::Submit) => {
                    let term = state.input.value.clone();
                    if term.is_empty() {
                        log::debug!("Empty search term, submit suppressed");
                        return false; // Consume action
                    }
                    dispatcher.dispatch(Action::Search(SearchAction::FetchStart(term)));
                    true
                }

                _ => true, // Pass through other actions
            }
        })
    }
}
