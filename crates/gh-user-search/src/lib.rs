//! Redux-style search state store over the GitHub user directory
//!
//! This crate is the state core of a user-directory search feature: it
//! coordinates an in-flight lookup, accumulates successful results across
//! repeated searches, and surfaces the latest error. Rendering, layout, and
//! routing live in the embedding application, which only needs to:
//!
//! - dispatch actions (typing, submitting, or triggering a search directly),
//! - drain the dispatcher channel back into the store, and
//! - read the selectors to render a result list, a loading indicator, and
//!   an error banner.
//!
//! # Architecture
//!
//! ```text
//! Action → Middleware Chain → Reducer → State → Selectors
//!              │                                    ▲
//!              └── spawns fetch ──► completion ─────┘
//!                  (gh-user-client)   (via Dispatcher channel)
//! ```
//!
//! State transitions only happen inside a dispatch, one at a time, so
//! readers always observe a consistent state: the loading flag is set (and
//! the previous error cleared) before a lookup's request is in flight, and
//! cleared again the moment its completion is applied.
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_user_client::OctocrabUserClient;
//! use gh_user_search::{
//!     selectors, Action, Dispatcher, LoggingMiddleware, SearchAction, SearchMiddleware, Store,
//! };
//! use tokio::sync::mpsc;
//!
//! # async fn example() -> Result<(), gh_user_client::TransportError> {
//! let client = OctocrabUserClient::anonymous()?;
//!
//! let (tx, mut rx) = mpsc::unbounded_channel();
//! let dispatcher = Dispatcher::new(tx);
//!
//! let mut store = Store::default();
//! store.add_middleware(LoggingMiddleware::new());
//! store.add_middleware(SearchMiddleware::new(client));
//!
//! // Trigger a search; the loading flag flips before the request resolves.
//! store
//!     .dispatch_async(
//!         Action::Search(SearchAction::FetchStart("octocat".to_string())),
//!         &dispatcher,
//!     )
//!     .await;
//! assert!(selectors::is_fetching(store.state()));
//!
//! // Feed queued completions back into the store as they arrive.
//! while let Some(action) = rx.recv().await {
//!     store.dispatch_async(action, &dispatcher).await;
//!     if !selectors::is_fetching(store.state()) {
//!         break;
//!     }
//! }
//!
//! for user in selectors::users(store.state()) {
//!     println!("{} ({})", user.login, user.id);
//! }
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod middleware;
pub mod reducer;
pub mod selectors;
pub mod state;
pub mod store;

pub use actions::{Action, SearchAction, SearchInputAction};
pub use middleware::{BoxFuture, Dispatcher, LoggingMiddleware, Middleware, SearchMiddleware};
pub use state::{AppState, SearchInputState, SearchState};
pub use store::Store;

// Re-export the client crate so embedders don't need to depend on it directly
pub use gh_user_client;
