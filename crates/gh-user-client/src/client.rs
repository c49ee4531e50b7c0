//! User directory client trait
//!
//! This module defines the core `UserDirectoryClient` trait that all client
//! implementations must satisfy.

use crate::error::TransportError;
use crate::types::UserPayload;
use async_trait::async_trait;

/// User directory API client trait
///
/// Defines the interface for looking up directory entries. Implementations
/// can be direct (hitting the API) or decorated with cross-cutting behavior.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across async
/// tasks and threads.
///
/// # Example
///
/// ```rust,ignore
/// use gh_user_client::{UserDirectoryClient, UserPayload};
///
/// async fn lookup(client: &dyn UserDirectoryClient) -> anyhow::Result<UserPayload> {
///     Ok(client.fetch_users("octocat").await?)
/// }
/// ```
#[async_trait]
pub trait UserDirectoryClient: Send + Sync {
    /// Look up directory entries matching a search term
    ///
    /// Issues exactly one outbound request per invocation, with no retry
    /// and no timeout override beyond the transport default. The term is
    /// not validated; suppressing empty terms is the caller's concern.
    ///
    /// # Arguments
    ///
    /// * `search_term` - The term to look up
    ///
    /// # Returns
    ///
    /// The matched profile(s), or a `TransportError` when the network call
    /// fails or the remote answers with a non-success status.
    async fn fetch_users(&self, search_term: &str) -> Result<UserPayload, TransportError>;
}
