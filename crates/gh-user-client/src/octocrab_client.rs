//! Octocrab-based user directory client
//!
//! Direct implementation of the `UserDirectoryClient` trait using the
//! octocrab library against the public GitHub API.

use crate::client::UserDirectoryClient;
use crate::error::TransportError;
use crate::types::UserPayload;
use async_trait::async_trait;
use log::debug;
use octocrab::Octocrab;
use std::sync::Arc;

/// Direct user directory client backed by the public GitHub API
///
/// This is the base implementation that makes actual API calls. The users
/// endpoint is public, so the client works unauthenticated; an authenticated
/// octocrab instance raises the rate limit but changes nothing else.
#[derive(Debug, Clone)]
pub struct OctocrabUserClient {
    octocrab: Arc<Octocrab>,
}

impl OctocrabUserClient {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }

    /// Create a client against the public API with no authentication
    pub fn anonymous() -> Result<Self, TransportError> {
        let octocrab = Octocrab::builder().build().map_err(TransportError::from)?;
        Ok(Self::new(Arc::new(octocrab)))
    }

    /// Get a reference to the underlying octocrab instance
    pub fn octocrab(&self) -> &Octocrab {
        &self.octocrab
    }
}

#[async_trait]
impl UserDirectoryClient for OctocrabUserClient {
    async fn fetch_users(&self, search_term: &str) -> Result<UserPayload, TransportError> {
        debug!("Fetching users for {:?}", search_term);

        let payload: UserPayload = self
            .octocrab
            .get(user_route(search_term), None::<&()>)
            .await
            .map_err(TransportError::from)?;

        debug!(
            "Fetched {} user(s) for {:?}",
            payload.len(),
            search_term
        );
        Ok(payload)
    }
}

/// Build the lookup route for a search term
///
/// Spaces are escaped for the path segment; other characters pass through
/// unchanged, matching the handle alphabet the directory accepts.
fn user_route(search_term: &str) -> String {
    format!("/users/{}", search_term.replace(' ', "%20"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_route() {
        assert_eq!(user_route("octocat"), "/users/octocat");
        assert_eq!(user_route("mona-lisa"), "/users/mona-lisa");
    }

    #[test]
    fn test_user_route_escapes_spaces() {
        assert_eq!(user_route("mona lisa"), "/users/mona%20lisa");
    }
}
