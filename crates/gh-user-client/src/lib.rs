//! GitHub user directory API client
//!
//! This crate provides a trait-based client for looking up user profiles in
//! the public GitHub directory. The design keeps the network boundary behind
//! a trait so the consuming application can substitute its own
//! implementation in tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │            UserDirectoryClient trait             │
//! │  - fetch_users(search_term)                      │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌───────────────────┐
//!              │ OctocrabUserClient │
//!              │ (direct API)       │
//!              └───────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_user_client::{OctocrabUserClient, UserDirectoryClient};
//!
//! # async fn example() -> Result<(), gh_user_client::TransportError> {
//! let client = OctocrabUserClient::anonymous()?;
//!
//! let payload = client.fetch_users("octocat").await?;
//! for profile in payload.into_profiles() {
//!     println!("{} ({})", profile.login, profile.id);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod octocrab_client;
pub mod types;

pub use client::UserDirectoryClient;
pub use error::TransportError;
pub use octocrab_client::OctocrabUserClient;
pub use types::{UserPayload, UserProfile};

// Re-export octocrab so consumers don't need to depend on it directly
pub use octocrab;
