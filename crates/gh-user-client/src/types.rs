//! User directory data transfer objects
//!
//! These types represent the data returned from the GitHub users API.
//! They are intentionally separate from application state types to keep
//! this crate pure and reusable.

use serde::{Deserialize, Serialize};

/// A user profile from the directory API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Numeric account id, unique within a single response
    pub id: u64,

    /// Account handle (e.g. "octocat")
    pub login: String,

    /// Display name; not every account sets one
    #[serde(default)]
    pub name: Option<String>,

    /// Avatar image URL
    pub avatar_url: String,
}

/// Payload of a successful directory lookup
///
/// The endpoint answers with a single profile when the term matches one
/// account directly, or with an array when the upstream source expands the
/// term to several accounts. Consumers append the records without reshaping
/// the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserPayload {
    /// A single matched profile
    One(UserProfile),
    /// Several matched profiles, in upstream order
    Many(Vec<UserProfile>),
}

impl UserPayload {
    /// Flatten the payload into a list, preserving delivered order
    pub fn into_profiles(self) -> Vec<UserProfile> {
        match self {
            UserPayload::One(profile) => vec![profile],
            UserPayload::Many(profiles) => profiles,
        }
    }

    /// Number of profiles carried by the payload
    pub fn len(&self) -> usize {
        match self {
            UserPayload::One(_) => 1,
            UserPayload::Many(profiles) => profiles.len(),
        }
    }

    /// Whether the payload carries no profiles
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_single_profile() {
        // A real response carries many more fields; unknown ones are ignored
        let json = r#"{
            "login": "octocat",
            "id": 583231,
            "avatar_url": "https://avatars.githubusercontent.com/u/583231",
            "name": "The Octocat",
            "company": "@github",
            "followers": 3938
        }"#;

        let payload: UserPayload = serde_json::from_str(json).unwrap();
        match payload {
            UserPayload::One(profile) => {
                assert_eq!(profile.id, 583231);
                assert_eq!(profile.login, "octocat");
                assert_eq!(profile.name.as_deref(), Some("The Octocat"));
                assert_eq!(
                    profile.avatar_url,
                    "https://avatars.githubusercontent.com/u/583231"
                );
            }
            UserPayload::Many(_) => panic!("expected a single profile"),
        }
    }

    #[test]
    fn test_deserialize_profile_without_name() {
        let json = r#"{"login": "octocat", "id": 1, "avatar_url": "u"}"#;

        let payload: UserPayload = serde_json::from_str(json).unwrap();
        match payload {
            UserPayload::One(profile) => assert_eq!(profile.name, None),
            UserPayload::Many(_) => panic!("expected a single profile"),
        }
    }

    #[test]
    fn test_deserialize_profile_list() {
        let json = r#"[
            {"login": "a", "id": 1, "avatar_url": "u1"},
            {"login": "b", "id": 2, "avatar_url": "u2"}
        ]"#;

        let payload: UserPayload = serde_json::from_str(json).unwrap();
        match &payload {
            UserPayload::Many(profiles) => {
                assert_eq!(profiles.len(), 2);
                assert_eq!(profiles[0].login, "a");
                assert_eq!(profiles[1].login, "b");
            }
            UserPayload::One(_) => panic!("expected a profile list"),
        }
        assert_eq!(payload.len(), 2);
        assert!(!payload.is_empty());
    }

    #[test]
    fn test_into_profiles_preserves_order() {
        let profiles = vec![
            UserProfile {
                id: 1,
                login: "a".to_string(),
                name: None,
                avatar_url: "u1".to_string(),
            },
            UserProfile {
                id: 2,
                login: "b".to_string(),
                name: None,
                avatar_url: "u2".to_string(),
            },
        ];

        let flattened = UserPayload::Many(profiles.clone()).into_profiles();
        assert_eq!(flattened, profiles);

        let single = UserPayload::One(profiles[0].clone());
        assert_eq!(single.len(), 1);
        assert_eq!(single.into_profiles(), vec![profiles[0].clone()]);
    }

    #[test]
    fn test_empty_list_payload() {
        let payload: UserPayload = serde_json::from_str("[]").unwrap();
        assert!(payload.is_empty());
        assert!(payload.into_profiles().is_empty());
    }
}
