//! Query parameters for a LinkedIn lookup.

use serde::Serialize;
use strum::{Display, EnumString};

use crate::error::{Result, ScoutError};

/// Kind of LinkedIn page being looked up (the `type` query parameter).
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ResourceType {
    /// A person's profile page
    #[default]
    Profile,
    /// A company page
    Company,
}

/// The parameters sent with every lookup, besides the API key.
///
/// Serializes to the wire names the endpoint expects, in order:
/// `type`, `linkId`, `private`.
///
/// ## Examples
///
/// ```
/// use scout_lib::{ProfileQuery, ResourceType};
///
/// let query = ProfileQuery::new("deepak-kumar-mohanty-09aa59230");
/// assert_eq!(query.resource_type(), ResourceType::Profile);
/// assert!(!query.is_private());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileQuery {
    #[serde(rename = "type")]
    resource_type: ResourceType,
    #[serde(rename = "linkId")]
    link_id: String,
    private: bool,
}

impl ProfileQuery {
    /// A public profile lookup for `link_id`.
    pub fn new(link_id: impl Into<String>) -> Self {
        Self {
            resource_type: ResourceType::Profile,
            link_id: link_id.into(),
            private: false,
        }
    }

    #[must_use]
    pub fn with_resource_type(mut self, resource_type: ResourceType) -> Self {
        self.resource_type = resource_type;
        self
    }

    /// Set the `private` flag sent to the endpoint.
    #[must_use]
    pub fn with_private(mut self, private: bool) -> Self {
        self.private = private;
        self
    }

    pub fn resource_type(&self) -> ResourceType {
        self.resource_type
    }

    pub fn link_id(&self) -> &str {
        &self.link_id
    }

    pub fn is_private(&self) -> bool {
        self.private
    }

    /// Reject queries the endpoint could never answer.
    ///
    /// ## Errors
    ///
    /// Returns `ScoutError::InvalidConfig` when `linkId` is blank.
    pub fn validate(&self) -> Result<()> {
        if self.link_id.trim().is_empty() {
            return Err(ScoutError::InvalidConfig(
                "linkId must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
