//! Creator registration types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{require, Result, ValidationError};
use crate::CreatorId;

/// Raw creator registration form input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatorRegistrationInput {
    /// Creator name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Instagram handle or URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    /// `YouTube` channel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    /// `TikTok` handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiktok: Option<String>,
    /// Twitter handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    /// Content niche, e.g. `"fitness"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub niche: Option<String>,
    /// Audience size bracket, e.g. `"10k"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience_size: Option<String>,
}

impl CreatorRegistrationInput {
    /// Check the required fields and fill absent socials with `""`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::IncompleteCreatorRegistration` if `name`, `email`,
    /// `niche` or `audience_size` is missing or empty.
    pub fn validate(self) -> Result<NewCreatorRegistration> {
        let mut missing = Vec::new();

        let registration = NewCreatorRegistration {
            name: require(self.name, "name", &mut missing),
            email: require(self.email, "email", &mut missing),
            instagram: self.instagram.unwrap_or_default(),
            youtube: self.youtube.unwrap_or_default(),
            tiktok: self.tiktok.unwrap_or_default(),
            twitter: self.twitter.unwrap_or_default(),
            niche: require(self.niche, "niche", &mut missing),
            audience_size: require(self.audience_size, "audience_size", &mut missing),
        };

        if missing.is_empty() {
            Ok(registration)
        } else {
            Err(ValidationError::IncompleteCreatorRegistration { missing })
        }
    }
}

/// A validated creator registration ready to be persisted.
///
/// Social fields are always present; absent ones hold the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCreatorRegistration {
    /// Creator name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Instagram, or `""`.
    pub instagram: String,
    /// `YouTube`, or `""`.
    pub youtube: String,
    /// `TikTok`, or `""`.
    pub tiktok: String,
    /// Twitter, or `""`.
    pub twitter: String,
    /// Content niche.
    pub niche: String,
    /// Audience size.
    pub audience_size: String,
}

/// A persisted creator registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorRegistration {
    /// Row identifier.
    pub id: CreatorId,
    /// Creator name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Instagram, or `""`.
    pub instagram: String,
    /// `YouTube`, or `""`.
    pub youtube: String,
    /// `TikTok`, or `""`.
    pub tiktok: String,
    /// Twitter, or `""`.
    pub twitter: String,
    /// Content niche.
    pub niche: String,
    /// Audience size.
    pub audience_size: String,
    /// When the registration was stored.
    pub created_at: DateTime<Utc>,
}
