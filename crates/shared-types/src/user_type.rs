use serde::{Deserialize, Serialize};
use std::fmt;

/// The role a user picks for themselves during onboarding.
///
/// The set is closed: every stored `profiles.user_type` value and every
/// onboarding route segment comes from one of these variants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    Artist,
    Blogger,
    EventsManager,
    Merchandiser,
    Fan,
}

/// All user types in display order.
pub const ALL_USER_TYPES: &[UserType] = &[
    UserType::Artist,
    UserType::Blogger,
    UserType::EventsManager,
    UserType::Merchandiser,
    UserType::Fan,
];

impl UserType {
    /// Stable identifier used for storage and route segments.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Artist => "artist",
            UserType::Blogger => "blogger",
            UserType::EventsManager => "events_manager",
            UserType::Merchandiser => "merchandiser",
            UserType::Fan => "fan",
        }
    }

    /// Human-readable name for the selection card.
    pub fn display_name(&self) -> &'static str {
        match self {
            UserType::Artist => "Artist",
            UserType::Blogger => "Blogger",
            UserType::EventsManager => "Events Manager",
            UserType::Merchandiser => "Merchandiser",
            UserType::Fan => "Fan",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            UserType::Artist => "I create and perform music",
            UserType::Blogger => "I write about music and the industry",
            UserType::EventsManager => "I organize and manage events",
            UserType::Merchandiser => "I sell music-related products",
            UserType::Fan => "I'm here to support and enjoy music",
        }
    }

    /// Parse a stored identifier. There is no fallback variant: an unknown
    /// value is rejected.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "artist" => Some(UserType::Artist),
            "blogger" => Some(UserType::Blogger),
            "events_manager" => Some(UserType::EventsManager),
            "merchandiser" => Some(UserType::Merchandiser),
            "fan" => Some(UserType::Fan),
            _ => None,
        }
    }

    /// First onboarding route after the user type is saved.
    ///
    /// Artists start with the shared basic-info step; every other role has
    /// its own landing step named after the identifier.
    pub fn onboarding_path(&self) -> &'static str {
        match self {
            UserType::Artist => "/onboarding/basic-info",
            UserType::Blogger => "/onboarding/blogger",
            UserType::EventsManager => "/onboarding/events_manager",
            UserType::Merchandiser => "/onboarding/merchandiser",
            UserType::Fan => "/onboarding/fan",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
