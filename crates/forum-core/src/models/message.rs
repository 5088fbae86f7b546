use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::constants::{SYSTEM_DISPLAY_NAME, SYSTEM_USERNAME, UNKNOWN_USERNAME};

/// A single message posted to a thread
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Message {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
    #[serde(default, deserialize_with = "super::timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Who a message is shown as coming from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Author {
    /// Posted by the backend bot, or by a sender that could not be resolved
    /// (including an empty username)
    System,
    Human(String),
}

impl Author {
    pub fn from_username(username: &str) -> Self {
        if username.is_empty() || username == SYSTEM_USERNAME || username == UNKNOWN_USERNAME {
            Author::System
        } else {
            Author::Human(username.to_string())
        }
    }

    pub fn is_system(&self) -> bool {
        matches!(self, Author::System)
    }

    pub fn display_name(&self) -> &str {
        match self {
            Author::System => SYSTEM_DISPLAY_NAME,
            Author::Human(name) => name,
        }
    }
}

impl Message {
    pub fn author(&self) -> Author {
        Author::from_username(&self.username)
    }
}
