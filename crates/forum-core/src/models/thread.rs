use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A discussion thread, keyed by the name of the entity it is about
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Thread {
    pub asteroid_name: String,
    /// `None` when the backend sent no readable time
    #[serde(default, deserialize_with = "super::timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Thread {
    pub fn id(&self) -> &str {
        &self.asteroid_name
    }
}

/// Newest first, undated threads last. The sort is stable, so equal
/// timestamps and undated threads keep server order.
pub fn sort_newest_first(threads: &mut [Thread]) {
    // `None < Some(_)`, so descending order puts undated rows at the end.
    threads.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
