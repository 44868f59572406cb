//! Wire types for the homework status API.

use serde::Deserialize;

/// Body of a status poll response.
///
/// Both fields are optional on the wire; a missing `homeworks` array simply
/// means no updates since `from_date`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub homeworks: Vec<Homework>,
    /// Server-side "now", used to advance the polling cursor.
    #[serde(default)]
    pub current_date: Option<i64>,
}

/// A single homework entry as reported by the API.
///
/// The server does not guarantee either field, so validation happens in the
/// verdict formatter rather than at deserialization time.
#[derive(Debug, Clone, Deserialize)]
pub struct Homework {
    #[serde(default)]
    pub homework_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
