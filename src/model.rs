//! Wire and display types.
//!
//! Every value here is a read-only projection of backend state. Nothing is
//! cached between requests.

use serde::{Deserialize, Deserializer, Serialize};

/// A selectable conversational character.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Character {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Character {
    /// Name to display; the id stands in when the backend sends none.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.id,
        }
    }

    pub fn avatar_or<'a>(&'a self, default: &'a str) -> &'a str {
        match self.avatar.as_deref() {
            Some(avatar) if !avatar.trim().is_empty() => avatar,
            _ => default,
        }
    }

    pub fn description_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.description.as_deref() {
            Some(description) if !description.trim().is_empty() => description,
            _ => fallback,
        }
    }
}

/// Who authored a transcript bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Npc,
}

impl Sender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Npc => "npc",
        }
    }
}

/// One rendered transcript bubble. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatExchange {
    pub sender: Sender,
    pub text: String,
}

/// A stored past exchange with a character.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemoryRecord {
    /// Unix seconds. Fractions are truncated; `null` reads as 0.
    #[serde(default, deserialize_with = "unix_seconds")]
    pub timestamp: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub assistant_message: String,
}

/// Any JSON number (or `null`) as whole seconds.
#[allow(clippy::cast_possible_truncation)]
fn unix_seconds<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let seconds = Option::<f64>::deserialize(deserializer)?;
    Ok(seconds.filter(|s| s.is_finite()).map_or(0, |s| s.trunc() as i64))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Sort records newest first. Equal timestamps keep backend order.
pub fn sort_newest_first(records: &mut [MemoryRecord]) {
    records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}

/// Body of `POST /api/chat`.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub npc_id: &'a str,
    pub message: &'a str,
}

/// Success body of `POST /api/chat`.
#[derive(Debug, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

/// Error body the backend sends alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
