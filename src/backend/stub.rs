//! In-memory [`NpcBackend`] for tests.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;

use super::NpcBackend;
use crate::error::{ClientError, Result};
use crate::model::{Character, MemoryRecord};

/// Backend whose answers are fixed up front.
///
/// Every call is recorded so callers can assert which requests were made.
/// With `failing()` every call answers `500`.
#[derive(Debug, Default)]
pub struct StubBackend {
    characters: Vec<Character>,
    memories: Vec<MemoryRecord>,
    reply: Option<String>,
    reply_delay: Option<Duration>,
    failing: bool,
    calls: Mutex<Vec<String>>,
}

impl StubBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_characters(mut self, characters: Vec<Character>) -> Self {
        self.characters = characters;
        self
    }

    #[must_use]
    pub fn with_memories(mut self, memories: Vec<MemoryRecord>) -> Self {
        self.memories = memories;
        self
    }

    #[must_use]
    pub fn with_reply(mut self, reply: impl Into<String>) -> Self {
        self.reply = Some(reply.into());
        self
    }

    /// Hold every chat reply back for `delay`.
    #[must_use]
    pub fn with_reply_delay(mut self, delay: Duration) -> Self {
        self.reply_delay = Some(delay);
        self
    }

    #[must_use]
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    /// Calls made so far, as `"chat abc hello"`-style strings.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn record(&self, call: String) -> Result<()> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).push(call);
        if self.failing {
            return Err(ClientError::Status {
                status: 500,
                message: "stub failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl NpcBackend for StubBackend {
    async fn list_characters(&self) -> Result<Vec<Character>> {
        self.record("list_characters".to_string())?;
        Ok(self.characters.clone())
    }

    async fn character(&self, id: &str) -> Result<Character> {
        self.record(format!("character {id}"))?;
        self.characters
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| ClientError::Status {
                status: 404,
                message: "NPC not found".to_string(),
            })
    }

    async fn chat(&self, npc_id: &str, message: &str) -> Result<String> {
        self.record(format!("chat {npc_id} {message}"))?;
        if let Some(delay) = self.reply_delay {
            tokio::time::sleep(delay).await;
        }
        self.reply.clone().ok_or_else(|| ClientError::Status {
            status: 500,
            message: "no reply configured".to_string(),
        })
    }

    async fn memories(&self, npc_id: &str) -> Result<Vec<MemoryRecord>> {
        self.record(format!("memories {npc_id}"))?;
        Ok(self.memories.clone())
    }

    async fn clear_memories(&self, npc_id: &str) -> Result<()> {
        self.record(format!("clear_memories {npc_id}"))
    }
}
