//! Client side of the NPC backend API.
//!
//! # Endpoints
//!
//! | Method | Path                 | Success body            |
//! |--------|----------------------|-------------------------|
//! | GET    | `/api/npc_list`      | `[Character]`           |
//! | GET    | `/api/npc/{id}`      | `Character`             |
//! | POST   | `/api/chat`          | `{"response": "..."}`   |
//! | GET    | `/api/memories/{id}` | `[MemoryRecord]`        |
//! | DELETE | `/api/memories/{id}` | ignored                 |
//!
//! Any non-2xx status is a failure.

mod http;
mod stub;

pub use http::HttpBackend;
pub use stub::StubBackend;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{Character, MemoryRecord};

/// Operations the front end needs from the backend.
#[async_trait]
pub trait NpcBackend: Send + Sync + std::fmt::Debug {
    /// All selectable characters.
    async fn list_characters(&self) -> Result<Vec<Character>>;

    /// Metadata for one character.
    async fn character(&self, id: &str) -> Result<Character>;

    /// Relay a user message and return the character's reply.
    async fn chat(&self, npc_id: &str, message: &str) -> Result<String>;

    /// Stored exchanges for a character, in backend order.
    async fn memories(&self, npc_id: &str) -> Result<Vec<MemoryRecord>>;

    /// Delete every stored exchange for a character.
    async fn clear_memories(&self, npc_id: &str) -> Result<()>;
}
