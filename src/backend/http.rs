//! `reqwest` implementation of [`NpcBackend`].

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};
use url::Url;

use super::NpcBackend;
use crate::error::{ClientError, Result};
use crate::model::{Character, ChatReply, ChatRequest, ErrorBody, MemoryRecord};

/// HTTP client for the NPC backend.
///
/// # Example
///
/// ```rust,no_run
/// use npc_chat_web::backend::{HttpBackend, NpcBackend};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let backend = HttpBackend::new("http://127.0.0.1:5000", None)?;
/// for character in backend.list_characters().await? {
///     println!("{} ({})", character.display_name(), character.id);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: Url,
    http: reqwest::Client,
}

impl HttpBackend {
    /// Create a client. `timeout` of `None` leaves reqwest's default (no timeout).
    pub fn new(base_url: impl AsRef<str>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Self::with_client(base_url, builder.build()?)
    }

    /// Create a client around an existing `reqwest::Client`.
    pub fn with_client(base_url: impl AsRef<str>, http: reqwest::Client) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::CannotBeABase(base_url.to_string()));
        }
        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append path segments to the base URL, percent-encoding each one.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|e| e.error)
            .unwrap_or(body);
        warn!(
            name: "backend.request.rejected",
            status = status.as_u16(),
            message = %message,
            "Backend returned an error status"
        );
        Err(ClientError::Status {
            status: status.as_u16(),
            message,
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let url = self.url(segments);
        debug!(name: "backend.request", method = "GET", url = %url);
        let response = self.http.get(url).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }
}

#[async_trait]
impl NpcBackend for HttpBackend {
    async fn list_characters(&self) -> Result<Vec<Character>> {
        self.get_json(&["api", "npc_list"]).await
    }

    async fn character(&self, id: &str) -> Result<Character> {
        self.get_json(&["api", "npc", id]).await
    }

    async fn chat(&self, npc_id: &str, message: &str) -> Result<String> {
        let url = self.url(&["api", "chat"]);
        debug!(name: "backend.request", method = "POST", url = %url, npc_id = %npc_id);
        let response = self
            .http
            .post(url)
            .json(&ChatRequest { npc_id, message })
            .send()
            .await?;
        let reply: ChatReply = Self::check(response).await?.json().await?;
        Ok(reply.response)
    }

    async fn memories(&self, npc_id: &str) -> Result<Vec<MemoryRecord>> {
        self.get_json(&["api", "memories", npc_id]).await
    }

    async fn clear_memories(&self, npc_id: &str) -> Result<()> {
        let url = self.url(&["api", "memories", npc_id]);
        debug!(name: "backend.request", method = "DELETE", url = %url);
        let response = self.http.delete(url).send().await?;
        Self::check(response).await?;
        Ok(())
    }
}
