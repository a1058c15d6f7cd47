use std::sync::Arc;
use std::time::Duration;

use leptos::prelude::*;
use tracing::{info, warn};

use crate::backend::NpcBackend;
use crate::config::UiSettings;
use crate::error::ClientError;
use crate::model::Sender;
use crate::route::fragment_base;
use crate::ui::app::html_shell;
use crate::ui::chat::{ChatInputArea, MemoryControls, bubble_templates, chat_shell};
use crate::ui::components::AlertVariant;
use crate::view::{
    ClickTarget, HeaderView, InputEvent, MemoryModal, MessageInput, TranscriptView,
};

use super::Dialogs;

/// Result of a send attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Nothing to send: the event was not a submit, or the input was blank.
    Ignored,
    /// The user bubble and a reply (or the fallback) were appended.
    Sent,
}

/// Chat with a single character.
#[derive(Debug)]
pub struct ChatPage {
    backend: Arc<dyn NpcBackend>,
    ui: Arc<UiSettings>,
    npc_id: String,
    header: HeaderView,
    transcript: TranscriptView,
    modal: MemoryModal,
    input: MessageInput,
    /// Name known to the browser, used until the header has loaded.
    name_hint: Option<String>,
    /// Upper bound on waiting for a reply; `None` waits as long as the
    /// backend takes.
    reply_timeout: Option<Duration>,
}

impl ChatPage {
    pub fn new(backend: Arc<dyn NpcBackend>, ui: Arc<UiSettings>, npc_id: impl Into<String>) -> Self {
        Self {
            backend,
            ui,
            npc_id: npc_id.into(),
            header: HeaderView::new(),
            transcript: TranscriptView::new(),
            modal: MemoryModal::new(),
            input: MessageInput::new(),
            name_hint: None,
            reply_timeout: None,
        }
    }

    /// Label the character with `name` without asking the backend.
    #[must_use]
    pub fn with_name_hint(mut self, name: Option<String>) -> Self {
        self.name_hint = name.filter(|n| !n.trim().is_empty());
        self
    }

    /// Give up on a reply after `timeout` and show the fallback instead.
    #[must_use]
    pub fn with_reply_timeout(mut self, timeout: Duration) -> Self {
        self.reply_timeout = Some(timeout);
        self
    }

    pub fn npc_id(&self) -> &str {
        &self.npc_id
    }

    pub fn header(&self) -> &HeaderView {
        &self.header
    }

    pub fn transcript(&self) -> &TranscriptView {
        &self.transcript
    }

    pub fn modal(&self) -> &MemoryModal {
        &self.modal
    }

    pub fn input_mut(&mut self) -> &mut MessageInput {
        &mut self.input
    }

    /// Fill the header from backend metadata.
    ///
    /// A failure is logged and leaves the header as it was.
    // TODO: surface header load failures in the page once the backend
    // distinguishes "unknown character" from transport errors.
    pub async fn load_character_info(&mut self) {
        match self.backend.character(&self.npc_id).await {
            Ok(character) => self.header.update(&character, &self.ui),
            Err(e) => {
                warn!(
                    name: "chat.header.load.failed",
                    npc_id = %self.npc_id,
                    error = %e,
                    "Failed to load character info"
                );
            }
        }
    }

    /// Route an input event to [`Self::send_message`] when it is a submit.
    pub async fn handle_input(&mut self, event: InputEvent) -> SendOutcome {
        if event.submits() {
            self.send_message().await
        } else {
            SendOutcome::Ignored
        }
    }

    /// Send the current input.
    ///
    /// The user bubble is appended before the request goes out; a failed
    /// request appends the fallback reply instead of an error.
    pub async fn send_message(&mut self) -> SendOutcome {
        let Some(message) = self.input.take_message() else {
            return SendOutcome::Ignored;
        };
        self.transcript.append(Sender::User, message.as_str());

        let reply = self.backend.chat(&self.npc_id, &message);
        let reply = match self.reply_timeout {
            Some(timeout) => tokio::time::timeout(timeout, reply)
                .await
                .unwrap_or_else(|_elapsed| Err(ClientError::Timeout(timeout))),
            None => reply.await,
        };

        match reply {
            Ok(reply) => {
                info!(name: "chat.reply.received", npc_id = %self.npc_id, "Reply received");
                self.transcript.append(Sender::Npc, reply);
            }
            Err(e) => {
                warn!(
                    name: "chat.send.failed",
                    npc_id = %self.npc_id,
                    error = %e,
                    "Failed to send message"
                );
                self.transcript
                    .append(Sender::Npc, self.ui.text.chat_fallback.as_str());
            }
        }
        SendOutcome::Sent
    }

    /// Fetch memories and open the modal. On failure alert and stay closed.
    pub async fn show_memories(&mut self, dialogs: &mut dyn Dialogs) {
        match self.backend.memories(&self.npc_id).await {
            Ok(records) => {
                info!(
                    name: "memories.loaded",
                    npc_id = %self.npc_id,
                    count = records.len(),
                    "Memories loaded"
                );
                self.modal.open(records);
            }
            Err(e) => {
                warn!(
                    name: "memories.load.failed",
                    npc_id = %self.npc_id,
                    error = %e,
                    "Failed to load memories"
                );
                self.modal.close();
                dialogs.alert(AlertVariant::Error, &self.ui.text.memories_failed);
            }
        }
    }

    pub fn close_memories(&mut self) {
        self.modal.close();
    }

    /// Apply a click on the modal. Returns whether it closed.
    pub fn handle_modal_click(&mut self, target: ClickTarget) -> bool {
        self.modal.handle_click(target)
    }

    /// Ask, then delete every memory of this character. Nothing on the page
    /// is refreshed afterwards.
    pub async fn clear_memories(&mut self, dialogs: &mut dyn Dialogs) {
        let text = &self.ui.text;
        if !dialogs.confirm(&text.clear_confirm) {
            return;
        }

        match self.backend.clear_memories(&self.npc_id).await {
            Ok(()) => {
                info!(name: "memories.cleared", npc_id = %self.npc_id, "Memories cleared");
                dialogs.alert(AlertVariant::Success, &text.clear_succeeded);
            }
            Err(e) => {
                warn!(
                    name: "memories.clear.failed",
                    npc_id = %self.npc_id,
                    error = %e,
                    "Failed to clear memories"
                );
                dialogs.alert(AlertVariant::Error, &text.clear_failed);
            }
        }
    }

    /// Name used for the title and the character's side of memories.
    fn display_name(&self) -> &str {
        self.header
            .title()
            .or(self.name_hint.as_deref())
            .unwrap_or(&self.npc_id)
    }

    pub fn render_modal(&self) -> String {
        self.modal.render(&self.ui, self.display_name())
    }

    /// The whole page as an HTML document.
    pub fn render_document(&self) -> String {
        let text = &self.ui.text;
        let base = fragment_base(&self.npc_id);

        let controls = view! {
            <MemoryControls
                memories_url=format!("{base}/memories")
                npc_name=self.display_name().to_string()
                view_label=text.view_memories.clone()
                clear_label=text.clear_memories.clone()
                confirm_text=text.clear_confirm.clone()
            />
        }
        .to_html();
        let input = view! {
            <ChatInputArea
                post_url=format!("{base}/messages")
                placeholder=text.input_placeholder.clone()
                send_label=text.send.clone()
            />
        }
        .to_html();

        let content = chat_shell(
            &self.header.render(&self.ui),
            &controls,
            &self.transcript.render(),
            &input,
            &self.render_modal(),
            &bubble_templates(&text.chat_fallback),
        );
        html_shell(&text.site_title, self.display_name(), &content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::StubBackend;
    use crate::model::{Character, MemoryRecord};
    use crate::page::CollectedDialogs;

    fn alice() -> Character {
        Character {
            id: "alice".to_string(),
            name: Some("Alice".to_string()),
            avatar: None,
            description: Some("Curious".to_string()),
        }
    }

    fn page(backend: &Arc<StubBackend>) -> ChatPage {
        ChatPage::new(
            Arc::clone(backend) as Arc<dyn NpcBackend>,
            Arc::new(UiSettings::default()),
            "alice",
        )
    }

    #[tokio::test]
    async fn test_send_appends_user_then_reply() {
        let backend = Arc::new(StubBackend::new().with_reply("hi"));
        let mut page = page(&backend);

        page.input_mut().set("hello");
        assert_eq!(page.handle_input(InputEvent::SendClicked).await, SendOutcome::Sent);

        let entries = page.transcript().entries();
        assert_eq!(entries.len(), 2);
        assert_eq!((entries[0].sender, entries[0].text.as_str()), (Sender::User, "hello"));
        assert_eq!((entries[1].sender, entries[1].text.as_str()), (Sender::Npc, "hi"));
        assert_eq!(page.input_mut().value(), "");
        assert_eq!(backend.calls(), vec!["chat alice hello"]);
    }

    #[tokio::test]
    async fn test_send_failure_appends_fallback() {
        let backend = Arc::new(StubBackend::new().failing());
        let mut page = page(&backend);

        page.input_mut().set("hello");
        assert_eq!(page.send_message().await, SendOutcome::Sent);

        let entries = page.transcript().entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].text, "hello");
        assert_eq!(entries[1].sender, Sender::Npc);
        assert_eq!(entries[1].text, UiSettings::default().text.chat_fallback);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_reply_falls_back_at_deadline() {
        let backend = Arc::new(
            StubBackend::new()
                .with_reply("late")
                .with_reply_delay(Duration::from_secs(30)),
        );
        let mut page = page(&backend).with_reply_timeout(Duration::from_secs(1));

        page.input_mut().set("hello");
        assert_eq!(page.send_message().await, SendOutcome::Sent);

        let entries = page.transcript().entries();
        assert_eq!(entries[0].text, "hello");
        assert_eq!(entries[1].text, UiSettings::default().text.chat_fallback);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_within_deadline_is_kept() {
        let backend = Arc::new(
            StubBackend::new()
                .with_reply("soon")
                .with_reply_delay(Duration::from_millis(500)),
        );
        let mut page = page(&backend).with_reply_timeout(Duration::from_secs(1));

        page.input_mut().set("hello");
        page.send_message().await;

        assert_eq!(page.transcript().newest().unwrap().text, "soon");
    }

    #[tokio::test]
    async fn test_name_hint_labels_memories_without_backend_lookup() {
        let backend = Arc::new(StubBackend::new().with_memories(vec![MemoryRecord {
            timestamp: 1,
            user_message: "q".to_string(),
            assistant_message: "a".to_string(),
        }]));
        let mut page = page(&backend).with_name_hint(Some("Alice".to_string()));
        let mut dialogs = CollectedDialogs::confirmed();

        page.show_memories(&mut dialogs).await;

        assert!(page.render_modal().contains("Alice"));
        assert_eq!(backend.calls(), vec!["memories alice"]);
    }

    #[test]
    fn test_blank_name_hint_falls_back_to_id() {
        let backend = Arc::new(StubBackend::new());
        let page = page(&backend).with_name_hint(Some("  ".to_string()));

        assert!(page.render_document().contains("alice - "));
    }

    #[tokio::test]
    async fn test_blank_input_makes_no_call() {
        let backend = Arc::new(StubBackend::new().with_reply("hi"));
        let mut page = page(&backend);

        page.input_mut().set("   \n");
        assert_eq!(page.send_message().await, SendOutcome::Ignored);

        assert!(page.transcript().entries().is_empty());
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_shift_enter_does_not_send() {
        let backend = Arc::new(StubBackend::new().with_reply("hi"));
        let mut page = page(&backend);

        page.input_mut().set("hello");
        let event = InputEvent::KeyDown { key: "Enter".to_string(), shift: true };
        assert_eq!(page.handle_input(event).await, SendOutcome::Ignored);
        assert!(backend.calls().is_empty());

        let event = InputEvent::KeyDown { key: "Enter".to_string(), shift: false };
        assert_eq!(page.handle_input(event).await, SendOutcome::Sent);
        assert_eq!(backend.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_load_character_info() {
        let backend = Arc::new(StubBackend::new().with_characters(vec![alice()]));
        let mut page = page(&backend);

        page.load_character_info().await;
        page.load_character_info().await;

        assert_eq!(page.header().title(), Some("Alice"));
        let html = page.render_document();
        assert_eq!(html.matches("npc-header-content").count(), 1);
        assert!(html.contains("Alice - "));
    }

    #[tokio::test]
    async fn test_load_character_info_failure_keeps_header() {
        let backend = Arc::new(StubBackend::new().failing());
        let mut page = page(&backend);

        page.load_character_info().await;

        assert!(page.header().content().is_none());
        assert!(page.render_document().contains("alice - "));
    }

    #[tokio::test]
    async fn test_show_memories_sorted() {
        let records = [100, 300, 200]
            .into_iter()
            .map(|timestamp| MemoryRecord {
                timestamp,
                user_message: format!("u{timestamp}"),
                assistant_message: format!("a{timestamp}"),
            })
            .collect();
        let backend = Arc::new(StubBackend::new().with_memories(records));
        let mut page = page(&backend);
        let mut dialogs = CollectedDialogs::confirmed();

        page.show_memories(&mut dialogs).await;

        assert!(page.modal().is_open());
        let order: Vec<i64> = page.modal().records().iter().map(|r| r.timestamp).collect();
        assert_eq!(order, vec![300, 200, 100]);
        assert!(dialogs.notices().is_empty());

        assert!(!page.handle_modal_click(ClickTarget::Content));
        assert!(page.handle_modal_click(ClickTarget::Backdrop));
        assert!(!page.modal().is_open());
    }

    #[tokio::test]
    async fn test_show_memories_failure_alerts_and_stays_closed() {
        let backend = Arc::new(StubBackend::new().failing());
        let mut page = page(&backend);
        let mut dialogs = CollectedDialogs::confirmed();

        page.show_memories(&mut dialogs).await;

        assert!(!page.modal().is_open());
        assert_eq!(dialogs.notices().len(), 1);
        assert_eq!(dialogs.notices()[0].variant, AlertVariant::Error);
    }

    #[tokio::test]
    async fn test_clear_memories_declined_makes_no_call() {
        let backend = Arc::new(StubBackend::new());
        let mut page = page(&backend);
        let mut dialogs = CollectedDialogs::declined();

        page.clear_memories(&mut dialogs).await;

        assert!(backend.calls().is_empty());
        assert!(dialogs.notices().is_empty());
    }

    #[tokio::test]
    async fn test_clear_memories_reports_outcome() {
        let ui = UiSettings::default();

        let backend = Arc::new(StubBackend::new());
        let mut dialogs = CollectedDialogs::confirmed();
        page(&backend).clear_memories(&mut dialogs).await;
        assert_eq!(backend.calls(), vec!["clear_memories alice"]);
        assert_eq!(dialogs.notices()[0].message, ui.text.clear_succeeded);

        let backend = Arc::new(StubBackend::new().failing());
        let mut dialogs = CollectedDialogs::confirmed();
        page(&backend).clear_memories(&mut dialogs).await;
        assert_eq!(dialogs.notices()[0].message, ui.text.clear_failed);
        assert_eq!(dialogs.notices()[0].variant, AlertVariant::Error);
    }
}
