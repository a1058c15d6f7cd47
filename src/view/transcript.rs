use leptos::prelude::*;

use crate::model::{ChatExchange, Sender};
use crate::ui::chat::MessageBubble;

/// The in-page transcript. Bubbles keep the order they were appended in.
#[derive(Debug, Default)]
pub struct TranscriptView {
    entries: Vec<ChatExchange>,
}

impl TranscriptView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, sender: Sender, text: impl Into<String>) {
        self.entries.push(ChatExchange {
            sender,
            text: text.into(),
        });
    }

    pub fn entries(&self) -> &[ChatExchange] {
        &self.entries
    }

    /// The bubble the view should be scrolled to.
    pub fn newest(&self) -> Option<&ChatExchange> {
        self.entries.last()
    }

    /// Bubbles from `start` onwards, for appending to a live page.
    pub fn render_from(&self, start: usize) -> String {
        self.entries
            .get(start..)
            .unwrap_or_default()
            .iter()
            .map(|entry| {
                view! { <MessageBubble sender=entry.sender text=entry.text.clone() /> }.to_html()
            })
            .collect()
    }

    pub fn render(&self) -> String {
        self.render_from(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_order() {
        let mut transcript = TranscriptView::new();
        transcript.append(Sender::User, "hello");
        transcript.append(Sender::Npc, "hi");

        let html = transcript.render();
        let user = html.find("hello").unwrap();
        let npc = html.find("hi<").unwrap();
        assert!(user < npc);
        assert!(html.contains(r#"data-sender="user""#));
        assert!(html.contains(r#"data-sender="npc""#));
        assert_eq!(transcript.newest().unwrap().text, "hi");
    }

    #[test]
    fn test_render_from_skips_earlier_bubbles() {
        let mut transcript = TranscriptView::new();
        transcript.append(Sender::User, "first");
        transcript.append(Sender::Npc, "second");

        let html = transcript.render_from(1);
        assert!(!html.contains("first"));
        assert!(html.contains("second"));
        assert_eq!(transcript.render_from(5), "");
    }
}
