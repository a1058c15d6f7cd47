//! Transcript bubbles.

use leptos::prelude::*;

use crate::model::Sender;

/// DOM id of the transcript container.
pub const TRANSCRIPT_ID: &str = "transcript";

/// A single chat bubble.
#[component]
pub fn MessageBubble(
    /// Who wrote the message.
    sender: Sender,
    /// Message text (escaped on render).
    text: String,
) -> impl IntoView {
    let (row, bubble) = match sender {
        Sender::User => ("justify-end", "bg-primary text-white"),
        Sender::Npc => ("justify-start", "bg-surfaceVariant text-textPrimary"),
    };
    let row_classes = format!("message message-{} flex {row}", sender.as_str());
    let bubble_classes =
        format!("message-text max-w-[80%] rounded-2xl px-4 py-2 whitespace-pre-wrap {bubble}");

    view! {
        <div class=row_classes data-sender=sender.as_str()>
            <div class=bubble_classes>{text}</div>
        </div>
    }
}

/// DOM id of the empty user bubble the browser clones on send.
pub const USER_BUBBLE_TEMPLATE_ID: &str = "user-bubble-template";

/// DOM id of the fallback reply the browser shows when a send never
/// reaches the server or times out there.
pub const NPC_FALLBACK_TEMPLATE_ID: &str = "npc-fallback-template";

/// Inert `<template>`s for the bubbles the browser adds on its own.
pub fn bubble_templates(fallback_text: &str) -> String {
    let user = view! { <MessageBubble sender=Sender::User text=String::new() /> }.to_html();
    let fallback = view! {
        <MessageBubble sender=Sender::Npc text=fallback_text.to_string() />
    }
    .to_html();
    format!(
        r#"<template id="{USER_BUBBLE_TEMPLATE_ID}">{user}</template><template id="{NPC_FALLBACK_TEMPLATE_ID}">{fallback}</template>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_carry_empty_user_bubble_and_fallback() {
        let html = bubble_templates("稍后再试");

        let (user, fallback) = html.split_once(r#"<template id="npc-fallback-template">"#).unwrap();
        assert!(user.starts_with(r#"<template id="user-bubble-template">"#));
        assert!(user.contains(r#"data-sender="user""#));
        assert!(user.contains("message-text"));
        assert!(fallback.contains(r#"data-sender="npc""#));
        assert!(fallback.contains("稍后再试"));
    }
}
