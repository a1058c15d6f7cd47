//! Chat input area and memory controls.

use leptos::prelude::*;

use super::{MEMORY_MODAL_ID, TRANSCRIPT_ID};
use crate::ui::components::{ButtonSize, ButtonVariant, Icon, IconKind, button_classes};

/// Enter submits through the form (same path as the button); Shift+Enter
/// inserts a newline; whitespace-only input never submits.
const ENTER_TO_SUBMIT: &str = "if (event.key === 'Enter' && !event.shiftKey) { \
     event.preventDefault(); \
     if (this.value.trim()) { this.form.requestSubmit(); } }";

/// Chat message input with HTMX form submission.
///
/// The document shell shows the user bubble and clears the form before the
/// POST leaves. The reply bubble returned by the server is appended to the
/// transcript, which is then scrolled to the newest message. The send button
/// stays disabled while a request is in flight.
#[component]
pub fn ChatInputArea(
    /// Fragment endpoint accepting `message` as a form field.
    post_url: String,
    /// Placeholder of the text area.
    placeholder: String,
    /// Accessible label of the send button.
    send_label: String,
) -> impl IntoView {
    let target = format!("#{TRANSCRIPT_ID}");
    let swap = format!("beforeend scroll:#{TRANSCRIPT_ID}:bottom");

    view! {
        <div class="p-3 md:p-5 bg-surfaceContainer shrink-0">
            <form
                id="chat-form"
                class="flex gap-2 md:gap-3"
                hx-post=post_url
                hx-trigger="submit"
                hx-target=target
                hx-swap=swap
                hx-disabled-elt="find button"
            >
                <textarea
                    name="message"
                    placeholder=placeholder
                    class="flex-1 min-h-[44px] max-h-[200px] px-4 py-3 rounded-xl bg-surface text-textPrimary placeholder:text-textMuted resize-none focus:outline-none focus:ring-2 focus:ring-primary"
                    rows="1"
                    onkeydown=ENTER_TO_SUBMIT
                ></textarea>
                <button
                    type="submit"
                    class=button_classes(ButtonVariant::Primary, ButtonSize::Icon, "shrink-0 rounded-xl")
                    aria-label=send_label
                >
                    <Icon kind=IconKind::Send class="h-5 w-5" />
                </button>
            </form>
        </div>
    }
}

/// "View memories" and "clear memories" buttons.
#[component]
pub fn MemoryControls(
    /// Fragment endpoint for GET (open) and DELETE (clear).
    memories_url: String,
    /// Name labelling the character's side of each memory.
    npc_name: String,
    /// Label of the view button.
    view_label: String,
    /// Label of the clear button.
    clear_label: String,
    /// Question asked before clearing.
    confirm_text: String,
) -> impl IntoView {
    let modal_target = format!("#{MEMORY_MODAL_ID}");
    let view_url = format!("{memories_url}?name={}", urlencoding::encode(&npc_name));

    view! {
        <div class="memory-controls flex items-center gap-2">
            <button
                type="button"
                id="view-memories"
                class=button_classes(ButtonVariant::Secondary, ButtonSize::Sm, "gap-1")
                hx-get=view_url
                hx-target=modal_target
                hx-swap="outerHTML"
            >
                <Icon kind=IconKind::History />
                {view_label}
            </button>
            <button
                type="button"
                id="clear-memories"
                class=button_classes(ButtonVariant::Destructive, ButtonSize::Sm, "gap-1")
                hx-delete=memories_url
                hx-confirm=confirm_text
                hx-swap="none"
            >
                <Icon kind=IconKind::Trash />
                {clear_label}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The opening tag of the first element carrying `marker`.
    fn tag_with<'a>(html: &'a str, marker: &str) -> &'a str {
        let at = html.find(marker).unwrap();
        let start = html[..=at].rfind('<').unwrap();
        let end = at + html[at..].find('>').unwrap();
        &html[start..=end]
    }

    fn input_area() -> String {
        view! {
            <ChatInputArea
                post_url="/ui/npc/libai/messages".to_string()
                placeholder="say".to_string()
                send_label="send".to_string()
            />
        }
        .to_html()
    }

    #[test]
    fn test_enter_submits_through_the_form_only() {
        let html = input_area();

        let textarea = tag_with(&html, "<textarea");
        assert!(textarea.contains("onkeydown="));
        assert!(textarea.contains("event.key === 'Enter'"));
        assert!(textarea.contains("!event.shiftKey"));
        assert!(textarea.contains("requestSubmit()"));
        assert!(!textarea.contains("hx-"));

        let form = tag_with(&html, r#"id="chat-form""#);
        assert!(form.contains(r#"hx-trigger="submit""#));
        assert!(form.contains(r#"hx-post="/ui/npc/libai/messages""#));
        assert!(form.contains("hx-disabled-elt"));

        // One request per submit: nothing else in the area posts.
        assert_eq!(html.matches("hx-post").count(), 1);
        assert_eq!(html.matches("hx-trigger").count(), 1);
        assert!(tag_with(&html, r#"type="submit""#).contains("<button"));
    }

    #[test]
    fn test_memory_controls_pass_name_and_confirm_clear() {
        let html = view! {
            <MemoryControls
                memories_url="/ui/npc/libai/memories".to_string()
                npc_name="李 白".to_string()
                view_label="view".to_string()
                clear_label="clear".to_string()
                confirm_text="sure?".to_string()
            />
        }
        .to_html();

        let view_button = tag_with(&html, r#"id="view-memories""#);
        assert!(view_button.contains(r#"hx-get="/ui/npc/libai/memories?name=%E6%9D%8E%20%E7%99%BD""#));

        let clear_button = tag_with(&html, r#"id="clear-memories""#);
        assert!(clear_button.contains(r#"hx-delete="/ui/npc/libai/memories""#));
        assert!(clear_button.contains(r#"hx-confirm="sure?""#));
    }
}
