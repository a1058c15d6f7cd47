//! Memory modal component.

use leptos::prelude::*;

use crate::ui::components::{Icon, IconKind};

/// DOM id of the modal container (the backdrop).
pub const MEMORY_MODAL_ID: &str = "memory-modal";

/// Closes only when the click lands on the backdrop itself.
const CLOSE_ON_BACKDROP: &str = "if (event.target === this) { this.hidden = true; }";

const CLOSE_CONTROL: &str = "document.getElementById('memory-modal').hidden = true";

/// One memory, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryEntry {
    /// Local time string.
    pub time: String,
    pub user_message: String,
    pub assistant_message: String,
}

/// The modal in its closed state: an empty, hidden placeholder.
#[component]
pub fn MemoryModalClosed() -> impl IntoView {
    view! {
        <div id=MEMORY_MODAL_ID class="modal fixed inset-0 z-40" hidden=true></div>
    }
}

/// The open modal listing memories newest first.
#[component]
pub fn MemoryModalOpen(
    /// Entries, already sorted.
    entries: Vec<MemoryEntry>,
    /// Modal heading.
    title: String,
    /// Shown instead of the list when there are no entries.
    empty_text: String,
    /// Accessible label of the close control.
    close_label: String,
    /// Label for the user's side of each exchange.
    user_label: String,
    /// Label for the character's side of each exchange.
    npc_label: String,
) -> impl IntoView {
    let body = if entries.is_empty() {
        view! { <p class="placeholder py-10 text-center text-textMuted">{empty_text}</p> }
            .into_any()
    } else {
        view! {
            <ol class="memory-list space-y-4">
                {entries
                    .into_iter()
                    .map(|entry| view! {
                        <li class="memory-record rounded-xl bg-surfaceVariant p-4 space-y-2">
                            <time class="memory-time block text-xs text-textMuted">{entry.time}</time>
                            <p class="memory-user text-sm">
                                <strong>{user_label.clone()}": "</strong>
                                {entry.user_message}
                            </p>
                            <p class="memory-npc text-sm">
                                <strong>{npc_label.clone()}": "</strong>
                                {entry.assistant_message}
                            </p>
                        </li>
                    })
                    .collect_view()}
            </ol>
        }
        .into_any()
    };

    view! {
        <div
            id=MEMORY_MODAL_ID
            class="modal fixed inset-0 z-40 flex items-center justify-center bg-black/50"
            role="dialog"
            aria-modal="true"
            onclick=CLOSE_ON_BACKDROP
        >
            <div class="modal-content w-full max-w-2xl max-h-[80vh] overflow-y-auto rounded-3xl bg-surface p-6 shadow-lg">
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-lg font-semibold">{title}</h2>
                    <button
                        type="button"
                        class="modal-close rounded-lg p-2 hover:bg-panel"
                        aria-label=close_label
                        onclick=CLOSE_CONTROL
                    >
                        <Icon kind=IconKind::Close />
                    </button>
                </div>
                {body}
            </div>
        </div>
    }
}
