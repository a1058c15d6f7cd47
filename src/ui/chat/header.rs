//! Chat header component.

use leptos::prelude::*;

use crate::ui::components::{Avatar, initials};

/// Character metadata shown in the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderContent {
    pub name: String,
    pub avatar: String,
    pub description: String,
}

/// Chat header with the character's avatar, name, and description.
///
/// `content` is `None` until character metadata has loaded.
#[component]
pub fn ChatHeader(
    /// Loaded character metadata.
    content: Option<HeaderContent>,
    /// Label of the link back to the listing.
    back_label: String,
) -> impl IntoView {
    view! {
        <header id="chat-header" class="flex items-center justify-between px-4 md:px-6 py-3 md:py-4 bg-surfaceContainer shrink-0">
            {content.map(|HeaderContent { name, avatar, description }| {
                let fallback = initials(&name);
                view! {
                    <div class="npc-header-content flex items-center gap-3">
                        <Avatar src=avatar alt=name.clone() fallback=fallback size="h-10 w-10" />
                        <div>
                            <h2 class="npc-header-name font-semibold text-base md:text-lg">{name}</h2>
                            <p class="npc-header-description text-xs text-textMuted">{description}</p>
                        </div>
                    </div>
                }
            })}
            <a href="/" class="text-sm text-textSecondary hover:text-textPrimary">{back_label}</a>
        </header>
    }
}
