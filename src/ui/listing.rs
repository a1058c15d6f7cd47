//! Character listing components.

use leptos::prelude::*;

use crate::ui::components::{Avatar, ButtonSize, ButtonVariant, button_classes, initials};

/// Everything a card needs, already resolved against fallbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardData {
    pub href: String,
    pub name: String,
    pub avatar: String,
    pub description: String,
}

/// A clickable character card. The whole card navigates to the chat page.
#[component]
pub fn CharacterCard(
    /// Resolved card content.
    card: CardData,
    /// Label of the action button.
    action_label: String,
) -> impl IntoView {
    let CardData {
        href,
        name,
        avatar,
        description,
    } = card;
    let fallback = initials(&name);

    view! {
        <a
            href=href
            class="npc-card flex h-full flex-col rounded-xl border border-panelBorder bg-panel text-textPrimary shadow-sm hover:scale-[1.02] transition-transform"
        >
            <div class="flex items-center gap-3 p-6">
                <Avatar src=avatar alt=name.clone() fallback=fallback size="h-14 w-14" />
                <h3 class="npc-name text-lg font-semibold">{name}</h3>
            </div>
            <p class="npc-description flex-1 px-6 text-sm text-textMuted">{description}</p>
            <div class="p-6">
                // The whole card is the link; this only looks like a button.
                <span class=button_classes(ButtonVariant::Primary, ButtonSize::Sm, "")>
                    {action_label}
                </span>
            </div>
        </a>
    }
}

/// Grid of character cards.
#[component]
pub fn CharacterGrid(
    /// Page heading.
    title: String,
    /// Cards to show.
    cards: Vec<CardData>,
    /// Label of each card's action button.
    action_label: String,
) -> impl IntoView {
    view! {
        <section class="space-y-6">
            <h1 class="text-2xl font-bold">{title}</h1>
            <div id="npc-list" class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                {cards
                    .into_iter()
                    .map(|card| view! { <CharacterCard card=card action_label=action_label.clone() /> })
                    .collect_view()}
            </div>
        </section>
    }
}

/// Replaces the grid when there is nothing to list.
#[component]
pub fn ListingPlaceholder(
    /// Page heading.
    title: String,
    /// Localized explanation.
    message: String,
) -> impl IntoView {
    view! {
        <section class="space-y-6">
            <h1 class="text-2xl font-bold">{title}</h1>
            <div id="npc-list">
                <p class="placeholder py-20 text-center text-textMuted">{message}</p>
            </div>
        </section>
    }
}
