use leptos::prelude::*;

use crate::config::UiSettings;
use crate::model::Character;
use crate::route::chat_href;
use crate::ui::listing::{CardData, CharacterGrid, ListingPlaceholder};

/// What the listing region currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingState {
    Loading,
    Loaded(Vec<Character>),
    Empty,
    Failed,
}

/// The character listing region.
#[derive(Debug)]
pub struct ListingView {
    state: ListingState,
}

impl Default for ListingView {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingView {
    pub fn new() -> Self {
        Self {
            state: ListingState::Loading,
        }
    }

    /// An empty list shows the "no characters" placeholder, never an empty grid.
    pub fn show_characters(&mut self, characters: Vec<Character>) {
        self.state = if characters.is_empty() {
            ListingState::Empty
        } else {
            ListingState::Loaded(characters)
        };
    }

    pub fn show_failure(&mut self) {
        self.state = ListingState::Failed;
    }

    pub fn state(&self) -> &ListingState {
        &self.state
    }

    pub fn render(&self, ui: &UiSettings) -> String {
        let text = &ui.text;
        let title = text.listing_title.clone();

        match &self.state {
            ListingState::Loaded(characters) => {
                let cards = characters
                    .iter()
                    .map(|c| CardData {
                        href: chat_href(&c.id),
                        name: c.display_name().to_string(),
                        avatar: c.avatar_or(&ui.default_avatar).to_string(),
                        description: c.description_or(&text.description_fallback).to_string(),
                    })
                    .collect::<Vec<_>>();
                view! {
                    <CharacterGrid title=title cards=cards action_label=text.start_chat.clone() />
                }
                .to_html()
            }
            ListingState::Empty => {
                view! { <ListingPlaceholder title=title message=text.listing_empty.clone() /> }
                    .to_html()
            }
            ListingState::Failed => {
                view! { <ListingPlaceholder title=title message=text.listing_failed.clone() /> }
                    .to_html()
            }
            ListingState::Loading => {
                view! { <ListingPlaceholder title=title message=String::new() /> }.to_html()
            }
        }
    }
}
