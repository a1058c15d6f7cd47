use leptos::prelude::*;

use crate::config::UiSettings;
use crate::model::Character;
use crate::ui::chat::{ChatHeader, HeaderContent};

/// The chat header region.
///
/// The content block is built on the first successful update and edited in
/// place afterwards, so repeated updates never duplicate it.
#[derive(Debug, Default)]
pub struct HeaderView {
    block: Option<HeaderContent>,
}

impl HeaderView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, character: &Character, ui: &UiSettings) {
        let name = character.display_name();
        let avatar = character.avatar_or(&ui.default_avatar);
        let description = character.description_or(&ui.text.description_fallback);

        match &mut self.block {
            Some(block) => {
                name.clone_into(&mut block.name);
                avatar.clone_into(&mut block.avatar);
                description.clone_into(&mut block.description);
            }
            None => {
                self.block = Some(HeaderContent {
                    name: name.to_string(),
                    avatar: avatar.to_string(),
                    description: description.to_string(),
                });
            }
        }
    }

    pub fn content(&self) -> Option<&HeaderContent> {
        self.block.as_ref()
    }

    /// Name to title the page with, once known.
    pub fn title(&self) -> Option<&str> {
        self.block.as_ref().map(|b| b.name.as_str())
    }

    pub fn render(&self, ui: &UiSettings) -> String {
        view! {
            <ChatHeader content=self.block.clone() back_label=ui.text.back_to_list.clone() />
        }
        .to_html()
    }
}
