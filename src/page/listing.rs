use std::sync::Arc;

use tracing::{info, warn};

use crate::backend::NpcBackend;
use crate::config::UiSettings;
use crate::ui::app::html_shell;
use crate::view::ListingView;

/// The root page: pick a character.
#[derive(Debug)]
pub struct ListingPage {
    backend: Arc<dyn NpcBackend>,
    ui: Arc<UiSettings>,
    view: ListingView,
}

impl ListingPage {
    pub fn new(backend: Arc<dyn NpcBackend>, ui: Arc<UiSettings>) -> Self {
        Self {
            backend,
            ui,
            view: ListingView::new(),
        }
    }

    /// Fetch the character list into the view. Failures become the
    /// "failed to load" placeholder.
    pub async fn load_characters(&mut self) {
        match self.backend.list_characters().await {
            Ok(characters) => {
                info!(name: "listing.loaded", count = characters.len(), "Character list loaded");
                self.view.show_characters(characters);
            }
            Err(e) => {
                warn!(name: "listing.load.failed", error = %e, "Failed to load character list");
                self.view.show_failure();
            }
        }
    }

    pub fn view(&self) -> &ListingView {
        &self.view
    }

    pub fn render_document(&self) -> String {
        let text = &self.ui.text;
        html_shell(&text.site_title, &text.listing_title, &self.view.render(&self.ui))
    }
}
