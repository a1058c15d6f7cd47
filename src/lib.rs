//! NPC chat web front end.
//!
//! An HTML-first client for chatting with conversational characters. Pages
//! are rendered with Leptos SSR; HTMX swaps in chat bubbles, the memory
//! modal, and alerts. All state lives in the NPC backend and is fetched per
//! action.
//!
//! # Architecture
//!
//! - **Server**: Axum router serving pages, HTMX fragments, and static assets
//! - **Backend client**: `reqwest` client for the NPC REST API behind a trait
//! - **Pages**: controllers that own the view components of one page
//! - **UI**: Leptos SSR components
//!
//! # Modules
//!
//! - [`backend`]: NPC backend client trait and implementations
//! - [`page`]: Listing and chat page controllers
//! - [`route`]: Typed page routing
//! - [`view`]: Owning view components
//! - [`ui`]: Leptos components and layout

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::unused_async)]
#![allow(clippy::needless_pass_by_value)]

pub mod backend;
pub mod config;
pub mod error;
pub mod model;
pub mod page;
pub mod route;
pub mod server;
pub mod ui;
pub mod view;

use std::sync::Arc;

use crate::backend::NpcBackend;
use crate::config::{AppConfig, UiSettings};

/// Application state shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// NPC backend client.
    pub backend: Arc<dyn NpcBackend>,
    /// Display settings and localized text.
    pub ui: Arc<UiSettings>,
    /// Global Configuration
    pub config: Arc<AppConfig>,
}
