//! UI components and layouts.
//!
//! This module provides Leptos SSR components for rendering the pages,
//! following ShadCN-UI design principles.
//!
//! # Structure
//!
//! - [`app`]: Document shell and not-found page
//! - [`components`]: Reusable ShadCN-style UI components
//! - [`listing`]: Character cards
//! - [`chat`]: Chat page regions and HTMX fragments

pub mod app;
pub mod chat;
pub mod components;
pub mod listing;
