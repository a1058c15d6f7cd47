//! ShadCN-style reusable UI components.
//!
//! Rendered via Leptos SSR; interactivity is carried by HTMX attributes on
//! the surrounding markup.
//!
//! # Components
//!
//! - [`button_classes`], [`LinkButton`]: Button styling with variants
//! - [`Avatar`]: Character avatar with fallback initials
//! - [`Alert`]: Out-of-band notification toast
//! - [`Icon`]: Inline SVG icons

mod alert;
mod avatar;
mod button;
mod icons;

pub use alert::{Alert, AlertVariant};
pub use avatar::{Avatar, initials};
pub use button::{ButtonSize, ButtonVariant, LinkButton, button_classes};
pub use icons::{Icon, IconKind};
