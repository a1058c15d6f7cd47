//! Owning view components.
//!
//! Each page region is one struct that owns its state and exposes
//! update and render methods. Call sites never touch markup directly.
//!
//! - [`ListingView`]: character grid or placeholder
//! - [`HeaderView`]: chat header, built once then updated in place
//! - [`TranscriptView`]: ordered chat bubbles
//! - [`MemoryModal`]: closed/open memory overlay
//! - [`MessageInput`]: the message field and its submit triggers

mod header;
mod input;
mod listing;
mod memory_modal;
mod transcript;

pub use header::HeaderView;
pub use input::{InputEvent, MessageInput};
pub use listing::{ListingState, ListingView};
pub use memory_modal::{ClickTarget, MemoryModal};
pub use transcript::TranscriptView;
