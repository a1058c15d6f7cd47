//! Chat-specific UI components.
//!
//! Page layout plus the pieces HTMX swaps in and out: message bubbles
//! (appended to `#transcript`) and the memory modal (replaces
//! `#memory-modal`).

mod header;
mod input_area;
mod memory_modal;
mod shell;
mod transcript;

pub use header::{ChatHeader, HeaderContent};
pub use input_area::{ChatInputArea, MemoryControls};
pub use memory_modal::{MemoryEntry, MemoryModalClosed, MemoryModalOpen, MEMORY_MODAL_ID};
pub use shell::chat_shell;
pub use transcript::{
    MessageBubble, NPC_FALLBACK_TEMPLATE_ID, TRANSCRIPT_ID, USER_BUBBLE_TEMPLATE_ID,
    bubble_templates,
};
