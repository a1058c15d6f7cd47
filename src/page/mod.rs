//! Page controllers.
//!
//! A controller owns the view components of one page plus a handle to the
//! backend, and implements the page's user actions. Every backend failure
//! ends inside the controller: as a log event, a placeholder, an alert, or
//! the fallback chat bubble. Nothing is returned to the caller as an error.

mod chat;
mod dialogs;
mod listing;

pub use chat::{ChatPage, SendOutcome};
pub use dialogs::{CollectedDialogs, Dialogs, Notice};
pub use listing::ListingPage;
