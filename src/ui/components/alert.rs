//! Alert toast used where a browser would block on `alert()`.

use leptos::prelude::*;

/// Alert visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AlertVariant {
    /// Neutral information.
    #[default]
    Info,
    /// Operation succeeded.
    Success,
    /// Operation failed.
    Error,
}

impl AlertVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Info => "bg-panel text-textPrimary border border-panelBorder",
            Self::Success => "bg-success text-white",
            Self::Error => "bg-danger text-white",
        }
    }
}

/// A single dismissible alert.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Alert variant=AlertVariant::Error message="Failed to load memories" />
/// }
/// ```
#[component]
pub fn Alert(
    /// Alert variant.
    #[prop(default = AlertVariant::Info)]
    variant: AlertVariant,
    /// Text shown to the user.
    #[prop(into)]
    message: String,
) -> impl IntoView {
    let classes = format!(
        "alert flex items-center gap-3 px-4 py-3 rounded-lg shadow-lg text-sm font-medium {}",
        variant.classes()
    );

    view! {
        <div role="alert" class=classes onclick="this.remove()">
            {message}
        </div>
    }
}
