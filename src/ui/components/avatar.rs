//! Character avatar.

use leptos::prelude::*;

/// Round avatar image, or the character's initial when there is no image.
///
/// ```rust,ignore
/// view! { <Avatar src="/static/avatar/li_bai.jpg" alt="李白" fallback="李" /> }
/// ```
#[component]
pub fn Avatar(
    /// Image URL. Empty means "draw the fallback".
    #[prop(into)]
    src: String,
    #[prop(into)]
    alt: String,
    #[prop(into, default = String::new())]
    fallback: String,
    /// Tailwind size classes.
    #[prop(default = "h-10 w-10")]
    size: &'static str,
) -> impl IntoView {
    let classes = format!("avatar relative flex shrink-0 overflow-hidden rounded-full {size}");

    let inner = if src.is_empty() {
        view! {
            <span class="flex h-full w-full items-center justify-center bg-panel text-sm font-medium text-textMuted">
                {fallback}
            </span>
        }
        .into_any()
    } else {
        view! { <img class="aspect-square h-full w-full object-cover" src=src alt=alt /> }.into_any()
    };

    view! { <span class=classes>{inner}</span> }
}

/// First character of a name, for avatar fallbacks.
pub fn initials(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}
