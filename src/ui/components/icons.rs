//! Inline SVG icons (Lucide outlines).

use leptos::prelude::*;

/// Which glyph to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Send,
    Close,
    Sparkles,
    History,
    Trash,
}

impl IconKind {
    /// Stroke paths on a 24x24 grid.
    fn paths(self) -> &'static [&'static str] {
        match self {
            Self::Send => &["M22 2 11 13", "m22 2-7 20-4-9-9-4Z"],
            Self::Close => &["M18 6 6 18", "m6 6 12 12"],
            Self::Sparkles => &[
                "m12 3-1.912 5.813a2 2 0 0 1-1.275 1.275L3 12l5.813 1.912a2 2 0 0 1 1.275 1.275L12 21l1.912-5.813a2 2 0 0 1 1.275-1.275L21 12l-5.813-1.912a2 2 0 0 1-1.275-1.275L12 3Z",
                "M5 3v4",
                "M19 17v4",
                "M3 5h4",
                "M17 19h4",
            ],
            Self::History => &[
                "M3 12a9 9 0 1 0 9-9 9.75 9.75 0 0 0-6.74 2.74L3 8",
                "M3 3v5h5",
                "M12 7v5l4 2",
            ],
            Self::Trash => &[
                "M3 6h18",
                "M19 6v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6",
                "M8 6V4c0-1 1-2 2-2h4c1 0 2 1 2 2v2",
            ],
        }
    }
}

#[component]
pub fn Icon(
    kind: IconKind,
    /// Size and color classes.
    #[prop(default = "h-4 w-4")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {kind.paths().iter().map(|d| view! { <path d={*d} /> }).collect_view()}
        </svg>
    }
}
