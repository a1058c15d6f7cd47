//! Button styling shared by `<button>`s, links, and card calls to action.

use leptos::prelude::*;

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    /// Irreversible actions (clearing memories).
    Destructive,
}

impl ButtonVariant {
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-primary text-white hover:bg-primaryMuted",
            Self::Secondary => "bg-panel text-textPrimary border border-panelBorder hover:bg-panelBorder",
            Self::Destructive => "bg-danger text-white hover:bg-red-600",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    /// Square, icon only.
    Icon,
}

impl ButtonSize {
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Sm => "h-8 px-3 text-xs",
            Self::Md => "h-10 px-4 text-sm",
            Self::Icon => "h-10 w-10",
        }
    }
}

const BASE_CLASSES: &str = "inline-flex items-center justify-center rounded-lg font-medium \
                            transition-colors focus-visible:outline-none focus-visible:ring-2 \
                            focus-visible:ring-primary focus-visible:ring-offset-2 \
                            disabled:pointer-events-none disabled:opacity-50";

/// Full class list for anything styled as a button. Hand-written
/// `<button>`s carrying HTMX attributes use this directly.
pub fn button_classes(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    format!("{BASE_CLASSES} {} {} {extra}", variant.classes(), size.classes())
}

/// A navigation link that looks like a button.
///
/// ```rust,ignore
/// view! { <LinkButton href="/">"返回列表"</LinkButton> }
/// ```
#[component]
pub fn LinkButton(
    #[prop(into)] href: String,
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    children: Children,
) -> impl IntoView {
    view! {
        <a href=href class=button_classes(variant, size, "")>
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_classes_combine_variant_size_and_extra() {
        let classes = button_classes(ButtonVariant::Destructive, ButtonSize::Sm, "gap-1");
        assert!(classes.starts_with("inline-flex"));
        assert!(classes.contains("bg-danger"));
        assert!(classes.contains("h-8 px-3"));
        assert!(classes.ends_with("gap-1"));
    }

    #[test]
    fn test_link_button_renders_anchor() {
        let html = view! { <LinkButton href="/">"back"</LinkButton> }.to_html();
        assert!(html.starts_with("<a"));
        assert!(html.contains(r#"href="/""#));
        assert!(html.contains("back"));
    }
}
