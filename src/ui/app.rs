//! Document shell and site-wide chrome.

use leptos::prelude::*;

use crate::ui::components::{Icon, IconKind, LinkButton};

/// Chat form wiring.
///
/// Before the POST leaves, the user bubble is cloned from
/// `#user-bubble-template` into the transcript and the form is cleared, so
/// the request carries the only copy of the text. When the request fails
/// before the server could answer (timeout, non-2xx, network), the fallback
/// bubble from `#npc-fallback-template` stands in for the reply.
const CHAT_FORM_SCRIPT: &str = r"
(() => {
    const isChatForm = (event) => event.detail.elt.id === 'chat-form';
    const appendFrom = (templateId, text) => {
        const template = document.getElementById(templateId);
        const transcript = document.getElementById('transcript');
        if (!template || !transcript) { return; }
        const bubble = template.content.firstElementChild.cloneNode(true);
        if (text !== undefined) { bubble.querySelector('.message-text').textContent = text; }
        transcript.appendChild(bubble);
        transcript.scrollTop = transcript.scrollHeight;
    };
    document.addEventListener('htmx:beforeRequest', (event) => {
        if (!isChatForm(event)) { return; }
        const form = event.detail.elt;
        const text = form.elements.message.value.trim();
        if (!text) { event.preventDefault(); return; }
        appendFrom('user-bubble-template', text);
        form.reset();
    });
    const fallback = (event) => { if (isChatForm(event)) { appendFrom('npc-fallback-template'); } };
    document.addEventListener('htmx:responseError', fallback);
    document.addEventListener('htmx:sendError', fallback);
    document.addEventListener('htmx:timeout', fallback);
})();
";

/// Wrap page content into a complete HTML document.
///
/// `content` must already be rendered markup; `title` and `site_title` are
/// escaped here.
pub fn html_shell(site_title: &str, title: &str, content: &str) -> String {
    let head_title = view! { <title>{format!("{title} - {site_title}")}</title> }.to_html();
    let header = view! { <SiteHeader site_title=site_title.to_string() /> }.to_html();
    let footer = view! { <Footer /> }.to_html();

    format!(r#"<!DOCTYPE html>
<html lang="zh-CN" class="dark">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    {head_title}

    <!-- HTMX (local, no CDN) -->
    <script src="/static/vendor/htmx-2.0.8.min.js"></script>
    <link rel="stylesheet" href="/static/app.css">
</head>
<body class="min-h-screen bg-background text-textPrimary antialiased">
    <div id="app-shell" class="flex flex-col h-screen overflow-hidden">
        {header}
        <main id="app" class="flex-1 overflow-y-auto container mx-auto px-4 md:px-6 py-4 md:py-8 max-w-5xl">
            {content}
        </main>
        {footer}
    </div>
    <div id="alerts" class="fixed top-4 right-4 z-50 space-y-2" aria-live="assertive"></div>
    <script>{CHAT_FORM_SCRIPT}</script>
</body>
</html>"#)
}

/// Application header with a link back to the listing.
#[component]
fn SiteHeader(
    /// Product name shown next to the logo.
    site_title: String,
) -> impl IntoView {
    view! {
        <header class="sticky top-0 z-50 w-full bg-surfaceContainer backdrop-blur shadow-sm shrink-0">
            <div class="container mx-auto flex h-14 md:h-16 items-center justify-between px-4 md:px-6 max-w-5xl">
                <a href="/" class="flex items-center gap-2 md:gap-3 font-semibold hover:opacity-80 transition-opacity">
                    <Icon kind=IconKind::Sparkles class="h-5 w-5 md:h-6 md:w-6 text-primary" />
                    <span class="text-base md:text-lg">{site_title}</span>
                </a>
            </div>
        </header>
    }
}

/// Footer component.
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-surfaceContainer py-3 md:py-6 shrink-0 hidden md:block">
            <div class="container mx-auto px-4 md:px-6 max-w-5xl">
                <p class="text-xs text-textMuted text-center">
                    "Powered by Axum + Leptos + HTMX"
                </p>
            </div>
        </footer>
    }
}

/// 404 Not Found page content.
#[component]
pub fn NotFoundPage(
    /// Localized "page not found" text.
    message: String,
    /// Localized label of the link back to the listing.
    back_label: String,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-20">
            <h1 class="text-4xl font-bold mb-4">"404"</h1>
            <p class="text-textMuted mb-6">{message}</p>
            <LinkButton href="/">{back_label}</LinkButton>
        </div>
    }
}
