//! Chat page layout.

use super::TRANSCRIPT_ID;

/// Assemble the chat page from pre-rendered regions.
///
/// ```text
/// ┌ header ─────────────── controls ┐
/// │ transcript                       │
/// ├ input ───────────────────────────┤
/// └──────────────────────────────────┘
///   modal (fixed overlay, hidden when closed)
///   templates (inert, cloned by the chat form script)
/// ```
pub fn chat_shell(
    header: &str,
    controls: &str,
    transcript: &str,
    input: &str,
    modal: &str,
    templates: &str,
) -> String {
    format!(
        r#"
    <div class="chat-shell flex flex-col h-full md:h-[calc(100vh-12rem)] bg-surface md:rounded-3xl overflow-hidden md:shadow-lg">
        {header}
        <div class="flex justify-end px-4 md:px-6 py-2 bg-surfaceContainer">
            {controls}
        </div>
        <div id="{TRANSCRIPT_ID}" class="flex-1 overflow-y-auto overflow-x-hidden p-4 space-y-3" aria-live="polite">
            {transcript}
        </div>
        {input}
    </div>
    {modal}
    {templates}
    "#
    )
}
