use leptos::prelude::*;

use crate::ui::components::{Alert, AlertVariant};

/// Blocking user prompts: `alert()` and `confirm()` in a browser.
pub trait Dialogs: Send {
    fn alert(&mut self, variant: AlertVariant, message: &str);

    /// Ask a yes/no question. `true` means the user agreed.
    fn confirm(&mut self, message: &str) -> bool;
}

/// An alert raised during a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub variant: AlertVariant,
    pub message: String,
}

/// [`Dialogs`] for server-rendered requests.
///
/// Alerts are collected and sent back as an out-of-band HTMX swap into
/// `#alerts`. Confirmation already happened in the browser (`hx-confirm`),
/// so `confirm` answers with the value given at construction.
#[derive(Debug)]
pub struct CollectedDialogs {
    confirm_answer: bool,
    notices: Vec<Notice>,
}

impl CollectedDialogs {
    /// The user already agreed to whatever will be asked.
    pub fn confirmed() -> Self {
        Self {
            confirm_answer: true,
            notices: Vec::new(),
        }
    }

    /// The user will decline every question.
    pub fn declined() -> Self {
        Self {
            confirm_answer: false,
            notices: Vec::new(),
        }
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// `hx-swap-oob` markup appending every alert to `#alerts`, or an empty
    /// string when nothing was raised.
    pub fn render_oob(&self) -> String {
        if self.notices.is_empty() {
            return String::new();
        }
        let alerts = self.notices.clone();
        view! {
            <div id="alerts" hx-swap-oob="beforeend">
                {alerts
                    .into_iter()
                    .map(|n| view! { <Alert variant=n.variant message=n.message /> })
                    .collect_view()}
            </div>
        }
        .to_html()
    }
}

impl Dialogs for CollectedDialogs {
    fn alert(&mut self, variant: AlertVariant, message: &str) {
        self.notices.push(Notice {
            variant,
            message: message.to_string(),
        });
    }

    fn confirm(&mut self, _message: &str) -> bool {
        self.confirm_answer
    }
}
