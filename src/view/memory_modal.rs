use chrono::{DateTime, Local};
use leptos::prelude::*;

use crate::config::UiSettings;
use crate::model::{MemoryRecord, sort_newest_first};
use crate::ui::chat::{MemoryEntry, MemoryModalClosed, MemoryModalOpen};

/// Where a click inside the modal landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The modal container itself, outside the content box.
    Backdrop,
    /// The explicit close control.
    CloseControl,
    /// Anywhere inside the content box.
    Content,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum ModalState {
    #[default]
    Closed,
    Open(Vec<MemoryRecord>),
}

/// Memory overlay. Two states only: closed and open.
#[derive(Debug, Default)]
pub struct MemoryModal {
    state: ModalState,
}

impl MemoryModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open with `records`, displayed newest first.
    pub fn open(&mut self, mut records: Vec<MemoryRecord>) {
        sort_newest_first(&mut records);
        self.state = ModalState::Open(records);
    }

    /// Close and drop the fetched records.
    pub fn close(&mut self) {
        self.state = ModalState::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    /// Records in display order; empty when closed.
    pub fn records(&self) -> &[MemoryRecord] {
        match &self.state {
            ModalState::Open(records) => records,
            ModalState::Closed => &[],
        }
    }

    /// Apply a click. Returns whether the modal closed.
    pub fn handle_click(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Backdrop | ClickTarget::CloseControl if self.is_open() => {
                self.close();
                true
            }
            _ => false,
        }
    }

    pub fn render(&self, ui: &UiSettings, npc_name: &str) -> String {
        match &self.state {
            ModalState::Closed => view! { <MemoryModalClosed /> }.to_html(),
            ModalState::Open(records) => {
                let entries = records
                    .iter()
                    .map(|record| MemoryEntry {
                        time: format_timestamp(record.timestamp, &ui.timestamp_format),
                        user_message: record.user_message.clone(),
                        assistant_message: record.assistant_message.clone(),
                    })
                    .collect::<Vec<_>>();
                let text = &ui.text;
                view! {
                    <MemoryModalOpen
                        entries=entries
                        title=text.memories_title.clone()
                        empty_text=text.memories_empty.clone()
                        close_label=text.close.clone()
                        user_label=text.user_label.clone()
                        npc_label=npc_name.to_string()
                    />
                }
                .to_html()
            }
        }
    }
}

/// Unix seconds as a local time string. Out-of-range values print raw.
fn format_timestamp(timestamp: i64, format: &str) -> String {
    DateTime::from_timestamp(timestamp, 0).map_or_else(
        || timestamp.to_string(),
        |utc| utc.with_timezone(&Local).format(format).to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(timestamp: i64, user: &str) -> MemoryRecord {
        MemoryRecord {
            timestamp,
            user_message: user.to_string(),
            assistant_message: format!("re: {user}"),
        }
    }

    #[test]
    fn test_open_sorts_newest_first() {
        let mut modal = MemoryModal::new();
        modal.open(vec![record(100, "m100"), record(300, "m300"), record(200, "m200")]);

        let order: Vec<i64> = modal.records().iter().map(|r| r.timestamp).collect();
        assert_eq!(order, vec![300, 200, 100]);

        let html = modal.render(&UiSettings::default(), "Alice");
        let p300 = html.find("m300").unwrap();
        let p200 = html.find("m200").unwrap();
        let p100 = html.find("m100").unwrap();
        assert!(p300 < p200 && p200 < p100);
    }

    #[test]
    fn test_state_machine() {
        let mut modal = MemoryModal::new();
        assert!(!modal.is_open());

        modal.open(vec![record(1, "a")]);
        assert!(modal.is_open());

        assert!(!modal.handle_click(ClickTarget::Content));
        assert!(modal.is_open());

        assert!(modal.handle_click(ClickTarget::Backdrop));
        assert!(!modal.is_open());
        assert!(modal.records().is_empty());

        modal.open(Vec::new());
        assert!(modal.handle_click(ClickTarget::CloseControl));
        assert!(!modal.is_open());

        assert!(!modal.handle_click(ClickTarget::Backdrop));
    }

    #[test]
    fn test_empty_shows_placeholder() {
        let ui = UiSettings::default();
        let mut modal = MemoryModal::new();
        modal.open(Vec::new());

        let html = modal.render(&ui, "Alice");
        assert!(html.contains(&ui.text.memories_empty));
        assert!(!html.contains("memory-record"));
    }

    #[test]
    fn test_closed_renders_hidden_placeholder() {
        let html = MemoryModal::new().render(&UiSettings::default(), "Alice");
        assert!(html.contains(r#"id="memory-modal""#));
        assert!(html.contains("hidden"));
        assert!(!html.contains("modal-content"));
    }

    #[test]
    fn test_format_timestamp_out_of_range() {
        assert_eq!(format_timestamp(i64::MAX, "%Y"), i64::MAX.to_string());
        assert_eq!(format_timestamp(0, "%Y").len(), 4);
    }
}
