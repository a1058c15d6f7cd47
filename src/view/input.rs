/// Something that happened on the message input controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The send button was clicked.
    SendClicked,
    /// A key went down in the message field.
    KeyDown { key: String, shift: bool },
}

impl InputEvent {
    /// Whether this event asks for the message to be sent. Enter and the
    /// button share one send routine; Shift+Enter is a newline.
    pub fn submits(&self) -> bool {
        match self {
            Self::SendClicked => true,
            Self::KeyDown { key, shift } => key == "Enter" && !shift,
        }
    }
}

/// The message field.
#[derive(Debug, Default)]
pub struct MessageInput {
    value: String,
}

impl MessageInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Take the trimmed message and clear the field. Whitespace-only input
    /// yields `None` and leaves the field untouched.
    pub fn take_message(&mut self) -> Option<String> {
        let message = self.value.trim();
        if message.is_empty() {
            return None;
        }
        let message = message.to_string();
        self.value.clear();
        Some(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_triggers() {
        assert!(InputEvent::SendClicked.submits());
        assert!(InputEvent::KeyDown { key: "Enter".into(), shift: false }.submits());
        assert!(!InputEvent::KeyDown { key: "Enter".into(), shift: true }.submits());
        assert!(!InputEvent::KeyDown { key: "a".into(), shift: false }.submits());
    }

    #[test]
    fn test_take_message_trims_and_clears() {
        let mut input = MessageInput::new();
        input.set("  hello \n");

        assert_eq!(input.take_message().as_deref(), Some("hello"));
        assert_eq!(input.value(), "");
        assert_eq!(input.take_message(), None);
    }

    #[test]
    fn test_whitespace_is_ignored() {
        let mut input = MessageInput::new();
        input.set(" \t ");

        assert_eq!(input.take_message(), None);
        assert_eq!(input.value(), " \t ");
    }
}
