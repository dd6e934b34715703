use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCode {
    Enter,
    Escape,
    Other,
}

/// A key press as seen by the composer.
///
/// `modified` is set when Shift, Ctrl, Alt or Meta was held.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Keystroke {
    pub key: KeyCode,
    pub modified: bool,
}

impl Keystroke {
    pub fn new(key: KeyCode, modified: bool) -> Self {
        Self { key, modified }
    }

    /// Plain Enter submits; modified Enter inserts a line break instead.
    pub fn submits(&self) -> bool {
        self.key == KeyCode::Enter && !self.modified
    }
}
