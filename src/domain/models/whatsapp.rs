use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One weekday window in which an account answers. Weekday 0 is Sunday.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AvailabilitySlot {
    pub weekday: u8,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Availability {
    Always,
    Slots { slots: Vec<AvailabilitySlot> },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ButtonStyle {
    pub label: String,
    pub background_color: String,
    pub text_color: String,
}

impl ButtonStyle {
    pub const DEFAULT_LABEL: &'static str = "Chat with us";
    pub const DEFAULT_BACKGROUND: &'static str = "#25D366";
    pub const DEFAULT_TEXT: &'static str = "#FFFFFF";
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            label: Self::DEFAULT_LABEL.to_string(),
            background_color: Self::DEFAULT_BACKGROUND.to_string(),
            text_color: Self::DEFAULT_TEXT.to_string(),
        }
    }
}

/// A WhatsApp contact channel packages can advertise. Phone is stored
/// normalized: digits with at most one leading '+'.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WhatsAppAccount {
    pub id: String,
    pub title: String,
    pub phone: String,
    pub avatar: Option<String>,
    pub active: bool,
    pub availability: Availability,
    pub offline_message: String,
    pub button: ButtonStyle,
    pub created_at: DateTime<Utc>,
}
