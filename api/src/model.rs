//! Wire models returned by the presence API.

use serde::{Deserialize, Serialize};

/// Directory entry. `/users` omits the avatar, `/users_data` carries it
/// (plus fields the dashboard ignores, such as `email`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "user_id")]
    pub id: u32,
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(rename = "avatar", default, skip_serializing_if = "Option::is_none")]
    pub avatar_uri: Option<String>,
}

impl User {
    pub fn new(id: u32, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            avatar_uri: None,
        }
    }

    pub fn with_avatar(mut self, uri: impl Into<String>) -> Self {
        self.avatar_uri = Some(uri.into());
        self
    }
}

/// `[weekday_label, mean_seconds]`. The mean is computed server side and may
/// be fractional.
pub type MeanTimeRow = (String, f64);

/// `[weekday_label, start_seconds, end_seconds]`
pub type StartEndRow = (String, f64, f64);

/// `[date, presence_seconds]`
pub type PresenceDayRow = (String, f64);

/// Loosely typed cell of the weekday distribution array, whose first row is a
/// header of strings and whose remaining rows mix labels and numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TableValue {
    Number(f64),
    Text(String),
}

impl TableValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TableValue::Text(text) => Some(text),
            TableValue::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            TableValue::Number(value) => Some(*value),
            TableValue::Text(_) => None,
        }
    }
}
