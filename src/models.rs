// src/models.rs
use serde::{Deserialize, Serialize};

/// Gender division printed at the head of every event page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "男子")]
    Men,
    #[serde(rename = "女子")]
    Women,
}

impl Gender {
    /// Maps the literal header token to a gender.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "男子" => Some(Gender::Men),
            "女子" => Some(Gender::Women),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Men => "男子",
            Gender::Women => "女子",
        }
    }

    /// Prefix used when generating event ids ("M-01", "W-03", ...).
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Gender::Men => "M",
            Gender::Women => "W",
        }
    }
}

/// One race category (gender + distance + stroke).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub event_id: String,
    pub sort_order: u32,
    pub gender: Gender,
    pub event_name: String,
}

/// One athlete's registration within an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub entry_id: String,
    pub event_id: String,
    pub seed_order: u64,
    pub athlete_name: String,
    pub team: String,       // Not printed in this layout, always empty
    pub entry_time: String, // Not printed in this layout, always empty
}

impl Entry {
    /// Builds an entry with its composite id `{event_id}:{seed:03}:{org_code}`.
    pub fn new(event_id: &str, seed_order: u64, org_code: &str, athlete_name: String) -> Self {
        Self {
            entry_id: format!("{}:{:03}:{}", event_id, seed_order, org_code),
            event_id: event_id.to_string(),
            seed_order,
            athlete_name,
            team: String::new(),
            entry_time: String::new(),
        }
    }
}

/// The document handed to the downstream app.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterData {
    pub events: Vec<Event>,
    pub entries: Vec<Entry>,
}
