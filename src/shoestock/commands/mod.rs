//! # Command Layer
//!
//! One module per user-facing operation. Each `run` takes the store (and
//! whatever plain arguments it needs) and returns a [`CmdResult`]: the records
//! to show plus any messages for the user. Nothing here prints.
//!
//! Conditions the user should simply be told about (no match, empty store,
//! missing file) come back as messages. Rejected input comes back as `Err`.

use crate::model::{RecordId, Shoe};

pub mod capture;
pub mod config;
pub mod find;
pub mod highest;
pub mod load;
pub mod restock;
pub mod values;
pub mod view;

pub(crate) const EMPTY_STORE_MESSAGE: &str = "No shoes in stock";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A shoe together with its computed stock value.
#[derive(Debug, Clone, PartialEq)]
pub struct ValuedShoe {
    pub shoe: Shoe,
    pub total_value: f64,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_shoes: Vec<Shoe>,
    pub valued_shoes: Vec<ValuedShoe>,
    /// Handle of the record the command singled out (search hit, lowest stock...).
    pub selected: Option<RecordId>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_shoes(mut self, shoes: Vec<Shoe>) -> Self {
        self.listed_shoes = shoes;
        self
    }

    pub fn with_valued_shoes(mut self, shoes: Vec<ValuedShoe>) -> Self {
        self.valued_shoes = shoes;
        self
    }

    pub fn with_selected(mut self, id: RecordId) -> Self {
        self.selected = Some(id);
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}

/// Field values for a new record, as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct CaptureInput {
    pub origin: String,
    pub code: String,
    pub name: String,
    pub unit_cost: String,
    pub quantity: String,
}
