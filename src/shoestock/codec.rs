//! # Inventory File Codec
//!
//! The backing file is plain UTF-8 text:
//!
//! ```text
//! Country,Code,Product,Cost,Quantity     <- header, always discarded on read
//! South Africa,SKU44386,Air Max 90,2300,20
//! China,SKU90000,Jordan 1,3200,50
//! ```
//!
//! Every data line holds exactly five comma-separated fields. There is no
//! quoting, so a text field may not contain a comma or a line break.
//! Text fields are stored verbatim, surrounding spaces included. Blank lines
//! are ignored on read.
//!
//! This module knows nothing about tables or terminals; display formatting
//! lives in the CLI layer.

use crate::error::StockError;
use crate::model::{parse_cost, parse_quantity, Shoe};
use std::fmt;

pub const DELIMITER: char = ',';
pub const FIELD_COUNT: usize = 5;

/// Header written on save. Load discards whatever the first line holds.
pub const INVENTORY_HEADER: &str = "Country,Code,Product,Cost,Quantity";

#[derive(Debug, Clone, PartialEq)]
pub enum DecodeError {
    FieldCount { found: usize },
    InvalidCost(String),
    InvalidQuantity(String),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::FieldCount { found } => {
                write!(f, "expected {} fields, found {}", FIELD_COUNT, found)
            }
            DecodeError::InvalidCost(text) => write!(f, "invalid cost '{}'", text),
            DecodeError::InvalidQuantity(text) => write!(f, "invalid quantity '{}'", text),
        }
    }
}

impl std::error::Error for DecodeError {}

/// A data line that could not be decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLine {
    /// 1-based line number within the file (the header is line 1).
    pub line: usize,
    pub content: String,
    pub reason: DecodeError,
}

impl From<&SkippedLine> for StockError {
    fn from(skipped: &SkippedLine) -> Self {
        StockError::MalformedRecord {
            line: skipped.line,
            reason: format!("{} in '{}'", skipped.reason, skipped.content),
        }
    }
}

#[derive(Debug, Default)]
pub struct DecodedInventory {
    pub records: Vec<Shoe>,
    pub skipped: Vec<SkippedLine>,
}

pub fn encode_record(shoe: &Shoe) -> String {
    format!(
        "{origin}{d}{code}{d}{name}{d}{cost}{d}{qty}",
        origin = shoe.origin,
        code = shoe.code,
        name = shoe.name,
        cost = shoe.unit_cost,
        qty = shoe.quantity,
        d = DELIMITER
    )
}

pub fn decode_record(line: &str) -> Result<Shoe, DecodeError> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() != FIELD_COUNT {
        return Err(DecodeError::FieldCount {
            found: fields.len(),
        });
    }

    let unit_cost =
        parse_cost(fields[3]).ok_or_else(|| DecodeError::InvalidCost(fields[3].trim().into()))?;
    let quantity = parse_quantity(fields[4])
        .ok_or_else(|| DecodeError::InvalidQuantity(fields[4].trim().into()))?;

    Ok(Shoe::new(fields[0], fields[1], fields[2], unit_cost, quantity))
}

/// Returns the name of the first text field that would corrupt the file layout.
pub fn unencodable_field(shoe: &Shoe) -> Option<&'static str> {
    let forbidden = |s: &str| s.contains(DELIMITER) || s.contains('\n') || s.contains('\r');
    if forbidden(&shoe.origin) {
        Some("origin")
    } else if forbidden(&shoe.code) {
        Some("code")
    } else if forbidden(&shoe.name) {
        Some("name")
    } else {
        None
    }
}

pub fn encode_inventory(records: &[Shoe]) -> String {
    let mut out = String::with_capacity(INVENTORY_HEADER.len() + 1 + records.len() * 48);
    out.push_str(INVENTORY_HEADER);
    out.push('\n');
    for shoe in records {
        out.push_str(&encode_record(shoe));
        out.push('\n');
    }
    out
}

pub fn decode_inventory(text: &str) -> DecodedInventory {
    let mut decoded = DecodedInventory::default();

    // Line 1 is the header.
    for (idx, raw) in text.lines().enumerate().skip(1) {
        if raw.trim().is_empty() {
            continue;
        }
        let line = raw.trim_end_matches('\r');
        match decode_record(line) {
            Ok(shoe) => decoded.records.push(shoe),
            Err(reason) => decoded.skipped.push(SkippedLine {
                line: idx + 1,
                content: line.to_string(),
                reason,
            }),
        }
    }

    decoded
}
