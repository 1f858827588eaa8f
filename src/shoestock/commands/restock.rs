use crate::commands::{CmdMessage, CmdResult, EMPTY_STORE_MESSAGE};
use crate::error::{Result, StockError};
use crate::model::{Direction, NumericField, RecordId};
use crate::store::{RecordStore, Resource};

/// Find the shoe that most needs restocking (lowest quantity, first on ties).
pub fn lowest<R: Resource>(store: &RecordStore<R>) -> Result<CmdResult> {
    let id = match store.find_extremum(NumericField::Quantity, Direction::Min) {
        Ok(id) => id,
        Err(StockError::EmptyStore) => {
            return Ok(CmdResult::default().with_message(CmdMessage::info(EMPTY_STORE_MESSAGE)));
        }
        Err(e) => return Err(e),
    };

    let shoe = store.get(id).ok_or(StockError::UnknownRecord(id.position()))?;
    Ok(CmdResult::default()
        .with_selected(id)
        .with_listed_shoes(vec![shoe.clone()])
        .with_message(CmdMessage::info("Shoe with the lowest quantity:")))
}

/// Add `delta` to the record behind `id` and persist the inventory.
pub fn apply<R: Resource>(
    store: &mut RecordStore<R>,
    id: RecordId,
    delta: i64,
) -> Result<CmdResult> {
    let location = store.resource().location();
    let shoe = store.restock(id, delta)?.clone();

    Ok(CmdResult::default()
        .with_selected(id)
        .with_message(CmdMessage::success(format!(
            "Restocked {}: quantity is now {}",
            shoe.code, shoe.quantity
        )))
        .with_message(CmdMessage::info(format!("Saved to {}", location)))
        .with_listed_shoes(vec![shoe]))
}
