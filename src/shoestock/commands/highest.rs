use crate::commands::{CmdMessage, CmdResult, EMPTY_STORE_MESSAGE};
use crate::error::{Result, StockError};
use crate::model::{Direction, NumericField};
use crate::store::{RecordStore, Resource};

/// The shoe with the most pairs on hand is the one to put on sale.
pub fn run<R: Resource>(store: &RecordStore<R>) -> Result<CmdResult> {
    let id = match store.find_extremum(NumericField::Quantity, Direction::Max) {
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
        .with_message(CmdMessage::success(
            "Shoe with the highest quantity is for sale:",
        )))
}
