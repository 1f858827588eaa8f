use crate::commands::{CmdMessage, CmdResult, ValuedShoe, EMPTY_STORE_MESSAGE};
use crate::error::{Result, StockError};
use crate::store::{RecordStore, Resource};

pub fn run<R: Resource>(store: &RecordStore<R>) -> Result<CmdResult> {
    let values = match store.value_per_record() {
        Ok(values) => values,
        Err(StockError::EmptyStore) => {
            return Ok(CmdResult::default().with_message(CmdMessage::info(EMPTY_STORE_MESSAGE)));
        }
        Err(e) => return Err(e),
    };

    let valued = values
        .into_iter()
        .map(|v| ValuedShoe {
            shoe: v.record.clone(),
            total_value: v.total_value,
        })
        .collect();

    Ok(CmdResult::default().with_valued_shoes(valued))
}
