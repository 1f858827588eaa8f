use crate::commands::{CmdMessage, CmdResult, EMPTY_STORE_MESSAGE};
use crate::error::Result;
use crate::store::{RecordStore, Resource};

pub fn run<R: Resource>(store: &RecordStore<R>) -> Result<CmdResult> {
    let result = CmdResult::default().with_listed_shoes(store.records().to_vec());
    if store.is_empty() {
        return Ok(result.with_message(CmdMessage::info(EMPTY_STORE_MESSAGE)));
    }
    Ok(result)
}
