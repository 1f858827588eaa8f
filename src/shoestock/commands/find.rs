use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockError};
use crate::store::{RecordStore, Resource};

pub fn run<R: Resource>(store: &RecordStore<R>, code: &str) -> Result<CmdResult> {
    let code = code.trim();
    let Some(id) = store.find_by_code(code) else {
        return Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "Shoe with code '{}' was not found",
            code
        ))));
    };

    let shoe = store.get(id).ok_or(StockError::UnknownRecord(id.position()))?;
    Ok(CmdResult::default()
        .with_selected(id)
        .with_listed_shoes(vec![shoe.clone()])
        .with_message(CmdMessage::success("Shoe was found:")))
}
