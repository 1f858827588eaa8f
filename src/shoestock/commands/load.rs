use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockError};
use crate::store::{RecordStore, Resource};

/// Initial load. A missing file or bad lines become warnings; the session
/// carries on with whatever could be read.
pub fn run<R: Resource>(store: &mut RecordStore<R>) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let report = match store.load() {
        Ok(report) => report,
        Err(StockError::ResourceNotFound(location)) => {
            result.add_message(CmdMessage::warning(format!(
                "File is not found: {}. Starting with an empty inventory.",
                location
            )));
            return Ok(result);
        }
        Err(e) => return Err(e),
    };

    for skipped in &report.skipped {
        let err = StockError::from(skipped);
        result.add_message(CmdMessage::warning(format!("{}. Line skipped.", err)));
    }
    result.add_message(CmdMessage::info(format!(
        "Loaded {} shoe(s) from {}",
        report.loaded,
        store.resource().location()
    )));

    Ok(result)
}
