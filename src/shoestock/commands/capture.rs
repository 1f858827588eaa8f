use crate::commands::{CaptureInput, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Shoe;
use crate::store::{RecordStore, Resource};

/// Append a new shoe built from user input.
///
/// The inventory file is only written when `autosave` is set. On invalid
/// input nothing is appended.
pub fn run<R: Resource>(
    store: &mut RecordStore<R>,
    input: &CaptureInput,
    autosave: bool,
) -> Result<CmdResult> {
    let shoe = Shoe::from_fields(
        &input.origin,
        &input.code,
        &input.name,
        &input.unit_cost,
        &input.quantity,
    )?;
    let code = shoe.code.clone();
    let id = store.append(shoe)?;

    let mut result = CmdResult::default().with_selected(id);
    result.add_message(CmdMessage::success(format!("Captured shoe {}", code)));

    if autosave {
        store.save()?;
        result.add_message(CmdMessage::info(format!(
            "Saved to {}",
            store.resource().location()
        )));
    } else {
        result.add_message(CmdMessage::info(
            "Not saved yet: it will be written with the next restock",
        ));
    }

    Ok(result.with_listed_shoes(store.records().to_vec()))
}
