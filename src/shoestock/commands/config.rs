use crate::commands::{CmdMessage, CmdResult};
use crate::config::{ConfigKey, StockConfig};
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(ConfigKey),
    Set(ConfigKey, String),
}

/// Show or change configuration. `config` is updated in place and, for
/// `Set`, written back to `config_dir`.
pub fn run(
    config_dir: &Path,
    config: &mut StockConfig,
    action: ConfigAction,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {
            for key in ConfigKey::ALL {
                result.add_message(CmdMessage::info(format!("{} = {}", key, config.get(key))));
            }
        }
        ConfigAction::ShowKey(key) => {
            result.add_message(CmdMessage::info(format!("{} = {}", key, config.get(key))));
        }
        ConfigAction::Set(key, value) => {
            let mut updated = config.clone();
            updated.set(key, &value)?;
            updated.save(config_dir)?;
            *config = updated;
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key,
                config.get(key)
            )));
            if key == ConfigKey::InventoryFile {
                result.add_message(CmdMessage::info(
                    "The new inventory file is used from the next run",
                ));
            }
        }
    }

    Ok(result)
}
