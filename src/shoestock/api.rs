//! # API Facade
//!
//! [`InventoryApi`] is the application context: it owns the [`RecordStore`]
//! and the active [`StockConfig`] and is the single entry point for every
//! shoestock operation, whichever front end drives it.
//!
//! The facade only dispatches. Business rules live in `commands/*.rs`;
//! storage rules live in `store/`. It never prints and never exits.
//!
//! `InventoryApi<R: Resource>` is generic over the backing resource:
//! - Production: `InventoryApi<FileResource>`
//! - Testing: `InventoryApi<InMemoryResource>`

use crate::commands::{self, CaptureInput, CmdResult};
use crate::config::StockConfig;
use crate::error::Result;
use crate::model::RecordId;
use crate::store::{RecordStore, Resource};
use std::path::PathBuf;

pub struct InventoryApi<R: Resource> {
    store: RecordStore<R>,
    config: StockConfig,
    config_dir: PathBuf,
}

impl<R: Resource> InventoryApi<R> {
    /// Wraps an empty store over `resource`. Call [`InventoryApi::load`] next.
    pub fn new(resource: R, config: StockConfig, config_dir: PathBuf) -> Self {
        Self {
            store: RecordStore::new(resource),
            config,
            config_dir,
        }
    }

    pub fn load(&mut self) -> Result<CmdResult> {
        commands::load::run(&mut self.store)
    }

    pub fn view_all(&self) -> Result<CmdResult> {
        commands::view::run(&self.store)
    }

    pub fn capture(&mut self, input: &CaptureInput) -> Result<CmdResult> {
        commands::capture::run(&mut self.store, input, self.config.autosave_on_capture)
    }

    /// Like [`InventoryApi::capture`] but always writes the inventory.
    pub fn capture_and_save(&mut self, input: &CaptureInput) -> Result<CmdResult> {
        commands::capture::run(&mut self.store, input, true)
    }

    pub fn lowest_stock(&self) -> Result<CmdResult> {
        commands::restock::lowest(&self.store)
    }

    pub fn restock(&mut self, id: RecordId, delta: i64) -> Result<CmdResult> {
        commands::restock::apply(&mut self.store, id, delta)
    }

    pub fn find_by_code(&self, code: &str) -> Result<CmdResult> {
        commands::find::run(&self.store, code)
    }

    pub fn values(&self) -> Result<CmdResult> {
        commands::values::run(&self.store)
    }

    pub fn highest_stock(&self) -> Result<CmdResult> {
        commands::highest::run(&self.store)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, &mut self.config, action)
    }

    pub fn unsaved_count(&self) -> usize {
        self.store.unsaved_count()
    }

    pub fn store(&self) -> &RecordStore<R> {
        &self.store
    }

    pub fn settings(&self) -> &StockConfig {
        &self.config
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, MessageLevel, ValuedShoe};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigKey;
    use crate::store::memory::fixtures::sample_resource;
    use crate::store::memory::InMemoryResource;

    fn api_with(resource: InMemoryResource, autosave: bool) -> InventoryApi<InMemoryResource> {
        let config = StockConfig {
            autosave_on_capture: autosave,
            ..StockConfig::default()
        };
        let dir = std::env::temp_dir().join("shoestock-api-tests-unused");
        let mut api = InventoryApi::new(resource, config, dir);
        api.load().unwrap();
        api
    }

    fn input(code: &str) -> CaptureInput {
        CaptureInput {
            origin: "Peru".into(),
            code: code.into(),
            name: "Sandal".into(),
            unit_cost: "12".into(),
            quantity: "1".into(),
        }
    }

    #[test]
    fn capture_follows_autosave_setting() {
        let mut api = api_with(sample_resource(), false);
        api.capture(&input("P1")).unwrap();
        assert_eq!(api.store().resource().writes(), 0);
        assert_eq!(api.unsaved_count(), 1);

        let mut api = api_with(sample_resource(), true);
        api.capture(&input("P1")).unwrap();
        assert_eq!(api.store().resource().writes(), 1);
        assert_eq!(api.unsaved_count(), 0);
    }

    #[test]
    fn capture_and_save_ignores_setting() {
        let mut api = api_with(sample_resource(), false);
        api.capture_and_save(&input("P1")).unwrap();
        assert_eq!(api.store().resource().writes(), 1);
    }

    #[test]
    fn lowest_then_restock_uses_the_handle() {
        let mut api = api_with(sample_resource(), false);
        let id = api.lowest_stock().unwrap().selected.unwrap();
        let result = api.restock(id, 4).unwrap();
        assert_eq!(result.listed_shoes[0].code, "SKU90000");
        assert_eq!(result.listed_shoes[0].quantity, 7);
    }

    #[test]
    fn dispatches_queries() {
        let api = api_with(sample_resource(), false);
        assert_eq!(api.view_all().unwrap().listed_shoes.len(), 4);
        assert_eq!(api.find_by_code("ab12").unwrap().listed_shoes.len(), 1);
        assert_eq!(api.values().unwrap().valued_shoes.len(), 4);
        assert_eq!(
            api.highest_stock().unwrap().listed_shoes[0].code,
            "SKU20207"
        );
    }

    #[test]
    fn config_show_key() {
        let mut api = api_with(sample_resource(), true);
        let result = api
            .config(ConfigAction::ShowKey(ConfigKey::AutosaveCapture))
            .unwrap();
        assert_eq!(result.messages[0].content, "autosave-capture = true");
        assert!(api.settings().autosave_on_capture);
    }
}
