use super::Resource;
use crate::codec::{self, SkippedLine};
use crate::error::{Result, StockError};
use crate::model::{Direction, NumericField, RecordId, Shoe};
use tracing::{debug, warn};

/// Outcome of a load: how many records were read and which lines were rejected.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: Vec<SkippedLine>,
}

/// A record paired with its computed stock value.
#[derive(Debug, Clone, Copy)]
pub struct RecordValue<'a> {
    pub id: RecordId,
    pub record: &'a Shoe,
    pub total_value: f64,
}

/// Ordered, in-memory collection of shoes backed by a [`Resource`].
///
/// Insertion order is preserved and duplicate codes are accepted.
pub struct RecordStore<R: Resource> {
    resource: R,
    records: Vec<Shoe>,
    unsaved: usize,
}

impl<R: Resource> RecordStore<R> {
    /// An empty store. Call [`RecordStore::load`] to populate it.
    pub fn new(resource: R) -> Self {
        Self {
            resource,
            records: Vec::new(),
            unsaved: 0,
        }
    }

    pub fn resource(&self) -> &R {
        &self.resource
    }

    pub fn records(&self) -> &[Shoe] {
        &self.records
    }

    pub fn get(&self, id: RecordId) -> Option<&Shoe> {
        self.records.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of appended records not yet written to the resource.
    pub fn unsaved_count(&self) -> usize {
        self.unsaved
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved > 0
    }

    /// Replace the working set with the contents of the resource.
    ///
    /// A missing resource leaves the store untouched and returns
    /// `ResourceNotFound`. Malformed lines are skipped and listed in the report.
    pub fn load(&mut self) -> Result<LoadReport> {
        let text = self.resource.read()?;
        let decoded = codec::decode_inventory(&text);

        for skipped in &decoded.skipped {
            warn!(
                line = skipped.line,
                reason = %skipped.reason,
                "skipping malformed inventory line"
            );
        }

        self.records = decoded.records;
        self.unsaved = 0;
        debug!(
            location = %self.resource.location(),
            loaded = self.records.len(),
            skipped = decoded.skipped.len(),
            "inventory loaded"
        );

        Ok(LoadReport {
            loaded: self.records.len(),
            skipped: decoded.skipped,
        })
    }

    /// Overwrite the resource with the full store.
    pub fn save(&mut self) -> Result<()> {
        let text = codec::encode_inventory(&self.records);
        if let Err(e) = self.resource.write(&text) {
            warn!(location = %self.resource.location(), error = %e, "inventory save failed");
            return Err(e);
        }
        self.unsaved = 0;
        debug!(
            location = %self.resource.location(),
            records = self.records.len(),
            "inventory saved"
        );
        Ok(())
    }

    /// Add a record at the end. Does not touch the resource.
    pub fn append(&mut self, shoe: Shoe) -> Result<RecordId> {
        if let Some(field) = codec::unencodable_field(&shoe) {
            return Err(StockError::InvalidInput(format!(
                "{} may not contain '{}' or line breaks",
                field,
                codec::DELIMITER
            )));
        }
        if !shoe.unit_cost.is_finite() || shoe.unit_cost < 0.0 {
            return Err(StockError::InvalidInput(format!(
                "cost {} is not a non-negative number",
                shoe.unit_cost
            )));
        }

        self.records.push(shoe);
        self.unsaved += 1;
        let id = RecordId(self.records.len() - 1);
        debug!(record = %id, "record appended");
        Ok(id)
    }

    /// First record whose code matches, ignoring case.
    pub fn find_by_code(&self, code: &str) -> Option<RecordId> {
        self.records
            .iter()
            .position(|shoe| shoe.matches_code(code))
            .map(RecordId)
    }

    /// Record with the smallest or largest value of `field`.
    ///
    /// Ties resolve to the record that comes first.
    pub fn find_extremum(&self, field: NumericField, direction: Direction) -> Result<RecordId> {
        let mut records = self.records.iter().enumerate();
        let (mut best, first) = records.next().ok_or(StockError::EmptyStore)?;
        let mut best_value = first.field_value(field);

        for (idx, shoe) in records {
            let value = shoe.field_value(field);
            if direction.prefers(value, best_value) {
                best = idx;
                best_value = value;
            }
        }

        Ok(RecordId(best))
    }

    /// Add `delta` to a record's quantity, then save the whole store.
    ///
    /// A non-positive delta, or one that would overflow the quantity, leaves
    /// the store untouched and skips the save.
    pub fn restock(&mut self, id: RecordId, delta: i64) -> Result<&Shoe> {
        let amount = u64::try_from(delta)
            .ok()
            .filter(|amount| *amount > 0)
            .ok_or(StockError::InvalidDelta(delta))?;

        let shoe = self
            .records
            .get_mut(id.0)
            .ok_or(StockError::UnknownRecord(id.0))?;
        shoe.quantity = shoe
            .quantity
            .checked_add(amount)
            .ok_or(StockError::InvalidDelta(delta))?;
        debug!(record = %id, delta, quantity = shoe.quantity, "record restocked");

        self.save()?;
        Ok(&self.records[id.0])
    }

    /// `unit_cost * quantity` for every record, in store order.
    pub fn value_per_record(&self) -> Result<Vec<RecordValue<'_>>> {
        if self.records.is_empty() {
            return Err(StockError::EmptyStore);
        }
        Ok(self
            .records
            .iter()
            .enumerate()
            .map(|(idx, record)| RecordValue {
                id: RecordId(idx),
                record,
                total_value: record.total_value(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::DecodeError;
    use crate::store::memory::fixtures::{inventory_text, sample_resource};
    use crate::store::memory::InMemoryResource;

    fn loaded_sample() -> RecordStore<InMemoryResource> {
        let mut store = RecordStore::new(sample_resource());
        store.load().unwrap();
        store
    }

    #[test]
    fn load_keeps_file_order() {
        let store = loaded_sample();
        let codes: Vec<_> = store.records().iter().map(|s| s.code.as_str()).collect();
        assert_eq!(codes, vec!["SKU44386", "SKU90000", "AB12", "SKU20207"]);
    }

    #[test]
    fn load_missing_resource_leaves_store_unchanged() {
        let mut store = RecordStore::new(InMemoryResource::new());
        store
            .append(Shoe::new("Peru", "P1", "Sandal", 5.0, 1))
            .unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, StockError::ResourceNotFound(_)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn load_skips_malformed_lines() {
        let text = "Country,Code,Product,Cost,Quantity\nA,C1,N1,10,2\nB,C2,N2,7\n";
        let mut store = RecordStore::new(InMemoryResource::with_contents(text));

        let report = store.load().unwrap();
        assert_eq!(report.loaded, 1);
        assert_eq!(store.len(), 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].line, 3);
        assert_eq!(report.skipped[0].reason, DecodeError::FieldCount { found: 4 });
    }

    #[test]
    fn load_rejects_non_numeric_quantity_without_zeroing() {
        let text = inventory_text(&[("A", "C1", "N1", 10.0, 2)]) + "B,C2,N2,7,lots\n";
        let mut store = RecordStore::new(InMemoryResource::with_contents(text));

        let report = store.load().unwrap();
        assert_eq!(report.loaded, 1);
        assert!(store.find_by_code("C2").is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut store = loaded_sample();
        let before = store.records().to_vec();
        store.save().unwrap();

        let text = store.resource().contents().unwrap().to_string();
        let mut reloaded = RecordStore::new(InMemoryResource::with_contents(text));
        reloaded.load().unwrap();
        assert_eq!(reloaded.records(), before.as_slice());
    }

    #[test]
    fn captured_text_with_edge_spaces_survives_save_and_load() {
        let mut store = loaded_sample();
        store
            .append(Shoe::new(" Italy", "C1", "Loafer ", 1.0, 2))
            .unwrap();
        let before = store.records().to_vec();
        store.save().unwrap();

        let text = store.resource().contents().unwrap().to_string();
        let mut reloaded = RecordStore::new(InMemoryResource::with_contents(text));
        let report = reloaded.load().unwrap();
        assert!(report.skipped.is_empty());
        assert_eq!(reloaded.records(), before.as_slice());
    }

    #[test]
    fn append_does_not_persist() {
        let mut store = loaded_sample();
        let original = store.resource().contents().unwrap().to_string();

        store
            .append(Shoe::new("Peru", "NEW1", "Sandal", 5.0, 1))
            .unwrap();

        assert_eq!(store.len(), 5);
        assert_eq!(store.resource().writes(), 0);
        assert_eq!(store.resource().contents().unwrap(), original);
        assert!(store.has_unsaved_changes());
    }

    #[test]
    fn append_rejects_delimiter_in_text() {
        let mut store = loaded_sample();
        let err = store
            .append(Shoe::new("Peru", "NEW1", "Sandal, red", 5.0, 1))
            .unwrap_err();
        assert!(matches!(err, StockError::InvalidInput(_)));
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn append_rejects_negative_cost() {
        let mut store = loaded_sample();
        let err = store
            .append(Shoe::new("Peru", "NEW1", "Sandal", -5.0, 1))
            .unwrap_err();
        assert!(matches!(err, StockError::InvalidInput(_)));
    }

    #[test]
    fn find_by_code_is_case_insensitive() {
        let store = loaded_sample();
        let lower = store.find_by_code("ab12").unwrap();
        let upper = store.find_by_code("AB12").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(store.get(lower).unwrap().name, "Blazer");
        assert!(store.find_by_code("zz99").is_none());
    }

    #[test]
    fn find_by_code_returns_first_duplicate() {
        let mut store = loaded_sample();
        store
            .append(Shoe::new("Peru", "ab12", "Second", 5.0, 1))
            .unwrap();
        let id = store.find_by_code("AB12").unwrap();
        assert_eq!(store.get(id).unwrap().name, "Blazer");
    }

    #[test]
    fn min_quantity_tie_goes_to_first() {
        let store = loaded_sample();
        let id = store
            .find_extremum(NumericField::Quantity, Direction::Min)
            .unwrap();
        assert_eq!(id.position(), 1);
    }

    #[test]
    fn max_quantity_tie_goes_to_first() {
        let mut store = loaded_sample();
        store
            .append(Shoe::new("Peru", "P8", "Sandal", 5.0, 8))
            .unwrap();
        let id = store
            .find_extremum(NumericField::Quantity, Direction::Max)
            .unwrap();
        assert_eq!(id.position(), 3);
    }

    #[test]
    fn extremum_by_cost() {
        let store = loaded_sample();
        let id = store
            .find_extremum(NumericField::UnitCost, Direction::Min)
            .unwrap();
        assert_eq!(store.get(id).unwrap().code, "AB12");
    }

    #[test]
    fn extremum_on_empty_store() {
        let store = RecordStore::new(InMemoryResource::new());
        let err = store
            .find_extremum(NumericField::Quantity, Direction::Max)
            .unwrap_err();
        assert!(matches!(err, StockError::EmptyStore));
    }

    #[test]
    fn restock_updates_and_persists() {
        let mut store = loaded_sample();
        let id = store
            .find_extremum(NumericField::Quantity, Direction::Min)
            .unwrap();

        let updated = store.restock(id, 10).unwrap();
        assert_eq!(updated.quantity, 13);
        assert_eq!(store.resource().writes(), 1);

        let text = store.resource().contents().unwrap().to_string();
        let mut reloaded = RecordStore::new(InMemoryResource::with_contents(text));
        reloaded.load().unwrap();
        let again = reloaded.find_by_code("SKU90000").unwrap();
        assert_eq!(reloaded.get(again).unwrap().quantity, 13);
    }

    #[test]
    fn restock_also_persists_pending_appends() {
        let mut store = loaded_sample();
        store
            .append(Shoe::new("Peru", "NEW1", "Sandal", 5.0, 1))
            .unwrap();
        let id = store.find_by_code("SKU44386").unwrap();
        store.restock(id, 1).unwrap();
        assert!(!store.has_unsaved_changes());
        assert!(store.resource().contents().unwrap().contains("NEW1"));
    }

    #[test]
    fn restock_rejects_non_positive_delta() {
        let mut store = loaded_sample();
        let id = store.find_by_code("AB12").unwrap();

        for delta in [0, -4] {
            let err = store.restock(id, delta).unwrap_err();
            assert!(matches!(err, StockError::InvalidDelta(d) if d == delta));
        }
        assert_eq!(store.get(id).unwrap().quantity, 3);
        assert_eq!(store.resource().writes(), 0);
    }

    #[test]
    fn restock_rejects_overflow() {
        let mut store = loaded_sample();
        let id = store
            .append(Shoe::new("Peru", "FULL1", "Sandal", 5.0, u64::MAX))
            .unwrap();
        let err = store.restock(id, 1).unwrap_err();
        assert!(matches!(err, StockError::InvalidDelta(1)));
        assert_eq!(store.get(id).unwrap().quantity, u64::MAX);
        assert_eq!(store.resource().writes(), 0);
    }

    #[test]
    fn restock_surfaces_save_failure() {
        let mut resource = sample_resource();
        resource.set_simulate_write_error(true);
        let mut store = RecordStore::new(resource);
        store.load().unwrap();
        let id = store.find_by_code("AB12").unwrap();

        let err = store.restock(id, 2).unwrap_err();
        assert!(matches!(err, StockError::Io(_)));
    }

    #[test]
    fn value_per_record_in_order() {
        let store = loaded_sample();
        let values = store.value_per_record().unwrap();
        assert_eq!(values.len(), 4);
        assert_eq!(values[2].record.code, "AB12");
        assert_eq!(format!("{:.2}", values[2].total_value), "59.97");
    }

    #[test]
    fn value_per_record_on_empty_store() {
        let store = RecordStore::new(InMemoryResource::new());
        assert!(matches!(
            store.value_per_record().unwrap_err(),
            StockError::EmptyStore
        ));
    }
}
