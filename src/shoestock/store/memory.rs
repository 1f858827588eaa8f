use super::Resource;
use crate::error::{Result, StockError};
use std::io;

/// In-memory resource for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryResource {
    contents: Option<String>,
    writes: usize,
    simulate_write_error: bool,
}

impl InMemoryResource {
    /// A resource that does not exist yet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
            ..Self::default()
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    /// Number of successful writes so far.
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }
}

impl Resource for InMemoryResource {
    fn read(&self) -> Result<String> {
        self.contents
            .clone()
            .ok_or_else(|| StockError::ResourceNotFound(self.location()))
    }

    fn write(&mut self, contents: &str) -> Result<()> {
        if self.simulate_write_error {
            return Err(StockError::Io(io::Error::other("simulated write failure")));
        }
        self.contents = Some(contents.to_string());
        self.writes += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::codec::INVENTORY_HEADER;

    /// Builds an inventory text from `(origin, code, name, cost, quantity)` rows.
    pub fn inventory_text(rows: &[(&str, &str, &str, f64, u64)]) -> String {
        let mut text = format!("{}\n", INVENTORY_HEADER);
        for (origin, code, name, cost, qty) in rows {
            text.push_str(&format!("{},{},{},{},{}\n", origin, code, name, cost, qty));
        }
        text
    }

    /// A small resource with four shoes whose quantities are `[5, 3, 3, 8]`.
    pub fn sample_resource() -> InMemoryResource {
        InMemoryResource::with_contents(inventory_text(&[
            ("South Africa", "SKU44386", "Air Max 90", 2300.0, 5),
            ("China", "SKU90000", "Jordan 1", 3200.0, 3),
            ("Vietnam", "AB12", "Blazer", 19.99, 3),
            ("Italy", "SKU20207", "Air Force 1", 1400.5, 8),
        ]))
    }
}
