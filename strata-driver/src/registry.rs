//! Driver lookup by identifier.

use std::{collections::BTreeMap, sync::Arc};

use crate::{Driver, DriverError, SqliteDriver};

/// Drivers keyed by the identifier used in `db_type`.
#[derive(Clone, Default)]
pub struct DriverRegistry {
    drivers: BTreeMap<&'static str, Arc<dyn Driver>>,
}

impl DriverRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with every built-in driver.
    pub fn with_defaults() -> Self {
        Self::new().with(SqliteDriver)
    }

    /// Add a driver, replacing any driver with the same name.
    pub fn register(&mut self, driver: impl Driver + 'static) {
        self.drivers.insert(driver.name(), Arc::new(driver));
    }

    /// Builder form of [`DriverRegistry::register`].
    pub fn with(mut self, driver: impl Driver + 'static) -> Self {
        self.register(driver);
        self
    }

    /// Look up the driver for `db_type` (case-insensitive).
    pub fn get(&self, db_type: &str) -> Result<Arc<dyn Driver>, DriverError> {
        let key = db_type.to_lowercase();
        self.drivers
            .get(key.as_str())
            .cloned()
            .ok_or_else(|| DriverError::Unsupported {
                db_type: db_type.to_string(),
                available: self.names().join(", "),
            })
    }

    /// Registered identifiers, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        self.drivers.keys().copied().collect()
    }
}

impl std::fmt::Debug for DriverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DriverRegistry")
            .field("drivers", &self.names())
            .finish()
    }
}
