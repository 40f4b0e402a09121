//! In-memory label directory implementation for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::traits::*;
use crate::types::*;

/// In-memory label directory for testing and embedding
#[derive(Debug, Clone)]
pub struct MemoryLabelDirectory {
    properties: Arc<RwLock<HashMap<i64, String>>>,
    units: Arc<RwLock<HashMap<i64, String>>>,
}

impl MemoryLabelDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self {
            properties: Arc::new(RwLock::new(HashMap::new())),
            units: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a property name under its Buildium id
    pub fn insert_property(&self, buildium_property_id: i64, name: impl Into<String>) -> CanonicalResult<()> {
        self.properties
            .write()
            .map_err(|_| lock_poisoned("properties"))?
            .insert(buildium_property_id, name.into());
        Ok(())
    }

    /// Register a unit label under its Buildium id
    pub fn insert_unit(&self, buildium_unit_id: i64, label: impl Into<String>) -> CanonicalResult<()> {
        self.units
            .write()
            .map_err(|_| lock_poisoned("units"))?
            .insert(buildium_unit_id, label.into());
        Ok(())
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) -> CanonicalResult<()> {
        self.properties
            .write()
            .map_err(|_| lock_poisoned("properties"))?
            .clear();
        self.units.write().map_err(|_| lock_poisoned("units"))?.clear();
        Ok(())
    }
}

impl Default for MemoryLabelDirectory {
    fn default() -> Self {
        Self::new()
    }
}

fn lock_poisoned(table: &str) -> CanonicalError {
    CanonicalError::Directory(format!("{table} lock poisoned"))
}

#[async_trait]
impl LabelDirectory for MemoryLabelDirectory {
    async fn property_name(&self, buildium_property_id: i64) -> CanonicalResult<Option<String>> {
        Ok(self
            .properties
            .read()
            .map_err(|_| lock_poisoned("properties"))?
            .get(&buildium_property_id)
            .cloned())
    }

    async fn unit_label(&self, buildium_unit_id: i64) -> CanonicalResult<Option<String>> {
        Ok(self
            .units
            .read()
            .map_err(|_| lock_poisoned("units"))?
            .get(&buildium_unit_id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lookup_and_clear() {
        let directory = MemoryLabelDirectory::new();
        directory.insert_property(5, "Oak St").unwrap();
        directory.insert_unit(12, "2B").unwrap();

        assert_eq!(directory.property_name(5).await.unwrap().as_deref(), Some("Oak St"));
        assert_eq!(directory.unit_label(12).await.unwrap().as_deref(), Some("2B"));
        assert_eq!(directory.property_name(6).await.unwrap(), None);

        directory.clear().unwrap();
        assert_eq!(directory.property_name(5).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clones_share_data() {
        let directory = MemoryLabelDirectory::default();
        let handle = directory.clone();
        handle.insert_unit(1, "101").unwrap();
        assert_eq!(directory.unit_label(1).await.unwrap().as_deref(), Some("101"));
    }
}
