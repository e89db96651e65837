use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::FormError;
use crate::models::{
    CategoryRef, ItemDetail, ItemForm, MaterialSkuRef, ModifierGroupRef, OutletRef, UnitRef,
};

/// Backing store the form session loads reference data from and submits to.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_units(&self) -> Result<Vec<UnitRef>, FormError>;
    async fn fetch_outlets(&self) -> Result<Vec<OutletRef>, FormError>;
    async fn fetch_categories(&self) -> Result<Vec<CategoryRef>, FormError>;
    async fn fetch_modifier_groups(&self) -> Result<Vec<ModifierGroupRef>, FormError>;
    async fn fetch_material_skus(&self) -> Result<Vec<MaterialSkuRef>, FormError>;
    async fn fetch_item(&self, item_id: Uuid) -> Result<ItemDetail, FormError>;
    async fn save_item(&self, item_id: Uuid, form: &ItemForm) -> Result<(), FormError>;
}

#[derive(Debug, Default)]
struct CatalogState {
    units: Vec<UnitRef>,
    outlets: Vec<OutletRef>,
    categories: Vec<CategoryRef>,
    modifier_groups: Vec<ModifierGroupRef>,
    material_skus: Vec<MaterialSkuRef>,
    items: HashMap<Uuid, ItemDetail>,
    saved: Vec<(Uuid, ItemForm)>,
}

/// In-memory catalog source implementation
///
/// Serves seeded reference data and records every submitted form, so tests
/// and local tools can run a full session without a backend.
#[derive(Debug, Default)]
pub struct MemoryCatalogSource {
    state: Arc<Mutex<CatalogState>>,
}

impl MemoryCatalogSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_units(&self, units: Vec<UnitRef>) {
        self.state.lock().unwrap().units = units;
    }

    pub fn seed_outlets(&self, outlets: Vec<OutletRef>) {
        self.state.lock().unwrap().outlets = outlets;
    }

    pub fn seed_categories(&self, categories: Vec<CategoryRef>) {
        self.state.lock().unwrap().categories = categories;
    }

    pub fn seed_modifier_groups(&self, groups: Vec<ModifierGroupRef>) {
        self.state.lock().unwrap().modifier_groups = groups;
    }

    pub fn seed_material_skus(&self, skus: Vec<MaterialSkuRef>) {
        self.state.lock().unwrap().material_skus = skus;
    }

    pub fn seed_item(&self, detail: ItemDetail) {
        let mut state = self.state.lock().unwrap();
        state.items.insert(detail.item_id, detail);
    }

    /// Currently seeded detail for an item, if any.
    pub fn item_detail(&self, item_id: Uuid) -> Option<ItemDetail> {
        self.state.lock().unwrap().items.get(&item_id).cloned()
    }

    /// Every `(item_id, form)` pair submitted so far, oldest first.
    pub fn saved_items(&self) -> Vec<(Uuid, ItemForm)> {
        self.state.lock().unwrap().saved.clone()
    }
}

#[async_trait]
impl CatalogSource for MemoryCatalogSource {
    async fn fetch_units(&self) -> Result<Vec<UnitRef>, FormError> {
        Ok(self.state.lock().unwrap().units.clone())
    }

    async fn fetch_outlets(&self) -> Result<Vec<OutletRef>, FormError> {
        Ok(self.state.lock().unwrap().outlets.clone())
    }

    async fn fetch_categories(&self) -> Result<Vec<CategoryRef>, FormError> {
        Ok(self.state.lock().unwrap().categories.clone())
    }

    async fn fetch_modifier_groups(&self) -> Result<Vec<ModifierGroupRef>, FormError> {
        Ok(self.state.lock().unwrap().modifier_groups.clone())
    }

    async fn fetch_material_skus(&self) -> Result<Vec<MaterialSkuRef>, FormError> {
        Ok(self.state.lock().unwrap().material_skus.clone())
    }

    async fn fetch_item(&self, item_id: Uuid) -> Result<ItemDetail, FormError> {
        self.state
            .lock()
            .unwrap()
            .items
            .get(&item_id)
            .cloned()
            .ok_or_else(|| FormError::NotFound(format!("Item {} not found", item_id)))
    }

    async fn save_item(&self, item_id: Uuid, form: &ItemForm) -> Result<(), FormError> {
        self.state
            .lock()
            .unwrap()
            .saved
            .push((item_id, form.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_item_surfaces_not_found() {
        let source = MemoryCatalogSource::new();
        let err = source.fetch_item(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, FormError::NotFound(_)));
    }

    #[tokio::test]
    async fn seeded_data_round_trips() {
        let source = MemoryCatalogSource::new();
        source.seed_units(vec![UnitRef {
            unit_id: Uuid::new_v4(),
            code: "PCS".into(),
            name: "Pieces".into(),
        }]);

        let units = source.fetch_units().await.unwrap();
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].code, "PCS");
    }

    #[tokio::test]
    async fn submitted_forms_are_recorded_in_order() {
        let source = MemoryCatalogSource::new();
        let item_id = Uuid::new_v4();
        let mut form = ItemForm::default();
        form.name = "Mug".into();

        source.save_item(item_id, &form).await.unwrap();
        form.name = "Tumbler".into();
        source.save_item(item_id, &form).await.unwrap();

        let saved = source.saved_items();
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0].1.name, "Mug");
        assert_eq!(saved[1].1.name, "Tumbler");
    }
}
