//! Stateful editing session for one catalog item.
//!
//! The session owns the form, the variant axis groups, and the two debounce
//! timers that keep the derived collections consistent while the user types.
//! Edits mutate the form synchronously and schedule the affected derivation
//! pass; the owner drains the timers with [`ItemFormSession::poll`],
//! [`ItemFormSession::settle`], or implicitly on submit.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::instrument;
use uuid::Uuid;

use crate::config::FormSettings;
use crate::errors::FormError;
use crate::events::{channel, EventSender, FormEvent};
use crate::models::{
    CategoryRef, ItemForm, MaterialSkuRef, ModifierGroupRef, OutletRef, SkuConfig, UnitRef,
    VariantGroup,
};
use crate::normalize::{item_form_from_detail, variant_groups_from_variants};
use crate::reconcile::{
    broadcast_config, derive_common_config, generate_variant_units, generate_variants,
    regenerate_skus, SkuRegenInput,
};
use crate::source::CatalogSource;
use crate::validation::validate_form;

pub mod debounce;
mod edits;

pub use debounce::Debounce;

/// Reference lists fetched once per load for the edit surface to pick from.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub units: Vec<UnitRef>,
    pub outlets: Vec<OutletRef>,
    pub categories: Vec<CategoryRef>,
    pub modifier_groups: Vec<ModifierGroupRef>,
    pub material_skus: Vec<MaterialSkuRef>,
}

/// An editing session over one catalog item.
pub struct ItemFormSession {
    form: ItemForm,
    variant_groups: Vec<VariantGroup>,
    reference: ReferenceData,
    item_id: Option<Uuid>,
    /// True while persisted data is being merged in; suppresses creation of
    /// SKUs for combinations whose persisted row has not been matched yet.
    initializing: bool,
    ready: bool,
    settings: FormSettings,
    source: Arc<dyn CatalogSource>,
    events: EventSender,
    variant_timer: Debounce,
    sku_timer: Debounce,
}

impl ItemFormSession {
    pub fn new(source: Arc<dyn CatalogSource>, settings: FormSettings, events: EventSender) -> Self {
        let variant_timer = Debounce::from_millis(settings.variant_debounce_ms);
        let sku_timer = Debounce::from_millis(settings.sku_debounce_ms);
        Self {
            form: ItemForm::default(),
            variant_groups: Vec::new(),
            reference: ReferenceData::default(),
            item_id: None,
            initializing: false,
            ready: false,
            settings,
            source,
            events,
            variant_timer,
            sku_timer,
        }
    }

    /// Session plus the receiving end of its event channel, sized from the
    /// settings.
    pub fn with_channel(
        source: Arc<dyn CatalogSource>,
        settings: FormSettings,
    ) -> (Self, mpsc::Receiver<FormEvent>) {
        let (events, rx) = channel(settings.event_channel_capacity);
        (Self::new(source, settings, events), rx)
    }

    pub fn form(&self) -> &ItemForm {
        &self.form
    }

    /// Direct mutable access for plain field edits. Edits that feed the
    /// derived collections should go through the session methods so the
    /// matching pass gets scheduled.
    pub fn form_mut(&mut self) -> &mut ItemForm {
        &mut self.form
    }

    pub fn variant_groups(&self) -> &[VariantGroup] {
        &self.variant_groups
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn item_id(&self) -> Option<Uuid> {
        self.item_id
    }

    pub fn is_initializing(&self) -> bool {
        self.initializing
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn settings(&self) -> &FormSettings {
        &self.settings
    }

    /// Loads an item and its reference lists, merges the persisted rows into
    /// session state, and runs the derivation passes to a settled state
    /// before returning.
    ///
    /// Persisted ids are adopted as session identities, so a load followed
    /// by an untouched submit round-trips every row unchanged. Combinations
    /// with no persisted SKU only get created by the final pass, after the
    /// merge is complete.
    #[instrument(skip(self))]
    pub async fn load(&mut self, item_id: Uuid) -> Result<(), FormError> {
        self.initializing = true;
        self.ready = false;
        self.variant_timer.cancel();
        self.sku_timer.cancel();

        let merged = self.merge_item(item_id).await;
        self.initializing = false;
        merged?;

        self.ready = true;
        self.regenerate_skus_now();

        self.events.send_or_log(FormEvent::FormLoaded { item_id }).await;
        Ok(())
    }

    /// Fetches and merges while the initializing guard is up.
    async fn merge_item(&mut self, item_id: Uuid) -> Result<(), FormError> {
        let (units, outlets, categories, modifier_groups, material_skus) = futures::try_join!(
            self.source.fetch_units(),
            self.source.fetch_outlets(),
            self.source.fetch_categories(),
            self.source.fetch_modifier_groups(),
            self.source.fetch_material_skus(),
        )?;
        self.reference = ReferenceData {
            units,
            outlets,
            categories,
            modifier_groups,
            material_skus,
        };

        let detail = self.source.fetch_item(item_id).await?;
        self.form = item_form_from_detail(detail);
        self.variant_groups = variant_groups_from_variants(&self.form.variants);
        self.item_id = Some(item_id);

        // Watcher order, collapsed: groups feed variants, variants feed
        // pairings, everything feeds SKUs. The guard stays up through these
        // so no combination is created ahead of its persisted row.
        self.regenerate_variants_now();
        self.flush();
        Ok(())
    }

    /// Rebuilds the variant list from the axis groups, cascades into the
    /// pairing pass, and schedules the SKU pass.
    ///
    /// With no groups left the variants are simply dropped; stale pairings
    /// are left alone because the SKU pass ignores them once `variants` is
    /// empty.
    #[instrument(skip(self))]
    pub fn regenerate_variants_now(&mut self) {
        if self.variant_groups.is_empty() {
            self.form.variants.clear();
            self.events
                .try_send_or_log(FormEvent::VariantsRegenerated { count: 0 });
            self.sku_timer.schedule();
            return;
        }

        let variants = generate_variants(&self.variant_groups, &self.form.variants);
        self.form.variants = variants;
        self.events.try_send_or_log(FormEvent::VariantsRegenerated {
            count: self.form.variants.len(),
        });
        self.regenerate_variant_units_now();
        self.sku_timer.schedule();
    }

    /// Rebuilds the variant/unit pairing list in place.
    #[instrument(skip(self))]
    pub fn regenerate_variant_units_now(&mut self) {
        let previous = std::mem::take(&mut self.form.variant_units);
        self.form.variant_units = generate_variant_units(
            &self.form.name,
            &self.form.variants,
            &self.form.units,
            &previous,
        );
        self.events
            .try_send_or_log(FormEvent::VariantUnitsRegenerated {
                count: self.form.variant_units.len(),
            });
    }

    /// Rebuilds the SKU list against the current units, variants, and
    /// pairings, preserving matched rows.
    #[instrument(skip(self))]
    pub fn regenerate_skus_now(&mut self) {
        let previous = std::mem::take(&mut self.form.skus);
        let skus = regenerate_skus(SkuRegenInput {
            item_name: &self.form.name,
            units: &self.form.units,
            variants: &self.form.variants,
            variant_units: &self.form.variant_units,
            has_variant: self.form.has_variant,
            previous: &previous,
            global_config: self.form.config,
            initializing: self.initializing,
        });

        let kept = skus
            .iter()
            .filter(|sku| previous.iter().any(|p| p.temp_id == sku.temp_id))
            .count();
        let created = skus.len() - kept;
        self.form.skus = skus;
        self.events
            .try_send_or_log(FormEvent::SkusRegenerated { kept, created });
    }

    /// Runs any pass whose quiet period has elapsed. Returns true when at
    /// least one pass ran.
    pub fn poll(&mut self) -> bool {
        let mut ran = false;
        if self.variant_timer.fire_if_due() {
            self.regenerate_variants_now();
            ran = true;
        }
        if self.sku_timer.fire_if_due() {
            self.regenerate_skus_now();
            ran = true;
        }
        ran
    }

    /// Waits out every pending timer in deadline order until the form is
    /// quiet. The variant pass reschedules the SKU pass, so a single call
    /// always drains the full cascade.
    pub async fn settle(&mut self) {
        loop {
            match (self.variant_timer.deadline(), self.sku_timer.deadline()) {
                (None, None) => break,
                (Some(variants), skus) if skus.map_or(true, |s| variants <= s) => {
                    self.variant_timer.settle().await;
                    self.regenerate_variants_now();
                }
                _ => {
                    self.sku_timer.settle().await;
                    self.regenerate_skus_now();
                }
            }
        }
    }

    /// Runs every pending pass immediately, without waiting out deadlines.
    pub fn flush(&mut self) {
        if self.variant_timer.flush() {
            self.regenerate_variants_now();
        }
        if self.sku_timer.flush() {
            self.regenerate_skus_now();
        }
    }

    pub fn has_pending_work(&self) -> bool {
        self.variant_timer.is_pending() || self.sku_timer.is_pending()
    }

    /// Overwrites every SKU's config block with the shared one.
    pub fn apply_global_config_to_all(&mut self) {
        broadcast_config(&mut self.form.skus, self.form.config);
        self.events.try_send_or_log(FormEvent::ConfigBroadcast);
    }

    /// Replaces the shared config, broadcasting immediately while the
    /// shared-config flag is on.
    pub fn set_global_config(&mut self, config: SkuConfig) {
        self.form.config = config;
        if self.form.use_same_config {
            self.apply_global_config_to_all();
        }
    }

    /// Toggles the shared-config flag. Turning it on broadcasts once;
    /// turning it off freezes each SKU at whatever it currently holds.
    pub fn set_use_same_config(&mut self, enabled: bool) {
        self.form.use_same_config = enabled;
        if enabled {
            self.apply_global_config_to_all();
        }
    }

    /// Resets one SKU back to the shared config.
    pub fn reset_sku_to_global(&mut self, index: usize) -> Result<(), FormError> {
        let config = self.form.config;
        let sku = self
            .form
            .skus
            .get_mut(index)
            .ok_or_else(|| FormError::NotFound(format!("SKU at index {}", index)))?;
        sku.config = config;
        Ok(())
    }

    /// The shared view of the per-SKU configs, with disagreeing fields
    /// nulled out.
    pub fn derive_global_config(&self) -> SkuConfig {
        derive_common_config(&self.form.skus, self.form.config)
    }

    /// Flushes pending passes, validates, and hands the form to the source.
    #[instrument(skip(self))]
    pub async fn submit(&mut self) -> Result<(), FormError> {
        let item_id = self
            .item_id
            .ok_or_else(|| FormError::InvalidOperation("no item loaded".to_string()))?;

        self.flush();
        validate_form(&self.form, &self.variant_groups)?;
        self.source.save_item(item_id, &self.form).await?;
        self.events
            .send_or_log(FormEvent::FormSubmitted { item_id })
            .await;
        Ok(())
    }
}
