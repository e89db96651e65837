use uuid::Uuid;

use crate::errors::FormError;
use crate::models::{
    Bom, BomLine, ItemImage, ItemModifier, ItemOutlet, ItemUnit, OutletRef, VariantGroup,
    VariantGroupOption,
};

use super::ItemFormSession;

/// Edit operations. Each one mutates the form synchronously and schedules
/// whichever derivation pass consumes the rows it touched.
impl ItemFormSession {
    /// Renames the item; display names and codes refresh on the next SKU
    /// pass.
    pub fn rename_item(&mut self, name: &str) {
        self.form.name = name.to_string();
        self.sku_timer.schedule();
    }

    pub fn set_has_variant(&mut self, has_variant: bool) {
        self.form.has_variant = has_variant;
        self.sku_timer.schedule();
    }

    /// Attaches an outlet, ignoring a second add of the same one.
    pub fn add_outlet(&mut self, outlet: &OutletRef) {
        if self
            .form
            .outlets
            .iter()
            .any(|o| o.outlet_id == outlet.outlet_id)
        {
            return;
        }
        self.form.outlets.push(ItemOutlet::from_ref(outlet));
    }

    pub fn remove_outlet(&mut self, outlet_id: Uuid) {
        self.form.outlets.retain(|o| o.outlet_id != outlet_id);
    }

    /// Appends a blank non-base unit row.
    pub fn add_unit(&mut self) {
        self.form.units.push(ItemUnit::new(false));
        self.sku_timer.schedule();
    }

    /// Drops a unit row and rebuilds the pairing list immediately so no
    /// pairing points at the removed row.
    pub fn remove_unit(&mut self, index: usize) -> Result<(), FormError> {
        if index >= self.form.units.len() {
            return Err(FormError::NotFound(format!("unit at index {}", index)));
        }
        self.form.units.remove(index);
        self.regenerate_variant_units_now();
        self.sku_timer.schedule();
        Ok(())
    }

    /// Points a unit row at a master unit from the reference list. The
    /// pairing pass runs immediately so the new unit code shows up at once.
    pub fn change_unit(&mut self, index: usize, unit_id: Uuid) -> Result<(), FormError> {
        let unit_ref = self
            .reference
            .units
            .iter()
            .find(|u| u.unit_id == unit_id)
            .cloned()
            .ok_or_else(|| FormError::NotFound(format!("unit {}", unit_id)))?;
        let unit = self
            .form
            .units
            .get_mut(index)
            .ok_or_else(|| FormError::NotFound(format!("unit at index {}", index)))?;
        unit.unit_id = Some(unit_id);
        unit.unit = Some(unit_ref);
        self.regenerate_variant_units_now();
        self.sku_timer.schedule();
        Ok(())
    }

    pub fn add_variant_group(&mut self) {
        self.variant_groups.push(VariantGroup::blank());
        self.variant_timer.schedule();
    }

    pub fn remove_variant_group(&mut self, index: usize) -> Result<(), FormError> {
        if index >= self.variant_groups.len() {
            return Err(FormError::NotFound(format!("variant group at index {}", index)));
        }
        self.variant_groups.remove(index);
        self.variant_timer.schedule();
        Ok(())
    }

    pub fn rename_group(&mut self, index: usize, name: &str) -> Result<(), FormError> {
        let group = self.group_mut(index)?;
        group.name = name.to_string();
        self.variant_timer.schedule();
        Ok(())
    }

    pub fn add_group_option(&mut self, group: usize) -> Result<(), FormError> {
        self.group_mut(group)?.options.push(VariantGroupOption::blank());
        self.variant_timer.schedule();
        Ok(())
    }

    pub fn remove_group_option(&mut self, group: usize, option: usize) -> Result<(), FormError> {
        let group = self.group_mut(group)?;
        if option >= group.options.len() {
            return Err(FormError::NotFound(format!("option at index {}", option)));
        }
        group.options.remove(option);
        self.variant_timer.schedule();
        Ok(())
    }

    pub fn rename_option(
        &mut self,
        group: usize,
        option: usize,
        name: &str,
    ) -> Result<(), FormError> {
        self.option_mut(group, option)?.name = name.to_string();
        self.variant_timer.schedule();
        Ok(())
    }

    /// Inactive options drop out of combination generation without losing
    /// their row.
    pub fn set_option_active(
        &mut self,
        group: usize,
        option: usize,
        active: bool,
    ) -> Result<(), FormError> {
        self.option_mut(group, option)?.is_active = active;
        self.variant_timer.schedule();
        Ok(())
    }

    pub fn add_modifier(&mut self) {
        let sort_order = self.form.modifiers.len() as i32 + 1;
        self.form.modifiers.push(ItemModifier::new(sort_order));
    }

    pub fn remove_modifier(&mut self, index: usize) -> Result<(), FormError> {
        if index >= self.form.modifiers.len() {
            return Err(FormError::NotFound(format!("modifier at index {}", index)));
        }
        self.form.modifiers.remove(index);
        Ok(())
    }

    pub fn add_image(&mut self) {
        self.form.images.push(ItemImage::new());
    }

    pub fn remove_image(&mut self, index: usize) -> Result<(), FormError> {
        if index >= self.form.images.len() {
            return Err(FormError::NotFound(format!("image at index {}", index)));
        }
        self.form.images.remove(index);
        Ok(())
    }

    /// Enables the item-level bill of materials, seeding the first blank
    /// line when none exist yet.
    pub fn enable_bom(&mut self) {
        let bom = self.form.bom.get_or_insert_with(Bom::default);
        if bom.lines.is_empty() {
            bom.lines.push(BomLine::new(1));
        }
    }

    pub fn disable_bom(&mut self) {
        self.form.bom = None;
    }

    pub fn add_bom_line(&mut self) {
        if self.form.bom.is_none() {
            self.enable_bom();
        }
        if let Some(bom) = self.form.bom.as_mut() {
            let sort_order = bom.lines.len() as i32 + 1;
            bom.lines.push(BomLine::new(sort_order));
        }
    }

    pub fn remove_bom_line(&mut self, index: usize) -> Result<(), FormError> {
        let Some(bom) = self.form.bom.as_mut() else {
            return Ok(());
        };
        if index >= bom.lines.len() {
            return Err(FormError::NotFound(format!("BOM line at index {}", index)));
        }
        bom.lines.remove(index);
        Ok(())
    }

    /// Drops a SKU row. It comes back on the next regeneration if its
    /// combination still exists, so this mainly serves rows whose
    /// combination is already gone.
    pub fn remove_sku(&mut self, index: usize) -> Result<(), FormError> {
        if index >= self.form.skus.len() {
            return Err(FormError::NotFound(format!("SKU at index {}", index)));
        }
        self.form.skus.remove(index);
        Ok(())
    }

    fn group_mut(&mut self, index: usize) -> Result<&mut VariantGroup, FormError> {
        self.variant_groups
            .get_mut(index)
            .ok_or_else(|| FormError::NotFound(format!("variant group at index {}", index)))
    }

    fn option_mut(
        &mut self,
        group: usize,
        option: usize,
    ) -> Result<&mut VariantGroupOption, FormError> {
        self.group_mut(group)?
            .options
            .get_mut(option)
            .ok_or_else(|| FormError::NotFound(format!("option at index {}", option)))
    }
}
