use rust_decimal::Decimal;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::errors::FormError;
use crate::models::{BomLine, ItemForm, ItemUnit, VariantGroup};

/// Submit-time validation over the whole form.
///
/// Field rules live on the model structs as `Validate` derives backed by
/// the functions below; this orchestrates them and covers the variant
/// groups, which the session owns outside the form.
pub fn validate_form(form: &ItemForm, groups: &[VariantGroup]) -> Result<(), FormError> {
    form.validate()?;

    if form.has_variant {
        if groups.is_empty() {
            return Err(FormError::ValidationError(
                "at least one axis group is required for a variant item".to_string(),
            ));
        }
        for (idx, group) in groups.iter().enumerate() {
            contextualize(&format!("variant_groups[{}]", idx), group.validate())?;
        }
    }

    Ok(())
}

fn contextualize(context: &str, result: Result<(), ValidationErrors>) -> Result<(), FormError> {
    result.map_err(|errors| FormError::ValidationError(format!("{}: {}", context, errors)))
}

pub(crate) fn validate_non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("non_blank");
        err.message = Some("cannot be blank".into());
        return Err(err);
    }
    Ok(())
}

pub(crate) fn validate_positive_decimal(value: &Decimal) -> Result<(), ValidationError> {
    if *value > Decimal::ZERO {
        Ok(())
    } else {
        let mut err = ValidationError::new("range");
        err.message = Some("must be greater than 0".into());
        Err(err)
    }
}

pub(crate) fn validate_waste_percent(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO || *value > Decimal::ONE_HUNDRED {
        let mut err = ValidationError::new("range");
        err.message = Some("waste percentage must be between 0 and 100".into());
        return Err(err);
    }
    Ok(())
}

pub(crate) fn validate_base_unit_count(form: &ItemForm) -> Result<(), ValidationError> {
    let base_count = form.units.iter().filter(|u| u.is_base).count();
    if base_count != 1 {
        let mut err = ValidationError::new("base_unit");
        err.message =
            Some(format!("exactly one base unit is required, found {}", base_count).into());
        return Err(err);
    }
    Ok(())
}

pub(crate) fn validate_unique_sku_codes(form: &ItemForm) -> Result<(), ValidationError> {
    let mut seen = std::collections::HashSet::new();
    for sku in &form.skus {
        if sku.code.is_empty() {
            continue;
        }
        if !seen.insert(sku.code.as_str()) {
            let mut err = ValidationError::new("duplicate");
            err.message = Some(format!("duplicate SKU code {}", sku.code).into());
            return Err(err);
        }
    }
    Ok(())
}

pub(crate) fn validate_master_unit_selected(unit: &ItemUnit) -> Result<(), ValidationError> {
    if unit.unit_id.is_none() && unit.unit.is_none() {
        let mut err = ValidationError::new("required");
        err.message = Some("a master unit must be selected".into());
        return Err(err);
    }
    Ok(())
}

pub(crate) fn validate_usable_options(group: &VariantGroup) -> Result<(), ValidationError> {
    if !group
        .options
        .iter()
        .any(|o| o.is_active && !o.name.trim().is_empty())
    {
        let mut err = ValidationError::new("required");
        err.message = Some("at least one active named option is required".into());
        return Err(err);
    }
    Ok(())
}

pub(crate) fn validate_material_selected(line: &BomLine) -> Result<(), ValidationError> {
    if line.material_item_sku_id.is_none() {
        let mut err = ValidationError::new("required");
        err.message = Some("a material SKU must be selected".into());
        return Err(err);
    }
    Ok(())
}
