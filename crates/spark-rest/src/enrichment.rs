//! Joins that attach related records to units.
//!
//! These work on data already fetched; the client methods in
//! `client::enrichment` fetch the lookup lists and call into here.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::collection::{dedup_by_id, key_by_id};
use crate::types::{AdditionalField, FloorPlan, InventoryStatus, RecordId, Related, Unit, UnitCollection};

/// Attribute name a custom field is stored under on a unit.
///
/// Spaces become underscores and ASCII letters are lowercased, so
/// `"Parking Spots"` is stored as `parking_spots`.
pub fn field_attribute_name(name: &str) -> String {
    name.replace(' ', "_").to_ascii_lowercase()
}

fn resolve<T: Clone>(by_id: &BTreeMap<RecordId, T>, id: Option<&RecordId>) -> Related<T> {
    id.and_then(|id| by_id.get(id)).cloned().into()
}

/// Set every unit's `floorplan` from its `floorplan_id`.
pub fn attach_floorplans(units: &mut UnitCollection, floorplans: Vec<FloorPlan>) {
    let by_id = key_by_id(floorplans);
    for unit in units.values_mut() {
        unit.floorplan = resolve(&by_id, unit.floorplan_id.as_ref());
    }
}

/// Set every unit's `status` from its `status_id`.
pub fn attach_statuses(units: &mut UnitCollection, statuses: Vec<InventoryStatus>) {
    let by_id = key_by_id(statuses);
    for unit in units.values_mut() {
        unit.status = resolve(&by_id, unit.status_id.as_ref());
    }
}

/// Copy custom field values onto the units they belong to.
///
/// Fields are de-duplicated by their own id first. Fields pointing at an
/// unknown unit are skipped; a field without a name is stored under the
/// empty name. When two fields map to the same attribute on a unit, the
/// later one wins. A field whose name matches a typed key such as `status`
/// replaces that key in the unit's output. Returns the number of values
/// applied.
pub fn attach_additional_fields(units: &mut UnitCollection, fields: Vec<AdditionalField>) -> usize {
    let mut applied = 0;

    for field in dedup_by_id(fields) {
        let Some(unit) = field.inventory_id.as_ref().and_then(|id| units.get_mut(id)) else {
            debug!(field_id = %field.id, "Skipping additional field for unknown unit");
            continue;
        };

        let name = field_attribute_name(field.name.as_deref().unwrap_or_default());
        if Unit::is_core_key(&name) {
            warn!(field_id = %field.id, unit_id = %unit.id, name = %name, "Additional field replaces a typed unit key");
        }
        unit.additional_fields.insert(name, field.value);
        applied += 1;
    }

    applied
}
