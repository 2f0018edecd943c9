use tracing::{debug, instrument};

use crate::enrichment::{attach_additional_fields, attach_floorplans, attach_statuses};
use crate::error::Result;
use crate::types::{AdditionalField, FloorPlan, InventoryStatus, UnitCollection};

impl super::SparkRestClient {
    /// List every floor plan.
    #[instrument(skip(self))]
    pub async fn list_floorplans(&self) -> Result<Vec<FloorPlan>> {
        self.client
            .paginate(super::FLOORPLANS, &[])
            .await
            .map_err(Into::into)
    }

    /// List every inventory status.
    #[instrument(skip(self))]
    pub async fn list_inventory_statuses(&self) -> Result<Vec<InventoryStatus>> {
        self.client
            .paginate(super::INVENTORY_STATUSES, &[])
            .await
            .map_err(Into::into)
    }

    /// List every additional field value that belongs to a unit.
    #[instrument(skip(self))]
    pub async fn list_additional_fields(&self) -> Result<Vec<AdditionalField>> {
        self.client
            .paginate(super::ADDITIONAL_FIELDS, &[("inventory_id_not_null", "true")])
            .await
            .map_err(Into::into)
    }

    /// Attach each unit's floor plan.
    #[instrument(skip(self, units), fields(units = units.len()))]
    pub async fn populate_floorplans(&self, units: &mut UnitCollection) -> Result<()> {
        let floorplans = self.list_floorplans().await?;
        debug!(count = floorplans.len(), "Fetched floor plans");
        attach_floorplans(units, floorplans);
        Ok(())
    }

    /// Attach each unit's inventory status.
    #[instrument(skip(self, units), fields(units = units.len()))]
    pub async fn populate_statuses(&self, units: &mut UnitCollection) -> Result<()> {
        let statuses = self.list_inventory_statuses().await?;
        debug!(count = statuses.len(), "Fetched inventory statuses");
        attach_statuses(units, statuses);
        Ok(())
    }

    /// Attach custom field values to the units they belong to.
    #[instrument(skip(self, units), fields(units = units.len()))]
    pub async fn populate_additional_fields(&self, units: &mut UnitCollection) -> Result<()> {
        let fields = self.list_additional_fields().await?;
        let fetched = fields.len();
        let applied = attach_additional_fields(units, fields);
        debug!(fetched, applied, "Applied additional fields");
        Ok(())
    }
}
