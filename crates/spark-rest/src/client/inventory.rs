use tracing::{debug, instrument};

use crate::collection::key_by_id;
use crate::enrichment::{attach_additional_fields, attach_floorplans, attach_statuses};
use crate::error::Result;
use crate::types::{Unit, UnitCollection};

impl super::SparkRestClient {
    /// List every unit of inventory, keyed by id.
    #[instrument(skip(self))]
    pub async fn get_units(&self) -> Result<UnitCollection> {
        let units: Vec<Unit> = self.client.paginate(super::INVENTORY, &[]).await?;
        debug!(count = units.len(), "Fetched units");
        Ok(key_by_id(units))
    }

    /// List every unit with its floor plan, status and additional fields
    /// attached.
    ///
    /// Units and the three lookup lists are fetched concurrently; the joins
    /// are then applied as floor plans, statuses, additional fields. A
    /// failure anywhere fails the whole call.
    #[instrument(skip(self))]
    pub async fn get_units_with_details(&self) -> Result<UnitCollection> {
        let (mut units, floorplans, statuses, fields) = tokio::try_join!(
            self.get_units(),
            self.list_floorplans(),
            self.list_inventory_statuses(),
            self.list_additional_fields(),
        )?;

        attach_floorplans(&mut units, floorplans);
        attach_statuses(&mut units, statuses);
        let applied = attach_additional_fields(&mut units, fields);
        debug!(units = units.len(), additional_fields = applied, "Enriched units");

        Ok(units)
    }
}
