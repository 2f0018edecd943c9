//! Keying record lists by id.

use std::collections::{BTreeMap, HashMap};

use crate::types::{AdditionalField, Brokerage, Country, FloorPlan, InventoryStatus, RecordId, Unit};

/// A record with a Spark id.
pub trait Identified {
    fn record_id(&self) -> &RecordId;
}

impl Identified for Unit {
    fn record_id(&self) -> &RecordId {
        &self.id
    }
}

impl Identified for FloorPlan {
    fn record_id(&self) -> &RecordId {
        &self.id
    }
}

impl Identified for InventoryStatus {
    fn record_id(&self) -> &RecordId {
        &self.id
    }
}

impl Identified for AdditionalField {
    fn record_id(&self) -> &RecordId {
        &self.id
    }
}

impl Identified for Brokerage {
    fn record_id(&self) -> &RecordId {
        &self.id
    }
}

impl Identified for Country {
    fn record_id(&self) -> &RecordId {
        &self.id
    }
}

/// Map records by id. When an id repeats, the last record wins.
pub fn key_by_id<T: Identified>(records: Vec<T>) -> BTreeMap<RecordId, T> {
    records
        .into_iter()
        .map(|record| (record.record_id().clone(), record))
        .collect()
}

/// Drop records with repeated ids, keeping the position of the first
/// occurrence and the contents of the last.
pub fn dedup_by_id<T: Identified>(records: Vec<T>) -> Vec<T> {
    let mut positions: HashMap<RecordId, usize> = HashMap::with_capacity(records.len());
    let mut out: Vec<T> = Vec::with_capacity(records.len());

    for record in records {
        match positions.get(record.record_id()) {
            Some(&index) => out[index] = record,
            None => {
                positions.insert(record.record_id().clone(), out.len());
                out.push(record);
            }
        }
    }

    out
}
