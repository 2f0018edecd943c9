//! Record types returned by the Spark API.
//!
//! Every record carries an `id` plus whatever other attributes the API sent.
//! Attributes this crate does not model are kept verbatim in an open map so
//! nothing is lost on a read-modify-serialize cycle.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Identifier of a Spark record.
///
/// The API returns ids as numbers, but filters and joins sometimes carry
/// them as strings. Canonical integer strings (`"12"`) are normalized to
/// [`RecordId::Int`] so `12` and `"12"` refer to the same record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordId {
    Int(i64),
    Str(String),
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        RecordId::Int(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        match spark_client::normalize_key(id) {
            Value::Number(n) => n.as_i64().map_or_else(|| RecordId::Str(id.to_string()), RecordId::Int),
            _ => RecordId::Str(id.to_string()),
        }
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        RecordId::from(id.as_str())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(i) => write!(f, "{i}"),
            RecordId::Str(s) => f.write_str(s),
        }
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RecordId::Int(i) => serializer.serialize_i64(*i),
            RecordId::Str(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            UInt(u64),
            Str(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Int(i) => RecordId::Int(i),
            Raw::UInt(u) => RecordId::Str(u.to_string()),
            Raw::Str(s) => RecordId::from(s),
        })
    }
}

/// State of a related record on a [`Unit`].
///
/// `NotLoaded` means no join was attempted and the slot is left out of the
/// serialized unit. `Unresolved` means the join ran but the reference was
/// missing or pointed at an unknown id; it serializes as `null`.
#[derive(Debug, Clone, PartialEq)]
pub enum Related<T> {
    NotLoaded,
    Unresolved,
    Resolved(T),
}

impl<T> Default for Related<T> {
    fn default() -> Self {
        Related::NotLoaded
    }
}

impl<T> Related<T> {
    pub fn is_loaded(&self) -> bool {
        !matches!(self, Related::NotLoaded)
    }

    /// The related record, if the join found one.
    pub fn get(&self) -> Option<&T> {
        match self {
            Related::Resolved(record) => Some(record),
            _ => None,
        }
    }
}

impl<T> From<Option<T>> for Related<T> {
    fn from(record: Option<T>) -> Self {
        record.map_or(Related::Unresolved, Related::Resolved)
    }
}

impl<T: Serialize> Serialize for Related<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Related::Resolved(record) => record.serialize(serializer),
            Related::NotLoaded | Related::Unresolved => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Related<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Related::from)
    }
}

/// A unit of inventory (condo, townhome, lot) in a Spark project.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawUnit")]
pub struct Unit {
    pub id: RecordId,
    pub floorplan_id: Option<RecordId>,
    pub status_id: Option<RecordId>,
    /// Joined floor plan; filled in by the enrichment calls, never by the API.
    pub floorplan: Related<FloorPlan>,
    pub status: Related<InventoryStatus>,
    /// Every other attribute the API returned. An explicit `null`
    /// `floorplan_id` or `status_id` is kept here.
    pub attributes: Map<String, Value>,
    /// Custom field values joined onto the unit, keyed by derived name.
    /// They take precedence over every other key, typed ones included.
    pub additional_fields: BTreeMap<String, Value>,
}

#[derive(Deserialize)]
struct RawUnit {
    id: RecordId,
    #[serde(default, deserialize_with = "present")]
    floorplan_id: Option<Option<RecordId>>,
    #[serde(default, deserialize_with = "present")]
    status_id: Option<Option<RecordId>>,
    #[serde(flatten)]
    attributes: Map<String, Value>,
}

/// Wrap a value that was present in the input, `null` included.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl From<RawUnit> for Unit {
    fn from(raw: RawUnit) -> Self {
        let mut attributes = raw.attributes;
        let mut typed = |key: &str, id: Option<Option<RecordId>>| match id {
            Some(Some(id)) => Some(id),
            Some(None) => {
                attributes.insert(key.to_string(), Value::Null);
                None
            }
            None => None,
        };
        let floorplan_id = typed("floorplan_id", raw.floorplan_id);
        let status_id = typed("status_id", raw.status_id);

        Unit {
            id: raw.id,
            floorplan_id,
            status_id,
            floorplan: Related::NotLoaded,
            status: Related::NotLoaded,
            attributes,
            additional_fields: BTreeMap::new(),
        }
    }
}

impl Unit {
    /// Keys backed by typed fields rather than `attributes`.
    pub const CORE_KEYS: [&'static str; 5] = ["id", "floorplan_id", "status_id", "floorplan", "status"];

    /// Look up an attribute the way it appears in the serialized unit.
    ///
    /// Additional fields shadow everything else. Typed keys are not visible
    /// here unless an additional field replaced them.
    pub fn get(&self, key: &str) -> Option<&Value> {
        if let Some(value) = self.additional_fields.get(key) {
            return Some(value);
        }
        if self.attribute_hidden(key) {
            return None;
        }
        self.attributes.get(key)
    }

    pub fn floorplan(&self) -> Option<&FloorPlan> {
        self.floorplan.get()
    }

    pub fn status(&self) -> Option<&InventoryStatus> {
        self.status.get()
    }

    pub fn is_core_key(key: &str) -> bool {
        Self::CORE_KEYS.contains(&key)
    }

    fn shadowed(&self, key: &str) -> bool {
        self.additional_fields.contains_key(key)
    }

    fn attribute_hidden(&self, key: &str) -> bool {
        self.shadowed(key)
            || match key {
                "floorplan_id" => self.floorplan_id.is_some(),
                "status_id" => self.status_id.is_some(),
                "floorplan" => self.floorplan.is_loaded(),
                "status" => self.status.is_loaded(),
                _ => false,
            }
    }
}

impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if !self.shadowed("id") {
            map.serialize_entry("id", &self.id)?;
        }
        if let Some(id) = self.floorplan_id.as_ref().filter(|_| !self.shadowed("floorplan_id")) {
            map.serialize_entry("floorplan_id", id)?;
        }
        if let Some(id) = self.status_id.as_ref().filter(|_| !self.shadowed("status_id")) {
            map.serialize_entry("status_id", id)?;
        }

        for (key, value) in &self.attributes {
            if self.attribute_hidden(key) {
                continue;
            }
            map.serialize_entry(key, value)?;
        }

        if self.floorplan.is_loaded() && !self.shadowed("floorplan") {
            map.serialize_entry("floorplan", &self.floorplan)?;
        }
        if self.status.is_loaded() && !self.shadowed("status") {
            map.serialize_entry("status", &self.status)?;
        }

        for (key, value) in &self.additional_fields {
            map.serialize_entry(key, value)?;
        }

        map.end()
    }
}

/// A floor plan (layout) that units reference through `floorplan_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorPlan {
    pub id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// An inventory status ("Available", "Sold", ...) referenced through `status_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryStatus {
    pub id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// A per-unit custom field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditionalField {
    pub id: RecordId,
    /// The unit this value belongs to.
    #[serde(default)]
    pub inventory_id: Option<RecordId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Value,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// A brokerage that contacts can be linked to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brokerage {
    pub id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// Units keyed by id.
pub type UnitCollection = BTreeMap<RecordId, Unit>;
