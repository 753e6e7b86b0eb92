use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::store::Record;

/// Technician listed in the technicians collection.
///
/// Only the fields the service relies on are typed; everything else in the
/// document (photos, bios, availability, ...) is passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technician {
    pub id: u64,
    pub name: String,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Record for Technician {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Service offered within a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

/// Services keyed by category name.
pub type ServiceCatalog = BTreeMap<String, Vec<Service>>;
