//! Vehicle inventory record.
//!
//! # Responsibility
//! - Define the stored vehicle, its create payload (`VehicleDraft`) and its
//!   partial update payload (`VehiclePatch`).
//! - Mint stable identifiers for newly registered vehicles.
//!
//! # Invariants
//! - `id` is generated at registration (UUID v4) and never supplied by callers.
//! - Updates use partial merge semantics: absent patch fields keep prior values.
//! - `year`, `mileage` and `quantity` are never negative.

use crate::model::record::{
    require_id, require_non_negative, require_text, Record, RecordValidationError, ReplacePolicy,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

fn default_available() -> bool {
    true
}

fn default_quantity() -> i64 {
    1
}

/// Stored vehicle inventory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub licence_plate: String,
    pub colour: String,
    pub mileage: i64,
    pub available: bool,
    pub quantity: i64,
}

/// Create payload for a vehicle; the identifier is assigned on registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleDraft {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub licence_plate: String,
    pub colour: String,
    pub mileage: i64,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

/// Partial update payload; `None` leaves the stored field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehiclePatch {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub licence_plate: Option<String>,
    pub colour: Option<String>,
    pub mileage: Option<i64>,
    pub available: Option<bool>,
    pub quantity: Option<i64>,
}

impl Vehicle {
    /// Builds a vehicle from a draft with a freshly generated identifier.
    pub fn from_draft(draft: VehicleDraft) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), draft)
    }

    /// Builds a vehicle from a draft with a caller-provided identifier.
    ///
    /// Used by tests and import paths where identity already exists.
    pub fn with_id(id: impl Into<String>, draft: VehicleDraft) -> Self {
        Self {
            id: id.into(),
            make: draft.make,
            model: draft.model,
            year: draft.year,
            licence_plate: draft.licence_plate,
            colour: draft.colour,
            mileage: draft.mileage,
            available: draft.available,
            quantity: draft.quantity,
        }
    }
}

impl Record for Vehicle {
    const KIND: &'static str = "vehicle";
    const REPLACE_POLICY: ReplacePolicy = ReplacePolicy::PartialMerge;

    type Update = VehiclePatch;

    fn record_id(&self) -> &str {
        &self.id
    }

    fn apply_update(&mut self, update: Self::Update) {
        if let Some(make) = update.make {
            self.make = make;
        }
        if let Some(model) = update.model {
            self.model = model;
        }
        if let Some(year) = update.year {
            self.year = year;
        }
        if let Some(licence_plate) = update.licence_plate {
            self.licence_plate = licence_plate;
        }
        if let Some(colour) = update.colour {
            self.colour = colour;
        }
        if let Some(mileage) = update.mileage {
            self.mileage = mileage;
        }
        if let Some(available) = update.available {
            self.available = available;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
    }

    fn validate(&self) -> Result<(), RecordValidationError> {
        require_id(&self.id)?;
        require_text("make", &self.make)?;
        require_text("model", &self.model)?;
        require_text("licence_plate", &self.licence_plate)?;
        require_non_negative("year", i64::from(self.year))?;
        require_non_negative("mileage", self.mileage)?;
        require_non_negative("quantity", self.quantity)
    }

    fn validate_update(update: &Self::Update) -> Result<(), RecordValidationError> {
        if let Some(make) = update.make.as_deref() {
            require_text("make", make)?;
        }
        if let Some(model) = update.model.as_deref() {
            require_text("model", model)?;
        }
        if let Some(licence_plate) = update.licence_plate.as_deref() {
            require_text("licence_plate", licence_plate)?;
        }
        if let Some(year) = update.year {
            require_non_negative("year", i64::from(year))?;
        }
        if let Some(mileage) = update.mileage {
            require_non_negative("mileage", mileage)?;
        }
        if let Some(quantity) = update.quantity {
            require_non_negative("quantity", quantity)?;
        }
        Ok(())
    }
}
