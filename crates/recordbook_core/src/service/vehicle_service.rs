//! Vehicle registration use-cases.
//!
//! # Responsibility
//! - Turn caller drafts into vehicles with generated identifiers.
//!
//! # Invariants
//! - Callers never choose vehicle identifiers; every draft gets a UUID v4.

use crate::model::vehicle::{Vehicle, VehicleDraft};
use crate::repo::record_store::RecordRepository;
use crate::service::record_service::{RecordService, ServiceResult};

impl<S: RecordRepository<Vehicle>> RecordService<Vehicle, S> {
    /// Registers a batch of drafts, assigning each a fresh identifier.
    ///
    /// Returns stored vehicles in draft order.
    pub fn register_vehicles(&mut self, drafts: Vec<VehicleDraft>) -> ServiceResult<Vec<Vehicle>> {
        let vehicles = drafts.into_iter().map(Vehicle::from_draft).collect();
        self.create_batch(vehicles)
    }

    /// Registers one draft and returns the stored vehicle.
    pub fn register_vehicle(&mut self, draft: VehicleDraft) -> ServiceResult<Vehicle> {
        let vehicle = Vehicle::from_draft(draft);
        self.create_batch(vec![vehicle.clone()])?;
        Ok(vehicle)
    }
}
