//! FacilityStore Repository
//!
//! Store access layer for the two entity collections. Each collection is
//! one JSON array under one key; load/save always moves the whole array.

use super::types::{CctvCamera, ParkingLot};
use crate::error::Result;
use crate::kv_store::KvStore;
use std::sync::Arc;

/// Store key holding the full parking lot collection
pub const PARKING_LOTS_KEY: &str = "parking_lots";

/// Store key holding the full CCTV camera collection
pub const CCTV_CAMERAS_KEY: &str = "cctv_cameras";

/// Facility repository over a key-value store
#[derive(Clone)]
pub struct FacilityRepository {
    store: Arc<dyn KvStore>,
}

impl FacilityRepository {
    /// Create new repository
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Load the parking lot collection, `None` if never seeded
    pub async fn load_lots(&self) -> Result<Option<Vec<ParkingLot>>> {
        match self.store.get(PARKING_LOTS_KEY).await? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Write the full parking lot collection in one operation
    pub async fn save_lots(&self, lots: &[ParkingLot]) -> Result<()> {
        self.store
            .set(PARKING_LOTS_KEY, serde_json::to_value(lots)?)
            .await
    }

    /// Load the CCTV camera collection, `None` if never seeded
    pub async fn load_cameras(&self) -> Result<Option<Vec<CctvCamera>>> {
        match self.store.get(CCTV_CAMERAS_KEY).await? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Write the full CCTV camera collection in one operation
    pub async fn save_cameras(&self, cameras: &[CctvCamera]) -> Result<()> {
        self.store
            .set(CCTV_CAMERAS_KEY, serde_json::to_value(cameras)?)
            .await
    }
}
