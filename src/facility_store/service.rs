//! FacilityStore Service
//!
//! Business logic layer: seeding, reads, administrative updates.

use super::repository::FacilityRepository;
use super::seed;
use super::types::{CctvCamera, ParkingLot, UpdateLotRequest};
use crate::error::{Error, Result};
use chrono::Utc;

/// Facility service for business logic
pub struct FacilityService {
    repo: FacilityRepository,
}

impl FacilityService {
    /// Create new service
    pub fn new(repo: FacilityRepository) -> Self {
        Self { repo }
    }

    // ========================================
    // Seeding
    // ========================================

    /// Seed the initial collections if absent
    ///
    /// Idempotent: a populated key is never overwritten. Runs at startup
    /// before any API traffic; a store failure here is fatal to startup.
    pub async fn ensure_seeded(&self) -> Result<()> {
        if self.repo.load_lots().await?.is_none() {
            let lots = seed::initial_parking_lots(Utc::now());
            self.repo.save_lots(&lots).await?;
            tracing::info!(count = lots.len(), "Seeded parking lot collection");
        }

        if self.repo.load_cameras().await?.is_none() {
            let cameras = seed::initial_cctv_cameras(Utc::now());
            self.repo.save_cameras(&cameras).await?;
            tracing::info!(count = cameras.len(), "Seeded CCTV camera collection");
        }

        Ok(())
    }

    // ========================================
    // Parking Lot Operations
    // ========================================

    /// List all parking lots
    pub async fn list_lots(&self) -> Result<Vec<ParkingLot>> {
        self.repo
            .load_lots()
            .await?
            .ok_or_else(|| Error::NotFound("No parking data found".to_string()))
    }

    /// Get parking lot by ID
    pub async fn get_lot(&self, id: i64) -> Result<ParkingLot> {
        self.list_lots()
            .await?
            .into_iter()
            .find(|lot| lot.id == id)
            .ok_or_else(|| Error::NotFound("Parking lot not found".to_string()))
    }

    /// Administrative lot update
    ///
    /// Merges the allow-listed fields (`occupiedSpaces`, `status`) into the
    /// existing record, clamping `occupiedSpaces` into `[0, totalSpaces]`,
    /// re-stamps `lastUpdated`, and persists the full collection.
    pub async fn update_lot(&self, id: i64, req: UpdateLotRequest) -> Result<ParkingLot> {
        let mut lots = self.list_lots().await?;

        let lot = lots
            .iter_mut()
            .find(|lot| lot.id == id)
            .ok_or_else(|| Error::NotFound("Parking lot not found".to_string()))?;

        if let Some(occupied) = req.occupied_spaces {
            lot.occupied_spaces = occupied.clamp(0, lot.total_spaces);
        }
        if let Some(status) = req.status {
            lot.status = Some(status);
        }
        lot.last_updated = Utc::now();

        let updated = lot.clone();
        self.repo.save_lots(&lots).await?;

        tracing::info!(
            lot_id = id,
            occupied_spaces = updated.occupied_spaces,
            "Parking lot updated"
        );

        Ok(updated)
    }

    // ========================================
    // CCTV Camera Operations
    // ========================================

    /// List all CCTV cameras
    pub async fn list_cameras(&self) -> Result<Vec<CctvCamera>> {
        self.repo
            .load_cameras()
            .await?
            .ok_or_else(|| Error::NotFound("No CCTV data found".to_string()))
    }

    /// Get CCTV camera by ID
    pub async fn get_camera(&self, id: i64) -> Result<CctvCamera> {
        self.list_cameras()
            .await?
            .into_iter()
            .find(|camera| camera.id == id)
            .ok_or_else(|| Error::NotFound("CCTV camera not found".to_string()))
    }
}
