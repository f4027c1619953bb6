//! StatsService - Occupancy Statistics Aggregation
//!
//! ## Responsibilities
//!
//! - Derived dashboard metrics from current stored state
//! - No side effects, computed on demand per request

use crate::error::{Error, Result};
use crate::facility_store::{CameraStatus, CctvCamera, FacilityRepository, ParkingLot};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregated dashboard statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_spaces: i32,
    pub occupied_spaces: i32,
    pub available_spaces: i32,
    /// Integer percentage of capacity in use; `0` when no capacity exists
    pub occupancy_rate: i32,
    pub total_parking_lots: usize,
    #[serde(rename = "activeCCTV")]
    pub active_cctv: usize,
    #[serde(rename = "totalCCTV")]
    pub total_cctv: usize,
    pub last_updated: DateTime<Utc>,
}

/// Statistics service
pub struct StatsService {
    repository: FacilityRepository,
}

impl StatsService {
    /// Create new service
    pub fn new(repository: FacilityRepository) -> Self {
        Self { repository }
    }

    /// Compute statistics from current stored state
    ///
    /// A missing parking lot collection is `NotFound`; a missing camera
    /// collection counts as zero cameras.
    pub async fn compute_statistics(&self) -> Result<Statistics> {
        let lots = self
            .repository
            .load_lots()
            .await?
            .ok_or_else(|| Error::NotFound("No parking data found".to_string()))?;

        let cameras = self.repository.load_cameras().await?.unwrap_or_default();

        Ok(aggregate(&lots, &cameras))
    }
}

/// Aggregate statistics over in-memory collections
///
/// `occupancyRate` is the rounded integer percentage; the zero-capacity
/// case reports `0` since the division is undefined there.
pub fn aggregate(lots: &[ParkingLot], cameras: &[CctvCamera]) -> Statistics {
    let total_spaces: i32 = lots.iter().map(|lot| lot.total_spaces).sum();
    let occupied_spaces: i32 = lots.iter().map(|lot| lot.occupied_spaces).sum();
    let available_spaces = total_spaces - occupied_spaces;

    let occupancy_rate = if total_spaces > 0 {
        ((occupied_spaces as f64 / total_spaces as f64) * 100.0).round() as i32
    } else {
        0
    };

    let active_cctv = cameras
        .iter()
        .filter(|camera| camera.status == CameraStatus::Active)
        .count();

    Statistics {
        total_spaces,
        occupied_spaces,
        available_spaces,
        occupancy_rate,
        total_parking_lots: lots.len(),
        active_cctv,
        total_cctv: cameras.len(),
        last_updated: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facility_store::{initial_cctv_cameras, initial_parking_lots};
    use crate::kv_store::MemoryKvStore;
    use std::sync::Arc;

    fn lot(id: i64, total: i32, occupied: i32) -> ParkingLot {
        let mut lot = initial_parking_lots(Utc::now()).remove(0);
        lot.id = id;
        lot.total_spaces = total;
        lot.occupied_spaces = occupied;
        lot
    }

    #[test]
    fn test_two_lot_aggregation() {
        let lots = vec![lot(1, 120, 85), lot(2, 80, 62)];
        let stats = aggregate(&lots, &[]);

        assert_eq!(stats.total_spaces, 200);
        assert_eq!(stats.occupied_spaces, 147);
        assert_eq!(stats.available_spaces, 53);
        assert_eq!(stats.occupancy_rate, 74);
        assert_eq!(stats.total_parking_lots, 2);
    }

    #[test]
    fn test_available_spaces_identity() {
        let lots = vec![lot(1, 10, 3), lot(2, 7, 7), lot(3, 1, 0)];
        let stats = aggregate(&lots, &[]);
        assert_eq!(
            stats.available_spaces,
            stats.total_spaces - stats.occupied_spaces
        );
    }

    #[test]
    fn test_zero_capacity_rate_falls_back_to_zero() {
        let stats = aggregate(&[], &[]);
        assert_eq!(stats.total_spaces, 0);
        assert_eq!(stats.occupancy_rate, 0);
    }

    #[test]
    fn test_active_cctv_counts_only_active() {
        let mut cameras = initial_cctv_cameras(Utc::now());
        cameras[1].status = CameraStatus::Inactive;

        let stats = aggregate(&[], &cameras);
        assert_eq!(stats.total_cctv, 3);
        assert_eq!(stats.active_cctv, 2);
    }

    #[test]
    fn test_statistics_wire_names() {
        let stats = aggregate(&[lot(1, 100, 50)], &initial_cctv_cameras(Utc::now()));
        let value = serde_json::to_value(&stats).unwrap();

        assert_eq!(value["totalSpaces"], 100);
        assert_eq!(value["occupancyRate"], 50);
        assert_eq!(value["totalParkingLots"], 1);
        assert_eq!(value["activeCCTV"], 3);
        assert_eq!(value["totalCCTV"], 3);
        assert!(value.get("lastUpdated").is_some());
    }

    #[tokio::test]
    async fn test_compute_statistics_requires_parking_data() {
        let repo = FacilityRepository::new(Arc::new(MemoryKvStore::new()));
        let svc = StatsService::new(repo);

        let err = svc.compute_statistics().await.unwrap_err();
        assert!(matches!(err, Error::NotFound(msg) if msg == "No parking data found"));
    }

    #[tokio::test]
    async fn test_compute_statistics_tolerates_missing_cameras() {
        let repo = FacilityRepository::new(Arc::new(MemoryKvStore::new()));
        repo.save_lots(&[lot(1, 100, 25)]).await.unwrap();
        let svc = StatsService::new(repo);

        let stats = svc.compute_statistics().await.unwrap();
        assert_eq!(stats.occupancy_rate, 25);
        assert_eq!(stats.total_cctv, 0);
        assert_eq!(stats.active_cctv, 0);
    }
}
