//! FacilityStore data types
//!
//! Entity structs for parking lots and CCTV cameras. Wire names are
//! camelCase; coordinates are always the `{lat, lng}` object form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geographic point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Parking lot classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LotType {
    Public,
    Visitor,
}

/// CCTV camera operational status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraStatus {
    Active,
    Inactive,
}

/// Parking lot entity
///
/// Invariant: `0 <= occupied_spaces <= total_spaces`. Mutations clamp
/// rather than reject.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkingLot {
    pub id: i64,
    pub name: String,
    pub total_spaces: i32,
    pub occupied_spaces: i32,
    pub coordinates: Coordinates,
    pub last_updated: DateTime<Utc>,
    #[serde(rename = "type")]
    pub lot_type: LotType,
    /// Operational flag settable via the administrative update; absent
    /// until first set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// CCTV camera entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CctvCamera {
    pub id: i64,
    pub name: String,
    pub coordinates: Coordinates,
    pub status: CameraStatus,
    pub direction: String,
    pub last_updated: DateTime<Utc>,
}

/// Administrative lot update request
///
/// Only these fields are mutable; anything else in the body is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLotRequest {
    pub occupied_spaces: Option<i32>,
    pub status: Option<String>,
}
