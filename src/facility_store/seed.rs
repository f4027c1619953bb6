//! Initial facility fleet
//!
//! Fixed collections written once when the store holds no prior data.

use super::types::{CameraStatus, CctvCamera, Coordinates, LotType, ParkingLot};
use chrono::{DateTime, Utc};

/// Initial parking lot collection
pub fn initial_parking_lots(now: DateTime<Utc>) -> Vec<ParkingLot> {
    vec![
        ParkingLot {
            id: 1,
            name: "City Hall Lot A".to_string(),
            total_spaces: 120,
            occupied_spaces: 85,
            coordinates: Coordinates {
                lat: 36.4804,
                lng: 127.2885,
            },
            last_updated: now,
            lot_type: LotType::Public,
            status: None,
        },
        ParkingLot {
            id: 2,
            name: "City Hall Lot B".to_string(),
            total_spaces: 80,
            occupied_spaces: 62,
            coordinates: Coordinates {
                lat: 36.4810,
                lng: 127.2896,
            },
            last_updated: now,
            lot_type: LotType::Public,
            status: None,
        },
        ParkingLot {
            id: 3,
            name: "City Hall Visitor Lot".to_string(),
            total_spaces: 150,
            occupied_spaces: 134,
            coordinates: Coordinates {
                lat: 36.4795,
                lng: 127.2901,
            },
            last_updated: now,
            lot_type: LotType::Visitor,
            status: None,
        },
    ]
}

/// Initial CCTV camera collection
pub fn initial_cctv_cameras(now: DateTime<Utc>) -> Vec<CctvCamera> {
    vec![
        CctvCamera {
            id: 1,
            name: "Main Gate Intersection CCTV".to_string(),
            coordinates: Coordinates {
                lat: 36.4815,
                lng: 127.2878,
            },
            status: CameraStatus::Active,
            direction: "north".to_string(),
            last_updated: now,
        },
        CctvCamera {
            id: 2,
            name: "Plaza Boulevard CCTV".to_string(),
            coordinates: Coordinates {
                lat: 36.4790,
                lng: 127.2912,
            },
            status: CameraStatus::Active,
            direction: "east".to_string(),
            last_updated: now,
        },
        CctvCamera {
            id: 3,
            name: "Government Complex Road CCTV".to_string(),
            coordinates: Coordinates {
                lat: 36.4820,
                lng: 127.2889,
            },
            status: CameraStatus::Active,
            direction: "west".to_string(),
            last_updated: now,
        },
    ]
}
