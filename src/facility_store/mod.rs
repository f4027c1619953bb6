//! FacilityStore - Single Source of Truth (SSoT)
//!
//! ## Responsibilities
//!
//! - Parking lot and CCTV camera collections
//! - One-time idempotent seeding
//! - Administrative lot updates
//!
//! ## Design Principles
//!
//! - SSoT: the store owns all entity state
//! - No module caches entities beyond a single operation
//! - Collections are persisted whole under one key each

mod repository;
mod seed;
mod service;
mod types;

pub use repository::{FacilityRepository, CCTV_CAMERAS_KEY, PARKING_LOTS_KEY};
pub use seed::{initial_cctv_cameras, initial_parking_lots};
pub use service::FacilityService;
pub use types::*;
