//! Parking Dashboard Server
//!
//! Backend for a municipal parking-occupancy and CCTV dashboard: seeds a
//! fixed facility fleet into a key-value store, randomizes occupancy on a
//! timer, and serves the data and derived statistics over REST.
//!
//! ## Architecture
//!
//! 1. KvStore - string-key JSON persistence (MySQL or in-memory)
//! 2. FacilityStore - SSoT for parking lots and CCTV cameras
//! 3. OccupancySimulator - periodic occupancy random walk
//! 4. StatsService - derived occupancy statistics
//! 5. WebAPI - REST API endpoints
//!
//! ## Design Principles
//!
//! - SSoT: the store owns all entity state
//! - Collections are read and written whole, one JSON array per key

pub mod error;
pub mod facility_store;
pub mod kv_store;
pub mod models;
pub mod occupancy_simulator;
pub mod state;
pub mod stats_service;
pub mod web_api;

pub use error::{Error, Result};
pub use state::AppState;
