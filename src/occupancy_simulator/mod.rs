//! OccupancySimulator - Periodic Occupancy Random Walk
//!
//! ## Responsibilities
//!
//! - Evolve every lot's occupied count on a fixed, configurable interval
//! - Clamp results into `[0, totalSpaces]`
//!
//! Each tick is one whole-collection read-modify-write. A concurrent
//! administrative update rewrites the same key, so overlapping cycles
//! resolve last-write-wins at collection granularity; the data is
//! synthetic and a lost tick is tolerated. A failed tick is logged and
//! skipped, never retried; the next scheduled tick tries again.

use crate::error::Result;
use crate::facility_store::FacilityRepository;
use chrono::Utc;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::interval;

/// Occupancy delta range drawn each tick, both bounds inclusive
const DELTA_MIN: i32 = -3;
const DELTA_MAX: i32 = 2;

/// Default tick interval in seconds
pub const DEFAULT_TICK_INTERVAL_SECS: u64 = 30;

/// OccupancySimulator instance
pub struct OccupancySimulator {
    repository: FacilityRepository,
    tick_interval: Duration,
    running: Arc<RwLock<bool>>,
}

impl OccupancySimulator {
    /// Create new simulator
    pub fn new(repository: FacilityRepository, tick_interval: Duration) -> Self {
        Self {
            repository,
            tick_interval,
            running: Arc::new(RwLock::new(false)),
        }
    }

    /// Start the tick loop (background task)
    pub async fn start(&self) {
        {
            let mut running = self.running.write().await;
            if *running {
                tracing::warn!("Occupancy simulator already running");
                return;
            }
            *running = true;
        }

        tracing::info!(
            interval_secs = self.tick_interval.as_secs(),
            "Starting occupancy simulator"
        );

        let repository = self.repository.clone();
        let tick_interval = self.tick_interval;
        let running = self.running.clone();

        tokio::spawn(async move {
            let mut ticker = interval(tick_interval);

            loop {
                ticker.tick().await;

                {
                    let is_running = running.read().await;
                    if !*is_running {
                        break;
                    }
                }

                if let Err(e) = Self::run_tick(&repository).await {
                    tracing::warn!(error = %e, "Occupancy tick failed, skipping");
                }
            }

            tracing::info!("Occupancy simulator stopped");
        });
    }

    /// Stop the tick loop
    pub async fn stop(&self) {
        let mut running = self.running.write().await;
        *running = false;
        tracing::info!("Stopping occupancy simulator");
    }

    /// Run one tick against the simulator's repository
    pub async fn tick(&self) -> Result<()> {
        Self::run_tick(&self.repository).await
    }

    /// One simulation tick
    ///
    /// Draws a delta in `[DELTA_MIN, DELTA_MAX]` per lot, clamps the new
    /// occupied count, stamps `lastUpdated`, and writes the collection
    /// back in one operation. An unseeded store is not an error.
    async fn run_tick(repository: &FacilityRepository) -> Result<()> {
        let Some(mut lots) = repository.load_lots().await? else {
            tracing::debug!("Parking lot collection absent, tick skipped");
            return Ok(());
        };

        let now = Utc::now();
        {
            let mut rng = rand::thread_rng();
            for lot in &mut lots {
                let delta = rng.gen_range(DELTA_MIN..=DELTA_MAX);
                lot.occupied_spaces = (lot.occupied_spaces + delta).clamp(0, lot.total_spaces);
                lot.last_updated = now;
            }
        }

        repository.save_lots(&lots).await?;

        tracing::debug!(lots = lots.len(), "Occupancy updated");

        Ok(())
    }
}
