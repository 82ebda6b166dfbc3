use std::sync::{Arc, Mutex, PoisonError, TryLockError};

use tracing::debug;

use super::geometry::Geometry;
use super::oscillator::TerrainOscillator;
use crate::config::TerrainConfig;
use crate::math::Sample;

type Slot<T> = Arc<Mutex<Option<Geometry<T>>>>;

/// Control-thread side of a [`SharedTerrain`].
pub struct TerrainHandle<T: Sample> {
    slot: Slot<T>,
}

/// A [`TerrainOscillator`] fed by a [`TerrainHandle`] on another thread.
///
/// Requests land in a single slot that the audio side empties at the start
/// of a tick, so a burst of requests collapses into the newest one. The
/// audio side never waits on the lock: if the handle holds it, the pickup
/// moves to the next tick.
pub struct SharedTerrain<T: Sample> {
    osc: TerrainOscillator<T>,
    slot: Slot<T>,
}

impl<T: Sample> TerrainHandle<T> {
    pub fn set_parameters(&self, radius: T, x: T, y: T, z: T) {
        self.set_geometry(Geometry::new(x, y, z, radius));
    }

    /// Returns true if an earlier request had not been picked up yet and
    /// was replaced.
    pub fn set_geometry(&self, geometry: Geometry<T>) -> bool {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        let replaced = slot.replace(geometry).is_some();
        if replaced {
            debug!("terrain request replaced one still pending");
        }
        replaced
    }
}

impl<T: Sample> Clone for TerrainHandle<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T: Sample> SharedTerrain<T> {
    pub fn new(config: &TerrainConfig) -> (Self, TerrainHandle<T>) {
        let slot = Arc::new(Mutex::new(None));

        let handle = TerrainHandle {
            slot: Arc::clone(&slot),
        };
        let shared = Self {
            osc: TerrainOscillator::new(config),
            slot,
        };

        (shared, handle)
    }

    pub fn oscillator(&self) -> &TerrainOscillator<T> {
        &self.osc
    }

    #[inline]
    pub fn tick(&mut self, phase: T) -> T {
        let latest = match self.slot.try_lock() {
            Ok(mut slot) => slot.take(),
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().take(),
            Err(TryLockError::WouldBlock) => None,
        };
        if let Some(geometry) = latest {
            self.osc.set_geometry(geometry);
        }

        self.osc.tick(phase)
    }
}
