//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a rate schedule
//! from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{
    AccommodationTables, PerDiemTable, RateSchedule, ScheduleMetadata, TrainingMealTables,
    TransportTables,
};

/// Loads and provides access to a rate schedule.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/th_2568/
/// ├── schedule.yaml       # Schedule metadata
/// ├── per_diem.yaml       # Daily allowance and meal deduction
/// ├── accommodation.yaml  # Lump-sum rates and nightly ceilings
/// ├── transport.yaml      # Mileage, fare caps and taxi tariff
/// └── training.yaml       # Training meal budgets
/// ```
///
/// # Example
///
/// ```no_run
/// use travel_claim_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/th_2568").unwrap();
/// println!("Loaded schedule: {}", loader.metadata().version);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    schedule: RateSchedule,
}

impl ConfigLoader {
    /// Loads and validates a rate schedule from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or misses a field (`ConfigParseError`)
    /// - A table fails validation (`InvalidRateTable`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading rate schedule");

        let metadata = Self::load_yaml::<ScheduleMetadata>(&path.join("schedule.yaml"))?;
        let per_diem = Self::load_yaml::<PerDiemTable>(&path.join("per_diem.yaml"))?;
        let accommodation =
            Self::load_yaml::<AccommodationTables>(&path.join("accommodation.yaml"))?;
        let transport = Self::load_yaml::<TransportTables>(&path.join("transport.yaml"))?;
        let training_meals = Self::load_yaml::<TrainingMealTables>(&path.join("training.yaml"))?;

        let schedule = RateSchedule {
            metadata,
            per_diem,
            accommodation,
            transport,
            training_meals,
        };
        schedule.validate()?;

        debug!(
            version = %schedule.metadata.version,
            effective_date = %schedule.metadata.effective_date,
            taxi_bands = schedule.transport.taxi.bands.len(),
            "Rate schedule loaded"
        );

        Ok(Self { schedule })
    }

    /// Wraps an already constructed schedule after validating it.
    pub fn from_schedule(schedule: RateSchedule) -> EngineResult<Self> {
        schedule.validate()?;
        Ok(Self { schedule })
    }

    /// Returns a loader holding the built-in fiscal-year 2568 schedule.
    pub fn builtin() -> Self {
        Self {
            schedule: RateSchedule::thai_2568(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded rate schedule.
    pub fn schedule(&self) -> &RateSchedule {
        &self.schedule
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        &self.schedule.metadata
    }
}
