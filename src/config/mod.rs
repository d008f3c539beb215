//! Configuration loading and management for the Travel Claim Engine.
//!
//! This module provides the regulatory rate schedule as data (per-diem rates,
//! accommodation ceilings, mileage, taxi tariff, training meal budgets) and the
//! loader that reads a revised schedule from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use travel_claim_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/th_2568").unwrap();
//! println!("Loaded schedule: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AccommodationTables, GradeRates, MealRates, MileageRates, PerDiemTable, PublicFareCaps,
    RateSchedule, RoomRates, ScheduleMetadata, TariffBand, TaxiTariff, TrainingMealRates,
    TrainingMealTables, TransportTables,
};
