//! Travel window model.
//!
//! This module defines the [`TravelWindow`] struct describing when an official
//! trip left and returned, which is the input to per-diem classification.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The departure and return instants of an official trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelWindow {
    /// When the traveler left their residence or office.
    pub start: NaiveDateTime,
    /// When the traveler returned.
    pub end: NaiveDateTime,
    /// Whether the trip included at least one overnight stay.
    #[serde(default)]
    pub is_overnight: bool,
}

impl TravelWindow {
    /// Creates a travel window, rejecting windows whose end is not after the start.
    ///
    /// # Examples
    ///
    /// ```
    /// use travel_claim_engine::models::TravelWindow;
    /// use chrono::NaiveDateTime;
    ///
    /// let start = NaiveDateTime::parse_from_str("2025-11-03 06:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
    /// let end = NaiveDateTime::parse_from_str("2025-11-03 20:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
    ///
    /// let window = TravelWindow::new(start, end, false).unwrap();
    /// assert_eq!(window.duration_seconds(), 14 * 3600);
    ///
    /// assert!(TravelWindow::new(end, start, false).is_err());
    /// ```
    pub fn new(start: NaiveDateTime, end: NaiveDateTime, is_overnight: bool) -> EngineResult<Self> {
        let window = Self {
            start,
            end,
            is_overnight,
        };
        window.validate()?;
        Ok(window)
    }

    /// Checks the `end > start` invariant.
    ///
    /// Windows arriving through deserialization bypass [`TravelWindow::new`],
    /// so the engines call this before computing.
    pub fn validate(&self) -> EngineResult<()> {
        if self.end <= self.start {
            return Err(EngineError::invalid_input(
                "window",
                format!(
                    "end ({}) must be after start ({})",
                    self.end, self.start
                ),
            ));
        }
        Ok(())
    }

    /// Returns the trip length in whole seconds.
    pub fn duration_seconds(&self) -> i64 {
        (self.end - self.start).num_seconds()
    }
}
