//! Configuration types for the regulatory rate schedule.
//!
//! This module contains the strongly-typed rate tables that are deserialized
//! from YAML configuration files. Every lookup is keyed by a closed enum, so a
//! missing combination is a compile error rather than a silent default.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    PersonnelGrade, PrivateVehicle, PublicRouteType, RoomType, TrainingType, TrainingVenue,
};

/// Metadata about the rate schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleMetadata {
    /// Short identifier of the schedule (e.g., "TH-MOF-TRAVEL").
    pub code: String,
    /// The human-readable name of the schedule.
    pub name: String,
    /// The version label (e.g., "2568").
    pub version: String,
    /// The date the rates take effect.
    pub effective_date: NaiveDate,
    /// The regulation the rates are taken from.
    pub source: String,
}

/// A value per personnel grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeRates<T> {
    /// Value for C1-C8.
    #[serde(rename = "C1-C8")]
    pub junior: T,
    /// Value for C9-C11.
    #[serde(rename = "C9-C11")]
    pub senior: T,
}

impl<T> GradeRates<T> {
    /// Returns the value for a grade.
    pub fn get(&self, grade: PersonnelGrade) -> &T {
        match grade {
            PersonnelGrade::Junior => &self.junior,
            PersonnelGrade::Senior => &self.senior,
        }
    }
}

/// Nightly ceilings by room occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRates {
    /// Ceiling for a single room.
    pub single: Decimal,
    /// Ceiling per person for a shared room.
    pub double: Decimal,
}

impl RoomRates {
    /// Returns the ceiling for a room type.
    pub fn get(&self, room_type: RoomType) -> Decimal {
        match room_type {
            RoomType::Single => self.single,
            RoomType::Double => self.double,
        }
    }
}

/// Per-diem rates from per_diem.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerDiemTable {
    /// Daily allowance by grade.
    pub daily_rate: GradeRates<Decimal>,
    /// Each provided meal deducts `daily_rate / meal_deduction_divisor`.
    pub meal_deduction_divisor: Decimal,
}

/// Accommodation rates from accommodation.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccommodationTables {
    /// Lump-sum nightly rate by grade.
    pub lump_sum: GradeRates<Decimal>,
    /// Actual-cost nightly ceilings for general travel and state-venue training.
    pub actual_cost: GradeRates<RoomRates>,
    /// Nightly ceilings for training at a private venue.
    pub private_training: GradeRates<RoomRates>,
}

/// Per-kilometer rates for private vehicles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MileageRates {
    /// Rate for a private car.
    pub private_car: Decimal,
    /// Rate for a motorcycle.
    pub motorcycle: Decimal,
}

impl MileageRates {
    /// Returns the rate for a vehicle.
    pub fn get(&self, vehicle: PrivateVehicle) -> Decimal {
        match vehicle {
            PrivateVehicle::PrivateCar => self.private_car,
            PrivateVehicle::Motorcycle => self.motorcycle,
        }
    }
}

/// Fare caps for cross-province public transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicFareCaps {
    /// Cap for trips between Bangkok and an adjacent province.
    pub cross_to_bangkok: Decimal,
    /// Cap for trips between two other provinces.
    pub cross_other_province: Decimal,
}

impl PublicFareCaps {
    /// Returns the cap for a route, or `None` when the fare is reimbursed as paid.
    pub fn get(&self, route_type: PublicRouteType) -> Option<Decimal> {
        match route_type {
            PublicRouteType::IntraProvince => None,
            PublicRouteType::CrossToBangkok => Some(self.cross_to_bangkok),
            PublicRouteType::CrossOtherProvince => Some(self.cross_other_province),
        }
    }
}

/// One distance band of the taxi meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TariffBand {
    /// Length of the band in kilometers.
    pub length_km: Decimal,
    /// Charge per kilometer within the band.
    pub rate_per_km: Decimal,
}

/// The metered taxi tariff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxiTariff {
    /// Flag-fall covering the first `base_distance_km`.
    pub base_fare: Decimal,
    /// Distance included in the flag-fall.
    pub base_distance_km: Decimal,
    /// Bands consumed in order after the flag-fall distance.
    pub bands: Vec<TariffBand>,
    /// Rate beyond the last band.
    pub overflow_rate_per_km: Decimal,
    /// Charge per minute in traffic.
    pub traffic_rate_per_minute: Decimal,
    /// Surcharge for app bookings.
    pub app_booking_fee: Decimal,
    /// Surcharge for airport pickups and drop-offs.
    pub airport_surcharge: Decimal,
}

/// Transport rates from transport.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportTables {
    /// Private vehicle mileage rates.
    pub mileage: MileageRates,
    /// Public transport fare caps.
    pub public_fare_caps: PublicFareCaps,
    /// Metered taxi tariff.
    pub taxi: TaxiTariff,
}

/// Meal and snack budget per head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealRates {
    /// Budget per main meal.
    pub meal: Decimal,
    /// Budget per snack break.
    pub snack: Decimal,
}

/// Meal budgets by training type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingMealRates {
    /// Rates for Type A courses.
    #[serde(rename = "Type A")]
    pub type_a: MealRates,
    /// Rates for Type B courses.
    #[serde(rename = "Type B")]
    pub type_b: MealRates,
}

impl TrainingMealRates {
    /// Returns the rates for a training type.
    pub fn get(&self, training_type: TrainingType) -> MealRates {
        match training_type {
            TrainingType::TypeA => self.type_a,
            TrainingType::TypeB => self.type_b,
        }
    }
}

/// Training meal rates from training.yaml.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingMealTables {
    /// Rates at state venues.
    pub state_facility: TrainingMealRates,
    /// Rates at private venues.
    pub private_facility: TrainingMealRates,
}

impl TrainingMealTables {
    /// Returns the rates for a venue and training type.
    pub fn get(&self, venue: TrainingVenue, training_type: TrainingType) -> MealRates {
        match venue {
            TrainingVenue::StateFacility => self.state_facility.get(training_type),
            TrainingVenue::PrivateFacility => self.private_facility.get(training_type),
        }
    }
}

/// The complete rate schedule loaded from YAML files.
///
/// This struct aggregates every table the engines read. Engines borrow it and
/// never mutate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSchedule {
    /// Schedule metadata.
    pub metadata: ScheduleMetadata,
    /// Per-diem rates.
    pub per_diem: PerDiemTable,
    /// Accommodation rates and ceilings.
    pub accommodation: AccommodationTables,
    /// Mileage, fare caps and taxi tariff.
    pub transport: TransportTables,
    /// Training meal budgets.
    pub training_meals: TrainingMealTables,
}

fn baht(value: i64) -> Decimal {
    Decimal::from(value)
}

fn room(single: i64, double: i64) -> RoomRates {
    RoomRates {
        single: baht(single),
        double: baht(double),
    }
}

fn meals(meal: i64, snack: i64) -> MealRates {
    MealRates {
        meal: baht(meal),
        snack: baht(snack),
    }
}

impl RateSchedule {
    /// Returns the built-in rates for fiscal year 2568 (2025).
    ///
    /// # Example
    ///
    /// ```
    /// use travel_claim_engine::config::RateSchedule;
    /// use travel_claim_engine::models::PersonnelGrade;
    /// use rust_decimal::Decimal;
    ///
    /// let schedule = RateSchedule::thai_2568();
    /// assert_eq!(
    ///     *schedule.per_diem.daily_rate.get(PersonnelGrade::Senior),
    ///     Decimal::from(270)
    /// );
    /// ```
    pub fn thai_2568() -> Self {
        Self {
            metadata: ScheduleMetadata {
                code: "TH-MOF-TRAVEL".to_string(),
                name: "Official travel expense rates".to_string(),
                version: "2568".to_string(),
                effective_date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap_or(NaiveDate::MIN),
                source: "Royal Decree on Official Travel Expenses B.E. 2526 and Ministry of Finance regulations"
                    .to_string(),
            },
            per_diem: PerDiemTable {
                daily_rate: GradeRates {
                    junior: baht(240),
                    senior: baht(270),
                },
                meal_deduction_divisor: baht(3),
            },
            accommodation: AccommodationTables {
                lump_sum: GradeRates {
                    junior: baht(800),
                    senior: baht(1200),
                },
                actual_cost: GradeRates {
                    junior: room(1500, 850),
                    senior: room(2200, 1200),
                },
                private_training: GradeRates {
                    junior: room(1600, 1000),
                    senior: room(2700, 1500),
                },
            },
            transport: TransportTables {
                mileage: MileageRates {
                    private_car: baht(4),
                    motorcycle: baht(2),
                },
                public_fare_caps: PublicFareCaps {
                    cross_to_bangkok: baht(600),
                    cross_other_province: baht(500),
                },
                taxi: TaxiTariff {
                    base_fare: baht(35),
                    base_distance_km: baht(1),
                    bands: vec![
                        TariffBand {
                            length_km: baht(9),
                            rate_per_km: Decimal::new(65, 1),
                        },
                        TariffBand {
                            length_km: baht(10),
                            rate_per_km: baht(7),
                        },
                        TariffBand {
                            length_km: baht(20),
                            rate_per_km: baht(8),
                        },
                        TariffBand {
                            length_km: baht(20),
                            rate_per_km: Decimal::new(85, 1),
                        },
                        TariffBand {
                            length_km: baht(20),
                            rate_per_km: baht(9),
                        },
                    ],
                    overflow_rate_per_km: Decimal::new(105, 1),
                    traffic_rate_per_minute: baht(3),
                    app_booking_fee: baht(20),
                    airport_surcharge: baht(50),
                },
            },
            training_meals: TrainingMealTables {
                state_facility: TrainingMealRates {
                    type_a: meals(400, 35),
                    type_b: meals(200, 35),
                },
                private_facility: TrainingMealRates {
                    type_a: meals(700, 50),
                    type_b: meals(400, 50),
                },
            },
        }
    }

    /// Checks that the tables can be applied safely.
    ///
    /// Rates must be non-negative, taxi bands must exist and have positive
    /// lengths, and the meal deduction divisor must be positive.
    pub fn validate(&self) -> EngineResult<()> {
        fn non_negative(table: &str, value: Decimal) -> EngineResult<()> {
            if value < Decimal::ZERO {
                return Err(EngineError::InvalidRateTable {
                    table: table.to_string(),
                    message: format!("rate {} must not be negative", value),
                });
            }
            Ok(())
        }

        fn rooms(table: &str, rates: &GradeRates<RoomRates>) -> EngineResult<()> {
            for r in [rates.junior, rates.senior] {
                non_negative(table, r.single)?;
                non_negative(table, r.double)?;
            }
            Ok(())
        }

        let per_diem = &self.per_diem;
        non_negative("per_diem.daily_rate", per_diem.daily_rate.junior)?;
        non_negative("per_diem.daily_rate", per_diem.daily_rate.senior)?;
        if per_diem.meal_deduction_divisor <= Decimal::ZERO {
            return Err(EngineError::InvalidRateTable {
                table: "per_diem.meal_deduction_divisor".to_string(),
                message: "divisor must be positive".to_string(),
            });
        }

        let accommodation = &self.accommodation;
        non_negative("accommodation.lump_sum", accommodation.lump_sum.junior)?;
        non_negative("accommodation.lump_sum", accommodation.lump_sum.senior)?;
        rooms("accommodation.actual_cost", &accommodation.actual_cost)?;
        rooms("accommodation.private_training", &accommodation.private_training)?;

        let transport = &self.transport;
        non_negative("transport.mileage", transport.mileage.private_car)?;
        non_negative("transport.mileage", transport.mileage.motorcycle)?;
        non_negative(
            "transport.public_fare_caps",
            transport.public_fare_caps.cross_to_bangkok,
        )?;
        non_negative(
            "transport.public_fare_caps",
            transport.public_fare_caps.cross_other_province,
        )?;

        let taxi = &transport.taxi;
        if taxi.bands.is_empty() {
            return Err(EngineError::InvalidRateTable {
                table: "transport.taxi.bands".to_string(),
                message: "at least one band is required".to_string(),
            });
        }
        for (i, band) in taxi.bands.iter().enumerate() {
            if band.length_km <= Decimal::ZERO {
                return Err(EngineError::InvalidRateTable {
                    table: "transport.taxi.bands".to_string(),
                    message: format!("band {} must have a positive length", i + 1),
                });
            }
            non_negative("transport.taxi.bands", band.rate_per_km)?;
        }
        for value in [
            taxi.base_fare,
            taxi.base_distance_km,
            taxi.overflow_rate_per_km,
            taxi.traffic_rate_per_minute,
            taxi.app_booking_fee,
            taxi.airport_surcharge,
        ] {
            non_negative("transport.taxi", value)?;
        }

        for rates in [
            self.training_meals.state_facility,
            self.training_meals.private_facility,
        ] {
            for m in [rates.type_a, rates.type_b] {
                non_negative("training_meals", m.meal)?;
                non_negative("training_meals", m.snack)?;
            }
        }

        Ok(())
    }
}

impl Default for RateSchedule {
    fn default() -> Self {
        Self::thai_2568()
    }
}
