//! Transport models.
//!
//! This module defines the vehicle kinds a claimant can list, the contract with
//! the external distance lookup, and the request types for fare calculations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A privately owned vehicle reimbursed by the kilometer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrivateVehicle {
    /// Private car.
    PrivateCar,
    /// Private motorcycle.
    Motorcycle,
}

/// A vehicle reimbursed by the fare actually paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FareVehicle {
    /// Three-wheeled motor taxi.
    TukTuk,
    /// Metered taxi.
    Taxi,
    /// Intercity train.
    Train,
    /// Coach or city bus.
    Bus,
    /// BTS or MRT rapid transit.
    Skytrain,
    /// Public passenger van.
    Van,
    /// Passenger boat.
    Boat,
    /// Scheduled flight.
    Airplane,
}

/// Any vehicle that can appear on a transport line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VehicleKind {
    /// Reimbursed by distance.
    Private(PrivateVehicle),
    /// Reimbursed by fare.
    Fare(FareVehicle),
}

/// The outcome of the external address-to-distance lookup.
///
/// The engine never substitutes a default distance for an unresolved lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DistanceLookup {
    /// The route was found.
    Resolved {
        /// Road distance in kilometers.
        km: Decimal,
    },
    /// The lookup failed.
    Unresolved {
        /// Why the lookup failed.
        reason: String,
    },
}

/// A single leg of travel listed on a claim.
///
/// ```
/// use travel_claim_engine::models::{DistanceLookup, PrivateVehicle, TransportItem};
///
/// let item: TransportItem = serde_json::from_str(r#"{
///     "mode": "self_driven",
///     "vehicle": "private_car",
///     "description": "Office to Khon Kaen provincial hall",
///     "distance": {"status": "resolved", "km": "445"}
/// }"#).unwrap();
///
/// match item {
///     TransportItem::SelfDriven { vehicle, .. } => assert_eq!(vehicle, PrivateVehicle::PrivateCar),
///     _ => panic!("expected a self-driven leg"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TransportItem {
    /// A leg driven in the traveler's own vehicle.
    SelfDriven {
        /// The vehicle used.
        vehicle: PrivateVehicle,
        /// Route description, e.g. origin and destination.
        #[serde(default)]
        description: String,
        /// The distance lookup outcome.
        distance: DistanceLookup,
    },
    /// A leg paid as a fare.
    Fare {
        /// The vehicle used.
        vehicle: FareVehicle,
        /// Route description, e.g. origin and destination.
        #[serde(default)]
        description: String,
        /// The fare paid.
        cost: Decimal,
    },
}

/// Route classes that determine the fare cap for public transport and taxis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublicRouteType {
    /// Within a single province.
    IntraProvince,
    /// Between Bangkok and an adjacent province.
    CrossToBangkok,
    /// Between two provinces outside Bangkok.
    CrossOtherProvince,
}

/// A request to check a public-transport fare against its route cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicFareRequest {
    /// The class of route travelled.
    pub route_type: PublicRouteType,
    /// The fare actually paid.
    pub actual_cost: Decimal,
}

/// A request to estimate a metered taxi fare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxiFareRequest {
    /// Trip distance in kilometers.
    pub distance_km: Decimal,
    /// Minutes spent stationary or crawling in traffic.
    #[serde(default)]
    pub traffic_minutes: u32,
    /// Whether the taxi was booked through an app.
    #[serde(default)]
    pub app_booking: bool,
    /// Whether the trip started or ended at an airport taxi stand.
    #[serde(default)]
    pub airport: bool,
}
