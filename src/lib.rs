//! `TravelPlanner` - weather and range gated flight itineraries
//!
//! This library plans day-by-day itineraries across a network of cities,
//! airports and operators, moving only on days when the departure airport
//! is open and an operator's airplane can make the leg.

pub mod config;
pub mod error;
pub mod geo;
pub mod models;
pub mod network;
pub mod planner;

// Re-export core types for public API
pub use self::config::TravelPlannerConfig;
pub use error::TravelPlannerError;
pub use models::{
    Airplane, Airport, AirportId, City, CityId, Coordinates, Entity, EntityId, EntityKey,
    Forecast, ForecastSubject, Operator, OperatorId,
};
pub use network::{Network, NetworkBuilder, NetworkDocument, NetworkQuery};
pub use planner::{
    Itinerary, ItineraryPair, ItineraryPlanner, Journey, PlanningMode, PlanningRules, Stop,
    generate_itinerary, request_itinerary,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TravelPlannerError>;
