//! Itinerary planning over a network snapshot

pub mod candidates;
pub mod feasibility;
pub mod itinerary;
pub mod journey;
pub mod rules;
pub mod selection;

pub use candidates::{CandidateGenerator, CandidateSet};
pub use feasibility::{FeasibilityEvaluator, weather_permits};
pub use itinerary::{
    Itinerary, ItineraryPair, ItineraryPlanner, PlanningMode, Stop, generate_itinerary,
    parse_city_label, request_itinerary,
};
pub use journey::Journey;
pub use rules::PlanningRules;
pub use selection::{LatitudeSelector, choose};
