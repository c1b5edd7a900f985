//! Weather and range gates for a single leg

use chrono::NaiveDate;
use tracing::trace;

use super::PlanningRules;
use crate::models::{Airport, AirportId, Forecast, ForecastSubject, Operator};
use crate::network::NetworkQuery;

/// Whether a forecast allows departures under `rules`
#[must_use]
pub fn weather_permits(forecast: &Forecast, rules: &PlanningRules) -> bool {
    forecast.temperature <= rules.max_temperature_c
        && forecast.visibility >= rules.min_visibility_km
        && !rules
            .grounding_conditions
            .iter()
            .any(|condition| *condition == forecast.weather_description)
}

/// Decides whether airports are open and legs are flyable
pub struct FeasibilityEvaluator<'a, Q: NetworkQuery> {
    network: &'a Q,
    rules: &'a PlanningRules,
}

impl<'a, Q: NetworkQuery> FeasibilityEvaluator<'a, Q> {
    pub fn new(network: &'a Q, rules: &'a PlanningRules) -> Self {
        Self { network, rules }
    }

    /// Whether `airport` allows departures on `date`. No forecast means closed.
    #[must_use]
    pub fn is_weather_feasible(&self, airport: AirportId, date: NaiveDate) -> bool {
        match self
            .network
            .forecast_for(ForecastSubject::Airport(airport), date)
        {
            Some(forecast) => weather_permits(forecast, self.rules),
            None => {
                trace!("No forecast for {:?} on {}", airport, date);
                false
            }
        }
    }

    /// Whether the operator's airplane is within the global range ceiling
    #[must_use]
    pub fn is_within_ceiling(&self, operator: &Operator) -> bool {
        operator.range_km() <= self.rules.range_ceiling_km
    }

    /// Whether the operator's airplane covers the distance between two airports
    #[must_use]
    pub fn is_in_range(&self, origin: &Airport, destination: &Airport, operator: &Operator) -> bool {
        destination.distance_to(origin) < operator.range_km()
    }

    /// Both range gates for the leg `origin` → `destination`
    #[must_use]
    pub fn is_leg_feasible(&self, origin: &Airport, destination: &Airport, operator: &Operator) -> bool {
        self.is_within_ceiling(operator) && self.is_in_range(origin, destination, operator)
    }
}
