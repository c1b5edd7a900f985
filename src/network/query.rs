//! Read interface of the storage layer as seen by the planner

use chrono::NaiveDate;

use crate::models::{
    Airport, AirportId, City, CityId, EntityId, EntityKey, Forecast, ForecastSubject, Operator,
    OperatorId,
};

/// Point-in-time view of the travel network.
///
/// Every accessor answers absence with `None` or an empty slice; callers in
/// the planner treat missing data as a closed gate rather than a failure.
pub trait NetworkQuery {
    fn city(&self, id: CityId) -> Option<&City>;

    fn airport(&self, id: AirportId) -> Option<&Airport>;

    fn operator(&self, id: OperatorId) -> Option<&Operator>;

    /// The forecast issued for `subject` on `date`, if any
    fn forecast_for(&self, subject: ForecastSubject, date: NaiveDate) -> Option<&Forecast>;

    /// Cities an airport serves
    fn cities_of(&self, airport: AirportId) -> &[CityId];

    /// Airports serving a city
    fn airports_of_city(&self, city: CityId) -> &[AirportId];

    /// Operators flying from and to an airport
    fn operators_of(&self, airport: AirportId) -> &[OperatorId];

    /// Airports an operator flies from and to
    fn airports_of_operator(&self, operator: OperatorId) -> &[AirportId];

    /// Resolve an entity by its unique key
    fn lookup(&self, key: &EntityKey) -> Option<EntityId>;

    /// Resolve a city by name and region label
    fn lookup_city(&self, name: &str, region: &str) -> Option<CityId> {
        match self.lookup(&EntityKey::city(name, region)) {
            Some(EntityId::City(id)) => Some(id),
            _ => None,
        }
    }
}
